//! Codec selection against Content-Type and Accept headers

use std::sync::Arc;

use tracing::debug;

use crate::accept::AcceptHeader;
use crate::error::{NegotiationError, NegotiationResult};
use crate::media_type::{MediaType, WILDCARD};

/// The one capability the negotiation core requires of a codec: a single
/// declared media type. Parsers and renderers implement this.
pub trait Negotiable {
	/// The media type this codec reads or writes.
	fn media_type(&self) -> MediaType;
}

impl Negotiable for MediaType {
	/// A bare media type negotiates as itself, which keeps the selection
	/// algorithms usable without a codec layer.
	fn media_type(&self) -> MediaType {
		self.clone()
	}
}

/// A content negotiation strategy.
///
/// Both operations take candidates in server-declared preference order and
/// return the winning codec paired with the resolved media type, which the
/// caller typically writes back as the response `Content-Type`.
pub trait Negotiation {
	/// Selects the parser for a request body from its `Content-Type` header.
	fn select_parser<T: Negotiable + ?Sized>(
		&self,
		parsers: &[Arc<T>],
		content_type: Option<&str>,
	) -> NegotiationResult<(Arc<T>, MediaType)>;

	/// Selects the renderer for a response body from the `Accept` header.
	fn select_renderer<T: Negotiable + ?Sized>(
		&self,
		renderers: &[Arc<T>],
		accept: Option<&str>,
	) -> NegotiationResult<(Arc<T>, MediaType)>;
}

/// The default negotiation strategy.
///
/// Request-body selection is a single exact match: the client asserts one
/// wire format and the server must support exactly that `type/subtype`.
/// Response selection is a ranked search across the client's precedence
/// tiers, with server order breaking ties within a tier, so selection is
/// deterministic and independent of iteration order.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use conneg_core::{DefaultNegotiation, MediaType, Negotiable, Negotiation};
///
/// struct Json;
///
/// impl Negotiable for Json {
///     fn media_type(&self) -> MediaType {
///         MediaType::new("application", "json")
///     }
/// }
///
/// let negotiation = DefaultNegotiation::new();
/// let renderers = vec![Arc::new(Json)];
/// let (_, media_type) = negotiation.select_renderer(&renderers, Some("*/*")).unwrap();
/// assert_eq!(media_type.to_string(), "application/json");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultNegotiation;

impl DefaultNegotiation {
	/// Creates the default strategy.
	pub fn new() -> Self {
		Self
	}
}

impl Negotiation for DefaultNegotiation {
	/// If the Content-Type header is absent or blank, the first candidate
	/// wins with its own declared type. Otherwise the header is parsed as a
	/// single media type (malformed input propagates as
	/// [`NegotiationError::MalformedMediaType`]) and the first candidate
	/// declaring the same `type/subtype` wins, paired with the parsed client
	/// type so parameters such as a multipart `boundary` reach the parser.
	fn select_parser<T: Negotiable + ?Sized>(
		&self,
		parsers: &[Arc<T>],
		content_type: Option<&str>,
	) -> NegotiationResult<(Arc<T>, MediaType)> {
		let first = parsers.first().ok_or(NegotiationError::UnsupportedMediaType)?;

		let Some(content_type) = content_type.map(str::trim).filter(|s| !s.is_empty()) else {
			return Ok((Arc::clone(first), first.media_type()));
		};

		let client = MediaType::parse(content_type)?;
		for parser in parsers {
			if parser.media_type().full_type() == client.full_type() {
				debug!(media_type = %client, "selected parser for request body");
				return Ok((Arc::clone(parser), client));
			}
		}

		debug!(content_type, "no parser declares the request content type");
		Err(NegotiationError::UnsupportedMediaType)
	}

	/// If the Accept header is absent or blank, the first candidate wins with
	/// its own declared type (server preference is the explicit default).
	/// Otherwise each precedence group is tried in order, and within a group
	/// the candidates in server order; the first candidate whose declared
	/// type satisfies an accepted entry wins, paired with the resolved type.
	fn select_renderer<T: Negotiable + ?Sized>(
		&self,
		renderers: &[Arc<T>],
		accept: Option<&str>,
	) -> NegotiationResult<(Arc<T>, MediaType)> {
		let first = renderers.first().ok_or(NegotiationError::NotAcceptable)?;

		let Some(accept) = accept.map(str::trim).filter(|s| !s.is_empty()) else {
			return Ok((Arc::clone(first), first.media_type()));
		};

		for group in &AcceptHeader::parse(accept).groups {
			for renderer in renderers {
				let declared = renderer.media_type();
				for accepted in group {
					if declared.satisfies(accepted) {
						let resolved = resolve(&declared, accepted);
						debug!(media_type = %resolved, "selected renderer");
						return Ok((Arc::clone(renderer), resolved));
					}
				}
			}
		}

		debug!(accept, "no renderer satisfies any tier of the Accept header");
		Err(NegotiationError::NotAcceptable)
	}
}

/// Concretizes a matched accept entry against the winning candidate:
/// wildcards fall back to the candidate's main/sub type, and the candidate's
/// parameters are kept, overlaid with the entry's non-q parameters.
fn resolve(candidate: &MediaType, accepted: &MediaType) -> MediaType {
	let main_type = if accepted.main_type == WILDCARD {
		&candidate.main_type
	} else {
		&accepted.main_type
	};
	let sub_type = if accepted.sub_type == WILDCARD {
		&candidate.sub_type
	} else {
		&accepted.sub_type
	};

	let mut resolved = MediaType::new(main_type, sub_type);
	resolved.params = candidate.params.clone();
	for (key, value) in &accepted.params {
		if key != "q" {
			resolved.params.insert(key.clone(), value.clone());
		}
	}
	resolved
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("*/*", "application/json")]
	#[case("application/*", "application/json")]
	#[case("application/json", "application/json")]
	fn test_resolve_fills_wildcards(#[case] accepted: &str, #[case] expected: &str) {
		let candidate = MediaType::new("application", "json");
		let accepted = MediaType::parse(accepted).unwrap();
		assert_eq!(resolve(&candidate, &accepted).to_string(), expected);
	}

	#[rstest]
	fn test_resolve_drops_q_but_keeps_other_params() {
		let candidate = MediaType::parse("application/json; version=1.0").unwrap();
		let accepted = MediaType::parse("application/json; version=1.0; q=0.5").unwrap();
		let resolved = resolve(&candidate, &accepted);
		assert_eq!(resolved.param("version"), Some("1.0"));
		assert_eq!(resolved.param("q"), None);
	}

	#[rstest]
	fn test_empty_candidate_lists_fail() {
		let negotiation = DefaultNegotiation::new();
		let none: Vec<Arc<MediaType>> = Vec::new();
		assert_eq!(
			negotiation.select_parser(&none, None).unwrap_err(),
			NegotiationError::UnsupportedMediaType
		);
		assert_eq!(
			negotiation.select_renderer(&none, None).unwrap_err(),
			NegotiationError::NotAcceptable
		);
	}
}
