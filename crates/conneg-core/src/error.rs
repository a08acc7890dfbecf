//! Error types for content negotiation.

use thiserror::Error;

/// Errors surfaced by the negotiation core.
///
/// These are typed failures for the request-handling boundary to translate
/// into its own representation (commonly HTTP 415 and 406); no status codes
/// are attached here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NegotiationError {
	/// A media type string failed the `type/subtype[;params]` grammar.
	///
	/// Raised only by direct [`MediaType::parse`](crate::MediaType::parse)
	/// calls; Accept header parsing drops malformed tokens silently instead.
	#[error("Malformed media type: {0}")]
	MalformedMediaType(String),

	/// No parser declares the main/sub type of the request body.
	#[error("Unsupported media type in the request Content-Type header.")]
	UnsupportedMediaType,

	/// No renderer satisfies any tier of the client's Accept header.
	#[error("Could not satisfy the request Accept header.")]
	NotAcceptable,
}

/// Result type alias for negotiation operations.
pub type NegotiationResult<T> = Result<T, NegotiationError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_malformed_media_type_message() {
		let error = NegotiationError::MalformedMediaType("gibberish".to_string());
		assert_eq!(error.to_string(), "Malformed media type: gibberish");
	}

	#[rstest]
	fn test_boundary_facing_messages() {
		assert_eq!(
			NegotiationError::UnsupportedMediaType.to_string(),
			"Unsupported media type in the request Content-Type header."
		);
		assert_eq!(
			NegotiationError::NotAcceptable.to_string(),
			"Could not satisfy the request Accept header."
		);
	}
}
