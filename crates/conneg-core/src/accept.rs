//! Accept header parsing

use crate::media_type::{MediaType, WILDCARD};

/// An Accept header parsed into groups of equal precedence.
///
/// Groups are ordered from most to least specific; order within a group is
/// not significant. Declared `q` values are retained on the media types but
/// deliberately do not affect the grouping: equal-specificity entries tie,
/// and server order breaks the tie during selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptHeader {
	/// Precedence groups, highest precedence first.
	pub groups: Vec<Vec<MediaType>>,
}

impl AcceptHeader {
	/// Parses an Accept header into precedence groups. Never fails: malformed
	/// tokens are dropped, matching permissive HTTP client behavior.
	///
	/// An empty header, or one with no parsable token, yields a single `*/*`
	/// group.
	///
	/// # Examples
	///
	/// ```
	/// use conneg_core::{AcceptHeader, MediaType};
	///
	/// let accept = AcceptHeader::parse("*/*, application/json");
	/// assert_eq!(accept.groups.len(), 2);
	/// assert_eq!(accept.groups[0], vec![MediaType::new("application", "json")]);
	/// assert_eq!(accept.groups[1], vec![MediaType::new("*", "*")]);
	/// ```
	pub fn parse(header: &str) -> Self {
		let mut buckets: [Vec<MediaType>; 4] = Default::default();
		for token in header.split(',') {
			let Ok(media_type) = MediaType::parse(token) else {
				continue;
			};
			let bucket = &mut buckets[3 - media_type.precedence() as usize];
			if !bucket.contains(&media_type) {
				bucket.push(media_type);
			}
		}

		let groups: Vec<Vec<MediaType>> =
			buckets.into_iter().filter(|group| !group.is_empty()).collect();
		if groups.is_empty() {
			return Self::any();
		}
		Self { groups }
	}

	/// A header accepting anything: one group containing `*/*`.
	///
	/// # Examples
	///
	/// ```
	/// use conneg_core::AcceptHeader;
	///
	/// assert_eq!(AcceptHeader::parse(""), AcceptHeader::any());
	/// ```
	pub fn any() -> Self {
		Self {
			groups: vec![vec![MediaType::new(WILDCARD, WILDCARD)]],
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_malformed_tokens_are_dropped() {
		let accept = AcceptHeader::parse("gibberish, application/json, also=bad");
		assert_eq!(accept.groups.len(), 1);
		assert_eq!(accept.groups[0], vec![MediaType::new("application", "json")]);
	}

	#[rstest]
	#[case("")]
	#[case("   ")]
	#[case("not-a-type")]
	fn test_unusable_header_accepts_anything(#[case] header: &str) {
		assert_eq!(AcceptHeader::parse(header), AcceptHeader::any());
	}

	#[rstest]
	fn test_duplicate_tokens_collapse() {
		let accept = AcceptHeader::parse("text/html, text/html");
		assert_eq!(accept.groups, vec![vec![MediaType::new("text", "html")]]);
	}

	#[rstest]
	fn test_specificity_orders_groups() {
		let accept = AcceptHeader::parse("*/*, text/*, text/html; level=1, text/html");
		let ranks: Vec<u8> = accept
			.groups
			.iter()
			.map(|group| group[0].precedence())
			.collect();
		assert_eq!(ranks, vec![3, 2, 1, 0]);
	}
}
