//! Media type parsing and matching

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{NegotiationError, NegotiationResult};

/// The wildcard token used in media type ranges (`*/*`, `type/*`).
pub const WILDCARD: &str = "*";

/// An immutable media type expression: `type/subtype` plus optional parameters.
///
/// Parameters are stored with case-insensitive (lower-cased) keys in a sorted
/// map, which makes the canonical [`Display`](fmt::Display) form deterministic.
/// The `q` parameter is retained for display but is ignored by
/// [`satisfies`](MediaType::satisfies) and [`precedence`](MediaType::precedence).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType {
	/// Main type, e.g. `application`, or `*`.
	pub main_type: String,
	/// Sub type, e.g. `json`, or `*`.
	pub sub_type: String,
	/// Parameters, keyed by lower-cased name.
	pub params: BTreeMap<String, String>,
}

impl MediaType {
	/// Creates a media type with no parameters.
	///
	/// # Examples
	///
	/// ```
	/// use conneg_core::MediaType;
	///
	/// let json = MediaType::new("application", "json");
	/// assert_eq!(json.full_type(), "application/json");
	/// assert!(json.params.is_empty());
	/// ```
	pub fn new(main_type: impl Into<String>, sub_type: impl Into<String>) -> Self {
		Self {
			main_type: main_type.into(),
			sub_type: sub_type.into(),
			params: BTreeMap::new(),
		}
	}

	/// Adds a parameter, returning the modified media type.
	///
	/// # Examples
	///
	/// ```
	/// use conneg_core::MediaType;
	///
	/// let versioned = MediaType::new("application", "json").with_param("version", "1.0");
	/// assert_eq!(versioned.param("version"), Some("1.0"));
	/// ```
	pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.params.insert(key.into().to_lowercase(), value.into());
		self
	}

	/// Parses a media type expression such as `application/json; version=1.0`.
	///
	/// The `type/subtype` part is trimmed and lower-cased. Parameter segments
	/// are separated by `;` or `,` (the canonical display form joins them with
	/// `,`, so both must re-parse); each segment splits on the first `=`, with
	/// keys lower-cased and values unquoted when `"`-surrounded.
	///
	/// Fails with [`NegotiationError::MalformedMediaType`] when the text does
	/// not contain exactly two non-empty `/`-separated segments, or when a
	/// parameter segment has no `=`.
	///
	/// # Examples
	///
	/// ```
	/// use conneg_core::MediaType;
	///
	/// let media = MediaType::parse("Application/JSON; Version=1.0").unwrap();
	/// assert_eq!(media.full_type(), "application/json");
	/// assert_eq!(media.param("version"), Some("1.0"));
	///
	/// assert!(MediaType::parse("application").is_err());
	/// assert!(MediaType::parse("application/json; version").is_err());
	/// ```
	pub fn parse(text: &str) -> NegotiationResult<Self> {
		let malformed = || NegotiationError::MalformedMediaType(text.trim().to_string());

		let (full_type, param_text) = match text.split_once(';') {
			Some((full_type, param_text)) => (full_type, param_text),
			None => (text, ""),
		};

		let full_type = full_type.trim().to_lowercase();
		let (main_type, sub_type) = full_type.split_once('/').ok_or_else(malformed)?;
		if main_type.is_empty() || sub_type.is_empty() || sub_type.contains('/') {
			return Err(malformed());
		}

		let mut params = BTreeMap::new();
		for segment in param_text.split([';', ',']) {
			let segment = segment.trim();
			if segment.is_empty() {
				continue;
			}
			let (key, value) = segment.split_once('=').ok_or_else(malformed)?;
			let key = key.trim().to_lowercase();
			if key.is_empty() {
				return Err(malformed());
			}
			params.insert(key, unquote(value.trim()).to_string());
		}

		Ok(Self {
			main_type: main_type.to_string(),
			sub_type: sub_type.to_string(),
			params,
		})
	}

	/// Returns `type/subtype` without parameters.
	pub fn full_type(&self) -> String {
		format!("{}/{}", self.main_type, self.sub_type)
	}

	/// Returns the value of a parameter, if present.
	pub fn param(&self, key: &str) -> Option<&str> {
		self.params.get(key).map(String::as_str)
	}

	/// Specificity rank of this media type.
	///
	/// - 0: `*/*`
	/// - 1: `type/*`
	/// - 2: `type/subtype` with no parameters other than `q`
	/// - 3: `type/subtype` with at least one non-q parameter
	///
	/// # Examples
	///
	/// ```
	/// use conneg_core::MediaType;
	///
	/// assert_eq!(MediaType::parse("*/*").unwrap().precedence(), 0);
	/// assert_eq!(MediaType::parse("text/*").unwrap().precedence(), 1);
	/// assert_eq!(MediaType::parse("text/html; q=0.5").unwrap().precedence(), 2);
	/// assert_eq!(MediaType::parse("text/html; level=1").unwrap().precedence(), 3);
	/// ```
	pub fn precedence(&self) -> u8 {
		if self.main_type == WILDCARD {
			0
		} else if self.sub_type == WILDCARD {
			1
		} else if self.params.keys().all(|key| key == "q") {
			2
		} else {
			3
		}
	}

	/// Returns `true` if this media type is compatible with and at least as
	/// specific as `other`.
	///
	/// Every non-q parameter of `other` must be present here with an equal
	/// value; extra parameters on this side are fine. Main and sub types must
	/// match unless either side holds the wildcard.
	///
	/// # Examples
	///
	/// ```
	/// use conneg_core::MediaType;
	///
	/// let versioned = MediaType::parse("application/json; version=1.0").unwrap();
	/// let plain = MediaType::parse("application/json").unwrap();
	///
	/// assert!(versioned.satisfies(&plain));
	/// assert!(!plain.satisfies(&versioned));
	/// ```
	pub fn satisfies(&self, other: &MediaType) -> bool {
		for (key, value) in &other.params {
			if key != "q" && self.param(key) != Some(value.as_str()) {
				return false;
			}
		}

		if self.sub_type != WILDCARD && other.sub_type != WILDCARD && self.sub_type != other.sub_type
		{
			return false;
		}

		if self.main_type != WILDCARD
			&& other.main_type != WILDCARD
			&& self.main_type != other.main_type
		{
			return false;
		}

		true
	}
}

impl fmt::Display for MediaType {
	/// Canonical form: parameters sorted by key, values always double-quoted.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.main_type, self.sub_type)?;
		for (index, (key, value)) in self.params.iter().enumerate() {
			let separator = if index == 0 { "; " } else { ", " };
			write!(f, "{separator}{key}=\"{value}\"")?;
		}
		Ok(())
	}
}

impl FromStr for MediaType {
	type Err = NegotiationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

fn unquote(value: &str) -> &str {
	value
		.strip_prefix('"')
		.and_then(|inner| inner.strip_suffix('"'))
		.unwrap_or(value)
}
