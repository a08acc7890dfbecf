use async_trait::async_trait;
use bytes::Bytes;
use conneg_core::{MediaType, Negotiable};
use serde_json::Value;

use crate::parser::{ParseError, ParseResult, Parser};

/// JSON parser for `application/json` request bodies.
#[derive(Debug, Clone)]
pub struct JSONParser {
	/// Whether an empty body is accepted (and parses as null).
	pub allow_empty: bool,
}

impl Default for JSONParser {
	fn default() -> Self {
		Self { allow_empty: false }
	}
}

impl JSONParser {
	/// Creates a parser that rejects empty bodies.
	///
	/// # Examples
	///
	/// ```
	/// use conneg_parsers::JSONParser;
	///
	/// let parser = JSONParser::new();
	/// assert!(!parser.allow_empty);
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets whether empty bodies are accepted.
	pub fn allow_empty(mut self, allow: bool) -> Self {
		self.allow_empty = allow;
		self
	}
}

impl Negotiable for JSONParser {
	fn media_type(&self) -> MediaType {
		MediaType::new("application", "json")
	}
}

#[async_trait]
impl Parser for JSONParser {
	async fn parse(&self, body: Bytes, _media_type: &MediaType) -> ParseResult<Value> {
		if body.is_empty() {
			if self.allow_empty {
				return Ok(Value::Null);
			}
			return Err(ParseError::EmptyBody);
		}

		serde_json::from_slice(&body).map_err(|e| ParseError::Json(e.to_string()))
	}
}
