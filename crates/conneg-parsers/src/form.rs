use async_trait::async_trait;
use bytes::Bytes;
use conneg_core::{MediaType, Negotiable};
use serde_json::map::Entry;
use serde_json::{Map, Value};

use crate::parser::{ParseError, ParseResult, Parser};

/// Form parser for `application/x-www-form-urlencoded` request bodies.
///
/// Decodes into a JSON object; repeated keys collapse into an array.
#[derive(Debug, Clone, Default)]
pub struct FormParser;

impl FormParser {
	/// Creates a form parser.
	pub fn new() -> Self {
		Self
	}
}

impl Negotiable for FormParser {
	fn media_type(&self) -> MediaType {
		MediaType::new("application", "x-www-form-urlencoded")
	}
}

#[async_trait]
impl Parser for FormParser {
	async fn parse(&self, body: Bytes, _media_type: &MediaType) -> ParseResult<Value> {
		let pairs: Vec<(String, String)> =
			serde_urlencoded::from_bytes(&body).map_err(|e| ParseError::Form(e.to_string()))?;

		let mut fields = Map::new();
		for (key, value) in pairs {
			match fields.entry(key) {
				Entry::Vacant(slot) => {
					slot.insert(Value::String(value));
				}
				Entry::Occupied(mut slot) => match slot.get_mut() {
					Value::Array(items) => items.push(Value::String(value)),
					existing => {
						let first = existing.take();
						*existing = Value::Array(vec![first, Value::String(value)]);
					}
				},
			}
		}
		Ok(Value::Object(fields))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn form_type() -> MediaType {
		MediaType::new("application", "x-www-form-urlencoded")
	}

	#[tokio::test]
	async fn test_form_parser_simple() {
		let parser = FormParser::new();
		let body = Bytes::from("name=test&value=123");

		let data = parser.parse(body, &form_type()).await.unwrap();
		assert_eq!(data["name"], "test");
		assert_eq!(data["value"], "123");
	}

	#[tokio::test]
	async fn test_form_parser_percent_decoding() {
		let parser = FormParser::new();
		let body = Bytes::from("note=a+b%26c");

		let data = parser.parse(body, &form_type()).await.unwrap();
		assert_eq!(data["note"], "a b&c");
	}

	#[tokio::test]
	async fn test_form_parser_repeated_keys() {
		let parser = FormParser::new();
		let body = Bytes::from("tag=a&tag=b&tag=c");

		let data = parser.parse(body, &form_type()).await.unwrap();
		assert_eq!(data["tag"], serde_json::json!(["a", "b", "c"]));
	}

	#[tokio::test]
	async fn test_form_parser_empty_body() {
		let parser = FormParser::new();
		let data = parser.parse(Bytes::new(), &form_type()).await.unwrap();
		assert_eq!(data, Value::Object(Map::new()));
	}
}
