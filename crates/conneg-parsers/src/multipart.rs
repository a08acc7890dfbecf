use async_trait::async_trait;
use bytes::Bytes;
use conneg_core::{MediaType, Negotiable};
use futures_util::future::ready;
use futures_util::stream::once;
use multer::Multipart;
use serde_json::{Map, Value};

use crate::parser::{ParseError, ParseResult, Parser};

/// Multipart parser for `multipart/form-data` request bodies.
///
/// The boundary comes from the negotiated media type's `boundary` parameter.
/// Text fields and file payloads both land in one JSON object, keyed by the
/// part's `Content-Disposition` name (falling back to its filename). File
/// payloads that are not valid UTF-8 are carried lossily, since the result
/// is a JSON value.
#[derive(Debug, Clone, Default)]
pub struct MultiPartParser;

impl MultiPartParser {
	/// Creates a multipart parser.
	pub fn new() -> Self {
		Self
	}
}

impl Negotiable for MultiPartParser {
	fn media_type(&self) -> MediaType {
		MediaType::new("multipart", "form-data")
	}
}

#[async_trait]
impl Parser for MultiPartParser {
	async fn parse(&self, body: Bytes, media_type: &MediaType) -> ParseResult<Value> {
		let boundary = media_type.param("boundary").ok_or(ParseError::MissingBoundary)?;

		// multer consumes a stream; the already-buffered body becomes a
		// one-item stream.
		let stream = once(ready(Ok::<_, std::io::Error>(body)));
		let mut multipart = Multipart::new(stream, boundary);

		let mut fields = Map::new();
		while let Some(field) = multipart
			.next_field()
			.await
			.map_err(|e| ParseError::Multipart(e.to_string()))?
		{
			let Some(name) = field.name().or_else(|| field.file_name()).map(str::to_string)
			else {
				return Err(ParseError::Multipart(
					"part missing Content-Disposition name".to_string(),
				));
			};
			let data = field
				.bytes()
				.await
				.map_err(|e| ParseError::Multipart(e.to_string()))?;
			let value = String::from_utf8_lossy(&data).into_owned();
			fields.insert(name, Value::String(value));
		}

		Ok(Value::Object(fields))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn multipart_type(boundary: &str) -> MediaType {
		MediaType::new("multipart", "form-data").with_param("boundary", boundary)
	}

	fn body(boundary: &str) -> Bytes {
		let text = format!(
			"--{b}\r\n\
			 Content-Disposition: form-data; name=\"field\"\r\n\
			 \r\n\
			 value\r\n\
			 --{b}\r\n\
			 Content-Disposition: form-data; name=\"upload\"; filename=\"a.txt\"\r\n\
			 Content-Type: text/plain\r\n\
			 \r\n\
			 file contents\r\n\
			 --{b}--\r\n",
			b = boundary
		);
		Bytes::from(text)
	}

	#[tokio::test]
	async fn test_multipart_parser_fields_and_files() {
		let parser = MultiPartParser::new();
		let data = parser
			.parse(body("abc123"), &multipart_type("abc123"))
			.await
			.unwrap();

		assert_eq!(data["field"], "value");
		assert_eq!(data["upload"], "file contents");
	}

	#[tokio::test]
	async fn test_multipart_parser_missing_boundary() {
		let parser = MultiPartParser::new();
		let media_type = MediaType::new("multipart", "form-data");

		let result = parser.parse(body("abc123"), &media_type).await;
		assert_eq!(result, Err(ParseError::MissingBoundary));
	}

	#[tokio::test]
	async fn test_multipart_parser_broken_part() {
		let parser = MultiPartParser::new();
		let body = Bytes::from("--abc123\r\nno blank line--abc123--\r\n");

		let result = parser.parse(body, &multipart_type("abc123")).await;
		assert!(matches!(result, Err(ParseError::Multipart(_))));
	}

	#[tokio::test]
	async fn test_multipart_parser_binary_file_payload() {
		let parser = MultiPartParser::new();
		let mut raw = Vec::new();
		raw.extend_from_slice(
			b"--abc123\r\n\
			Content-Disposition: form-data; name=\"upload\"; filename=\"a.bin\"\r\n\
			Content-Type: application/octet-stream\r\n\
			\r\n",
		);
		raw.extend_from_slice(&[0xFF, 0xFE, 0x00, 0x01]);
		raw.extend_from_slice(b"\r\n--abc123--\r\n");

		let data = parser
			.parse(Bytes::from(raw), &multipart_type("abc123"))
			.await
			.unwrap();
		assert_eq!(data["upload"], "\u{FFFD}\u{FFFD}\u{0}\u{1}");
	}

	#[tokio::test]
	async fn test_multipart_parser_delimiter_text_inside_value() {
		// "--abc" mid-value is content; only CRLF-prefixed delimiters split.
		let parser = MultiPartParser::new();
		let body = Bytes::from(
			"--abc\r\n\
			 Content-Disposition: form-data; name=\"field\"\r\n\
			 \r\n\
			 see --abc in text\r\n\
			 --abc--\r\n",
		);

		let data = parser.parse(body, &multipart_type("abc")).await.unwrap();
		assert_eq!(data["field"], "see --abc in text");
	}
}
