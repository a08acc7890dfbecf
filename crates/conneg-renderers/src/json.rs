use async_trait::async_trait;
use bytes::Bytes;
use conneg_core::{MediaType, Negotiable};
use serde::Serialize;
use serde_json::Value;

use crate::renderer::{RenderError, RenderResult, Renderer};

/// Indent widths beyond this are clamped rather than honored.
const MAX_INDENT: usize = 8;

/// JSON renderer for `application/json` responses.
///
/// Output is compact unless the resolved media type carries an `indent`
/// parameter, in which case the value pretty-prints with that many spaces.
#[derive(Debug, Clone, Default)]
pub struct JSONRenderer;

impl JSONRenderer {
	/// Creates a JSON renderer.
	pub fn new() -> Self {
		Self
	}
}

impl Negotiable for JSONRenderer {
	fn media_type(&self) -> MediaType {
		MediaType::new("application", "json")
	}
}

#[async_trait]
impl Renderer for JSONRenderer {
	fn format(&self) -> Option<&str> {
		Some("json")
	}

	async fn render(&self, data: &Value, media_type: &MediaType) -> RenderResult<Bytes> {
		let indent = media_type
			.param("indent")
			.and_then(|value| value.parse::<usize>().ok())
			.filter(|width| *width > 0);

		let bytes = match indent {
			Some(width) => {
				let indent = " ".repeat(width.min(MAX_INDENT));
				let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
				let mut buffer = Vec::new();
				let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
				data.serialize(&mut serializer)
					.map_err(|e| RenderError::Serialization(e.to_string()))?;
				buffer
			}
			None => {
				serde_json::to_vec(data).map_err(|e| RenderError::Serialization(e.to_string()))?
			}
		};
		Ok(Bytes::from(bytes))
	}
}
