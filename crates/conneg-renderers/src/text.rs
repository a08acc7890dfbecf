use async_trait::async_trait;
use bytes::Bytes;
use conneg_core::{MediaType, Negotiable};
use serde_json::Value;

use crate::renderer::{RenderError, RenderResult, Renderer};

/// Plain text renderer for `text/plain` responses.
///
/// Strings pass through verbatim; any other value renders as its JSON text.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer;

impl TextRenderer {
	/// Creates a text renderer.
	pub fn new() -> Self {
		Self
	}
}

impl Negotiable for TextRenderer {
	fn media_type(&self) -> MediaType {
		MediaType::new("text", "plain")
	}
}

#[async_trait]
impl Renderer for TextRenderer {
	fn charset(&self) -> Option<&str> {
		Some("utf-8")
	}

	fn format(&self) -> Option<&str> {
		Some("txt")
	}

	async fn render(&self, data: &Value, _media_type: &MediaType) -> RenderResult<Bytes> {
		let text = match data {
			Value::String(s) => s.clone(),
			other => serde_json::to_string(other)
				.map_err(|e| RenderError::Serialization(e.to_string()))?,
		};
		Ok(Bytes::from(text))
	}
}
