use async_trait::async_trait;
use bytes::Bytes;
use conneg_core::{MediaType, Negotiable};
use serde_json::Value;

use crate::renderer::{RenderError, RenderResult, Renderer};

/// HTML renderer for `text/html` responses.
///
/// Expects pre-rendered markup as a string; anything else is a render error
/// rather than something to guess an HTML representation for.
#[derive(Debug, Clone, Default)]
pub struct HTMLRenderer;

impl HTMLRenderer {
	/// Creates an HTML renderer.
	pub fn new() -> Self {
		Self
	}
}

impl Negotiable for HTMLRenderer {
	fn media_type(&self) -> MediaType {
		MediaType::new("text", "html")
	}
}

#[async_trait]
impl Renderer for HTMLRenderer {
	fn charset(&self) -> Option<&str> {
		Some("utf-8")
	}

	fn format(&self) -> Option<&str> {
		Some("html")
	}

	async fn render(&self, data: &Value, _media_type: &MediaType) -> RenderResult<Bytes> {
		match data {
			Value::String(markup) => Ok(Bytes::from(markup.clone())),
			_ => Err(RenderError::UnsupportedData(
				"HTML renderer expects string data".to_string(),
			)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[tokio::test]
	async fn test_html_renderer_passes_markup_through() {
		let renderer = HTMLRenderer::new();
		let media_type = renderer.media_type();

		let body = renderer.render(&json!("<p>hi</p>"), &media_type).await.unwrap();
		assert_eq!(body, Bytes::from("<p>hi</p>"));
	}

	#[tokio::test]
	async fn test_html_renderer_rejects_non_strings() {
		let renderer = HTMLRenderer::new();
		let media_type = renderer.media_type();

		let result = renderer.render(&json!({"a": 1}), &media_type).await;
		assert!(matches!(result, Err(RenderError::UnsupportedData(_))));
	}
}
