use std::sync::Arc;

use bytes::Bytes;
use conneg_core::Negotiable;
use conneg_renderers::{CSVRenderer, HTMLRenderer, JSONRenderer, Renderer, TextRenderer};
use serde_json::json;

fn all_renderers() -> Vec<Arc<dyn Renderer>> {
	vec![
		Arc::new(JSONRenderer::new()),
		Arc::new(TextRenderer::new()),
		Arc::new(CSVRenderer::new()),
		Arc::new(HTMLRenderer::new()),
	]
}

#[test]
fn test_renderers_declare_format_suffixes() {
	let renderers = all_renderers();
	let formats: Vec<Option<&str>> = renderers.iter().map(|r| r.format()).collect();
	assert_eq!(
		formats,
		vec![Some("json"), Some("txt"), Some("csv"), Some("html")]
	);
}

#[test]
fn test_text_renderers_declare_a_charset() {
	assert_eq!(JSONRenderer::new().charset(), None);
	assert_eq!(TextRenderer::new().charset(), Some("utf-8"));
	assert_eq!(CSVRenderer::new().charset(), Some("utf-8"));
	assert_eq!(HTMLRenderer::new().charset(), Some("utf-8"));
}

#[tokio::test]
async fn test_same_data_renders_per_media_type() {
	let data = json!([{"a": 1, "b": 2}]);

	let json_renderer = JSONRenderer::new();
	let body = json_renderer
		.render(&data, &json_renderer.media_type())
		.await
		.unwrap();
	assert_eq!(body, Bytes::from(r#"[{"a":1,"b":2}]"#));

	let csv_renderer = CSVRenderer::new();
	let body = csv_renderer
		.render(&data, &csv_renderer.media_type())
		.await
		.unwrap();
	assert_eq!(body, Bytes::from("a,b\n1,2\n"));

	let text_renderer = TextRenderer::new();
	let body = text_renderer
		.render(&data, &text_renderer.media_type())
		.await
		.unwrap();
	assert_eq!(body, Bytes::from(r#"[{"a":1,"b":2}]"#));
}
