//! Per-boundary negotiation configuration.
//!
//! Instead of ambient process-wide codec registries, the supported parser
//! and renderer lists live in an explicit [`NegotiationConfig`] built once
//! at request-boundary construction time and passed to the entry points.

use std::fmt;
use std::sync::Arc;

use conneg_core::{DefaultNegotiation, MediaType, Negotiable, Negotiation, NegotiationResult};
use conneg_parsers::{FormParser, JSONParser, MultiPartParser, Parser};
use conneg_renderers::{CSVRenderer, JSONRenderer, Renderer, TextRenderer};

/// The codecs a boundary supports, in server preference order, plus the
/// negotiation strategy used to select among them.
///
/// The first entry of each list is the server default: it wins whenever the
/// client does not state a Content-Type or Accept header.
///
/// # Examples
///
/// ```
/// use conneg::{NegotiationConfig, Renderer};
///
/// let config = NegotiationConfig::default();
/// let (renderer, media_type) = config.select_renderer(Some("*/*")).unwrap();
/// assert_eq!(media_type.to_string(), "application/json");
/// assert_eq!(renderer.format(), Some("json"));
/// ```
#[derive(Clone)]
pub struct NegotiationConfig {
	/// Parsers for request bodies, server preference order.
	pub default_parsers: Vec<Arc<dyn Parser>>,
	/// Renderers for response bodies, server preference order.
	pub default_renderers: Vec<Arc<dyn Renderer>>,
	negotiation: DefaultNegotiation,
}

impl NegotiationConfig {
	/// Creates a configuration from explicit codec lists.
	pub fn new(parsers: Vec<Arc<dyn Parser>>, renderers: Vec<Arc<dyn Renderer>>) -> Self {
		Self {
			default_parsers: parsers,
			default_renderers: renderers,
			negotiation: DefaultNegotiation::new(),
		}
	}

	/// Selects the parser for a request body from its `Content-Type` header.
	pub fn select_parser(
		&self,
		content_type: Option<&str>,
	) -> NegotiationResult<(Arc<dyn Parser>, MediaType)> {
		self.negotiation.select_parser(&self.default_parsers, content_type)
	}

	/// Selects the renderer for a response body from the `Accept` header.
	pub fn select_renderer(
		&self,
		accept: Option<&str>,
	) -> NegotiationResult<(Arc<dyn Renderer>, MediaType)> {
		self.negotiation.select_renderer(&self.default_renderers, accept)
	}
}

impl Default for NegotiationConfig {
	/// JSON, multipart, and form parsers; JSON, text, and CSV renderers.
	fn default() -> Self {
		Self::new(
			vec![
				Arc::new(JSONParser::new()),
				Arc::new(MultiPartParser::new()),
				Arc::new(FormParser::new()),
			],
			vec![
				Arc::new(JSONRenderer::new()),
				Arc::new(TextRenderer::new()),
				Arc::new(CSVRenderer::new()),
			],
		)
	}
}

impl fmt::Debug for NegotiationConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let parsers: Vec<String> = self
			.default_parsers
			.iter()
			.map(|p| p.media_type().to_string())
			.collect();
		let renderers: Vec<String> = self
			.default_renderers
			.iter()
			.map(|r| r.media_type().to_string())
			.collect();
		f.debug_struct("NegotiationConfig")
			.field("default_parsers", &parsers)
			.field("default_renderers", &renderers)
			.finish()
	}
}
