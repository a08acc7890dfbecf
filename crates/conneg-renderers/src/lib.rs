//! # Conneg Renderers
//!
//! Response renderer codecs for `conneg`.
//!
//! Each renderer declares one media type (via [`conneg_core::Negotiable`])
//! and encodes a [`serde_json::Value`] into response bytes:
//!
//! - **JSONRenderer**: `application/json`, honoring an `indent` parameter on
//!   the resolved media type
//! - **TextRenderer**: `text/plain`
//! - **CSVRenderer**: `application/csv`
//! - **HTMLRenderer**: `text/html` (pre-rendered markup passthrough)

pub mod csv_renderer;
pub mod html;
pub mod json;
pub mod renderer;
pub mod text;

pub use csv_renderer::CSVRenderer;
pub use html::HTMLRenderer;
pub use json::JSONRenderer;
pub use renderer::{RenderError, RenderResult, Renderer};
pub use text::TextRenderer;
