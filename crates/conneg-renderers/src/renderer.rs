//! The renderer capability and its error taxonomy.

use async_trait::async_trait;
use bytes::Bytes;
use conneg_core::{MediaType, Negotiable};
use serde_json::Value;
use thiserror::Error;

/// Errors raised while encoding a response body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
	/// The value could not be serialized.
	#[error("Serialization error: {0}")]
	Serialization(String),

	/// CSV writing failed.
	#[error("CSV error: {0}")]
	Csv(String),

	/// The renderer cannot represent this shape of data.
	#[error("Unsupported data: {0}")]
	UnsupportedData(String),
}

/// Result type alias for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// A response body renderer: structured value in, bytes out.
///
/// The `media_type` argument is the resolved type from negotiation; its
/// parameters can carry rendering instructions (e.g. `indent` for JSON).
#[async_trait]
pub trait Renderer: Negotiable + Send + Sync + std::fmt::Debug {
	/// Charset appended to the response Content-Type, when any.
	fn charset(&self) -> Option<&str> {
		None
	}

	/// Short format name, usable for format-suffix routing.
	fn format(&self) -> Option<&str> {
		None
	}

	/// Encodes the response body.
	async fn render(&self, data: &Value, media_type: &MediaType) -> RenderResult<Bytes>;
}
