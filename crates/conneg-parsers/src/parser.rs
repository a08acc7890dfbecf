//! The parser capability and its error taxonomy.

use async_trait::async_trait;
use bytes::Bytes;
use conneg_core::{MediaType, Negotiable};
use serde_json::Value;
use thiserror::Error;

/// Errors raised while decoding a request body.
///
/// These are decode failures, distinct from negotiation failures: by the time
/// a parser runs, its media type has already been selected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
	/// The body is not valid JSON.
	#[error("JSON parse error - {0}")]
	Json(String),

	/// The body is not a valid urlencoded form.
	#[error("Form parse error - {0}")]
	Form(String),

	/// The multipart body is structurally broken.
	#[error("Multipart parse error - {0}")]
	Multipart(String),

	/// The negotiated Content-Type carried no `boundary` parameter.
	#[error("Multipart message missing boundary in Content-Type header")]
	MissingBoundary,

	/// The body was empty and the parser does not allow that.
	#[error("Empty request body")]
	EmptyBody,
}

/// Result type alias for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// A request body parser: bytes in, structured value out.
///
/// The `media_type` argument is the resolved type from negotiation, carrying
/// any Content-Type parameters the client sent (charset, boundary, ...).
#[async_trait]
pub trait Parser: Negotiable + Send + Sync + std::fmt::Debug {
	/// Decodes the request body.
	async fn parse(&self, body: Bytes, media_type: &MediaType) -> ParseResult<Value>;
}
