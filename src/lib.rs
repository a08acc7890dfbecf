//! # Conneg
//!
//! HTTP content negotiation for Rust services.
//!
//! Given an incoming request's `Content-Type` and `Accept` headers and an
//! ordered set of supported codecs, `conneg` selects exactly one parser for
//! the request body and one renderer for the response body, following HTTP
//! semantics: media type wildcards, parameter matching, and a specificity
//! precedence ordering. Declared `q` values are informational; specificity
//! ranks the client's preferences and server-declared order breaks ties.
//!
//! ## Example
//!
//! ```
//! use conneg::NegotiationConfig;
//!
//! let config = NegotiationConfig::default();
//!
//! let (_, media_type) = config.select_renderer(Some("text/*, */*; q=0.5")).unwrap();
//! assert_eq!(media_type.to_string(), "text/plain");
//!
//! let (_, media_type) = config.select_parser(Some("application/json")).unwrap();
//! assert_eq!(media_type.to_string(), "application/json");
//! ```
//!
//! Negotiation failures are typed ([`NegotiationError::UnsupportedMediaType`],
//! [`NegotiationError::NotAcceptable`]) and left to the request-handling
//! boundary to turn into wire responses.

pub mod config;

/// Media type model and negotiation algorithm
pub mod negotiation {
	pub use conneg_core::*;
}

/// Request body parser codecs
pub mod parsers {
	pub use conneg_parsers::*;
}

/// Response renderer codecs
pub mod renderers {
	pub use conneg_renderers::*;
}

pub use config::NegotiationConfig;
pub use conneg_core::{
	AcceptHeader, DefaultNegotiation, MediaType, Negotiable, Negotiation, NegotiationError,
	NegotiationResult,
};
pub use conneg_parsers::{FormParser, JSONParser, MultiPartParser, ParseError, Parser};
pub use conneg_renderers::{
	CSVRenderer, HTMLRenderer, JSONRenderer, RenderError, Renderer, TextRenderer,
};
