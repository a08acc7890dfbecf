//! # Conneg Parsers
//!
//! Request body parser codecs for `conneg`.
//!
//! Each parser declares one media type (via [`conneg_core::Negotiable`]) and
//! decodes a negotiated request body into a [`serde_json::Value`]:
//!
//! - **JSONParser**: `application/json`
//! - **FormParser**: `application/x-www-form-urlencoded`
//! - **MultiPartParser**: `multipart/form-data` (boundary taken from the
//!   negotiated media type's parameters)
//!
//! ## Example
//!
//! ```
//! use bytes::Bytes;
//! use conneg_core::Negotiable;
//! use conneg_parsers::{JSONParser, Parser};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let parser = JSONParser::new();
//! let media_type = parser.media_type();
//! let data = parser.parse(Bytes::from(r#"{"ok": true}"#), &media_type).await.unwrap();
//! assert_eq!(data["ok"], true);
//! # });
//! ```

pub mod form;
pub mod json;
pub mod multipart;
pub mod parser;

pub use form::FormParser;
pub use json::JSONParser;
pub use multipart::MultiPartParser;
pub use parser::{ParseError, ParseResult, Parser};
