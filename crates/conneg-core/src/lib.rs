//! # Conneg Core
//!
//! The media type model and negotiation algorithm behind `conneg`.
//!
//! Given an incoming request and a set of available codecs, this crate picks
//! the right codec for the request body (from `Content-Type`) and for the
//! response body (from `Accept`), following HTTP semantics: media type
//! wildcards, parameter matching, and a specificity precedence ordering.
//!
//! - [`MediaType`]: parses and represents one `type/subtype; param=value`
//!   expression, with a canonical display form and a specificity rank.
//! - [`AcceptHeader`]: parses a full `Accept` header into ordered groups of
//!   equal precedence, silently dropping malformed tokens.
//! - [`DefaultNegotiation`]: matches server-declared codecs against the
//!   client's ranked preferences and picks exactly one winner, or fails with
//!   a typed [`NegotiationError`].
//!
//! Declared `q` values are informational only: specificity keys the client
//! ordering and server-declared order breaks ties, which keeps selection
//! deterministic. Everything here is a pure value computation over immutable
//! inputs, safe to share across concurrent requests.

pub mod accept;
pub mod error;
pub mod media_type;
pub mod negotiation;

pub use accept::AcceptHeader;
pub use error::{NegotiationError, NegotiationResult};
pub use media_type::{MediaType, WILDCARD};
pub use negotiation::{DefaultNegotiation, Negotiable, Negotiation};
