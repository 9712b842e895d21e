//! Error types for the clinic data core.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers distinguish "the
//! collection does not exist on the service" from "the server returned an
//! unexpected status." All other non-2xx responses land in `HttpError` with
//! the raw status code and body for debugging. `Transport` covers failures
//! below HTTP (connection refused, DNS, a panicked worker).

use crate::query::Collection;

/// Errors returned by the data client, the stores, and the controllers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The round-trip never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),

    /// Create was attempted on a collection this application only reads.
    #[error("collection `{0}` is read-only")]
    ReadOnlyCollection(Collection),
}

/// Reasons a consultation form is refused before any request is issued.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("email address is not valid")]
    InvalidEmail,

    #[error("unknown procedure of interest: {0}")]
    UnknownProcedure(String),

    #[error("a request is already being sent")]
    InFlight,
}
