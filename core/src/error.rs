//! Error types for request construction and materialization.
//!
//! # Design
//! Every failure in this crate is an explicit `Result`: middleware surface
//! encoder failures, the materializer surfaces address failures, and nothing
//! is logged or swallowed along the way. A failed composition hands back the
//! first failing step's error untouched, so callers that want to retry
//! simply apply the same composed middleware again — the whole pipeline is
//! deterministic.

use std::fmt;

/// Errors returned by middleware application and materialization.
#[derive(Debug)]
pub enum RequestError {
    /// The base URL handed to the materializer was empty or did not parse
    /// as an absolute URL.
    MissingBaseUrl,

    /// Appending the request's path produced an address the URL model
    /// cannot represent. Reachable only with bases that cannot carry path
    /// segments (`mailto:` style), never with ordinary `http(s)` bases.
    MalformedRequestUrl,

    /// The injected body encoder failed; carries the encoder's message
    /// verbatim.
    EncodingFailed(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::MissingBaseUrl => {
                write!(f, "base URL is missing or not an absolute URL")
            }
            RequestError::MalformedRequestUrl => {
                write!(f, "request URL became malformed after appending path or query")
            }
            RequestError::EncodingFailed(msg) => write!(f, "body encoding failed: {msg}"),
        }
    }
}

impl std::error::Error for RequestError {}
