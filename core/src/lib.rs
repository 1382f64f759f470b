//! Declarative HTTP request construction.
//!
//! # Overview
//! Describes an outgoing HTTP request as a plain [`Request`] value and
//! builds it by composing small, reusable middleware instead of mutating a
//! request object imperatively. Nothing here touches the network: a
//! finished description materializes into a [`TransportRequest`] that the
//! embedding application executes with whatever transport it uses
//! (host-does-IO pattern), keeping the core fully deterministic and
//! testable.
//!
//! # Design
//! - A [`Middleware`] is a pure `Request -> Request` function that may
//!   fail; [`compose`] folds an ordered list of them into one, left to
//!   right, short-circuiting on the first error.
//! - Literals participate in composition: a path string or a [`Method`]
//!   inside a [`chain!`] lifts to the matching combinator at its position.
//! - The [`rest`] presets and [`auth`] middleware are plain compositions of
//!   the primitives; they add no new behavior.
//! - [`Request::transport`] combines the finished description with a base
//!   URL, the only place an absolute address enters the picture.
//!
//! ```
//! use reqchain_core::{chain, rest, Request};
//!
//! let build = chain![
//!     "/users",
//!     rest::post_json(serde_json::json!({"name": "Ada"})),
//! ];
//! let request = build(Request::default())?;
//! let transport = request.transport("https://api.example.com")?;
//! assert_eq!(transport.method, "POST");
//! assert_eq!(transport.url, "https://api.example.com/users");
//! # Ok::<(), reqchain_core::RequestError>(())
//! ```

pub mod auth;
pub mod compose;
pub mod error;
pub mod middleware;
pub mod path;
pub mod request;
pub mod rest;
pub mod transport;

pub use compose::{compose, optional, Branch, Step};
pub use error::RequestError;
pub use middleware::{
    append_segment, body, cache_policy, encoded_body, header, identity, json_body, method, path,
    queries, timeout, Middleware,
};
pub use path::Path;
pub use request::{CachePolicy, Method, QueryItem, Request, DEFAULT_TIMEOUT};
pub use transport::TransportRequest;
