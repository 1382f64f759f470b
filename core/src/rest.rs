//! REST presets.
//!
//! # Design
//! Nothing in this module adds primitive behavior: every preset is plain
//! composition of the combinators in [`crate::middleware`]. The mutating
//! verbs bundle the JSON negotiation headers; [`get`] sets only the method.
//! Each mutating verb has two body-carrying entry points: `*_json` runs the
//! payload through [`json_body`] (custom encoders compose
//! [`encoded_body`](crate::middleware::encoded_body) explicitly), `*_bytes`
//! sets raw bytes. Because the verb preset runs before the body step, the
//! `GET`-never-gets-a-body guard is inherited as-is: only [`get`] followed
//! by a structured body stays body-less.

use serde::Serialize;

use crate::compose::compose;
use crate::middleware::{body, header, json_body, method, Middleware};
use crate::request::Method;

/// MIME type the JSON presets negotiate with.
pub const JSON_MIME: &str = "application/json; charset=utf-8";

/// Declares a JSON request body via `Content-Type`.
pub fn json_content() -> Middleware {
    header("Content-Type", JSON_MIME)
}

/// Asks for a JSON response via `Accept`.
pub fn json_accept() -> Middleware {
    header("Accept", JSON_MIME)
}

/// Both JSON negotiation headers.
pub fn json_defaults() -> Middleware {
    compose(vec![json_content(), json_accept()])
}

/// A plain `GET`: sets the method and nothing else.
pub fn get() -> Middleware {
    method(Method::Get)
}

/// `POST` plus [`json_defaults`].
pub fn post() -> Middleware {
    compose(vec![method(Method::Post), json_defaults()])
}

/// `PUT` plus [`json_defaults`].
pub fn put() -> Middleware {
    compose(vec![method(Method::Put), json_defaults()])
}

/// `PATCH` plus [`json_defaults`].
pub fn patch() -> Middleware {
    compose(vec![method(Method::Patch), json_defaults()])
}

/// `DELETE` plus [`json_defaults`].
pub fn delete() -> Middleware {
    compose(vec![method(Method::Delete), json_defaults()])
}

/// [`post`] carrying the payload serialized as JSON.
pub fn post_json<T>(payload: T) -> Middleware
where
    T: Serialize + Send + Sync + 'static,
{
    compose(vec![post(), json_body(payload)])
}

/// [`put`] carrying the payload serialized as JSON.
pub fn put_json<T>(payload: T) -> Middleware
where
    T: Serialize + Send + Sync + 'static,
{
    compose(vec![put(), json_body(payload)])
}

/// [`patch`] carrying the payload serialized as JSON.
pub fn patch_json<T>(payload: T) -> Middleware
where
    T: Serialize + Send + Sync + 'static,
{
    compose(vec![patch(), json_body(payload)])
}

/// [`delete`] carrying the payload serialized as JSON.
pub fn delete_json<T>(payload: T) -> Middleware
where
    T: Serialize + Send + Sync + 'static,
{
    compose(vec![delete(), json_body(payload)])
}

/// [`post`] carrying raw body bytes.
pub fn post_bytes(data: impl Into<Vec<u8>>) -> Middleware {
    compose(vec![post(), body(data)])
}

/// [`put`] carrying raw body bytes.
pub fn put_bytes(data: impl Into<Vec<u8>>) -> Middleware {
    compose(vec![put(), body(data)])
}

/// [`patch`] carrying raw body bytes.
pub fn patch_bytes(data: impl Into<Vec<u8>>) -> Middleware {
    compose(vec![patch(), body(data)])
}

/// [`delete`] carrying raw body bytes.
pub fn delete_bytes(data: impl Into<Vec<u8>>) -> Middleware {
    compose(vec![delete(), body(data)])
}
