//! Primitive request middleware.
//!
//! # Design
//! A [`Middleware`] is a boxed pure function from one [`Request`] value to
//! another, allowed to fail with a [`RequestError`]. Every combinator in this
//! module returns a middleware closed over its arguments; none of them touch
//! the request they will eventually transform until applied. Applying the
//! same middleware to the same request always yields the same result, so
//! composed chains can be stored and re-run from any thread.
//!
//! The structured-body combinators carry one policy worth calling out: when
//! the incoming request's method is `GET`, [`encoded_body`] and [`json_body`]
//! return the request untouched and never invoke the encoder. The raw
//! [`body`] setter has no such guard.

use std::time::Duration;

use serde::Serialize;

use crate::error::RequestError;
use crate::path::Path;
use crate::request::{CachePolicy, Method, QueryItem, Request};

/// A pure, potentially-failing transformation of a [`Request`].
pub type Middleware = Box<dyn Fn(Request) -> Result<Request, RequestError> + Send + Sync>;

/// The neutral middleware: returns its input unchanged.
///
/// Used as the seed of composition folds and as the stand-in for absent
/// optional steps.
pub fn identity() -> Middleware {
    Box::new(Ok)
}

/// Replaces the request's method.
pub fn method(method: Method) -> Middleware {
    Box::new(move |mut request| {
        request.method = method;
        Ok(request)
    })
}

/// Sets one header entry.
///
/// Keys are case-sensitive as stored. Setting a key that is already present
/// replaces its value while keeping the entry's original position, so the
/// last write in a chain wins.
pub fn header(name: impl Into<String>, value: impl Into<String>) -> Middleware {
    let name = name.into();
    let value = value.into();
    Box::new(move |mut request| {
        request.headers.insert(name.clone(), value.clone());
        Ok(request)
    })
}

/// Replaces the request's path wholesale.
pub fn path(path: impl Into<Path>) -> Middleware {
    let path = path.into();
    Box::new(move |mut request| {
        request.path = path.clone();
        Ok(request)
    })
}

/// Appends one segment to the incoming request's path.
///
/// Unlike [`path`], this reads the request it is applied to, so it extends
/// whatever earlier steps built rather than replacing it.
pub fn append_segment(segment: impl ToString) -> Middleware {
    let segment = segment.to_string();
    Box::new(move |mut request| {
        request.path = request.path.append(&segment);
        Ok(request)
    })
}

/// Sets the raw body bytes unconditionally, whatever the method.
pub fn body(bytes: impl Into<Vec<u8>>) -> Middleware {
    let bytes = bytes.into();
    Box::new(move |mut request| {
        request.body = Some(bytes.clone());
        Ok(request)
    })
}

/// Sets the body to the output of an injected encoder.
///
/// When the incoming method is `GET` the request is returned untouched and
/// the encoder is not invoked. An encoder failure surfaces as
/// [`RequestError::EncodingFailed`] carrying the encoder's message.
pub fn encoded_body<T, F>(payload: T, encode: F) -> Middleware
where
    T: Send + Sync + 'static,
    F: Fn(&T) -> Result<Vec<u8>, String> + Send + Sync + 'static,
{
    Box::new(move |mut request| {
        if request.method == Method::Get {
            return Ok(request);
        }
        let bytes = encode(&payload).map_err(RequestError::EncodingFailed)?;
        request.body = Some(bytes);
        Ok(request)
    })
}

/// Sets the body to the payload serialized as JSON.
///
/// [`encoded_body`] with `serde_json` as the encoder; the `GET` guard applies
/// transitively.
pub fn json_body<T>(payload: T) -> Middleware
where
    T: Serialize + Send + Sync + 'static,
{
    encoded_body(payload, |value| {
        serde_json::to_vec(value).map_err(|e| e.to_string())
    })
}

/// Replaces the query items with one valued item per `(name, value)` entry.
///
/// Rendering order follows the input's iteration order, so ordered inputs
/// (`Vec`, arrays, insertion-ordered maps) make the final query string
/// deterministic. Duplicate names are kept as-is.
pub fn queries<I, K, V>(items: I) -> Middleware
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let items: Vec<QueryItem> = items
        .into_iter()
        .map(|(name, value)| QueryItem::new(name, value))
        .collect();
    Box::new(move |mut request| {
        request.query_items = items.clone();
        Ok(request)
    })
}

/// Replaces the cache policy hint.
pub fn cache_policy(policy: CachePolicy) -> Middleware {
    Box::new(move |mut request| {
        request.cache_policy = policy;
        Ok(request)
    })
}

/// Replaces the timeout.
pub fn timeout(duration: Duration) -> Middleware {
    Box::new(move |mut request| {
        request.timeout = duration;
        Ok(request)
    })
}
