//! Request description types.
//!
//! # Design
//! A [`Request`] describes an outgoing HTTP request as plain data: method,
//! path, query items, headers, body, cache policy, timeout. Middleware take
//! a request by value and return a new one, so a composed chain is a pure
//! function from description to description — nothing here touches the
//! network. Headers live in an insertion-ordered map where writing an
//! existing key replaces its value in place (last write wins); the map holds
//! one value per key, so repeated-header styles such as `Set-Cookie` are not
//! representable.

use std::fmt;
use std::time::Duration;

use indexmap::IndexMap;

use crate::path::Path;

/// The timeout a fresh [`Request`] starts with.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// A known HTTP method.
///
/// A closed set: the nine request methods of RFC 9110, by their uppercase
/// wire tokens. Unknown or extension methods are not representable.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Method {
    #[default]
    Get,
    Put,
    Patch,
    Post,
    Delete,
    Head,
    Options,
    Trace,
    Connect,
}

impl Method {
    /// Returns the uppercase wire token (e.g. `"GET"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Post => "POST",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
            Self::Trace => "TRACE",
            Self::Connect => "CONNECT",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cache-behavior hint carried through to the native transport.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum CachePolicy {
    /// Follow the caching rules of the protocol itself.
    #[default]
    UseProtocolCache,
    /// Load from the origin, ignoring locally cached data.
    ReloadIgnoringLocalCache,
    /// Load from the origin, ignoring local and intermediate caches.
    ReloadIgnoringLocalAndRemoteCache,
    /// Serve cached data when present, loading only on a miss.
    ReturnCacheElseLoad,
    /// Serve cached data or fail; never load.
    ReturnCacheDontLoad,
    /// Revalidate cached data with the origin before serving it.
    ReloadRevalidatingCache,
}

/// A single query-string item: a name and an optional value.
///
/// Items with the same name may repeat; the owning request preserves their
/// order all the way to the rendered URL.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct QueryItem {
    pub name: String,
    pub value: Option<String>,
}

impl QueryItem {
    /// A name/value item, rendered as `name=value`.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// A valueless item, rendered as the bare name.
    pub fn flag(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

/// An outgoing HTTP request described as a value.
///
/// Built by applying middleware to [`Request::default`] and terminal once
/// materialized into a [`TransportRequest`](crate::TransportRequest).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: Path,
    pub query_items: Vec<QueryItem>,
    /// Insertion-ordered, case-sensitive keys, one value per key.
    pub headers: IndexMap<String, String>,
    pub body: Option<Vec<u8>>,
    pub cache_policy: CachePolicy,
    pub timeout: Duration,
}

impl Default for Request {
    /// A `GET` of the empty path: no headers, no query items, no body,
    /// protocol caching, [`DEFAULT_TIMEOUT`].
    fn default() -> Self {
        Self {
            method: Method::Get,
            path: Path::new(),
            query_items: Vec::new(),
            headers: IndexMap::new(),
            body: None,
            cache_policy: CachePolicy::UseProtocolCache,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
