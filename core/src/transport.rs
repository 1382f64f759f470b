//! Materialization into a transport-ready request.
//!
//! # Design
//! [`TransportRequest`] describes a fully addressed HTTP request as plain
//! data. The core builds these values without ever touching the network —
//! the embedding application is responsible for handing them to whatever
//! HTTP transport it uses. All fields are owned (`String`, `Vec`) so the
//! value can cross any boundary without lifetime concerns.
//!
//! Materialization is the only place a base address enters the picture: a
//! [`Request`] describes everything relative to it, and
//! [`Request::full_url`] combines the two into an absolute URL.

use std::time::Duration;

use url::Url;

use crate::error::RequestError;
use crate::request::{CachePolicy, Request};

/// A fully addressed HTTP request described as plain data.
///
/// Produced by [`Request::transport`]. The embedding application executes
/// it; nothing in this crate does.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransportRequest {
    pub method: String,
    pub url: String,
    /// Header entries in the order the request carried them.
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
    pub cache_policy: CachePolicy,
    pub timeout: Duration,
}

impl Request {
    /// Renders the absolute URL for this request against a base address.
    ///
    /// The base is parsed as an absolute URL
    /// ([`RequestError::MissingBaseUrl`] when empty or unparseable). A
    /// non-empty request path appends its segments to the base's path, with
    /// a trailing empty segment on the base popped first so appending to
    /// `https://host/` does not double the slash; a base that cannot carry
    /// path segments (`mailto:` style) fails with
    /// [`RequestError::MalformedRequestUrl`]. Non-empty query items replace
    /// the base's query in original order, duplicate names kept
    /// positionally; with no query items the base's own query is left
    /// untouched.
    pub fn full_url(&self, base_url: &str) -> Result<Url, RequestError> {
        let mut url = Url::parse(base_url).map_err(|_| RequestError::MissingBaseUrl)?;
        if !self.path.is_empty() {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| RequestError::MalformedRequestUrl)?;
            segments.pop_if_empty();
            segments.extend(&self.path.segments);
        }
        if !self.query_items.is_empty() {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            for item in &self.query_items {
                match &item.value {
                    Some(value) => pairs.append_pair(&item.name, value),
                    None => pairs.append_key_only(&item.name),
                };
            }
        }
        Ok(url)
    }

    /// Materializes this request against a base address.
    ///
    /// Renders [`full_url`](Request::full_url) and carries method token,
    /// headers (in stored order), body, cache policy, and timeout onto the
    /// output verbatim.
    pub fn transport(&self, base_url: &str) -> Result<TransportRequest, RequestError> {
        let url = self.full_url(base_url)?;
        Ok(TransportRequest {
            method: self.method.as_str().to_string(),
            url: url.to_string(),
            headers: self
                .headers
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
            body: self.body.clone(),
            cache_policy: self.cache_policy,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Path;
    use crate::request::{Method, QueryItem};

    fn users_request() -> Request {
        Request {
            path: Path::from("/users/12"),
            query_items: vec![QueryItem::new("page", "1")],
            ..Request::default()
        }
    }

    #[test]
    fn renders_path_and_query_against_the_base() {
        let url = users_request().full_url("https://api.example.com").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/users/12?page=1");
    }

    #[test]
    fn empty_base_is_missing() {
        let err = users_request().full_url("").unwrap_err();
        assert!(matches!(err, RequestError::MissingBaseUrl));
    }

    #[test]
    fn relative_base_is_missing() {
        let err = users_request().full_url("api.example.com/v1").unwrap_err();
        assert!(matches!(err, RequestError::MissingBaseUrl));
    }

    #[test]
    fn trailing_slash_base_does_not_double_the_slash() {
        let url = users_request().full_url("https://api.example.com/").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/users/12?page=1");
    }

    #[test]
    fn base_path_is_kept_under_the_appended_segments() {
        let url = users_request().full_url("https://api.example.com/v1").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/users/12?page=1");
    }

    #[test]
    fn empty_path_leaves_the_base_alone() {
        let request = Request::default();
        let url = request.full_url("https://api.example.com/v1").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1");
    }

    #[test]
    fn duplicate_query_names_are_kept_in_order() {
        let request = Request {
            query_items: vec![QueryItem::new("tag", "a"), QueryItem::new("tag", "b")],
            ..Request::default()
        };
        let url = request.full_url("https://api.example.com").unwrap();
        assert_eq!(url.query(), Some("tag=a&tag=b"));
    }

    #[test]
    fn valueless_items_render_as_the_bare_name() {
        let request = Request {
            query_items: vec![QueryItem::flag("verbose"), QueryItem::new("page", "2")],
            ..Request::default()
        };
        let url = request.full_url("https://api.example.com").unwrap();
        assert_eq!(url.query(), Some("verbose&page=2"));
    }

    #[test]
    fn query_items_replace_the_base_query() {
        let request = Request {
            query_items: vec![QueryItem::new("new", "2")],
            ..Request::default()
        };
        let url = request.full_url("https://api.example.com/x?old=1").unwrap();
        assert_eq!(url.query(), Some("new=2"));
    }

    #[test]
    fn no_query_items_keeps_the_base_query() {
        let request = Request {
            path: Path::from("users"),
            ..Request::default()
        };
        let url = request.full_url("https://api.example.com/?keep=1").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/users?keep=1");
    }

    #[test]
    fn non_hierarchical_base_cannot_take_a_path() {
        let err = users_request().full_url("mailto:user@example.com").unwrap_err();
        assert!(matches!(err, RequestError::MalformedRequestUrl));
    }

    #[test]
    fn transport_carries_every_field_verbatim() {
        let mut request = users_request();
        request.method = Method::Post;
        request.headers.insert("Content-Type".to_string(), "application/json".to_string());
        request.headers.insert("Accept".to_string(), "application/json".to_string());
        request.body = Some(b"{}".to_vec());
        request.cache_policy = CachePolicy::ReturnCacheElseLoad;
        request.timeout = Duration::from_secs(5);

        let transport = request.transport("https://api.example.com").unwrap();
        assert_eq!(transport.method, "POST");
        assert_eq!(transport.url, "https://api.example.com/users/12?page=1");
        assert_eq!(
            transport.headers,
            vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Accept".to_string(), "application/json".to_string()),
            ]
        );
        assert_eq!(transport.body.as_deref(), Some(&b"{}"[..]));
        assert_eq!(transport.cache_policy, CachePolicy::ReturnCacheElseLoad);
        assert_eq!(transport.timeout, Duration::from_secs(5));
    }
}
