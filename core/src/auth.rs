//! Authorization header middleware.
//!
//! Thin wrappers over [`header`]: they format the credential and set
//! `Authorization`, nothing more. Like any header write, a later step in the
//! same chain can override them.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::middleware::{header, Middleware};

/// Sets `Authorization: Bearer <token>`.
pub fn bearer_auth(token: impl Into<String>) -> Middleware {
    header("Authorization", format!("Bearer {}", token.into()))
}

/// Sets `Authorization: Basic <credentials>`.
///
/// Credentials are `username:password` in padded standard base64, per
/// RFC 7617.
pub fn basic_auth(username: impl Into<String>, password: impl Into<String>) -> Middleware {
    let credentials = STANDARD.encode(format!("{}:{}", username.into(), password.into()));
    header("Authorization", format!("Basic {credentials}"))
}
