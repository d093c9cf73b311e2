//! Axum extractors for the identity gate
//!
//! Generic over any state `S` where `AuthBackend: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::COOKIE, request::Parts, HeaderMap},
};

use crate::backend::AuthBackend;
use crate::context::RequestContext;

/// Session cookie set by the identity provider's frontend SDK
pub const SESSION_COOKIE: &str = "__session";

/// Optional-identity extractor.
///
/// Never rejects: requests without a session cookie, with a token the
/// provider does not recognize, or for which resolution fails, all produce an
/// anonymous context. Handlers decide what absence means.
#[derive(Debug)]
pub struct MaybeAuth(pub RequestContext);

impl<S> FromRequestParts<S> for MaybeAuth
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let Some(token) = session_cookie(&parts.headers) else {
            return Ok(MaybeAuth(RequestContext::anonymous()));
        };

        let backend = AuthBackend::from_ref(state);
        match backend.resolve_context(&token).await {
            Ok(ctx) => Ok(MaybeAuth(ctx)),
            Err(err) => {
                tracing::warn!(error = %err, "session resolution failed, treating request as anonymous");
                Ok(MaybeAuth(RequestContext::anonymous()))
            }
        }
    }
}

/// Pull the session token out of the Cookie header(s)
fn session_cookie(headers: &HeaderMap) -> Option<String> {
    for value in headers.get_all(COOKIE) {
        let Ok(raw) = value.to_str() else { continue };
        for pair in raw.split(';') {
            let mut parts = pair.trim().splitn(2, '=');
            if parts.next() == Some(SESSION_COOKIE) {
                if let Some(token) = parts.next() {
                    if !token.is_empty() {
                        return Some(token.to_string());
                    }
                }
            }
        }
    }
    None
}
