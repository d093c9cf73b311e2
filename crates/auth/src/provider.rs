//! Identity provider contract
//!
//! Token issuance, validation, and expiry live entirely at the provider;
//! this crate only consumes the resolved result.

use crate::context::Identity;
use crate::error::AuthError;

/// A session token successfully resolved by the provider
#[derive(Debug, Clone)]
pub struct ResolvedSession {
    /// Provider-issued session id (the revocation target)
    pub session_id: String,
    pub user: Identity,
}

/// External session/identity provider
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve a session token (cookie value) to an identity.
    ///
    /// Returns `Ok(None)` for unknown, expired, or revoked tokens.
    async fn resolve(&self, session_token: &str) -> Result<Option<ResolvedSession>, AuthError>;

    /// Revoke a session. The session is unusable once this returns `Ok`.
    async fn destroy_session(&self, session_id: &str) -> Result<(), AuthError>;
}
