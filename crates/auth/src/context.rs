//! Per-request identity context
//!
//! A request carries at most an authenticated identity and a session handle.
//! The session handle exposes exactly one capability: revoking itself at the
//! provider.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::AuthError;
use crate::provider::IdentityProvider;

/// Authenticated caller as reported by the identity provider
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identity {
    /// Provider-issued user id (opaque string)
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
}

/// Handle to an active session at the identity provider.
///
/// Destroying consumes the handle; there is nothing useful to do with a
/// revoked session.
pub struct Session {
    id: String,
    provider: Arc<dyn IdentityProvider>,
}

impl Session {
    pub(crate) fn new(id: String, provider: Arc<dyn IdentityProvider>) -> Self {
        Self { id, provider }
    }

    /// Provider-issued session id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Revoke the session at the provider. Completes only after the provider
    /// has acknowledged the revocation.
    pub async fn destroy(self) -> Result<(), AuthError> {
        self.provider.destroy_session(&self.id).await
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("id", &self.id).finish()
    }
}

/// Identity context attached to a single inbound request
#[derive(Debug, Default)]
pub struct RequestContext {
    pub user: Option<Identity>,
    pub session: Option<Session>,
}

impl RequestContext {
    /// Context for an unauthenticated request
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
