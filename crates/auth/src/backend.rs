//! Auth backend shared through router state

use std::sync::Arc;

use crate::context::{RequestContext, Session};
use crate::error::AuthError;
use crate::provider::IdentityProvider;

/// Cloneable wrapper around the configured identity provider.
///
/// Domain states hold one of these and expose it via `FromRef` so the
/// `MaybeAuth` extractor can reach it.
#[derive(Clone)]
pub struct AuthBackend {
    provider: Arc<dyn IdentityProvider>,
}

impl AuthBackend {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    /// Resolve a session token into a request context.
    ///
    /// Unknown tokens yield an anonymous context; only transport/provider
    /// failures surface as errors.
    pub async fn resolve_context(&self, session_token: &str) -> Result<RequestContext, AuthError> {
        match self.provider.resolve(session_token).await? {
            Some(resolved) => Ok(RequestContext {
                user: Some(resolved.user),
                session: Some(Session::new(resolved.session_id, self.provider.clone())),
            }),
            None => Ok(RequestContext::anonymous()),
        }
    }
}
