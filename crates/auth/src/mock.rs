//! Mock identity provider
//!
//! In-memory provider used by tests. Records revoked session ids so tests
//! can assert that sign-out destroys the session before redirecting.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::context::Identity;
use crate::error::AuthError;
use crate::provider::{IdentityProvider, ResolvedSession};

/// Mock identity provider for testing
#[derive(Default)]
pub struct MockIdentityProvider {
    sessions: Mutex<HashMap<String, ResolvedSession>>,
    destroyed: Mutex<Vec<String>>,
    destroy_failure: Mutex<Option<String>>,
}

impl MockIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token that resolves to the given session id and identity
    pub fn insert_session(&self, token: &str, session_id: &str, user: Identity) {
        self.sessions.lock().unwrap().insert(
            token.to_string(),
            ResolvedSession {
                session_id: session_id.to_string(),
                user,
            },
        );
    }

    /// Session ids revoked so far, in call order
    pub fn destroyed(&self) -> Vec<String> {
        self.destroyed.lock().unwrap().clone()
    }

    /// Make the next `destroy_session` call fail with the given message
    pub fn fail_destroy(&self, message: &str) {
        *self.destroy_failure.lock().unwrap() = Some(message.to_string());
    }
}

#[async_trait::async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn resolve(&self, session_token: &str) -> Result<Option<ResolvedSession>, AuthError> {
        Ok(self.sessions.lock().unwrap().get(session_token).cloned())
    }

    async fn destroy_session(&self, session_id: &str) -> Result<(), AuthError> {
        if let Some(message) = self.destroy_failure.lock().unwrap().take() {
            return Err(AuthError::Provider {
                status: 500,
                message,
            });
        }

        // Revoked sessions stop resolving
        self.sessions
            .lock()
            .unwrap()
            .retain(|_, resolved| resolved.session_id != session_id);
        self.destroyed.lock().unwrap().push(session_id.to_string());
        Ok(())
    }
}
