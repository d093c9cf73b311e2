//! Clerk Backend API implementation
//!
//! Resolves session tokens and revokes sessions against the Clerk Backend
//! API (https://api.clerk.com) using reqwest. Token validation itself happens
//! at Clerk; we only consume the result.

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::context::Identity;
use crate::error::AuthError;
use crate::provider::{IdentityProvider, ResolvedSession};

const DEFAULT_BASE_URL: &str = "https://api.clerk.com";

/// Clerk session object (subset)
#[derive(Debug, Deserialize)]
struct SessionResponse {
    id: String,
    user_id: String,
    status: String,
}

/// Clerk user object (subset)
#[derive(Debug, Deserialize)]
struct UserResponse {
    id: String,
    first_name: Option<String>,
    last_name: Option<String>,
    primary_email_address_id: Option<String>,
    #[serde(default)]
    email_addresses: Vec<EmailAddress>,
}

#[derive(Debug, Deserialize)]
struct EmailAddress {
    id: String,
    email_address: String,
}

impl UserResponse {
    fn display_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            (Some(first), None) => Some(first.clone()),
            (None, Some(last)) => Some(last.clone()),
            (None, None) => None,
        }
    }

    fn primary_email(&self) -> Option<String> {
        let primary_id = self.primary_email_address_id.as_ref()?;
        self.email_addresses
            .iter()
            .find(|e| &e.id == primary_id)
            .map(|e| e.email_address.clone())
    }
}

/// Identity provider backed by the Clerk Backend API
pub struct ClerkProvider {
    client: Client,
    secret_key: String,
    base_url: String,
}

impl ClerkProvider {
    /// Create a provider using the production Clerk API
    pub fn new(secret_key: String) -> Self {
        Self::with_base_url(secret_key, DEFAULT_BASE_URL.to_string())
    }

    /// Create a provider against a custom base URL (tests, proxies)
    pub fn with_base_url(secret_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            secret_key,
            base_url,
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, AuthError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.secret_key)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(AuthError::Provider {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let body = response
            .json::<T>()
            .await
            .map_err(|e| AuthError::Malformed(e.to_string()))?;
        Ok(Some(body))
    }
}

#[async_trait::async_trait]
impl IdentityProvider for ClerkProvider {
    async fn resolve(&self, session_token: &str) -> Result<Option<ResolvedSession>, AuthError> {
        let Some(session) = self
            .get_json::<SessionResponse>(&format!("/v1/sessions/{}", session_token))
            .await?
        else {
            return Ok(None);
        };

        if session.status != "active" {
            return Ok(None);
        }

        let Some(user) = self
            .get_json::<UserResponse>(&format!("/v1/users/{}", session.user_id))
            .await?
        else {
            // Session points at a deleted user; treat as signed out
            return Ok(None);
        };

        Ok(Some(ResolvedSession {
            session_id: session.id,
            user: Identity {
                id: user.id.clone(),
                email: user.primary_email(),
                name: user.display_name(),
            },
        }))
    }

    async fn destroy_session(&self, session_id: &str) -> Result<(), AuthError> {
        let response = self
            .client
            .post(format!("{}/v1/sessions/{}/revoke", self.base_url, session_id))
            .bearer_auth(&self.secret_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AuthError::Provider {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        Ok(())
    }
}
