//! Common test utilities and fixtures for integration tests
//!
//! Provides router builders over the mock content store and mock identity
//! provider, plus request/response helpers.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::COOKIE, Method, Request},
    Router,
};
use chrono::Utc;
use serde_json::Value;

use manticore_accounts::AccountsState;
use manticore_auth::{AuthBackend, Identity, MockIdentityProvider, SESSION_COOKIE};
use manticore_content::{ContentState, MockContentStore, StoredContent};

/// Content router over a mock store
pub struct ContentTestApp {
    pub store: Arc<MockContentStore>,
}

impl ContentTestApp {
    pub fn new() -> Self {
        Self {
            store: Arc::new(MockContentStore::new()),
        }
    }

    pub fn router(&self) -> Router {
        manticore_content::routes().with_state(ContentState::new(self.store.clone()))
    }

    /// Seed a stored row with the given raw metadata text
    pub fn seed(&self, id: &str, metadata: Option<&str>) {
        self.store.insert(StoredContent {
            id: id.to_string(),
            title: Some("Seeded".to_string()),
            body: Some("Seeded body".to_string()),
            metadata: metadata.map(String::from),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        });
    }
}

/// Accounts router over a mock identity provider
pub struct AccountsTestApp {
    pub provider: Arc<MockIdentityProvider>,
}

impl AccountsTestApp {
    pub fn new() -> Self {
        Self {
            provider: Arc::new(MockIdentityProvider::new()),
        }
    }

    pub fn router(&self) -> Router {
        manticore_accounts::routes().with_state(AccountsState {
            auth: AuthBackend::new(self.provider.clone()),
        })
    }

    /// Register a signed-in user reachable through `token`
    pub fn sign_in(&self, token: &str, session_id: &str, user_id: &str) {
        self.provider.insert_session(
            token,
            session_id,
            Identity {
                id: user_id.to_string(),
                email: Some(format!("{}@example.com", user_id)),
                name: None,
            },
        );
    }
}

/// Helper: build a request, optionally carrying a session cookie
pub fn request(method: Method, uri: &str, session_token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = session_token {
        builder = builder.header(COOKIE, format!("{}={}", SESSION_COOKIE, token));
    }

    builder.body(Body::empty()).unwrap()
}

/// Helper: build a JSON request
pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Helper: parse response body as JSON Value
pub async fn parse_body(response: axum::http::Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Helper: Location header of a redirect response
pub fn location(response: &axum::http::Response<Body>) -> &str {
    response
        .headers()
        .get("location")
        .expect("redirect should carry a Location header")
        .to_str()
        .unwrap()
}
