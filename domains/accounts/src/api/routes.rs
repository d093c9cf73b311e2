//! Route definitions for Accounts domain API

use axum::{routing::post, Router};

use super::handlers::sessions;
use super::middleware::AccountsState;

/// Create session routes
fn session_routes() -> Router<AccountsState> {
    Router::new()
        .route("/auth/signin", post(sessions::sign_in))
        .route("/auth/signout", post(sessions::sign_out))
}

/// Create all Accounts domain API routes
pub fn routes() -> Router<AccountsState> {
    Router::new().merge(session_routes())
}
