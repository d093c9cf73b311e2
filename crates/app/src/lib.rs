//! Manticore application composition root
//!
//! Composes the domain routers into a single application and renders the
//! diagnostic environment report.

use std::fmt::Write as _;
use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use manticore_accounts::AccountsState;
use manticore_auth::{AuthBackend, ClerkProvider};
use manticore_common::{Config, PublicConfig, SecretConfig};
use manticore_content::{ContentState, PgContentRepository};

/// Create the main application router with all routes
pub async fn create_app(config: Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    // Content domain state
    let content_state = ContentState::new(Arc::new(PgContentRepository::new(pool)));

    // Accounts domain state; session resolution goes through Clerk
    let auth = AuthBackend::new(Arc::new(ClerkProvider::new(
        config.secrets.clerk_secret_key.clone(),
    )));
    let accounts_state = AccountsState { auth };

    // Build router — compose domain routers with shared infrastructure routes
    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/", axum::routing::get(|| async { "Manticore API v0.1.0" }))
        .merge(manticore_content::routes().with_state(content_state))
        .merge(manticore_accounts::routes().with_state(accounts_state));

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Render the diagnostic environment report.
///
/// Order and labels are fixed; secret values are reported only as presence
/// booleans, never printed.
pub fn env_report(public: &PublicConfig, secrets: &SecretConfig) -> String {
    let mut out = String::new();
    writeln!(out, "Environment Variables:").unwrap();
    writeln!(out, "=====================").unwrap();
    writeln!(out, "PUBLIC_MANTICORE_ENABLED: {}", public.manticore_enabled).unwrap();
    writeln!(out, "MANTICORE_ENABLED: {}", secrets.manticore_enabled).unwrap();
    writeln!(out, "IS_DEV: {}", public.is_dev).unwrap();
    writeln!(
        out,
        "PUBLIC_CLERK_PUBLISHABLE_KEY defined: {}",
        !public.clerk_publishable_key.is_empty()
    )
    .unwrap();
    writeln!(
        out,
        "CLERK_SECRET_KEY defined: {}",
        !secrets.clerk_secret_key.is_empty()
    )
    .unwrap();
    out
}
