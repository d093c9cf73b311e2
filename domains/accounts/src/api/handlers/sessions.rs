//! Session redirect handlers

use axum::response::Redirect;
use manticore_auth::MaybeAuth;
use manticore_common::Result;

/// Sign-in action.
///
/// Unauthenticated callers are redirected back to the sign-in page;
/// authenticated callers to the site root. No other side effects.
pub async fn sign_in(MaybeAuth(ctx): MaybeAuth) -> Redirect {
    if ctx.user.is_none() {
        Redirect::to("/auth/signin")
    } else {
        Redirect::to("/")
    }
}

/// Sign out.
///
/// An active session is revoked at the provider first; the redirect is only
/// issued once revocation has completed. Callers without a session are still
/// redirected to the site root. A revocation failure aborts the redirect.
pub async fn sign_out(MaybeAuth(ctx): MaybeAuth) -> Result<Redirect> {
    if let Some(session) = ctx.session {
        session.destroy().await?;
    }

    Ok(Redirect::to("/"))
}
