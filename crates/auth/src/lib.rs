//! Identity gate for Manticore
//!
//! Session state lives at an external identity provider (Clerk). This crate
//! resolves the session cookie into a typed per-request context and exposes
//! the one session capability the application uses: destroy.

pub mod backend;
pub mod clerk;
pub mod context;
pub mod error;
pub mod extractors;
pub mod mock;
pub mod provider;

pub use backend::AuthBackend;
pub use clerk::ClerkProvider;
pub use context::{Identity, RequestContext, Session};
pub use error::AuthError;
pub use extractors::{MaybeAuth, SESSION_COOKIE};
pub use mock::MockIdentityProvider;
pub use provider::{IdentityProvider, ResolvedSession};
