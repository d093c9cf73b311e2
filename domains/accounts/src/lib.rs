//! Accounts domain: authentication redirect flow
//!
//! Session issuance lives at the external identity provider; these routes
//! only inspect the per-request identity context and redirect.

pub mod api;

pub use api::routes;
pub use api::AccountsState;
