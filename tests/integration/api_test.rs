//! API integration tests over the domain routers
//!
//! Routers run against mock store and identity provider; requests are driven
//! through `tower::ServiceExt::oneshot`.

mod accounts;
mod common;
mod content;
