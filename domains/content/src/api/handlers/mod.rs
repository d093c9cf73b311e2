//! API handlers for the Content domain

pub mod collection;
pub mod content;
