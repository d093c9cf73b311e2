//! Domain layer for the Content domain

pub mod entities;
