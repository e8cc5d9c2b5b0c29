//! Request extractors that run before any handler logic.
//!
//! - [`auth::AuthUser`] -- Resolves the calling owner from a JWT Bearer token.

pub mod auth;
