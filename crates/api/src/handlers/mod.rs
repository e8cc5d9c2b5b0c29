//! Request handlers.
//!
//! Each handler resolves the caller's identity first (via [`AuthUser`]),
//! then validates input, runs the ownership guard, and finally calls the
//! store. Errors map to HTTP via [`AppError`].
//!
//! [`AuthUser`]: crate::middleware::auth::AuthUser
//! [`AppError`]: crate::error::AppError

pub mod category;
pub mod note;
