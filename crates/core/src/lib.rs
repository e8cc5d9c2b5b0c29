//! Domain primitives shared by the store and the HTTP layer.
//!
//! Nothing in this crate performs I/O.

pub mod error;
pub mod notes;
pub mod patch;
pub mod types;
