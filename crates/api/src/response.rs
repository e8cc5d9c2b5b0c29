//! Shared response envelope types for API handlers.
//!
//! All successful API responses use a `{ "success": true, "data": ... }`
//! envelope. Use [`DataResponse::ok`] instead of ad-hoc
//! `serde_json::json!` bodies to keep serialization consistent.

use jotter_core::types::DbId;
use serde::Serialize;

/// Standard `{ "success": true, "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse::ok(note)))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Payload of list endpoints: every matching row plus their count.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub items: Vec<T>,
    pub total_count: usize,
}

impl<T: Serialize> From<Vec<T>> for ListResponse<T> {
    fn from(items: Vec<T>) -> Self {
        let total_count = items.len();
        Self { items, total_count }
    }
}

/// Payload returned after a successful delete.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub id: DbId,
    pub deleted: bool,
}
