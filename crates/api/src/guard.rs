//! Ownership guard.
//!
//! Fetches a row by id *and* owner in one step. A row that does not exist and
//! a row owned by someone else both yield [`CoreError::NotFound`], so callers
//! cannot probe for other owners' ids.

use jotter_core::error::CoreError;
use jotter_core::types::DbId;
use jotter_db::models::category::Category;
use jotter_db::models::note::Note;
use jotter_db::store::NoteStore;

use crate::error::{AppError, AppResult};

/// Resolve a category owned by `owner_id`, or fail with `NotFound`.
pub async fn resolve_owned_category(
    store: &dyn NoteStore,
    category_id: DbId,
    owner_id: DbId,
) -> AppResult<Category> {
    store
        .find_category(owner_id, category_id)
        .await?
        .ok_or_else(|| not_found("Category", category_id))
}

/// Resolve a note owned by `owner_id`, or fail with `NotFound`.
pub async fn resolve_owned_note(
    store: &dyn NoteStore,
    note_id: DbId,
    owner_id: DbId,
) -> AppResult<Note> {
    store
        .find_note(owner_id, note_id)
        .await?
        .ok_or_else(|| not_found("Note", note_id))
}

pub(crate) fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}
