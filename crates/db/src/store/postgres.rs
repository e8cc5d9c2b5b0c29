use async_trait::async_trait;
use jotter_core::types::DbId;

use super::{NoteStore, StoreResult};
use crate::models::category::{Category, CreateCategory, UpdateCategory};
use crate::models::note::{CreateNote, Note, NoteFilter, UpdateNote};
use crate::repositories::{CategoryRepo, NoteRepo};
use crate::DbPool;

/// [`NoteStore`] backed by a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Pass `result` through, recording failed calls at debug level. The API
/// layer decides what the caller sees.
fn logged<T>(op: &'static str, result: StoreResult<T>) -> StoreResult<T> {
    if let Err(e) = &result {
        tracing::debug!(op, error = %e, "Postgres store call failed");
    }
    result
}

#[async_trait]
impl NoteStore for PgStore {
    async fn create_category(
        &self,
        owner_id: DbId,
        input: &CreateCategory,
    ) -> StoreResult<Category> {
        logged(
            "CategoryRepo::create",
            CategoryRepo::create(&self.pool, owner_id, input).await,
        )
    }

    async fn find_category(&self, owner_id: DbId, id: DbId) -> StoreResult<Option<Category>> {
        logged(
            "CategoryRepo::find_by_id",
            CategoryRepo::find_by_id(&self.pool, owner_id, id).await,
        )
    }

    async fn list_categories(&self, owner_id: DbId) -> StoreResult<Vec<Category>> {
        logged(
            "CategoryRepo::list",
            CategoryRepo::list(&self.pool, owner_id).await,
        )
    }

    async fn update_category(
        &self,
        owner_id: DbId,
        id: DbId,
        input: &UpdateCategory,
    ) -> StoreResult<Option<Category>> {
        logged(
            "CategoryRepo::update",
            CategoryRepo::update(&self.pool, owner_id, id, input).await,
        )
    }

    async fn create_note(&self, owner_id: DbId, input: &CreateNote) -> StoreResult<Note> {
        logged(
            "NoteRepo::create",
            NoteRepo::create(&self.pool, owner_id, input).await,
        )
    }

    async fn find_note(&self, owner_id: DbId, id: DbId) -> StoreResult<Option<Note>> {
        logged(
            "NoteRepo::find_by_id",
            NoteRepo::find_by_id(&self.pool, owner_id, id).await,
        )
    }

    async fn list_notes(&self, owner_id: DbId, filter: &NoteFilter) -> StoreResult<Vec<Note>> {
        logged(
            "NoteRepo::list",
            NoteRepo::list(&self.pool, owner_id, filter).await,
        )
    }

    async fn update_note(
        &self,
        owner_id: DbId,
        id: DbId,
        input: &UpdateNote,
    ) -> StoreResult<Option<Note>> {
        logged(
            "NoteRepo::update",
            NoteRepo::update(&self.pool, owner_id, id, input).await,
        )
    }

    async fn delete_note(&self, owner_id: DbId, id: DbId) -> StoreResult<bool> {
        logged(
            "NoteRepo::delete",
            NoteRepo::delete(&self.pool, owner_id, id).await,
        )
    }

    async fn health_check(&self) -> StoreResult<()> {
        logged("health_check", crate::health_check(&self.pool).await)
    }
}
