//! The storage seam consumed by the HTTP handlers.
//!
//! - [`PgStore`] -- PostgreSQL, delegating to the zero-sized repositories.
//! - [`MemoryStore`] -- `HashMap`-backed store for tests and throwaway local runs.
//!
//! Every method is scoped by `owner_id`: a row owned by someone else behaves
//! exactly like a row that does not exist.

use async_trait::async_trait;
use jotter_core::types::DbId;

use crate::models::category::{Category, CreateCategory, UpdateCategory};
use crate::models::note::{CreateNote, Note, NoteFilter, UpdateNote};

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

pub type StoreResult<T> = Result<T, sqlx::Error>;

#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn create_category(
        &self,
        owner_id: DbId,
        input: &CreateCategory,
    ) -> StoreResult<Category>;

    async fn find_category(&self, owner_id: DbId, id: DbId) -> StoreResult<Option<Category>>;

    async fn list_categories(&self, owner_id: DbId) -> StoreResult<Vec<Category>>;

    /// Returns `None` when no row with `id` is owned by `owner_id`.
    async fn update_category(
        &self,
        owner_id: DbId,
        id: DbId,
        input: &UpdateCategory,
    ) -> StoreResult<Option<Category>>;

    async fn create_note(&self, owner_id: DbId, input: &CreateNote) -> StoreResult<Note>;

    async fn find_note(&self, owner_id: DbId, id: DbId) -> StoreResult<Option<Note>>;

    async fn list_notes(&self, owner_id: DbId, filter: &NoteFilter) -> StoreResult<Vec<Note>>;

    /// Returns `None` when no row with `id` is owned by `owner_id`.
    async fn update_note(
        &self,
        owner_id: DbId,
        id: DbId,
        input: &UpdateNote,
    ) -> StoreResult<Option<Note>>;

    /// Returns `true` if a row was deleted.
    async fn delete_note(&self, owner_id: DbId, id: DbId) -> StoreResult<bool>;

    async fn health_check(&self) -> StoreResult<()>;
}
