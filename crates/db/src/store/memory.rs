use std::collections::HashMap;

use async_trait::async_trait;
use jotter_core::types::{new_id, DbId, Timestamp};
use tokio::sync::RwLock;

use super::{NoteStore, StoreResult};
use crate::models::category::{Category, CreateCategory, UpdateCategory};
use crate::models::note::{CreateNote, Note, NoteFilter, UpdateNote};

#[derive(Default)]
struct Tables {
    categories: HashMap<DbId, Category>,
    notes: HashMap<DbId, Note>,
}

/// In-process [`NoteStore`]. Never fails; state is lost on drop.
///
/// Mirrors the PostgreSQL backend's semantics: owner-scoped lookups,
/// `created_at == updated_at` on insert, `created_at, id` list ordering.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn sorted<T>(mut rows: Vec<T>, key: impl Fn(&T) -> (Timestamp, DbId)) -> Vec<T> {
    rows.sort_by_key(key);
    rows
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn create_category(
        &self,
        owner_id: DbId,
        input: &CreateCategory,
    ) -> StoreResult<Category> {
        let now = chrono::Utc::now();
        let category = Category {
            id: new_id(),
            user_id: owner_id,
            name: input.name.clone(),
            icon: input.icon.clone(),
            sort_order: input.sort_order,
            created_at: now,
            updated_at: now,
        };
        self.tables
            .write()
            .await
            .categories
            .insert(category.id, category.clone());
        Ok(category)
    }

    async fn find_category(&self, owner_id: DbId, id: DbId) -> StoreResult<Option<Category>> {
        let tables = self.tables.read().await;
        Ok(tables
            .categories
            .get(&id)
            .filter(|c| c.user_id == owner_id)
            .cloned())
    }

    async fn list_categories(&self, owner_id: DbId) -> StoreResult<Vec<Category>> {
        let tables = self.tables.read().await;
        let rows = tables
            .categories
            .values()
            .filter(|c| c.user_id == owner_id)
            .cloned()
            .collect();
        Ok(sorted(rows, |c| (c.created_at, c.id)))
    }

    async fn update_category(
        &self,
        owner_id: DbId,
        id: DbId,
        input: &UpdateCategory,
    ) -> StoreResult<Option<Category>> {
        let mut tables = self.tables.write().await;
        let Some(category) = tables
            .categories
            .get_mut(&id)
            .filter(|c| c.user_id == owner_id)
        else {
            return Ok(None);
        };
        input.apply(category);
        category.updated_at = chrono::Utc::now();
        Ok(Some(category.clone()))
    }

    async fn create_note(&self, owner_id: DbId, input: &CreateNote) -> StoreResult<Note> {
        let now = chrono::Utc::now();
        let note = Note {
            id: new_id(),
            user_id: owner_id,
            category_id: input.category_id,
            title: input.title.clone(),
            body: input.body.clone(),
            color: input.color.clone(),
            is_pinned: input.is_pinned.unwrap_or(false),
            is_archived: input.is_archived.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };
        self.tables.write().await.notes.insert(note.id, note.clone());
        Ok(note)
    }

    async fn find_note(&self, owner_id: DbId, id: DbId) -> StoreResult<Option<Note>> {
        let tables = self.tables.read().await;
        Ok(tables
            .notes
            .get(&id)
            .filter(|n| n.user_id == owner_id)
            .cloned())
    }

    async fn list_notes(&self, owner_id: DbId, filter: &NoteFilter) -> StoreResult<Vec<Note>> {
        let tables = self.tables.read().await;
        let rows = tables
            .notes
            .values()
            .filter(|n| n.user_id == owner_id && filter.matches(n))
            .cloned()
            .collect();
        Ok(sorted(rows, |n| (n.created_at, n.id)))
    }

    async fn update_note(
        &self,
        owner_id: DbId,
        id: DbId,
        input: &UpdateNote,
    ) -> StoreResult<Option<Note>> {
        let mut tables = self.tables.write().await;
        let Some(note) = tables
            .notes
            .get_mut(&id)
            .filter(|n| n.user_id == owner_id)
        else {
            return Ok(None);
        };
        input.apply(note);
        note.updated_at = chrono::Utc::now();
        Ok(Some(note.clone()))
    }

    async fn delete_note(&self, owner_id: DbId, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let owned = tables
            .notes
            .get(&id)
            .is_some_and(|n| n.user_id == owner_id);
        if owned {
            tables.notes.remove(&id);
        }
        Ok(owned)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}
