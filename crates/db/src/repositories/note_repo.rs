//! Repository for the `notes` table.

use jotter_core::types::{new_id, DbId};
use sqlx::PgPool;

use crate::models::note::{CreateNote, Note, NoteFilter, UpdateNote};

use super::set_clause;

/// Column list for notes queries.
const COLUMNS: &str = "id, user_id, category_id, title, body, color, \
    is_pinned, is_archived, created_at, updated_at";

/// Provides owner-scoped CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Create a new note for `user_id`, returning the created row.
    ///
    /// Callers must have already checked that `input.category_id`, if any,
    /// belongs to the same owner.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateNote,
    ) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes
                (id, user_id, category_id, title, body, color, is_pinned, is_archived,
                 created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW(), NOW())
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(new_id())
            .bind(user_id)
            .bind(input.category_id)
            .bind(&input.title)
            .bind(&input.body)
            .bind(&input.color)
            .bind(input.is_pinned.unwrap_or(false))
            .bind(input.is_archived.unwrap_or(false))
            .fetch_one(pool)
            .await
    }

    /// Find a note by ID, only if it belongs to `user_id`.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List notes owned by `user_id` that pass `filter`, oldest first.
    pub async fn list(
        pool: &PgPool,
        user_id: DbId,
        filter: &NoteFilter,
    ) -> Result<Vec<Note>, sqlx::Error> {
        let mut conditions = vec!["user_id = $1"];
        if filter.category_id.is_some() {
            conditions.push("category_id = $2");
        }
        if !filter.include_archived {
            conditions.push("is_archived = FALSE");
        }
        if filter.pinned_only {
            conditions.push("is_pinned = TRUE");
        }

        let query = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE {}
             ORDER BY created_at ASC, id ASC",
            conditions.join(" AND ")
        );

        let mut q = sqlx::query_as::<_, Note>(&query).bind(user_id);
        if let Some(category_id) = filter.category_id {
            q = q.bind(category_id);
        }
        q.fetch_all(pool).await
    }

    /// Apply the present fields of `input` to a note owned by `user_id`.
    ///
    /// Returns `None` when no owned row matches.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let columns: Vec<&str> = UpdateNote::FIELDS
            .iter()
            .zip(input.present())
            .filter_map(|(col, present)| present.then_some(*col))
            .collect();

        // $1 is id, $2 is user_id.
        let query = format!(
            "UPDATE notes SET {} WHERE id = $1 AND user_id = $2 RETURNING {COLUMNS}",
            set_clause(&columns, 3)
        );

        // Bind order must follow `UpdateNote::FIELDS`.
        let mut q = sqlx::query_as::<_, Note>(&query).bind(id).bind(user_id);
        if let Some(category_id) = input.category_id.as_update() {
            q = q.bind(category_id.copied());
        }
        if let Some(title) = input.title.as_update() {
            q = q.bind(title.cloned());
        }
        if let Some(body) = input.body.as_update() {
            q = q.bind(body.cloned());
        }
        if let Some(color) = input.color.as_update() {
            q = q.bind(color.cloned());
        }
        if let Some(is_pinned) = input.is_pinned.as_update() {
            q = q.bind(is_pinned.copied());
        }
        if let Some(is_archived) = input.is_archived.as_update() {
            q = q.bind(is_archived.copied());
        }

        q.fetch_optional(pool).await
    }

    /// Delete a note owned by `user_id`. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use jotter_core::patch::Patch;

    use super::*;
    use crate::models::category::CreateCategory;
    use crate::repositories::CategoryRepo;

    fn new_note(body: &str) -> CreateNote {
        CreateNote {
            body: body.to_string(),
            category_id: None,
            title: None,
            color: None,
            is_pinned: None,
            is_archived: None,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn create_defaults_flags_to_false(pool: PgPool) {
        let note = NoteRepo::create(&pool, new_id(), &new_note("buy milk"))
            .await
            .unwrap();
        assert!(!note.is_pinned);
        assert!(!note.is_archived);
        assert_eq!(note.created_at, note.updated_at);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn list_applies_archive_and_pin_filters(pool: PgPool) {
        let owner = new_id();
        let plain = NoteRepo::create(&pool, owner, &new_note("plain")).await.unwrap();
        let mut pinned = new_note("pinned");
        pinned.is_pinned = Some(true);
        let pinned = NoteRepo::create(&pool, owner, &pinned).await.unwrap();
        let mut archived = new_note("archived");
        archived.is_archived = Some(true);
        let archived = NoteRepo::create(&pool, owner, &archived).await.unwrap();

        let default_view = NoteRepo::list(&pool, owner, &NoteFilter::default())
            .await
            .unwrap();
        let ids: Vec<_> = default_view.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![plain.id, pinned.id]);

        let all = NoteFilter {
            include_archived: true,
            ..Default::default()
        };
        let all = NoteRepo::list(&pool, owner, &all).await.unwrap();
        assert!(all.iter().any(|n| n.id == archived.id));

        let pinned_only = NoteFilter {
            pinned_only: true,
            ..Default::default()
        };
        let pinned_view = NoteRepo::list(&pool, owner, &pinned_only).await.unwrap();
        assert_eq!(pinned_view.len(), 1);
        assert_eq!(pinned_view[0].id, pinned.id);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn update_and_delete_are_owner_scoped(pool: PgPool) {
        let owner = new_id();
        let intruder = new_id();
        let note = NoteRepo::create(&pool, owner, &new_note("secret")).await.unwrap();

        let patch = UpdateNote {
            is_pinned: Patch::Value(true),
            ..Default::default()
        };
        assert!(NoteRepo::update(&pool, intruder, note.id, &patch)
            .await
            .unwrap()
            .is_none());
        assert!(!NoteRepo::delete(&pool, intruder, note.id).await.unwrap());

        let updated = NoteRepo::update(&pool, owner, note.id, &patch)
            .await
            .unwrap()
            .expect("owner can update");
        assert!(updated.is_pinned);
        assert_eq!(updated.body, "secret");

        assert!(NoteRepo::delete(&pool, owner, note.id).await.unwrap());
        assert!(!NoteRepo::delete(&pool, owner, note.id).await.unwrap());
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn update_binds_several_fields_in_column_order(pool: PgPool) {
        let owner = new_id();
        let category = CategoryRepo::create(
            &pool,
            owner,
            &CreateCategory {
                name: "Work".to_string(),
                icon: None,
                sort_order: None,
            },
        )
        .await
        .unwrap();

        let mut input = new_note("draft");
        input.category_id = Some(category.id);
        input.title = Some("old title".to_string());
        input.is_pinned = Some(true);
        let note = NoteRepo::create(&pool, owner, &input).await.unwrap();

        let patch = UpdateNote {
            category_id: Patch::Null,
            title: Patch::Value("new title".to_string()),
            body: Patch::Value("final".to_string()),
            color: Patch::Value("teal".to_string()),
            ..Default::default()
        };
        let updated = NoteRepo::update(&pool, owner, note.id, &patch)
            .await
            .unwrap()
            .expect("owned note should update");

        assert_eq!(updated.category_id, None);
        assert_eq!(updated.title.as_deref(), Some("new title"));
        assert_eq!(updated.body, "final");
        assert_eq!(updated.color.as_deref(), Some("teal"));
        assert!(updated.is_pinned);
        assert!(!updated.is_archived);
        assert_eq!(updated.created_at, note.created_at);
    }
}
