//! Repository for the `categories` table.

use jotter_core::types::{new_id, DbId};
use sqlx::PgPool;

use crate::models::category::{Category, CreateCategory, UpdateCategory};

use super::set_clause;

/// Column list for categories queries.
const COLUMNS: &str = "id, user_id, name, icon, sort_order, created_at, updated_at";

/// Provides owner-scoped CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Create a new category for `user_id`, returning the created row.
    ///
    /// Both timestamps come from the same `NOW()` so they are equal on insert.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateCategory,
    ) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (id, user_id, name, icon, sort_order, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(new_id())
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.icon)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Find a category by ID, only if it belongs to `user_id`.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List all categories owned by `user_id`, oldest first.
    pub async fn list(pool: &PgPool, user_id: DbId) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories
             WHERE user_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Apply the present fields of `input` to a category owned by `user_id`.
    ///
    /// Returns `None` when no owned row matches.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let mut columns: Vec<&str> = Vec::new();
        if input.name.is_present() {
            columns.push("name");
        }
        if input.icon.is_present() {
            columns.push("icon");
        }
        if input.sort_order.is_present() {
            columns.push("sort_order");
        }

        // $1 is id, $2 is user_id.
        let query = format!(
            "UPDATE categories SET {} WHERE id = $1 AND user_id = $2 RETURNING {COLUMNS}",
            set_clause(&columns, 3)
        );

        let mut q = sqlx::query_as::<_, Category>(&query).bind(id).bind(user_id);
        if let Some(name) = input.name.as_update() {
            q = q.bind(name.cloned());
        }
        if let Some(icon) = input.icon.as_update() {
            q = q.bind(icon.cloned());
        }
        if let Some(sort_order) = input.sort_order.as_update() {
            q = q.bind(sort_order.copied());
        }

        q.fetch_optional(pool).await
    }
}

#[cfg(test)]
mod tests {
    use jotter_core::patch::Patch;

    use super::*;

    fn new_category(name: &str) -> CreateCategory {
        CreateCategory {
            name: name.to_string(),
            icon: None,
            sort_order: None,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn create_sets_equal_timestamps(pool: PgPool) {
        let owner = new_id();
        let category = CategoryRepo::create(&pool, owner, &new_category("Work"))
            .await
            .unwrap();
        assert_eq!(category.user_id, owner);
        assert_eq!(category.created_at, category.updated_at);
        assert_eq!(category.icon, None);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn find_by_id_is_owner_scoped(pool: PgPool) {
        let owner = new_id();
        let category = CategoryRepo::create(&pool, owner, &new_category("Home"))
            .await
            .unwrap();

        let other = CategoryRepo::find_by_id(&pool, new_id(), category.id)
            .await
            .unwrap();
        assert!(other.is_none(), "another owner must not see the category");

        let mine = CategoryRepo::find_by_id(&pool, owner, category.id)
            .await
            .unwrap();
        assert_eq!(mine.map(|c| c.id), Some(category.id));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn update_clears_null_and_keeps_absent(pool: PgPool) {
        let owner = new_id();
        let input = CreateCategory {
            name: "Ideas".to_string(),
            icon: Some("*".to_string()),
            sort_order: Some(2),
        };
        let category = CategoryRepo::create(&pool, owner, &input).await.unwrap();

        let patch = UpdateCategory {
            icon: Patch::Null,
            ..Default::default()
        };
        let updated = CategoryRepo::update(&pool, owner, category.id, &patch)
            .await
            .unwrap()
            .expect("owned category should update");

        assert_eq!(updated.name, "Ideas");
        assert_eq!(updated.icon, None);
        assert_eq!(updated.sort_order, Some(2));
        assert!(updated.updated_at >= category.updated_at);
    }
}
