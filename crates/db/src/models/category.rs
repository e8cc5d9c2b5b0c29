//! Note category model.

use jotter_core::notes::{MAX_CATEGORY_ICON_LENGTH, MAX_CATEGORY_NAME_LENGTH};
use jotter_core::patch::Patch;
use jotter_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub icon: Option<String>,
    pub sort_order: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new category. The owner comes from the caller's identity.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(length(
        min = 1,
        max = MAX_CATEGORY_NAME_LENGTH,
        message = "must be between 1 and 100 characters"
    ))]
    pub name: String,
    #[validate(length(max = MAX_CATEGORY_ICON_LENGTH, message = "must be at most 32 characters"))]
    pub icon: Option<String>,
    pub sort_order: Option<i32>,
}

/// DTO for patching a category. `icon` and `sort_order` may be cleared with `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategory {
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub icon: Patch<String>,
    #[serde(default)]
    pub sort_order: Patch<i32>,
}

impl UpdateCategory {
    pub const FIELDS: &'static [&'static str] = &["name", "icon", "sort_order"];

    /// Presence flags in [`Self::FIELDS`] order.
    pub fn present(&self) -> [bool; 3] {
        [
            self.name.is_present(),
            self.icon.is_present(),
            self.sort_order.is_present(),
        ]
    }

    /// Merge this patch into an existing row, leaving absent fields untouched.
    pub fn apply(&self, category: &mut Category) {
        if let Patch::Value(name) = &self.name {
            category.name = name.clone();
        }
        self.icon.apply_to(&mut category.icon);
        self.sort_order.apply_to(&mut category.sort_order);
    }
}
