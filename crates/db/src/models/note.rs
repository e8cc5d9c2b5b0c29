//! Note model.

use jotter_core::notes::{MAX_NOTE_BODY_LENGTH, MAX_NOTE_COLOR_LENGTH, MAX_NOTE_TITLE_LENGTH};
use jotter_core::patch::Patch;
use jotter_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `notes` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Note {
    pub id: DbId,
    pub user_id: DbId,
    pub category_id: Option<DbId>,
    pub title: Option<String>,
    pub body: String,
    pub color: Option<String>,
    pub is_pinned: bool,
    pub is_archived: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new note. Flags default to `false` when omitted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNote {
    #[validate(length(
        min = 1,
        max = MAX_NOTE_BODY_LENGTH,
        message = "must be between 1 and 10000 characters"
    ))]
    pub body: String,
    pub category_id: Option<DbId>,
    #[validate(length(max = MAX_NOTE_TITLE_LENGTH, message = "must be at most 200 characters"))]
    pub title: Option<String>,
    #[validate(length(max = MAX_NOTE_COLOR_LENGTH, message = "must be at most 32 characters"))]
    pub color: Option<String>,
    pub is_pinned: Option<bool>,
    pub is_archived: Option<bool>,
}

/// DTO for patching a note.
///
/// `category_id: null` detaches the note from its category; `title` and
/// `color` may likewise be cleared. `body` and the flags reject `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNote {
    #[serde(default)]
    pub category_id: Patch<DbId>,
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub body: Patch<String>,
    #[serde(default)]
    pub color: Patch<String>,
    #[serde(default)]
    pub is_pinned: Patch<bool>,
    #[serde(default)]
    pub is_archived: Patch<bool>,
}

impl UpdateNote {
    pub const FIELDS: &'static [&'static str] = &[
        "category_id",
        "title",
        "body",
        "color",
        "is_pinned",
        "is_archived",
    ];

    /// Presence flags in [`Self::FIELDS`] order.
    pub fn present(&self) -> [bool; 6] {
        [
            self.category_id.is_present(),
            self.title.is_present(),
            self.body.is_present(),
            self.color.is_present(),
            self.is_pinned.is_present(),
            self.is_archived.is_present(),
        ]
    }

    /// Merge this patch into an existing row, leaving absent fields untouched.
    pub fn apply(&self, note: &mut Note) {
        self.category_id.apply_to(&mut note.category_id);
        self.title.apply_to(&mut note.title);
        if let Patch::Value(body) = &self.body {
            note.body = body.clone();
        }
        self.color.apply_to(&mut note.color);
        if let Patch::Value(pinned) = self.is_pinned {
            note.is_pinned = pinned;
        }
        if let Patch::Value(archived) = self.is_archived {
            note.is_archived = archived;
        }
    }
}

/// Conjunctive filter for listing an owner's notes (`?category_id=&include_archived=&pinned_only=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteFilter {
    pub category_id: Option<DbId>,
    #[serde(default)]
    pub include_archived: bool,
    #[serde(default)]
    pub pinned_only: bool,
}

impl NoteFilter {
    /// Whether `note` passes every active filter. Owner scoping is applied by the store.
    pub fn matches(&self, note: &Note) -> bool {
        if let Some(category_id) = self.category_id {
            if note.category_id != Some(category_id) {
                return false;
            }
        }
        if !self.include_archived && note.is_archived {
            return false;
        }
        if self.pinned_only && !note.is_pinned {
            return false;
        }
        true
    }
}
