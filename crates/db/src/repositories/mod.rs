//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every query is scoped by
//! the owning `user_id`.

pub mod category_repo;
pub mod note_repo;

pub use category_repo::CategoryRepo;
pub use note_repo::NoteRepo;

/// Render `column = $n` assignments for a dynamic `SET` clause.
///
/// Placeholders start at `first_param`; `updated_at` is always refreshed.
pub(crate) fn set_clause(columns: &[&str], first_param: usize) -> String {
    columns
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{col} = ${}", first_param + i))
        .chain(std::iter::once("updated_at = NOW()".to_string()))
        .collect::<Vec<_>>()
        .join(", ")
}
