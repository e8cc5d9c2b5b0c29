//! Handlers for the `/notes` resource.
//!
//! Any `category_id` a note points at must belong to the caller; the
//! ownership guard runs before every write or filtered read that names one.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use jotter_core::error::CoreError;
use jotter_core::notes::{
    require_any_field, validate_max_length, validate_note_body, MAX_NOTE_COLOR_LENGTH,
    MAX_NOTE_TITLE_LENGTH,
};
use jotter_core::patch::Patch;
use jotter_core::types::DbId;
use jotter_db::models::note::{CreateNote, NoteFilter, UpdateNote};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::guard::{not_found, resolve_owned_category, resolve_owned_note};
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, DeletedResponse, ListResponse};
use crate::state::AppState;

/// POST /notes
pub async fn create_note(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateNote>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(CoreError::from)?;

    if let Some(category_id) = input.category_id {
        resolve_owned_category(state.store.as_ref(), category_id, auth.owner_id).await?;
    }

    let note = state.store.create_note(auth.owner_id, &input).await?;

    tracing::info!(
        owner_id = %auth.owner_id,
        note_id = %note.id,
        category_id = ?note.category_id,
        "Note created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse::ok(note))))
}

/// GET /notes?category_id=&include_archived=&pinned_only=
///
/// Archived notes are hidden unless `include_archived=true`. Filtering by a
/// category the caller does not own fails with 404 rather than returning an
/// empty list.
pub async fn list_notes(
    auth: AuthUser,
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<NoteFilter>,
) -> AppResult<impl IntoResponse> {
    if let Some(category_id) = filter.category_id {
        resolve_owned_category(state.store.as_ref(), category_id, auth.owner_id).await?;
    }

    let notes = state.store.list_notes(auth.owner_id, &filter).await?;
    Ok(Json(DataResponse::ok(ListResponse::from(notes))))
}

/// GET /notes/{id}
pub async fn get_note(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let note = resolve_owned_note(state.store.as_ref(), id, auth.owner_id).await?;
    Ok(Json(DataResponse::ok(note)))
}

/// PUT /notes/{id}
///
/// At least one field must be present. `category_id: null` detaches the note
/// without a category lookup; a non-null `category_id` is re-checked.
pub async fn update_note(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateNote>,
) -> AppResult<impl IntoResponse> {
    validate_update(&input)?;

    let store = state.store.as_ref();
    resolve_owned_note(store, id, auth.owner_id).await?;

    if let Patch::Value(category_id) = &input.category_id {
        resolve_owned_category(store, *category_id, auth.owner_id).await?;
    }

    let note = store
        .update_note(auth.owner_id, id, &input)
        .await?
        .ok_or_else(|| not_found("Note", id))?;

    tracing::info!(
        owner_id = %auth.owner_id,
        note_id = %id,
        is_pinned = note.is_pinned,
        is_archived = note.is_archived,
        "Note updated"
    );

    Ok(Json(DataResponse::ok(note)))
}

/// DELETE /notes/{id}
pub async fn delete_note(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = state.store.delete_note(auth.owner_id, id).await?;

    if !deleted {
        return Err(not_found("Note", id));
    }

    tracing::info!(owner_id = %auth.owner_id, note_id = %id, "Note deleted");

    Ok(Json(DataResponse::ok(DeletedResponse { id, deleted })))
}

fn validate_update(input: &UpdateNote) -> AppResult<()> {
    require_any_field(&input.present(), UpdateNote::FIELDS).map_err(AppError::validation)?;

    input.body.reject_null("body")?;
    input.is_pinned.reject_null("is_pinned")?;
    input.is_archived.reject_null("is_archived")?;

    if let Patch::Value(body) = &input.body {
        validate_note_body(body).map_err(AppError::validation)?;
    }
    if let Patch::Value(title) = &input.title {
        validate_max_length("title", title, MAX_NOTE_TITLE_LENGTH)
            .map_err(AppError::validation)?;
    }
    if let Patch::Value(color) = &input.color {
        validate_max_length("color", color, MAX_NOTE_COLOR_LENGTH)
            .map_err(AppError::validation)?;
    }
    Ok(())
}
