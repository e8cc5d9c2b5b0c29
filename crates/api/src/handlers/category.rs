//! Handlers for the `/categories` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use jotter_core::error::CoreError;
use jotter_core::notes::{
    require_any_field, validate_category_name, validate_max_length, MAX_CATEGORY_ICON_LENGTH,
};
use jotter_core::patch::Patch;
use jotter_core::types::DbId;
use jotter_db::models::category::{CreateCategory, UpdateCategory};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::guard::{not_found, resolve_owned_category};
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, ListResponse};
use crate::state::AppState;

/// POST /categories
pub async fn create_category(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(CoreError::from)?;

    let category = state.store.create_category(auth.owner_id, &input).await?;

    tracing::info!(
        owner_id = %auth.owner_id,
        category_id = %category.id,
        name = %category.name,
        "Category created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse::ok(category))))
}

/// GET /categories
pub async fn list_categories(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let categories = state.store.list_categories(auth.owner_id).await?;
    Ok(Json(DataResponse::ok(ListResponse::from(categories))))
}

/// GET /categories/{id}
pub async fn get_category(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = resolve_owned_category(state.store.as_ref(), id, auth.owner_id).await?;
    Ok(Json(DataResponse::ok(category)))
}

/// PUT /categories/{id}
///
/// At least one of `name`, `icon`, `sort_order` must be present. Absent
/// fields are left unchanged; `icon` and `sort_order` may be set to `null`.
pub async fn update_category(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateCategory>,
) -> AppResult<impl IntoResponse> {
    validate_update(&input)?;

    resolve_owned_category(state.store.as_ref(), id, auth.owner_id).await?;

    let category = state
        .store
        .update_category(auth.owner_id, id, &input)
        .await?
        .ok_or_else(|| not_found("Category", id))?;

    tracing::info!(
        owner_id = %auth.owner_id,
        category_id = %id,
        "Category updated"
    );

    Ok(Json(DataResponse::ok(category)))
}

fn validate_update(input: &UpdateCategory) -> AppResult<()> {
    require_any_field(&input.present(), UpdateCategory::FIELDS).map_err(AppError::validation)?;

    input.name.reject_null("name")?;
    if let Patch::Value(name) = &input.name {
        validate_category_name(name).map_err(AppError::validation)?;
    }
    if let Patch::Value(icon) = &input.icon {
        validate_max_length("icon", icon, MAX_CATEGORY_ICON_LENGTH)
            .map_err(AppError::validation)?;
    }
    Ok(())
}
