use axum::{extract::State, http::StatusCode, Json};
use common::types::Message;
use service::specialty::{Specialty, SpecialtyCreate, SpecialtyUpdate};

use crate::errors::ApiError;
use crate::extract::{ValidJson, ValidPath};
use crate::routes::ServerState;

pub const DELETED_MESSAGE: &str = "Item deleted successfully";

/// Ids are `i32` in storage; any other integer cannot name a row.
fn row_id(id: i64) -> Result<i32, ApiError> {
    i32::try_from(id).map_err(|_| ApiError::NotFound)
}

#[utoipa::path(
    get, path = "/specialties/", tag = "specialties",
    responses(
        (status = 200, description = "Active specialties", body = [crate::openapi::SpecialtyDoc]),
        (status = 404, description = "No active specialty")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Specialty>>, ApiError> {
    Ok(Json(state.specialties.list_active().await?))
}

#[utoipa::path(
    post, path = "/specialties/", tag = "specialties",
    request_body = crate::openapi::SpecialtyCreateDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::SpecialtyDoc),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(input): ValidJson<SpecialtyCreate>,
) -> Result<(StatusCode, Json<Specialty>), ApiError> {
    let created = state.specialties.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/specialties/{id}", tag = "specialties",
    params(("id" = i64, Path, description = "Specialty ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::SpecialtyDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_by_id(
    State(state): State<ServerState>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Json<Specialty>, ApiError> {
    Ok(Json(state.specialties.get(row_id(id)?).await?))
}

#[utoipa::path(
    put, path = "/specialties/{id}", tag = "specialties",
    params(("id" = i64, Path, description = "Specialty ID")),
    request_body = crate::openapi::SpecialtyCreateDoc,
    responses(
        (status = 200, description = "Replaced", body = crate::openapi::SpecialtyDoc),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn replace(
    State(state): State<ServerState>,
    ValidPath(id): ValidPath<i64>,
    ValidJson(input): ValidJson<SpecialtyCreate>,
) -> Result<Json<Specialty>, ApiError> {
    Ok(Json(state.specialties.replace(row_id(id)?, input).await?))
}

#[utoipa::path(
    patch, path = "/specialties/{id}", tag = "specialties",
    params(("id" = i64, Path, description = "Specialty ID")),
    request_body = crate::openapi::SpecialtyUpdateDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::SpecialtyDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn patch(
    State(state): State<ServerState>,
    ValidPath(id): ValidPath<i64>,
    ValidJson(input): ValidJson<SpecialtyUpdate>,
) -> Result<Json<Specialty>, ApiError> {
    Ok(Json(state.specialties.patch(row_id(id)?, input).await?))
}

#[utoipa::path(
    delete, path = "/specialties/{id}", tag = "specialties",
    params(("id" = i64, Path, description = "Specialty ID")),
    responses(
        (status = 200, description = "Deactivated", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn soft_delete(
    State(state): State<ServerState>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Json<Message>, ApiError> {
    state.specialties.deactivate(row_id(id)?).await?;
    Ok(Json(Message::new(DELETED_MESSAGE)))
}
