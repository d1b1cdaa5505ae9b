//! Complaint handlers: create, list, read, update, delete.

use crate::error::{ApiError, Operation};
use crate::model::{Complaint, ComplaintInput};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

#[utoipa::path(
    post,
    path = "/complaints",
    request_body = ComplaintInput,
    responses(
        (status = 201, description = "Complaint created", body = String),
        (status = 500, description = "Error creating complaint", body = String)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ComplaintInput>,
) -> Result<impl IntoResponse, ApiError> {
    let id = state
        .store
        .create(&input)
        .await
        .map_err(ApiError::during(Operation::Create))?;
    tracing::info!(id, "complaint created");
    Ok((StatusCode::CREATED, "Complaint created"))
}

#[utoipa::path(
    get,
    path = "/complaints",
    responses(
        (status = 200, description = "All complaints", body = [Complaint]),
        (status = 500, description = "Error retrieving complaints", body = String)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Complaint>>, ApiError> {
    let rows = state
        .store
        .list()
        .await
        .map_err(ApiError::during(Operation::List))?;
    Ok(Json(rows))
}

/// A missing row is still 200, with an empty body.
#[utoipa::path(
    get,
    path = "/complaints/{id}",
    params(("id" = String, Path, description = "Complaint id")),
    responses(
        (status = 200, description = "The complaint, or an empty body if no row matches", body = Complaint),
        (status = 500, description = "Error retrieving complaint", body = String)
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let row = state
        .store
        .get(&id)
        .await
        .map_err(ApiError::during(Operation::Read))?;
    Ok(match row {
        Some(row) => Json(row).into_response(),
        None => {
            tracing::debug!(%id, "no complaint with this id");
            StatusCode::OK.into_response()
        }
    })
}

#[utoipa::path(
    put,
    path = "/complaints/{id}",
    params(("id" = String, Path, description = "Complaint id")),
    request_body = ComplaintInput,
    responses(
        (status = 200, description = "Complaint updated", body = String),
        (status = 500, description = "Error updating complaint", body = String)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<ComplaintInput>,
) -> Result<impl IntoResponse, ApiError> {
    let affected = state
        .store
        .update(&id, &input)
        .await
        .map_err(ApiError::during(Operation::Update))?;
    tracing::info!(%id, affected, "complaint updated");
    Ok((StatusCode::OK, "Complaint updated"))
}

#[utoipa::path(
    delete,
    path = "/complaints/{id}",
    params(("id" = String, Path, description = "Complaint id")),
    responses(
        (status = 200, description = "Complaint deleted", body = String),
        (status = 500, description = "Error deleting complaint", body = String)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let affected = state
        .store
        .delete(&id)
        .await
        .map_err(ApiError::during(Operation::Delete))?;
    tracing::info!(%id, affected, "complaint deleted");
    Ok((StatusCode::OK, "Complaint deleted"))
}
