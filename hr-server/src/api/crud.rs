//! Generic CRUD handlers
//!
//! One set of handlers serves every [`Resource`]; routes instantiate them
//! per entity (`list::<Student>`, `create::<Employee>`, ...).

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};
use serde::Serialize;
use shared::error::{AppError, AppResult};

use super::resource::{CrudResource, DeleteMode, Resource};
use crate::db::ActiveFilter;
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, AppError>;

/// Body returned by DELETE
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub id: i64,
    pub message: String,
}

fn not_found<R: CrudResource>(id: i64) -> AppError {
    AppError::with_message(R::NOT_FOUND, format!("{} with ID {} not found", R::NAME, id))
}

fn path_id(id: Result<Path<i64>, PathRejection>) -> AppResult<i64> {
    id.map(|Path(id)| id)
        .map_err(|e| AppError::invalid_format(e.body_text()))
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(data)| data)
        .map_err(|e| AppError::invalid_format(e.body_text()))
}

/// GET /{path}?is_active=
pub async fn list<R: Resource>(
    State(state): State<AppState>,
    filter: Result<Query<ActiveFilter>, QueryRejection>,
) -> ApiResult<Vec<R>> {
    let Query(filter) = filter.map_err(|e| AppError::invalid_format(e.body_text()))?;
    let rows = R::repository(&state).find_all(filter).await?;
    Ok(Json(rows))
}

/// GET /{path}/{id}
pub async fn get_by_id<R: CrudResource>(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<R> {
    let id = path_id(id)?;
    let row = R::repository(&state)
        .find_by_id(id, R::GET_FILTER)
        .await?
        .ok_or_else(|| not_found::<R>(id))?;
    Ok(Json(row))
}

/// POST /{path}
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    payload: Result<Json<R::Create>, JsonRejection>,
) -> ApiResult<R> {
    let data = json_body(payload)?;
    let row = R::repository(&state).create(data).await?;
    tracing::info!(resource = R::NAME, id = row.id(), "Created");
    Ok(Json(row))
}

/// PUT /{path}/{id}
pub async fn update<R: CrudResource>(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<R::Update>, JsonRejection>,
) -> ApiResult<R> {
    let id = path_id(id)?;
    let data = json_body(payload)?;
    let row = R::repository(&state)
        .update(id, data)
        .await?
        .ok_or_else(|| not_found::<R>(id))?;
    tracing::info!(resource = R::NAME, id, "Updated");
    Ok(Json(row))
}

/// DELETE /{path}/{id}
pub async fn delete<R: CrudResource>(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<DeleteResponse> {
    let id = path_id(id)?;
    let repo = R::repository(&state);

    let message = match R::DELETE_MODE {
        DeleteMode::Hard => {
            repo.hard_delete(id).await?;
            format!("{} with ID {} is deleted", R::NAME, id)
        }
        DeleteMode::Soft => {
            if !repo.soft_delete(id).await? {
                return Err(not_found::<R>(id));
            }
            format!("{} with ID {} is deactivated", R::NAME, id)
        }
    };

    tracing::info!(resource = R::NAME, id, mode = ?R::DELETE_MODE, "Deleted");
    Ok(Json(DeleteResponse { id, message }))
}
