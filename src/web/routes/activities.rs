use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sqlx::SqlitePool;

use crate::services::activity_service::{self, ActivityBody};
use crate::services::ServiceError;
use crate::web::{json_body, not_found};

pub async fn activities_handler(State(pool): State<SqlitePool>) -> Result<Response, ServiceError> {
    let activities = activity_service::list_activities(&pool).await?;
    Ok(Json(activities).into_response())
}

pub async fn activity_create_handler(
    State(pool): State<SqlitePool>,
    payload: Result<Json<ActivityBody>, JsonRejection>,
) -> Result<Response, ServiceError> {
    let body = json_body(payload)?;
    let activity = activity_service::create_activity(&pool, &body).await?;
    Ok((StatusCode::CREATED, Json(activity)).into_response())
}

pub async fn activity_delete_handler(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Response, ServiceError> {
    if !activity_service::delete_activity(&pool, id).await? {
        return Ok(not_found("Activity"));
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}
