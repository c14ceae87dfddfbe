use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sqlx::SqlitePool;

use crate::services::camper_service::{self, CamperBody};
use crate::services::ServiceError;
use crate::web::{json_body, not_found};

pub async fn campers_handler(State(pool): State<SqlitePool>) -> Result<Response, ServiceError> {
    let campers = camper_service::list_campers(&pool).await?;
    Ok(Json(campers).into_response())
}

pub async fn camper_detail_handler(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Response, ServiceError> {
    let Some(camper) = camper_service::load_camper_detail(&pool, id).await? else {
        return Ok(not_found("Camper"));
    };
    Ok(Json(camper).into_response())
}

pub async fn camper_create_handler(
    State(pool): State<SqlitePool>,
    payload: Result<Json<CamperBody>, JsonRejection>,
) -> Result<Response, ServiceError> {
    let body = json_body(payload)?;
    let camper = camper_service::create_camper(&pool, &body).await?;
    Ok((StatusCode::CREATED, Json(camper)).into_response())
}

pub async fn camper_update_handler(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    payload: Result<Json<CamperBody>, JsonRejection>,
) -> Result<Response, ServiceError> {
    // A missing camper wins over an unparseable body: 404 before 400.
    if !camper_service::camper_exists(&pool, id).await? {
        return Ok(not_found("Camper"));
    }
    let body = json_body(payload)?;
    let Some(camper) = camper_service::update_camper(&pool, id, &body).await? else {
        return Ok(not_found("Camper"));
    };
    Ok((StatusCode::ACCEPTED, Json(camper)).into_response())
}
