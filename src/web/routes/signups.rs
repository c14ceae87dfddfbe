use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sqlx::SqlitePool;

use crate::services::signup_service::{self, SignupBody};
use crate::services::ServiceError;
use crate::web::json_body;

pub async fn signup_create_handler(
    State(pool): State<SqlitePool>,
    payload: Result<Json<SignupBody>, JsonRejection>,
) -> Result<Response, ServiceError> {
    let body = json_body(payload)?;
    let signup = signup_service::create_signup(&pool, &body).await?;
    Ok((StatusCode::CREATED, Json(signup)).into_response())
}
