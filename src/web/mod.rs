use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::json;
use sqlx::SqlitePool;
use tower_http::catch_panic::CatchPanicLayer;

use crate::services::ServiceError;

pub mod routes;

use self::routes::{activities, campers, signups};

pub fn app(pool: SqlitePool) -> Router {
    Router::new()
        .route(
            "/campers",
            get(campers::campers_handler).post(campers::camper_create_handler),
        )
        .route(
            "/campers/:id",
            get(campers::camper_detail_handler).patch(campers::camper_update_handler),
        )
        .route(
            "/activities",
            get(activities::activities_handler).post(activities::activity_create_handler),
        )
        .route("/activities/:id", delete(activities::activity_delete_handler))
        .route("/signups", post(signups::signup_create_handler))
        .layer(CatchPanicLayer::new())
        .with_state(pool)
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            ServiceError::Invalid { errors } => {
                tracing::warn!(?errors, "request rejected");
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            ServiceError::Db(e) => {
                tracing::error!(error = %e, "database failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

pub(crate) fn not_found(entity: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("{entity} not found") })),
    )
        .into_response()
}

/// Unwraps an optional-body extractor; a malformed or missing JSON body
/// turns into the same errors list the validators produce.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ServiceError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => Err(ServiceError::Invalid {
            errors: vec![rejection.body_text()],
        }),
    }
}
