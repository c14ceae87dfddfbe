use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::SqlitePool;

use crate::database::signup_repo;
use crate::services::activity_service::ActivityView;
use crate::services::camper_service::CamperView;
use crate::services::error::ServiceError;
use crate::services::validation;

#[derive(Debug, Default, Deserialize)]
pub struct SignupBody {
    #[serde(default, deserialize_with = "validation::explicit_null")]
    pub time: Option<Value>,
    #[serde(default, deserialize_with = "validation::explicit_null")]
    pub camper_id: Option<Value>,
    #[serde(default, deserialize_with = "validation::explicit_null")]
    pub activity_id: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct SignupView {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub camper: CamperView,
    pub activity: ActivityView,
}

/// Validates the hour and both referenced rows before inserting; the
/// reference checks and the insert share one transaction so a parent
/// cannot disappear between the check and the write.
pub async fn create_signup(
    pool: &SqlitePool,
    body: &SignupBody,
) -> Result<SignupView, ServiceError> {
    let time = validation::validate_time(body.time.as_ref())?;

    let mut tx = pool.begin().await?;
    let camper_id = validation::validate_camper_ref(&mut tx, body.camper_id.as_ref()).await?;
    let activity_id = validation::validate_activity_ref(&mut tx, body.activity_id.as_ref()).await?;

    let id = signup_repo::insert_signup(&mut tx, time, camper_id, activity_id).await?;
    let row = signup_repo::load_signup_with_refs(&mut tx, id).await?;
    tx.commit().await?;

    Ok(SignupView {
        id: row.id,
        time: row.time,
        camper_id: row.camper_id,
        activity_id: row.activity_id,
        camper: CamperView {
            id: row.camper_id,
            name: row.camper_name,
            age: row.camper_age,
        },
        activity: ActivityView {
            id: row.activity_id,
            name: row.activity_name,
            difficulty: row.activity_difficulty,
        },
    })
}
