use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::SqlitePool;

use crate::database::{activity_repo, signup_repo};
use crate::services::error::ServiceError;
use crate::services::validation;

#[derive(Debug, Default, Deserialize)]
pub struct ActivityBody {
    #[serde(default, deserialize_with = "validation::explicit_null")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "validation::explicit_null")]
    pub difficulty: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ActivityView {
    pub id: i64,
    pub name: String,
    pub difficulty: i64,
}

pub async fn list_activities(pool: &SqlitePool) -> Result<Vec<ActivityView>, ServiceError> {
    let mut conn = pool.acquire().await?;
    let rows = activity_repo::list_activities(&mut conn).await?;
    Ok(rows
        .into_iter()
        .map(|row| ActivityView {
            id: row.id,
            name: row.name,
            difficulty: row.difficulty,
        })
        .collect())
}

pub async fn create_activity(
    pool: &SqlitePool,
    body: &ActivityBody,
) -> Result<ActivityView, ServiceError> {
    let name = validation::validate_name(body.name.as_ref())?;
    let difficulty = validation::validate_difficulty(body.difficulty.as_ref())?;

    let mut conn = pool.acquire().await?;
    let id = activity_repo::insert_activity(&mut conn, &name, difficulty).await?;
    Ok(ActivityView {
        id,
        name,
        difficulty,
    })
}

/// Removes the activity and every signup that references it, in one
/// transaction, children first. Returns whether the activity existed.
pub async fn delete_activity(pool: &SqlitePool, id: i64) -> Result<bool, ServiceError> {
    let mut tx = pool.begin().await?;
    signup_repo::delete_for_activity(&mut tx, id).await?;
    let affected = activity_repo::delete_activity(&mut tx, id).await?;
    if affected == 0 {
        return Ok(false);
    }
    tx.commit().await?;
    Ok(true)
}
