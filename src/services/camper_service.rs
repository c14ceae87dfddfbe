use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::SqlitePool;

use crate::database::{camper_repo, signup_repo};
use crate::services::activity_service::ActivityView;
use crate::services::error::ServiceError;
use crate::services::validation;

/// Create and update share one body shape; update only touches the fields
/// that are present. Values stay raw so the validators own the coercion,
/// and an explicit `null` counts as present, not absent.
#[derive(Debug, Default, Deserialize)]
pub struct CamperBody {
    #[serde(default, deserialize_with = "validation::explicit_null")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "validation::explicit_null")]
    pub age: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct CamperView {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

#[derive(Debug, Serialize)]
pub struct CamperDetailView {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub signups: Vec<CamperSignupView>,
}

#[derive(Debug, Serialize)]
pub struct CamperSignupView {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub activity: ActivityView,
}

pub async fn list_campers(pool: &SqlitePool) -> Result<Vec<CamperView>, ServiceError> {
    let mut conn = pool.acquire().await?;
    let rows = camper_repo::list_campers(&mut conn).await?;
    Ok(rows
        .into_iter()
        .map(|row| CamperView {
            id: row.id,
            name: row.name,
            age: row.age,
        })
        .collect())
}

pub async fn camper_exists(pool: &SqlitePool, id: i64) -> Result<bool, ServiceError> {
    let mut conn = pool.acquire().await?;
    Ok(camper_repo::camper_exists(&mut conn, id).await?)
}

pub async fn load_camper_detail(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<CamperDetailView>, ServiceError> {
    let mut conn = pool.acquire().await?;
    let Some(camper) = camper_repo::load_camper(&mut conn, id).await? else {
        return Ok(None);
    };
    let signups = signup_repo::list_for_camper(&mut conn, id).await?;

    Ok(Some(CamperDetailView {
        id: camper.id,
        name: camper.name,
        age: camper.age,
        signups: signups
            .into_iter()
            .map(|row| CamperSignupView {
                id: row.id,
                time: row.time,
                camper_id: row.camper_id,
                activity_id: row.activity_id,
                activity: ActivityView {
                    id: row.activity_id,
                    name: row.activity_name,
                    difficulty: row.activity_difficulty,
                },
            })
            .collect(),
    }))
}

pub async fn create_camper(
    pool: &SqlitePool,
    body: &CamperBody,
) -> Result<CamperView, ServiceError> {
    let name = validation::validate_name(body.name.as_ref())?;
    let age = validation::validate_age(body.age.as_ref())?;

    let mut conn = pool.acquire().await?;
    let id = camper_repo::insert_camper(&mut conn, &name, age).await?;
    Ok(CamperView { id, name, age })
}

/// Partial update: fields absent from the body keep their stored value and
/// are not re-validated. `Ok(None)` means no such camper.
pub async fn update_camper(
    pool: &SqlitePool,
    id: i64,
    body: &CamperBody,
) -> Result<Option<CamperView>, ServiceError> {
    let mut tx = pool.begin().await?;
    let Some(row) = camper_repo::load_camper(&mut tx, id).await? else {
        return Ok(None);
    };

    let name = match body.name.as_ref() {
        Some(value) => validation::validate_name(Some(value))?,
        None => row.name,
    };
    let age = match body.age.as_ref() {
        Some(value) => validation::validate_age(Some(value))?,
        None => row.age,
    };

    camper_repo::update_camper(&mut tx, id, &name, age).await?;
    tx.commit().await?;
    Ok(Some(CamperView { id, name, age }))
}

/// Removes the camper and every signup that references it, in one
/// transaction, children first. Returns whether the camper existed.
pub async fn delete_camper(pool: &SqlitePool, id: i64) -> Result<bool, ServiceError> {
    let mut tx = pool.begin().await?;
    signup_repo::delete_for_camper(&mut tx, id).await?;
    let affected = camper_repo::delete_camper(&mut tx, id).await?;
    if affected == 0 {
        return Ok(false);
    }
    tx.commit().await?;
    Ok(true)
}
