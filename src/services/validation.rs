use serde::{Deserialize, Deserializer};
use serde_json::Value;
use sqlx::SqliteConnection;
use thiserror::Error;

use crate::database::{activity_repo, camper_repo};

/// A single rejected field. Messages are returned to the client verbatim.
#[derive(Debug, Error)]
pub enum FieldError {
    /// Presence, type, or range failure.
    #[error("{0}")]
    Invalid(String),
    /// A foreign key that points at nothing.
    #[error("{0} not found")]
    MissingReference(&'static str),
    /// The reference checks read the store, so they can fail like any query.
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// Name must be a non-empty string. Shared by campers and activities.
pub fn validate_name(value: Option<&Value>) -> Result<String, FieldError> {
    match value.and_then(|v| v.as_str()) {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(FieldError::Invalid("Name is required".to_string())),
    }
}

pub fn validate_age(value: Option<&Value>) -> Result<i64, FieldError> {
    let Some(value) = value else {
        return Err(FieldError::Invalid("Age is required".to_string()));
    };
    let Some(age) = coerce_int(value) else {
        return Err(FieldError::Invalid("Age must be an integer".to_string()));
    };
    if !(8..=18).contains(&age) {
        return Err(FieldError::Invalid(
            "Age must be between 8 and 18".to_string(),
        ));
    }
    Ok(age)
}

/// Hour of day, 24-hour format.
pub fn validate_time(value: Option<&Value>) -> Result<i64, FieldError> {
    let Some(value) = value else {
        return Err(FieldError::Invalid("Time is required".to_string()));
    };
    let Some(time) = coerce_int(value) else {
        return Err(FieldError::Invalid("Time must be an integer".to_string()));
    };
    if !(0..=23).contains(&time) {
        return Err(FieldError::Invalid(
            "Time must be between 0 and 23".to_string(),
        ));
    }
    Ok(time)
}

// Difficulty has no agreed range; any integer is accepted.
pub fn validate_difficulty(value: Option<&Value>) -> Result<i64, FieldError> {
    let Some(value) = value else {
        return Err(FieldError::Invalid("Difficulty is required".to_string()));
    };
    coerce_int(value).ok_or_else(|| FieldError::Invalid("Difficulty must be an integer".to_string()))
}

/// Unlike the field checks above, the reference checks hit the database: a
/// signup may only point at rows that exist right now. Callers pass the
/// connection of the transaction the insert will run in.
pub async fn validate_camper_ref(
    conn: &mut SqliteConnection,
    value: Option<&Value>,
) -> Result<i64, FieldError> {
    let Some(camper_id) = value.and_then(coerce_int) else {
        return Err(FieldError::MissingReference("Camper"));
    };
    if !camper_repo::camper_exists(conn, camper_id).await? {
        return Err(FieldError::MissingReference("Camper"));
    }
    Ok(camper_id)
}

pub async fn validate_activity_ref(
    conn: &mut SqliteConnection,
    value: Option<&Value>,
) -> Result<i64, FieldError> {
    let Some(activity_id) = value.and_then(coerce_int) else {
        return Err(FieldError::MissingReference("Activity"));
    };
    if !activity_repo::activity_exists(conn, activity_id).await? {
        return Err(FieldError::MissingReference("Activity"));
    }
    Ok(activity_id)
}

/// `deserialize_with` hook for body fields. A field that is present with an
/// explicit `null` stays `Some(Value::Null)`, so updates treat it as a
/// supplied (and invalid) value; plain `Option` would fold it into "absent".
pub fn explicit_null<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Accepts JSON integers, integral floats and numeric strings ("12").
/// Fractional values are rejected, not truncated.
fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
