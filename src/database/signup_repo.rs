use sqlx::SqliteConnection;

use crate::models::{SignupRow, SignupWithActivityRow, SignupWithRefsRow};

const SQL_INSERT_SIGNUP: &str = r#"
INSERT INTO signups (time, camper_id, activity_id)
VALUES (?, ?, ?)
"#;

const SQL_LOAD_SIGNUP: &str = r#"
SELECT id, time, camper_id, activity_id
FROM signups
WHERE id = ?1
"#;

const SQL_LOAD_SIGNUP_WITH_REFS: &str = r#"
SELECT
  s.id,
  s.time,
  s.camper_id,
  s.activity_id,
  c.name AS camper_name,
  c.age AS camper_age,
  a.name AS activity_name,
  a.difficulty AS activity_difficulty
FROM signups s
JOIN campers c ON c.id = s.camper_id
JOIN activities a ON a.id = s.activity_id
WHERE s.id = ?1
"#;

const SQL_LIST_FOR_CAMPER: &str = r#"
SELECT
  s.id,
  s.time,
  s.camper_id,
  s.activity_id,
  a.name AS activity_name,
  a.difficulty AS activity_difficulty
FROM signups s
JOIN activities a ON a.id = s.activity_id
WHERE s.camper_id = ?1
ORDER BY s.id ASC
"#;

const SQL_DELETE_FOR_CAMPER: &str = r#"
DELETE FROM signups
WHERE camper_id = ?1
"#;

const SQL_DELETE_FOR_ACTIVITY: &str = r#"
DELETE FROM signups
WHERE activity_id = ?1
"#;

pub async fn insert_signup(
    conn: &mut SqliteConnection,
    time: i64,
    camper_id: i64,
    activity_id: i64,
) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_SIGNUP)
        .bind(time)
        .bind(camper_id)
        .bind(activity_id)
        .execute(conn)
        .await?;
    Ok(res.last_insert_rowid())
}

pub async fn load_signup(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<Option<SignupRow>> {
    sqlx::query_as::<_, SignupRow>(SQL_LOAD_SIGNUP)
        .bind(id)
        .fetch_optional(conn)
        .await
}

/// Only valid for an id that exists; the create path calls this inside the
/// transaction that just inserted the row.
pub async fn load_signup_with_refs(
    conn: &mut SqliteConnection,
    id: i64,
) -> sqlx::Result<SignupWithRefsRow> {
    sqlx::query_as::<_, SignupWithRefsRow>(SQL_LOAD_SIGNUP_WITH_REFS)
        .bind(id)
        .fetch_one(conn)
        .await
}

pub async fn list_for_camper(
    conn: &mut SqliteConnection,
    camper_id: i64,
) -> sqlx::Result<Vec<SignupWithActivityRow>> {
    sqlx::query_as::<_, SignupWithActivityRow>(SQL_LIST_FOR_CAMPER)
        .bind(camper_id)
        .fetch_all(conn)
        .await
}

pub async fn delete_for_camper(conn: &mut SqliteConnection, camper_id: i64) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_FOR_CAMPER)
        .bind(camper_id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

pub async fn delete_for_activity(
    conn: &mut SqliteConnection,
    activity_id: i64,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_FOR_ACTIVITY)
        .bind(activity_id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}
