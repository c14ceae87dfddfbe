use sqlx::SqliteConnection;

use crate::models::CamperRow;

const SQL_LIST_CAMPERS: &str = r#"
SELECT id, name, age
FROM campers
ORDER BY id ASC
"#;

const SQL_LOAD_CAMPER: &str = r#"
SELECT id, name, age
FROM campers
WHERE id = ?1
"#;

const SQL_CAMPER_EXISTS: &str = r#"
SELECT 1
FROM campers
WHERE id = ?1
"#;

const SQL_INSERT_CAMPER: &str = r#"
INSERT INTO campers (name, age)
VALUES (?, ?)
"#;

const SQL_UPDATE_CAMPER: &str = r#"
UPDATE campers
SET name = ?, age = ?
WHERE id = ?
"#;

const SQL_DELETE_CAMPER: &str = r#"
DELETE FROM campers
WHERE id = ?1
"#;

pub async fn list_campers(conn: &mut SqliteConnection) -> sqlx::Result<Vec<CamperRow>> {
    sqlx::query_as::<_, CamperRow>(SQL_LIST_CAMPERS)
        .fetch_all(conn)
        .await
}

pub async fn load_camper(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<Option<CamperRow>> {
    sqlx::query_as::<_, CamperRow>(SQL_LOAD_CAMPER)
        .bind(id)
        .fetch_optional(conn)
        .await
}

pub async fn camper_exists(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<bool> {
    let hit = sqlx::query_scalar::<_, i64>(SQL_CAMPER_EXISTS)
        .bind(id)
        .fetch_optional(conn)
        .await?;
    Ok(hit.is_some())
}

pub async fn insert_camper(
    conn: &mut SqliteConnection,
    name: &str,
    age: i64,
) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_CAMPER)
        .bind(name)
        .bind(age)
        .execute(conn)
        .await?;
    Ok(res.last_insert_rowid())
}

pub async fn update_camper(
    conn: &mut SqliteConnection,
    id: i64,
    name: &str,
    age: i64,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_UPDATE_CAMPER)
        .bind(name)
        .bind(age)
        .bind(id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

pub async fn delete_camper(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_CAMPER)
        .bind(id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}
