use sqlx::SqliteConnection;

use crate::models::ActivityRow;

const SQL_LIST_ACTIVITIES: &str = r#"
SELECT id, name, difficulty
FROM activities
ORDER BY id ASC
"#;

const SQL_ACTIVITY_EXISTS: &str = r#"
SELECT 1
FROM activities
WHERE id = ?1
"#;

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activities (name, difficulty)
VALUES (?, ?)
"#;

const SQL_DELETE_ACTIVITY: &str = r#"
DELETE FROM activities
WHERE id = ?1
"#;

pub async fn list_activities(conn: &mut SqliteConnection) -> sqlx::Result<Vec<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_LIST_ACTIVITIES)
        .fetch_all(conn)
        .await
}

pub async fn activity_exists(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<bool> {
    let hit = sqlx::query_scalar::<_, i64>(SQL_ACTIVITY_EXISTS)
        .bind(id)
        .fetch_optional(conn)
        .await?;
    Ok(hit.is_some())
}

pub async fn insert_activity(
    conn: &mut SqliteConnection,
    name: &str,
    difficulty: i64,
) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_ACTIVITY)
        .bind(name)
        .bind(difficulty)
        .execute(conn)
        .await?;
    Ok(res.last_insert_rowid())
}

pub async fn delete_activity(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_ACTIVITY)
        .bind(id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}
