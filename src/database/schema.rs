use sqlx::SqlitePool;

// AUTOINCREMENT so ids of deleted rows are never handed out again.
const SQL_CREATE_CAMPERS: &str = r#"
CREATE TABLE IF NOT EXISTS campers (
  id   INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL,
  age  INTEGER NOT NULL
)
"#;

const SQL_CREATE_ACTIVITIES: &str = r#"
CREATE TABLE IF NOT EXISTS activities (
  id         INTEGER PRIMARY KEY AUTOINCREMENT,
  name       TEXT NOT NULL,
  difficulty INTEGER NOT NULL
)
"#;

// The store deletes child signups itself before removing a parent, so the
// foreign keys carry no ON DELETE action.
const SQL_CREATE_SIGNUPS: &str = r#"
CREATE TABLE IF NOT EXISTS signups (
  id          INTEGER PRIMARY KEY AUTOINCREMENT,
  time        INTEGER NOT NULL,
  camper_id   INTEGER NOT NULL REFERENCES campers (id),
  activity_id INTEGER NOT NULL REFERENCES activities (id)
)
"#;

const SQL_INDEX_SIGNUPS_CAMPER: &str = r#"
CREATE INDEX IF NOT EXISTS idx_signups_camper_id ON signups (camper_id)
"#;

const SQL_INDEX_SIGNUPS_ACTIVITY: &str = r#"
CREATE INDEX IF NOT EXISTS idx_signups_activity_id ON signups (activity_id)
"#;

/// Idempotent DDL, run once at startup. There is no migrations framework;
/// this is the whole schema story.
pub async fn ensure_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    for sql in [
        SQL_CREATE_CAMPERS,
        SQL_CREATE_ACTIVITIES,
        SQL_CREATE_SIGNUPS,
        SQL_INDEX_SIGNUPS_CAMPER,
        SQL_INDEX_SIGNUPS_ACTIVITY,
    ] {
        sqlx::query(sql).execute(pool).await?;
    }
    Ok(())
}

/// Drop everything, children first. Used by the seed binary.
pub async fn drop_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    for sql in [
        "DROP TABLE IF EXISTS signups",
        "DROP TABLE IF EXISTS campers",
        "DROP TABLE IF EXISTS activities",
    ] {
        sqlx::query(sql).execute(pool).await?;
    }
    Ok(())
}
