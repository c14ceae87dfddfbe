use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

pub mod activity_repo;
pub mod camper_repo;
pub mod schema;
pub mod signup_repo;

/// Open a pool against `db_url`, creating the database file on first run.
/// Foreign keys are switched on per connection; SQLite leaves them off by
/// default.
pub async fn connect(db_url: &str) -> sqlx::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(db_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new().connect_with(options).await
}
