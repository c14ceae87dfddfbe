use dotenvy::dotenv;
use serde_json::json;
use sqlx::SqlitePool;
use std::env;

use camp_api::database::{self, schema};
use camp_api::services::activity_service::{self, ActivityBody};
use camp_api::services::camper_service::{self, CamperBody};
use camp_api::services::signup_service::{self, SignupBody};
use camp_api::services::ServiceError;

/// Rebuilds the sample dataset through the services so the rows pass the
/// same checks API clients do.
async fn run(pool: &SqlitePool) -> Result<(usize, usize, usize), ServiceError> {
    let campers = [
        ("Caitlin", 8),
        ("Lizzie", 9),
        ("Nicholas Martinez", 12),
        ("Zoe", 11),
    ];
    for (name, age) in campers {
        camper_service::create_camper(
            pool,
            &CamperBody {
                name: Some(json!(name)),
                age: Some(json!(age)),
            },
        )
        .await?;
    }

    let activities = [
        ("Archery", 2),
        ("Swimming", 3),
        ("Hiking by the stream", 2),
        ("Listening to the birds chirp", 1),
        ("Canoeing", 3),
    ];
    for (name, difficulty) in activities {
        activity_service::create_activity(
            pool,
            &ActivityBody {
                name: Some(json!(name)),
                difficulty: Some(json!(difficulty)),
            },
        )
        .await?;
    }

    let signups = [(10, 1, 1), (14, 2, 2), (8, 3, 3), (13, 3, 4), (16, 4, 5)];
    for (time, camper_id, activity_id) in signups {
        signup_service::create_signup(
            pool,
            &SignupBody {
                time: Some(json!(time)),
                camper_id: Some(json!(camper_id)),
                activity_id: Some(json!(activity_id)),
            },
        )
        .await?;
    }

    Ok((campers.len(), activities.len(), signups.len()))
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let db_url = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:camp.db".to_string());
    let pool = database::connect(&db_url)
        .await
        .expect("cannot connect to DB");

    schema::drop_schema(&pool).await.expect("cannot drop tables");
    schema::ensure_schema(&pool)
        .await
        .expect("cannot apply schema");

    match run(&pool).await {
        Ok((campers, activities, signups)) => {
            println!(
                "seeded campers={}, activities={}, signups={}",
                campers, activities, signups
            );
        }
        Err(e) => {
            eprintln!("seed failed: {}", e);
            std::process::exit(1);
        }
    }
}
