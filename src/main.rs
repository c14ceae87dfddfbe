use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;

use camp_api::{database, web};

#[tokio::main]
async fn main() {
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::fmt::init();

    // 2. Connect to the database
    let db_url = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:camp.db".to_string());
    println!("Connecting to database: {}", db_url);

    let pool = database::connect(&db_url)
        .await
        .expect("cannot connect to DB");
    database::schema::ensure_schema(&pool)
        .await
        .expect("cannot apply schema");

    // 3. Build the application
    let app = web::app(pool);

    // 4. Start the server (with fallback port)
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5555);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("cannot parse host/port");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!(
                "⚠️  Could not bind {}: {}. Trying fallback {}:{}",
                addr,
                e,
                host,
                port + 1
            );
            let fallback: SocketAddr = format!("{}:{}", host, port + 1)
                .parse()
                .expect("cannot parse fallback");
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("cannot bind fallback port")
        }
    };

    let bound_addr = listener.local_addr().expect("no local addr");
    println!("🚀 Camp API running on http://{}", bound_addr);

    axum::serve(listener, app).await.expect("server error");
}
