use axum::{Extension, Router};
use shortlist_api::infra::{config::Config, cors, db, routes};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shortlist_api=info".into()),
        )
        .init();

    let config = Config::from_env();

    let pool = db::connect(&config.database_url)
        .await
        .expect("Failed to create pool");
    db::init_schema(&pool)
        .await
        .expect("Failed to initialize schema");

    let app: Router = routes::create_router()
        .layer(cors::create_cors())
        .layer(Extension(pool));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind");
    tracing::info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}
