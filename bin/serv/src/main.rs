use qz_api::{ApiConfig, ApiState, router, store::TopicStore, tracing::init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    init_tracing(&config.env);

    let store = if config.seed {
        TopicStore::seeded()
    } else {
        TopicStore::new()
    };
    let app = router::app(ApiState::new(store), &config.allowed_origins);

    // Start the server
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(%address, seeded = config.seed, "Topics server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
