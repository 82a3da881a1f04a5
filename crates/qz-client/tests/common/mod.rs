use axum::Router;
use qz_api::{ApiState, router, store::TopicStore};
use qz_client::{ClientConfig, HttpTopicClient};

/// Serve the reference backend on an ephemeral port and return its base URL
pub async fn spawn_backend(store: TopicStore) -> anyhow::Result<String> {
    spawn_router(router::app(ApiState::new(store), &[])).await
}

/// Serve an arbitrary router on an ephemeral port and return its base URL
pub async fn spawn_router(app: Router) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(format!("http://{addr}"))
}

/// Client pointed at a freshly spawned backend
pub async fn client_for(store: TopicStore) -> anyhow::Result<HttpTopicClient> {
    client_at(spawn_backend(store).await?)
}

pub fn client_at(api_url: String) -> anyhow::Result<HttpTopicClient> {
    let config = ClientConfig {
        api_url,
        request_timeout_secs: Some(5),
    };
    Ok(HttpTopicClient::new(&config)?)
}

/// Base URL where nothing is listening
pub async fn unreachable_url() -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}"))
}
