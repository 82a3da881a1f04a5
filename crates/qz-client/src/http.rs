use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::{
    config::ClientConfig,
    error::TransportError,
    model::{Topic, TopicDraft, TopicId},
    service::TopicService,
};

/// Path of the topics collection, relative to the API base URL
pub const TOPICS_PATH: &str = "/api/topics";

/// [`TopicService`] backed by the REST API
#[derive(Debug, Clone)]
pub struct HttpTopicClient {
    http: Client,
    topics_url: String,
}

impl HttpTopicClient {
    /// Build a client from configuration
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Self::with_client(builder.build()?, &config.api_url)
    }

    /// Build a client around an existing `reqwest::Client`
    pub fn with_client(http: Client, api_url: &str) -> Result<Self, TransportError> {
        let topics_url = format!("{}{TOPICS_PATH}", api_url.trim_end_matches('/'));

        Url::parse(&topics_url).map_err(|e| TransportError::InvalidUrl {
            url: api_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { http, topics_url })
    }

    /// URL of the topics collection
    pub fn topics_url(&self) -> &str {
        &self.topics_url
    }

    fn topic_url(&self, id: TopicId) -> String {
        format!("{}/{id}", self.topics_url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, TransportError> {
        let response = request.send().await.inspect_err(|e| {
            tracing::warn!("Topics request did not complete: {e}");
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, url = %response.url(), "Topics request rejected");
            return Err(TransportError::Status(status));
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, TransportError> {
        let url = response.url().clone();
        response.json().await.map_err(|e| {
            tracing::warn!(%url, "Topics response could not be decoded: {e}");
            TransportError::Decode(e)
        })
    }
}

impl TopicService for HttpTopicClient {
    async fn list_topics(&self) -> Result<Vec<Topic>, TransportError> {
        tracing::debug!(url = %self.topics_url, "Fetching topics");
        let response = self.send(self.http.get(&self.topics_url)).await?;
        Self::decode(response).await
    }

    async fn get_topic(&self, id: TopicId) -> Result<Topic, TransportError> {
        tracing::debug!(id, "Fetching topic");
        let response = self.send(self.http.get(self.topic_url(id))).await?;
        Self::decode(response).await
    }

    async fn create_topic(&self, draft: &TopicDraft) -> Result<(), TransportError> {
        tracing::debug!(code = %draft.code, "Creating topic");
        self.send(self.http.post(&self.topics_url).json(draft))
            .await?;
        Ok(())
    }

    async fn update_topic(&self, id: TopicId, draft: &TopicDraft) -> Result<(), TransportError> {
        tracing::debug!(id, code = %draft.code, "Updating topic");
        self.send(self.http.put(self.topic_url(id)).json(draft))
            .await?;
        Ok(())
    }

    async fn delete_topic(&self, id: TopicId) -> Result<(), TransportError> {
        tracing::debug!(id, "Deleting topic");
        self.send(self.http.delete(self.topic_url(id))).await?;
        Ok(())
    }
}
