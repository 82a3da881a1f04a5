//! In-memory topic storage.
//!
//! Ids come from a counter starting at 1 and are never reused, so listing
//! in id order is listing in insertion order.

use std::{collections::BTreeMap, sync::Arc};

use tokio::sync::RwLock;

use crate::{
    error::ApiError,
    topic::model::{Topic, TopicPayload, stock_topics},
};

#[derive(Clone, Debug, Default)]
pub struct TopicStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug)]
struct Inner {
    topics: BTreeMap<i64, Topic>,
    next_id: i64,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            topics: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl Inner {
    fn code_taken(&self, code: &str, except: Option<i64>) -> bool {
        self.topics
            .values()
            .any(|t| t.code == code && Some(t.id) != except)
    }

    fn insert(&mut self, payload: TopicPayload) -> Topic {
        let topic = Topic {
            id: self.next_id,
            code: payload.code,
            name: payload.name,
            description: payload.description.unwrap_or_default(),
        };
        self.next_id += 1;
        self.topics.insert(topic.id, topic.clone());
        topic
    }
}

impl TopicStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the stock topics
    pub fn seeded() -> Self {
        let mut inner = Inner::default();
        for payload in stock_topics() {
            inner.insert(payload);
        }
        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    pub async fn list(&self) -> Vec<Topic> {
        self.inner.read().await.topics.values().cloned().collect()
    }

    pub async fn get(&self, id: i64) -> Option<Topic> {
        self.inner.read().await.topics.get(&id).cloned()
    }

    pub async fn find_by_code(&self, code: &str) -> Option<Topic> {
        self.inner
            .read()
            .await
            .topics
            .values()
            .find(|t| t.code == code)
            .cloned()
    }

    pub async fn create(&self, payload: TopicPayload) -> Result<Topic, ApiError> {
        let mut inner = self.inner.write().await;
        if inner.code_taken(&payload.code, None) {
            return Err(ApiError::Conflict(format!(
                "topic code '{}' already exists",
                payload.code
            )));
        }
        Ok(inner.insert(payload))
    }

    pub async fn update(&self, id: i64, payload: TopicPayload) -> Result<Topic, ApiError> {
        let mut inner = self.inner.write().await;
        if !inner.topics.contains_key(&id) {
            return Err(ApiError::NotFound(id));
        }
        if inner.code_taken(&payload.code, Some(id)) {
            return Err(ApiError::Conflict(format!(
                "topic code '{}' already exists",
                payload.code
            )));
        }

        let topic = inner.topics.get_mut(&id).ok_or(ApiError::NotFound(id))?;
        topic.code = payload.code;
        topic.name = payload.name;
        topic.description = payload.description.unwrap_or_default();
        Ok(topic.clone())
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.inner
            .write()
            .await
            .topics
            .remove(&id)
            .map(|_| ())
            .ok_or(ApiError::NotFound(id))
    }
}
