use std::sync::{Arc, Mutex};

use qz_api::{ApiState, router, store::TopicStore};
use qz_client::{
    ClientConfig, HttpTopicClient, StatusCode, Topic, TopicDraft, TopicId, TopicService,
    TransportError,
};

/// Service call as observed by the fake
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Get(TopicId),
    Create(TopicDraft),
    Update(TopicId, TopicDraft),
    Delete(TopicId),
}

/// Operation that can be made to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    List,
    Create,
    Update,
    Delete,
}

#[derive(Debug, Default)]
struct FakeState {
    topics: Vec<Topic>,
    next_id: TopicId,
    calls: Vec<Call>,
    failing: Vec<Op>,
}

/// In-memory `TopicService` that records every call. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct FakeTopicService {
    state: Arc<Mutex<FakeState>>,
}

impl FakeTopicService {
    pub fn with_topics(topics: Vec<Topic>) -> Self {
        let next_id = topics.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            state: Arc::new(Mutex::new(FakeState {
                topics,
                next_id,
                ..FakeState::default()
            })),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    pub fn topics(&self) -> Vec<Topic> {
        self.state.lock().unwrap().topics.clone()
    }

    /// Make every later call of `op` fail
    pub fn fail(&self, op: Op) {
        self.state.lock().unwrap().failing.push(op);
    }

    pub fn recover(&self, op: Op) {
        self.state.lock().unwrap().failing.retain(|o| *o != op);
    }

    fn record(&self, call: Call, op: Option<Op>) -> Result<(), TransportError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        match op {
            Some(op) if state.failing.contains(&op) => {
                Err(TransportError::Status(StatusCode::INTERNAL_SERVER_ERROR))
            }
            _ => Ok(()),
        }
    }
}

impl TopicService for FakeTopicService {
    async fn list_topics(&self) -> Result<Vec<Topic>, TransportError> {
        self.record(Call::List, Some(Op::List))?;
        Ok(self.topics())
    }

    async fn get_topic(&self, id: TopicId) -> Result<Topic, TransportError> {
        self.record(Call::Get(id), None)?;
        self.topics()
            .into_iter()
            .find(|t| t.id == id)
            .ok_or(TransportError::Status(StatusCode::NOT_FOUND))
    }

    async fn create_topic(&self, draft: &TopicDraft) -> Result<(), TransportError> {
        self.record(Call::Create(draft.clone()), Some(Op::Create))?;
        let mut state = self.state.lock().unwrap();
        let id = state.next_id;
        state.next_id += 1;
        state.topics.push(Topic {
            id,
            code: draft.code.clone(),
            name: draft.name.clone(),
            description: draft.description.clone(),
        });
        Ok(())
    }

    async fn update_topic(&self, id: TopicId, draft: &TopicDraft) -> Result<(), TransportError> {
        self.record(Call::Update(id, draft.clone()), Some(Op::Update))?;
        let mut state = self.state.lock().unwrap();
        let topic = state
            .topics
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TransportError::Status(StatusCode::NOT_FOUND))?;
        topic.code = draft.code.clone();
        topic.name = draft.name.clone();
        topic.description = draft.description.clone();
        Ok(())
    }

    async fn delete_topic(&self, id: TopicId) -> Result<(), TransportError> {
        self.record(Call::Delete(id), Some(Op::Delete))?;
        let mut state = self.state.lock().unwrap();
        let before = state.topics.len();
        state.topics.retain(|t| t.id != id);
        if state.topics.len() == before {
            return Err(TransportError::Status(StatusCode::NOT_FOUND));
        }
        Ok(())
    }
}

pub fn topic(id: TopicId, code: &str, name: &str) -> Topic {
    Topic {
        id,
        code: code.to_string(),
        name: name.to_string(),
        description: format!("All about {name}"),
    }
}

/// Topics 1 (general), 3 (history) and 7 (science)
pub fn stock() -> Vec<Topic> {
    vec![
        topic(1, "general", "General Knowledge"),
        topic(3, "history", "History"),
        topic(7, "science", "Science"),
    ]
}

/// Serve the reference backend on an ephemeral port and return a client for it
pub async fn client_for(store: TopicStore) -> anyhow::Result<HttpTopicClient> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = router::app(ApiState::new(store), &[]);

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(HttpTopicClient::new(&ClientConfig {
        api_url: format!("http://{addr}"),
        request_timeout_secs: Some(5),
    })?)
}
