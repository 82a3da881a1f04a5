//! Quiz configuration collected on the landing page.
//!
//! The quiz page receives it as query parameters, e.g.
//! `/quiz?questions=10&topic=all`.

use std::{fmt, str::FromStr};

use qz_client::{Topic, TopicId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_QUESTIONS: u8 = 5;
pub const MAX_QUESTIONS: u8 = 30;
pub const DEFAULT_QUESTIONS: u8 = 10;

const ALL_TOPICS: &str = "all";

#[derive(Error, Debug)]
pub enum QuizConfigError {
    #[error("invalid quiz query: {0}")]
    Query(#[from] serde_urlencoded::de::Error),
    #[error("invalid topic '{0}', expected a topic id or 'all'")]
    Topic(String),
}

/// Which topic the quiz draws questions from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TopicChoice {
    /// Mixed questions from every topic
    #[default]
    All,
    Topic(TopicId),
}

impl fmt::Display for TopicChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_TOPICS),
            Self::Topic(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for TopicChoice {
    type Err = QuizConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(ALL_TOPICS) {
            return Ok(Self::All);
        }
        s.parse()
            .map(Self::Topic)
            .map_err(|_| QuizConfigError::Topic(s.to_string()))
    }
}

/// Entry of the topic picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicOption {
    pub value: TopicChoice,
    pub label: String,
    pub description: String,
}

/// "All Topics (Mixed)" followed by every topic, in collection order
pub fn topic_options(topics: &[Topic]) -> Vec<TopicOption> {
    std::iter::once(TopicOption {
        value: TopicChoice::All,
        label: "All Topics (Mixed)".to_string(),
        description: String::new(),
    })
    .chain(topics.iter().map(|topic| TopicOption {
        value: TopicChoice::Topic(topic.id),
        label: topic.name.clone(),
        description: topic.description.clone(),
    }))
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfig {
    questions: u8,
    topic: TopicChoice,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            questions: DEFAULT_QUESTIONS,
            topic: TopicChoice::All,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct QuizQuery {
    #[serde(default)]
    questions: Option<u32>,
    #[serde(default)]
    topic: Option<String>,
}

impl QuizConfig {
    pub fn new(questions: u32, topic: TopicChoice) -> Self {
        let mut config = Self {
            topic,
            ..Self::default()
        };
        config.set_questions(questions);
        config
    }

    pub const fn questions(&self) -> u8 {
        self.questions
    }

    pub const fn topic(&self) -> TopicChoice {
        self.topic
    }

    /// Clamped to `MIN_QUESTIONS..=MAX_QUESTIONS`
    pub fn set_questions(&mut self, questions: u32) {
        let clamped = questions.clamp(u32::from(MIN_QUESTIONS), u32::from(MAX_QUESTIONS));
        self.questions = u8::try_from(clamped).unwrap_or(MAX_QUESTIONS);
    }

    pub fn set_topic(&mut self, topic: TopicChoice) {
        self.topic = topic;
    }

    pub fn to_query(&self) -> String {
        let query = QuizQuery {
            questions: Some(u32::from(self.questions)),
            topic: Some(self.topic.to_string()),
        };
        // Two plain scalar fields always encode
        serde_urlencoded::to_string(&query).unwrap_or_default()
    }

    /// Where the start button navigates to
    pub fn quiz_path(&self) -> String {
        format!("/quiz?{}", self.to_query())
    }

    /// Parse the query string of the quiz page. Missing values fall back to
    /// the defaults and out-of-range counts are clamped.
    pub fn from_query(query: &str) -> Result<Self, QuizConfigError> {
        let query: QuizQuery = serde_urlencoded::from_str(query.trim_start_matches('?'))?;

        let topic = match query.topic.as_deref() {
            Some(topic) => topic.parse()?,
            None => TopicChoice::All,
        };
        Ok(Self::new(
            query.questions.unwrap_or(u32::from(DEFAULT_QUESTIONS)),
            topic,
        ))
    }
}
