use serde::{Deserialize, Serialize};
use validator::Validate;

/// Topic model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Topic ID
    pub id: i64,
    /// Unique short code, e.g. `general`
    pub code: String,
    /// Topic name
    pub name: String,
    /// Topic description
    pub description: String,
}

/// Request body for creating or updating a topic
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TopicPayload {
    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl TopicPayload {
    pub fn new(code: &str, name: &str, description: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
        }
    }

    /// Trim surrounding whitespace so blank fields fail validation
    pub fn normalized(self) -> Self {
        Self {
            code: self.code.trim().to_string(),
            name: self.name.trim().to_string(),
            description: self.description,
        }
    }
}

/// Topics available in a freshly seeded store
pub fn stock_topics() -> Vec<TopicPayload> {
    vec![
        TopicPayload::new("general", "General Knowledge", "Test your general knowledge"),
        TopicPayload::new("science", "Science", "Biology, Chemistry, and Physics"),
        TopicPayload::new("history", "History", "Explore historical facts and events"),
        TopicPayload::new(
            "sports",
            "Sports",
            "From football to cricket, test your sports IQ",
        ),
        TopicPayload::new(
            "technology",
            "Technology",
            "Modern innovations and computer science",
        ),
    ]
}
