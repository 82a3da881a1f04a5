use serde::{Deserialize, Deserializer, Serialize};

/// Backend-assigned topic identifier
pub type TopicId = i64;

/// Topic as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Topic ID, assigned by the backend
    pub id: TopicId,
    /// Short identifier, e.g. `general`
    pub code: String,
    /// Display name
    pub name: String,
    /// Free-text description
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

/// Editable fields of a topic, sent as the body of create and update calls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDraft {
    pub code: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

impl TopicDraft {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    /// True when every field is empty
    pub fn is_empty(&self) -> bool {
        self.code.is_empty() && self.name.is_empty() && self.description.is_empty()
    }
}

impl From<&Topic> for TopicDraft {
    fn from(topic: &Topic) -> Self {
        Self {
            code: topic.code.clone(),
            name: topic.name.clone(),
            description: topic.description.clone(),
        }
    }
}

// The backend column is nullable, so `null` shows up on the wire.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
