use std::{fmt, str::FromStr};

use qz_client::{Topic, TopicDraft};
use thiserror::Error;

/// Editable input of the topic form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Code,
    Name,
    Description,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Code, Self::Name, Self::Description];

    /// Input name, as used in form submissions
    pub const fn name(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Name => "name",
            Self::Description => "description",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Code => "Code",
            Self::Name => "Name",
            Self::Description => "Description",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Code => "e.g., general, science",
            Self::Name => "Topic name",
            Self::Description => "Short description",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown form field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// In-progress topic input.
///
/// Owns its own copy of the fields; filling it from a listed topic never
/// aliases the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicForm {
    draft: TopicDraft,
}

impl TopicForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &TopicDraft {
        &self.draft
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Code => &self.draft.code,
            Field::Name => &self.draft.name,
            Field::Description => &self.draft.description,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Code => &mut self.draft.code,
            Field::Name => &mut self.draft.name,
            Field::Description => &mut self.draft.description,
        };
        *slot = value.into();
    }

    /// Replace every field with the topic's values
    pub fn fill_from(&mut self, topic: &Topic) {
        self.draft = TopicDraft::from(topic);
    }

    pub fn clear(&mut self) {
        self.draft = TopicDraft::default();
    }

    pub fn is_empty(&self) -> bool {
        self.draft.is_empty()
    }
}
