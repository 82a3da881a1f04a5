//! Two-step commit for mutating actions.
//!
//! Update and delete are staged here and only reach the service after an
//! explicit yes. A staged confirmation remembers the phase it interrupted
//! so that "no" returns there untouched.

use qz_client::TopicId;

use super::workflow::Resting;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmIntent {
    Update,
    Delete,
}

/// Action waiting for the user's answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingConfirmation {
    /// Save the form over the topic being edited
    Update,
    /// Remove `target`
    Delete { target: TopicId },
}

impl PendingConfirmation {
    pub const fn intent(&self) -> ConfirmIntent {
        match self {
            Self::Update => ConfirmIntent::Update,
            Self::Delete { .. } => ConfirmIntent::Delete,
        }
    }

    /// Topic targeted by a delete; updates target the form's topic instead
    pub const fn target(&self) -> Option<TopicId> {
        match self {
            Self::Update => None,
            Self::Delete { target } => Some(*target),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

/// Copy shown by the confirmation modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub title: &'static str,
    pub description: &'static str,
}

impl ConfirmDialog {
    pub const CONFIRM_LABEL: &'static str = "Yes";
    pub const CANCEL_LABEL: &'static str = "No";

    pub const fn for_intent(intent: ConfirmIntent) -> Self {
        match intent {
            ConfirmIntent::Update => Self {
                title: "Update this topic?",
                description: "Are you sure you want to update this topic?",
            },
            ConfirmIntent::Delete => Self {
                title: "Delete this topic?",
                description: "Are you sure you want to delete this topic?",
            },
        }
    }
}

/// Modal contents for the current confirmation, if any
pub fn dialog(pending: Option<&PendingConfirmation>) -> Option<ConfirmDialog> {
    pending.map(|p| ConfirmDialog::for_intent(p.intent()))
}

/// A pending confirmation and the phase it interrupted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedConfirmation {
    pending: PendingConfirmation,
    prior: Resting,
}

/// Outcome of answering a staged confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Confirmed {
        pending: PendingConfirmation,
        prior: Resting,
    },
    Cancelled {
        prior: Resting,
    },
}

impl StagedConfirmation {
    pub(crate) const fn new(pending: PendingConfirmation, prior: Resting) -> Self {
        Self { pending, prior }
    }

    pub const fn pending(&self) -> &PendingConfirmation {
        &self.pending
    }

    pub const fn prior(&self) -> &Resting {
        &self.prior
    }

    /// Consume the confirmation. Either way it is gone afterwards.
    pub fn resolve(self, answer: Answer) -> Resolution {
        match answer {
            Answer::Yes => Resolution::Confirmed {
                pending: self.pending,
                prior: self.prior,
            },
            Answer::No => Resolution::Cancelled { prior: self.prior },
        }
    }
}
