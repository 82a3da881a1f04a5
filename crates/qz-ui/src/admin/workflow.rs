//! Admin topic management as a state machine.
//!
//! The workflow never performs I/O. User input either changes local state
//! or yields a [`Command`]; whoever runs the command reports back with the
//! matching [`Completion`], which may yield a follow-up command (the reload
//! after every successful mutation) and a toast.
//!
//! The topic collection is only ever replaced by a reload. Create, update
//! and delete never patch it.

use qz_client::{Topic, TopicDraft, TopicId, TransportError};

use super::{
    confirm::{self, Answer, ConfirmDialog, PendingConfirmation, Resolution, StagedConfirmation},
    form::{Field, TopicForm},
    list::{self, ListView, RowAction},
};
use crate::notify::Toast;

/// What submitting the form does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// Submit creates a new topic right away
    Create,
    /// Submit asks for confirmation, then overwrites topic `id`
    Update(TopicId),
}

impl EditMode {
    pub const fn editing_id(&self) -> Option<TopicId> {
        match self {
            Self::Create => None,
            Self::Update(id) => Some(*id),
        }
    }

    pub const fn heading(&self) -> &'static str {
        match self {
            Self::Create => "Add New Topic",
            Self::Update(_) => "Update Topic",
        }
    }

    pub const fn submit_label(&self) -> &'static str {
        match self {
            Self::Create => "Add Topic",
            Self::Update(_) => "Update Topic",
        }
    }
}

/// Phases a confirmation can return to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resting {
    Viewing,
    Drafting(EditMode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Initial phase; the form is empty
    Viewing,
    Drafting(EditMode),
    /// A modal is open and everything beneath it is inert
    AwaitingConfirmation(StagedConfirmation),
}

impl From<Resting> for Phase {
    fn from(resting: Resting) -> Self {
        match resting {
            Resting::Viewing => Self::Viewing,
            Resting::Drafting(mode) => Self::Drafting(mode),
        }
    }
}

/// Identifies one list reload. Later reloads compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReloadTicket(u64);

/// Service call requested by the workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ListTopics(ReloadTicket),
    CreateTopic(TopicDraft),
    UpdateTopic { id: TopicId, draft: TopicDraft },
    DeleteTopic { id: TopicId },
}

/// Result of a [`Command`], fed back through [`AdminWorkflow::apply`]
#[derive(Debug)]
pub enum Completion {
    TopicsLoaded {
        ticket: ReloadTicket,
        result: Result<Vec<Topic>, TransportError>,
    },
    TopicCreated {
        draft: TopicDraft,
        result: Result<(), TransportError>,
    },
    TopicUpdated {
        id: TopicId,
        draft: TopicDraft,
        result: Result<(), TransportError>,
    },
    TopicDeleted {
        id: TopicId,
        result: Result<(), TransportError>,
    },
}

/// What to do after applying a completion
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Step {
    pub toast: Option<Toast>,
    pub next: Option<Command>,
}

impl Step {
    fn toast(toast: Toast) -> Self {
        Self {
            toast: Some(toast),
            next: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdminWorkflow {
    topics: Vec<Topic>,
    form: TopicForm,
    phase: Phase,
    last_ticket: u64,
    loading: bool,
}

impl Default for AdminWorkflow {
    fn default() -> Self {
        Self {
            topics: Vec::new(),
            form: TopicForm::new(),
            phase: Phase::Viewing,
            last_ticket: 0,
            loading: false,
        }
    }
}

impl AdminWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn topic(&self, id: TopicId) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == id)
    }

    pub const fn form(&self) -> &TopicForm {
        &self.form
    }

    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Mode the form is in, looking through an open modal
    pub const fn edit_mode(&self) -> EditMode {
        match &self.phase {
            Phase::Viewing => EditMode::Create,
            Phase::Drafting(mode) => *mode,
            Phase::AwaitingConfirmation(staged) => match staged.prior() {
                Resting::Viewing => EditMode::Create,
                Resting::Drafting(mode) => *mode,
            },
        }
    }

    pub const fn editing_id(&self) -> Option<TopicId> {
        self.edit_mode().editing_id()
    }

    pub const fn pending_confirmation(&self) -> Option<&PendingConfirmation> {
        match &self.phase {
            Phase::AwaitingConfirmation(staged) => Some(staged.pending()),
            _ => None,
        }
    }

    pub fn list_view(&self) -> ListView<'_> {
        list::render(&self.topics, self.loading)
    }

    pub fn dialog(&self) -> Option<ConfirmDialog> {
        confirm::dialog(self.pending_confirmation())
    }

    const fn is_modal_open(&self) -> bool {
        matches!(self.phase, Phase::AwaitingConfirmation(_))
    }

    /// Start a reload of the topic list
    pub fn load(&mut self) -> Command {
        self.last_ticket += 1;
        self.loading = true;
        Command::ListTopics(ReloadTicket(self.last_ticket))
    }

    /// Type into the form. Ignored while a modal is open.
    pub fn edit_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.is_modal_open() {
            return false;
        }
        self.form.set(field, value);
        if self.phase == Phase::Viewing {
            self.phase = Phase::Drafting(EditMode::Create);
        }
        true
    }

    /// Pre-fill the form from `topic` and switch to update mode
    pub fn start_edit(&mut self, topic: &Topic) -> bool {
        if self.is_modal_open() {
            return false;
        }
        self.form.fill_from(topic);
        self.phase = Phase::Drafting(EditMode::Update(topic.id));
        true
    }

    /// Stage a delete of `id`, whatever the form is doing
    pub fn request_delete(&mut self, id: TopicId) -> bool {
        let prior = match self.phase {
            Phase::Viewing => Resting::Viewing,
            Phase::Drafting(mode) => Resting::Drafting(mode),
            Phase::AwaitingConfirmation(_) => return false,
        };
        self.phase = Phase::AwaitingConfirmation(StagedConfirmation::new(
            PendingConfirmation::Delete { target: id },
            prior,
        ));
        true
    }

    /// Route a row button to the right transition
    pub fn row_action(&mut self, action: RowAction) -> bool {
        match action {
            RowAction::Edit(topic) => self.start_edit(&topic),
            RowAction::Delete(id) => self.request_delete(id),
        }
    }

    /// Submit the form.
    ///
    /// Creating fires immediately. Updating opens the confirmation modal and
    /// returns no command until the user answers.
    pub fn submit(&mut self) -> Option<Command> {
        match self.phase {
            Phase::Viewing | Phase::Drafting(EditMode::Create) => {
                Some(Command::CreateTopic(self.form.draft().clone()))
            }
            Phase::Drafting(mode @ EditMode::Update(_)) => {
                self.phase = Phase::AwaitingConfirmation(StagedConfirmation::new(
                    PendingConfirmation::Update,
                    Resting::Drafting(mode),
                ));
                None
            }
            Phase::AwaitingConfirmation(_) => None,
        }
    }

    /// Answer the open modal. The modal closes either way.
    pub fn answer(&mut self, answer: Answer) -> Option<Command> {
        let staged = match std::mem::replace(&mut self.phase, Phase::Viewing) {
            Phase::AwaitingConfirmation(staged) => staged,
            other => {
                self.phase = other;
                return None;
            }
        };

        match staged.resolve(answer) {
            Resolution::Cancelled { prior } => {
                self.phase = prior.into();
                None
            }
            Resolution::Confirmed { pending, prior } => {
                self.phase = prior.into();
                match (pending, prior) {
                    (PendingConfirmation::Update, Resting::Drafting(EditMode::Update(id))) => {
                        Some(Command::UpdateTopic {
                            id,
                            draft: self.form.draft().clone(),
                        })
                    }
                    (PendingConfirmation::Update, _) => {
                        tracing::debug!("Update confirmed with no topic being edited");
                        None
                    }
                    (PendingConfirmation::Delete { target }, _) => {
                        Some(Command::DeleteTopic { id: target })
                    }
                }
            }
        }
    }

    /// Fold the result of a command back into the state
    pub fn apply(&mut self, completion: Completion) -> Step {
        match completion {
            Completion::TopicsLoaded { ticket, result } => self.topics_loaded(ticket, result),
            Completion::TopicCreated { draft, result } => match result {
                Ok(()) => self.committed(Toast::success(
                    "New Topic Added",
                    format!("{} has been added successfully.", draft.name),
                )),
                Err(e) => {
                    tracing::warn!(code = %draft.code, "Error adding topic: {e}");
                    Step::toast(Toast::failure(
                        "Failed Adding",
                        "Something went wrong while adding topic.",
                    ))
                }
            },
            Completion::TopicUpdated { id, draft, result } => match result {
                Ok(()) => self.committed(Toast::success(
                    "Topic Updated",
                    format!("{} has been updated successfully.", draft.name),
                )),
                Err(e) => {
                    tracing::warn!(id, "Error updating topic: {e}");
                    Step::toast(Toast::failure(
                        "Failed Updating",
                        "Something went wrong while updating topic.",
                    ))
                }
            },
            Completion::TopicDeleted { id, result } => match result {
                Ok(()) => self.committed(Toast::success(
                    "Topic Deleted",
                    "Topic removed successfully.",
                )),
                Err(e) => {
                    tracing::warn!(id, "Error deleting topic: {e}");
                    Step::toast(Toast::failure(
                        "Failed Deleting",
                        "Something went wrong while deleting topic.",
                    ))
                }
            },
        }
    }

    fn topics_loaded(
        &mut self,
        ticket: ReloadTicket,
        result: Result<Vec<Topic>, TransportError>,
    ) -> Step {
        if ticket.0 < self.last_ticket {
            tracing::debug!(?ticket, latest = self.last_ticket, "Dropping stale topic list");
            return Step::default();
        }

        self.loading = false;
        match result {
            Ok(topics) => {
                tracing::debug!(count = topics.len(), "Topics loaded");
                self.topics = topics;
                Step::default()
            }
            Err(e) => {
                tracing::error!("Error fetching topics: {e}");
                Step::toast(Toast::failure("Error", "Failed to load topics."))
            }
        }
    }

    // A successful mutation resets the form and reloads the list. An open
    // modal is left alone.
    fn committed(&mut self, toast: Toast) -> Step {
        if !self.is_modal_open() {
            self.form.clear();
            self.phase = Phase::Viewing;
        }
        Step {
            toast: Some(toast),
            next: Some(self.load()),
        }
    }
}
