use qz_client::{TopicId, TopicService};

use super::{
    confirm::Answer,
    form::Field,
    list::RowAction,
    workflow::{AdminWorkflow, Command, Completion},
};
use crate::notify::Notifier;

/// Perform one command against the service
pub async fn execute<S: TopicService>(service: &S, command: Command) -> Completion {
    match command {
        Command::ListTopics(ticket) => Completion::TopicsLoaded {
            ticket,
            result: service.list_topics().await,
        },
        Command::CreateTopic(draft) => {
            let result = service.create_topic(&draft).await;
            Completion::TopicCreated { draft, result }
        }
        Command::UpdateTopic { id, draft } => {
            let result = service.update_topic(id, &draft).await;
            Completion::TopicUpdated { id, draft, result }
        }
        Command::DeleteTopic { id } => Completion::TopicDeleted {
            id,
            result: service.delete_topic(id).await,
        },
    }
}

/// Drives an [`AdminWorkflow`] against a [`TopicService`].
///
/// Each call runs its command and any follow-up reload to completion before
/// returning, and forwards every toast to the notifier.
#[derive(Debug)]
pub struct AdminController<S, N> {
    service: S,
    notifier: N,
    workflow: AdminWorkflow,
}

impl<S, N> AdminController<S, N>
where
    S: TopicService,
    N: Notifier,
{
    pub fn new(service: S, notifier: N) -> Self {
        Self {
            service,
            notifier,
            workflow: AdminWorkflow::new(),
        }
    }

    pub const fn workflow(&self) -> &AdminWorkflow {
        &self.workflow
    }

    pub const fn service(&self) -> &S {
        &self.service
    }

    /// First load of the topic list
    pub async fn mount(&mut self) {
        self.reload().await;
    }

    pub async fn reload(&mut self) {
        let command = self.workflow.load();
        self.run(command).await;
    }

    pub fn edit_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        self.workflow.edit_field(field, value)
    }

    pub fn row_action(&mut self, action: RowAction) -> bool {
        self.workflow.row_action(action)
    }

    /// Start editing a listed topic. False if it is not listed or a modal is open.
    pub fn edit_topic(&mut self, id: TopicId) -> bool {
        match self.workflow.topic(id).cloned() {
            Some(topic) => self.workflow.start_edit(&topic),
            None => false,
        }
    }

    pub fn request_delete(&mut self, id: TopicId) -> bool {
        self.workflow.request_delete(id)
    }

    pub async fn submit(&mut self) {
        if let Some(command) = self.workflow.submit() {
            self.run(command).await;
        }
    }

    pub async fn answer(&mut self, answer: Answer) {
        if let Some(command) = self.workflow.answer(answer) {
            self.run(command).await;
        }
    }

    async fn run(&mut self, command: Command) {
        let mut next = Some(command);
        while let Some(command) = next.take() {
            tracing::trace!(?command, "Running admin command");
            let completion = execute(&self.service, command).await;
            let step = self.workflow.apply(completion);
            if let Some(toast) = step.toast {
                self.notifier.notify(toast);
            }
            next = step.next;
        }
    }
}
