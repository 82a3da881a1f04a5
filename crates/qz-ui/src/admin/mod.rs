//! Topic administration.
//!
//! [`workflow::AdminWorkflow`] is the state machine, free of I/O.
//! [`controller::AdminController`] runs the service calls it asks for and
//! hands toasts to a [`crate::Notifier`].

pub mod confirm;
pub mod controller;
pub mod form;
pub mod list;
pub mod workflow;

pub use confirm::{Answer, ConfirmDialog, ConfirmIntent, PendingConfirmation};
pub use controller::{AdminController, execute};
pub use form::{Field, TopicForm};
pub use list::{ListView, RowAction, TopicRow};
pub use workflow::{AdminWorkflow, Command, Completion, EditMode, Phase, ReloadTicket, Step};
