//! Reference backend for the quiz topics resource.
//!
//! Serves `/api/topics` from an in-memory [`store::TopicStore`].

pub mod config;
pub mod error;
pub mod middleware;
pub mod router;
pub mod state;
pub mod store;
pub mod topic;
pub mod tracing;

pub use config::ApiConfig;
pub use state::ApiState;
