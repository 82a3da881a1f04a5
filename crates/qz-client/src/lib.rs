//! Client for the quiz topics REST resource.
//!
//! The [`TopicService`] trait is the seam the front end talks to;
//! [`HttpTopicClient`] is its implementation over HTTP.

pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod service;

pub use config::ClientConfig;
pub use error::TransportError;
pub use http::HttpTopicClient;
pub use model::{Topic, TopicDraft, TopicId};
pub use reqwest::StatusCode;
pub use service::TopicService;
