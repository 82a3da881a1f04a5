//! Headless front end for the quiz app.
//!
//! [`admin`] holds the topic management workflow, [`home`] the quiz
//! configuration collected on the landing page. Nothing here draws pixels:
//! a UI layer renders the views and feeds user input back in.

pub mod admin;
pub mod home;
pub mod notify;

pub use notify::{MemoryNotifier, Notifier, Toast, Tone, TracingNotifier};
