//! Document chat client
//!
//! - state.rs: ChatState, Action/Command and the reducer
//! - runner.rs: performs requests and maps outcomes back to actions
//! - api.rs: ChatApi seam and its HTTP implementation
//! - document_ref.rs: document id extraction from Google Docs URLs
//! - ui/: Leptos components

pub mod api;
pub mod document_ref;
pub mod runner;
pub mod state;
pub mod ui;
