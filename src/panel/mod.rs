//! # Panel Workflows
//!
//! Form submission and detail-view workflows, independent of any UI toolkit.

pub mod controllers;
pub mod events;
pub mod forms;
pub mod models;
pub mod payload;
pub mod selection;
pub mod services;
#[cfg(test)]
pub(crate) mod testing;
pub mod validators;
pub mod views;

pub use controllers::{
    DetailController, DetailState, SubmissionController, SubmissionGuard, SubmitOutcome,
};
pub use events::{EventBus, FormEvent, NoticeLevel, SimpleEventBus, SubmitState, UiEvent};
pub use models::{
    DirectoryRecord, FieldStore, FieldValue, FormDefinition, FormError, FormState, SetOutcome,
};
pub use payload::{build_payload, Payload};
pub use selection::{MultiSelect, SelectionChanged};
pub use services::{
    ConsoleNotifier, CredentialProvider, HistoryRouter, Notifier, PanelClient, RemoteClient,
    RemoteError, Router,
};
pub use validators::is_digits_only;
