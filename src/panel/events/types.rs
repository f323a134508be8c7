//! # Event Types
//!
//! Small value types shared by form and UI events.

use std::fmt;

/// Lifecycle state of a form's submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

impl fmt::Display for SubmitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubmitState::Idle => "idle",
            SubmitState::Submitting => "submitting",
            SubmitState::Success => "success",
            SubmitState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}
