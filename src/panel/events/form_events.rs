//! # Form Events
//!
//! Emitted when a form's values or submission lifecycle change.

use super::types::SubmitState;

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// A value was accepted into the field store
    FieldChanged { field: String },

    /// Masked input dropped a value
    InputRejected { field: String, attempted: String },

    /// Submit was refused because validation errors are active
    SubmitBlocked { fields: Vec<String> },

    /// Submission state machine moved
    SubmitStateChanged {
        old_state: SubmitState,
        new_state: SubmitState,
    },

    /// Form values were restored to their defaults
    FormReset,
}
