//! # UI Events
//!
//! Side effects a front end shows the user: notifications and navigation.

use super::types::NoticeLevel;

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// A toast-style message was raised
    Notified { level: NoticeLevel, message: String },

    /// The router moved to another page
    Navigated { path: String },
}
