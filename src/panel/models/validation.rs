//! # Validation Errors
//!
//! Field-level error messages that gate submission. At most one message is
//! active per field.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    messages: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message for a field, replacing any previous one
    pub fn set(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(field.into(), message.into());
    }

    pub fn clear(&mut self, field: &str) -> Option<String> {
        self.messages.remove(field)
    }

    pub fn clear_all(&mut self) {
        self.messages.clear();
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.messages.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.messages.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.messages
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }
}
