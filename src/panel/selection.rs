//! # Multi-Select Control
//!
//! Toolkit-independent model of a multi-select input: a fixed option list and
//! an ordered selected set. Every change yields a `SelectionChanged` that the
//! owning form applies through `set_field`.

use crate::panel::models::{FieldKind, FieldOption, FieldSpec};

/// Emitted whenever the selected set changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged {
    pub field: String,
    pub selected: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct MultiSelect {
    field: String,
    options: Vec<FieldOption>,
    selected: Vec<String>,
}

impl MultiSelect {
    pub fn new(field: impl Into<String>, options: Vec<FieldOption>) -> Self {
        Self {
            field: field.into(),
            options,
            selected: Vec::new(),
        }
    }

    /// Build the control for a declared multi-select field
    pub fn for_field(spec: &FieldSpec) -> Option<Self> {
        (spec.kind == FieldKind::MultiSelect).then(|| Self::new(&spec.name, spec.options.clone()))
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn options(&self) -> &[FieldOption] {
        &self.options
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|v| v == value)
    }

    /// Add or remove an option; unknown values are ignored
    pub fn toggle(&mut self, value: &str) -> Option<SelectionChanged> {
        if !self.options.iter().any(|o| o.value == value) {
            tracing::debug!("Ignoring unknown option '{}' for '{}'", value, self.field);
            return None;
        }
        if let Some(pos) = self.selected.iter().position(|v| v == value) {
            self.selected.remove(pos);
        } else {
            self.selected.push(value.to_string());
        }
        Some(self.changed())
    }

    /// Replace the whole selection, dropping unknown and duplicate values
    pub fn select_all<I, S>(&mut self, values: I) -> SelectionChanged
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.selected.clear();
        for value in values {
            let value = value.as_ref();
            if self.options.iter().any(|o| o.value == value) && !self.is_selected(value) {
                self.selected.push(value.to_string());
            }
        }
        self.changed()
    }

    pub fn clear(&mut self) -> SelectionChanged {
        self.selected.clear();
        self.changed()
    }

    /// Labels of the selected options, for display
    pub fn selected_labels(&self) -> Vec<&str> {
        self.selected
            .iter()
            .filter_map(|v| self.options.iter().find(|o| &o.value == v))
            .map(|o| o.label.as_str())
            .collect()
    }

    fn changed(&self) -> SelectionChanged {
        SelectionChanged {
            field: self.field.clone(),
            selected: self.selected.clone(),
        }
    }
}
