//! # Form Schema
//!
//! Static declarations of a form: its fields, their API names and input
//! rules, and where the form submits to.

use crate::panel::validators::{self, Validator};

/// Shape of a field's value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single string value (text inputs, textareas, single selects)
    Text,
    /// Ordered list of selected option values
    MultiSelect,
}

/// Input format a text field must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldFormat {
    #[default]
    Any,
    /// Masked input: non-digit keystrokes are dropped
    DigitsOnly,
    /// Checked at submit time only
    Email,
}

/// A selectable option (value sent to the API, label shown to the user)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

impl FieldOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Declaration of one form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub api_name: String,
    pub label: String,
    pub kind: FieldKind,
    pub format: FieldFormat,
    pub max_length: Option<usize>,
    pub required: bool,
    pub options: Vec<FieldOption>,
}

impl FieldSpec {
    /// Plain text field whose API name matches its internal name
    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            api_name: name.clone(),
            name,
            label: label.into(),
            kind: FieldKind::Text,
            format: FieldFormat::Any,
            max_length: None,
            required: false,
            options: Vec::new(),
        }
    }

    pub fn multi_select(
        name: impl Into<String>,
        label: impl Into<String>,
        options: Vec<FieldOption>,
    ) -> Self {
        Self {
            kind: FieldKind::MultiSelect,
            options,
            ..Self::text(name, label)
        }
    }

    pub fn select(
        name: impl Into<String>,
        label: impl Into<String>,
        options: Vec<FieldOption>,
    ) -> Self {
        Self {
            options,
            ..Self::text(name, label)
        }
    }

    pub fn api_name(mut self, api_name: impl Into<String>) -> Self {
        self.api_name = api_name.into();
        self
    }

    pub fn format(mut self, format: FieldFormat) -> Self {
        self.format = format;
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Keystroke-time acceptance check (masked input policy)
    pub fn accepts_input(&self, value: &str) -> bool {
        if self.format == FieldFormat::DigitsOnly && !validators::is_digits_only(value) {
            return false;
        }
        match self.max_length {
            Some(max) => value.chars().count() <= max,
            None => true,
        }
    }

    /// Validators evaluated when the form is submitted
    pub fn submit_validators(&self) -> Vec<Validator> {
        let mut checks = Vec::new();
        if self.required {
            checks.push(validators::required());
        }
        match self.format {
            FieldFormat::Any => {}
            FieldFormat::DigitsOnly => checks.push(validators::digits_only()),
            FieldFormat::Email => checks.push(validators::email()),
        }
        if let Some(max) = self.max_length {
            checks.push(validators::max_length(max));
        }
        checks
    }
}

/// Complete description of a create form and its endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDefinition {
    pub title: String,
    /// Path relative to the API base URL, e.g. `panel-create-group`
    pub endpoint: String,
    /// Route the router navigates to after success or on Back
    pub listing_route: String,
    pub success_message: String,
    pub failure_message: String,
    pub fields: Vec<FieldSpec>,
}

impl FormDefinition {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}
