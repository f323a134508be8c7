//! # Field Store
//!
//! Owns the live values of one form instance. Every mutation goes through
//! `set_field`, which applies the field's masked-input rules before the value
//! is stored.

use crate::panel::models::schema::{FieldKind, FieldSpec, FormDefinition};
use crate::panel::models::validation::ValidationErrors;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Value held by a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Ordered selections of a multi-select field
    List(Vec<String>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::Text(_) => None,
            FieldValue::List(items) => Some(items),
        }
    }

    fn empty_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::MultiSelect => FieldValue::List(Vec::new()),
        }
    }

    fn matches(&self, kind: FieldKind) -> bool {
        matches!(
            (self, kind),
            (FieldValue::Text(_), FieldKind::Text) | (FieldValue::List(_), FieldKind::MultiSelect)
        )
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => write!(f, "{text}"),
            FieldValue::List(items) => write!(f, "{}", items.join(", ")),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(value: Vec<&str>) -> Self {
        FieldValue::List(value.into_iter().map(str::to_string).collect())
    }
}

/// Flat name → value record of a form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: BTreeMap<String, FieldValue>,
}

impl FormState {
    /// Declared initial defaults: empty text, empty selection
    pub fn from_definition(definition: &FormDefinition) -> Self {
        let values = definition
            .fields
            .iter()
            .map(|spec| (spec.name.clone(), FieldValue::empty_for(spec.kind)))
            .collect();
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Text value of a field, empty if missing or not text
    pub fn text(&self, name: &str) -> &str {
        self.get(name).and_then(FieldValue::as_text).unwrap_or("")
    }

    pub fn list(&self, name: &str) -> &[String] {
        self.get(name).and_then(FieldValue::as_list).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// Errors raised by invalid store operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("field '{field}' expects a {expected:?} value")]
    KindMismatch { field: String, expected: FieldKind },
}

/// Result of a `set_field` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    Accepted,
    /// Masked input dropped the value; the store is unchanged
    Rejected,
}

/// One form instance: its definition, live values and active errors
#[derive(Debug, Clone)]
pub struct FieldStore {
    definition: Arc<FormDefinition>,
    state: FormState,
    errors: ValidationErrors,
}

impl FieldStore {
    pub fn new(definition: Arc<FormDefinition>) -> Self {
        let state = FormState::from_definition(&definition);
        Self {
            definition,
            state,
            errors: ValidationErrors::new(),
        }
    }

    pub fn definition(&self) -> &FormDefinition {
        &self.definition
    }

    pub fn shared_definition(&self) -> Arc<FormDefinition> {
        Arc::clone(&self.definition)
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn errors_mut(&mut self) -> &mut ValidationErrors {
        &mut self.errors
    }

    /// Store a value, subject to the field's masked-input rules
    pub fn set_field(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> Result<SetOutcome, FormError> {
        let value = value.into();
        let spec = self
            .definition
            .field(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;

        if !value.matches(spec.kind) {
            return Err(FormError::KindMismatch {
                field: name.to_string(),
                expected: spec.kind,
            });
        }

        if let FieldValue::Text(text) = &value {
            if !spec.accepts_input(text) {
                tracing::debug!("Rejected input for '{}': {:?}", name, text);
                return Ok(SetOutcome::Rejected);
            }
        }

        if self.errors.contains(name) && field_violation(spec, &value).is_none() {
            self.errors.clear(name);
        }
        tracing::debug!("Field '{}' set", name);
        self.state.values.insert(name.to_string(), value);
        Ok(SetOutcome::Accepted)
    }

    /// Run submit-time constraints, recording a message for each violation
    ///
    /// Errors are only cleared by accepting a valid value. Returns true when
    /// no error is active.
    pub fn validate_for_submit(&mut self) -> bool {
        for spec in &self.definition.fields {
            let violation = self
                .state
                .get(&spec.name)
                .and_then(|value| field_violation(spec, value));
            if let Some(message) = violation {
                self.errors.set(spec.name.clone(), message);
            }
        }
        self.errors.is_empty()
    }

    /// Restore declared defaults and drop all errors
    pub fn reset(&mut self) {
        self.state = FormState::from_definition(&self.definition);
        self.errors.clear_all();
    }
}

fn field_violation(spec: &FieldSpec, value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Text(text) => spec
            .submit_validators()
            .iter()
            .find_map(|check| check(text).err()),
        FieldValue::List(items) if spec.required && items.is_empty() => {
            Some("Please select at least one option".to_string())
        }
        FieldValue::List(_) => None,
    }
}
