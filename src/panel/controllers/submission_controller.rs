//! # Submission Controller
//!
//! Drives one create form: keystrokes into the field store, multi-select
//! changes, and the submit lifecycle
//! `Idle → Submitting → (Success | Failed) → Idle`.

use crate::panel::events::{EventBus, FormEvent, NoticeLevel, SubmitState, UiEvent};
use crate::panel::models::{FieldKind, FieldStore, FieldValue, FormDefinition, FormError, SetOutcome};
use crate::panel::payload::build_payload;
use crate::panel::selection::{MultiSelect, SelectionChanged};
use crate::panel::services::{Notifier, RemoteClient, RemoteError, Router};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Shown when submit is attempted with active validation errors
pub const FIX_ERRORS_MESSAGE: &str = "Please fix the errors before submitting.";

/// In-flight flag preventing a second submit
#[derive(Debug, Default)]
pub struct SubmissionGuard {
    in_flight: bool,
}

impl SubmissionGuard {
    /// Returns false if a submission is already in flight
    pub fn engage(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn release(&mut self) {
        self.in_flight = false;
    }

    pub fn is_engaged(&self) -> bool {
        self.in_flight
    }
}

/// Held across the remote call; if the submit future is dropped before the
/// call resolves, the guard is released and the form returns to `Idle`.
struct InFlight<'a> {
    guard: &'a mut SubmissionGuard,
    state: &'a mut SubmitState,
    armed: bool,
}

impl<'a> InFlight<'a> {
    fn new(guard: &'a mut SubmissionGuard, state: &'a mut SubmitState) -> Self {
        Self {
            guard,
            state,
            armed: true,
        }
    }

    /// The call resolved; the controller finishes the lifecycle itself
    fn complete(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed {
            tracing::warn!("Submission abandoned before the server answered");
            self.guard.release();
            *self.state = SubmitState::Idle;
        }
    }
}

/// How a submit attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Remote call succeeded; the form was reset
    Submitted,
    /// Remote call failed; input was preserved
    Failed { message: String },
    /// Validation errors blocked the submit; no call was made
    Rejected { fields: Vec<String> },
    /// A submission was already in flight
    Busy,
}

pub struct SubmissionController<C, N, R> {
    store: FieldStore,
    selections: BTreeMap<String, MultiSelect>,
    client: C,
    notifier: N,
    router: R,
    guard: SubmissionGuard,
    state: SubmitState,
    event_bus: Option<Box<dyn EventBus>>,
}

impl<C, N, R> SubmissionController<C, N, R>
where
    C: RemoteClient,
    N: Notifier,
    R: Router,
{
    pub fn new(definition: Arc<FormDefinition>, client: C, notifier: N, router: R) -> Self {
        let selections = definition
            .fields
            .iter()
            .filter_map(MultiSelect::for_field)
            .map(|select| (select.field().to_string(), select))
            .collect();

        Self {
            store: FieldStore::new(definition),
            selections,
            client,
            notifier,
            router,
            guard: SubmissionGuard::default(),
            state: SubmitState::Idle,
            event_bus: None,
        }
    }

    pub fn set_event_bus(&mut self, event_bus: Box<dyn EventBus>) {
        self.event_bus = Some(event_bus);
    }

    pub fn store(&self) -> &FieldStore {
        &self.store
    }

    pub fn definition(&self) -> &FormDefinition {
        self.store.definition()
    }

    pub fn submit_state(&self) -> SubmitState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.guard.is_engaged()
    }

    /// Submit is disabled while in flight or while any field error is active
    pub fn can_submit(&self) -> bool {
        !self.guard.is_engaged() && self.store.errors().is_empty()
    }

    pub fn selection(&self, field: &str) -> Option<&MultiSelect> {
        self.selections.get(field)
    }

    /// Attach a message to a field; it blocks submit until a valid value is accepted
    pub fn set_field_error(&mut self, field: &str, message: impl Into<String>) {
        self.store.errors_mut().set(field, message);
    }

    /// Apply one input change to the field store
    pub fn set_field(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> Result<SetOutcome, FormError> {
        let value = value.into();
        let attempted = value.to_string();
        let outcome = self.store.set_field(name, value.clone())?;

        match outcome {
            SetOutcome::Accepted => {
                if let (Some(select), FieldValue::List(items)) =
                    (self.selections.get_mut(name), &value)
                {
                    if select.selected() != items.as_slice() {
                        select.select_all(items);
                    }
                }
                self.emit_form_event(FormEvent::FieldChanged {
                    field: name.to_string(),
                });
            }
            SetOutcome::Rejected => {
                self.emit_form_event(FormEvent::InputRejected {
                    field: name.to_string(),
                    attempted,
                });
            }
        }
        Ok(outcome)
    }

    /// Type `text` into a field one keystroke at a time
    ///
    /// Returns how many keystrokes the field rejected.
    pub fn type_text(&mut self, name: &str, text: &str) -> Result<usize, FormError> {
        let mut rejected = 0;
        for ch in text.chars() {
            let mut next = self.store.state().text(name).to_string();
            next.push(ch);
            if self.set_field(name, next)? == SetOutcome::Rejected {
                rejected += 1;
            }
        }
        Ok(rejected)
    }

    /// Toggle an option of a multi-select field
    pub fn toggle_option(&mut self, field: &str, value: &str) -> Result<bool, FormError> {
        let change = self.selection_mut(field)?.toggle(value);
        match change {
            Some(change) => self.apply_selection(change).map(|_| true),
            None => Ok(false),
        }
    }

    /// Replace the selection of a multi-select field
    pub fn select_options<I, S>(&mut self, field: &str, values: I) -> Result<(), FormError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let change = self.selection_mut(field)?.select_all(values);
        self.apply_selection(change).map(|_| ())
    }

    fn selection_mut(&mut self, field: &str) -> Result<&mut MultiSelect, FormError> {
        let declared = self.store.definition().field(field).is_some();
        self.selections.get_mut(field).ok_or_else(|| {
            if declared {
                FormError::KindMismatch {
                    field: field.to_string(),
                    expected: FieldKind::Text,
                }
            } else {
                FormError::UnknownField(field.to_string())
            }
        })
    }

    fn apply_selection(&mut self, change: SelectionChanged) -> Result<SetOutcome, FormError> {
        self.set_field(&change.field, change.selected)
    }

    /// Run the submit lifecycle once
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.guard.is_engaged() {
            tracing::debug!("Submit ignored, a submission is already in flight");
            return SubmitOutcome::Busy;
        }

        if !self.store.validate_for_submit() {
            let fields: Vec<String> = self
                .store
                .errors()
                .iter()
                .map(|(field, _)| field.to_string())
                .collect();
            tracing::debug!("Submit blocked by validation errors on {:?}", fields);
            self.emit_form_event(FormEvent::SubmitBlocked {
                fields: fields.clone(),
            });
            self.notify(NoticeLevel::Error, FIX_ERRORS_MESSAGE);
            return SubmitOutcome::Rejected { fields };
        }

        let definition = self.store.shared_definition();
        let payload = build_payload(&definition, self.store.state());
        tracing::debug!(
            "Submitting '{}' to {} with {} fields",
            definition.title,
            definition.endpoint,
            payload.len()
        );

        self.guard.engage();
        self.transition(SubmitState::Submitting);

        let result = {
            let in_flight = InFlight::new(&mut self.guard, &mut self.state);
            let result = self.client.post_json(&definition.endpoint, &payload).await;
            in_flight.complete();
            result
        };

        let outcome = self.finish(&definition, result);
        self.guard.release();
        self.transition(SubmitState::Idle);
        outcome
    }

    fn finish(
        &mut self,
        definition: &FormDefinition,
        result: Result<Value, RemoteError>,
    ) -> SubmitOutcome {
        match result {
            Ok(_) => {
                tracing::info!("'{}' submitted successfully", definition.title);
                self.transition(SubmitState::Success);
                self.notify(NoticeLevel::Success, &definition.success_message);
                self.navigate(&definition.listing_route);
                self.reset();
                SubmitOutcome::Submitted
            }
            Err(e) => {
                let message = e.chain_message();
                tracing::error!("Submitting '{}' failed: {}", definition.title, message);
                self.transition(SubmitState::Failed);
                self.notify(NoticeLevel::Error, &definition.failure_message);
                SubmitOutcome::Failed { message }
            }
        }
    }

    /// Leave the form without submitting
    pub fn back(&mut self) {
        let route = self.store.definition().listing_route.clone();
        self.navigate(&route);
    }

    /// Restore the form's declared defaults
    pub fn reset(&mut self) {
        self.store.reset();
        for select in self.selections.values_mut() {
            select.clear();
        }
        self.emit_form_event(FormEvent::FormReset);
    }

    fn transition(&mut self, new_state: SubmitState) {
        let old_state = std::mem::replace(&mut self.state, new_state);
        tracing::debug!("Submit state {} -> {}", old_state, new_state);
        self.emit_form_event(FormEvent::SubmitStateChanged {
            old_state,
            new_state,
        });
    }

    fn notify(&mut self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Success => self.notifier.success(message),
            NoticeLevel::Error => self.notifier.error(message),
        }
        self.emit_ui_event(UiEvent::Notified {
            level,
            message: message.to_string(),
        });
    }

    fn navigate(&mut self, path: &str) {
        self.router.navigate(path);
        self.emit_ui_event(UiEvent::Navigated {
            path: path.to_string(),
        });
    }

    fn emit_form_event(&mut self, event: FormEvent) {
        if let Some(bus) = self.event_bus.as_mut() {
            bus.publish_form_event(event);
        }
    }

    fn emit_ui_event(&mut self, event: UiEvent) {
        if let Some(bus) = self.event_bus.as_mut() {
            bus.publish_ui_event(event);
        }
    }
}
