//! # Event Bus
//!
//! Fan-out of form lifecycle and UI events to observers that live outside
//! the controller, such as a renderer or an audit log.

use super::form_events::FormEvent;
use super::ui_events::UiEvent;

pub type FormEventHandler = Box<dyn Fn(&FormEvent) + Send + Sync>;
pub type UiEventHandler = Box<dyn Fn(&UiEvent) + Send + Sync>;

/// Sink the submission controller publishes into
pub trait EventBus: Send + Sync {
    fn publish_form_event(&mut self, event: FormEvent);

    fn publish_ui_event(&mut self, event: UiEvent);

    fn subscribe_to_form_events(&mut self, handler: FormEventHandler);

    fn subscribe_to_ui_events(&mut self, handler: UiEventHandler);
}

/// In-process bus; handlers run synchronously in subscription order
#[derive(Default)]
pub struct SimpleEventBus {
    form_handlers: Vec<FormEventHandler>,
    ui_handlers: Vec<UiEventHandler>,
    published: usize,
}

impl SimpleEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events published so far, delivered or not
    pub fn published(&self) -> usize {
        self.published
    }

    pub fn has_subscribers(&self) -> bool {
        !self.form_handlers.is_empty() || !self.ui_handlers.is_empty()
    }
}

impl EventBus for SimpleEventBus {
    fn publish_form_event(&mut self, event: FormEvent) {
        self.published += 1;
        tracing::trace!(?event, handlers = self.form_handlers.len(), "form event");
        self.form_handlers.iter().for_each(|handler| handler(&event));
    }

    fn publish_ui_event(&mut self, event: UiEvent) {
        self.published += 1;
        tracing::trace!(?event, handlers = self.ui_handlers.len(), "ui event");
        self.ui_handlers.iter().for_each(|handler| handler(&event));
    }

    fn subscribe_to_form_events(&mut self, handler: FormEventHandler) {
        self.form_handlers.push(handler);
    }

    fn subscribe_to_ui_events(&mut self, handler: UiEventHandler) {
        self.ui_handlers.push(handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::events::types::{NoticeLevel, SubmitState};
    use std::sync::{Arc, Mutex};

    fn form_sink(bus: &mut SimpleEventBus) -> Arc<Mutex<Vec<FormEvent>>> {
        let sink = Arc::new(Mutex::new(Vec::new()));
        let writer = Arc::clone(&sink);
        bus.subscribe_to_form_events(Box::new(move |event| {
            writer.lock().unwrap().push(event.clone());
        }));
        sink
    }

    #[test]
    fn publish_without_subscribers_should_only_count() {
        let mut bus = SimpleEventBus::new();
        assert!(!bus.has_subscribers());

        bus.publish_form_event(FormEvent::FormReset);
        assert_eq!(bus.published(), 1);
    }

    #[test]
    fn form_events_should_reach_every_subscriber_in_order() {
        let mut bus = SimpleEventBus::new();
        let first = form_sink(&mut bus);
        let second = form_sink(&mut bus);

        let events = vec![
            FormEvent::FieldChanged {
                field: "contact_name".to_string(),
            },
            FormEvent::SubmitStateChanged {
                old_state: SubmitState::Idle,
                new_state: SubmitState::Submitting,
            },
        ];
        for event in &events {
            bus.publish_form_event(event.clone());
        }

        assert_eq!(*first.lock().unwrap(), events);
        assert_eq!(*second.lock().unwrap(), events);
    }

    #[test]
    fn ui_events_should_not_reach_form_subscribers() {
        let mut bus = SimpleEventBus::new();
        let forms = form_sink(&mut bus);
        let notices = Arc::new(Mutex::new(Vec::new()));
        let writer = Arc::clone(&notices);
        bus.subscribe_to_ui_events(Box::new(move |event| {
            writer.lock().unwrap().push(event.clone());
        }));

        let event = UiEvent::Notified {
            level: NoticeLevel::Error,
            message: "Error adding contact!".to_string(),
        };
        bus.publish_ui_event(event.clone());

        assert!(forms.lock().unwrap().is_empty());
        assert_eq!(*notices.lock().unwrap(), vec![event]);
        assert_eq!(bus.published(), 1);
    }
}
