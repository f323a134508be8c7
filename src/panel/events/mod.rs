//! # Events Module
//!
//! Form lifecycle events, UI side-effect events and the bus that carries them.

pub mod event_bus;
pub mod form_events;
pub mod types;
pub mod ui_events;

pub use event_bus::{EventBus, FormEventHandler, SimpleEventBus, UiEventHandler};
pub use form_events::FormEvent;
pub use types::{NoticeLevel, SubmitState};
pub use ui_events::UiEvent;
