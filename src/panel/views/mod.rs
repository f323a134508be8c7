//! # Views
//!
//! Text renderers for forms and detail records.

pub mod detail_renderer;
pub mod form_renderer;

pub use detail_renderer::{render_detail, render_record, NO_ID_MESSAGE};
pub use form_renderer::{render_form, submit_caption};
