//! # Form Renderer
//!
//! Text summary of a form: labels, current values, field errors and the
//! submit button caption.

use crate::panel::models::{FieldKind, FieldStore};
use std::fmt::Write;

pub fn submit_caption(submitting: bool) -> &'static str {
    if submitting {
        "Submitting..."
    } else {
        "Submit"
    }
}

pub fn render_form(store: &FieldStore, submitting: bool) -> String {
    let definition = store.definition();
    let mut out = String::new();
    let _ = writeln!(out, "{}", definition.title);

    for spec in &definition.fields {
        let marker = if spec.required { " *" } else { "" };
        let value = match spec.kind {
            FieldKind::Text => {
                let text = store.state().text(&spec.name);
                spec.options
                    .iter()
                    .find(|o| o.value == text)
                    .map(|o| o.label.clone())
                    .unwrap_or_else(|| text.to_string())
            }
            FieldKind::MultiSelect => store
                .state()
                .list(&spec.name)
                .iter()
                .map(|v| {
                    spec.options
                        .iter()
                        .find(|o| &o.value == v)
                        .map_or(v.as_str(), |o| o.label.as_str())
                })
                .collect::<Vec<_>>()
                .join(", "),
        };
        let _ = writeln!(out, "  {}{}: {}", spec.label, marker, value);
        if let Some(message) = store.errors().get(&spec.name) {
            let _ = writeln!(out, "    ! {message}");
        }
    }

    let _ = writeln!(out, "[{}]", submit_caption(submitting));
    out
}
