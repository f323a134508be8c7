//! # Payload Builder
//!
//! Shapes a `FormState` into the flat string record the remote API expects.
//! Read-only over the state; no validation happens here.

use crate::panel::models::{FieldValue, FormDefinition, FormState};
use serde::Serialize;
use std::collections::BTreeMap;

/// Separator used when a multi-select is sent as a single string
pub const LIST_SEPARATOR: &str = ",";

/// API-shaped record keyed by API field names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Payload(BTreeMap<String, String>);

impl Payload {
    pub fn get(&self, api_name: &str) -> Option<&str> {
        self.0.get(api_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Build the payload for every declared field
pub fn build_payload(definition: &FormDefinition, state: &FormState) -> Payload {
    let fields = definition
        .fields
        .iter()
        .map(|spec| {
            let encoded = match state.get(&spec.name) {
                Some(FieldValue::Text(text)) => text.clone(),
                Some(FieldValue::List(items)) => items.join(LIST_SEPARATOR),
                None => String::new(),
            };
            (spec.api_name.clone(), encoded)
        })
        .collect();
    Payload(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::models::{FieldSpec, FieldStore};
    use serde_json::json;
    use std::sync::Arc;

    fn definition() -> Arc<FormDefinition> {
        Arc::new(FormDefinition {
            title: "Test".to_string(),
            endpoint: "create".to_string(),
            listing_route: "/list".to_string(),
            success_message: "ok".to_string(),
            failure_message: "failed".to_string(),
            fields: vec![
                FieldSpec::text("contact_name", "Name"),
                FieldSpec::text("internal_note", "Note").api_name("note"),
                FieldSpec::multi_select("contact_group", "Groups", Vec::new()),
            ],
        })
    }

    #[test]
    fn build_payload_should_join_multi_select_with_commas() {
        let mut store = FieldStore::new(definition());
        store
            .set_field("contact_group", vec!["group1", "group3"])
            .unwrap();

        let payload = build_payload(store.definition(), store.state());

        assert_eq!(payload.get("contact_group"), Some("group1,group3"));
    }

    #[test]
    fn build_payload_should_preserve_selection_order() {
        let mut store = FieldStore::new(definition());
        store
            .set_field("contact_group", vec!["group5", "group2"])
            .unwrap();

        let payload = build_payload(store.definition(), store.state());

        assert_eq!(payload.get("contact_group"), Some("group5,group2"));
    }

    #[test]
    fn build_payload_should_rename_fields_and_pass_scalars_through() {
        let mut store = FieldStore::new(definition());
        store.set_field("contact_name", "  Acme  ").unwrap();
        store.set_field("internal_note", "vip").unwrap();

        let payload = build_payload(store.definition(), store.state());

        assert_eq!(payload.get("contact_name"), Some("  Acme  "));
        assert_eq!(payload.get("note"), Some("vip"));
        assert_eq!(payload.get("internal_note"), None);
        assert_eq!(payload.get("contact_group"), Some(""));
        assert_eq!(payload.len(), 3);
    }

    #[test]
    fn build_payload_should_not_touch_state() {
        let mut store = FieldStore::new(definition());
        store.set_field("contact_group", vec!["group1"]).unwrap();
        let before = store.state().clone();

        let _ = build_payload(store.definition(), store.state());

        assert_eq!(store.state(), &before);
    }

    #[test]
    fn payload_should_serialize_as_flat_object() {
        let mut store = FieldStore::new(definition());
        store.set_field("contact_name", "Acme").unwrap();
        let payload = build_payload(store.definition(), store.state());

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "contact_name": "Acme", "note": "", "contact_group": "" })
        );
    }
}
