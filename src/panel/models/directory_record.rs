//! # Directory Record
//!
//! Read-only business directory entry returned by `panel-fetch-by-id`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Label shown for any field the record does not carry
pub const NOT_PROVIDED: &str = "Not Provided";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryRecord {
    #[serde(deserialize_with = "lenient_text")]
    pub name_of_firm: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub membership_category: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub contact_person: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub office_ph_no: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub cell_no: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub mail_id: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub fax_no: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub website: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub contact_address: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub nature_of_business: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub manufacturers: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub brands: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub year_of_establishment: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub tin_number: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub ssi_registration_number: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub dgtd_number: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub gst: Option<String>,
}

impl DirectoryRecord {
    /// Value of an optional field, or the fallback label
    pub fn display(value: &Option<String>) -> &str {
        value.as_deref().unwrap_or(NOT_PROVIDED)
    }

    /// Title used for the printed document
    pub fn document_title(&self) -> String {
        format!("Directory-{}", self.name_of_firm.as_deref().unwrap_or_default())
    }
}

/// Accepts strings, numbers and booleans as text; null and blank strings
/// become `None`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_should_deserialize_partial_payload() {
        let record: DirectoryRecord = serde_json::from_value(json!({
            "name_of_firm": "Acme Traders",
            "cell_no": 9876543210u64,
            "website": null,
            "fax_no": "",
            "unrelated": "ignored"
        }))
        .unwrap();

        assert_eq!(record.name_of_firm.as_deref(), Some("Acme Traders"));
        assert_eq!(record.cell_no.as_deref(), Some("9876543210"));
        assert_eq!(record.website, None);
        assert_eq!(record.fax_no, None);
        assert_eq!(record.gst, None);
    }

    #[test]
    fn display_should_fall_back_when_absent() {
        let record = DirectoryRecord::default();
        assert_eq!(DirectoryRecord::display(&record.brands), NOT_PROVIDED);
    }

    #[test]
    fn document_title_should_use_firm_name() {
        let record = DirectoryRecord {
            name_of_firm: Some("Acme".to_string()),
            ..Default::default()
        };
        assert_eq!(record.document_title(), "Directory-Acme");
        assert_eq!(DirectoryRecord::default().document_title(), "Directory-");
    }
}
