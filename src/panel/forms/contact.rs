//! # Add Contact Form
//!
//! Declaration of the contact creation page.

use crate::panel::models::{FieldFormat, FieldOption, FieldSpec, FormDefinition};

pub const CONTACT_ENDPOINT: &str = "panel-create-group";
pub const CONTACT_LISTING_ROUTE: &str = "/Contact";
pub const CONTACT_SUCCESS_MESSAGE: &str = "Contact added successfully!";
pub const CONTACT_FAILURE_MESSAGE: &str = "Error adding contact!";

pub const MOBILE_MAX_LENGTH: usize = 10;
pub const PINCODE_MAX_LENGTH: usize = 6;

/// Group names offered by the group and state selects
pub fn group_options() -> Vec<FieldOption> {
    (1..=8)
        .map(|n| FieldOption::new(format!("group{n}"), format!("Group {n}")))
        .collect()
}

pub fn contact_form() -> FormDefinition {
    FormDefinition {
        title: "Add Contact".to_string(),
        endpoint: CONTACT_ENDPOINT.to_string(),
        listing_route: CONTACT_LISTING_ROUTE.to_string(),
        success_message: CONTACT_SUCCESS_MESSAGE.to_string(),
        failure_message: CONTACT_FAILURE_MESSAGE.to_string(),
        fields: vec![
            FieldSpec::text("contact_name", "Name").required(),
            FieldSpec::text("contact_mobile", "Mobile No")
                .format(FieldFormat::DigitsOnly)
                .max_length(MOBILE_MAX_LENGTH)
                .required(),
            FieldSpec::multi_select("contact_group", "Group Name", group_options()).required(),
            FieldSpec::text("contact_email", "Email")
                .format(FieldFormat::Email)
                .required(),
            FieldSpec::text("contact_address", "Address").required(),
            FieldSpec::select("contact_state", "State", group_options()).required(),
            FieldSpec::text("contact_pincode", "Pincode")
                .format(FieldFormat::DigitsOnly)
                .max_length(PINCODE_MAX_LENGTH)
                .required(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::models::FieldKind;

    #[test]
    fn contact_form_should_declare_all_fields() {
        let form = contact_form();
        let names: Vec<&str> = form.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "contact_name",
                "contact_mobile",
                "contact_group",
                "contact_email",
                "contact_address",
                "contact_state",
                "contact_pincode",
            ]
        );
        assert!(form.fields.iter().all(|f| f.required));
        assert!(form.fields.iter().all(|f| f.api_name == f.name));
    }

    #[test]
    fn contact_form_should_mask_phone_and_pincode() {
        let form = contact_form();
        let mobile = form.field("contact_mobile").unwrap();
        let pincode = form.field("contact_pincode").unwrap();

        assert_eq!(mobile.format, FieldFormat::DigitsOnly);
        assert_eq!(mobile.max_length, Some(10));
        assert_eq!(pincode.format, FieldFormat::DigitsOnly);
        assert_eq!(pincode.max_length, Some(6));
    }

    #[test]
    fn contact_group_should_offer_eight_groups() {
        let form = contact_form();
        let group = form.field("contact_group").unwrap();
        assert_eq!(group.kind, FieldKind::MultiSelect);
        assert_eq!(group.options.len(), 8);
        assert_eq!(group.options[0], FieldOption::new("group1", "Group 1"));
        assert_eq!(group.options[7].value, "group8");
    }
}
