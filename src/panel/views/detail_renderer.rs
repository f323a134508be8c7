//! # Detail Renderer
//!
//! Plain-text print layout of a directory record.

use crate::panel::controllers::DetailState;
use crate::panel::models::DirectoryRecord;
use std::fmt::Write;

pub const NO_ID_MESSAGE: &str = "No ID provided";

const LABEL_WIDTH: usize = 24;

/// Render whatever the detail view currently holds
pub fn render_detail(state: &DetailState, image_base_url: Option<&str>) -> String {
    match state {
        DetailState::NotLoaded => String::new(),
        DetailState::MissingId => format!("{NO_ID_MESSAGE}\n"),
        DetailState::Failed(_) => "Error fetching directory record\n".to_string(),
        DetailState::Loaded(record) => render_record(record, image_base_url),
    }
}

pub fn render_record(record: &DirectoryRecord, image_base_url: Option<&str>) -> String {
    let mut out = String::new();
    let title = record.document_title();
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));
    let _ = writeln!(out, "{}", record.name_of_firm.as_deref().unwrap_or_default());
    if let Some(category) = &record.membership_category {
        let _ = writeln!(out, "[{category}]");
    }
    if let (Some(image), Some(base)) = (&record.image, image_base_url) {
        let _ = writeln!(out, "Logo: {}/{}", base.trim_end_matches('/'), image);
    }

    section(&mut out, "Contact Information");
    row(&mut out, "Contact Person", &record.contact_person);
    row(&mut out, "Office Phone", &record.office_ph_no);
    row(&mut out, "Cell Phone", &record.cell_no);
    row(&mut out, "Email", &record.mail_id);
    if record.fax_no.is_some() {
        row(&mut out, "Fax", &record.fax_no);
    }
    if record.website.is_some() {
        row(&mut out, "Website", &record.website);
    }
    row(&mut out, "Address", &record.contact_address);

    section(&mut out, "Business Details");
    row(&mut out, "Nature of Business", &record.nature_of_business);
    row(&mut out, "Manufacturers", &record.manufacturers);
    row(&mut out, "Brands", &record.brands);

    section(&mut out, "Additional Details");
    row(&mut out, "Year of Establishment", &record.year_of_establishment);
    row(&mut out, "TIN Number", &record.tin_number);
    row(&mut out, "SSI Registration", &record.ssi_registration_number);
    row(&mut out, "DGTD Number", &record.dgtd_number);
    row(&mut out, "GST", &record.gst);

    out
}

fn section(out: &mut String, heading: &str) {
    let _ = write!(out, "\n{heading}\n{}\n", "-".repeat(heading.len()));
}

fn row(out: &mut String, label: &str, value: &Option<String>) {
    let _ = writeln!(
        out,
        "  {label:<LABEL_WIDTH$}{}",
        DirectoryRecord::display(value)
    );
}
