//! # Forms
//!
//! Concrete page declarations.

pub mod contact;

pub use contact::{contact_form, group_options};
