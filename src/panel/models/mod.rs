//! # Models
//!
//! Form declarations, live form state and the records shown by detail views.

pub mod directory_record;
pub mod field_store;
pub mod schema;
pub mod validation;

pub use directory_record::{DirectoryRecord, NOT_PROVIDED};
pub use field_store::{FieldStore, FieldValue, FormError, FormState, SetOutcome};
pub use schema::{FieldFormat, FieldKind, FieldOption, FieldSpec, FormDefinition};
pub use validation::ValidationErrors;
