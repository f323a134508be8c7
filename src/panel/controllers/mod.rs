//! # Controllers
//!
//! Workflow orchestration for create forms and read-only detail views.

pub mod detail_controller;
pub mod submission_controller;

pub use detail_controller::{
    DetailController, DetailState, FETCH_BY_ID_ENDPOINT, LOAD_FAILED_MESSAGE,
};
pub use submission_controller::{
    SubmissionController, SubmissionGuard, SubmitOutcome, FIX_ERRORS_MESSAGE,
};
