//! Onboarding use cases.
//!
//! This module exposes the wizard controller.

mod context;
pub mod controller;

pub use controller::{SubmitOutcome, WizardController, DEFAULT_SUBMISSION_TIMEOUT};
