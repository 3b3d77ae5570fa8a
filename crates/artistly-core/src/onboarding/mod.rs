//! Onboarding domain module.
//!
//! This module defines the artist onboarding wizard: form data, per-step
//! validation and the pure wizard state machine.

pub mod application;
pub mod errors;
pub mod form;
pub mod options;
pub mod snapshot;
pub mod state_machine;
pub mod step;
pub mod validator;

pub use application::{ArtistApplication, SubmissionReceipt};
pub use errors::{FieldErrors, SubmissionError};
pub use form::{FieldUpdate, FormData, FormField, SetField, BIO_MAX_CHARS};
pub use options::FormOptions;
pub use snapshot::WizardSnapshot;
pub use state_machine::{WizardAction, WizardEvent, WizardState, WizardStateMachine};
pub use step::{WizardStep, TOTAL_STEPS};
pub use validator::{validate_step, OptionCheck, StepValidator};
