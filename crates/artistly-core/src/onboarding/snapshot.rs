use serde::{Deserialize, Serialize};

use super::errors::{FieldErrors, SubmissionError};
use super::form::FormData;
use super::state_machine::WizardState;
use super::step::TOTAL_STEPS;

/// Observable wizard state published to the presentation layer after every operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardSnapshot {
    pub current_step: u8,
    pub total_steps: u8,
    pub step_title: String,
    pub progress_percent: u8,
    pub errors: FieldErrors,
    pub is_submitting: bool,
    pub is_done: bool,
    pub failure: Option<SubmissionError>,
    pub form: FormData,
}

impl WizardSnapshot {
    pub fn capture(state: &WizardState, form: &FormData) -> Self {
        let step = state.current_step();
        Self {
            current_step: step.number(),
            total_steps: TOTAL_STEPS,
            step_title: step.title().to_string(),
            progress_percent: step.progress_percent(),
            errors: state.errors().clone(),
            is_submitting: state.is_submitting(),
            is_done: state.is_done(),
            failure: state.failure().cloned(),
            form: form.clone(),
        }
    }
}
