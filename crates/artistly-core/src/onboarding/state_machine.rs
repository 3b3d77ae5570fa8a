//! Onboarding wizard state machine.
//!
//! Defines a pure state transition function for the artist onboarding flow.
//! Side effects (handing the record to a sink) are returned as actions.

use tracing::debug;

use super::errors::{FieldErrors, SubmissionError};
use super::form::FormData;
use super::step::WizardStep;
use super::validator::StepValidator;

/// Wizard flow state.
///
/// 引导流程状态。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum WizardState {
    /// User is filling in a step.
    ///
    /// 用户正在填写某一步。
    Editing {
        step: WizardStep,
        errors: FieldErrors,
        failure: Option<SubmissionError>,
    },
    /// The completed record is with the submission sink.
    ///
    /// 提交中。
    Submitting,
    /// Application accepted.
    ///
    /// 提交完成。
    Done,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::editing(WizardStep::FIRST)
    }
}

impl WizardState {
    fn editing(step: WizardStep) -> Self {
        Self::Editing {
            step,
            errors: FieldErrors::new(),
            failure: None,
        }
    }

    /// Step shown to the user. Submission and completion sit on the last step.
    pub fn current_step(&self) -> WizardStep {
        match self {
            Self::Editing { step, .. } => *step,
            Self::Submitting | Self::Done => WizardStep::LAST,
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        match self {
            Self::Editing { errors, .. } => errors,
            Self::Submitting | Self::Done => FieldErrors::none(),
        }
    }

    pub fn failure(&self) -> Option<&SubmissionError> {
        match self {
            Self::Editing { failure, .. } => failure.as_ref(),
            Self::Submitting | Self::Done => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Events that drive the wizard.
///
/// 驱动引导流程的事件。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WizardEvent {
    /// Validate the current step and move forward.
    ///
    /// 下一步。
    Next,
    /// Move back one step without validation.
    ///
    /// 上一步。
    Back,
    /// Validate the last step and hand the record to the sink.
    ///
    /// 提交申请。
    Submit,
    /// Sink accepted the record.
    SubmissionSucceeded,
    /// Sink rejected the record or could not be reached.
    SubmissionFailed { error: SubmissionError },
}

/// Side-effects produced by state transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WizardAction {
    /// Hand the current form to the submission sink.
    SubmitApplication,
}

/// Pure wizard state machine.
///
/// 纯状态机：不包含副作用。
pub struct WizardStateMachine;

impl WizardStateMachine {
    pub fn transition(
        state: WizardState,
        event: WizardEvent,
        form: &FormData,
        validator: &StepValidator,
    ) -> (WizardState, Vec<WizardAction>) {
        match (state, event) {
            (WizardState::Editing { step, .. }, WizardEvent::Next) => {
                let errors = validator.validate(step, form);
                if errors.is_empty() {
                    (WizardState::editing(step.next()), Vec::new())
                } else {
                    (
                        WizardState::Editing {
                            step,
                            errors,
                            failure: None,
                        },
                        Vec::new(),
                    )
                }
            }
            // A submission failure belongs to the last step; it does not follow the
            // applicant backwards.
            (WizardState::Editing { step, errors, .. }, WizardEvent::Back) => (
                WizardState::Editing {
                    step: step.previous(),
                    errors,
                    failure: None,
                },
                Vec::new(),
            ),
            (WizardState::Editing { step, .. }, WizardEvent::Submit) if step.is_last() => {
                let errors = validator.validate(step, form);
                if errors.is_empty() {
                    (WizardState::Submitting, vec![WizardAction::SubmitApplication])
                } else {
                    (
                        WizardState::Editing {
                            step,
                            errors,
                            failure: None,
                        },
                        Vec::new(),
                    )
                }
            }
            (WizardState::Submitting, WizardEvent::SubmissionSucceeded) => {
                (WizardState::Done, Vec::new())
            }
            (WizardState::Submitting, WizardEvent::SubmissionFailed { error }) => (
                WizardState::Editing {
                    step: WizardStep::LAST,
                    errors: FieldErrors::new(),
                    failure: Some(error),
                },
                Vec::new(),
            ),
            (state, event) => {
                debug!(?state, ?event, "ignored wizard transition");
                (state, Vec::new())
            }
        }
    }
}
