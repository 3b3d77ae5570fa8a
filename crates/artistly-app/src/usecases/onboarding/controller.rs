//! Onboarding wizard controller.
//!
//! This module drives the wizard state machine and performs its one side
//! effect: handing the completed application to the submission sink.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::runtime::Handle;
use tracing::{debug, error, info, info_span, warn, Instrument};

use artistly_core::{
    onboarding::{
        ArtistApplication, FieldErrors, FieldUpdate, FormData, FormField, SetField, StepValidator,
        SubmissionError, SubmissionReceipt, WizardAction, WizardEvent, WizardSnapshot,
        WizardState, WizardStateMachine,
    },
    ports::{SubmissionSinkPort, WizardEventPort},
};

use super::context::{WizardContext, WizardSession};

/// Default upper bound for one sink call.
pub const DEFAULT_SUBMISSION_TIMEOUT: Duration = Duration::from_secs(30);

/// Result of a `submit()` call.
///
/// 提交结果。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// The sink accepted the application; the wizard is done.
    Submitted { receipt: SubmissionReceipt },
    /// The final step failed validation; errors are on the snapshot too.
    Invalid { errors: FieldErrors },
    /// The sink failed. The wizard is back on the last step and may retry.
    Failed { error: SubmissionError },
    /// Another submission is still in flight. The sink was not called.
    AlreadySubmitting,
    /// Submission is only reachable from the last step.
    NotOnFinalStep,
    /// The application was already accepted. The sink was not called.
    AlreadyCompleted,
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted { .. })
    }
}

/// Controller that owns one applicant's wizard session.
///
/// All operations take `&self`; the controller can be shared behind an `Arc`
/// between the presentation layer and a pending submission.
pub struct WizardController {
    context: Arc<WizardContext>,
    validator: StepValidator,
    submission_timeout: Duration,

    submission_sink: Arc<dyn SubmissionSinkPort>,
    wizard_event_port: Arc<dyn WizardEventPort>,
}

impl WizardController {
    pub fn new(
        submission_sink: Arc<dyn SubmissionSinkPort>,
        wizard_event_port: Arc<dyn WizardEventPort>,
    ) -> Self {
        Self {
            context: WizardContext::default().arc(),
            validator: StepValidator::lenient(),
            submission_timeout: DEFAULT_SUBMISSION_TIMEOUT,
            submission_sink,
            wizard_event_port,
        }
    }

    pub fn with_validator(mut self, validator: StepValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn with_submission_timeout(mut self, timeout: Duration) -> Self {
        self.submission_timeout = timeout;
        self
    }

    /// Start the session from a saved draft instead of an empty form.
    pub fn with_form(mut self, form: FormData) -> Self {
        self.context = WizardContext::with_form(form).arc();
        self
    }

    /// Validate the current step and move forward when it passes.
    pub async fn advance(&self) -> WizardSnapshot {
        self.dispatch(WizardEvent::Next).await
    }

    /// Move back one step. Errors are left as they are; a submission failure
    /// is cleared.
    pub async fn retreat(&self) -> WizardSnapshot {
        self.dispatch(WizardEvent::Back).await
    }

    /// Replace one scalar field of the form.
    pub async fn update_field(&self, update: FieldUpdate) -> WizardSnapshot {
        let field = update.field();
        self.edit(field.as_str(), |form| form.apply(update)).await
    }

    /// Add `value` to a multi-select field, or remove it when already present.
    pub async fn toggle(&self, field: SetField, value: impl Into<String>) -> WizardSnapshot {
        let value = value.into();
        let name = FormField::from(field).as_str();
        self.edit(name, |form| {
            let selected = form.toggle(field, &value);
            debug!(field = name, value = %value, selected, "wizard toggled option");
        })
        .await
    }

    /// Validate the last step and hand the application to the sink.
    ///
    /// The state lock is released while the sink runs; a second call arriving
    /// in the meantime sees `Submitting` and returns `AlreadySubmitting`.
    ///
    /// Dropping the returned future mid-flight abandons the sink call and puts
    /// the session back on the last step with a `Cancelled` failure.
    pub async fn submit(&self) -> SubmitOutcome {
        let span = info_span!("usecase.wizard_controller.submit");
        async {
            let (application, mut in_flight) = {
                let mut session = self.context.lock().await;
                match &session.state {
                    WizardState::Submitting => {
                        warn!("submission already in flight");
                        return SubmitOutcome::AlreadySubmitting;
                    }
                    WizardState::Done => return SubmitOutcome::AlreadyCompleted,
                    WizardState::Editing { step, .. } if !step.is_last() => {
                        debug!(step = step.number(), "submit requested before last step");
                        return SubmitOutcome::NotOnFinalStep;
                    }
                    WizardState::Editing { .. } => {}
                }

                let actions =
                    transition_session(&mut session, WizardEvent::Submit, &self.validator);
                if !actions.contains(&WizardAction::SubmitApplication) {
                    self.emit(session.snapshot()).await;
                    return SubmitOutcome::Invalid {
                        errors: session.state.errors().clone(),
                    };
                }
                let in_flight = self.in_flight();
                self.emit(session.snapshot()).await;
                (ArtistApplication::new(session.form.clone()), in_flight)
            };

            info!(application_id = %application.id, "handing application to submission sink");
            let result = self.call_sink(&application).await;

            let event = match &result {
                Ok(_) => WizardEvent::SubmissionSucceeded,
                Err(error) => WizardEvent::SubmissionFailed {
                    error: error.clone(),
                },
            };
            in_flight.resolve(event.clone());
            {
                let mut session = self.context.lock().await;
                self.apply(&mut session, event).await;
            }
            in_flight.disarm();

            match result {
                Ok(receipt) => SubmitOutcome::Submitted { receipt },
                Err(error) => {
                    warn!(application_id = %application.id, error = %error, "submission failed");
                    SubmitOutcome::Failed { error }
                }
            }
        }
        .instrument(span)
        .await
    }

    pub async fn snapshot(&self) -> WizardSnapshot {
        self.context.snapshot().await
    }

    fn in_flight(&self) -> InFlightSubmission {
        InFlightSubmission {
            context: self.context.clone(),
            validator: self.validator.clone(),
            wizard_event_port: self.wizard_event_port.clone(),
            pending: Some(WizardEvent::SubmissionFailed {
                error: SubmissionError::Cancelled,
            }),
        }
    }

    async fn call_sink(
        &self,
        application: &ArtistApplication,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        match tokio::time::timeout(
            self.submission_timeout,
            self.submission_sink.submit(application),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(SubmissionError::Timeout {
                after_ms: u64::try_from(self.submission_timeout.as_millis()).unwrap_or(u64::MAX),
            }),
        }
    }

    async fn dispatch(&self, event: WizardEvent) -> WizardSnapshot {
        let span = info_span!("usecase.wizard_controller.dispatch", event = ?event);
        async {
            let mut session = self.context.lock().await;
            self.apply(&mut session, event).await;
            session.snapshot()
        }
        .instrument(span)
        .await
    }

    async fn edit(&self, field: &'static str, edit: impl FnOnce(&mut FormData)) -> WizardSnapshot {
        let mut session = self.context.lock().await;
        if !session.state.is_editing() {
            debug!(field, state = ?session.state, "ignored edit outside editing phase");
            return session.snapshot();
        }

        edit(&mut session.form);
        let snapshot = session.snapshot();
        self.emit(snapshot.clone()).await;
        snapshot
    }

    /// Run one transition on a locked session and publish the new state.
    async fn apply(&self, session: &mut WizardSession, event: WizardEvent) -> Vec<WizardAction> {
        let actions = transition_session(session, event, &self.validator);
        self.emit(session.snapshot()).await;
        actions
    }

    async fn emit(&self, snapshot: WizardSnapshot) {
        self.wizard_event_port
            .emit_wizard_state_changed(snapshot)
            .await;
    }
}

fn transition_session(
    session: &mut WizardSession,
    event: WizardEvent,
    validator: &StepValidator,
) -> Vec<WizardAction> {
    let from = session.state.clone();
    let event_name = format!("{:?}", event);
    let (next, actions) =
        WizardStateMachine::transition(from.clone(), event, &session.form, validator);
    info!(from = ?from, to = ?next, event = %event_name, "wizard state transition");

    session.state = next;
    actions
}

/// Settles the session when a `submit()` future is dropped while `Submitting`.
///
/// Holds the event to apply on drop: a cancellation until the sink answers,
/// then the sink's own outcome until that outcome has been stored.
struct InFlightSubmission {
    context: Arc<WizardContext>,
    validator: StepValidator,
    wizard_event_port: Arc<dyn WizardEventPort>,
    pending: Option<WizardEvent>,
}

impl InFlightSubmission {
    fn resolve(&mut self, event: WizardEvent) {
        self.pending = Some(event);
    }

    fn disarm(mut self) {
        self.pending = None;
    }
}

impl Drop for InFlightSubmission {
    fn drop(&mut self) {
        let Some(event) = self.pending.take() else {
            return;
        };
        warn!(event = ?event, "submit dropped in flight, settling wizard session");

        // The lock is normally free here; settle synchronously so a retry that
        // follows immediately does not see `Submitting`.
        if let Ok(mut session) = self.context.try_lock() {
            transition_session(&mut session, event, &self.validator);
            let snapshot = session.snapshot();
            drop(session);
            if let Ok(handle) = Handle::try_current() {
                let events = self.wizard_event_port.clone();
                handle.spawn(async move { events.emit_wizard_state_changed(snapshot).await });
            }
            return;
        }

        match Handle::try_current() {
            Ok(handle) => {
                let context = self.context.clone();
                let validator = self.validator.clone();
                let events = self.wizard_event_port.clone();
                handle.spawn(async move {
                    let mut session = context.lock().await;
                    transition_session(&mut session, event, &validator);
                    events.emit_wizard_state_changed(session.snapshot()).await;
                });
            }
            Err(_) => error!("no runtime left to settle dropped submission"),
        }
    }
}
