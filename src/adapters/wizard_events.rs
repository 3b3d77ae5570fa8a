use async_trait::async_trait;
use tracing::debug;

use artistly_core::onboarding::WizardSnapshot;
use artistly_core::ports::WizardEventPort;

/// Wizard event sink for the command line: there is no UI to refresh, so
/// state changes are only logged.
pub struct TracingWizardEventPort;

#[async_trait]
impl WizardEventPort for TracingWizardEventPort {
    async fn emit_wizard_state_changed(&self, snapshot: WizardSnapshot) {
        debug!(
            step = snapshot.current_step,
            progress = snapshot.progress_percent,
            errors = snapshot.errors.len(),
            submitting = snapshot.is_submitting,
            done = snapshot.is_done,
            "wizard state changed"
        );
    }
}
