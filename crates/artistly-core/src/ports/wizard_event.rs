use crate::onboarding::WizardSnapshot;

#[async_trait::async_trait]
pub trait WizardEventPort: Send + Sync {
    async fn emit_wizard_state_changed(&self, snapshot: WizardSnapshot);
}
