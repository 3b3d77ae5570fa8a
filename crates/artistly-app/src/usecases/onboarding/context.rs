use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard, TryLockError};

use artistly_core::onboarding::{FormData, WizardSnapshot, WizardState};

/// Everything one wizard session owns.
#[derive(Debug, Default)]
pub(crate) struct WizardSession {
    pub state: WizardState,
    pub form: FormData,
}

impl WizardSession {
    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot::capture(&self.state, &self.form)
    }
}

/// Shared wizard context.
///
/// State and form live behind a single lock so a transition always validates
/// the form it is stored next to. The lock is never held across the sink call.
#[derive(Clone, Default)]
pub(crate) struct WizardContext {
    session: Arc<Mutex<WizardSession>>,
}

impl WizardContext {
    pub fn with_form(form: FormData) -> Self {
        Self {
            session: Arc::new(Mutex::new(WizardSession {
                state: WizardState::default(),
                form,
            })),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub async fn lock(&self) -> MutexGuard<'_, WizardSession> {
        self.session.lock().await
    }

    pub fn try_lock(&self) -> Result<MutexGuard<'_, WizardSession>, TryLockError> {
        self.session.try_lock()
    }

    pub async fn snapshot(&self) -> WizardSnapshot {
        self.session.lock().await.snapshot()
    }
}
