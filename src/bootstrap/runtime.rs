//! # Use Cases Accessor
//!
//! `AppRuntime` owns the wired dependencies and resolved settings;
//! `runtime.usecases().xxx()` builds a use case with its ports attached.

use artistly_app::usecases::{
    BrowseArtists, GetApplicationDetail, GetStatusCounts, ListApplications, ReviewApplication,
};
use artistly_app::WizardController;
use artistly_core::config::AppConfig;

use super::wiring::{resolve_settings, wire_dependencies, AppDeps, AppSettings};

/// Application runtime with dependencies.
pub struct AppRuntime {
    pub deps: AppDeps,
    pub settings: AppSettings,
}

impl AppRuntime {
    pub fn new(deps: AppDeps, settings: AppSettings) -> Self {
        Self { deps, settings }
    }

    /// Resolve defaults and wire the in-memory infrastructure.
    pub fn from_config(config: &AppConfig) -> Self {
        let settings = resolve_settings(config);
        let deps = wire_dependencies(&settings);
        Self::new(deps, settings)
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }
}

pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    /// A fresh wizard session. Each applicant gets their own controller.
    /// 每个申请人独立的向导会话
    pub fn onboarding_wizard(&self) -> WizardController {
        let deps = &self.runtime.deps;
        let settings = &self.runtime.settings;
        WizardController::new(deps.submission_sink.clone(), deps.wizard_events.clone())
            .with_validator(settings.step_validator())
            .with_submission_timeout(settings.submission_timeout)
    }

    pub fn browse_artists(&self) -> BrowseArtists {
        BrowseArtists::new(self.runtime.deps.artist_repo.clone())
    }

    pub fn list_applications(&self) -> ListApplications {
        ListApplications::new(self.runtime.deps.artist_repo.clone())
            .with_page_size(self.runtime.settings.page_size)
    }

    pub fn get_application_detail(&self) -> GetApplicationDetail {
        GetApplicationDetail::new(self.runtime.deps.artist_repo.clone())
    }

    pub fn get_status_counts(&self) -> GetStatusCounts {
        GetStatusCounts::new(self.runtime.deps.artist_repo.clone())
    }

    pub fn review_application(&self) -> ReviewApplication {
        ReviewApplication::new(self.runtime.deps.artist_repo.clone())
    }
}
