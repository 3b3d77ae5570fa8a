//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Create infra implementations / 创建 infra 层具体实现
//! - ✅ Resolve configuration defaults / 解析配置默认值
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//!
//! > **This is the only place allowed to depend on artistly-infra + artistly-app simultaneously.**
//! > **这是唯一允许同时依赖 artistly-infra 和 artistly-app 的地方。**

use std::sync::Arc;
use std::time::Duration;

use artistly_app::usecases::onboarding::DEFAULT_SUBMISSION_TIMEOUT;
use artistly_app::usecases::review::DEFAULT_PAGE_SIZE;
use artistly_core::config::AppConfig;
use artistly_core::onboarding::{FormOptions, OptionCheck, StepValidator};
use artistly_core::ports::{ArtistRepositoryPort, SubmissionSinkPort, WizardEventPort};
use artistly_infra::{InMemoryArtistRepository, RepositorySubmissionSink};

use crate::adapters::TracingWizardEventPort;

/// Port implementations shared by every use case.
/// 所有用例共享的端口实现
#[derive(Clone)]
pub struct AppDeps {
    pub artist_repo: Arc<dyn ArtistRepositoryPort>,
    pub submission_sink: Arc<dyn SubmissionSinkPort>,
    pub wizard_events: Arc<dyn WizardEventPort>,
}

/// Configuration with every default filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub submission_timeout: Duration,
    pub simulated_latency: Duration,
    pub option_check: OptionCheck,
    pub page_size: usize,
}

impl AppSettings {
    pub fn step_validator(&self) -> StepValidator {
        StepValidator::with_check(self.option_check, FormOptions::default())
    }
}

/// Fill in defaults for everything the config file left unset.
pub fn resolve_settings(config: &AppConfig) -> AppSettings {
    AppSettings {
        submission_timeout: config
            .submission_timeout_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SUBMISSION_TIMEOUT),
        simulated_latency: Duration::from_millis(config.simulated_latency_ms.unwrap_or(0)),
        option_check: match config.strict_options {
            Some(true) => OptionCheck::Strict,
            _ => OptionCheck::Lenient,
        },
        page_size: match config.page_size {
            Some(size) if size > 0 => size,
            _ => DEFAULT_PAGE_SIZE,
        },
    }
}

/// Wire the in-memory directory and its submission sink.
pub fn wire_dependencies(settings: &AppSettings) -> AppDeps {
    let artist_repo: Arc<dyn ArtistRepositoryPort> = Arc::new(InMemoryArtistRepository::seeded());
    let submission_sink = Arc::new(
        RepositorySubmissionSink::new(artist_repo.clone()).with_latency(settings.simulated_latency),
    );

    AppDeps {
        artist_repo,
        submission_sink,
        wizard_events: Arc::new(TracingWizardEventPort),
    }
}
