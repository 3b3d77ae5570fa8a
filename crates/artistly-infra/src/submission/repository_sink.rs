//! Submission sink backed by the artist directory.
//!
//! 将提交的申请写入目录，状态为待审核。

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use artistly_core::onboarding::{ArtistApplication, SubmissionError, SubmissionReceipt};
use artistly_core::ports::{ArtistRepositoryPort, SubmissionSinkPort};

pub struct RepositorySubmissionSink {
    repository: Arc<dyn ArtistRepositoryPort>,
    latency: Duration,
}

impl RepositorySubmissionSink {
    pub fn new(repository: Arc<dyn ArtistRepositoryPort>) -> Self {
        Self {
            repository,
            latency: Duration::ZERO,
        }
    }

    /// Delay every submission, mimicking a remote service.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl SubmissionSinkPort for RepositorySubmissionSink {
    async fn submit(
        &self,
        application: &ArtistApplication,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let artist = self
            .repository
            .insert_pending(application)
            .await
            .map_err(|e| {
                warn!(application_id = %application.id, error = %e, "Failed to store application");
                SubmissionError::Unavailable {
                    message: e.to_string(),
                }
            })?;

        info!(
            application_id = %application.id,
            artist_id = %artist.id,
            "Application accepted"
        );

        Ok(SubmissionReceipt {
            application_id: application.id.clone(),
            reference: Some(artist.id.to_string()),
        })
    }
}
