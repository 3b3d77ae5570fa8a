//! Submission sink port
//!
//! Accepts a completed onboarding application. Implementations are provided
//! by the infrastructure layer (in-memory directory, remote API, ...).

use async_trait::async_trait;

use crate::onboarding::{ArtistApplication, SubmissionError, SubmissionReceipt};

#[async_trait]
pub trait SubmissionSinkPort: Send + Sync {
    /// Hand over one application.
    /// - Not idempotent: callers must not submit the same record twice
    async fn submit(
        &self,
        application: &ArtistApplication,
    ) -> Result<SubmissionReceipt, SubmissionError>;
}
