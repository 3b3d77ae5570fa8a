use std::sync::Arc;

use tracing::info;

use artistly_core::catalog::Artist;
use artistly_core::ids::ArtistId;
use artistly_core::ports::ArtistRepositoryPort;
use artistly_core::review::{decide, ReviewDecision, ReviewError};

/// Use case for approving or rejecting a pending application
/// 审核申请（通过 / 拒绝）
pub struct ReviewApplication {
    artist_repo: Arc<dyn ArtistRepositoryPort>,
}

impl ReviewApplication {
    pub fn new(artist_repo: Arc<dyn ArtistRepositoryPort>) -> Self {
        Self { artist_repo }
    }

    /// - Err(NotFound) if the id is unknown
    /// - Err(NotPending) if the application was already decided
    pub async fn execute(
        &self,
        id: ArtistId,
        decision: ReviewDecision,
    ) -> Result<Artist, ReviewError> {
        let current = self
            .artist_repo
            .get(id)
            .await?
            .ok_or(ReviewError::NotFound(id))?;

        let status = decide(id, current.status, decision)?;
        // Another reviewer may have decided between the read and this write.
        let updated = self.artist_repo.set_status_if_pending(id, status).await?;

        info!(artist_id = %id, ?decision, status = %updated.status, "application reviewed");
        Ok(updated)
    }
}
