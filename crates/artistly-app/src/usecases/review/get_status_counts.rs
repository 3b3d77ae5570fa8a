use std::sync::Arc;

use anyhow::Result;

use artistly_core::ports::ArtistRepositoryPort;
use artistly_core::review::StatusCounts;

/// Use case for the dashboard summary cards
/// 审核统计
pub struct GetStatusCounts {
    artist_repo: Arc<dyn ArtistRepositoryPort>,
}

impl GetStatusCounts {
    pub fn new(artist_repo: Arc<dyn ArtistRepositoryPort>) -> Self {
        Self { artist_repo }
    }

    /// Counts cover the whole directory, not the filtered view.
    pub async fn execute(&self) -> Result<StatusCounts> {
        let all = self
            .artist_repo
            .list_all()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to load applications: {}", e))?;
        Ok(StatusCounts::tally(&all))
    }
}
