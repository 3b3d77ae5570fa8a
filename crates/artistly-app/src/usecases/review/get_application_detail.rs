use std::sync::Arc;

use artistly_core::catalog::Artist;
use artistly_core::ids::ArtistId;
use artistly_core::ports::ArtistRepositoryPort;
use artistly_core::review::ReviewError;

/// Use case for the dashboard detail view
pub struct GetApplicationDetail {
    artist_repo: Arc<dyn ArtistRepositoryPort>,
}

impl GetApplicationDetail {
    pub fn new(artist_repo: Arc<dyn ArtistRepositoryPort>) -> Self {
        Self { artist_repo }
    }

    pub async fn execute(&self, id: ArtistId) -> Result<Artist, ReviewError> {
        self.artist_repo
            .get(id)
            .await?
            .ok_or(ReviewError::NotFound(id))
    }
}
