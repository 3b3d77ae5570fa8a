use async_trait::async_trait;

use super::errors::ArtistRepositoryError;
use crate::catalog::{Artist, ArtistStatus};
use crate::ids::ArtistId;
use crate::onboarding::ArtistApplication;

#[async_trait]
pub trait ArtistRepositoryPort: Send + Sync {
    /// All entries in directory order, regardless of status.
    async fn list_all(&self) -> Result<Vec<Artist>, ArtistRepositoryError>;

    async fn get(&self, id: ArtistId) -> Result<Option<Artist>, ArtistRepositoryError>;

    /// Add a submitted application as a pending entry with a fresh id.
    async fn insert_pending(
        &self,
        application: &ArtistApplication,
    ) -> Result<Artist, ArtistRepositoryError>;

    /// Move a pending entry to `status`, checking and writing in one step.
    /// - Err(NotFound) if the id is unknown
    /// - Err(NotPending) if the entry was already decided
    async fn set_status_if_pending(
        &self,
        id: ArtistId,
        status: ArtistStatus,
    ) -> Result<Artist, ArtistRepositoryError>;
}
