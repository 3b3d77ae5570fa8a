use thiserror::Error;

use crate::catalog::ArtistStatus;
use crate::ids::ArtistId;

#[derive(Debug, Error)]
pub enum ArtistRepositoryError {
    #[error("artist {0} not found")]
    NotFound(ArtistId),

    #[error("artist {id} is already {status}")]
    NotPending { id: ArtistId, status: ArtistStatus },

    #[error("storage error: {0}")]
    Storage(String),
}
