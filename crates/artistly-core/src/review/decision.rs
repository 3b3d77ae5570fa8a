use serde::{Deserialize, Serialize};

use crate::catalog::ArtistStatus;
use crate::ids::ArtistId;
use crate::ports::ArtistRepositoryError;

/// Reviewer verdict on a pending application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    pub fn resulting_status(self) -> ArtistStatus {
        match self {
            Self::Approve => ArtistStatus::Approved,
            Self::Reject => ArtistStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewError {
    #[error("artist {0} not found")]
    NotFound(ArtistId),

    #[error("artist {id} is already {status}")]
    NotPending { id: ArtistId, status: ArtistStatus },

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<ArtistRepositoryError> for ReviewError {
    fn from(err: ArtistRepositoryError) -> Self {
        match err {
            ArtistRepositoryError::NotFound(id) => Self::NotFound(id),
            ArtistRepositoryError::NotPending { id, status } => Self::NotPending { id, status },
            ArtistRepositoryError::Storage(message) => Self::Storage(message),
        }
    }
}

/// Only pending applications can be decided.
pub fn decide(
    id: ArtistId,
    current: ArtistStatus,
    decision: ReviewDecision,
) -> Result<ArtistStatus, ReviewError> {
    match current {
        ArtistStatus::Pending => Ok(decision.resulting_status()),
        status => Err(ReviewError::NotPending { id, status }),
    }
}
