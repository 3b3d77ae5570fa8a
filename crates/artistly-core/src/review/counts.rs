use serde::Serialize;

use crate::catalog::{Artist, ArtistStatus};

/// Dashboard summary over the whole directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn tally<'a>(artists: impl IntoIterator<Item = &'a Artist>) -> Self {
        artists
            .into_iter()
            .fold(Self::default(), |mut counts, artist| {
                counts.total += 1;
                match artist.status {
                    ArtistStatus::Pending => counts.pending += 1,
                    ArtistStatus::Approved => counts.approved += 1,
                    ArtistStatus::Rejected => counts.rejected += 1,
                }
                counts
            })
    }
}
