use serde::{Deserialize, Serialize};

use crate::catalog::{Artist, ArtistStatus};

/// Filters applied to the review dashboard table.
///
/// Unlike the public catalog, every status is visible here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewFilter {
    /// Substring of name or location, case-insensitive.
    pub search: String,
    pub category: Option<String>,
    pub status: Option<ArtistStatus>,
}

impl ReviewFilter {
    pub fn matches(&self, artist: &Artist) -> bool {
        let matches_search = self.search.is_empty() || {
            let needle = self.search.to_lowercase();
            artist.name.to_lowercase().contains(&needle)
                || artist.location.to_lowercase().contains(&needle)
        };
        let matches_category = self
            .category
            .as_deref()
            .map_or(true, |category| artist.has_category(category));
        let matches_status = self.status.map_or(true, |status| artist.status == status);

        matches_search && matches_category && matches_status
    }
}
