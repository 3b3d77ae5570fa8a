//! Public catalog filtering.
//!
//! Matching is exact or case-insensitive substring only; results keep
//! directory order.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::artist::{Artist, ArtistStatus};

/// Filters applied to the public artist listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogFilter {
    /// Substring of name or bio, case-insensitive.
    pub search: String,
    /// Any overlap with the artist's categories.
    pub categories: BTreeSet<String>,
    pub location: Option<String>,
    pub price_range: Option<String>,
}

impl CatalogFilter {
    /// Filter preselected with one category (deep link from the landing page).
    pub fn for_category(category: impl Into<String>) -> Self {
        Self {
            categories: [category.into()].into(),
            ..Self::default()
        }
    }

    pub fn toggle_category(&mut self, category: &str) {
        if !self.categories.remove(category) {
            self.categories.insert(category.to_string());
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty()
            || !self.categories.is_empty()
            || self.location.is_some()
            || self.price_range.is_some()
    }

    /// Only approved artists are ever listed.
    pub fn matches(&self, artist: &Artist) -> bool {
        artist.status == ArtistStatus::Approved
            && self.matches_search(artist)
            && self.matches_categories(artist)
            && self
                .location
                .as_deref()
                .map_or(true, |location| artist.location == location)
            && self
                .price_range
                .as_deref()
                .map_or(true, |price| artist.price_range == price)
    }

    pub fn apply<'a>(&self, artists: &'a [Artist]) -> Vec<&'a Artist> {
        artists.iter().filter(|a| self.matches(a)).collect()
    }

    fn matches_search(&self, artist: &Artist) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        artist.name.to_lowercase().contains(&needle) || artist.bio.to_lowercase().contains(&needle)
    }

    fn matches_categories(&self, artist: &Artist) -> bool {
        self.categories.is_empty() || self.categories.iter().any(|c| artist.has_category(c))
    }
}
