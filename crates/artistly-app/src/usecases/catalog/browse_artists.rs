use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use artistly_core::catalog::{Artist, CatalogFilter};
use artistly_core::ports::ArtistRepositoryPort;

/// Approved artists matching a catalog filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResult {
    pub artists: Vec<Artist>,
    pub total: usize,
}

/// Use case for the public artist catalog
/// 公开艺人目录的浏览用例
pub struct BrowseArtists {
    artist_repo: Arc<dyn ArtistRepositoryPort>,
}

impl BrowseArtists {
    pub fn new(artist_repo: Arc<dyn ArtistRepositoryPort>) -> Self {
        Self { artist_repo }
    }

    pub async fn execute(&self, filter: &CatalogFilter) -> Result<CatalogResult> {
        let all = self
            .artist_repo
            .list_all()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to load artist directory: {}", e))?;

        let artists: Vec<Artist> = filter.apply(&all).into_iter().cloned().collect();
        debug!(
            matched = artists.len(),
            active_filters = filter.has_active_filters(),
            "catalog filtered"
        );

        Ok(CatalogResult {
            total: artists.len(),
            artists,
        })
    }
}
