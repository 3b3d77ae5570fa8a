use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use artistly_core::catalog::{paginate, Artist, Page};
use artistly_core::ports::ArtistRepositoryPort;
use artistly_core::review::ReviewFilter;

/// Rows per dashboard page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Use case for the review dashboard table
/// 审核列表（分页）
pub struct ListApplications {
    artist_repo: Arc<dyn ArtistRepositoryPort>,
    page_size: usize,
}

impl ListApplications {
    pub fn new(artist_repo: Arc<dyn ArtistRepositoryPort>) -> Self {
        Self {
            artist_repo,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Filter every application, regardless of status, and return one page.
    ///
    /// `page` is 1-based; values below 1 are treated as 1.
    pub async fn execute(&self, filter: &ReviewFilter, page: usize) -> Result<Page<Artist>> {
        let all = self
            .artist_repo
            .list_all()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to load applications: {}", e))?;

        let matching: Vec<Artist> = all.into_iter().filter(|a| filter.matches(a)).collect();
        debug!(matched = matching.len(), page, "dashboard filtered");

        Ok(paginate(matching, page, self.page_size))
    }
}
