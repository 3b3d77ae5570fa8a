//! Business logic use cases
//! 业务用例
//!
//! - onboarding: the multi-step application wizard
//! - catalog: public browsing of approved artists
//! - review: administrative dashboard over all applications

pub mod catalog;
pub mod onboarding;
pub mod review;

#[cfg(test)]
mod test_support;

pub use catalog::{BrowseArtists, CatalogResult};
pub use review::{GetApplicationDetail, GetStatusCounts, ListApplications, ReviewApplication};
