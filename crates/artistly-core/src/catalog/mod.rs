//! Artist directory: records, catalog filtering and pagination.

pub mod artist;
pub mod filter;
pub mod page;

pub use artist::{Artist, ArtistStatus};
pub use filter::CatalogFilter;
pub use page::{paginate, Page};
