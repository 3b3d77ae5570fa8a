mod browse_artists;

pub use browse_artists::{BrowseArtists, CatalogResult};
