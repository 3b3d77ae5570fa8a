mod in_memory_repository;
pub mod seed;

pub use in_memory_repository::InMemoryArtistRepository;
pub use seed::seed_artists;
