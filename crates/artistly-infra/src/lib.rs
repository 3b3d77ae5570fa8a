pub mod catalog;
pub mod submission;

pub use catalog::InMemoryArtistRepository;
pub use submission::RepositorySubmissionSink;
