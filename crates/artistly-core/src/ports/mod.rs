//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. The core stays independent of how
//! artists are stored or where applications are sent.

pub mod artist_repository;
pub mod errors;
pub mod submission;
pub mod wizard_event;

pub use artist_repository::ArtistRepositoryPort;
pub use errors::ArtistRepositoryError;
pub use submission::SubmissionSinkPort;
pub use wizard_event::WizardEventPort;
