//! # artistly-core
//!
//! Core domain models and business logic for the Artistly booking directory.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod catalog;
pub mod config;
pub mod ids;
pub mod onboarding;
pub mod ports;
pub mod review;

// Re-export commonly used types at the crate root
pub use catalog::{Artist, ArtistStatus, CatalogFilter, Page};
pub use config::AppConfig;
pub use ids::{ApplicationId, ArtistId};
pub use onboarding::{FormData, FormField, WizardSnapshot, WizardState, WizardStep};
pub use review::{ReviewDecision, ReviewFilter, StatusCounts};
