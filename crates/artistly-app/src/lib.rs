//! Artistly application layer
//!
//! This crate contains the use cases and the onboarding wizard controller.
//! Storage and submission are reached only through the ports defined in
//! `artistly-core`.

pub mod usecases;

pub use usecases::onboarding::{SubmitOutcome, WizardController};
