//! Artistly command-line host.
//!
//! Wires the in-memory directory into the application use cases and exposes
//! them as subcommands that print JSON.

pub mod adapters;
pub mod bootstrap;
pub mod cli;
