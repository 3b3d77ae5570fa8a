//! Administrative review of artist applications.

pub mod counts;
pub mod decision;
pub mod filter;

pub use counts::StatusCounts;
pub use decision::{decide, ReviewDecision, ReviewError};
pub use filter::ReviewFilter;
