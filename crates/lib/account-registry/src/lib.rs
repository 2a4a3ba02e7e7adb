//! Authoritative per-account check state.

mod check_result;
mod registry;
mod state;

pub use check_result::*;
pub use registry::*;
pub use state::*;

/// The timestamp type used across the state.
pub type Timestamp = chrono::DateTime<chrono::Local>;
