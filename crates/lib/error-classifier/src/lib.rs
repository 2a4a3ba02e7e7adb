//! Classification of mail check errors into transient and unexpected ones.

mod cause;
mod check_error;
mod classifier;

pub use cause::*;
pub use check_error::*;
pub use classifier::*;
