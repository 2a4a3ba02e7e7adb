//! Periodic and on-demand unread checks.

mod account;
mod poller;

pub use account::*;
pub use poller::*;
