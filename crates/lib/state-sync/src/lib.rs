//! Handoff of check results into the single consumer that owns the
//! account registry and drives the display surface.

mod channel;
mod surface;
mod synchronizer;

pub use channel::*;
pub use surface::*;
pub use synchronizer::*;
