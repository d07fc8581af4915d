//! Domain models for the roast curve analyzer

mod log;
mod phase;
mod profile;
mod threshold;

pub use log::*;
pub use phase::*;
pub use profile::*;
pub use threshold::*;
