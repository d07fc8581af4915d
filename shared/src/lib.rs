//! Shared types and the roast-curve analysis engine
//!
//! This crate contains the data model and the phase-segmentation /
//! rate-of-rise engine shared between the batch analyzer binary and the
//! WASM frontend bridge. Everything in here is pure and synchronous;
//! ingestion and rendering live in the other workspace members.

pub mod analysis;
pub mod error;
pub mod models;
pub mod types;
pub mod validation;

pub use analysis::*;
pub use error::*;
pub use models::*;
pub use types::*;
pub use validation::*;
