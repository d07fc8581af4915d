//! Roast Curve Analyzer - batch orchestration library
//!
//! Wraps the shared analysis engine with CSV ingestion, concurrent
//! per-file fan-out, and the ordered profile collection. The binary in
//! `main.rs` is a thin CLI over this crate.

pub mod config;
pub mod error;
pub mod ingest;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
