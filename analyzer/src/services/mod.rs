//! Batch orchestration services for the roast curve analyzer

pub mod analysis;
pub mod collection;

pub use analysis::AnalysisService;
pub use collection::ProfileStore;
