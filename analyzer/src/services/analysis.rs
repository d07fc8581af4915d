//! Batch analysis service
//!
//! Fans the per-file pipeline out over tokio blocking tasks. Results are
//! collected in submission order, never completion order: downstream
//! consumers display profiles in upload order and key them by file name.
//! A failed file is logged and reported, and never aborts the batch.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::analysis::{analyze_log, EngineSettings};
use shared::models::RoastProfile;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::config::IngestConfig;
use crate::error::AppResult;
use crate::ingest::{read_log, NamedLog};

/// Analysis service running the engine over batches of logs
#[derive(Debug, Clone)]
pub struct AnalysisService {
    settings: EngineSettings,
}

/// Outcome of one batch run
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub batch_id: Uuid,
    pub completed_at: DateTime<Utc>,
    /// Profiles of the accepted files, in submission order
    pub profiles: Vec<RoastProfile>,
    /// Files dropped from the result set, with the reason
    pub failures: Vec<BatchFailure>,
}

/// One dropped file
#[derive(Debug, Clone, Serialize)]
pub struct BatchFailure {
    pub file_name: String,
    pub error: String,
}

impl AnalysisService {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    /// Ingest and analyze a batch of CSV files
    pub async fn analyze_files(&self, paths: Vec<PathBuf>, ingest: IngestConfig) -> BatchReport {
        let settings = self.settings;
        let tasks = paths
            .into_iter()
            .map(|path| {
                let display_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                let ingest = ingest.clone();
                let handle = tokio::task::spawn_blocking(move || -> AppResult<RoastProfile> {
                    let log = read_log(&path, &ingest)?;
                    Ok(analyze_log(&log.rows, &log.file_name, &settings)?)
                });
                (display_name, handle)
            })
            .collect();

        self.collect(tasks).await
    }

    /// Analyze a batch of already-ingested logs
    pub async fn analyze_batch(&self, logs: Vec<NamedLog>) -> BatchReport {
        let settings = self.settings;
        let tasks = logs
            .into_iter()
            .map(|log| {
                let file_name = log.file_name.clone();
                let handle = tokio::task::spawn_blocking(move || -> AppResult<RoastProfile> {
                    Ok(analyze_log(&log.rows, &log.file_name, &settings)?)
                });
                (file_name, handle)
            })
            .collect();

        self.collect(tasks).await
    }

    /// Await the fanned-out tasks in submission order
    async fn collect(
        &self,
        tasks: Vec<(String, JoinHandle<AppResult<RoastProfile>>)>,
    ) -> BatchReport {
        let batch_id = Uuid::new_v4();
        let mut profiles = Vec::new();
        let mut failures = Vec::new();

        for (file_name, handle) in tasks {
            match handle.await {
                Ok(Ok(profile)) => profiles.push(profile),
                Ok(Err(err)) => {
                    tracing::warn!(%batch_id, file = %file_name, "Dropping file: {}", err);
                    failures.push(BatchFailure {
                        file_name,
                        error: err.to_string(),
                    });
                }
                Err(join_err) => {
                    tracing::error!(%batch_id, file = %file_name, "Analysis task failed: {}", join_err);
                    failures.push(BatchFailure {
                        file_name,
                        error: join_err.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            %batch_id,
            accepted = profiles.len(),
            dropped = failures.len(),
            "Batch analysis complete"
        );

        BatchReport {
            batch_id,
            completed_at: Utc::now(),
            profiles,
            failures,
        }
    }
}
