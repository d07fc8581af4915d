//! Batch orchestration tests
//!
//! Covers the submission-order guarantee for concurrent analysis, per-file
//! failure isolation, and the ingest-to-profile path from in-memory CSV.

use roast_curve_analyzer::config::IngestConfig;
use roast_curve_analyzer::ingest::{read_log_from_reader, NamedLog};
use roast_curve_analyzer::services::{AnalysisService, ProfileStore};
use shared::analysis::EngineSettings;
use shared::models::RoastLogRow;
use shared::types::format_time;

fn service() -> AnalysisService {
    AnalysisService::new(EngineSettings::default())
}

/// A one-reading-per-second log of `len` rows ending above first crack
fn synthetic_log(file_name: &str, len: usize) -> NamedLog {
    let rows = (0..len)
        .map(|i| {
            let temp = 25.0 + (i as f64 / (len - 1) as f64) * 190.0;
            RoastLogRow::new(format_time(i as i64), temp)
        })
        .collect();
    NamedLog {
        file_name: file_name.to_string(),
        rows,
    }
}

/// Scenario D: a small second file finishes analysis long before a large
/// first file, but the report still lists them in submission order
#[tokio::test]
async fn test_out_of_order_completion_preserves_submission_order() {
    let logs = vec![
        synthetic_log("slow-big.csv", 200_000),
        synthetic_log("fast-small.csv", 4),
        synthetic_log("medium.csv", 50_000),
    ];

    let report = service().analyze_batch(logs).await;

    let names: Vec<&str> = report.profiles.iter().map(|p| p.file_name.as_str()).collect();
    assert_eq!(names, vec!["slow-big.csv", "fast-small.csv", "medium.csv"]);
    assert!(report.failures.is_empty());
}

/// A failing file is dropped and reported without aborting the batch
#[tokio::test]
async fn test_per_file_failures_are_isolated() {
    let logs = vec![
        synthetic_log("good-1.csv", 100),
        NamedLog {
            file_name: "empty.csv".to_string(),
            rows: vec![],
        },
        NamedLog {
            file_name: "bad-label.csv".to_string(),
            rows: vec![RoastLogRow::new("not-a-time", 210.0)],
        },
        synthetic_log("good-2.csv", 100),
    ];

    let report = service().analyze_batch(logs).await;

    let names: Vec<&str> = report.profiles.iter().map(|p| p.file_name.as_str()).collect();
    assert_eq!(names, vec!["good-1.csv", "good-2.csv"]);

    let failed: Vec<&str> = report.failures.iter().map(|f| f.file_name.as_str()).collect();
    assert_eq!(failed, vec!["empty.csv", "bad-label.csv"]);
}

#[tokio::test]
async fn test_ingest_to_profile_round_trip() {
    let csv = "time,bean_surface\n\
               0:00,25\n\
               2:00,160\n\
               5:00,204\n\
               8:00,205\n";
    let rows = read_log_from_reader(csv.as_bytes(), "upload.csv", &IngestConfig::default()).unwrap();
    let report = service()
        .analyze_batch(vec![NamedLog {
            file_name: "upload.csv".to_string(),
            rows,
        }])
        .await;

    assert_eq!(report.profiles.len(), 1);
    let profile = &report.profiles[0];
    assert_eq!(profile.total_time, "8:00");
    assert_eq!(profile.drying.as_ref().unwrap().percentage, "25.0");
}

/// Batch results appended to the store keep upload order, and removal by
/// file name mirrors the UI's delete action
#[tokio::test]
async fn test_store_lifecycle_after_batch() {
    let report = service()
        .analyze_batch(vec![
            synthetic_log("first.csv", 50),
            synthetic_log("second.csv", 50),
        ])
        .await;

    let store = ProfileStore::new();
    store.append(report.profiles);
    assert_eq!(store.len(), 2);

    let held = store.snapshot();
    assert!(store.remove("first.csv"));
    assert_eq!(store.len(), 1);
    assert_eq!(store.snapshot()[0].file_name, "second.csv");

    // The pre-removal snapshot is untouched
    assert_eq!(held.len(), 2);
}
