//! CSV ingestion adapter
//!
//! Turns an uploaded CSV log into the row sequence the engine consumes.
//! Column validation happens here so files missing the required columns
//! never reach the engine. Temperature cells that are empty or unreadable
//! become `None`; the RoR pairing rule skips them downstream.

use std::io::Read;
use std::path::Path;

use shared::models::RoastLogRow;
use shared::validation::find_column;

use crate::config::IngestConfig;
use crate::error::{AppError, AppResult};

/// A named, already-tabular roast log ready for analysis
#[derive(Debug, Clone)]
pub struct NamedLog {
    pub file_name: String,
    pub rows: Vec<RoastLogRow>,
}

/// Read a roast log from a CSV file on disk
pub fn read_log(path: &Path, settings: &IngestConfig) -> AppResult<NamedLog> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let file = std::fs::File::open(path)?;
    let rows = read_log_from_reader(file, &file_name, settings)?;
    Ok(NamedLog { file_name, rows })
}

/// Read a roast log from any CSV source
///
/// The required columns are resolved case-insensitively after trimming.
pub fn read_log_from_reader<R: Read>(
    reader: R,
    file_name: &str,
    settings: &IngestConfig,
) -> AppResult<Vec<RoastLogRow>> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let time_index = find_column(&headers, &settings.time_column);
    let temp_index = find_column(&headers, &settings.temp_column);
    let (Some(time_index), Some(temp_index)) = (time_index, temp_index) else {
        return Err(AppError::MissingColumns {
            file_name: file_name.to_string(),
            required: vec![settings.time_column.clone(), settings.temp_column.clone()],
        });
    };

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let time_label = record.get(time_index).unwrap_or_default().trim().to_string();
        let bean_temp_c = record
            .get(temp_index)
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .and_then(|cell| cell.parse::<f64>().ok());
        rows.push(RoastLogRow {
            time_label,
            bean_temp_c,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> IngestConfig {
        IngestConfig::default()
    }

    #[test]
    fn test_reads_rows_with_case_insensitive_headers() {
        let csv = "Time, BEAN_SURFACE \n0:00,25\n2:00,160.5\n";
        let rows = read_log_from_reader(csv.as_bytes(), "log.csv", &settings()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].time_label, "0:00");
        assert_eq!(rows[0].bean_temp_c, Some(25.0));
        assert_eq!(rows[1].bean_temp_c, Some(160.5));
    }

    #[test]
    fn test_missing_columns_rejected() {
        let csv = "time,drum_temp\n0:00,25\n";
        let err = read_log_from_reader(csv.as_bytes(), "log.csv", &settings()).unwrap_err();

        match err {
            AppError::MissingColumns { file_name, required } => {
                assert_eq!(file_name, "log.csv");
                assert_eq!(required, vec!["time".to_string(), "bean_surface".to_string()]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn test_unreadable_temperature_becomes_none() {
        let csv = "time,bean_surface\n0:00,25\n0:01,\n0:02,n/a\n0:03,26\n";
        let rows = read_log_from_reader(csv.as_bytes(), "log.csv", &settings()).unwrap();

        assert_eq!(rows[1].bean_temp_c, None);
        assert_eq!(rows[2].bean_temp_c, None);
        assert_eq!(rows[3].bean_temp_c, Some(26.0));
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let csv = "gas,time,bean_surface,notes\n50,0:00,25,charge\n";
        let rows = read_log_from_reader(csv.as_bytes(), "log.csv", &settings()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].time_label, "0:00");
        assert_eq!(rows[0].bean_temp_c, Some(25.0));
    }

    #[test]
    fn test_custom_column_names() {
        let custom = IngestConfig {
            time_column: "elapsed".to_string(),
            temp_column: "bt".to_string(),
        };
        let csv = "elapsed,bt\n0:00,25\n";
        let rows = read_log_from_reader(csv.as_bytes(), "log.csv", &custom).unwrap();

        assert_eq!(rows[0].bean_temp_c, Some(25.0));
    }
}
