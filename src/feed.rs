//! CSV feed ingestion
//!
//! Turns the pipeline's CSV output into raw rows and normalized records.
//! Only whole-feed problems (I/O, malformed CSV) are errors; cell-level
//! problems are left to the normalizer's fallbacks.

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::engine::record::{RawRow, Record};
use crate::engine::RosterEngine;

/// Default feed file, relative to the working directory
pub const DEFAULT_FEED_PATH: &str = "ironmen_rankings.csv";

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("failed to read feed {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed feed: {0}")]
    Csv(#[from] csv::Error),
}

fn clean_header(header: &str) -> String {
    header.trim_start_matches('\u{feff}').trim().to_string()
}

/// Read every data row of a CSV feed
///
/// Headers are trimmed and lose a leading byte order mark. Short rows leave
/// their trailing columns absent; blank lines are skipped.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawRow>, FeedError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(clean_header).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: RawRow = headers
            .iter()
            .enumerate()
            .filter(|(_, header)| !header.is_empty())
            .map(|(i, header)| (header.clone(), record.get(i).map(str::to_string)))
            .collect();
        rows.push(row);
    }

    debug!("FEED: read {} rows with {} columns", rows.len(), headers.len());
    Ok(rows)
}

/// Read and normalize a feed, in feed order
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<Record>, FeedError> {
    Ok(read_rows(reader)?
        .iter()
        .enumerate()
        .map(|(position, row)| Record::from_row(row, position))
        .collect())
}

/// Build an engine from a feed
pub fn load<R: Read>(reader: R) -> Result<RosterEngine, FeedError> {
    Ok(RosterEngine::new(parse_records(reader)?))
}

/// Build an engine from a feed file
pub fn load_path(path: &Path) -> Result<RosterEngine, FeedError> {
    let file = std::fs::File::open(path).map_err(|source| FeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MetricField;
    use crate::fixtures::sample_feed_csv;

    #[test]
    fn test_headers_are_cleaned() {
        let csv_data = "\u{feff}name_full , team ,GP\nAl,BOS,10\n";

        let rows = read_rows(csv_data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("name_full"), Some(&Some("Al".to_string())));
        assert_eq!(rows[0].get("team"), Some(&Some("BOS".to_string())));
    }

    #[test]
    fn test_short_rows_leave_cells_absent() {
        let csv_data = "name_full,team,ADP\nAl,BOS\nBo,NYK,3.5,extra\n";

        let rows = read_rows(csv_data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("ADP"), Some(&None));
        assert_eq!(rows[1].get("ADP"), Some(&Some("3.5".to_string())));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let csv_data = "name_full,GP\n\nAl,10\n\nBo,20\n";

        let rows = read_rows(csv_data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_empty_input_has_no_rows() {
        assert!(read_rows("".as_bytes()).unwrap().is_empty());
        assert!(read_rows("name_full,GP\n".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let bytes: &[u8] = b"name_full,GP\n\xff\xfe,10\n";

        let result = read_rows(bytes);

        assert!(matches!(result, Err(FeedError::Csv(_))));
    }

    #[test]
    fn test_load_sample_feed() {
        let engine = load(sample_feed_csv().as_bytes()).unwrap();

        assert_eq!(engine.records().len(), 8);
        let top = &engine.snapshot().rows()[0];
        assert_eq!(top.rank, 1);
        assert_eq!(top.record.name, "Nikola Jokic");
        assert_eq!(top.record.metric(MetricField::Adp), Some(1.4));
    }

    #[test]
    fn test_load_path_missing_file() {
        let result = load_path(Path::new("/nonexistent/roster/feed.csv"));

        match result {
            Err(FeedError::Io { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/roster/feed.csv"))
            }
            other => panic!("expected Io error, got {:?}", other.map(|e| e.records().len())),
        }
    }
}
