//! Raw inputs for PUDL: the FERC Form 1 extract, EIA Form 923 pages and the
//! hand-maintained plant/utility mapping sheets.

use std::path::{Path, PathBuf};

use pudl_core::{text_frame, DataFrame, FrameError};
use thiserror::Error;

pub mod eia923;
pub mod ferc1;
pub mod mapping;

pub use eia923::{normalize_header, read_page, yearly_to_monthly};
pub use ferc1::{CsvTableSource, PgTableSource, TableSource};
pub use mapping::{
    read_plant_map, read_utility_map, PlantMapRow, UtilityMapRow, PLANT_MAP_FILE, UTILITY_MAP_FILE,
};

pub const CRATE_NAME: &str = "pudl-sources";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Frame(#[from] FrameError),
    #[error("source table {0} does not exist")]
    UnknownTable(String),
    #[error("EIA 923 page {page} for {year} not found at {path}")]
    MissingPage {
        page: String,
        year: i64,
        path: PathBuf,
    },
    #[error("{path}: line {line} has {got} fields, header has {expected}")]
    RaggedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        got: usize,
    },
}

/// Reads a headed CSV file into a frame of text columns. Empty cells are null;
/// short rows are padded with nulls.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame, SourceError> {
    let csv_err = |source| SourceError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::None)
        .from_path(path)
        .map_err(csv_err)?;
    let headers: Vec<String> = rdr
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();
    let width = headers.len();
    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(csv_err)?;
        if record.len() > width {
            return Err(SourceError::RaggedRow {
                path: path.to_path_buf(),
                line: record.position().map_or(0, |p| p.line()),
                expected: width,
                got: record.len(),
            });
        }
        let mut row: Vec<Option<String>> = record
            .iter()
            .map(|cell| (!cell.trim().is_empty()).then(|| cell.to_string()))
            .collect();
        row.resize(width, None);
        rows.push(row);
    }
    Ok(text_frame(&headers, rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pudl_core::{FrameExt, Value};
    use std::io::Write;

    #[test]
    fn csv_cells_become_text_or_null() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "\u{feff}a,b,c\n1,,x\n2,3\n").unwrap();
        let f = read_csv_frame(file.path()).unwrap();
        assert_eq!(f.names(), ["a", "b", "c"]);
        let rows = f.rows().unwrap();
        assert_eq!(rows[0].values(), [Value::text("1"), Value::Null, Value::text("x")]);
        assert_eq!(rows[1].values(), [Value::text("2"), Value::text("3"), Value::Null]);
    }

    #[test]
    fn overlong_rows_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "a,b\n1,2,3\n").unwrap();
        let err = read_csv_frame(file.path()).unwrap_err();
        assert!(matches!(err, SourceError::RaggedRow { expected: 2, got: 3, .. }));
    }
}
