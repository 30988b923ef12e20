//! The hand-curated plant and utility mapping sheets, exported to CSV.

use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::SourceError;

/// CSV export of the `plants_output` sheet.
pub const PLANT_MAP_FILE: &str = "plants_output.csv";
/// CSV export of the `utilities_output` sheet.
pub const UTILITY_MAP_FILE: &str = "utilities_output.csv";

/// One row of `plants_output`: a PUDL plant and the FERC 1 / EIA 923 plant it
/// stands for. Either side may be blank.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlantMapRow {
    pub plant_id: i64,
    pub plant_name: Option<String>,
    pub respondent_id_ferc1: Option<i64>,
    pub respondent_name_ferc1: Option<String>,
    pub plant_name_ferc1: Option<String>,
    pub plant_id_eia923: Option<i64>,
    pub plant_name_eia923: Option<String>,
    pub operator_name_eia923: Option<String>,
    pub operator_id_eia923: Option<i64>,
}

/// One row of `utilities_output`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UtilityMapRow {
    pub utility_id: i64,
    pub utility_name: Option<String>,
    pub respondent_id_ferc1: Option<i64>,
    pub respondent_name_ferc1: Option<String>,
    pub operator_id_eia923: Option<i64>,
    pub operator_name_eia923: Option<String>,
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, SourceError> {
    let csv_err = |source| SourceError::Csv {
        path: path.to_path_buf(),
        source,
    };
    // the sheets drop trailing empty cells on some rows; missing cells read as blank
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_err)?;
    let rows = rdr
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(csv_err)?;
    debug!(path = %path.display(), rows = rows.len(), "read mapping sheet");
    Ok(rows)
}

pub fn read_plant_map(path: &Path) -> Result<Vec<PlantMapRow>, SourceError> {
    read_rows(path)
}

pub fn read_utility_map(path: &Path) -> Result<Vec<UtilityMapRow>, SourceError> {
    read_rows(path)
}
