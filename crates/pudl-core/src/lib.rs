//! Tabular data model, destination schema and cleaning rules for PUDL.

pub mod clean;
pub mod constants;
pub mod frame;
pub mod schema;
pub mod value;

pub use frame::{concat_frames, empty_table, text_frame, Conversion, FrameError, FrameExt, Row};
pub use polars::prelude::DataFrame;
pub use schema::{ColumnDef, ColumnType, TableDef};
pub use value::Value;

pub const CRATE_NAME: &str = "pudl-core";

/// Identifies a plant or utility in a source dataset: FERC 1 respondents and EIA
/// 923 operators/plants each have their own id space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    Ferc1,
    Eia923,
}

impl Dataset {
    pub fn as_str(self) -> &'static str {
        match self {
            Dataset::Ferc1 => "ferc1",
            Dataset::Eia923 => "eia923",
        }
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
