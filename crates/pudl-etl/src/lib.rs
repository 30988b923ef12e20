//! Builds the PUDL database: static reference tables, the FERC/EIA glue tables
//! and the per-table FERC 1 and EIA 923 transforms, run in sequence.

use anyhow::{Context, Result};
use pudl_core::{DataFrame, FrameExt, TableDef};
use pudl_storage::TableSink;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, Instrument};

pub mod audit;
pub mod config;
pub mod eia923;
pub mod ferc1;
pub mod glue;
pub mod pipeline;
pub mod report;
pub mod snapshot;
pub mod static_tables;

pub use audit::{AuditConfig, AuditCounts, AuditReport, MatchStatus, PlantAudit, UnmappedPlant};
pub use config::{ConfigError, EtlConfig, Ferc1Location, Settings};
pub use glue::{GlueTables, MappingError};
pub use pipeline::{audit_from_env, init_db_from_env, IngestPipeline, IngestSummary, RunOptions};

pub const CRATE_NAME: &str = "pudl-etl";

/// The part of an `init_db` run a table is loaded in. Stages run in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Static,
    Glue,
    Ferc1,
    Eia923,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Static, Stage::Glue, Stage::Ferc1, Stage::Eia923];

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Static => "static",
            Stage::Glue => "glue",
            Stage::Ferc1 => "ferc1",
            Stage::Eia923 => "eia923",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Stage::Static => "Static reference tables",
            Stage::Glue => "FERC/EIA glue",
            Stage::Ferc1 => "FERC Form 1",
            Stage::Eia923 => "EIA Form 923",
        }
    }
}

/// Rows written to one destination table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableLoad {
    pub stage: Stage,
    pub table: String,
    pub rows: u64,
}

/// A frame as it was handed to the sink.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub stage: Stage,
    pub table: &'static TableDef,
    pub frame: DataFrame,
}

/// Sends frames to a sink one table at a time and records what was written.
/// With `retain` set, the loaded frames are kept for the parquet snapshot.
pub struct TableLoader<'a> {
    sink: &'a dyn TableSink,
    retain: bool,
    loads: Vec<TableLoad>,
    loaded: Vec<LoadedTable>,
}

impl<'a> TableLoader<'a> {
    pub fn new(sink: &'a dyn TableSink, retain: bool) -> Self {
        Self {
            sink,
            retain,
            loads: Vec::new(),
            loaded: Vec::new(),
        }
    }

    pub async fn load(
        &mut self,
        stage: Stage,
        table: &'static TableDef,
        frame: &DataFrame,
    ) -> Result<TableLoad> {
        let span = info_span!("ingest_table", stage = stage.as_str(), table = table.name);
        let sink = self.sink;
        let load = async {
            let extra = frame.columns_outside(table);
            if !extra.is_empty() {
                debug!(columns = ?extra, "dropping columns the table does not define");
            }
            let rows = sink
                .insert(table, frame)
                .await
                .with_context(|| format!("loading {}", table.name))?;
            info!(rows, "loaded");
            Ok::<_, anyhow::Error>(TableLoad {
                stage,
                table: table.name.to_string(),
                rows,
            })
        }
        .instrument(span)
        .await?;
        self.loads.push(load.clone());
        if self.retain {
            self.loaded.push(LoadedTable {
                stage,
                table,
                frame: frame.clone(),
            });
        }
        Ok(load)
    }

    pub fn loads(&self) -> &[TableLoad] {
        &self.loads
    }

    pub fn into_parts(self) -> (Vec<TableLoad>, Vec<LoadedTable>) {
        (self.loads, self.loaded)
    }
}
