//! Parquet copies of every table a run loaded, with a checksummed manifest
//! that groups the tables by ingest stage.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow_array::{ArrayRef, BooleanArray, Float64Array, Int64Array, RecordBatch, StringArray};
use arrow_schema::{DataType, Field as ArrowField, Schema};
use parquet::arrow::ArrowWriter;
use pudl_core::{ColumnType, DataFrame, FrameExt, TableDef};
use pudl_storage::sha256_hex;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use crate::{LoadedTable, Stage};

pub const MANIFEST_SCHEMA_VERSION: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParquetManifest {
    pub schema_version: u32,
    pub stages: Vec<StageRows>,
    pub files: Vec<ParquetManifestFile>,
}

/// Tables and rows one stage contributed to the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageRows {
    pub stage: Stage,
    pub tables: usize,
    pub rows: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParquetManifestFile {
    pub table: String,
    pub stage: Stage,
    pub path: String,
    pub rows: u64,
    /// Tables the snapshot's foreign keys point into.
    pub references: Vec<String>,
    pub sha256: String,
    pub bytes: u64,
}

fn arrow_type(ty: ColumnType) -> DataType {
    match ty {
        ColumnType::Integer => DataType::Int64,
        ColumnType::Float | ColumnType::Numeric => DataType::Float64,
        ColumnType::Boolean => DataType::Boolean,
        ColumnType::Text => DataType::Utf8,
    }
}

/// Builds a record batch with one nullable arrow column per table column,
/// from the frame conformed to `table`.
pub fn record_batch(table: &TableDef, frame: &DataFrame) -> Result<RecordBatch> {
    let frame = frame
        .conform(table)
        .with_context(|| format!("conforming {}", table.name))?;
    let schema = Arc::new(Schema::new(
        table
            .columns
            .iter()
            .map(|c| ArrowField::new(c.name, arrow_type(c.ty), true))
            .collect::<Vec<_>>(),
    ));
    let mut columns: Vec<ArrayRef> = Vec::with_capacity(table.columns.len());
    for def in table.columns {
        let series = frame.column(def.name)?.as_materialized_series();
        let array: ArrayRef = match def.ty {
            ColumnType::Integer => Arc::new(Int64Array::from(
                series.i64()?.into_iter().collect::<Vec<_>>(),
            )),
            ColumnType::Float | ColumnType::Numeric => Arc::new(Float64Array::from(
                series.f64()?.into_iter().collect::<Vec<_>>(),
            )),
            ColumnType::Boolean => Arc::new(BooleanArray::from(
                series.bool()?.into_iter().collect::<Vec<_>>(),
            )),
            ColumnType::Text => Arc::new(StringArray::from(
                series.str()?.into_iter().collect::<Vec<_>>(),
            )),
        };
        columns.push(array);
    }
    RecordBatch::try_new(schema, columns)
        .with_context(|| format!("building {} record batch", table.name))
}

fn write_parquet(path: &Path, batch: RecordBatch) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)
        .with_context(|| format!("opening parquet writer {}", path.display()))?;
    writer
        .write(&batch)
        .with_context(|| format!("writing record batch {}", path.display()))?;
    writer
        .close()
        .with_context(|| format!("closing parquet writer {}", path.display()))?;
    Ok(())
}

fn manifest_entry(
    stage: Stage,
    table: &TableDef,
    rows: u64,
    reports_dir: &Path,
    path: &Path,
) -> Result<ParquetManifestFile> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let rel = path
        .strip_prefix(reports_dir)
        .unwrap_or(path)
        .display()
        .to_string();
    Ok(ParquetManifestFile {
        table: table.name.to_string(),
        stage,
        path: rel,
        rows,
        references: table
            .referenced_tables()
            .into_iter()
            .map(str::to_string)
            .collect(),
        sha256: sha256_hex(&bytes),
        bytes: bytes.len() as u64,
    })
}

/// Per-stage totals in stage order. Stages that wrote nothing are left out.
pub fn stage_rows(files: &[ParquetManifestFile]) -> Vec<StageRows> {
    Stage::ALL
        .iter()
        .filter_map(|stage| {
            let of_stage: Vec<_> = files.iter().filter(|f| f.stage == *stage).collect();
            (!of_stage.is_empty()).then(|| StageRows {
                stage: *stage,
                tables: of_stage.len(),
                rows: of_stage.iter().map(|f| f.rows).sum(),
            })
        })
        .collect()
}

/// Writes `<reports_dir>/snapshots/<table>.parquet` for every loaded table
/// plus `manifest.json`, and returns the manifest path.
pub async fn export_parquet_snapshots(
    reports_dir: &Path,
    tables: &[LoadedTable],
) -> Result<PathBuf> {
    let snapshot_dir = reports_dir.join("snapshots");
    fs::create_dir_all(&snapshot_dir)
        .await
        .with_context(|| format!("creating {}", snapshot_dir.display()))?;

    let mut files = Vec::with_capacity(tables.len());
    for loaded in tables {
        let table = loaded.table;
        let path = snapshot_dir.join(format!("{}.parquet", table.name));
        let batch = record_batch(table, &loaded.frame)?;
        let rows = batch.num_rows() as u64;
        write_parquet(&path, batch)?;
        debug!(table = table.name, stage = loaded.stage.as_str(), rows, "wrote parquet snapshot");
        files.push(manifest_entry(loaded.stage, table, rows, reports_dir, &path)?);
    }

    let manifest = ParquetManifest {
        schema_version: MANIFEST_SCHEMA_VERSION,
        stages: stage_rows(&files),
        files,
    };
    let manifest_path = snapshot_dir.join("manifest.json");
    let bytes = serde_json::to_vec_pretty(&manifest).context("serializing parquet manifest")?;
    fs::write(&manifest_path, bytes)
        .await
        .with_context(|| format!("writing {}", manifest_path.display()))?;
    Ok(manifest_path)
}
