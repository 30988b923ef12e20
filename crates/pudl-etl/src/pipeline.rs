//! The `init_db` run: reset the schema, then load static, glue, FERC 1 and
//! EIA 923 tables in that order.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use pudl_core::constants::EIA923_PUDL_TABLES;
use pudl_core::schema::ALL_TABLES;
use pudl_sources::{CsvTableSource, PgTableSource, TableSource};
use pudl_storage::{MemorySink, PgSink, TableSink};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::audit::{AuditConfig, AuditCounts, AuditReport, PlantAudit};
use crate::config::{EtlConfig, Ferc1Location, Settings};
use crate::eia923::{ingest_eia923_table, Eia923Pages};
use crate::ferc1::{
    extract_ferc1_table, ingest_ferc1_table, transform_for, Ferc1Transform, FERC1_TRANSFORMS,
};
use crate::glue::{build_glue_tables, ingest_glue_tables, read_mapping, GlueTables};
use crate::report::{reports_dir, write_reports};
use crate::snapshot::export_parquet_snapshots;
use crate::static_tables::ingest_static_tables;
use crate::{TableLoad, TableLoader};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Recorded in the summary; the caller picks the sink.
    pub dry_run: bool,
    pub audit: bool,
    pub snapshot: bool,
    pub write_reports: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            audit: true,
            snapshot: false,
            write_reports: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IngestSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub dry_run: bool,
    pub tables: Vec<TableLoad>,
    pub audit: Option<AuditCounts>,
    pub reports_dir: Option<String>,
    pub parquet_manifest: Option<String>,
}

impl IngestSummary {
    pub fn total_rows(&self) -> u64 {
        self.tables.iter().map(|t| t.rows).sum()
    }

    pub fn rows_for(&self, table: &str) -> Option<u64> {
        self.tables.iter().find(|t| t.table == table).map(|t| t.rows)
    }
}

pub struct IngestPipeline {
    config: EtlConfig,
    settings: Settings,
    sink: Arc<dyn TableSink>,
    source: Box<dyn TableSource>,
    options: RunOptions,
    audit_config: AuditConfig,
}

impl IngestPipeline {
    pub fn new(
        config: EtlConfig,
        settings: Settings,
        sink: Arc<dyn TableSink>,
        source: Box<dyn TableSource>,
    ) -> Self {
        Self {
            config,
            settings,
            sink,
            source,
            options: RunOptions::default(),
            audit_config: AuditConfig::default(),
        }
    }

    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_audit_config(mut self, audit_config: AuditConfig) -> Self {
        self.audit_config = audit_config;
        self
    }

    /// Glue tables built from the mapping sheets without loading them.
    fn glue_tables(&self) -> Result<GlueTables> {
        let (plant_map, utility_map) = read_mapping(&self.config.mapping_dir)?;
        Ok(build_glue_tables(&plant_map, &utility_map)?)
    }

    /// Requested FERC 1 tables that have a transform, in load order. Anything
    /// else got past validation in debug mode and is skipped.
    fn ferc1_plan(&self) -> Vec<&'static Ferc1Transform> {
        for table in &self.settings.ferc1_tables {
            if transform_for(table).is_none() {
                warn!(table = table.as_str(), "no FERC 1 transform; skipping");
            }
        }
        FERC1_TRANSFORMS
            .iter()
            .filter(|t| self.settings.wants_ferc1(t.source))
            .collect()
    }

    /// Known EIA 923 tables in load order, then any debug-mode extras.
    fn eia923_plan(&self) -> Vec<&str> {
        let mut plan: Vec<&str> = EIA923_PUDL_TABLES
            .iter()
            .copied()
            .filter(|t| self.settings.wants_eia923(t))
            .collect();
        plan.extend(
            self.settings
                .eia923_tables
                .iter()
                .map(String::as_str)
                .filter(|t| !EIA923_PUDL_TABLES.contains(t)),
        );
        plan
    }

    pub async fn init_db(&self) -> Result<IngestSummary> {
        let started_at = Utc::now();
        let run_id = Uuid::new_v4();
        self.settings.validate().context("checking settings")?;
        info!(%run_id, dry_run = self.options.dry_run, "starting PUDL ingest");

        self.sink
            .reset_schema(ALL_TABLES)
            .await
            .context("resetting the PUDL schema")?;
        let mut loader = TableLoader::new(self.sink.as_ref(), self.options.snapshot);

        ingest_static_tables(&mut loader)
            .await
            .context("loading static tables")?;
        let glue = ingest_glue_tables(&mut loader, &self.config.mapping_dir).await?;

        let mut audit = PlantAudit::new(self.audit_config);
        for transform in self.ferc1_plan() {
            let frame = ingest_ferc1_table(
                self.source.as_ref(),
                &mut loader,
                transform,
                &self.settings.ferc1_years,
            )
            .await?;
            if self.options.audit {
                audit.observe(transform.target.name, &frame)?;
            }
        }

        let plan = self.eia923_plan();
        if !plan.is_empty() {
            let requested: Vec<String> = plan.iter().map(|t| t.to_string()).collect();
            let pages = Eia923Pages::read(
                &self.config.eia923_dir,
                &requested,
                &self.settings.eia923_years,
            )?;
            for table in plan {
                ingest_eia923_table(&mut loader, table, &pages).await?;
            }
        }

        let audit = if self.options.audit {
            Some(audit.finish(&glue.plants_ferc1)?)
        } else {
            None
        };
        if let Some(report) = &audit {
            let counts = report.counts();
            info!(
                checked = counts.checked,
                likely_matches = counts.likely_matches,
                needs_review = counts.needs_review,
                unmatched = counts.unmatched,
                "plant mapping audit"
            );
        }

        let (loads, loaded) = loader.into_parts();
        let finished_at = Utc::now();
        let mut summary = IngestSummary {
            run_id,
            started_at,
            finished_at,
            dry_run: self.options.dry_run,
            tables: loads,
            audit: audit.as_ref().map(AuditReport::counts),
            reports_dir: None,
            parquet_manifest: None,
        };

        if self.options.write_reports || self.options.snapshot {
            let dir = reports_dir(&self.config.workspace_root, run_id);
            if self.options.snapshot {
                let manifest = export_parquet_snapshots(&dir, &loaded).await?;
                summary.parquet_manifest = Some(manifest.display().to_string());
            }
            if self.options.write_reports {
                summary.reports_dir = Some(dir.display().to_string());
                write_reports(&dir, &summary, audit.as_ref()).await?;
            }
        }

        info!(
            %run_id,
            tables = summary.tables.len(),
            rows = summary.total_rows(),
            "PUDL ingest finished"
        );
        Ok(summary)
    }

    /// Runs only the reconciliation audit: reads the FERC 1 tables and the
    /// mapping sheets, writes nothing.
    pub async fn audit(&self) -> Result<AuditReport> {
        self.settings.validate().context("checking settings")?;
        let glue = self.glue_tables()?;
        let mut audit = PlantAudit::new(self.audit_config);
        for transform in self.ferc1_plan() {
            let frame =
                extract_ferc1_table(self.source.as_ref(), transform, &self.settings.ferc1_years)
                    .await?;
            audit.observe(transform.target.name, &frame)?;
        }
        Ok(audit.finish(&glue.plants_ferc1)?)
    }
}

pub async fn open_ferc1_source(location: &Ferc1Location) -> Result<Box<dyn TableSource>> {
    Ok(match location {
        Ferc1Location::Postgres(url) => Box::new(
            PgTableSource::connect(url)
                .await
                .context("connecting to the FERC 1 database")?,
        ),
        Ferc1Location::CsvDir(dir) => Box::new(CsvTableSource::new(dir.clone())),
    })
}

fn settings_from(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => Settings::from_path(path),
        None => Ok(Settings::default()),
    }
}

/// `init_db` with configuration from the environment. A dry run loads into
/// memory instead of `DATABASE_URL`.
pub async fn init_db_from_env(
    settings_path: Option<&Path>,
    dry_run: bool,
    snapshot: bool,
) -> Result<IngestSummary> {
    let config = EtlConfig::from_env();
    let settings = settings_from(settings_path)?;
    let source = open_ferc1_source(&config.ferc1).await?;
    let sink: Arc<dyn TableSink> = if dry_run {
        Arc::new(MemorySink::new())
    } else {
        Arc::new(
            PgSink::connect(&config.database_url)
                .await
                .context("connecting to the PUDL database")?,
        )
    };
    IngestPipeline::new(config, settings, sink, source)
        .with_options(RunOptions {
            dry_run,
            snapshot,
            ..RunOptions::default()
        })
        .init_db()
        .await
}

pub async fn audit_from_env(settings_path: Option<&Path>) -> Result<AuditReport> {
    let config = EtlConfig::from_env();
    let settings = settings_from(settings_path)?;
    let source = open_ferc1_source(&config.ferc1).await?;
    IngestPipeline::new(config, settings, Arc::new(MemorySink::new()), source)
        .audit()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn pipeline(settings: Settings) -> IngestPipeline {
        let config = EtlConfig::from_vars(|_| None);
        IngestPipeline::new(
            config,
            settings,
            Arc::new(MemorySink::new()),
            Box::new(CsvTableSource::new(PathBuf::from("/nonexistent"))),
        )
    }

    #[test]
    fn ferc1_plan_follows_load_order() {
        let p = pipeline(Settings {
            ferc1_tables: vec![
                "f1_purchased_pwr".into(),
                "f1_fuel".into(),
                "f1_respondent_id".into(),
            ],
            debug: true,
            ..Settings::default()
        });
        let sources: Vec<_> = p.ferc1_plan().iter().map(|t| t.source).collect();
        assert_eq!(sources, ["f1_fuel", "f1_purchased_pwr"]);
    }

    #[test]
    fn eia923_plan_puts_debug_tables_last() {
        let p = pipeline(Settings {
            eia923_tables: vec![
                "operator_info_eia923".into(),
                "generation_eia923".into(),
                "plant_info_eia923".into(),
            ],
            debug: true,
            ..Settings::default()
        });
        assert_eq!(
            p.eia923_plan(),
            ["plant_info_eia923", "generation_eia923", "operator_info_eia923"]
        );
    }

    #[tokio::test]
    async fn invalid_settings_stop_before_the_schema_is_touched() {
        let sink = Arc::new(MemorySink::new());
        let p = IngestPipeline::new(
            EtlConfig::from_vars(|_| None),
            Settings {
                ferc1_years: vec![1980],
                ..Settings::default()
            },
            sink.clone(),
            Box::new(CsvTableSource::new(PathBuf::from("/nonexistent"))),
        );
        let err = p.init_db().await.unwrap_err();
        assert!(format!("{err:#}").contains("1980"));
        assert!(sink.table_names().await.is_empty());
    }
}
