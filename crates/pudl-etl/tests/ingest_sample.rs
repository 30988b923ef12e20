use std::path::{Path, PathBuf};
use std::sync::Arc;

use pudl_core::{DataFrame, FrameExt, Row, Value};
use pudl_etl::snapshot::ParquetManifest;
use pudl_etl::{EtlConfig, IngestPipeline, MappingError, RunOptions, Settings, Stage};
use pudl_sources::CsvTableSource;
use pudl_storage::MemorySink;

fn sample_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/sample")
}

fn sample_pipeline(sink: Arc<MemorySink>, workspace: &Path, options: RunOptions) -> IngestPipeline {
    pipeline_at(&sample_root(), sink, workspace, options)
}

fn pipeline_at(
    root: &Path,
    sink: Arc<MemorySink>,
    workspace: &Path,
    options: RunOptions,
) -> IngestPipeline {
    let workspace = workspace.display().to_string();
    let config = EtlConfig::from_vars(|key| match key {
        "FERC1_CSV_DIR" => Some(root.join("ferc1").display().to_string()),
        "EIA923_DIR" => Some(root.join("eia923").display().to_string()),
        "MAPPING_DIR" => Some(root.join("mapping").display().to_string()),
        "PUDL_WORKSPACE" => Some(workspace.clone()),
        _ => None,
    });
    let settings = Settings::from_path(&root.join("pudl.yaml")).unwrap();
    IngestPipeline::new(
        config,
        settings,
        sink,
        Box::new(CsvTableSource::new(root.join("ferc1"))),
    )
    .with_options(options)
}

fn row_where(frame: &DataFrame, pred: impl Fn(&Row) -> bool) -> Row {
    frame.rows().unwrap().into_iter().find(|r| pred(r)).unwrap()
}

/// Copies `from` into `to`, directories included.
fn copy_tree(from: &Path, to: &Path) {
    std::fs::create_dir_all(to).unwrap();
    for entry in std::fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_tree(&entry.path(), &target);
        } else {
            std::fs::copy(entry.path(), &target).unwrap();
        }
    }
}

/// The sample extract in a scratch directory, with `row` appended to the
/// plant mapping sheet.
fn sample_with_plant_row(row: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    copy_tree(&sample_root(), dir.path());
    let sheet = dir.path().join("mapping/plants_output.csv");
    let mut plants = std::fs::read_to_string(&sheet).unwrap();
    if !plants.ends_with('\n') {
        plants.push('\n');
    }
    plants.push_str(row);
    plants.push('\n');
    std::fs::write(&sheet, plants).unwrap();
    dir
}

#[tokio::test]
async fn sample_extract_loads_every_table() {
    let workspace = tempfile::tempdir().unwrap();
    let sink = Arc::new(MemorySink::new());
    let summary = sample_pipeline(sink.clone(), workspace.path(), RunOptions::default())
        .init_db()
        .await
        .unwrap();

    let expected = [
        ("plants", 6),
        ("utilities", 3),
        ("utilities_eia923", 3),
        ("utilities_ferc1", 2),
        ("plants_eia923", 5),
        ("plants_ferc1", 5),
        ("util_plant_assn", 6),
        ("fuel_ferc1", 4),
        ("plants_steam_ferc1", 3),
        ("plants_small_ferc1", 2),
        ("plants_hydro_ferc1", 1),
        ("plants_pumped_storage_ferc1", 1),
        ("plant_in_service_ferc1", 4),
        ("purchased_power_ferc1", 2),
        ("accumulated_depreciation_ferc1", 3),
        ("plant_info_eia923", 6),
        ("generation_fuel_eia923", 10),
        ("boilers_eia923", 3),
        ("boiler_fuel_eia923", 8),
        ("generators_eia923", 3),
        ("generation_eia923", 6),
        ("coalmine_info_eia923", 2),
        ("fuel_receipts_costs_eia923", 4),
    ];
    for (table, rows) in expected {
        assert_eq!(summary.rows_for(table), Some(rows), "{table}");
        assert_eq!(sink.row_count(table).await, rows as usize, "{table}");
    }
    assert_eq!(summary.rows_for("fuels"), Some(sink.row_count("fuels").await as u64));
    for stage in Stage::ALL {
        assert!(summary.tables.iter().any(|t| t.stage == stage), "{stage:?}");
    }
    let glue: Vec<&str> = summary
        .tables
        .iter()
        .filter(|t| t.stage == Stage::Glue)
        .map(|t| t.table.as_str())
        .collect();
    assert_eq!(glue[..2], ["plants", "utilities"]);

    let audit = summary.audit.unwrap();
    assert_eq!(audit.checked, 9);
    assert_eq!(audit.needs_review, 1);
    assert_eq!(audit.likely_matches, 0);
    assert_eq!(audit.unmatched, 4);

    let dir = PathBuf::from(summary.reports_dir.as_deref().unwrap());
    assert!(dir.starts_with(workspace.path()));
    assert!(dir.join("run_summary.json").is_file());
    let report = std::fs::read_to_string(dir.join("ingest_report.md")).unwrap();
    assert!(report.contains("| 145 | Cherokee | Cherokee Station |"));
    assert!(report.contains("## FERC/EIA glue (7 tables, 30 rows)"));
    assert!(summary.parquet_manifest.is_none());
}

#[tokio::test]
async fn sample_values_come_out_in_pudl_units() {
    let workspace = tempfile::tempdir().unwrap();
    let sink = Arc::new(MemorySink::new());
    sample_pipeline(
        sink.clone(),
        workspace.path(),
        RunOptions {
            audit: false,
            write_reports: false,
            ..RunOptions::default()
        },
    )
    .init_db()
    .await
    .unwrap();

    let steam = sink.frame("plants_steam_ferc1").await.unwrap();
    let barry = row_where(&steam, |r| r.get("plant_name") == &Value::text("Barry"));
    assert_eq!(barry.get("net_generation_mwh").as_f64(), Some(9_500_000.0));
    assert_eq!(barry.get("year_constructed"), &Value::Int(1954));

    let small = sink.frame("plants_small_ferc1").await.unwrap();
    let record_numbers = small.values("record_number").unwrap();
    assert_eq!(record_numbers, [Value::Int(51), Value::Int(52)]);

    let receipts = sink.frame("fuel_receipts_costs_eia923").await.unwrap();
    assert!(receipts
        .values("plant_id")
        .unwrap()
        .iter()
        .all(|v| v.as_i64() != Some(8899)));

    let info = sink.frame("plant_info_eia923").await.unwrap();
    let wood_mill = row_where(&info, |r| r.get("plant_id").as_i64() == Some(10));
    assert_eq!(wood_mill.get("combined_heat_power"), &Value::Bool(true));
    assert!(wood_mill.get("census_region").is_null());
}

#[tokio::test]
async fn snapshot_covers_every_loaded_table() {
    let workspace = tempfile::tempdir().unwrap();
    let summary = sample_pipeline(
        Arc::new(MemorySink::new()),
        workspace.path(),
        RunOptions {
            snapshot: true,
            ..RunOptions::default()
        },
    )
    .init_db()
    .await
    .unwrap();

    let manifest_path = PathBuf::from(summary.parquet_manifest.as_ref().unwrap());
    let manifest: ParquetManifest =
        serde_json::from_slice(&std::fs::read(&manifest_path).unwrap()).unwrap();
    assert_eq!(manifest.files.len(), summary.tables.len());
    let fuel = manifest.files.iter().find(|f| f.table == "fuel_ferc1").unwrap();
    assert_eq!(fuel.rows, 4);
    assert_eq!(fuel.stage, Stage::Ferc1);
    let stages: Vec<Stage> = manifest.stages.iter().map(|s| s.stage).collect();
    assert_eq!(stages, Stage::ALL);
    let manifest_rows: u64 = manifest.stages.iter().map(|s| s.rows).sum();
    assert_eq!(manifest_rows, summary.total_rows());
    assert!(manifest_path
        .parent()
        .unwrap()
        .join("fuel_ferc1.parquet")
        .is_file());
}

#[tokio::test]
async fn audit_alone_writes_nothing() {
    let workspace = tempfile::tempdir().unwrap();
    let sink = Arc::new(MemorySink::new());
    let report = sample_pipeline(sink.clone(), workspace.path(), RunOptions::default())
        .audit()
        .await
        .unwrap();
    assert_eq!(report.counts().checked, 9);
    let cherokee = report
        .unmapped
        .iter()
        .find(|p| p.plant_name == "Cherokee")
        .unwrap();
    assert_eq!(cherokee.best_match.as_deref(), Some("Cherokee Station"));
    assert!(sink.table_names().await.is_empty());
    assert!(!workspace.path().join("reports").exists());
}

#[tokio::test]
async fn unknown_respondent_aborts_after_the_static_tables() {
    let root = sample_with_plant_row("7,Ghost,999,Nobody,ghost,,,,");
    let workspace = tempfile::tempdir().unwrap();
    let sink = Arc::new(MemorySink::new());
    let err = pipeline_at(root.path(), sink.clone(), workspace.path(), RunOptions::default())
        .init_db()
        .await
        .unwrap_err();

    let mapping = err.chain().find_map(|e| e.downcast_ref::<MappingError>());
    assert!(matches!(mapping, Some(MappingError::UnknownRespondent(999))), "{err:#}");

    // the schema was reset and the static tables loaded; nothing after them
    assert_eq!(sink.table_names().await.len(), pudl_core::schema::ALL_TABLES.len());
    assert_eq!(sink.row_count("months").await, 12);
    for table in ["plants", "utilities", "plants_ferc1", "util_plant_assn", "fuel_ferc1"] {
        assert_eq!(sink.row_count(table).await, 0, "{table}");
    }
    assert!(!workspace.path().join("reports").exists());
}

#[tokio::test]
async fn unknown_operator_aborts_before_any_glue_table_loads() {
    let root = sample_with_plant_row("7,Ghost,,,,7777,Ghost,Nobody Power,4242");
    let workspace = tempfile::tempdir().unwrap();
    let sink = Arc::new(MemorySink::new());
    let err = pipeline_at(root.path(), sink.clone(), workspace.path(), RunOptions::default())
        .init_db()
        .await
        .unwrap_err();

    let mapping = err.chain().find_map(|e| e.downcast_ref::<MappingError>());
    assert!(
        matches!(
            mapping,
            Some(MappingError::UnknownOperator {
                plant_id: 7777,
                operator_id: 4242
            })
        ),
        "{err:#}"
    );
    assert!(sink.row_count("us_states").await > 0);
    assert_eq!(sink.row_count("plants_eia923").await, 0);
    assert_eq!(sink.row_count("utilities_eia923").await, 0);
}
