//! Per-run reports: a markdown overview of what each ingest stage loaded,
//! and the same summary with the plant audit as JSON.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pudl_core::schema;
use tokio::fs;
use uuid::Uuid;

use crate::audit::{AuditReport, MatchStatus};
use crate::pipeline::IngestSummary;
use crate::{Stage, TableLoad};

pub fn reports_dir(workspace_root: &Path, run_id: Uuid) -> PathBuf {
    workspace_root.join("reports").join(run_id.to_string())
}

fn status_label(status: MatchStatus) -> &'static str {
    match status {
        MatchStatus::LikelyMatch => "likely match",
        MatchStatus::NeedsReview => "needs review",
        MatchStatus::Unmatched => "unmatched",
    }
}

/// Tables `table` holds foreign keys into, or `-`.
fn references(table: &str) -> String {
    let targets = schema::table(table)
        .map(|t| t.referenced_tables())
        .unwrap_or_default();
    if targets.is_empty() {
        "-".to_string()
    } else {
        targets.join(", ")
    }
}

fn stage_section(stage: Stage, loads: &[&TableLoad]) -> String {
    let rows: u64 = loads.iter().map(|l| l.rows).sum();
    let mut out = format!(
        "\n## {} ({} tables, {} rows)\n\n| table | rows | references |\n|---|---|---|\n",
        stage.title(),
        loads.len(),
        rows
    );
    for load in loads {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            load.table,
            load.rows,
            references(&load.table)
        ));
    }
    out
}

pub fn render_markdown(summary: &IngestSummary, audit: Option<&AuditReport>) -> String {
    let mut out = format!(
        "# PUDL Ingest Report\n\n- Run ID: `{}`\n- Started: {}\n- Finished: {}\n\
         - Dry run: {}\n- Rows loaded: {}\n",
        summary.run_id,
        summary.started_at,
        summary.finished_at,
        summary.dry_run,
        summary.total_rows(),
    );
    for stage in Stage::ALL {
        let loads: Vec<&TableLoad> = summary.tables.iter().filter(|t| t.stage == stage).collect();
        if !loads.is_empty() {
            out.push_str(&stage_section(stage, &loads));
        }
    }
    if let Some(audit) = audit {
        out.push_str(&format!(
            "\n## Plant mapping audit\n\n- FERC 1 plants checked: {}\n\
             - Not in plants_ferc1: {}\n",
            audit.checked,
            audit.unmapped.len()
        ));
        if !audit.unmapped.is_empty() {
            out.push_str("\n| respondent | plant | closest mapped name | score | status |\n");
            out.push_str("|---|---|---|---|---|\n");
            for p in &audit.unmapped {
                out.push_str(&format!(
                    "| {} | {} | {} | {:.3} | {} |\n",
                    p.respondent_id,
                    p.plant_name,
                    p.best_match.as_deref().unwrap_or("-"),
                    p.score,
                    status_label(p.status)
                ));
            }
        }
    }
    out
}

/// Writes `run_summary.json` and `ingest_report.md` into `dir`.
pub async fn write_reports(
    dir: &Path,
    summary: &IngestSummary,
    audit: Option<&AuditReport>,
) -> Result<()> {
    fs::create_dir_all(dir)
        .await
        .with_context(|| format!("creating {}", dir.display()))?;

    fs::write(dir.join("ingest_report.md"), render_markdown(summary, audit))
        .await
        .context("writing ingest_report.md")?;

    let json = serde_json::to_vec_pretty(&serde_json::json!({
        "summary": summary,
        "audit": audit,
    }))
    .context("serializing run summary")?;
    fs::write(dir.join("run_summary.json"), json)
        .await
        .context("writing run_summary.json")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::UnmappedPlant;
    use chrono::Utc;

    fn load(stage: Stage, table: &str, rows: u64) -> TableLoad {
        TableLoad {
            stage,
            table: table.into(),
            rows,
        }
    }

    fn summary() -> IngestSummary {
        let now = Utc::now();
        IngestSummary {
            run_id: Uuid::new_v4(),
            started_at: now,
            finished_at: now,
            dry_run: true,
            tables: vec![
                load(Stage::Static, "months", 12),
                load(Stage::Glue, "plants", 4),
                load(Stage::Glue, "plants_ferc1", 3),
                load(Stage::Ferc1, "fuel_ferc1", 10),
            ],
            audit: None,
            reports_dir: None,
            parquet_manifest: None,
        }
    }

    #[test]
    fn markdown_lists_tables_and_audit_rows() {
        let audit = AuditReport {
            checked: 3,
            unmapped: vec![UnmappedPlant {
                respondent_id: 145,
                plant_name: "Cherokee".into(),
                tables: vec!["fuel_ferc1".into()],
                best_match: Some("Cherokee Station".into()),
                score: 0.9,
                status: MatchStatus::NeedsReview,
            }],
        };
        let md = render_markdown(&summary(), Some(&audit));
        assert!(md.contains("- Rows loaded: 29"));
        assert!(md.contains("| 145 | Cherokee | Cherokee Station | 0.900 | needs review |"));
        assert!(!render_markdown(&summary(), None).contains("audit"));
    }

    #[test]
    fn tables_are_grouped_by_stage_with_their_references() {
        let md = render_markdown(&summary(), None);
        assert!(md.contains("## Static reference tables (1 tables, 12 rows)"));
        assert!(md.contains("## FERC/EIA glue (2 tables, 7 rows)"));
        assert!(!md.contains("## EIA Form 923"));
        assert!(md.contains("| months | 12 | - |"));
        assert!(md.contains("| plants_ferc1 | 3 | utilities_ferc1, plants |"));
        let glue = md.find("## FERC/EIA glue").unwrap();
        let ferc1 = md.find("## FERC Form 1").unwrap();
        assert!(glue < ferc1);
        assert!(md[ferc1..].contains("| fuel_ferc1 | 10 |"));
    }

    #[tokio::test]
    async fn reports_land_in_the_run_directory() {
        let root = tempfile::tempdir().unwrap();
        let s = summary();
        let dir = reports_dir(root.path(), s.run_id);
        write_reports(&dir, &s, None).await.unwrap();
        let json: serde_json::Value =
            serde_json::from_slice(&std::fs::read(dir.join("run_summary.json")).unwrap()).unwrap();
        assert_eq!(json["summary"]["tables"][3]["rows"], 10);
        assert_eq!(json["summary"]["tables"][3]["stage"], "ferc1");
        assert!(json["audit"].is_null());
        assert!(dir.join("ingest_report.md").is_file());
    }
}
