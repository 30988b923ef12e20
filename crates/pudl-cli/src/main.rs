use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pudl_core::schema::{create_order, ALL_TABLES};
use pudl_etl::{EtlConfig, MatchStatus};
use pudl_storage::{PgSink, TableSink};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pudl")]
#[command(about = "Public Utility Data Liberation: FERC 1 and EIA 923 into one database")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Drop and rebuild the whole database.
    Init {
        #[arg(long)]
        settings: Option<PathBuf>,
        /// Load into memory instead of DATABASE_URL.
        #[arg(long)]
        dry_run: bool,
        /// Also write parquet copies of every loaded table.
        #[arg(long)]
        snapshot: bool,
    },
    /// Create any missing tables without touching existing ones.
    Migrate,
    /// Compare FERC 1 plant names with the plant mapping sheet.
    Audit {
        #[arg(long)]
        settings: Option<PathBuf>,
    },
    /// List the tables of the schema.
    Tables {
        /// Print CREATE TABLE statements instead of names.
        #[arg(long)]
        ddl: bool,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pudl=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Tables { ddl: false }) {
        Commands::Init {
            settings,
            dry_run,
            snapshot,
        } => {
            let summary = pudl_etl::init_db_from_env(settings.as_deref(), dry_run, snapshot).await?;
            println!(
                "init complete: run_id={} tables={} rows={} reports={}",
                summary.run_id,
                summary.tables.len(),
                summary.total_rows(),
                summary.reports_dir.as_deref().unwrap_or("-")
            );
            if let Some(manifest) = &summary.parquet_manifest {
                println!("parquet manifest: {manifest}");
            }
        }
        Commands::Migrate => {
            let config = EtlConfig::from_env();
            let sink = PgSink::connect(&config.database_url)
                .await
                .context("connecting to the PUDL database")?;
            sink.create_schema(ALL_TABLES)
                .await
                .context("creating the PUDL schema")?;
            info!(tables = ALL_TABLES.len(), "schema up to date");
        }
        Commands::Audit { settings } => {
            let report = pudl_etl::audit_from_env(settings.as_deref()).await?;
            let counts = report.counts();
            println!(
                "audit: checked={} likely_matches={} needs_review={} unmatched={}",
                counts.checked, counts.likely_matches, counts.needs_review, counts.unmatched
            );
            for plant in report
                .unmapped
                .iter()
                .filter(|p| p.status != MatchStatus::Unmatched)
            {
                println!(
                    "  {} {:?} -> {:?} ({:.3})",
                    plant.respondent_id,
                    plant.plant_name,
                    plant.best_match.as_deref().unwrap_or(""),
                    plant.score
                );
            }
        }
        Commands::Tables { ddl } => {
            for table in create_order() {
                if ddl {
                    println!("{};\n", table.create_sql());
                } else {
                    println!("{}", table.name);
                }
            }
        }
    }

    Ok(())
}
