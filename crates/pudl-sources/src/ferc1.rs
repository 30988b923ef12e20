//! The FERC Form 1 extract: one source table per FERC schedule.

use std::path::PathBuf;

use async_trait::async_trait;
use polars::prelude::{col, lit, Column, Expr};
use pudl_core::schema::quote_ident;
use pudl_core::{ColumnType, DataFrame, FrameError, FrameExt};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use tracing::debug;

use crate::{read_csv_frame, SourceError};

/// Read access to raw FERC 1 tables.
#[async_trait]
pub trait TableSource: Send + Sync {
    /// All rows of `table`. Tables with a `report_year` column are limited to
    /// `report_years`; others are returned whole.
    async fn read_table(
        &self,
        table: &str,
        report_years: &[i64],
    ) -> Result<DataFrame, SourceError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decode {
    Int,
    Float,
    Bool,
    Text,
}

fn decode_for(data_type: &str) -> Decode {
    match data_type {
        "smallint" | "integer" | "bigint" => Decode::Int,
        "numeric" | "real" | "double precision" => Decode::Float,
        "boolean" => Decode::Bool,
        _ => Decode::Text,
    }
}

/// Select expression that makes the column decodable as `decode`.
fn select_expr(column: &str, decode: Decode) -> String {
    let q = quote_ident(column);
    match decode {
        Decode::Int => format!("{q}::int8 AS {q}"),
        Decode::Float => format!("{q}::float8 AS {q}"),
        Decode::Bool => q,
        Decode::Text => format!("{q}::text AS {q}"),
    }
}

fn try_collect<T>(rows: &[PgRow], idx: usize) -> Result<Vec<Option<T>>, sqlx::Error>
where
    T: for<'r> sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    rows.iter().map(|row| row.try_get::<Option<T>, _>(idx)).collect()
}

/// Decodes one result column into a typed frame column.
fn decode_column(
    rows: &[PgRow],
    idx: usize,
    name: &str,
    decode: Decode,
) -> Result<Column, sqlx::Error> {
    let name = name.into();
    Ok(match decode {
        Decode::Int => Column::new(name, try_collect::<i64>(rows, idx)?),
        Decode::Float => Column::new(name, try_collect::<f64>(rows, idx)?),
        Decode::Bool => Column::new(name, try_collect::<bool>(rows, idx)?),
        Decode::Text => Column::new(name, try_collect::<String>(rows, idx)?),
    })
}

/// Rows whose `report_year` is one of `years`.
fn in_years(years: &[i64]) -> Expr {
    years
        .iter()
        .map(|y| col("report_year").eq(lit(*y)))
        .reduce(|a, b| a.or(b))
        .unwrap_or(lit(false))
}

/// FERC 1 extract loaded into Postgres, one table per schedule.
pub struct PgTableSource {
    pool: PgPool,
}

impl PgTableSource {
    pub async fn connect(database_url: &str) -> Result<Self, SourceError> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn columns(&self, table: &str) -> Result<Vec<(String, Decode)>, SourceError> {
        let rows: Vec<(String, String)> = sqlx::query_as(
            r#"
            SELECT column_name::text, data_type::text
              FROM information_schema.columns
             WHERE table_schema = current_schema()
               AND table_name = $1
             ORDER BY ordinal_position
            "#,
        )
        .bind(table)
        .fetch_all(&self.pool)
        .await?;
        if rows.is_empty() {
            return Err(SourceError::UnknownTable(table.to_string()));
        }
        Ok(rows
            .into_iter()
            .map(|(name, ty)| {
                let decode = decode_for(&ty);
                (name, decode)
            })
            .collect())
    }
}

#[async_trait]
impl TableSource for PgTableSource {
    async fn read_table(
        &self,
        table: &str,
        report_years: &[i64],
    ) -> Result<DataFrame, SourceError> {
        let columns = self.columns(table).await?;
        let select = columns
            .iter()
            .map(|(name, decode)| select_expr(name, *decode))
            .collect::<Vec<_>>()
            .join(", ");
        let by_year = columns.iter().any(|(name, _)| name == "report_year");
        let mut sql = format!("SELECT {select} FROM {}", quote_ident(table));
        if by_year {
            sql.push_str(" WHERE report_year = ANY($1)");
        }
        let mut query = sqlx::query(&sql);
        if by_year {
            query = query.bind(report_years.to_vec());
        }
        let rows = query.fetch_all(&self.pool).await?;

        let frame = DataFrame::new(
            columns
                .iter()
                .enumerate()
                .map(|(idx, (name, decode))| decode_column(&rows, idx, name, *decode))
                .collect::<Result<Vec<_>, _>>()?,
        )
        .map_err(FrameError::from)?;
        debug!(table, rows = frame.height(), "read FERC 1 table from postgres");
        Ok(frame)
    }
}

/// FERC 1 extract dumped as `<dir>/<table>.csv`.
#[derive(Debug, Clone)]
pub struct CsvTableSource {
    dir: PathBuf,
}

impl CsvTableSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl TableSource for CsvTableSource {
    async fn read_table(
        &self,
        table: &str,
        report_years: &[i64],
    ) -> Result<DataFrame, SourceError> {
        let path = self.dir.join(format!("{table}.csv"));
        if !path.is_file() {
            return Err(SourceError::UnknownTable(table.to_string()));
        }
        let frame = read_csv_frame(&path)?;
        let frame = if frame.has_column("report_year") {
            frame
                .coerce(&[("report_year", ColumnType::Integer)])?
                .filter_by(in_years(report_years))?
        } else {
            frame
        };
        debug!(table, rows = frame.height(), path = %path.display(), "read FERC 1 table from csv");
        Ok(frame)
    }
}
