//! Destination database access for PUDL: schema lifecycle and bulk inserts.

use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;
use pudl_core::schema::quote_ident;
use pudl_core::frame::empty_table;
use pudl_core::{ColumnType, DataFrame, FrameError, FrameExt, TableDef, Value};
use sha2::{Digest, Sha256};
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::{Postgres, QueryBuilder};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info_span, Instrument};

pub const CRATE_NAME: &str = "pudl-storage";

/// Rows per `INSERT` statement. Wide FERC tables have ~40 columns, which keeps a
/// chunk well under the Postgres limit of 65535 bind parameters.
pub const INSERT_CHUNK_ROWS: usize = 1000;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Frame(#[from] FrameError),
    #[error("table {0} has not been created")]
    UnknownTable(String),
    #[error("{table}.{column} = {value} has no match in {target}")]
    ForeignKey {
        table: String,
        column: String,
        value: String,
        target: String,
    },
    #[error("duplicate primary key ({key}) in {table}")]
    PrimaryKey { table: String, key: String },
}

/// Where transformed tables end up.
#[async_trait]
pub trait TableSink: Send + Sync {
    /// Creates any of `tables` that do not exist yet, in the given order.
    async fn create_schema(&self, tables: &[&TableDef]) -> Result<(), SinkError>;

    /// Drops every table in `tables` and creates them again, empty.
    async fn reset_schema(&self, tables: &[&TableDef]) -> Result<(), SinkError>;

    /// Conforms `frame` to `table` and appends it. Returns the number of rows written.
    async fn insert(&self, table: &TableDef, frame: &DataFrame) -> Result<u64, SinkError>;
}

pub struct PgSink {
    pool: PgPool,
    chunk_rows: usize,
}

impl PgSink {
    pub async fn connect(database_url: &str) -> Result<Self, SinkError> {
        // one connection: every stage runs in sequence
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(database_url)
            .await?;
        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            pool,
            chunk_rows: INSERT_CHUNK_ROWS,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TableSink for PgSink {
    async fn create_schema(&self, tables: &[&TableDef]) -> Result<(), SinkError> {
        let mut tx = self.pool.begin().await?;
        for table in tables {
            sqlx::query(&table.create_sql()).execute(&mut *tx).await?;
        }
        tx.commit().await?;
        Ok(())
    }

    async fn reset_schema(&self, tables: &[&TableDef]) -> Result<(), SinkError> {
        let mut tx = self.pool.begin().await?;
        for table in tables.iter().rev() {
            sqlx::query(&table.drop_sql()).execute(&mut *tx).await?;
        }
        for table in tables {
            sqlx::query(&table.create_sql()).execute(&mut *tx).await?;
        }
        tx.commit().await?;
        debug!(tables = tables.len(), "schema reset");
        Ok(())
    }

    async fn insert(&self, table: &TableDef, frame: &DataFrame) -> Result<u64, SinkError> {
        let rows = frame.conform(table)?.rows()?;
        if rows.is_empty() {
            return Ok(0);
        }
        let span = info_span!("pg_insert", table = table.name, rows = rows.len());
        async {
            let head = format!(
                "INSERT INTO {} ({}) ",
                quote_ident(table.name),
                table
                    .columns
                    .iter()
                    .map(|c| quote_ident(c.name))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            let mut written = 0u64;
            let mut tx = self.pool.begin().await?;
            for chunk in rows.chunks(self.chunk_rows) {
                let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(head.as_str());
                qb.push_values(chunk, |mut b, row| {
                    for (col, v) in table.columns.iter().zip(row.values()) {
                        // binds carry the column type, so nulls are typed too
                        match col.ty {
                            ColumnType::Integer => {
                                b.push_bind(v.as_i64());
                            }
                            ColumnType::Float | ColumnType::Numeric => {
                                b.push_bind(v.as_f64());
                            }
                            ColumnType::Boolean => {
                                b.push_bind(v.as_bool());
                            }
                            ColumnType::Text => {
                                b.push_bind(v.as_str().map(str::to_string));
                            }
                        }
                    }
                });
                let result = qb.build().execute(&mut *tx).await?;
                written += result.rows_affected();
            }
            tx.commit().await?;
            Ok::<u64, SinkError>(written)
        }
        .instrument(span)
        .await
    }
}

/// Keeps every inserted table in memory. Enforces the same primary and foreign
/// keys the Postgres schema declares, so a dry run fails where a real load would.
#[derive(Default)]
pub struct MemorySink {
    tables: Mutex<BTreeMap<String, DataFrame>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table as loaded so far, typed after its definition.
    pub async fn frame(&self, table: &str) -> Option<DataFrame> {
        self.tables.lock().await.get(table).cloned()
    }

    pub async fn row_count(&self, table: &str) -> usize {
        self.tables.lock().await.get(table).map_or(0, DataFrame::height)
    }

    pub async fn table_names(&self) -> Vec<String> {
        self.tables.lock().await.keys().cloned().collect()
    }
}

fn key_of(table: &TableDef, row: &[Value]) -> String {
    table
        .primary_key
        .iter()
        .filter_map(|k| table.columns.iter().position(|c| c.name == *k))
        .map(|i| row[i].to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[async_trait]
impl TableSink for MemorySink {
    async fn create_schema(&self, tables: &[&TableDef]) -> Result<(), SinkError> {
        let mut guard = self.tables.lock().await;
        for table in tables {
            if !guard.contains_key(table.name) {
                guard.insert(table.name.to_string(), empty_table(table)?);
            }
        }
        Ok(())
    }

    async fn reset_schema(&self, tables: &[&TableDef]) -> Result<(), SinkError> {
        let mut guard = self.tables.lock().await;
        guard.clear();
        for table in tables {
            guard.insert(table.name.to_string(), empty_table(table)?);
        }
        Ok(())
    }

    async fn insert(&self, table: &TableDef, frame: &DataFrame) -> Result<u64, SinkError> {
        let conformed = frame.conform(table)?;
        let rows = conformed.rows()?;
        let mut guard = self.tables.lock().await;
        if !guard.contains_key(table.name) {
            return Err(SinkError::UnknownTable(table.name.to_string()));
        }

        for (pos, col) in table.columns.iter().enumerate() {
            let Some((target_table, target_col)) = col.references else {
                continue;
            };
            let target = guard
                .get(target_table)
                .ok_or_else(|| SinkError::UnknownTable(target_table.to_string()))?;
            let known: HashSet<String> = target
                .values(target_col)?
                .iter()
                .map(Value::to_string)
                .collect();
            if let Some(bad) = rows
                .iter()
                .map(|r| &r.values()[pos])
                .find(|v| !v.is_null() && !known.contains(&v.to_string()))
            {
                return Err(SinkError::ForeignKey {
                    table: table.name.to_string(),
                    column: col.name.to_string(),
                    value: bad.to_string(),
                    target: format!("{target_table}.{target_col}"),
                });
            }
        }

        let existing = guard
            .get_mut(table.name)
            .ok_or_else(|| SinkError::UnknownTable(table.name.to_string()))?;
        if !table.primary_key.is_empty() {
            let mut seen: HashSet<String> = existing
                .rows()?
                .iter()
                .map(|r| key_of(table, r.values()))
                .collect();
            for row in &rows {
                let key = key_of(table, row.values());
                if !seen.insert(key.clone()) {
                    return Err(SinkError::PrimaryKey {
                        table: table.name.to_string(),
                        key,
                    });
                }
            }
        }

        existing.vstack_mut(&conformed).map_err(FrameError::from)?;
        Ok(rows.len() as u64)
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;
    use pudl_core::schema::{PLANTS, PLANTS_EIA923, UTILITIES};

    fn plants(ids: &[i64], names: &[&str]) -> DataFrame {
        df!("id" => ids, "name" => names).unwrap()
    }

    #[tokio::test]
    async fn memory_sink_appends_conformed_rows() {
        let sink = MemorySink::new();
        sink.reset_schema(&[&PLANTS]).await.unwrap();
        assert_eq!(sink.insert(&PLANTS, &plants(&[1], &["Cholla"])).await.unwrap(), 1);
        assert_eq!(sink.insert(&PLANTS, &plants(&[2], &["Comanche"])).await.unwrap(), 1);
        let f = sink.frame("plants").await.unwrap();
        assert_eq!(f.names(), ["id", "name"]);
        assert_eq!(f.height(), 2);
        assert_eq!(f.values("id").unwrap(), [Value::Int(1), Value::Int(2)]);
    }

    #[tokio::test]
    async fn memory_sink_enforces_keys() {
        let sink = MemorySink::new();
        sink.reset_schema(&[&PLANTS, &UTILITIES, &PLANTS_EIA923]).await.unwrap();
        sink.insert(&PLANTS, &plants(&[1], &["Cholla"])).await.unwrap();

        let dup = sink.insert(&PLANTS, &plants(&[1], &["Again"])).await.unwrap_err();
        assert!(matches!(dup, SinkError::PrimaryKey { .. }));

        let orphan = df!(
            "plant_id" => [113i64],
            "plant_name" => ["Cholla"],
            "plant_id_pudl" => [7i64]
        )
        .unwrap();
        let err = sink.insert(&PLANTS_EIA923, &orphan).await.unwrap_err();
        assert!(matches!(
            err,
            SinkError::ForeignKey { ref column, .. } if column == "plant_id_pudl"
        ));
        assert_eq!(sink.row_count("plants_eia923").await, 0);
    }

    #[tokio::test]
    async fn text_keys_match_integer_targets() {
        let sink = MemorySink::new();
        sink.reset_schema(&[&PLANTS, &UTILITIES, &PLANTS_EIA923]).await.unwrap();
        sink.insert(&PLANTS, &plants(&[7], &["Cholla"])).await.unwrap();
        let raw = df!(
            "plant_id" => ["113"],
            "plant_name" => ["Cholla"],
            "plant_id_pudl" => ["7"]
        )
        .unwrap();
        assert_eq!(sink.insert(&PLANTS_EIA923, &raw).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn insert_before_reset_is_an_error() {
        let sink = MemorySink::new();
        let err = sink.insert(&PLANTS, &plants(&[1], &["x"])).await.unwrap_err();
        assert!(matches!(err, SinkError::UnknownTable(_)));
    }

    #[test]
    fn sha256_is_lower_hex() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
