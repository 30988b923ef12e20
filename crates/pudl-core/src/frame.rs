//! Table manipulation on polars `DataFrame`s.
//!
//! Sources hand transforms text-typed frames; transforms reshape them with the
//! lazy API; sinks call [`FrameExt::conform`] to get a frame typed after its
//! destination table and only then drop down to [`Value`] rows.

use std::sync::Arc;

use polars::prelude::{
    col, concat_lf_diagonal, BooleanChunked, Column, DataFrame, DataType, Expr,
    Float64Chunked, Int64Chunked, IntoColumn, IntoLazy, IntoSeries, JoinArgs, JoinCoalesce,
    JoinType, PolarsError, Series, StringChunked, UnionArgs, UniqueKeepStrategy,
};
use thiserror::Error;

use crate::schema::{ColumnType, TableDef};
use crate::value::{parse_bool, parse_f64, parse_i64, whole, Value};

#[derive(Debug, Error)]
pub enum FrameError {
    #[error(transparent)]
    Polars(#[from] PolarsError),
    #[error("unknown column `{0}`")]
    UnknownColumn(String),
    #[error("duplicate column `{0}`")]
    DuplicateColumn(String),
    #[error("row has {got} values but the frame has {expected} columns")]
    RowWidth { expected: usize, got: usize },
}

/// `(source, target, conversion)`: [`FrameExt::derive`] writes
/// `conversion(col(source))` to `target` and drops `source`.
pub type Conversion = (&'static str, &'static str, fn(Expr) -> Expr);

/// Builds a frame of text columns. `None` cells are null.
pub fn text_frame(
    columns: &[String],
    rows: Vec<Vec<Option<String>>>,
) -> Result<DataFrame, FrameError> {
    for (i, name) in columns.iter().enumerate() {
        if columns[..i].contains(name) {
            return Err(FrameError::DuplicateColumn(name.clone()));
        }
    }
    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::with_capacity(rows.len()); columns.len()];
    for row in rows {
        if row.len() != columns.len() {
            return Err(FrameError::RowWidth {
                expected: columns.len(),
                got: row.len(),
            });
        }
        for (cell, column) in row.into_iter().zip(cells.iter_mut()) {
            column.push(cell);
        }
    }
    let columns = columns
        .iter()
        .zip(cells)
        .map(|(name, values)| Column::new(name.as_str().into(), values))
        .collect();
    Ok(DataFrame::new(columns)?)
}

/// Stacks frames, taking the union of their columns. Missing cells are null.
pub fn concat_frames(frames: Vec<DataFrame>) -> Result<DataFrame, FrameError> {
    if frames.is_empty() {
        return Ok(DataFrame::empty());
    }
    let lazy: Vec<_> = frames.into_iter().map(IntoLazy::lazy).collect();
    Ok(concat_lf_diagonal(lazy, UnionArgs::default())?.collect()?)
}

/// A zero-row frame with the columns and dtypes of `table`.
pub fn empty_table(table: &TableDef) -> Result<DataFrame, FrameError> {
    let columns = table
        .columns
        .iter()
        .map(|c| Series::new_empty(c.name.into(), &c.ty.dtype()).into_column())
        .collect();
    Ok(DataFrame::new(columns)?)
}

/// One row of a frame, read by column name.
#[derive(Debug, Clone)]
pub struct Row {
    columns: Arc<[String]>,
    values: Vec<Value>,
}

impl Row {
    /// The cell in `column`; null when the frame has no such column.
    pub fn get(&self, column: &str) -> &Value {
        static NULL: Value = Value::Null;
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|i| self.values.get(i))
            .unwrap_or(&NULL)
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

fn column_values(column: &Column) -> Result<Vec<Value>, FrameError> {
    let series = column.as_materialized_series();
    let values = match series.dtype() {
        DataType::Boolean => series.bool()?.into_iter().map(Value::from).collect(),
        DataType::String => series.str()?.into_iter().map(Value::from).collect(),
        DataType::Int32 | DataType::Int64 | DataType::UInt32 | DataType::UInt64 => {
            let ints = series.cast(&DataType::Int64)?;
            ints.i64()?.into_iter().map(Value::from).collect()
        }
        DataType::Float32 | DataType::Float64 => {
            let floats = series.cast(&DataType::Float64)?;
            floats.f64()?.into_iter().map(Value::from).collect()
        }
        DataType::Null => vec![Value::Null; series.len()],
        _ => {
            let text = series.cast(&DataType::String)?;
            text.str()?.into_iter().map(Value::from).collect()
        }
    };
    Ok(values)
}

fn map_strings(column: &Column, f: &dyn Fn(&str) -> Option<String>) -> Result<Column, FrameError> {
    let text = column.cast(&DataType::String)?;
    let mapped: StringChunked = text.str()?.into_iter().map(|v| v.and_then(f)).collect();
    Ok(mapped.with_name(column.name().clone()).into_column())
}

/// Lenient conversion of one column to the dtype of `ty`. Cells that do not
/// fit become null.
fn coerce_column(column: &Column, ty: ColumnType) -> Result<Column, FrameError> {
    let series = column.as_materialized_series();
    let out: Series = match (ty, series.dtype()) {
        (ColumnType::Text, DataType::String) => series
            .str()?
            .into_iter()
            .map(|v| v.map(str::trim).filter(|t| !t.is_empty()))
            .collect::<StringChunked>()
            .into_series(),
        (ColumnType::Integer, DataType::String) => series
            .str()?
            .into_iter()
            .map(|v| v.and_then(parse_i64))
            .collect::<Int64Chunked>()
            .into_series(),
        (ColumnType::Integer, DataType::Float32 | DataType::Float64) => {
            let floats = series.cast(&DataType::Float64)?;
            floats
                .f64()?
                .into_iter()
                .map(|v| v.and_then(whole))
                .collect::<Int64Chunked>()
                .into_series()
        }
        (ColumnType::Float | ColumnType::Numeric, DataType::String) => series
            .str()?
            .into_iter()
            .map(|v| v.and_then(parse_f64))
            .collect::<Float64Chunked>()
            .into_series(),
        (ColumnType::Boolean, DataType::String) => series
            .str()?
            .into_iter()
            .map(|v| v.and_then(parse_bool))
            .collect::<BooleanChunked>()
            .into_series(),
        (ty, _) => series.cast(&ty.dtype())?,
    };
    Ok(out.with_name(series.name().clone()).into_column())
}

fn all_of(predicates: Vec<Expr>) -> Option<Expr> {
    predicates.into_iter().reduce(|a, b| a.and(b))
}

fn any_of(predicates: Vec<Expr>) -> Option<Expr> {
    predicates.into_iter().reduce(|a, b| a.or(b))
}

/// Extension methods PUDL's transforms use on top of polars.
///
/// Methods that take a column list treat a missing column as an error unless
/// their docs say otherwise.
pub trait FrameExt {
    fn names(&self) -> Vec<&str>;
    fn has_column(&self, name: &str) -> bool;

    /// Every cell of `column` as a [`Value`].
    fn values(&self, column: &str) -> Result<Vec<Value>, FrameError>;
    /// A single cell; `None` when the column or row does not exist.
    fn value(&self, row: usize, column: &str) -> Option<Value>;
    fn rows(&self) -> Result<Vec<Row>, FrameError>;

    /// Selects `columns` in order. Columns the frame lacks come back as all-null
    /// text.
    fn project(&self, columns: &[&str]) -> Result<DataFrame, FrameError>;
    /// Drops the named columns; names that are not present are ignored.
    fn drop_columns(&self, columns: &[&str]) -> Result<DataFrame, FrameError>;
    /// Applies `(from, to)` renames in order. Absent sources are skipped;
    /// renaming onto a column that already exists is an error.
    fn rename_columns(&self, renames: &[(&str, &str)]) -> Result<DataFrame, FrameError>;
    /// Rewrites the cells of a text column; skipped when the column is absent.
    fn map_text(
        &self,
        column: &str,
        f: &dyn Fn(&str) -> Option<String>,
    ) -> Result<DataFrame, FrameError>;
    /// Rewrites every text column.
    fn map_all_text(&self, f: &dyn Fn(&str) -> Option<String>) -> Result<DataFrame, FrameError>;
    /// Converts the named columns that are present.
    fn coerce(&self, columns: &[(&str, ColumnType)]) -> Result<DataFrame, FrameError>;
    /// Runs the conversions whose source column is present.
    fn derive(&self, conversions: &[Conversion]) -> Result<DataFrame, FrameError>;

    fn filter_by(&self, predicate: Expr) -> Result<DataFrame, FrameError>;
    /// Drops rows with a null in any of `subset`, or in any column at all.
    fn drop_nulls_in(&self, subset: Option<&[&str]>) -> Result<DataFrame, FrameError>;
    /// Keeps the first row for each distinct combination of `keys`.
    fn distinct_on(&self, keys: &[&str]) -> Result<DataFrame, FrameError>;
    fn distinct(&self) -> Result<DataFrame, FrameError>;
    fn rows_with_nulls(&self) -> Result<usize, FrameError>;

    fn join_left(&self, right: &DataFrame, on: &str) -> Result<DataFrame, FrameError>;
    /// Full outer join with a single coalesced key column.
    fn join_outer(&self, right: &DataFrame, on: &str) -> Result<DataFrame, FrameError>;

    /// Shapes the frame after `table`: columns in table order with the table's
    /// types, unknown columns dropped, missing columns null, and rows lacking a
    /// NOT NULL value removed.
    fn conform(&self, table: &TableDef) -> Result<DataFrame, FrameError>;
    fn columns_outside(&self, table: &TableDef) -> Vec<String>;
}

impl FrameExt for DataFrame {
    fn names(&self) -> Vec<&str> {
        self.get_columns().iter().map(|c| c.name().as_str()).collect()
    }

    fn has_column(&self, name: &str) -> bool {
        self.get_columns().iter().any(|c| c.name().as_str() == name)
    }

    fn values(&self, column: &str) -> Result<Vec<Value>, FrameError> {
        let column = self
            .column(column)
            .map_err(|_| FrameError::UnknownColumn(column.to_string()))?;
        column_values(column)
    }

    fn value(&self, row: usize, column: &str) -> Option<Value> {
        self.values(column).ok()?.into_iter().nth(row)
    }

    fn rows(&self) -> Result<Vec<Row>, FrameError> {
        let columns: Arc<[String]> = self.names().into_iter().map(str::to_string).collect();
        let mut cells = self
            .get_columns()
            .iter()
            .map(|c| column_values(c).map(Vec::into_iter))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((0..self.height())
            .map(|_| Row {
                columns: Arc::clone(&columns),
                values: cells.iter_mut().map(|c| c.next().unwrap_or_default()).collect(),
            })
            .collect())
    }

    fn project(&self, columns: &[&str]) -> Result<DataFrame, FrameError> {
        let mut out = self.clone();
        for name in columns {
            if !out.has_column(name) {
                let nulls = Series::full_null((*name).into(), out.height(), &DataType::String);
                out.with_column(nulls)?;
            }
        }
        Ok(out.select(columns.iter().copied())?)
    }

    fn drop_columns(&self, columns: &[&str]) -> Result<DataFrame, FrameError> {
        let keep: Vec<&str> = self
            .names()
            .into_iter()
            .filter(|c| !columns.contains(c))
            .collect();
        Ok(self.select(keep)?)
    }

    fn rename_columns(&self, renames: &[(&str, &str)]) -> Result<DataFrame, FrameError> {
        let mut out = self.clone();
        for (from, to) in renames {
            if from == to || !out.has_column(from) {
                continue;
            }
            if out.has_column(to) {
                return Err(FrameError::DuplicateColumn(to.to_string()));
            }
            out.rename(from, (*to).into())?;
        }
        Ok(out)
    }

    fn map_text(
        &self,
        column: &str,
        f: &dyn Fn(&str) -> Option<String>,
    ) -> Result<DataFrame, FrameError> {
        let Ok(source) = self.column(column) else {
            return Ok(self.clone());
        };
        let mapped = map_strings(source, f)?;
        let mut out = self.clone();
        out.with_column(mapped)?;
        Ok(out)
    }

    fn map_all_text(&self, f: &dyn Fn(&str) -> Option<String>) -> Result<DataFrame, FrameError> {
        let columns = self
            .get_columns()
            .iter()
            .map(|c| match c.dtype() {
                DataType::String => map_strings(c, f),
                _ => Ok(c.clone()),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DataFrame::new(columns)?)
    }

    fn coerce(&self, columns: &[(&str, ColumnType)]) -> Result<DataFrame, FrameError> {
        let mut out = self.clone();
        for (name, ty) in columns {
            if let Ok(source) = self.column(name) {
                out.with_column(coerce_column(source, *ty)?)?;
            }
        }
        Ok(out)
    }

    fn derive(&self, conversions: &[Conversion]) -> Result<DataFrame, FrameError> {
        let present: Vec<&Conversion> = conversions
            .iter()
            .filter(|(source, _, _)| self.has_column(source))
            .collect();
        if present.is_empty() {
            return Ok(self.clone());
        }
        for (source, target, _) in &present {
            if source != target && self.has_column(target) {
                return Err(FrameError::DuplicateColumn(target.to_string()));
            }
        }
        let exprs: Vec<Expr> = present
            .iter()
            .map(|(source, target, convert)| convert(col(*source)).alias(*target))
            .collect();
        let replaced: Vec<&str> = present
            .iter()
            .filter(|(source, target, _)| source != target)
            .map(|(source, _, _)| *source)
            .collect();
        self.clone()
            .lazy()
            .with_columns(exprs)
            .collect()?
            .drop_columns(&replaced)
    }

    fn filter_by(&self, predicate: Expr) -> Result<DataFrame, FrameError> {
        Ok(self.clone().lazy().filter(predicate).collect()?)
    }

    fn drop_nulls_in(&self, subset: Option<&[&str]>) -> Result<DataFrame, FrameError> {
        let names = match subset {
            Some(subset) => {
                if let Some(missing) = subset.iter().find(|c| !self.has_column(c)) {
                    return Err(FrameError::UnknownColumn(missing.to_string()));
                }
                subset.to_vec()
            }
            None => self.names(),
        };
        match all_of(names.iter().map(|c| col(*c).is_not_null()).collect()) {
            Some(predicate) => self.filter_by(predicate),
            None => Ok(self.clone()),
        }
    }

    fn distinct_on(&self, keys: &[&str]) -> Result<DataFrame, FrameError> {
        if let Some(missing) = keys.iter().find(|c| !self.has_column(c)) {
            return Err(FrameError::UnknownColumn(missing.to_string()));
        }
        let subset: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        Ok(self.unique_stable(Some(subset.as_slice()), UniqueKeepStrategy::First, None)?)
    }

    fn distinct(&self) -> Result<DataFrame, FrameError> {
        Ok(self.unique_stable(None, UniqueKeepStrategy::First, None)?)
    }

    fn rows_with_nulls(&self) -> Result<usize, FrameError> {
        match any_of(self.names().iter().map(|c| col(*c).is_null()).collect()) {
            Some(predicate) => Ok(self.filter_by(predicate)?.height()),
            None => Ok(0),
        }
    }

    fn join_left(&self, right: &DataFrame, on: &str) -> Result<DataFrame, FrameError> {
        join(self, right, on, JoinArgs::new(JoinType::Left))
    }

    fn join_outer(&self, right: &DataFrame, on: &str) -> Result<DataFrame, FrameError> {
        let args = JoinArgs::new(JoinType::Full).with_coalesce(JoinCoalesce::CoalesceColumns);
        join(self, right, on, args)
    }

    fn conform(&self, table: &TableDef) -> Result<DataFrame, FrameError> {
        let columns = table
            .columns
            .iter()
            .map(|def| match self.column(def.name) {
                Ok(source) => coerce_column(source, def.ty),
                Err(_) => {
                    let nulls = Series::full_null(def.name.into(), self.height(), &def.ty.dtype());
                    Ok(nulls.into_column())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        let typed = DataFrame::new(columns)?;
        let required = table
            .columns
            .iter()
            .filter(|c| !c.nullable)
            .map(|c| col(c.name).is_not_null())
            .collect();
        match all_of(required) {
            Some(predicate) => typed.filter_by(predicate),
            None => Ok(typed),
        }
    }

    fn columns_outside(&self, table: &TableDef) -> Vec<String> {
        self.names()
            .into_iter()
            .filter(|c| table.column(c).is_none())
            .map(str::to_string)
            .collect()
    }
}

fn join(
    left: &DataFrame,
    right: &DataFrame,
    on: &str,
    args: JoinArgs,
) -> Result<DataFrame, FrameError> {
    for side in [left, right] {
        if !side.has_column(on) {
            return Err(FrameError::UnknownColumn(on.to_string()));
        }
    }
    if let Some(clash) = right.names().into_iter().find(|c| *c != on && left.has_column(c)) {
        return Err(FrameError::DuplicateColumn(clash.to_string()));
    }
    Ok(left
        .clone()
        .lazy()
        .join(right.clone().lazy(), [col(on)], [col(on)], args)
        .collect()?)
}

#[cfg(test)]
mod tests {
    use polars::df;
    use polars::prelude::lit;

    use super::*;
    use crate::schema::PLANTS_EIA923;

    fn plants() -> DataFrame {
        df!(
            "plant_id" => [Some(1i64), Some(2), Some(2), None],
            "name" => ["Alpha", "Beta", "Beta dup", "Orphan"]
        )
        .unwrap()
    }

    fn name_of(frame: &DataFrame, plant_id: i64) -> Value {
        frame
            .rows()
            .unwrap()
            .into_iter()
            .find(|r| r.get("plant_id") == &Value::Int(plant_id))
            .map(|r| r.get("name").clone())
            .unwrap_or_default()
    }

    #[test]
    fn text_frames_reject_ragged_rows_and_duplicate_columns() {
        let cols = vec!["a".to_string(), "b".to_string()];
        let err = text_frame(&cols, vec![vec![Some("1".into())]]).unwrap_err();
        assert!(matches!(err, FrameError::RowWidth { expected: 2, got: 1 }));
        let dup = vec!["a".to_string(), "a".to_string()];
        assert!(matches!(
            text_frame(&dup, vec![]),
            Err(FrameError::DuplicateColumn(c)) if c == "a"
        ));
    }

    #[test]
    fn distinct_on_keeps_first_occurrence() {
        let f = plants().distinct_on(&["plant_id"]).unwrap();
        assert_eq!(f.height(), 3);
        assert_eq!(name_of(&f, 2), Value::text("Beta"));
    }

    #[test]
    fn drop_nulls_respects_subset() {
        let f = plants().drop_nulls_in(Some(&["name"])).unwrap();
        assert_eq!(f.height(), 4);
        assert_eq!(f.drop_nulls_in(None).unwrap().height(), 3);
        assert!(matches!(
            plants().drop_nulls_in(Some(&["nope"])),
            Err(FrameError::UnknownColumn(_))
        ));
    }

    #[test]
    fn derive_converts_present_columns_only() {
        fn per_mw(e: Expr) -> Expr {
            e.cast(DataType::Float64) * lit(1000.0)
        }
        let f = df!("cost_per_kw" => ["2.5"], "x" => [0i64]).unwrap();
        let f = f
            .derive(&[("cost_per_kw", "cost_per_mw", per_mw), ("absent", "other", per_mw)])
            .unwrap();
        assert_eq!(f.names(), ["x", "cost_per_mw"]);
        assert_eq!(f.value(0, "cost_per_mw"), Some(Value::Float(2500.0)));
    }

    #[test]
    fn rename_refuses_to_shadow_an_existing_column() {
        let err = plants().rename_columns(&[("name", "plant_id")]).unwrap_err();
        assert!(matches!(err, FrameError::DuplicateColumn(c) if c == "plant_id"));

        let renamed = plants()
            .rename_columns(&[("plant_id", "id"), ("name", "plant_id"), ("gone", "x")])
            .unwrap();
        assert_eq!(renamed.names(), ["id", "plant_id"]);
    }

    #[test]
    fn left_join_keeps_unmatched_left_rows() {
        let right = df!("plant_id" => [2i64, 3], "state" => ["CO", "UT"]).unwrap();
        let joined = plants().join_left(&right, "plant_id").unwrap();
        assert_eq!(joined.names(), ["plant_id", "name", "state"]);
        assert_eq!(joined.height(), 4);
        let states: Vec<Value> = joined.values("state").unwrap();
        assert_eq!(states.iter().filter(|s| **s == Value::text("CO")).count(), 2);
        assert!(!states.contains(&Value::text("UT")));
    }

    #[test]
    fn join_rejects_clashing_columns() {
        let right = df!("plant_id" => [1i64], "name" => ["Other"]).unwrap();
        let err = plants().join_left(&right, "plant_id").unwrap_err();
        assert!(matches!(err, FrameError::DuplicateColumn(c) if c == "name"));
    }

    #[test]
    fn outer_join_appends_unmatched_right_rows() {
        let right = df!("plant_id" => [3i64], "state" => ["UT"]).unwrap();
        let joined = plants().join_outer(&right, "plant_id").unwrap();
        assert_eq!(joined.height(), 5);
        assert_eq!(name_of(&joined, 3), Value::Null);
        assert!(joined.values("plant_id").unwrap().contains(&Value::Int(3)));
    }

    #[test]
    fn concat_unions_columns() {
        let a = df!("a" => [1i64]).unwrap();
        let b = df!("b" => [2i64], "a" => [3i64]).unwrap();
        let c = concat_frames(vec![a, b]).unwrap();
        assert_eq!(c.names(), ["a", "b"]);
        let rows = c.rows().unwrap();
        assert_eq!(rows[0].values(), [Value::Int(1), Value::Null]);
        assert_eq!(rows[1].values(), [Value::Int(3), Value::Int(2)]);
    }

    #[test]
    fn rows_with_nulls_counts_any_null_cell() {
        assert_eq!(plants().rows_with_nulls().unwrap(), 1);
        assert_eq!(plants().project(&["name", "state"]).unwrap().rows_with_nulls().unwrap(), 4);
    }

    #[test]
    fn conform_orders_coerces_and_drops_rows_missing_keys() {
        let raw = df!(
            "plant_name" => [" Comanche ", "Nowhere"],
            "extra" => [9i64, 9],
            "plant_id" => ["470", "n/a"],
            "plant_id_pudl" => [12.0f64, 3.0]
        )
        .unwrap();
        assert_eq!(raw.columns_outside(&PLANTS_EIA923), ["extra"]);
        let f = raw.conform(&PLANTS_EIA923).unwrap();
        assert_eq!(f.names(), ["plant_id", "plant_name", "plant_id_pudl"]);
        assert_eq!(f.height(), 1);
        let row = &f.rows().unwrap()[0];
        assert_eq!(row.values(), [Value::Int(470), Value::text("Comanche"), Value::Int(12)]);
    }

    #[test]
    fn conform_fills_missing_columns_with_typed_nulls() {
        let raw = df!("plant_id" => [7i64], "plant_id_pudl" => [1i64]).unwrap();
        let f = raw.conform(&PLANTS_EIA923).unwrap();
        assert_eq!(f.column("plant_name").unwrap().dtype(), &DataType::String);
        assert_eq!(f.value(0, "plant_name"), Some(Value::Null));
    }
}
