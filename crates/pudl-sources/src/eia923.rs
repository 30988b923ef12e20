//! EIA Form 923 spreadsheet pages, exported as one CSV per page per year.

use std::collections::BTreeMap;
use std::path::Path;

use polars::prelude::{col, concat, lit, DataType, Expr, IntoLazy, NamedFrom, Series, UnionArgs, NULL};
use pudl_core::constants::MONTH_NAMES;
use pudl_core::{concat_frames, DataFrame, FrameError, FrameExt};
use tracing::debug;

use crate::{read_csv_frame, SourceError};

/// Snake-cases a spreadsheet heading: `"MMBtuPer_Unit\nJanuary"` becomes
/// `mmbtuper_unit_january`, `"Net Generation\n(Megawatthours)"` becomes
/// `net_generation_megawatthours`.
pub fn normalize_header(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.trim().chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
        } else if (c.is_whitespace() || c == '_' || c == '-' || c == '/') && !out.ends_with('_') {
            out.push('_');
        }
    }
    out.trim_matches('_').to_string()
}

/// Reads `page` for every year in `years` from `<dir>/<year>/<page>.csv` and
/// stacks the years. Headers are normalized, and each row carries its
/// `report_year`.
pub fn read_page(dir: &Path, page: &str, years: &[i64]) -> Result<DataFrame, SourceError> {
    let mut frames = Vec::with_capacity(years.len());
    for &year in years {
        let path = dir.join(year.to_string()).join(format!("{page}.csv"));
        if !path.is_file() {
            return Err(SourceError::MissingPage {
                page: page.to_string(),
                year,
                path,
            });
        }
        let raw = read_csv_frame(&path)?;
        let renames: Vec<(String, String)> = raw
            .names()
            .into_iter()
            .map(|c| (c.to_string(), normalize_header(c)))
            .collect();
        let pairs: Vec<(&str, &str)> = renames
            .iter()
            .map(|(a, b)| (a.as_str(), b.as_str()))
            .collect();
        // the year cell repeats what the directory already says
        let mut frame = raw
            .rename_columns(&pairs)?
            .drop_columns(&["year", "report_year"])?;
        let rows = frame.height();
        frame
            .with_column(Series::new("report_year".into(), vec![year; rows]))
            .map_err(FrameError::from)?;
        debug!(page, year, rows, "read EIA 923 page");
        frames.push(frame);
    }
    Ok(concat_frames(frames)?)
}

/// Splits a month-suffixed column name into its base name and month number.
fn month_suffix(column: &str) -> Option<(&str, i64)> {
    MONTH_NAMES.iter().zip(1i64..).find_map(|(name, month)| {
        column
            .strip_suffix(name)
            .and_then(|base| base.strip_suffix('_'))
            .filter(|base| !base.is_empty())
            .map(|base| (base, month))
    })
}

/// Turns one row per plant-year with `<field>_january` .. `<field>_december`
/// columns into twelve rows per plant-year with a `month` column. Columns
/// without a month suffix are repeated on every monthly row.
pub fn yearly_to_monthly(frame: &DataFrame) -> Result<DataFrame, FrameError> {
    let mut fixed: Vec<&str> = Vec::new();
    let mut bases: Vec<&str> = Vec::new();
    // month -> (base, source column)
    let mut months: BTreeMap<i64, Vec<(&str, &str)>> = BTreeMap::new();
    for column in frame.names() {
        match month_suffix(column) {
            Some((base, month)) => {
                if !bases.contains(&base) {
                    bases.push(base);
                }
                months.entry(month).or_default().push((base, column));
            }
            None => fixed.push(column),
        }
    }
    if months.is_empty() {
        return Ok(frame.clone());
    }
    if let Some(clash) = fixed.iter().find(|c| **c == "month" || bases.contains(*c)) {
        return Err(FrameError::DuplicateColumn(clash.to_string()));
    }

    // a base missing in some month is null there, typed like its other months
    let mut base_types = BTreeMap::new();
    for (base, source) in months.values().flatten() {
        if !base_types.contains_key(base) {
            base_types.insert(*base, frame.column(source)?.dtype().clone());
        }
    }

    let per_month = months
        .iter()
        .map(|(month, sources)| {
            let mut exprs: Vec<Expr> = fixed.iter().map(|c| col(*c)).collect();
            for base in &bases {
                let cell = match sources.iter().find(|(b, _)| b == base) {
                    Some((_, source)) => col(*source),
                    None => {
                        let dtype = base_types.get(base).cloned().unwrap_or(DataType::String);
                        lit(NULL).cast(dtype)
                    }
                };
                exprs.push(cell.alias(*base));
            }
            exprs.push(lit(*month).cast(DataType::Int64).alias("month"));
            frame.clone().lazy().select(exprs)
        })
        .collect::<Vec<_>>();
    Ok(concat(per_month, UnionArgs::default())?.collect()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;
    use pudl_core::Value;

    #[test]
    fn headers_are_snake_cased() {
        assert_eq!(normalize_header("Plant Id"), "plant_id");
        assert_eq!(normalize_header("MMBtuPer_Unit\nJanuary"), "mmbtuper_unit_january");
        assert_eq!(
            normalize_header("Net Generation\n(Megawatthours)"),
            "net_generation_megawatthours"
        );
        assert_eq!(
            normalize_header("Combined Heat And\nPower Plant"),
            "combined_heat_and_power_plant"
        );
        assert_eq!(normalize_header("  AER\nFuel Type Code "), "aer_fuel_type_code");
    }

    #[test]
    fn month_suffixes_need_a_base() {
        assert_eq!(month_suffix("netgen_march"), Some(("netgen", 3)));
        assert_eq!(
            month_suffix("quantity_of_fuel_consumed_may"),
            Some(("quantity_of_fuel_consumed", 5))
        );
        assert_eq!(month_suffix("march"), None);
        assert_eq!(month_suffix("net_generation_year_to_date"), None);
    }

    #[test]
    fn unpivots_months_and_repeats_fixed_columns() {
        let f = df!(
            "plant_id" => [3i64],
            "netgen_january" => ["10"],
            "quantity_january" => ["1"],
            "netgen_february" => ["20"],
            "quantity_february" => ["."]
        )
        .unwrap();
        let m = yearly_to_monthly(&f).unwrap();
        assert_eq!(m.names(), ["plant_id", "netgen", "quantity", "month"]);
        assert_eq!(m.height(), 2);
        let feb = m
            .rows()
            .unwrap()
            .into_iter()
            .find(|r| r.get("month") == &Value::Int(2))
            .unwrap();
        assert_eq!(
            feb.values(),
            [Value::Int(3), Value::text("20"), Value::text("."), Value::Int(2)]
        );
    }

    #[test]
    fn a_base_missing_in_one_month_is_null_there() {
        let f = df!(
            "plant_id" => [3i64],
            "netgen_january" => [10.0f64],
            "quantity_january" => [1.0f64],
            "netgen_february" => [20.0f64]
        )
        .unwrap();
        let m = yearly_to_monthly(&f).unwrap();
        let quantities: Vec<Value> = m
            .filter_by(col("month").eq(lit(2i64)))
            .unwrap()
            .values("quantity")
            .unwrap();
        assert_eq!(quantities, [Value::Null]);
    }

    #[test]
    fn month_column_clash_is_an_error() {
        let f = df!("month" => [1i64], "netgen_january" => [1i64]).unwrap();
        let err = yearly_to_monthly(&f).unwrap_err();
        assert!(matches!(err, FrameError::DuplicateColumn(c) if c == "month"));
    }

    #[test]
    fn read_page_stacks_years() {
        let dir = tempfile::tempdir().unwrap();
        for (year, id) in [(2014, "1"), (2015, "2")] {
            let ydir = dir.path().join(year.to_string());
            std::fs::create_dir_all(&ydir).unwrap();
            let body = format!("Plant Id,YEAR\n{id},{year}\n");
            std::fs::write(ydir.join("plant_frame.csv"), body).unwrap();
        }
        let f = read_page(dir.path(), "plant_frame", &[2014, 2015]).unwrap();
        assert_eq!(f.names(), ["plant_id", "report_year"]);
        assert_eq!(f.rows().unwrap()[1].values(), [Value::text("2"), Value::Int(2015)]);

        let err = read_page(dir.path(), "plant_frame", &[2016]).unwrap_err();
        assert!(matches!(err, SourceError::MissingPage { year: 2016, .. }));
    }
}
