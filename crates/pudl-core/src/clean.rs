//! String canonicalization and unit conversion shared by every transform.

use polars::prelude::{lit, when, DataFrame, DataType, Expr, NULL};

use crate::frame::{FrameError, FrameExt};

/// Canonical category followed by the raw spellings that map onto it.
pub type CategoryMap = &'static [(&'static str, &'static [&'static str])];

pub const KW_PER_MW: f64 = 1000.0;
pub const CENTS_PER_DOLLAR: f64 = 100.0;

/// EIA 923 writes `.` in cells it has no value for.
pub const EIA_MISSING: &str = ".";

/// Trim, lowercase and collapse inner runs of whitespace to a single space.
pub fn normalize_category(s: &str) -> String {
    collapse_whitespace(&s.to_lowercase())
}

pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Maps a free-text value onto its canonical category. Strings with no entry in
/// `map` map to `None`.
pub fn clean_strings(raw: &str, map: CategoryMap) -> Option<&'static str> {
    let raw = normalize_category(raw);
    if raw.is_empty() {
        return None;
    }
    map.iter()
        .find(|(canonical, variants)| *canonical == raw || variants.iter().any(|v| *v == raw))
        .map(|(canonical, _)| *canonical)
}

/// Replaces every cell of `column` with its canonical category, or null.
pub fn clean_column(
    frame: &DataFrame,
    column: &str,
    map: CategoryMap,
) -> Result<DataFrame, FrameError> {
    frame.map_text(column, &|raw| clean_strings(raw, map).map(str::to_string))
}

/// Title casing as Python's `str.title` does it: a letter following a non-letter
/// starts a word and is uppercased, every other letter is lowercased.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_letter = true;
        } else {
            out.push(c);
            prev_letter = false;
        }
    }
    out
}

/// Plant names are join keys between the mapping sheet and FERC 1 tables, so
/// both sides go through this.
pub fn standardize_plant_name(s: &str) -> String {
    title_case(s.trim())
}

/// Standardizes a name column in place; blank names become null.
pub fn standardize_plant_names(frame: &DataFrame, column: &str) -> Result<DataFrame, FrameError> {
    frame.map_text(column, &|raw| {
        let name = standardize_plant_name(raw);
        (!name.is_empty()).then_some(name)
    })
}

/// Numeric view of a column. Text that does not parse is null.
pub fn numeric(e: Expr) -> Expr {
    e.cast(DataType::Float64)
}

/// Four digit years only; anything else is null.
pub fn year(e: Expr) -> Expr {
    let v = numeric(e);
    let is_year = v
        .clone()
        .gt_eq(lit(1000.0))
        .and(v.clone().lt_eq(lit(9999.0)))
        .and(v.clone().cast(DataType::Int64).cast(DataType::Float64).eq(v.clone()));
    when(is_year)
        .then(v.cast(DataType::Int64))
        .otherwise(lit(NULL).cast(DataType::Int64))
}

pub fn kwh_to_mwh(e: Expr) -> Expr {
    numeric(e) / lit(KW_PER_MW)
}

pub fn per_kw_to_per_mw(e: Expr) -> Expr {
    numeric(e) * lit(KW_PER_MW)
}

pub fn per_kwh_to_per_mwh(e: Expr) -> Expr {
    numeric(e) * lit(KW_PER_MW)
}

pub fn cents_to_dollars(e: Expr) -> Expr {
    numeric(e) / lit(CENTS_PER_DOLLAR)
}

pub fn is_eia_missing(cell: &str) -> bool {
    cell.trim() == EIA_MISSING
}

/// Nulls out every EIA 923 missing marker in the frame.
pub fn null_eia_missing(frame: &DataFrame) -> Result<DataFrame, FrameError> {
    frame.map_all_text(&|cell| (!is_eia_missing(cell)).then(|| cell.to_string()))
}

/// Trims every text cell; empty and whitespace-only text becomes null.
pub fn null_blank_strings(frame: &DataFrame) -> Result<DataFrame, FrameError> {
    frame.map_all_text(&|cell| {
        let t = cell.trim();
        (!t.is_empty()).then(|| t.to_string())
    })
}

#[cfg(test)]
mod tests {
    use polars::df;
    use polars::prelude::col;

    use super::*;
    use crate::value::Value;

    const FUELS: CategoryMap = &[
        ("coal", &["coal", "bit coal", "coal-subbit"]),
        ("gas", &["natural gas", "gas", "ng"]),
    ];

    fn converted(values: &[&str], f: fn(Expr) -> Expr) -> Vec<Value> {
        let frame = df!("v" => values).unwrap();
        frame.derive(&[("v", "v", f)]).unwrap().values("v").unwrap()
    }

    #[test]
    fn clean_strings_normalizes_before_lookup() {
        assert_eq!(clean_strings("  Natural   GAS ", FUELS), Some("gas"));
        assert_eq!(clean_strings("BIT COAL", FUELS), Some("coal"));
        assert_eq!(clean_strings("coal", FUELS), Some("coal"));
    }

    #[test]
    fn unmapped_strings_become_null() {
        assert_eq!(clean_strings("unobtainium", FUELS), None);
        assert_eq!(clean_strings("   ", FUELS), None);
        let f = df!("fuel" => [Some("ng"), Some("wood?"), None]).unwrap();
        let f = clean_column(&f, "fuel", FUELS).unwrap();
        assert_eq!(
            f.values("fuel").unwrap(),
            [Value::text("gas"), Value::Null, Value::Null]
        );
    }

    #[test]
    fn title_case_follows_word_boundaries() {
        assert_eq!(title_case("CHOLLA  plant"), "Cholla  Plant");
        assert_eq!(title_case("o'brien ct-2"), "O'Brien Ct-2");
        assert_eq!(title_case("4th street"), "4Th Street");
        assert_eq!(standardize_plant_name("  JIM BRIDGER "), "Jim Bridger");
    }

    #[test]
    fn unit_conversions() {
        assert_eq!(converted(&["2500"], kwh_to_mwh), [Value::Float(2.5)]);
        assert_eq!(converted(&["1.5"], per_kw_to_per_mw), [Value::Float(1500.0)]);
        assert_eq!(converted(&["0.02"], per_kwh_to_per_mwh), [Value::Float(20.0)]);
        assert_eq!(converted(&["250"], cents_to_dollars), [Value::Float(2.5)]);
        assert_eq!(converted(&["n/a"], kwh_to_mwh), [Value::Null]);
    }

    #[test]
    fn years_outside_four_digits_are_null() {
        assert_eq!(
            converted(&["1975.0", "75", "19xx", "1975.5"], year),
            [Value::Int(1975), Value::Null, Value::Null, Value::Null]
        );
    }

    #[test]
    fn eia_missing_marker() {
        let f = df!("a" => ["."], "b" => ["1.5"]).unwrap();
        let f = null_eia_missing(&f).unwrap();
        assert_eq!(f.value(0, "a"), Some(Value::Null));
        assert_eq!(f.value(0, "b"), Some(Value::text("1.5")));
    }

    #[test]
    fn blank_text_is_trimmed_to_null() {
        let f = df!("a" => [" x ", "  "]).unwrap();
        let f = null_blank_strings(&f).unwrap();
        assert_eq!(f.values("a").unwrap(), [Value::text("x"), Value::Null]);
        let plants = df!("name" => ["  JIM BRIDGER "]).unwrap();
        let plants = standardize_plant_names(&plants, "name").unwrap();
        assert_eq!(plants.value(0, "name"), Some(Value::text("Jim Bridger")));
        assert!(plants.filter_by(col("name").is_null()).unwrap().is_empty());
    }
}
