//! FERC Form 1 tables, cleaned and renamed onto their PUDL destinations.

use anyhow::{Context, Result};
use polars::prelude::{col, lit, Column, DataType, Expr, IntoLazy};
use pudl_core::clean::{
    cents_to_dollars, clean_column, kwh_to_mwh, null_blank_strings, numeric, per_kw_to_per_mw,
    per_kwh_to_per_mwh, standardize_plant_names, year,
};
use pudl_core::constants::{
    FERC1_FUEL_STRINGS, FERC1_FUEL_UNIT_STRINGS, FERC1_PLANT_KIND_STRINGS,
    FERC1_TYPE_CONST_STRINGS, FERC_ACCUMULATED_DEPRECIATION, FERC_ELECTRIC_PLANT_ACCOUNTS,
};
use pudl_core::schema::{
    ACCUMULATED_DEPRECIATION_FERC1, FUEL_FERC1, PLANTS_HYDRO_FERC1, PLANTS_PUMPED_STORAGE_FERC1,
    PLANTS_SMALL_FERC1, PLANTS_STEAM_FERC1, PLANT_IN_SERVICE_FERC1, PURCHASED_POWER_FERC1,
};
use pudl_core::{ColumnType, Conversion, DataFrame, FrameError, FrameExt, TableDef};
use pudl_sources::TableSource;
use tracing::debug;

use crate::{Stage, TableLoader};

/// Form bookkeeping columns with no meaning outside the FERC database.
const BOOKKEEPING: [&str; 5] = ["spplmnt_num", "row_number", "row_seq", "row_prvlg", "report_prd"];

/// Rows on `f1_gnrt_plant` per supplement page.
const SMALL_PLANT_ROWS_PER_PAGE: i64 = 46;

/// One FERC 1 source table and how it becomes a PUDL table.
pub struct Ferc1Transform {
    pub source: &'static str,
    pub target: &'static TableDef,
    pub apply: fn(&DataFrame) -> Result<DataFrame, FrameError>,
}

impl std::fmt::Debug for Ferc1Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ferc1Transform")
            .field("source", &self.source)
            .field("target", &self.target.name)
            .finish()
    }
}

/// Every FERC 1 transform, in load order.
pub static FERC1_TRANSFORMS: &[Ferc1Transform] = &[
    Ferc1Transform {
        source: "f1_fuel",
        target: &FUEL_FERC1,
        apply: fuel,
    },
    Ferc1Transform {
        source: "f1_steam",
        target: &PLANTS_STEAM_FERC1,
        apply: steam,
    },
    Ferc1Transform {
        source: "f1_gnrt_plant",
        target: &PLANTS_SMALL_FERC1,
        apply: small_plants,
    },
    Ferc1Transform {
        source: "f1_hydro",
        target: &PLANTS_HYDRO_FERC1,
        apply: hydro,
    },
    Ferc1Transform {
        source: "f1_pumped_storage",
        target: &PLANTS_PUMPED_STORAGE_FERC1,
        apply: pumped_storage,
    },
    Ferc1Transform {
        source: "f1_plant_in_srvce",
        target: &PLANT_IN_SERVICE_FERC1,
        apply: plant_in_service,
    },
    Ferc1Transform {
        source: "f1_purchased_pwr",
        target: &PURCHASED_POWER_FERC1,
        apply: purchased_power,
    },
    Ferc1Transform {
        source: "f1_accumdepr_prvsn",
        target: &ACCUMULATED_DEPRECIATION_FERC1,
        apply: accumulated_depreciation,
    },
];

pub fn transform_for(source: &str) -> Option<&'static Ferc1Transform> {
    FERC1_TRANSFORMS.iter().find(|t| t.source == source)
}

fn has_text(column: &str) -> Expr {
    col(column).is_not_null()
}

fn positive(column: &str) -> Expr {
    numeric(col(column)).gt(lit(0.0))
}

/// Drops bookkeeping columns other than `keep`, trims text to null and
/// standardizes plant names.
fn prepare(frame: &DataFrame, keep: &[&str]) -> Result<DataFrame, FrameError> {
    let drop: Vec<&str> = BOOKKEEPING
        .iter()
        .copied()
        .filter(|c| !keep.contains(c))
        .collect();
    let frame = null_blank_strings(&frame.drop_columns(&drop)?)?;
    standardize_plant_names(&frame, "plant_name")
}

/// `(row_number, id)` pairs for joining form line numbers to their ids.
fn line_ids(lines: &[(i64, &str, &str)], id_column: &str) -> Result<DataFrame, FrameError> {
    let rows: Vec<i64> = lines.iter().map(|(row, _, _)| *row).collect();
    let ids: Vec<&str> = lines.iter().map(|(_, id, _)| *id).collect();
    Ok(DataFrame::new(vec![
        Column::new("row_number".into(), rows),
        Column::new(id_column.into(), ids),
    ])?)
}

/// Replaces form line numbers with the ids in `lines`. Unknown lines get a null id.
fn join_line_ids(
    frame: &DataFrame,
    lines: &[(i64, &str, &str)],
    id_column: &str,
) -> Result<DataFrame, FrameError> {
    frame
        .coerce(&[("row_number", ColumnType::Integer)])?
        .join_left(&line_ids(lines, id_column)?, "row_number")?
        .drop_columns(&["row_number"])
}

const FUEL_CONVERSIONS: &[Conversion] = &[
    ("fuel_cost_kwh", "fuel_cost_per_mwh", per_kwh_to_per_mwh),
    ("fuel_generaton", "fuel_mmbtu_per_mwh", per_kwh_to_per_mwh),
];

const FUEL_RENAMES: &[(&str, &str)] = &[
    ("fuel_quantity", "fuel_qty_burned"),
    ("fuel_avg_heat", "fuel_avg_mmbtu_per_unit"),
    ("fuel_cost_burned", "fuel_cost_per_unit_burned"),
    ("fuel_cost_delvd", "fuel_cost_per_unit_delivered"),
    ("fuel_cost_btu", "fuel_cost_per_mmbtu"),
];

pub fn fuel(raw: &DataFrame) -> Result<DataFrame, FrameError> {
    let frame = prepare(raw, &[])?.filter_by(
        has_text("fuel")
            .and(has_text("plant_name"))
            .and(positive("fuel_quantity")),
    )?;
    let frame = clean_column(&frame, "fuel", FERC1_FUEL_STRINGS)?;
    let frame = clean_column(&frame, "fuel_unit", FERC1_FUEL_UNIT_STRINGS)?;
    // incomplete lines are mostly subtotals; unmapped fuels go with them
    frame
        .derive(FUEL_CONVERSIONS)?
        .rename_columns(FUEL_RENAMES)?
        .project(&FUEL_FERC1.column_names())?
        .drop_nulls_in(None)
}

const STEAM_CONVERSIONS: &[Conversion] = &[
    ("yr_const", "year_constructed", year),
    ("yr_installed", "year_installed", year),
    ("cost_per_kw", "cost_per_mw", per_kw_to_per_mw),
    ("net_generation", "net_generation_mwh", kwh_to_mwh),
    ("expns_kwh", "expns_per_mwh", per_kwh_to_per_mwh),
];

const STEAM_RENAMES: &[(&str, &str)] = &[
    ("tot_capacity", "total_capacity_mw"),
    ("peak_demand", "peak_demand_mw"),
    ("plnt_capability", "plant_capability_mw"),
    ("when_limited", "water_limited_mw"),
    ("when_not_limited", "not_water_limited_mw"),
    ("avg_num_of_emp", "avg_num_employees"),
    ("cost_of_plant_to", "cost_of_plant_total"),
    ("expns_steam_othr", "expns_steam_other"),
    ("expns_engnr", "expns_engineering"),
    ("tot_prdctn_expns", "expns_production_total"),
];

pub fn steam(raw: &DataFrame) -> Result<DataFrame, FrameError> {
    let frame = prepare(raw, &[])?
        .filter_by(positive("net_generation").and(has_text("plant_name")))?;
    let frame = clean_column(&frame, "type_const", FERC1_TYPE_CONST_STRINGS)?;
    let frame = clean_column(&frame, "plant_kind", FERC1_PLANT_KIND_STRINGS)?;
    frame
        .derive(STEAM_CONVERSIONS)?
        .rename_columns(STEAM_RENAMES)
}

const PLANT_KEYS: [&str; 3] = ["respondent_id", "report_year", "plant_name"];

const HYDRO_CONVERSIONS: &[Conversion] = &[
    ("yr_const", "year_constructed", year),
    ("yr_installed", "year_installed", year),
    ("net_generation", "net_generation_mwh", kwh_to_mwh),
    ("cost_per_kw", "cost_per_mw", per_kw_to_per_mw),
    ("expns_kwh", "expns_per_mwh", per_kwh_to_per_mwh),
];

const HYDRO_RENAMES: &[(&str, &str)] = &[
    ("project_no", "project_number"),
    ("plant_const", "plant_construction"),
    ("tot_capacity", "total_capacity_mw"),
    ("peak_demand", "peak_demand_mw"),
    ("plant_hours", "plant_hours_connected_while_generating"),
    ("favorable_cond", "net_capacity_favorable_conditions_mw"),
    ("adverse_cond", "net_capacity_adverse_conditions_mw"),
    ("avg_num_of_emp", "avg_number_employees"),
    ("cost_of_land", "cost_land"),
    ("expns_engnr", "expns_engineering"),
    ("expns_total", "expns_production_total"),
];

pub fn hydro(raw: &DataFrame) -> Result<DataFrame, FrameError> {
    prepare(raw, &[])?
        .filter_by(has_text("plant_name"))?
        .derive(HYDRO_CONVERSIONS)?
        .rename_columns(HYDRO_RENAMES)?
        .drop_nulls_in(Some(&PLANT_KEYS[..]))
}

const PUMPED_STORAGE_CONVERSIONS: &[Conversion] = &[
    ("yr_const", "year_constructed", year),
    ("yr_installed", "year_installed", year),
    ("net_generation", "net_generation_mwh", kwh_to_mwh),
    ("energy_used", "energy_used_for_pumping_mwh", kwh_to_mwh),
    ("net_load", "net_load_mwh", kwh_to_mwh),
    ("cost_per_kw", "cost_per_mw", per_kw_to_per_mw),
    ("expns_kwh", "expns_per_mwh", per_kwh_to_per_mwh),
];

const PUMPED_STORAGE_RENAMES: &[(&str, &str)] = &[
    ("project_no", "project_number"),
    ("tot_capacity", "total_capacity_mw"),
    ("peak_demand", "peak_demand_mw"),
    ("plant_hours", "plant_hours_connected_while_generating"),
    ("plant_capability", "plant_capability_mw"),
    ("avg_num_of_emp", "avg_number_employees"),
    ("cost_wheels", "cost_wheels_turbines_generators"),
    ("cost_electric", "cost_equipment"),
    ("cost_misc_eqpmnt", "cost_equipment_misc"),
    ("cost_of_plant", "cost_plant_total"),
    ("expns_water_pwr", "expns_water_for_pwr"),
    ("expns_pump_stg", "expns_pump_storage"),
    ("expns_misc_power", "expns_generation_misc"),
    ("expns_engnr", "expns_engineering"),
    ("expns_misc_plnt", "expns_misc_plant"),
    ("expns_producton", "expns_production_before_pumping"),
    ("tot_prdctn_exns", "expns_production_total"),
];

pub fn pumped_storage(raw: &DataFrame) -> Result<DataFrame, FrameError> {
    prepare(raw, &[])?
        .filter_by(has_text("plant_name"))?
        .derive(PUMPED_STORAGE_CONVERSIONS)?
        .rename_columns(PUMPED_STORAGE_RENAMES)?
        .drop_nulls_in(Some(&PLANT_KEYS[..]))
}

const SMALL_PLANT_CONVERSIONS: &[Conversion] = &[
    ("yr_constructed", "year_constructed", year),
    ("fuel_cost", "fuel_cost_per_mmbtu", cents_to_dollars),
];

const SMALL_PLANT_RENAMES: &[(&str, &str)] = &[
    ("capacity_rating", "total_capacity_mw"),
    ("net_demand", "peak_demand_mw"),
    ("net_generation", "net_generation_mwh"),
    ("plant_cost", "cost_of_plant_total"),
    ("plant_cost_mw", "cost_of_plant_per_mw"),
    ("operation", "cost_of_operation"),
    ("expns_maint", "expns_maintenance"),
];

pub fn small_plants(raw: &DataFrame) -> Result<DataFrame, FrameError> {
    let frame = prepare(raw, &["spplmnt_num", "row_number"])?;
    let frame = clean_column(&frame, "kind_of_fuel", FERC1_FUEL_STRINGS)?;
    // supplement pages restart row numbers; page and row together number the record
    let record_number = (lit(SMALL_PLANT_ROWS_PER_PAGE) * col("spplmnt_num").cast(DataType::Int64)
        + col("row_number").cast(DataType::Int64))
    .alias("record_number");
    frame
        .lazy()
        .with_column(record_number)
        .collect()?
        .drop_columns(&["spplmnt_num", "row_number"])?
        .derive(SMALL_PLANT_CONVERSIONS)?
        .rename_columns(SMALL_PLANT_RENAMES)
}

pub fn plant_in_service(raw: &DataFrame) -> Result<DataFrame, FrameError> {
    let frame = prepare(raw, &["row_number"])?;
    join_line_ids(&frame, FERC_ELECTRIC_PLANT_ACCOUNTS, "ferc_account_id")?.rename_columns(&[
        ("begin_yr_bal", "beginning_year_balance"),
        ("addition", "additions"),
        ("yr_end_bal", "year_end_balance"),
    ])
}

pub fn purchased_power(raw: &DataFrame) -> Result<DataFrame, FrameError> {
    prepare(raw, &[])?
        .drop_nulls_in(Some(&["sttstcl_clssfctn", "rtsched_trffnbr"][..]))?
        .rename_columns(&[
            ("athrty_co_name", "authority_company_name"),
            ("sttstcl_clssfctn", "statistical_classification"),
            ("rtsched_trffnbr", "rate_schedule_tariff_number"),
            ("avgmth_bill_dmnd", "average_billing_demand"),
            ("avgmth_ncp_dmnd", "average_monthly_ncp_demand"),
            ("avgmth_cp_dmnd", "average_monthly_cp_demand"),
            ("mwh_recv", "mwh_received"),
            ("mwh_delvd", "mwh_delivered"),
            ("dmnd_charges", "demand_charges"),
            ("erg_charges", "energy_charges"),
            ("othr_charges", "other_charges"),
            ("settlement_tot", "settlement_total"),
        ])
}

pub fn accumulated_depreciation(raw: &DataFrame) -> Result<DataFrame, FrameError> {
    let frame = prepare(raw, &["row_number"])?.drop_columns(&["item"])?;
    join_line_ids(&frame, FERC_ACCUMULATED_DEPRECIATION, "line_id")
}

/// Reads and transforms one FERC 1 table without loading it.
pub async fn extract_ferc1_table(
    source: &dyn TableSource,
    transform: &Ferc1Transform,
    years: &[i64],
) -> Result<DataFrame> {
    let raw = source
        .read_table(transform.source, years)
        .await
        .with_context(|| format!("reading FERC 1 table {}", transform.source))?;
    debug!(table = transform.source, rows = raw.height(), "read raw FERC 1 rows");
    (transform.apply)(&raw).with_context(|| format!("transforming {}", transform.source))
}

/// Extracts, transforms and loads one FERC 1 table. Returns the transformed
/// frame for the plant audit.
pub async fn ingest_ferc1_table(
    source: &dyn TableSource,
    loader: &mut TableLoader<'_>,
    transform: &Ferc1Transform,
    years: &[i64],
) -> Result<DataFrame> {
    let frame = extract_ferc1_table(source, transform, years).await?;
    loader.load(Stage::Ferc1, transform.target, &frame).await?;
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pudl_core::constants::FERC1_WORKING_TABLES;
    use pudl_core::{text_frame, Row, Value};

    /// A raw text frame; empty cells are null once a transform trims them.
    fn frame(columns: &[&str], rows: &[&[&str]]) -> DataFrame {
        let columns: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
        let rows = rows
            .iter()
            .map(|r| r.iter().map(|c| Some(c.to_string())).collect())
            .collect();
        text_frame(&columns, rows).unwrap()
    }

    fn row_where(frame: &DataFrame, column: &str, value: Value) -> Row {
        frame
            .rows()
            .unwrap()
            .into_iter()
            .find(|r| r.get(column) == &value)
            .unwrap_or_else(|| panic!("no row with {column} = {value}"))
    }

    fn t(s: &str) -> Value {
        Value::text(s)
    }

    #[test]
    fn transforms_cover_working_tables_in_order() {
        let sources: Vec<_> = FERC1_TRANSFORMS.iter().map(|t| t.source).collect();
        assert_eq!(sources, FERC1_WORKING_TABLES);
        assert!(transform_for("f1_respondent_id").is_none());
    }

    #[test]
    fn fuel_keeps_complete_burned_fuel_lines() {
        let columns = [
            "respondent_id",
            "report_year",
            "spplmnt_num",
            "row_number",
            "row_seq",
            "row_prvlg",
            "report_prd",
            "plant_name",
            "fuel",
            "fuel_unit",
            "fuel_quantity",
            "fuel_avg_heat",
            "fuel_cost_delvd",
            "fuel_cost_burned",
            "fuel_cost_btu",
            "fuel_cost_kwh",
            "fuel_generaton",
        ];
        let fixed = ["Tons", "17.9", "40.1", "39.8", "2.22", "0.0245", "0.0111"];
        let line = |name: &'static str, fuel: &'static str, qty: &'static str| {
            let mut cells = vec!["134", "2015", "0", "3", "1", " ", "12", name, fuel];
            cells.push(fixed[0]);
            cells.push(qty);
            cells.extend_from_slice(&fixed[1..]);
            cells
        };
        let lines = [
            line(" CHEROKEE station", "Coal", "1200"),
            line("Cherokee", "Coal", "0"),
            line("", "Coal", "10"),
            line("Cherokee", "moonbeams", "10"),
        ];
        let rows: Vec<&[&str]> = lines.iter().map(Vec::as_slice).collect();
        let out = fuel(&frame(&columns, &rows)).unwrap();
        assert_eq!(out.height(), 1);
        assert_eq!(out.names(), FUEL_FERC1.column_names());
        assert_eq!(out.value(0, "plant_name"), Some(t("Cherokee Station")));
        assert_eq!(out.value(0, "fuel"), Some(t("coal")));
        assert_eq!(out.value(0, "fuel_unit"), Some(t("ton")));
        assert_eq!(out.value(0, "fuel_qty_burned"), Some(t("1200")));
        let per_mwh = out.value(0, "fuel_cost_per_mwh").and_then(|v| v.as_f64()).unwrap();
        assert!((per_mwh - 24.5).abs() < 1e-9);
    }

    #[test]
    fn steam_converts_to_megawatt_units() {
        let raw = frame(
            &[
                "respondent_id",
                "report_year",
                "row_number",
                "plant_name",
                "type_const",
                "plant_kind",
                "yr_const",
                "yr_installed",
                "net_generation",
                "cost_per_kw",
                "expns_kwh",
                "tot_capacity",
            ],
            &[
                &[
                    "145", "2015", "4", "comanche", "Outdoor", "Steam", "1973", "n/a", "2500000",
                    "650.5", "0.031", "1410.0",
                ],
                &[
                    "145", "2015", "5", "idle", "Outdoor", "Steam", "1960", "1960", "0", "1", "1",
                    "50",
                ],
            ],
        );
        let out = steam(&raw).unwrap();
        assert_eq!(out.height(), 1);
        assert!(!out.has_column("row_number"));
        assert_eq!(out.value(0, "plant_name"), Some(t("Comanche")));
        assert_eq!(out.value(0, "year_constructed"), Some(Value::Int(1973)));
        assert_eq!(out.value(0, "year_installed"), Some(Value::Null));
        assert_eq!(out.value(0, "net_generation_mwh"), Some(Value::Float(2500.0)));
        assert_eq!(out.value(0, "cost_per_mw"), Some(Value::Float(650500.0)));
        assert_eq!(out.value(0, "total_capacity_mw"), Some(t("1410.0")));
        assert!(out.columns_outside(&PLANTS_STEAM_FERC1).is_empty());
    }

    #[test]
    fn pumped_storage_keeps_converted_columns() {
        let raw = frame(
            &[
                "respondent_id",
                "report_year",
                "plant_name",
                "net_generation",
                "energy_used",
                "net_load",
                "cost_per_kw",
                "expns_kwh",
                "tot_prdctn_exns",
            ],
            &[
                &[
                    "159",
                    "2015",
                    "Cabin Creek",
                    "-12000",
                    "90000",
                    "102000",
                    "100",
                    "0.002",
                    "5000",
                ],
                &["159", "2015", " ", "1", "1", "1", "1", "1", "1"],
            ],
        );
        let out = pumped_storage(&raw).unwrap();
        assert_eq!(out.height(), 1);
        assert_eq!(out.value(0, "net_generation_mwh"), Some(Value::Float(-12.0)));
        assert_eq!(out.value(0, "energy_used_for_pumping_mwh"), Some(Value::Float(90.0)));
        assert_eq!(out.value(0, "net_load_mwh"), Some(Value::Float(102.0)));
        assert_eq!(out.value(0, "cost_per_mw"), Some(Value::Float(100000.0)));
        assert_eq!(out.value(0, "expns_production_total"), Some(t("5000")));
        assert!(!out.has_column("year_constructed"));
    }

    #[test]
    fn pumped_storage_years_are_coerced_when_present() {
        let raw = frame(
            &["respondent_id", "report_year", "plant_name", "yr_const", "yr_installed"],
            &[&["159", "2015", "cabin creek", "1967", "1967.5"]],
        );
        let out = pumped_storage(&raw).unwrap();
        assert_eq!(out.value(0, "year_constructed"), Some(Value::Int(1967)));
        assert_eq!(out.value(0, "year_installed"), Some(Value::Null));
        assert!(!out.has_column("yr_const"));
    }

    #[test]
    fn hydro_drops_rows_without_keys() {
        let raw = frame(
            &[
                "respondent_id",
                "report_year",
                "plant_name",
                "net_generation",
                "cost_per_kw",
                "expns_kwh",
                "yr_const",
                "yr_installed",
                "project_no",
            ],
            &[
                &["45", "2015", "glen canyon", "4000", "", "", "1964", "1966", "12"],
                &["", "2015", "orphan", "4000", "1", "1", "1964", "1966", "13"],
            ],
        );
        let out = hydro(&raw).unwrap();
        assert_eq!(out.height(), 1);
        assert_eq!(out.value(0, "plant_name"), Some(t("Glen Canyon")));
        assert_eq!(out.value(0, "net_generation_mwh"), Some(Value::Float(4.0)));
        assert_eq!(out.value(0, "cost_per_mw"), Some(Value::Null));
        assert_eq!(out.value(0, "project_number"), Some(t("12")));
    }

    #[test]
    fn small_plants_number_records_across_pages() {
        let raw = frame(
            &[
                "respondent_id",
                "report_year",
                "spplmnt_num",
                "row_number",
                "row_seq",
                "plant_name",
                "kind_of_fuel",
                "yr_constructed",
                "fuel_cost",
                "capacity_rating",
            ],
            &[&["7", "2015", "2", "11", "1", "pawnee ct", "gas", "19xx", "350", "20"]],
        );
        let out = small_plants(&raw).unwrap();
        assert_eq!(out.value(0, "record_number"), Some(Value::Int(103)));
        assert_eq!(out.value(0, "fuel_cost_per_mmbtu"), Some(Value::Float(3.5)));
        assert_eq!(out.value(0, "kind_of_fuel"), Some(t("gas")));
        assert_eq!(out.value(0, "year_constructed"), Some(Value::Null));
        assert_eq!(out.value(0, "total_capacity_mw"), Some(t("20")));
        assert!(!out.has_column("spplmnt_num"));
        assert!(!out.has_column("row_seq"));
    }

    #[test]
    fn line_numbers_become_account_ids() {
        let (row, account, _) = FERC_ELECTRIC_PLANT_ACCOUNTS[3];
        let row = row.to_string();
        let raw = frame(
            &[
                "respondent_id",
                "report_year",
                "row_number",
                "row_seq",
                "begin_yr_bal",
                "addition",
                "yr_end_bal",
            ],
            &[
                &["1", "2015", row.as_str(), "1", "10", "2", "12"],
                &["1", "2015", "999", "2", "20", "2", "22"],
            ],
        );
        let out = plant_in_service(&raw).unwrap();
        assert!(!out.has_column("row_number"));
        let known = row_where(&out, "beginning_year_balance", t("10"));
        assert_eq!(known.get("ferc_account_id"), &t(account));
        assert_eq!(known.get("additions"), &t("2"));
        let unknown = row_where(&out, "beginning_year_balance", t("20"));
        assert_eq!(unknown.get("ferc_account_id"), &Value::Null);

        let (row, line, _) = FERC_ACCUMULATED_DEPRECIATION[0];
        let row = row.to_string();
        let raw = frame(
            &["respondent_id", "report_year", "row_number", "item", "total_cde"],
            &[&["1", "2015", row.as_str(), "Balance", "100"]],
        );
        let out = accumulated_depreciation(&raw).unwrap();
        assert_eq!(out.names(), ["respondent_id", "report_year", "total_cde", "line_id"]);
        assert_eq!(out.value(0, "line_id"), Some(t(line)));
    }

    #[test]
    fn purchased_power_needs_classification_and_tariff() {
        let raw = frame(
            &[
                "respondent_id",
                "report_year",
                "athrty_co_name",
                "sttstcl_clssfctn",
                "rtsched_trffnbr",
                "mwh_recv",
            ],
            &[
                &["9", "2015", "Tri-State", "LF", "FERC 123", "10"],
                &["9", "2015", "Subtotal", "  ", "FERC 123", "10"],
            ],
        );
        let out = purchased_power(&raw).unwrap();
        assert_eq!(out.height(), 1);
        assert_eq!(out.value(0, "statistical_classification"), Some(t("LF")));
        assert_eq!(out.value(0, "mwh_received"), Some(t("10")));
    }
}
