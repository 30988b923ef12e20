//! EIA Form 923 pages, reshaped into the PUDL EIA 923 tables.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use polars::prelude::{col, lit, Expr};
use pudl_core::clean::null_eia_missing;
use pudl_core::schema::{
    BOILERS_EIA923, BOILER_FUEL_EIA923, COALMINE_INFO_EIA923, FUEL_RECEIPTS_COSTS_EIA923,
    GENERATION_EIA923, GENERATION_FUEL_EIA923, GENERATORS_EIA923, PLANT_INFO_EIA923,
};
use pudl_core::{ColumnType, DataFrame, FrameError, FrameExt, TableDef};
use pudl_sources::{read_page, yearly_to_monthly};
use tracing::{debug, info, warn};

use crate::{Stage, TableLoad, TableLoader};

/// Plant id EIA uses for state-level fuel increments on the generation page.
pub const STATE_INCREMENT_PLANT_ID: i64 = 99999;

/// Placeholder plant id on the fuel receipts page.
pub const UNKNOWN_RECEIPT_PLANT_ID: i64 = 8899;

/// Plant and operator attributes repeated on every monthly page.
const DESCRIPTIVE: [&str; 10] = [
    "combined_heat_and_power_plant",
    "plant_name",
    "operator_name",
    "operator_id",
    "plant_state",
    "census_region",
    "nerc_region",
    "naics_code",
    "sector_number",
    "sector_name",
];

/// Pages each destination table is built from.
pub fn pages_for(table: &str) -> &'static [&'static str] {
    match table {
        "plant_info_eia923" => &["plant_frame", "generation_fuel"],
        "generation_fuel_eia923" => &["generation_fuel"],
        "boiler_fuel_eia923" => &["boiler_fuel"],
        "generation_eia923" => &["generator"],
        "fuel_receipts_costs_eia923" => &["fuel_receipts_costs"],
        _ => &[],
    }
}

/// Pages read for a run, each read once however many tables use it.
#[derive(Debug, Default)]
pub struct Eia923Pages {
    pages: BTreeMap<&'static str, DataFrame>,
}

impl Eia923Pages {
    pub fn read(dir: &Path, tables: &[String], years: &[i64]) -> Result<Self> {
        let mut pages = BTreeMap::new();
        for page in tables.iter().flat_map(|t| pages_for(t)) {
            if pages.contains_key(page) {
                continue;
            }
            let frame = read_page(dir, page, years)
                .with_context(|| format!("reading EIA 923 page {page}"))?;
            info!(page, rows = frame.height(), "read EIA 923 page");
            pages.insert(*page, frame);
        }
        Ok(Self { pages })
    }

    pub fn from_frames(frames: impl IntoIterator<Item = (&'static str, DataFrame)>) -> Self {
        Self {
            pages: frames.into_iter().collect(),
        }
    }

    pub fn page(&self, name: &str) -> Result<&DataFrame> {
        self.pages
            .get(name)
            .ok_or_else(|| anyhow!("EIA 923 page {name} was not read"))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.pages.keys().copied().collect()
    }
}

/// Integer plant ids with `id` filtered out. Rows without a plant id stay.
fn without_plant(frame: &DataFrame, id: i64) -> Result<DataFrame, FrameError> {
    frame
        .coerce(&[("plant_id", ColumnType::Integer)])?
        .filter_by(col("plant_id").neq_missing(lit(id)))
}

pub fn plant_info(
    plant_frame: &DataFrame,
    generation_fuel: &DataFrame,
) -> Result<DataFrame, FrameError> {
    let attributes = plant_frame
        .project(&[
            "plant_id",
            "plant_state",
            "combined_heat_and_power_status",
            "sector_number",
            "naics_code",
            "reporting_frequency",
        ])?
        .coerce(&[
            ("plant_id", ColumnType::Integer),
            ("combined_heat_and_power_status", ColumnType::Boolean),
        ])?
        .distinct_on(&["plant_id"])?;
    let regions = without_plant(
        &generation_fuel.project(&["plant_id", "census_region", "nerc_region"])?,
        STATE_INCREMENT_PLANT_ID,
    )?
    .distinct_on(&["plant_id"])?;
    attributes.join_outer(&regions, "plant_id")?.rename_columns(&[
        ("combined_heat_and_power_status", "combined_heat_power"),
        ("sector_number", "eia_sector"),
    ])
}

pub fn generation_fuel(page: &DataFrame) -> Result<DataFrame, FrameError> {
    let frame = page.drop_columns(&DESCRIPTIVE)?.drop_columns(&[
        "eia_sector_number",
        "physical_unit_label",
        "total_fuel_consumption_quantity",
        "electric_fuel_consumption_quantity",
        "total_fuel_consumption_mmbtu",
        "elec_fuel_consumption_mmbtu",
        "net_generation_megawatthours",
    ])?;
    let monthly = null_eia_missing(&yearly_to_monthly(&frame)?)?;
    without_plant(&monthly, STATE_INCREMENT_PLANT_ID)?.rename_columns(&[
        ("reported_prime_mover", "prime_mover"),
        ("reported_fuel_type_code", "fuel_type"),
        ("aer_fuel_type_code", "aer_fuel_type"),
        ("quantity", "fuel_consumed_total"),
        ("elec_quantity", "fuel_consumed_for_electricity"),
        ("mmbtuper_unit", "fuel_mmbtu_per_unit"),
        ("tot_mmbtu", "fuel_consumed_total_mmbtu"),
        ("elec_mmbtu", "fuel_consumed_for_electricity_mmbtu"),
        ("netgen", "net_generation_mwh"),
    ])
}

/// Distinct `(plant_id, <unit>)` pairs with their prime mover.
fn units(page: &DataFrame, unit: &str) -> Result<DataFrame, FrameError> {
    page.project(&["plant_id", unit, "reported_prime_mover"])?
        .drop_nulls_in(Some(&["plant_id", unit][..]))?
        .distinct_on(&["plant_id", unit])?
        .rename_columns(&[("reported_prime_mover", "prime_mover")])
}

pub fn boilers(boiler_fuel: &DataFrame) -> Result<DataFrame, FrameError> {
    units(boiler_fuel, "boiler_id")
}

pub fn boiler_fuel(page: &DataFrame) -> Result<DataFrame, FrameError> {
    let frame = page
        .drop_columns(&DESCRIPTIVE)?
        .drop_columns(&["physical_unit_label", "total_fuel_consumption_quantity"])?
        .drop_nulls_in(Some(&["plant_id", "boiler_id"][..]))?;
    null_eia_missing(&yearly_to_monthly(&frame)?)?.rename_columns(&[
        ("reported_prime_mover", "prime_mover"),
        ("reported_fuel_type_code", "fuel_type"),
        ("quantity_of_fuel_consumed", "fuel_qty_consumed"),
        ("mmbtu_per_unit", "fuel_mmbtu_per_unit"),
    ])
}

pub fn generators(generator: &DataFrame) -> Result<DataFrame, FrameError> {
    units(generator, "generator_id")
}

pub fn generation(page: &DataFrame) -> Result<DataFrame, FrameError> {
    let frame = page
        .drop_columns(&DESCRIPTIVE)?
        .drop_columns(&["net_generation_year_to_date"])?
        .drop_nulls_in(Some(&["plant_id", "generator_id"][..]))?;
    null_eia_missing(&yearly_to_monthly(&frame)?)?.rename_columns(&[
        ("reported_prime_mover", "prime_mover"),
        ("net_generation", "net_generation_mwh"),
    ])
}

const COALMINE_COLUMNS: [&str; 5] = [
    "coalmine_name",
    "coalmine_type",
    "coalmine_state",
    "coalmine_county",
    "coalmine_msha_id",
];

pub fn coalmine_info(receipts: &DataFrame) -> Result<DataFrame, FrameError> {
    let mines = null_eia_missing(&receipts.project(&COALMINE_COLUMNS)?)?;
    // oil and gas deliveries carry no mine at all
    let has_mine = COALMINE_COLUMNS
        .iter()
        .map(|c| col(*c).is_not_null())
        .reduce(Expr::or)
        .unwrap_or_else(|| lit(false));
    mines.filter_by(has_mine)?.distinct()
}

pub fn fuel_receipts_costs(page: &DataFrame) -> Result<DataFrame, FrameError> {
    let frame = page.drop_columns(&[
        "plant_name",
        "plant_state",
        "operator_name",
        "operator_id",
        "fuel_group",
        "coalmine_name",
        "coalmine_type",
        "coalmine_state",
        "coalmine_county",
        "regulated",
        "reporting_frequency",
    ])?;
    null_eia_missing(&without_plant(&frame, UNKNOWN_RECEIPT_PLANT_ID)?)?.rename_columns(&[
        ("purchase_type", "contract_type"),
        ("quantity", "qty"),
        ("natural_gas_transportation_service", "natural_gas_transport"),
    ])
}

/// Destination tables and contents for one requested EIA 923 table. Some
/// requests fill two tables: a unit list and the monthly facts about it.
pub fn transform_eia923_table(
    table: &str,
    pages: &Eia923Pages,
) -> Result<Vec<(&'static TableDef, DataFrame)>> {
    let out = match table {
        "plant_info_eia923" => vec![(
            &PLANT_INFO_EIA923,
            plant_info(pages.page("plant_frame")?, pages.page("generation_fuel")?)?,
        )],
        "generation_fuel_eia923" => vec![(
            &GENERATION_FUEL_EIA923,
            generation_fuel(pages.page("generation_fuel")?)?,
        )],
        "boiler_fuel_eia923" => {
            let page = pages.page("boiler_fuel")?;
            vec![
                (&BOILERS_EIA923, boilers(page)?),
                (&BOILER_FUEL_EIA923, boiler_fuel(page)?),
            ]
        }
        "generation_eia923" => {
            let page = pages.page("generator")?;
            vec![
                (&GENERATORS_EIA923, generators(page)?),
                (&GENERATION_EIA923, generation(page)?),
            ]
        }
        "fuel_receipts_costs_eia923" => {
            let page = pages.page("fuel_receipts_costs")?;
            vec![
                (&COALMINE_INFO_EIA923, coalmine_info(page)?),
                (&FUEL_RECEIPTS_COSTS_EIA923, fuel_receipts_costs(page)?),
            ]
        }
        "stocks_eia923" => {
            info!("fuel stocks have no destination table yet; skipping");
            Vec::new()
        }
        other => {
            warn!(table = other, "no EIA 923 transform; skipping");
            Vec::new()
        }
    };
    debug!(table, outputs = out.len(), "transformed EIA 923 table");
    Ok(out)
}

pub async fn ingest_eia923_table(
    loader: &mut TableLoader<'_>,
    table: &str,
    pages: &Eia923Pages,
) -> Result<Vec<TableLoad>> {
    let mut loads = Vec::new();
    for (target, frame) in
        transform_eia923_table(table, pages).with_context(|| format!("transforming {table}"))?
    {
        loads.push(loader.load(Stage::Eia923, target, &frame).await?);
    }
    Ok(loads)
}
