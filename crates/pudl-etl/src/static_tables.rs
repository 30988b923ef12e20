//! Reference tables every other table keys into. Their content is fixed and
//! lives in `pudl_core::constants`.

use anyhow::Result;
use polars::prelude::{IntoColumn, NamedFrom, Series};
use pudl_core::clean::collapse_whitespace;
use pudl_core::constants::{
    CENSUS_REGIONS, COALMINE_COUNTRY_EIA923, COALMINE_TYPE_EIA923, CONTRACT_TYPE_EIA923,
    ENERGY_SOURCE_EIA923, FERC1_FUEL_STRINGS, FERC1_FUEL_UNIT_STRINGS,
    FERC_ACCUMULATED_DEPRECIATION, FERC_ELECTRIC_PLANT_ACCOUNTS, FUEL_GROUP_EIA923,
    FUEL_TYPE_AER_EIA923, FUEL_TYPE_EIA923, FUEL_UNITS_EIA923, NATURAL_GAS_TRANSPORT_EIA923,
    NERC_REGIONS, PRIME_MOVERS, PRIME_MOVERS_EIA923, REPORT_YEARS, RESPONDENT_FREQUENCY_EIA923,
    RTO_ISO, SECTOR_EIA, TRANSPORT_MODES_EIA923, US_STATES,
};
use pudl_core::schema;
use pudl_core::{DataFrame, FrameError, TableDef};
use tracing::info;

use crate::{Stage, TableLoader};

/// Names `series` after the columns of `table`, in order.
fn table_frame(table: &TableDef, series: Vec<Series>) -> Result<DataFrame, FrameError> {
    let columns = table
        .columns
        .iter()
        .zip(series)
        .map(|(def, s)| s.with_name(def.name.into()).into_column())
        .collect();
    Ok(DataFrame::new(columns)?)
}

fn codes<'a>(
    table: &TableDef,
    codes: impl IntoIterator<Item = &'a str>,
) -> Result<DataFrame, FrameError> {
    let codes: Vec<&str> = codes.into_iter().collect();
    table_frame(table, vec![Series::new("".into(), codes)])
}

fn numbers(
    table: &TableDef,
    numbers: impl IntoIterator<Item = i64>,
) -> Result<DataFrame, FrameError> {
    let numbers: Vec<i64> = numbers.into_iter().collect();
    table_frame(table, vec![Series::new("".into(), numbers)])
}

fn code_pairs<'a>(
    table: &TableDef,
    pairs: impl IntoIterator<Item = &'a (&'a str, &'a str)>,
) -> Result<DataFrame, FrameError> {
    let (abbrs, names): (Vec<&str>, Vec<&str>) = pairs.into_iter().copied().unzip();
    table_frame(
        table,
        vec![Series::new("".into(), abbrs), Series::new("".into(), names)],
    )
}

/// `(row_number, id, description)` lists drop the row number and tidy the
/// line-wrapped descriptions.
fn described_ids(table: &TableDef, rows: &[(i64, &str, &str)]) -> Result<DataFrame, FrameError> {
    let ids: Vec<&str> = rows.iter().map(|(_, id, _)| *id).collect();
    let descriptions: Vec<String> = rows
        .iter()
        .map(|(_, _, desc)| collapse_whitespace(desc))
        .collect();
    table_frame(
        table,
        vec![Series::new("".into(), ids), Series::new("".into(), descriptions)],
    )
}

/// Every static table with its content, in creation order.
pub fn static_frames() -> Result<Vec<(&'static TableDef, DataFrame)>, FrameError> {
    let (sector_ids, sector_names): (Vec<i64>, Vec<&str>) = SECTOR_EIA.iter().copied().unzip();
    Ok(vec![
        (
            &schema::FUELS,
            codes(&schema::FUELS, FERC1_FUEL_STRINGS.iter().map(|(f, _)| *f))?,
        ),
        (
            &schema::FUEL_UNITS,
            codes(&schema::FUEL_UNITS, FERC1_FUEL_UNIT_STRINGS.iter().map(|(u, _)| *u))?,
        ),
        (&schema::MONTHS, numbers(&schema::MONTHS, 1..=12)?),
        (
            &schema::QUARTERS,
            table_frame(
                &schema::QUARTERS,
                vec![
                    Series::new("".into(), vec![1i64, 2, 3, 4]),
                    Series::new("".into(), vec![3i64, 6, 9, 12]),
                ],
            )?,
        ),
        (
            &schema::PRIME_MOVERS,
            codes(&schema::PRIME_MOVERS, PRIME_MOVERS.iter().copied())?,
        ),
        (&schema::RTO_ISO, code_pairs(&schema::RTO_ISO, RTO_ISO)?),
        (&schema::YEARS, numbers(&schema::YEARS, REPORT_YEARS)?),
        (&schema::CENSUS_REGIONS, code_pairs(&schema::CENSUS_REGIONS, CENSUS_REGIONS)?),
        (&schema::NERC_REGIONS, code_pairs(&schema::NERC_REGIONS, NERC_REGIONS)?),
        (&schema::US_STATES, code_pairs(&schema::US_STATES, US_STATES)?),
        (
            &schema::RESPONDENT_FREQUENCY_EIA923,
            code_pairs(&schema::RESPONDENT_FREQUENCY_EIA923, RESPONDENT_FREQUENCY_EIA923)?,
        ),
        (
            &schema::SECTOR_EIA,
            table_frame(
                &schema::SECTOR_EIA,
                vec![
                    Series::new("".into(), sector_ids),
                    Series::new("".into(), sector_names),
                ],
            )?,
        ),
        (
            &schema::CONTRACT_TYPE_EIA923,
            code_pairs(&schema::CONTRACT_TYPE_EIA923, CONTRACT_TYPE_EIA923)?,
        ),
        (&schema::FUEL_TYPE_EIA923, code_pairs(&schema::FUEL_TYPE_EIA923, FUEL_TYPE_EIA923)?),
        (
            &schema::PRIME_MOVERS_EIA923,
            code_pairs(&schema::PRIME_MOVERS_EIA923, PRIME_MOVERS_EIA923)?,
        ),
        (&schema::FUEL_UNIT_EIA923, code_pairs(&schema::FUEL_UNIT_EIA923, FUEL_UNITS_EIA923)?),
        (
            &schema::FUEL_TYPE_AER_EIA923,
            code_pairs(&schema::FUEL_TYPE_AER_EIA923, FUEL_TYPE_AER_EIA923)?,
        ),
        (
            &schema::ENERGY_SOURCE_EIA923,
            code_pairs(&schema::ENERGY_SOURCE_EIA923, ENERGY_SOURCE_EIA923)?,
        ),
        (
            &schema::FUEL_GROUP_EIA923,
            codes(&schema::FUEL_GROUP_EIA923, FUEL_GROUP_EIA923.iter().copied())?,
        ),
        (
            &schema::COALMINE_TYPE_EIA923,
            code_pairs(&schema::COALMINE_TYPE_EIA923, COALMINE_TYPE_EIA923)?,
        ),
        (
            &schema::COALMINE_STATE_EIA923,
            // coal is sourced abroad or from a US state
            code_pairs(
                &schema::COALMINE_STATE_EIA923,
                COALMINE_COUNTRY_EIA923.iter().chain(US_STATES),
            )?,
        ),
        (
            &schema::TRANSPORT_MODES_EIA923,
            code_pairs(&schema::TRANSPORT_MODES_EIA923, TRANSPORT_MODES_EIA923)?,
        ),
        (
            &schema::NATURAL_GAS_TRANSPORT_EIA923,
            code_pairs(&schema::NATURAL_GAS_TRANSPORT_EIA923, NATURAL_GAS_TRANSPORT_EIA923)?,
        ),
        (
            &schema::FERC_ACCOUNTS,
            described_ids(&schema::FERC_ACCOUNTS, FERC_ELECTRIC_PLANT_ACCOUNTS)?,
        ),
        (
            &schema::FERC_DEPRECIATION_LINES,
            described_ids(&schema::FERC_DEPRECIATION_LINES, FERC_ACCUMULATED_DEPRECIATION)?,
        ),
    ])
}

pub async fn ingest_static_tables(loader: &mut TableLoader<'_>) -> Result<()> {
    info!("ingesting static tables");
    for (table, frame) in static_frames()? {
        loader.load(Stage::Static, table, &frame).await?;
    }
    Ok(())
}
