//! Glue tables: PUDL plant and utility ids, and the FERC 1 / EIA 923
//! identifiers the curated mapping sheets assign to them.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::Column;
use pudl_core::clean::standardize_plant_names;
use pudl_core::schema::{
    PLANTS, PLANTS_EIA923, PLANTS_FERC1, UTILITIES, UTILITIES_EIA923, UTILITIES_FERC1,
    UTIL_PLANT_ASSN,
};
use pudl_core::{concat_frames, DataFrame, FrameError, FrameExt, TableDef, Value};
use pudl_sources::{
    read_plant_map, read_utility_map, PlantMapRow, UtilityMapRow, PLANT_MAP_FILE,
    UTILITY_MAP_FILE,
};
use thiserror::Error;
use tracing::{info, warn};

use crate::{Stage, TableLoader};

#[derive(Debug, Error)]
pub enum MappingError {
    #[error("{table} has {count} incomplete rows after de-duplication; at most one is expected")]
    IncompleteRows { table: &'static str, count: usize },
    #[error("plants_ferc1 refers to FERC 1 respondent {0}, which utilities_ferc1 does not list")]
    UnknownRespondent(i64),
    #[error(
        "EIA 923 plant {plant_id} names operator {operator_id}, \
         which utilities_eia923 does not list"
    )]
    UnknownOperator { plant_id: i64, operator_id: i64 },
    #[error(transparent)]
    Frame(#[from] FrameError),
}

fn int_column<T>(name: &str, rows: &[T], f: impl Fn(&T) -> Option<i64>) -> Column {
    Column::new(name.into(), rows.iter().map(f).collect::<Vec<_>>())
}

fn text_column<T>(name: &str, rows: &[T], f: impl Fn(&T) -> Option<String>) -> Column {
    Column::new(name.into(), rows.iter().map(f).collect::<Vec<_>>())
}

fn plant_map_frame(rows: &[PlantMapRow]) -> Result<DataFrame, FrameError> {
    Ok(DataFrame::new(vec![
        int_column("plant_id", rows, |r| Some(r.plant_id)),
        text_column("plant_name", rows, |r| r.plant_name.clone()),
        int_column("respondent_id_ferc1", rows, |r| r.respondent_id_ferc1),
        text_column("respondent_name_ferc1", rows, |r| r.respondent_name_ferc1.clone()),
        text_column("plant_name_ferc1", rows, |r| r.plant_name_ferc1.clone()),
        int_column("plant_id_eia923", rows, |r| r.plant_id_eia923),
        text_column("plant_name_eia923", rows, |r| r.plant_name_eia923.clone()),
        text_column("operator_name_eia923", rows, |r| r.operator_name_eia923.clone()),
        int_column("operator_id_eia923", rows, |r| r.operator_id_eia923),
    ])?)
}

fn utility_map_frame(rows: &[UtilityMapRow]) -> Result<DataFrame, FrameError> {
    Ok(DataFrame::new(vec![
        int_column("utility_id", rows, |r| Some(r.utility_id)),
        text_column("utility_name", rows, |r| r.utility_name.clone()),
        int_column("respondent_id_ferc1", rows, |r| r.respondent_id_ferc1),
        text_column("respondent_name_ferc1", rows, |r| r.respondent_name_ferc1.clone()),
        int_column("operator_id_eia923", rows, |r| r.operator_id_eia923),
        text_column("operator_name_eia923", rows, |r| r.operator_name_eia923.clone()),
    ])?)
}

/// Glue tables, already renamed to their destination columns.
#[derive(Debug, Clone)]
pub struct GlueTables {
    pub plants: DataFrame,
    pub utilities: DataFrame,
    pub utilities_eia923: DataFrame,
    pub utilities_ferc1: DataFrame,
    pub plants_eia923: DataFrame,
    pub plants_ferc1: DataFrame,
    pub util_plant_assn: DataFrame,
}

impl GlueTables {
    /// Destination table and content, in load order.
    pub fn tables(&self) -> [(&'static TableDef, &DataFrame); 7] {
        [
            (&PLANTS, &self.plants),
            (&UTILITIES, &self.utilities),
            (&UTILITIES_EIA923, &self.utilities_eia923),
            (&UTILITIES_FERC1, &self.utilities_ferc1),
            (&PLANTS_EIA923, &self.plants_eia923),
            (&PLANTS_FERC1, &self.plants_ferc1),
            (&UTIL_PLANT_ASSN, &self.util_plant_assn),
        ]
    }
}

/// Plants and utilities present in only one dataset leave one row with
/// blanks behind after de-duplication; anything more means the sheet is off.
fn drop_incomplete(frame: DataFrame, table: &'static str) -> Result<DataFrame, MappingError> {
    let count = frame.rows_with_nulls()?;
    if count > 1 {
        return Err(MappingError::IncompleteRows { table, count });
    }
    Ok(frame.drop_nulls_in(None)?)
}

pub fn build_glue_tables(
    plant_map: &[PlantMapRow],
    utility_map: &[UtilityMapRow],
) -> Result<GlueTables, MappingError> {
    let plant_map = standardize_plant_names(&plant_map_frame(plant_map)?, "plant_name_ferc1")?;
    let utility_map = utility_map_frame(utility_map)?;

    let plants = plant_map
        .project(&["plant_id", "plant_name"])?
        .distinct_on(&["plant_id"])?;
    let plants_eia923 = plant_map
        .project(&["plant_id_eia923", "plant_name_eia923", "plant_id"])?
        .distinct_on(&["plant_id_eia923"])?;
    let plants_ferc1 = plant_map
        .project(&["plant_name_ferc1", "respondent_id_ferc1", "plant_id"])?
        .distinct_on(&["plant_name_ferc1", "respondent_id_ferc1"])?;
    let utilities = utility_map
        .project(&["utility_id", "utility_name"])?
        .distinct_on(&["utility_id"])?;
    let utilities_eia923 = utility_map
        .project(&["operator_id_eia923", "operator_name_eia923", "utility_id"])?
        .distinct_on(&["operator_id_eia923"])?;
    let utilities_ferc1 = utility_map
        .project(&["respondent_id_ferc1", "respondent_name_ferc1", "utility_id"])?
        .distinct_on(&["respondent_id_ferc1"])?;

    // utilities reach their plants through the FERC respondent id and the
    // EIA operator id; null ids never match each other
    let via_ferc1 = utilities_ferc1.join_left(
        &plant_map.project(&["plant_id", "respondent_id_ferc1"])?,
        "respondent_id_ferc1",
    )?;
    let via_eia923 = utilities_eia923.join_left(
        &plant_map.project(&["plant_id", "operator_id_eia923"])?,
        "operator_id_eia923",
    )?;
    let util_plant_assn = concat_frames(vec![via_eia923, via_ferc1])?
        .project(&["plant_id", "utility_id"])?
        .drop_nulls_in(None)?
        .distinct()?;

    let plants_eia923 = drop_incomplete(plants_eia923, "plants_eia923")?;
    let plants_ferc1 = drop_incomplete(plants_ferc1, "plants_ferc1")?;
    let utilities_eia923 = drop_incomplete(utilities_eia923, "utilities_eia923")?;
    let utilities_ferc1 = drop_incomplete(utilities_ferc1, "utilities_ferc1")?;

    check_respondents(&plants_ferc1, &utilities_ferc1)?;
    check_operators(&plant_map, &utilities_eia923)?;

    // the PUDL id moves out of the way before the dataset id takes its name
    Ok(GlueTables {
        plants: plants.rename_columns(&[("plant_id", "id"), ("plant_name", "name")])?,
        utilities: utilities.rename_columns(&[("utility_id", "id"), ("utility_name", "name")])?,
        utilities_eia923: utilities_eia923.rename_columns(&[
            ("operator_id_eia923", "operator_id"),
            ("operator_name_eia923", "operator_name"),
            ("utility_id", "util_id_pudl"),
        ])?,
        utilities_ferc1: utilities_ferc1.rename_columns(&[
            ("respondent_id_ferc1", "respondent_id"),
            ("respondent_name_ferc1", "respondent_name"),
            ("utility_id", "util_id_pudl"),
        ])?,
        plants_eia923: plants_eia923.rename_columns(&[
            ("plant_id", "plant_id_pudl"),
            ("plant_id_eia923", "plant_id"),
            ("plant_name_eia923", "plant_name"),
        ])?,
        plants_ferc1: plants_ferc1.rename_columns(&[
            ("respondent_id_ferc1", "respondent_id"),
            ("plant_name_ferc1", "plant_name"),
            ("plant_id", "plant_id_pudl"),
        ])?,
        util_plant_assn,
    })
}

fn id_set(frame: &DataFrame, column: &str) -> Result<HashSet<i64>, FrameError> {
    Ok(frame.values(column)?.iter().filter_map(Value::as_i64).collect())
}

fn check_respondents(
    plants_ferc1: &DataFrame,
    utilities_ferc1: &DataFrame,
) -> Result<(), MappingError> {
    let known = id_set(utilities_ferc1, "respondent_id_ferc1")?;
    match plants_ferc1
        .values("respondent_id_ferc1")?
        .iter()
        .filter_map(Value::as_i64)
        .find(|id| !known.contains(id))
    {
        Some(id) => Err(MappingError::UnknownRespondent(id)),
        None => Ok(()),
    }
}

fn check_operators(
    plant_map: &DataFrame,
    utilities_eia923: &DataFrame,
) -> Result<(), MappingError> {
    let known = id_set(utilities_eia923, "operator_id_eia923")?;
    for row in plant_map.rows()? {
        let (Some(plant_id), Some(operator_id)) = (
            row.get("plant_id_eia923").as_i64(),
            row.get("operator_id_eia923").as_i64(),
        ) else {
            continue;
        };
        if !known.contains(&operator_id) {
            return Err(MappingError::UnknownOperator {
                plant_id,
                operator_id,
            });
        }
    }
    Ok(())
}

/// Reads both mapping sheets from `mapping_dir`.
pub fn read_mapping(mapping_dir: &Path) -> Result<(Vec<PlantMapRow>, Vec<UtilityMapRow>)> {
    let plants = read_plant_map(&mapping_dir.join(PLANT_MAP_FILE))
        .context("reading the plant mapping sheet")?;
    let utilities = read_utility_map(&mapping_dir.join(UTILITY_MAP_FILE))
        .context("reading the utility mapping sheet")?;
    if plants.is_empty() || utilities.is_empty() {
        warn!(dir = %mapping_dir.display(), "mapping sheets are empty; glue tables will be too");
    }
    Ok((plants, utilities))
}

/// Builds the glue tables from the mapping sheets and loads them. Nothing is
/// loaded when the sheets fail validation.
pub async fn ingest_glue_tables(
    loader: &mut TableLoader<'_>,
    mapping_dir: &Path,
) -> Result<GlueTables> {
    info!(dir = %mapping_dir.display(), "ingesting glue tables");
    let (plant_map, utility_map) = read_mapping(mapping_dir)?;
    let glue = build_glue_tables(&plant_map, &utility_map)?;
    for (table, frame) in glue.tables() {
        loader.load(Stage::Glue, table, frame).await?;
    }
    Ok(glue)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant(
        plant_id: i64,
        respondent: Option<(i64, &str)>,
        eia: Option<(i64, i64)>,
    ) -> PlantMapRow {
        PlantMapRow {
            plant_id,
            plant_name: Some(format!("plant {plant_id}")),
            respondent_id_ferc1: respondent.map(|r| r.0),
            respondent_name_ferc1: respondent.map(|_| "Respondent".to_string()),
            plant_name_ferc1: respondent.map(|r| r.1.to_string()),
            plant_id_eia923: eia.map(|e| e.0),
            plant_name_eia923: eia.map(|_| "Eia Plant".to_string()),
            operator_name_eia923: eia.map(|_| "Operator".to_string()),
            operator_id_eia923: eia.map(|e| e.1),
        }
    }

    fn utility(utility_id: i64, respondent: Option<i64>, operator: Option<i64>) -> UtilityMapRow {
        UtilityMapRow {
            utility_id,
            utility_name: Some(format!("utility {utility_id}")),
            respondent_id_ferc1: respondent,
            respondent_name_ferc1: respondent.map(|_| "Respondent".to_string()),
            operator_id_eia923: operator,
            operator_name_eia923: operator.map(|_| "Operator".to_string()),
        }
    }

    fn sample() -> (Vec<PlantMapRow>, Vec<UtilityMapRow>) {
        (
            vec![
                plant(1, Some((7, "  four CORNERS ")), Some((2442, 803))),
                plant(2, Some((7, "cholla")), None),
                plant(3, None, Some((113, 803))),
                plant(4, None, Some((6008, 15466))),
            ],
            vec![
                utility(10, Some(7), Some(803)),
                utility(11, None, Some(15466)),
            ],
        )
    }

    #[test]
    fn derives_renamed_glue_tables() {
        let (plants, utilities) = sample();
        let glue = build_glue_tables(&plants, &utilities).unwrap();

        assert_eq!(glue.plants.names(), ["id", "name"]);
        assert_eq!(glue.plants.height(), 4);
        assert_eq!(glue.plants_ferc1.names(), ["plant_name", "respondent_id", "plant_id_pudl"]);
        assert_eq!(glue.plants_ferc1.height(), 2);
        assert_eq!(glue.plants_ferc1.value(0, "plant_name"), Some(Value::text("Four Corners")));
        assert_eq!(glue.plants_eia923.height(), 3);
        assert_eq!(glue.utilities_ferc1.height(), 1);
        assert_eq!(glue.utilities_eia923.height(), 2);

        let mut assn: Vec<(i64, i64)> = glue
            .util_plant_assn
            .rows()
            .unwrap()
            .iter()
            .map(|r| (r.get("utility_id").as_i64().unwrap(), r.get("plant_id").as_i64().unwrap()))
            .collect();
        assn.sort_unstable();
        assert_eq!(assn, [(10, 1), (10, 2), (10, 3), (11, 4)]);
    }

    #[test]
    fn eia_plants_keep_both_ids_apart() {
        let (plants, utilities) = sample();
        let glue = build_glue_tables(&plants, &utilities).unwrap();
        assert_eq!(glue.plants_eia923.names(), ["plant_id", "plant_name", "plant_id_pudl"]);
        let four_corners = glue
            .plants_eia923
            .rows()
            .unwrap()
            .into_iter()
            .find(|r| r.get("plant_id") == &Value::Int(2442))
            .unwrap();
        assert_eq!(four_corners.get("plant_id_pudl"), &Value::Int(1));
    }

    #[test]
    fn second_incomplete_row_is_rejected() {
        let (plants, mut utilities) = sample();
        // a respondent without a name is a second incomplete row
        utilities.push(UtilityMapRow {
            respondent_name_ferc1: None,
            ..utility(12, Some(8), None)
        });
        let err = build_glue_tables(&plants, &utilities).unwrap_err();
        assert!(matches!(
            err,
            MappingError::IncompleteRows {
                table: "utilities_ferc1",
                count: 2
            }
        ));
    }

    #[test]
    fn respondents_and_operators_must_be_mapped_utilities() {
        let (mut plants, utilities) = sample();
        plants.push(plant(5, Some((99, "ghost")), None));
        assert!(matches!(
            build_glue_tables(&plants, &utilities).unwrap_err(),
            MappingError::UnknownRespondent(99)
        ));

        let (mut plants, utilities) = sample();
        plants.push(plant(6, None, Some((777, 4242))));
        assert!(matches!(
            build_glue_tables(&plants, &utilities).unwrap_err(),
            MappingError::UnknownOperator {
                plant_id: 777,
                operator_id: 4242
            }
        ));
    }
}
