//! Destination schema of the PUDL database.
//!
//! Tables are declared in dependency order: every table only references tables
//! declared before it, so `ALL_TABLES` is also the creation order.

use polars::prelude::DataType;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnType {
    Integer,
    Float,
    /// Money amounts, stored as `NUMERIC(14, 2)`.
    Numeric,
    Text,
    Boolean,
}

impl ColumnType {
    pub fn sql(self) -> &'static str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Float => "DOUBLE PRECISION",
            ColumnType::Numeric => "NUMERIC(14, 2)",
            ColumnType::Text => "TEXT",
            ColumnType::Boolean => "BOOLEAN",
        }
    }

    /// Polars dtype the column is held in once a frame is conformed to its table.
    pub fn dtype(self) -> DataType {
        match self {
            ColumnType::Integer => DataType::Int64,
            ColumnType::Float | ColumnType::Numeric => DataType::Float64,
            ColumnType::Text => DataType::String,
            ColumnType::Boolean => DataType::Boolean,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ColumnDef {
    pub name: &'static str,
    pub ty: ColumnType,
    pub nullable: bool,
    /// `(table, column)` this column refers to.
    pub references: Option<(&'static str, &'static str)>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TableDef {
    pub name: &'static str,
    pub columns: &'static [ColumnDef],
    pub primary_key: &'static [&'static str],
}

impl TableDef {
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }

    /// Tables this one holds foreign keys into, each named once.
    pub fn referenced_tables(&self) -> Vec<&'static str> {
        let mut tables = Vec::new();
        for (table, _) in self.columns.iter().filter_map(|c| c.references) {
            if !tables.contains(&table) {
                tables.push(table);
            }
        }
        tables
    }

    pub fn create_sql(&self) -> String {
        let mut parts: Vec<String> = self
            .columns
            .iter()
            .map(|c| {
                let mut s = format!("{} {}", quote_ident(c.name), c.ty.sql());
                if !c.nullable {
                    s.push_str(" NOT NULL");
                }
                if let Some((table, column)) = c.references {
                    s.push_str(&format!(
                        " REFERENCES {} ({})",
                        quote_ident(table),
                        quote_ident(column)
                    ));
                }
                s
            })
            .collect();
        if !self.primary_key.is_empty() {
            parts.push(format!(
                "PRIMARY KEY ({})",
                self.primary_key
                    .iter()
                    .map(|c| quote_ident(c))
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }
        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
            quote_ident(self.name),
            parts.join(",\n    ")
        )
    }

    pub fn drop_sql(&self) -> String {
        format!("DROP TABLE IF EXISTS {} CASCADE", quote_ident(self.name))
    }
}

pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

const fn col(name: &'static str, ty: ColumnType) -> ColumnDef {
    ColumnDef {
        name,
        ty,
        nullable: true,
        references: None,
    }
}

const fn key(name: &'static str, ty: ColumnType) -> ColumnDef {
    ColumnDef {
        name,
        ty,
        nullable: false,
        references: None,
    }
}

const fn fk(
    name: &'static str,
    ty: ColumnType,
    nullable: bool,
    table: &'static str,
    column: &'static str,
) -> ColumnDef {
    ColumnDef {
        name,
        ty,
        nullable,
        references: Some((table, column)),
    }
}

use ColumnType::{Boolean as B, Float as F, Integer as I, Numeric as N, Text as T};

/// Two-column code table keyed by `abbr`.
const fn code_table(name: &'static str, columns: &'static [ColumnDef]) -> TableDef {
    TableDef {
        name,
        columns,
        primary_key: &["abbr"],
    }
}

const ABBR_NAME: &[ColumnDef] = &[key("abbr", T), col("name", T)];
const ABBR_UNIT: &[ColumnDef] = &[key("abbr", T), col("unit", T)];
const ABBR_FUEL_TYPE: &[ColumnDef] = &[key("abbr", T), col("fuel_type", T)];

// ---------------------------------------------------------------------------
// Static reference tables
// ---------------------------------------------------------------------------

pub static FUELS: TableDef = TableDef {
    name: "fuels",
    columns: &[key("name", T)],
    primary_key: &["name"],
};
pub static FUEL_UNITS: TableDef = TableDef {
    name: "fuel_units",
    columns: &[key("unit", T)],
    primary_key: &["unit"],
};
pub static MONTHS: TableDef = TableDef {
    name: "months",
    columns: &[key("month", I)],
    primary_key: &["month"],
};
pub static QUARTERS: TableDef = TableDef {
    name: "quarters",
    columns: &[key("q", I), fk("end_month", I, false, "months", "month")],
    primary_key: &["q"],
};
pub static PRIME_MOVERS: TableDef = TableDef {
    name: "prime_movers",
    columns: &[key("prime_mover", T)],
    primary_key: &["prime_mover"],
};
pub static RTO_ISO: TableDef = code_table("rto_iso", ABBR_NAME);
pub static YEARS: TableDef = TableDef {
    name: "years",
    columns: &[key("year", I)],
    primary_key: &["year"],
};
pub static CENSUS_REGIONS: TableDef = code_table("census_regions", ABBR_NAME);
pub static NERC_REGIONS: TableDef = code_table("nerc_regions", ABBR_NAME);
pub static US_STATES: TableDef = code_table("us_states", ABBR_NAME);
pub static RESPONDENT_FREQUENCY_EIA923: TableDef =
    code_table("respondent_frequency_eia923", ABBR_UNIT);
pub static SECTOR_EIA: TableDef = TableDef {
    name: "sector_eia",
    columns: &[key("id", I), col("name", T)],
    primary_key: &["id"],
};
pub static CONTRACT_TYPE_EIA923: TableDef = code_table(
    "contract_type_eia923",
    &[key("abbr", T), col("contract_type", T)],
);
pub static FUEL_TYPE_EIA923: TableDef = code_table("fuel_type_eia923", ABBR_FUEL_TYPE);
pub static PRIME_MOVERS_EIA923: TableDef = code_table(
    "prime_movers_eia923",
    &[key("abbr", T), col("prime_mover", T)],
);
pub static FUEL_UNIT_EIA923: TableDef = code_table("fuel_unit_eia923", ABBR_UNIT);
pub static FUEL_TYPE_AER_EIA923: TableDef = code_table("fuel_type_aer_eia923", ABBR_FUEL_TYPE);
pub static ENERGY_SOURCE_EIA923: TableDef = code_table(
    "energy_source_eia923",
    &[key("abbr", T), col("source", T)],
);
pub static FUEL_GROUP_EIA923: TableDef = TableDef {
    name: "fuel_group_eia923",
    columns: &[key("fuel_group", T)],
    primary_key: &["fuel_group"],
};
pub static COALMINE_TYPE_EIA923: TableDef = code_table("coalmine_type_eia923", ABBR_NAME);
pub static COALMINE_STATE_EIA923: TableDef = code_table(
    "coalmine_state_eia923",
    &[key("abbr", T), col("state", T)],
);
pub static TRANSPORT_MODES_EIA923: TableDef = code_table(
    "transport_modes_eia923",
    &[key("abbr", T), col("mode", T)],
);
pub static NATURAL_GAS_TRANSPORT_EIA923: TableDef = code_table(
    "natural_gas_transport_eia923",
    &[key("abbr", T), col("status", T)],
);
pub static FERC_ACCOUNTS: TableDef = TableDef {
    name: "ferc_accounts",
    columns: &[key("id", T), col("description", T)],
    primary_key: &["id"],
};
pub static FERC_DEPRECIATION_LINES: TableDef = TableDef {
    name: "ferc_depreciation_lines",
    columns: &[key("id", T), col("description", T)],
    primary_key: &["id"],
};

// ---------------------------------------------------------------------------
// Glue tables: FERC 1 and EIA 923 identifiers mapped onto PUDL ids
// ---------------------------------------------------------------------------

pub static PLANTS: TableDef = TableDef {
    name: "plants",
    columns: &[key("id", I), col("name", T)],
    primary_key: &["id"],
};
pub static UTILITIES: TableDef = TableDef {
    name: "utilities",
    columns: &[key("id", I), col("name", T)],
    primary_key: &["id"],
};
pub static UTILITIES_EIA923: TableDef = TableDef {
    name: "utilities_eia923",
    columns: &[
        key("operator_id", I),
        col("operator_name", T),
        fk("util_id_pudl", I, false, "utilities", "id"),
    ],
    primary_key: &["operator_id"],
};
pub static UTILITIES_FERC1: TableDef = TableDef {
    name: "utilities_ferc1",
    columns: &[
        key("respondent_id", I),
        col("respondent_name", T),
        fk("util_id_pudl", I, false, "utilities", "id"),
    ],
    primary_key: &["respondent_id"],
};
pub static PLANTS_EIA923: TableDef = TableDef {
    name: "plants_eia923",
    columns: &[
        key("plant_id", I),
        col("plant_name", T),
        fk("plant_id_pudl", I, false, "plants", "id"),
    ],
    primary_key: &["plant_id"],
};
pub static PLANTS_FERC1: TableDef = TableDef {
    name: "plants_ferc1",
    columns: &[
        fk("respondent_id", I, false, "utilities_ferc1", "respondent_id"),
        key("plant_name", T),
        fk("plant_id_pudl", I, false, "plants", "id"),
    ],
    primary_key: &["respondent_id", "plant_name"],
};
pub static UTIL_PLANT_ASSN: TableDef = TableDef {
    name: "util_plant_assn",
    columns: &[
        fk("utility_id", I, false, "utilities", "id"),
        fk("plant_id", I, false, "plants", "id"),
    ],
    primary_key: &["utility_id", "plant_id"],
};

// ---------------------------------------------------------------------------
// FERC Form 1
// ---------------------------------------------------------------------------

pub static FUEL_FERC1: TableDef = TableDef {
    name: "fuel_ferc1",
    columns: &[
        key("respondent_id", I),
        key("plant_name", T),
        fk("report_year", I, false, "years", "year"),
        fk("fuel", T, false, "fuels", "name"),
        fk("fuel_unit", T, false, "fuel_units", "unit"),
        col("fuel_qty_burned", F),
        col("fuel_avg_mmbtu_per_unit", F),
        col("fuel_cost_per_unit_burned", F),
        col("fuel_cost_per_unit_delivered", F),
        col("fuel_cost_per_mmbtu", F),
        col("fuel_cost_per_mwh", F),
        col("fuel_mmbtu_per_mwh", F),
    ],
    primary_key: &[],
};

pub static PLANTS_STEAM_FERC1: TableDef = TableDef {
    name: "plants_steam_ferc1",
    columns: &[
        key("respondent_id", I),
        fk("report_year", I, false, "years", "year"),
        key("plant_name", T),
        col("type_const", T),
        col("plant_kind", T),
        col("year_constructed", I),
        col("year_installed", I),
        col("total_capacity_mw", F),
        col("peak_demand_mw", F),
        col("plant_hours", F),
        col("plant_capability_mw", F),
        col("water_limited_mw", F),
        col("not_water_limited_mw", F),
        col("avg_num_employees", F),
        col("net_generation_mwh", F),
        col("cost_land", N),
        col("cost_structure", N),
        col("cost_equipment", N),
        col("cost_of_plant_total", N),
        col("cost_per_mw", N),
        col("expns_operations", N),
        col("expns_fuel", N),
        col("expns_coolants", N),
        col("expns_steam", N),
        col("expns_steam_other", N),
        col("expns_transfer", N),
        col("expns_electric", N),
        col("expns_misc_power", N),
        col("expns_rents", N),
        col("expns_allowances", N),
        col("expns_engineering", N),
        col("expns_structures", N),
        col("expns_boiler", N),
        col("expns_plants", N),
        col("expns_misc_steam", N),
        col("expns_production_total", N),
        col("expns_per_mwh", N),
        col("asset_retire_cost", N),
    ],
    primary_key: &[],
};

pub static PLANTS_HYDRO_FERC1: TableDef = TableDef {
    name: "plants_hydro_ferc1",
    columns: &[
        key("respondent_id", I),
        fk("report_year", I, false, "years", "year"),
        key("plant_name", T),
        col("project_number", I),
        col("plant_kind", T),
        col("plant_construction", T),
        col("year_constructed", I),
        col("year_installed", I),
        col("total_capacity_mw", F),
        col("peak_demand_mw", F),
        col("plant_hours_connected_while_generating", F),
        col("net_capacity_favorable_conditions_mw", F),
        col("net_capacity_adverse_conditions_mw", F),
        col("avg_number_employees", F),
        col("net_generation_mwh", F),
        col("cost_land", N),
        col("cost_structure", N),
        col("cost_facilities", N),
        col("cost_equipment", N),
        col("cost_roads", N),
        col("asset_retire_cost", N),
        col("cost_plant_total", N),
        col("cost_per_mw", N),
        col("expns_operations", N),
        col("expns_water_pwr", N),
        col("expns_hydraulic", N),
        col("expns_electric", N),
        col("expns_generation", N),
        col("expns_rents", N),
        col("expns_engineering", N),
        col("expns_structures", N),
        col("expns_dams", N),
        col("expns_plant", N),
        col("expns_misc_plant", N),
        col("expns_production_total", N),
        col("expns_per_mwh", N),
    ],
    primary_key: &[],
};

pub static PLANTS_PUMPED_STORAGE_FERC1: TableDef = TableDef {
    name: "plants_pumped_storage_ferc1",
    columns: &[
        key("respondent_id", I),
        fk("report_year", I, false, "years", "year"),
        key("plant_name", T),
        col("project_number", I),
        col("plant_kind", T),
        col("year_constructed", I),
        col("year_installed", I),
        col("total_capacity_mw", F),
        col("peak_demand_mw", F),
        col("plant_hours_connected_while_generating", F),
        col("plant_capability_mw", F),
        col("avg_number_employees", F),
        col("net_generation_mwh", F),
        col("energy_used_for_pumping_mwh", F),
        col("net_load_mwh", F),
        col("cost_land", N),
        col("cost_structures", N),
        col("cost_facilities", N),
        col("cost_wheels_turbines_generators", N),
        col("cost_equipment", N),
        col("cost_equipment_misc", N),
        col("cost_roads", N),
        col("asset_retire_cost", N),
        col("cost_plant_total", N),
        col("cost_per_mw", N),
        col("expns_operations", N),
        col("expns_water_for_pwr", N),
        col("expns_pump_storage", N),
        col("expns_electric", N),
        col("expns_generation_misc", N),
        col("expns_rents", N),
        col("expns_engineering", N),
        col("expns_structures", N),
        col("expns_dams", N),
        col("expns_plant", N),
        col("expns_misc_plant", N),
        col("expns_production_before_pumping", N),
        col("pumping_expenses", N),
        col("expns_production_total", N),
        col("expns_per_mwh", N),
    ],
    primary_key: &[],
};

pub static PLANTS_SMALL_FERC1: TableDef = TableDef {
    name: "plants_small_ferc1",
    columns: &[
        key("respondent_id", I),
        fk("report_year", I, false, "years", "year"),
        key("plant_name", T),
        fk("kind_of_fuel", T, true, "fuels", "name"),
        col("year_constructed", I),
        col("total_capacity_mw", F),
        col("peak_demand_mw", F),
        col("net_generation_mwh", F),
        col("cost_of_plant_total", N),
        col("cost_of_plant_per_mw", N),
        col("cost_of_operation", N),
        col("expns_fuel", N),
        col("expns_maintenance", N),
        col("fuel_cost_per_mmbtu", F),
        col("record_number", I),
    ],
    primary_key: &[],
};

pub static PLANT_IN_SERVICE_FERC1: TableDef = TableDef {
    name: "plant_in_service_ferc1",
    columns: &[
        key("respondent_id", I),
        fk("report_year", I, false, "years", "year"),
        fk("ferc_account_id", T, true, "ferc_accounts", "id"),
        col("beginning_year_balance", N),
        col("additions", N),
        col("retirements", N),
        col("adjustments", N),
        col("transfers", N),
        col("year_end_balance", N),
    ],
    primary_key: &[],
};

pub static PURCHASED_POWER_FERC1: TableDef = TableDef {
    name: "purchased_power_ferc1",
    columns: &[
        key("respondent_id", I),
        fk("report_year", I, false, "years", "year"),
        col("authority_company_name", T),
        key("statistical_classification", T),
        key("rate_schedule_tariff_number", T),
        col("average_billing_demand", T),
        col("average_monthly_ncp_demand", T),
        col("average_monthly_cp_demand", T),
        col("mwh_purchased", N),
        col("mwh_received", N),
        col("mwh_delivered", N),
        col("demand_charges", N),
        col("energy_charges", N),
        col("other_charges", N),
        col("settlement_total", N),
    ],
    primary_key: &[],
};

pub static ACCUMULATED_DEPRECIATION_FERC1: TableDef = TableDef {
    name: "accumulated_depreciation_ferc1",
    columns: &[
        key("respondent_id", I),
        fk("report_year", I, false, "years", "year"),
        fk("line_id", T, true, "ferc_depreciation_lines", "id"),
        col("total_cde", N),
        col("electric_plant", N),
        col("future_plant", N),
        col("leased_plant", N),
    ],
    primary_key: &[],
};

// ---------------------------------------------------------------------------
// EIA Form 923
// ---------------------------------------------------------------------------

pub static PLANT_INFO_EIA923: TableDef = TableDef {
    name: "plant_info_eia923",
    columns: &[
        key("plant_id", I),
        col("plant_state", T),
        col("combined_heat_power", B),
        col("eia_sector", I),
        col("naics_code", I),
        col("reporting_frequency", T),
        col("census_region", T),
        col("nerc_region", T),
    ],
    primary_key: &["plant_id"],
};

pub static GENERATION_FUEL_EIA923: TableDef = TableDef {
    name: "generation_fuel_eia923",
    columns: &[
        key("plant_id", I),
        fk("report_year", I, false, "years", "year"),
        fk("month", I, false, "months", "month"),
        col("nuclear_unit_id", I),
        col("prime_mover", T),
        col("fuel_type", T),
        col("aer_fuel_type", T),
        col("fuel_consumed_total", F),
        col("fuel_consumed_for_electricity", F),
        col("fuel_mmbtu_per_unit", F),
        col("fuel_consumed_total_mmbtu", F),
        col("fuel_consumed_for_electricity_mmbtu", F),
        col("net_generation_mwh", F),
    ],
    primary_key: &[],
};

pub static BOILERS_EIA923: TableDef = TableDef {
    name: "boilers_eia923",
    columns: &[key("plant_id", I), key("boiler_id", T), col("prime_mover", T)],
    primary_key: &["plant_id", "boiler_id"],
};

pub static BOILER_FUEL_EIA923: TableDef = TableDef {
    name: "boiler_fuel_eia923",
    columns: &[
        key("plant_id", I),
        key("boiler_id", T),
        fk("report_year", I, false, "years", "year"),
        fk("month", I, false, "months", "month"),
        col("prime_mover", T),
        col("fuel_type", T),
        col("fuel_qty_consumed", F),
        col("fuel_mmbtu_per_unit", F),
        col("sulfur_content", F),
        col("ash_content", F),
    ],
    primary_key: &[],
};

pub static GENERATORS_EIA923: TableDef = TableDef {
    name: "generators_eia923",
    columns: &[key("plant_id", I), key("generator_id", T), col("prime_mover", T)],
    primary_key: &["plant_id", "generator_id"],
};

pub static GENERATION_EIA923: TableDef = TableDef {
    name: "generation_eia923",
    columns: &[
        key("plant_id", I),
        key("generator_id", T),
        fk("report_year", I, false, "years", "year"),
        fk("month", I, false, "months", "month"),
        col("prime_mover", T),
        col("net_generation_mwh", F),
    ],
    primary_key: &[],
};

pub static COALMINE_INFO_EIA923: TableDef = TableDef {
    name: "coalmine_info_eia923",
    columns: &[
        col("coalmine_name", T),
        col("coalmine_type", T),
        col("coalmine_state", T),
        col("coalmine_county", T),
        col("coalmine_msha_id", I),
    ],
    primary_key: &[],
};

pub static FUEL_RECEIPTS_COSTS_EIA923: TableDef = TableDef {
    name: "fuel_receipts_costs_eia923",
    columns: &[
        key("plant_id", I),
        fk("report_year", I, false, "years", "year"),
        fk("month", I, true, "months", "month"),
        col("contract_type", T),
        col("contract_expiration_date", I),
        col("energy_source", T),
        col("coalmine_msha_id", I),
        col("supplier", T),
        col("qty", F),
        col("average_heat_content", F),
        col("average_sulfur_content", F),
        col("average_ash_content", F),
        col("average_mercury_content", F),
        col("fuel_cost", F),
        col("primary_transportation_mode", T),
        col("secondary_transportation_mode", T),
        col("natural_gas_transport", T),
    ],
    primary_key: &[],
};

/// Every destination table, in creation order.
pub static ALL_TABLES: &[&TableDef] = &[
    &FUELS,
    &FUEL_UNITS,
    &MONTHS,
    &QUARTERS,
    &PRIME_MOVERS,
    &RTO_ISO,
    &YEARS,
    &CENSUS_REGIONS,
    &NERC_REGIONS,
    &US_STATES,
    &RESPONDENT_FREQUENCY_EIA923,
    &SECTOR_EIA,
    &CONTRACT_TYPE_EIA923,
    &FUEL_TYPE_EIA923,
    &PRIME_MOVERS_EIA923,
    &FUEL_UNIT_EIA923,
    &FUEL_TYPE_AER_EIA923,
    &ENERGY_SOURCE_EIA923,
    &FUEL_GROUP_EIA923,
    &COALMINE_TYPE_EIA923,
    &COALMINE_STATE_EIA923,
    &TRANSPORT_MODES_EIA923,
    &NATURAL_GAS_TRANSPORT_EIA923,
    &FERC_ACCOUNTS,
    &FERC_DEPRECIATION_LINES,
    &PLANTS,
    &UTILITIES,
    &UTILITIES_EIA923,
    &UTILITIES_FERC1,
    &PLANTS_EIA923,
    &PLANTS_FERC1,
    &UTIL_PLANT_ASSN,
    &FUEL_FERC1,
    &PLANTS_STEAM_FERC1,
    &PLANTS_HYDRO_FERC1,
    &PLANTS_PUMPED_STORAGE_FERC1,
    &PLANTS_SMALL_FERC1,
    &PLANT_IN_SERVICE_FERC1,
    &PURCHASED_POWER_FERC1,
    &ACCUMULATED_DEPRECIATION_FERC1,
    &PLANT_INFO_EIA923,
    &GENERATION_FUEL_EIA923,
    &BOILERS_EIA923,
    &BOILER_FUEL_EIA923,
    &GENERATORS_EIA923,
    &GENERATION_EIA923,
    &COALMINE_INFO_EIA923,
    &FUEL_RECEIPTS_COSTS_EIA923,
];

pub fn table(name: &str) -> Option<&'static TableDef> {
    ALL_TABLES.iter().copied().find(|t| t.name == name)
}

pub fn create_order() -> impl Iterator<Item = &'static TableDef> {
    ALL_TABLES.iter().copied()
}

/// Dependents first, so a plain `DROP TABLE` would also succeed.
pub fn drop_order() -> impl Iterator<Item = &'static TableDef> {
    ALL_TABLES.iter().rev().copied()
}
