use crate::error::{FpiError, FpiResult};
use crate::savings::sanitize::parse_lenient_arg;
use crate::savings::types::{CostDriver, DriverInputs};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Editable assumptions behind the value-proposition estimate.
///
/// Distances are per vehicle. Fuel rates are volume per 100 distance units;
/// brake and tyre figures are the distance between replacements. Flag text that
/// is not a number is kept as NaN and degrades like any other non-finite input.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavingsAssumptions {
    #[arg(long, value_parser = parse_lenient_arg, default_value_t = 120_000.0)]
    pub annual_distance: f64,

    // === FUEL ===
    #[arg(long, value_parser = parse_lenient_arg, default_value_t = 30.0)]
    pub fuel_before: f64,
    #[arg(long, value_parser = parse_lenient_arg, default_value_t = 28.0)]
    pub fuel_after: f64,
    #[arg(long, value_parser = parse_lenient_arg, default_value_t = 2.15)]
    pub fuel_unit_cost: f64,

    // === BRAKES ===
    #[arg(long, value_parser = parse_lenient_arg, default_value_t = 60_000.0)]
    pub brake_before_distance: f64,
    #[arg(long, value_parser = parse_lenient_arg, default_value_t = 75_000.0)]
    pub brake_after_distance: f64,
    #[arg(long, value_parser = parse_lenient_arg, default_value_t = 1_800.0)]
    pub brake_unit_cost: f64,

    // === TYRES ===
    #[arg(long, value_parser = parse_lenient_arg, default_value_t = 90_000.0)]
    pub tyre_before_distance: f64,
    #[arg(long, value_parser = parse_lenient_arg, default_value_t = 110_000.0)]
    pub tyre_after_distance: f64,
    #[arg(long, value_parser = parse_lenient_arg, default_value_t = 7_000.0)]
    pub tyre_unit_cost: f64,
}

impl Default for SavingsAssumptions {
    fn default() -> Self {
        Self {
            annual_distance: 120_000.0,
            fuel_before: 30.0,
            fuel_after: 28.0,
            fuel_unit_cost: 2.15,
            brake_before_distance: 60_000.0,
            brake_after_distance: 75_000.0,
            brake_unit_cost: 1_800.0,
            tyre_before_distance: 90_000.0,
            tyre_after_distance: 110_000.0,
            tyre_unit_cost: 7_000.0,
        }
    }
}

impl SavingsAssumptions {
    /// The (before, after, unit cost) triple for one driver.
    pub fn driver(&self, driver: CostDriver) -> DriverInputs {
        match driver {
            CostDriver::Fuel => DriverInputs {
                before: self.fuel_before,
                after: self.fuel_after,
                unit_cost: self.fuel_unit_cost,
            },
            CostDriver::Brakes => DriverInputs {
                before: self.brake_before_distance,
                after: self.brake_after_distance,
                unit_cost: self.brake_unit_cost,
            },
            CostDriver::Tyres => DriverInputs {
                before: self.tyre_before_distance,
                after: self.tyre_after_distance,
                unit_cost: self.tyre_unit_cost,
            },
        }
    }

    pub fn set_driver(&mut self, driver: CostDriver, inputs: DriverInputs) {
        match driver {
            CostDriver::Fuel => {
                self.fuel_before = inputs.before;
                self.fuel_after = inputs.after;
                self.fuel_unit_cost = inputs.unit_cost;
            }
            CostDriver::Brakes => {
                self.brake_before_distance = inputs.before;
                self.brake_after_distance = inputs.after;
                self.brake_unit_cost = inputs.unit_cost;
            }
            CostDriver::Tyres => {
                self.tyre_before_distance = inputs.before;
                self.tyre_after_distance = inputs.after;
                self.tyre_unit_cost = inputs.unit_cost;
            }
        }
    }

    /// Loads assumptions from JSON. Keys missing from the file keep their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FpiResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            FpiError::Config(format!(
                "Failed to read assumptions file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(serde_json::from_str(&content)?)
    }

    /// Copies over only the fields the user actually typed on the command line,
    /// so clap defaults never clobber values loaded from a file.
    pub fn merge_from_cli(&mut self, cli: &SavingsAssumptions, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field;
                }
            };
        }

        update_if_present!(annual_distance, "annual_distance");

        update_if_present!(fuel_before, "fuel_before");
        update_if_present!(fuel_after, "fuel_after");
        update_if_present!(fuel_unit_cost, "fuel_unit_cost");

        update_if_present!(brake_before_distance, "brake_before_distance");
        update_if_present!(brake_after_distance, "brake_after_distance");
        update_if_present!(brake_unit_cost, "brake_unit_cost");

        update_if_present!(tyre_before_distance, "tyre_before_distance");
        update_if_present!(tyre_after_distance, "tyre_after_distance");
        update_if_present!(tyre_unit_cost, "tyre_unit_cost");
    }
}
