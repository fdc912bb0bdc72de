use crate::config::SavingsAssumptions;
use crate::error::FpiResult;
use crate::savings::sanitize::parse_lenient;
use crate::savings::{estimate, SavingsEstimate};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// One named fleet configuration to estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub fleet_size: f64,
    pub assumptions: SavingsAssumptions,
}

impl Scenario {
    pub fn estimate(&self) -> SavingsEstimate {
        estimate(self.fleet_size, &self.assumptions)
    }
}

// Cells are read as text so one bad number degrades that cell instead of the row.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ScenarioRow {
    name: Option<String>,
    fleet_size: Option<String>,
    annual_distance: Option<String>,
    fuel_before: Option<String>,
    fuel_after: Option<String>,
    fuel_unit_cost: Option<String>,
    brake_before_distance: Option<String>,
    brake_after_distance: Option<String>,
    brake_unit_cost: Option<String>,
    tyre_before_distance: Option<String>,
    tyre_after_distance: Option<String>,
    tyre_unit_cost: Option<String>,
}

fn cell(raw: &Option<String>, fallback: f64) -> f64 {
    match raw.as_deref().map(str::trim) {
        None | Some("") => fallback,
        Some(text) => parse_lenient(text),
    }
}

impl ScenarioRow {
    fn into_scenario(self, row: usize, base: &SavingsAssumptions, base_fleet: f64) -> Scenario {
        let name = match self.name.as_deref().map(str::trim) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => format!("Scenario {}", row),
        };

        let assumptions = SavingsAssumptions {
            annual_distance: cell(&self.annual_distance, base.annual_distance),
            fuel_before: cell(&self.fuel_before, base.fuel_before),
            fuel_after: cell(&self.fuel_after, base.fuel_after),
            fuel_unit_cost: cell(&self.fuel_unit_cost, base.fuel_unit_cost),
            brake_before_distance: cell(&self.brake_before_distance, base.brake_before_distance),
            brake_after_distance: cell(&self.brake_after_distance, base.brake_after_distance),
            brake_unit_cost: cell(&self.brake_unit_cost, base.brake_unit_cost),
            tyre_before_distance: cell(&self.tyre_before_distance, base.tyre_before_distance),
            tyre_after_distance: cell(&self.tyre_after_distance, base.tyre_after_distance),
            tyre_unit_cost: cell(&self.tyre_unit_cost, base.tyre_unit_cost),
        };

        Scenario {
            name,
            fleet_size: cell(&self.fleet_size, base_fleet),
            assumptions,
        }
    }
}

/// Reads scenarios from CSV with a header row. Only `name` is expected; every
/// other column is optional and falls back to `base` / `base_fleet`.
pub fn load_scenarios_from_reader<R: Read>(
    reader: R,
    base: &SavingsAssumptions,
    base_fleet: f64,
) -> FpiResult<Vec<Scenario>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    // An unreadable header row leaves nothing to map cells against.
    let headers = rdr.headers()?;
    debug!("Scenario columns: {:?}", headers);

    let mut scenarios = Vec::new();
    let mut skipped = 0;

    for (idx, result) in rdr.deserialize::<ScenarioRow>().enumerate() {
        let row = idx + 1;
        match result {
            Ok(r) => scenarios.push(r.into_scenario(row, base, base_fleet)),
            Err(e) => {
                skipped += 1;
                warn!("[Row {}] CSV Parse Error: {}", row, e);
            }
        }
    }

    if skipped > 0 {
        warn!("Skipped {} unreadable rows in scenario file.", skipped);
    }
    debug!("Loaded {} scenarios", scenarios.len());

    Ok(scenarios)
}

pub fn load_scenarios<P: AsRef<Path>>(
    path: P,
    base: &SavingsAssumptions,
    base_fleet: f64,
) -> FpiResult<Vec<Scenario>> {
    let file = File::open(path.as_ref())?;
    load_scenarios_from_reader(file, base, base_fleet)
}
