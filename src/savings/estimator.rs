use super::sanitize::{divisor, fleet_size, non_negative};
use super::types::{DriverInputs, DriverSavings, SavingsEstimate};
use crate::config::SavingsAssumptions;
use crate::savings::types::CostDriver;

/// `(distance / 100) * max(0, before - after) * unit_cost`, rates in volume per 100 units.
pub fn fuel_per_vehicle(annual_distance: f64, fuel: &DriverInputs) -> f64 {
    let distance = non_negative(annual_distance);
    let before = non_negative(fuel.before);
    let after = non_negative(fuel.after);
    let cost = non_negative(fuel.unit_cost);

    non_negative((distance / 100.0) * (before - after).max(0.0) * cost)
}

/// Replacements per year before minus after, floored at zero, times cost per replacement.
pub fn wear_per_vehicle(annual_distance: f64, part: &DriverInputs) -> f64 {
    let distance = non_negative(annual_distance);
    let before = divisor(part.before);
    let after = divisor(part.after);
    let cost = non_negative(part.unit_cost);

    non_negative((distance / before - distance / after).max(0.0) * cost)
}

pub fn per_vehicle(driver: CostDriver, assumptions: &SavingsAssumptions) -> f64 {
    let inputs = assumptions.driver(driver);
    match driver {
        CostDriver::Fuel => fuel_per_vehicle(assumptions.annual_distance, &inputs),
        CostDriver::Brakes | CostDriver::Tyres => {
            wear_per_vehicle(assumptions.annual_distance, &inputs)
        }
    }
}

/// Fleet-wide annual savings. Never fails and never returns a negative figure.
/// Products that overflow degrade to zero.
pub fn estimate(fleet: f64, assumptions: &SavingsAssumptions) -> SavingsEstimate {
    let fleet = fleet_size(fleet);

    let item = |driver: CostDriver| {
        let per_vehicle = per_vehicle(driver, assumptions);
        DriverSavings {
            per_vehicle,
            fleet_annual: non_negative(per_vehicle * fleet),
        }
    };

    let fuel = item(CostDriver::Fuel);
    let brakes = item(CostDriver::Brakes);
    let tyres = item(CostDriver::Tyres);

    SavingsEstimate {
        fleet_size: fleet,
        total_annual: non_negative(fuel.fleet_annual + brakes.fleet_annual + tyres.fleet_annual),
        fuel,
        brakes,
        tyres,
    }
}
