use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The independent cost categories behind the savings estimate.
#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CostDriver {
    Fuel,
    Brakes,
    Tyres,
}

impl CostDriver {
    pub fn label(&self) -> &'static str {
        match self {
            CostDriver::Fuel => "Fuel",
            CostDriver::Brakes => "Brakes",
            CostDriver::Tyres => "Tyres",
        }
    }
}

/// Reporting period for presentation. Computation is always annual.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ValueEnum,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Period {
    #[default]
    Annual,
    Monthly,
}

impl Period {
    pub fn divisor(&self) -> f64 {
        match self {
            Period::Annual => 1.0,
            Period::Monthly => 12.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Annual => "Annual",
            Period::Monthly => "Monthly",
        }
    }
}

/// One driver's raw (before, after, unit cost) triple, unsanitised.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriverInputs {
    pub before: f64,
    pub after: f64,
    pub unit_cost: f64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriverSavings {
    pub per_vehicle: f64,
    pub fleet_annual: f64,
}

/// Annual savings for a whole fleet, itemised by driver.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsEstimate {
    /// Fleet size after clamping.
    pub fleet_size: f64,
    pub fuel: DriverSavings,
    pub brakes: DriverSavings,
    pub tyres: DriverSavings,
    pub total_annual: f64,
}

impl SavingsEstimate {
    pub fn driver(&self, driver: CostDriver) -> &DriverSavings {
        match driver {
            CostDriver::Fuel => &self.fuel,
            CostDriver::Brakes => &self.brakes,
            CostDriver::Tyres => &self.tyres,
        }
    }

    pub fn in_period(&self, period: Period) -> PeriodSavings {
        let d = period.divisor();
        PeriodSavings {
            period,
            fuel: self.fuel.fleet_annual / d,
            brakes: self.brakes.fleet_annual / d,
            tyres: self.tyres.fleet_annual / d,
            total: self.total_annual / d,
        }
    }
}

/// Fleet savings scaled to a reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodSavings {
    pub period: Period,
    pub fuel: f64,
    pub brakes: f64,
    pub tyres: f64,
    pub total: f64,
}

impl PeriodSavings {
    pub fn driver(&self, driver: CostDriver) -> f64 {
        match driver {
            CostDriver::Fuel => self.fuel,
            CostDriver::Brakes => self.brakes,
            CostDriver::Tyres => self.tyres,
        }
    }
}
