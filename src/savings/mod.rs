pub mod estimator;
pub mod sanitize;
pub mod types;

pub use self::estimator::estimate;
pub use self::types::{CostDriver, DriverInputs, DriverSavings, Period, PeriodSavings, SavingsEstimate};
