use crate::error::ScoringError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::RangeInclusive;
use strum_macros::{Display, EnumString};
use tracing::warn;

pub const SINGLE_FLEET_RANGE: RangeInclusive<u32> = 1..=500;
pub const MULTI_FLEET_RANGE: RangeInclusive<u32> = 50..=500;
pub const SINGLE_INDEX_RANGE: RangeInclusive<u8> = 0..=100;
pub const MULTI_INDEX_RANGE: RangeInclusive<u8> = 50..=100;

fn omit_basis(basis: &Option<f64>) -> bool {
    !matches!(basis, Some(v) if v.is_finite())
}

/// Operating conditions of the fleet, forwarded to the four-index model.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumString,
    Display,
    Serialize,
    Deserialize,
    ValueEnum,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Application {
    #[default]
    Highway,
    Mixed,
    Offroad,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SingleDeltaRequest {
    pub tenant_key: String,
    pub fleet_size: u32,
    pub baseline_index: u8,
    pub target_index: u8,
    #[serde(default, skip_serializing_if = "omit_basis")]
    pub impact_basis: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexSet {
    pub uptime: u8,
    pub route_management: u8,
    pub driving: u8,
    pub personnel: u8,
}

impl IndexSet {
    pub fn uniform(value: u8) -> Self {
        Self {
            uptime: value,
            route_management: value,
            driving: value,
            personnel: value,
        }
    }

    fn named(&self) -> [(&'static str, u8); 4] {
        [
            ("uptime", self.uptime),
            ("route_management", self.route_management),
            ("driving", self.driving),
            ("personnel", self.personnel),
        ]
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexTransition {
    pub before: IndexSet,
    pub after: IndexSet,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MultiIndexRequest {
    pub tenant_key: String,
    pub fleet_size: u32,
    pub avg_productivity_per_vehicle: f64,
    pub application: Application,
    pub indices: IndexTransition,
    #[serde(default, skip_serializing_if = "omit_basis")]
    pub impact_basis: Option<f64>,
}

/// Body of a scoring call.
///
/// The two shapes are not interchangeable: the server decides what to do with
/// each. On the wire the variant is implied by its fields.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ScoringRequest {
    SingleDelta(SingleDeltaRequest),
    MultiIndex(MultiIndexRequest),
}

impl ScoringRequest {
    pub fn single(tenant_key: impl Into<String>, fleet_size: u32, baseline: u8, target: u8) -> Self {
        ScoringRequest::SingleDelta(SingleDeltaRequest {
            tenant_key: tenant_key.into(),
            fleet_size,
            baseline_index: baseline,
            target_index: target,
            impact_basis: None,
        })
    }

    pub fn multi(
        tenant_key: impl Into<String>,
        fleet_size: u32,
        avg_productivity_per_vehicle: f64,
        application: Application,
        indices: IndexTransition,
    ) -> Self {
        ScoringRequest::MultiIndex(MultiIndexRequest {
            tenant_key: tenant_key.into(),
            fleet_size,
            avg_productivity_per_vehicle,
            application,
            indices,
            impact_basis: None,
        })
    }

    /// Attaches an override; non-finite values are dropped here.
    pub fn with_impact_basis(mut self, basis: Option<f64>) -> Self {
        let basis = basis.filter(|v| v.is_finite());
        match &mut self {
            ScoringRequest::SingleDelta(r) => r.impact_basis = basis,
            ScoringRequest::MultiIndex(r) => r.impact_basis = basis,
        }
        self
    }

    pub fn impact_basis(&self) -> Option<f64> {
        let basis = match self {
            ScoringRequest::SingleDelta(r) => r.impact_basis,
            ScoringRequest::MultiIndex(r) => r.impact_basis,
        };
        basis.filter(|v| v.is_finite())
    }

    pub fn fleet_size(&self) -> u32 {
        match self {
            ScoringRequest::SingleDelta(r) => r.fleet_size,
            ScoringRequest::MultiIndex(r) => r.fleet_size,
        }
    }

    /// Domain checks run before anything goes on the wire.
    pub fn validate(&self) -> Result<(), ScoringError> {
        match self {
            ScoringRequest::SingleDelta(r) => {
                check_fleet(r.fleet_size, SINGLE_FLEET_RANGE)?;
                check_index("baseline_index", r.baseline_index, SINGLE_INDEX_RANGE)?;
                check_index("target_index", r.target_index, SINGLE_INDEX_RANGE)?;
            }
            ScoringRequest::MultiIndex(r) => {
                check_fleet(r.fleet_size, MULTI_FLEET_RANGE)?;
                if !r.avg_productivity_per_vehicle.is_finite() || r.avg_productivity_per_vehicle < 0.0
                {
                    return Err(ScoringError::InvalidRequest(format!(
                        "avg_productivity_per_vehicle must be a non-negative finite number, got {}",
                        r.avg_productivity_per_vehicle
                    )));
                }
                for (phase, set) in [("before", &r.indices.before), ("after", &r.indices.after)] {
                    for (name, value) in set.named() {
                        check_index(&format!("{}.{}", phase, name), value, MULTI_INDEX_RANGE)?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn check_fleet(value: u32, range: RangeInclusive<u32>) -> Result<(), ScoringError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ScoringError::InvalidRequest(format!(
            "fleet_size must be within {}..={}, got {}",
            range.start(),
            range.end(),
            value
        )))
    }
}

fn check_index(name: &str, value: u8, range: RangeInclusive<u8>) -> Result<(), ScoringError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ScoringError::InvalidRequest(format!(
            "{} must be within {}..={}, got {}",
            name,
            range.start(),
            range.end(),
            value
        )))
    }
}

/// The headline figure; which one a server returns depends on the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Headline {
    ProjectedMonthlySavings(f64),
    FpiPercent(f64),
}

/// Display-only view of a scoring result.
///
/// Every field is read on its own, so a missing or mistyped field only
/// blanks that field.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ScoringResponse {
    pub run_id: Option<String>,
    pub fleet_size: Option<f64>,
    pub baseline_index: Option<f64>,
    pub target_index: Option<f64>,
    pub delta_index: Option<f64>,
    pub projected_monthly_savings: Option<f64>,
    pub fpi_percent: Option<f64>,
    pub confidence: Option<f64>,
    pub explain: Vec<String>,
    /// Structured driver breakdown returned by the four-index model.
    pub explanation: Option<Value>,
}

impl ScoringResponse {
    pub fn from_value(value: &Value) -> Self {
        let empty = Map::new();
        let obj = value.as_object().unwrap_or(&empty);
        let num = |key: &str| obj.get(key).and_then(Value::as_f64);

        let fpi_percent = num("fpi_percent").or_else(|| {
            obj.get("outputs")
                .and_then(|o| o.get("fpi_percent"))
                .and_then(Value::as_f64)
        });

        let explain = obj
            .get("explain")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            run_id: obj.get("run_id").and_then(|v| match v {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            }),
            fleet_size: num("fleet_size"),
            baseline_index: num("baseline_index"),
            target_index: num("target_index"),
            delta_index: num("delta_index"),
            projected_monthly_savings: num("projected_monthly_savings"),
            fpi_percent,
            confidence: num("confidence"),
            explain,
            explanation: obj.get("explanation").filter(|v| !v.is_null()).cloned(),
        }
    }

    /// Parses a success body. A body that is not JSON yields an empty response.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(v) => Self::from_value(&v),
            Err(e) => {
                warn!("Scoring response body is not valid JSON ({}); showing empty result", e);
                Self::default()
            }
        }
    }

    pub fn headline(&self) -> Option<Headline> {
        self.projected_monthly_savings
            .map(Headline::ProjectedMonthlySavings)
            .or_else(|| self.fpi_percent.map(Headline::FpiPercent))
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Message for a non-success status. Never fails: a body that does not parse
/// is treated as an empty object.
pub fn failure_message(status: u16, body: &str) -> String {
    let parsed = serde_json::from_str::<Value>(body).unwrap_or_else(|_| Value::Object(Map::new()));

    ["error", "message"]
        .iter()
        .find_map(|key| {
            parsed
                .get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("request failed with status {}", status))
}
