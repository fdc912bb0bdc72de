use crate::config::SavingsAssumptions;
use crate::money::{format_money, Currency};
use crate::savings::{estimate, Period, PeriodSavings, SavingsEstimate};
use crate::scenarios::Scenario;
use crate::scoring::{user_message, RunMode, ScoringClient, ScoringRequest, ScoringResponse};
use serde::Serialize;
use tracing::error;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FormattedSavings {
    pub fuel: String,
    pub brakes: String,
    pub tyres: String,
    pub total: String,
}

/// Everything the value-proposition view shows for one fleet.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValueProposition {
    pub currency: Currency,
    pub period: Period,
    pub period_label: String,
    pub estimate: SavingsEstimate,
    pub totals: PeriodSavings,
    pub formatted: FormattedSavings,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScenarioResult {
    pub name: String,
    pub proposition: ValueProposition,
}

pub fn value_proposition(
    fleet_size: f64,
    assumptions: &SavingsAssumptions,
    period: Period,
    currency: Currency,
) -> ValueProposition {
    present(estimate(fleet_size, assumptions), period, currency)
}

fn present(estimate: SavingsEstimate, period: Period, currency: Currency) -> ValueProposition {
    let totals = estimate.in_period(period);
    let formatted = FormattedSavings {
        fuel: format_money(totals.fuel, currency),
        brakes: format_money(totals.brakes, currency),
        tyres: format_money(totals.tyres, currency),
        total: format_money(totals.total, currency),
    };

    ValueProposition {
        currency,
        period,
        period_label: period.label().to_string(),
        estimate,
        totals,
        formatted,
    }
}

pub fn evaluate_scenarios(
    scenarios: &[Scenario],
    period: Period,
    currency: Currency,
) -> Vec<ScenarioResult> {
    scenarios
        .iter()
        .map(|s| ScenarioResult {
            name: s.name.clone(),
            proposition: present(s.estimate(), period, currency),
        })
        .collect()
}

/// Runs one scoring call and flattens any failure into the message shown to the user.
pub async fn run_model(
    client: &ScoringClient,
    mode: RunMode,
    request: &ScoringRequest,
) -> Result<ScoringResponse, String> {
    client.run(mode, request).await.map_err(|e| {
        error!("Scoring run failed: {}", e);
        user_message(&e)
    })
}
