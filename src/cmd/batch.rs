use super::savings::resolve_assumptions;
use crate::reports;
use clap::{ArgMatches, Args};
use fleetindex::api::evaluate_scenarios;
use fleetindex::config::SavingsAssumptions;
use fleetindex::money::Currency;
use fleetindex::savings::sanitize::parse_lenient_arg;
use fleetindex::savings::Period;
use fleetindex::scenarios::load_scenarios;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// CSV with a `name` column plus optional `fleet_size` and assumption columns
    #[arg(long)]
    pub scenarios: String,

    /// Defaults for cells the CSV leaves empty
    #[command(flatten)]
    pub assumptions: SavingsAssumptions,

    #[arg(long, value_parser = parse_lenient_arg, default_value_t = 120.0)]
    pub fleet_size: f64,

    #[arg(long, value_enum, default_value_t = Period::Annual)]
    pub period: Period,

    #[arg(long, value_enum, default_value_t = Currency::RM)]
    pub currency: Currency,

    #[arg(long)]
    pub assumptions_file: Option<String>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: BatchArgs, matches: &ArgMatches) -> Result<(), String> {
    let base = resolve_assumptions(&args.assumptions, args.assumptions_file.as_deref(), matches)?;

    info!("📂 Loading scenarios: {}", args.scenarios);
    let scenarios = load_scenarios(&args.scenarios, &base, args.fleet_size)
        .map_err(|e| format!("Could not load scenarios from '{}': {}", args.scenarios, e))?;

    if scenarios.is_empty() {
        return Err(format!("No scenarios found in '{}'", args.scenarios));
    }

    let results = evaluate_scenarios(&scenarios, args.period, args.currency);

    if args.json {
        let out = serde_json::to_string_pretty(&results).map_err(|e| e.to_string())?;
        println!("{}", out);
    } else {
        reports::scenario_table(&results);
    }
    Ok(())
}
