use crate::reports;
use clap::{ArgMatches, Args};
use fleetindex::api::value_proposition;
use fleetindex::config::SavingsAssumptions;
use fleetindex::money::Currency;
use fleetindex::savings::sanitize::parse_lenient_arg;
use fleetindex::savings::Period;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SavingsArgs {
    #[command(flatten)]
    pub assumptions: SavingsAssumptions,

    #[arg(long, value_parser = parse_lenient_arg, default_value_t = 120.0)]
    pub fleet_size: f64,

    #[arg(long, value_enum, default_value_t = Period::Annual)]
    pub period: Period,

    #[arg(long, value_enum, default_value_t = Currency::RM)]
    pub currency: Currency,

    /// JSON file with assumption values; explicit flags override it
    #[arg(long)]
    pub assumptions_file: Option<String>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// File values first, then whatever was typed on the command line.
pub fn resolve_assumptions(
    cli: &SavingsAssumptions,
    file: Option<&str>,
    matches: &ArgMatches,
) -> Result<SavingsAssumptions, String> {
    match file {
        Some(path) => {
            info!("⚖️  Loading assumptions from: {}", path);
            let mut loaded = SavingsAssumptions::load_from_file(path).map_err(|e| e.to_string())?;
            loaded.merge_from_cli(cli, matches);
            Ok(loaded)
        }
        None => Ok(cli.clone()),
    }
}

pub fn run(args: SavingsArgs, matches: &ArgMatches) -> Result<(), String> {
    let assumptions =
        resolve_assumptions(&args.assumptions, args.assumptions_file.as_deref(), matches)?;

    let view = value_proposition(args.fleet_size, &assumptions, args.period, args.currency);

    if args.json {
        let out = serde_json::to_string_pretty(&view).map_err(|e| e.to_string())?;
        println!("{}", out);
    } else {
        reports::savings_table(&view);
        reports::assumptions_table(&assumptions);
    }
    Ok(())
}
