use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use fleetindex::launch::{parse_basis, LaunchOptions};
use fleetindex::logging::init_tracing;
use std::process;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Fleet Performance Index calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Launch query from an embedding page, e.g. "embed=1&basis=1.2"
    #[arg(global = true, long)]
    launch_query: Option<String>,

    /// Suppress banner and footer
    #[arg(global = true, long, default_value_t = false)]
    embed: bool,

    /// Impact basis override forwarded to the scoring service (ignored unless finite)
    #[arg(global = true, long)]
    basis: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate fuel, brake and tyre savings for one fleet
    Savings(cmd::savings::SavingsArgs),
    /// Estimate savings for every fleet scenario in a CSV file
    Batch(cmd::batch::BatchArgs),
    /// Score the fleet with the remote FPI service
    Run(cmd::run::RunArgs),
}

impl Cli {
    fn launch_options(&self) -> LaunchOptions {
        let mut opts = self
            .launch_query
            .as_deref()
            .map(LaunchOptions::from_query)
            .unwrap_or_default();

        if self.embed {
            opts.embed = true;
        }
        if let Some(raw) = &self.basis {
            opts.impact_basis = parse_basis(raw);
        }
        opts
    }
}

#[tokio::main]
async fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_tracing(if cli.debug { "debug" } else { "info" });

    let launch = cli.launch_options();
    if !launch.embed {
        reports::banner();
    }

    let result = match cli.command {
        Commands::Savings(args) => {
            let sub = matches.subcommand_matches("savings").unwrap_or(&matches);
            cmd::savings::run(args, sub)
        }
        Commands::Batch(args) => {
            let sub = matches.subcommand_matches("batch").unwrap_or(&matches);
            cmd::batch::run(args, sub)
        }
        Commands::Run(args) => cmd::run::run(args, launch).await,
    };

    if !launch.embed {
        reports::footer();
    }

    if let Err(msg) = result {
        eprintln!("❌ {}", msg);
        process::exit(1);
    }
}
