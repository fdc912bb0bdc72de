use crate::reports;
use clap::{Args, ValueEnum};
use fleetindex::api::run_model;
use fleetindex::launch::LaunchOptions;
use fleetindex::scoring::credentials::DEFAULT_TOKEN_VAR;
use fleetindex::scoring::{
    Application, CredentialProvider, EnvToken, IndexSet, IndexTransition, RunMode, ScoringClient,
    ScoringRequest, StaticToken, DEFAULT_API_BASE,
};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RequestShape {
    /// One baseline/target index pair
    Single,
    /// Four before/after indices plus productivity and application
    Multi,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[arg(long, value_enum, default_value_t = RunMode::Demo)]
    pub mode: RunMode,

    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Bearer token for secure mode. Falls back to the --token-env variable.
    #[arg(long)]
    pub token: Option<String>,

    #[arg(long, default_value = DEFAULT_TOKEN_VAR)]
    pub token_env: String,

    #[arg(long, default_value = "demo")]
    pub tenant_key: String,

    #[arg(long, value_enum, default_value_t = RequestShape::Single)]
    pub shape: RequestShape,

    #[arg(long, default_value_t = 120)]
    pub fleet_size: u32,

    // === SINGLE ===
    #[arg(long, default_value_t = 70)]
    pub baseline: u8,
    #[arg(long, default_value_t = 80)]
    pub target: u8,

    // === MULTI ===
    #[arg(long, default_value_t = 250_000.0)]
    pub productivity: f64,
    #[arg(long, value_enum, default_value_t = Application::Highway)]
    pub application: Application,

    #[arg(long, default_value_t = 70)]
    pub uptime_before: u8,
    #[arg(long, default_value_t = 70)]
    pub route_before: u8,
    #[arg(long, default_value_t = 70)]
    pub driving_before: u8,
    #[arg(long, default_value_t = 70)]
    pub personnel_before: u8,

    #[arg(long, default_value_t = 80)]
    pub uptime_after: u8,
    #[arg(long, default_value_t = 80)]
    pub route_after: u8,
    #[arg(long, default_value_t = 80)]
    pub driving_after: u8,
    #[arg(long, default_value_t = 80)]
    pub personnel_after: u8,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl RunArgs {
    pub fn build_request(&self, launch: &LaunchOptions) -> ScoringRequest {
        let request = match self.shape {
            RequestShape::Single => ScoringRequest::single(
                self.tenant_key.clone(),
                self.fleet_size,
                self.baseline,
                self.target,
            ),
            RequestShape::Multi => ScoringRequest::multi(
                self.tenant_key.clone(),
                self.fleet_size,
                self.productivity,
                self.application,
                IndexTransition {
                    before: IndexSet {
                        uptime: self.uptime_before,
                        route_management: self.route_before,
                        driving: self.driving_before,
                        personnel: self.personnel_before,
                    },
                    after: IndexSet {
                        uptime: self.uptime_after,
                        route_management: self.route_after,
                        driving: self.driving_after,
                        personnel: self.personnel_after,
                    },
                },
            ),
        };
        request.with_impact_basis(launch.impact_basis)
    }

    fn credentials(&self) -> Arc<dyn CredentialProvider> {
        match &self.token {
            Some(t) => Arc::new(StaticToken(Some(t.clone()))),
            None => Arc::new(EnvToken::new(self.token_env.clone())),
        }
    }
}

pub async fn run(args: RunArgs, launch: LaunchOptions) -> Result<(), String> {
    let request = args.build_request(&launch);
    let client = ScoringClient::new(args.api_base.clone(), args.credentials());

    info!("⏳ Running model against {}...", client.base_url());
    let response = run_model(&client, args.mode, &request).await?;

    if args.json {
        let out = serde_json::to_string_pretty(&response).map_err(|e| e.to_string())?;
        println!("{}", out);
    } else {
        reports::scoring_result(&response);
    }
    Ok(())
}
