use super::credentials::{CredentialProvider, NoCredential};
use super::protocol::{failure_message, ScoringRequest, ScoringResponse};
use crate::error::ScoringError;
use clap::ValueEnum;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum_macros::{Display, EnumString};
use tracing::{debug, info, warn};

pub const DEFAULT_API_BASE: &str = "https://api.tec-centric.tech";

/// Which scoring endpoint to call.
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
pub enum RunMode {
    /// Unauthenticated demo model.
    #[default]
    Demo,
    /// Tenant model, requires a bearer token.
    Secure,
}

impl RunMode {
    pub fn path(&self) -> &'static str {
        match self {
            RunMode::Demo => "/v1/fpi/demo-run",
            RunMode::Secure => "/v1/fpi/run",
        }
    }
}

/// Thin client over the remote scoring service.
///
/// One `run` is exactly one POST: no retries, no caching, no timeout beyond
/// the transport's own. Overlapping calls are independent; see
/// [`crate::scoring::ScoringSession`] for discarding stale results.
#[derive(Clone)]
pub struct ScoringClient {
    http: Client,
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl ScoringClient {
    pub fn new(base_url: impl Into<String>, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            credentials,
        }
    }

    /// A client with no credential source; secure runs always fail fast.
    pub fn demo(base_url: impl Into<String>) -> Self {
        Self::new(base_url, Arc::new(NoCredential))
    }

    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, mode: RunMode) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), mode.path())
    }

    pub async fn run(
        &self,
        mode: RunMode,
        request: &ScoringRequest,
    ) -> Result<ScoringResponse, ScoringError> {
        request.validate()?;

        let token = match mode {
            RunMode::Demo => None,
            RunMode::Secure => Some(
                self.credentials
                    .bearer_token()
                    .ok_or(ScoringError::AuthenticationRequired)?,
            ),
        };

        let url = self.endpoint(mode);
        info!(
            "📤 Scoring run ({}, fleet of {}) -> {}",
            mode,
            request.fleet_size(),
            url
        );

        let mut req = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(request);
        if let Some(token) = token {
            req = req.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let res = req.send().await?;
        let status = res.status();
        let body = res.text().await.unwrap_or_else(|e| {
            warn!("Failed to read scoring response body: {}", e);
            String::new()
        });

        if !status.is_success() {
            let message = failure_message(status.as_u16(), &body);
            warn!("❌ Scoring run rejected ({}): {}", status.as_u16(), message);
            return Err(ScoringError::RequestFailed {
                status: status.as_u16(),
                message,
            });
        }

        let response = ScoringResponse::from_body(&body);
        debug!("Scoring response: {:?}", response);
        info!(
            "✅ Scoring run complete (run id: {})",
            response.run_id.as_deref().unwrap_or("—")
        );
        Ok(response)
    }
}
