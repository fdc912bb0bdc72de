use std::env;

pub const DEFAULT_TOKEN_VAR: &str = "FPI_API_TOKEN";

/// Source of the bearer token for the secure endpoint.
///
/// Resolved once per invocation. `None` means no credential is available,
/// and blank tokens are reported as `None` as well.
pub trait CredentialProvider: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

fn non_blank(token: Option<String>) -> Option<String> {
    token
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

/// For demo-only clients.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredential;

impl CredentialProvider for NoCredential {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}

/// A token handed over by the host at construction time.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(pub Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }
}

impl CredentialProvider for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        non_blank(self.0.clone())
    }
}

/// Reads the token from an environment variable at call time, so a host can
/// inject or rotate it between invocations.
#[derive(Debug, Clone)]
pub struct EnvToken {
    pub var: String,
}

impl EnvToken {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvToken {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_VAR)
    }
}

impl CredentialProvider for EnvToken {
    fn bearer_token(&self) -> Option<String> {
        non_blank(env::var(&self.var).ok())
    }
}
