//! Process configuration, read once at startup and injected into the server
//! state.
//!
//! The token and webhook secret stay optional: the service starts without
//! them and the affected routes answer 500 until they are configured, which
//! keeps a misconfigured deploy observable instead of crash-looping.

use std::env;
use thiserror::Error;

use crate::types::RepoId;

/// Environment variable holding the bearer token for outbound dispatches.
pub const ENV_GITHUB_TOKEN: &str = "GHTOKEN";
/// Environment variable holding the inbound webhook shared secret.
pub const ENV_WEBHOOK_SECRET: &str = "GITHUB_WEBHOOK_SECRET";
/// Environment variable naming the target repository as `owner/repo`.
pub const ENV_DISPATCH_REPO: &str = "DISPATCH_REPO";
/// Environment variable for the listen port.
pub const ENV_PORT: &str = "PORT";

const DEFAULT_PORT: u16 = 3000;

/// Startup configuration errors. Unlike a missing token or secret, a missing
/// or malformed target repository makes every route useless, so it fails
/// startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{ENV_DISPATCH_REPO} is not set")]
    MissingRepo,

    #[error("{ENV_DISPATCH_REPO} is not in owner/repo form: {0:?}")]
    InvalidRepo(String),

    #[error("{ENV_PORT} is not a valid port: {0:?}")]
    InvalidPort(String),
}

/// Runtime configuration for the service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token for outbound dispatch calls. `None` surfaces as a 500 on
    /// the post routes.
    pub github_token: Option<String>,

    /// Shared secret for inbound webhook signature verification. `None`
    /// surfaces as a 500 on guarded routes.
    pub webhook_secret: Option<Vec<u8>>,

    /// The content repository that receives dispatch events.
    pub repo: RepoId,

    /// Listen port.
    pub port: u16,
}

impl Config {
    /// Builds the configuration from the environment.
    ///
    /// Empty-string token/secret values are treated as unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let github_token = env::var(ENV_GITHUB_TOKEN).ok().filter(|t| !t.is_empty());
        let webhook_secret = env::var(ENV_WEBHOOK_SECRET)
            .ok()
            .filter(|s| !s.is_empty())
            .map(String::into_bytes);

        let repo_raw = env::var(ENV_DISPATCH_REPO).map_err(|_| ConfigError::MissingRepo)?;
        let repo = RepoId::parse(&repo_raw).ok_or(ConfigError::InvalidRepo(repo_raw))?;

        let port = match env::var(ENV_PORT) {
            Err(_) => DEFAULT_PORT,
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
        };

        Ok(Config {
            github_token,
            webhook_secret,
            repo,
            port,
        })
    }
}
