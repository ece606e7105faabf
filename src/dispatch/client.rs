//! Reqwest-backed dispatcher scoped to a specific repository.

use async_trait::async_trait;
use tracing::debug;

use super::{DispatchError, DispatchEvent, Dispatcher};
use crate::types::RepoId;

const API_BASE: &str = "https://api.github.com";
const ACCEPT: &str = "application/vnd.github.v3+json";

/// Sends repository-dispatch events to the GitHub API.
///
/// All events sent through one instance target the same repository. Uses the
/// HTTP client's default timeout; a slow upstream holds the request for the
/// full round trip.
#[derive(Clone)]
pub struct GitHubDispatcher {
    http: reqwest::Client,
    repo: RepoId,
}

impl GitHubDispatcher {
    /// Creates a dispatcher scoped to the given repository.
    pub fn new(repo: RepoId) -> Self {
        GitHubDispatcher {
            http: reqwest::Client::new(),
            repo,
        }
    }

    /// Returns the repository this dispatcher is scoped to.
    pub fn repo(&self) -> &RepoId {
        &self.repo
    }

    /// The dispatches endpoint URL for the scoped repository.
    pub fn dispatch_url(&self) -> String {
        format!("{API_BASE}/repos/{}/{}/dispatches", self.repo.owner, self.repo.repo)
    }
}

impl std::fmt::Debug for GitHubDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubDispatcher")
            .field("repo", &self.repo)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Dispatcher for GitHubDispatcher {
    async fn send(&self, token: &str, event: &DispatchEvent) -> Result<(), DispatchError> {
        debug!(
            repo = %self.repo,
            event_type = event.event_type.as_api_str(),
            filename = %event.client_payload.filename,
            "Sending repository dispatch"
        );

        let response = self
            .http
            .post(self.dispatch_url())
            .header("Accept", ACCEPT)
            .header("Authorization", format!("token {token}"))
            .json(event)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 204 {
            return Ok(());
        }

        // Anything but 204 is a failure; keep the body text for the caller.
        let body = response.text().await.unwrap_or_default();
        Err(DispatchError::Upstream {
            status: status.as_u16(),
            body,
        })
    }
}
