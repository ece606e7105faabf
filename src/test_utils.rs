//! Dispatcher fakes and state builders shared across test modules.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::Config;
use crate::dispatch::{DispatchError, DispatchEvent, Dispatcher};
use crate::server::AppState;
use crate::types::RepoId;

/// Records every event instead of calling out, always succeeding.
#[derive(Default)]
pub(crate) struct RecordingDispatcher {
    sent: Mutex<Vec<DispatchEvent>>,
}

impl RecordingDispatcher {
    /// Returns a copy of all events sent so far.
    pub(crate) fn sent(&self) -> Vec<DispatchEvent> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Dispatcher for RecordingDispatcher {
    async fn send(&self, _token: &str, event: &DispatchEvent) -> Result<(), DispatchError> {
        self.sent.lock().unwrap().push(event.clone());
        Ok(())
    }
}

/// Fails every send with a fixed upstream status and body.
pub(crate) struct FailingDispatcher {
    status: u16,
    body: String,
}

#[async_trait]
impl Dispatcher for FailingDispatcher {
    async fn send(&self, _token: &str, _event: &DispatchEvent) -> Result<(), DispatchError> {
        Err(DispatchError::Upstream {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

fn test_config(token: Option<&str>, secret: Option<&[u8]>) -> Config {
    Config {
        github_token: token.map(String::from),
        webhook_secret: secret.map(<[u8]>::to_vec),
        repo: RepoId::new("octocat", "hello-world"),
        port: 0,
    }
}

/// App state wired to a recording dispatcher, returned alongside it so tests
/// can inspect what was sent.
pub(crate) fn recording_state(token: Option<&str>) -> (AppState, Arc<RecordingDispatcher>) {
    let dispatcher = Arc::new(RecordingDispatcher::default());
    let state = AppState::new(
        test_config(token, Some(b"test-secret")),
        dispatcher.clone(),
    );
    (state, dispatcher)
}

/// App state whose dispatcher fails with the given upstream status and body.
pub(crate) fn failing_state(status: u16, body: &str) -> AppState {
    AppState::new(
        test_config(Some("tok"), Some(b"test-secret")),
        Arc::new(FailingDispatcher {
            status,
            body: body.to_string(),
        }),
    )
}

/// App state with the given webhook secret (or none) for guard tests.
pub(crate) fn app_state_with_secret(secret: Option<&[u8]>) -> AppState {
    AppState::new(
        test_config(Some("tok"), secret),
        Arc::new(RecordingDispatcher::default()),
    )
}
