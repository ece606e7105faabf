//! Repository-dispatch events as data.
//!
//! Handlers build a [`DispatchEvent`] describing what the downstream
//! automation should do, then hand it to a [`Dispatcher`] to execute. Keeping
//! the event as plain data keeps the handlers pure up to the single outbound
//! call and lets tests swap in a recording dispatcher.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod client;

pub use client::GitHubDispatcher;

/// The dispatch event type, naming the action the content repository's
/// automation should take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    CreatePost,
    UpdatePost,
    DeletePost,
}

impl EventType {
    /// Returns the wire string for this event type.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            EventType::CreatePost => "create-post",
            EventType::UpdatePost => "update-post",
            EventType::DeletePost => "delete-post",
        }
    }
}

/// The `client_payload` object of a dispatch event.
///
/// `content` is present for create/update and absent for delete; it is
/// omitted from the serialized JSON entirely rather than sent as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientPayload {
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// A single repository-dispatch event, ready to serialize as the POST body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchEvent {
    pub event_type: EventType,
    pub client_payload: ClientPayload,
}

impl DispatchEvent {
    pub fn create(filename: impl Into<String>, content: impl Into<String>) -> Self {
        DispatchEvent {
            event_type: EventType::CreatePost,
            client_payload: ClientPayload {
                filename: filename.into(),
                content: Some(content.into()),
            },
        }
    }

    pub fn update(filename: impl Into<String>, content: impl Into<String>) -> Self {
        DispatchEvent {
            event_type: EventType::UpdatePost,
            client_payload: ClientPayload {
                filename: filename.into(),
                content: Some(content.into()),
            },
        }
    }

    pub fn delete(filename: impl Into<String>) -> Self {
        DispatchEvent {
            event_type: EventType::DeletePost,
            client_payload: ClientPayload {
                filename: filename.into(),
                content: None,
            },
        }
    }
}

/// Errors from executing a dispatch event.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The hosting API answered with something other than 204.
    ///
    /// Carries the upstream status code and response body text so the caller
    /// can surface both verbatim.
    #[error("GitHub API error: {body}")]
    Upstream { status: u16, body: String },

    /// The request never completed (connect failure, timeout, TLS, ...).
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Executes dispatch events against the hosting API.
///
/// The bearer token is passed per call: token presence is a configuration
/// concern checked by the handler before any outbound work starts, so the
/// dispatcher itself holds no credentials.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    /// Sends one dispatch event. Success means the API answered 204.
    async fn send(&self, token: &str, event: &DispatchEvent) -> Result<(), DispatchError>;
}
