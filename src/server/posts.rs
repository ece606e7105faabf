//! The create/update/delete post handlers.
//!
//! Each handler validates its input, formats the document, checks the
//! configured token, and makes exactly one outbound dispatch call. There are
//! no retries and no idempotency key: repeating a request duplicates the
//! dispatch event downstream.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{info, warn};

use super::AppState;
use crate::dispatch::{DispatchError, DispatchEvent};
use crate::format::{create_frontmatter, full_document, generate_slug, post_filename};

/// Request body for create and update. All fields optional at the serde
/// level so that missing required fields produce the documented 400 instead
/// of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct PostBody {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl PostBody {
    /// Returns title and content, treating empty strings as missing.
    fn required_fields(&self) -> Result<(&str, &str), PostError> {
        let title = self.title.as_deref().filter(|t| !t.is_empty());
        let content = self.content.as_deref().filter(|c| !c.is_empty());
        match (title, content) {
            (Some(title), Some(content)) => Ok((title, content)),
            _ => Err(PostError::MissingTitleOrContent),
        }
    }
}

/// Errors surfaced by the post handlers.
#[derive(Debug, Error)]
pub enum PostError {
    /// A required field is missing or empty. The caller's fault.
    #[error("Title and content are required")]
    MissingTitleOrContent,

    /// No bearer token configured. A deployment problem; checked before any
    /// outbound call is attempted.
    #[error("GitHub token not configured")]
    TokenNotConfigured,

    /// The outbound dispatch failed.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl IntoResponse for PostError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            PostError::MissingTitleOrContent => (StatusCode::BAD_REQUEST, self.to_string()),
            PostError::TokenNotConfigured => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            // Upstream failures keep the downstream status code and body text.
            PostError::Dispatch(DispatchError::Upstream { status, body }) => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                format!("GitHub API error: {body}"),
            ),
            PostError::Dispatch(DispatchError::Http(e)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// `POST /api/posts`
///
/// Formats a new post under a `{today}-{slug}.md` filename and triggers a
/// `create-post` dispatch. Responds 202 with the generated filename and slug;
/// the actual file write happens asynchronously downstream.
pub async fn create_post(
    State(state): State<AppState>,
    Json(body): Json<PostBody>,
) -> Result<Response, PostError> {
    let (title, content) = body.required_fields()?;

    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let slug = generate_slug(title);
    let filename = post_filename(&date, &slug);

    let frontmatter = create_frontmatter(title, Some(&date), &body.tags, body.author.as_deref());
    let document = full_document(&frontmatter, content);

    dispatch(&state, DispatchEvent::create(&filename, document)).await?;

    info!(%filename, %slug, "Post creation triggered");
    Ok((
        StatusCode::ACCEPTED,
        Json(json!({
            "message": "Post creation triggered",
            "filename": filename,
            "slug": slug,
        })),
    )
        .into_response())
}

/// `PUT /api/posts/{*filename}`
///
/// Re-formats the post under the caller-supplied filename and triggers an
/// `update-post` dispatch. The frontmatter date is not carried over from the
/// original post; it defaults to today.
pub async fn update_post(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    Json(body): Json<PostBody>,
) -> Result<Response, PostError> {
    let (title, content) = body.required_fields()?;

    let frontmatter = create_frontmatter(title, None, &body.tags, body.author.as_deref());
    let document = full_document(&frontmatter, content);

    dispatch(&state, DispatchEvent::update(&filename, document)).await?;

    info!(%filename, "Post update triggered");
    Ok((
        StatusCode::ACCEPTED,
        Json(json!({
            "message": "Post update triggered",
            "filename": filename,
        })),
    )
        .into_response())
}

/// `DELETE /api/posts/{*filename}`
///
/// Triggers a `delete-post` dispatch carrying only the filename.
pub async fn delete_post(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, PostError> {
    dispatch(&state, DispatchEvent::delete(&filename)).await?;

    info!(%filename, "Post deletion triggered");
    Ok((
        StatusCode::ACCEPTED,
        Json(json!({
            "message": "Post deletion triggered",
            "filename": filename,
        })),
    )
        .into_response())
}

/// Checks the configured token and sends one dispatch event.
async fn dispatch(state: &AppState, event: DispatchEvent) -> Result<(), PostError> {
    let token = state
        .github_token()
        .ok_or(PostError::TokenNotConfigured)?
        .to_string();

    if let Err(e) = state.dispatcher().send(&token, &event).await {
        warn!(
            event_type = event.event_type.as_api_str(),
            filename = %event.client_payload.filename,
            error = %e,
            "Dispatch failed"
        );
        return Err(e.into());
    }

    Ok(())
}
