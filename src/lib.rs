//! post-relay - a thin HTTP front-end for publishing blog posts to a content repository.
//!
//! Each request formats a post (title, content, tags, author) into a slugged
//! Markdown filename plus YAML frontmatter and forwards it as a
//! `repository_dispatch` event to the GitHub API. The downstream automation
//! that actually writes files lives in the content repository; this service is
//! stateless request/response glue.

pub mod config;
pub mod dispatch;
pub mod format;
pub mod server;
pub mod types;
pub mod validate;
pub mod webhooks;

#[cfg(test)]
pub(crate) mod test_utils;
