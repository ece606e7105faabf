//! Pure formatting of post payloads into repository documents.
//!
//! Nothing here touches the network or the environment (the frontmatter
//! builder reads the clock when no date is supplied, nothing else). The
//! handlers in `server::posts` compose these functions per request.

pub mod document;
pub mod frontmatter;
pub mod slug;

pub use document::{full_document, post_filename};
pub use frontmatter::create_frontmatter;
pub use slug::generate_slug;
