//! YAML frontmatter assembly for blog posts.

/// Generates YAML frontmatter for a blog post.
///
/// When `date` is `None` the current local date is used, formatted
/// `YYYY-MM-DD`. The `tags` line appears only when `tags` is non-empty, the
/// `author` line only when `author` is present and non-empty. The closing
/// delimiter carries a trailing newline so the block is separated from the
/// content that follows it by a blank line.
///
/// Values are written verbatim. A title containing a colon or a newline
/// produces malformed YAML; callers get no escaping here.
pub fn create_frontmatter(
    title: &str,
    date: Option<&str>,
    tags: &[String],
    author: Option<&str>,
) -> String {
    let today;
    let date = match date {
        Some(d) => d,
        None => {
            today = chrono::Local::now().format("%Y-%m-%d").to_string();
            &today
        }
    };

    let mut lines = vec![
        "---".to_string(),
        format!("title: {title}"),
        format!("date: {date}"),
    ];

    if !tags.is_empty() {
        lines.push(format!("tags: {}", tags.join(", ")));
    }
    if let Some(author) = author.filter(|a| !a.is_empty()) {
        lines.push(format!("author: {author}"));
    }

    lines.push("---\n".to_string());
    lines.join("\n")
}
