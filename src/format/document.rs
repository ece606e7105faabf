//! Filename and full-document assembly.

/// Builds the repository filename for a newly created post: `{date}-{slug}.md`.
pub fn post_filename(date: &str, slug: &str) -> String {
    format!("{date}-{slug}.md")
}

/// Joins frontmatter and content into the full document body.
///
/// The frontmatter already ends with a newline after its closing delimiter,
/// so the extra separator here leaves exactly one blank line before the
/// content.
pub fn full_document(frontmatter: &str, content: &str) -> String {
    format!("{frontmatter}\n{content}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::create_frontmatter;

    #[test]
    fn filename_shape() {
        assert_eq!(post_filename("2024-01-01", "hello-world"), "2024-01-01-hello-world.md");
    }

    #[test]
    fn blank_line_between_frontmatter_and_content() {
        let fm = create_frontmatter("T", Some("2024-01-01"), &[], None);
        let doc = full_document(&fm, "Body text.");
        assert!(doc.contains("---\n\nBody text."));
    }
}
