//! URL-safe slug generation from post titles.

use regex::Regex;
use std::sync::LazyLock;

/// Everything that is not a word character, whitespace, or a hyphen.
static STRIP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());

/// Any run of whitespace and/or hyphens.
static COLLAPSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-\s]+").unwrap());

/// Generates a URL-friendly slug from a title.
///
/// Lowercases, trims, strips special characters, and collapses every run of
/// whitespace or hyphens into a single hyphen. Word characters are
/// Unicode-aware, so accented letters survive. There is no length cap and no
/// uniqueness guarantee: two titles that differ only in punctuation produce
/// the same slug, and collisions on the same date overwrite downstream.
///
/// A title consisting only of special characters yields an empty slug; the
/// non-empty-title check belongs to the caller, not this function.
pub fn generate_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = STRIP.replace_all(lowered.trim(), "");
    COLLAPSE.replace_all(&stripped, "-").into_owned()
}
