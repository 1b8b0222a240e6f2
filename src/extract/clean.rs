//! Text cleaning for extracted node text.

use std::sync::LazyLock;

use regex::Regex;

static CITATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\d+\]").unwrap());

/// Normalize raw node text: strip bracketed citation markers like `[12]`,
/// the `(listen)` pronunciation annotation, stray carets, and surrounding
/// whitespace. The three patterns never overlap, so removal order does not
/// affect the result.
pub fn clean_text(text: &str) -> String {
    let text = CITATION_RE.replace_all(text, "");
    text.replace("(listen)", "")
        .replace('^', "")
        .trim()
        .to_string()
}
