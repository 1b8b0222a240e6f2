//! External link extraction.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use super::clean_text;
use crate::model::Link;

static ANCHOR_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

/// Collect external links under the content root, in document order.
///
/// Keeps absolute (`http...`) and protocol-relative (`//...`) hrefs; drops
/// internal links and `#cite_note` self-references. The href is kept raw,
/// only the anchor text is cleaned.
pub fn extract_links(content: &ElementRef) -> Vec<Link> {
    content
        .select(&ANCHOR_SEL)
        .filter_map(|anchor| {
            let href = anchor.value().attr("href")?;
            if !is_external(href) {
                return None;
            }
            Some(Link::new(
                clean_text(&anchor.text().collect::<String>()),
                href,
            ))
        })
        .collect()
}

fn is_external(href: &str) -> bool {
    (href.starts_with("http") || href.starts_with("//")) && !href.starts_with("#cite_note")
}
