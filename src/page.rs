//! Parsed article page: boilerplate removal and root lookup.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::extract::clean_text;

static CHROME_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".navbox, .sidebar, .infobox").unwrap());
static FIRST_HEADING_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#firstHeading").unwrap());
static CONTENT_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#mw-content-text").unwrap());

/// A parsed article page with navigation/sidebar/infobox chrome removed.
pub struct ArticlePage {
    html: Html,
}

impl ArticlePage {
    /// Parse raw HTML and detach boilerplate chrome subtrees before any
    /// extraction sees them.
    pub fn parse(html: &str) -> Self {
        let mut html = Html::parse_document(html);

        let chrome: Vec<_> = html.select(&CHROME_SEL).map(|el| el.id()).collect();
        for id in &chrome {
            if let Some(mut node) = html.tree.get_mut(*id) {
                node.detach();
            }
        }
        if !chrome.is_empty() {
            log::debug!("stripped {} chrome elements", chrome.len());
        }

        Self { html }
    }

    /// Cleaned text of the page's primary title element, if present.
    pub fn first_heading(&self) -> Option<String> {
        self.html
            .select(&FIRST_HEADING_SEL)
            .next()
            .map(|el| clean_text(&el.text().collect::<String>()))
    }

    /// The article body subtree, if present.
    pub fn content(&self) -> Option<ElementRef<'_>> {
        self.html.select(&CONTENT_SEL).next()
    }
}
