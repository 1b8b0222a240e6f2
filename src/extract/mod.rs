//! Article content extraction: parsed page → document model.

mod clean;
mod links;
mod sections;
mod tables;

pub use clean::clean_text;
pub use links::extract_links;
pub use sections::extract_sections;
pub use tables::{extract_tables, normalize_table};

use crate::model::Document;
use crate::page::ArticlePage;

/// Extract a structured document from a parsed article page.
///
/// A missing first heading degrades to the title `"Unknown Title"`; a
/// missing content root degrades to a document with empty collections.
/// The input tree is never mutated.
pub fn extract(page: &ArticlePage) -> Document {
    let title = page
        .first_heading()
        .unwrap_or_else(|| "Unknown Title".to_string());

    match page.content() {
        Some(content) => Document {
            title,
            sections: extract_sections(&content),
            links: extract_links(&content),
            tables: extract_tables(&content),
        },
        None => Document::new(title),
    }
}
