//! # unwiki
//!
//! Wikipedia article extraction library for Rust.
//!
//! This library parses an article's HTML, strips navigation/sidebar/infobox
//! chrome, and extracts a structured document (title, sectioned body text,
//! external links, data tables) that renders to JSON and Markdown.
//!
//! ## Quick Start
//!
//! ```
//! use unwiki::{extract_html, render, JsonFormat};
//!
//! let html = r#"<h1 id="firstHeading">Rust</h1>
//! <div id="mw-content-text"><p>A systems language.[1]</p></div>"#;
//!
//! let doc = extract_html(html);
//! assert_eq!(doc.title, "Rust");
//!
//! let markdown = render::to_markdown(&doc);
//! let json = render::to_json(&doc, JsonFormat::Pretty)?;
//! # Ok::<(), unwiki::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - **[`ArticlePage`]**: parse HTML and drop boilerplate chrome
//! - **[`extract`]**: walk the content root into a [`Document`]
//! - **[`render`]**: serialize the document to JSON and Markdown
//!
//! The pipeline is a pure transform: one parsed page in, one immutable
//! document out, no shared state between invocations.

pub mod error;
pub mod extract;
pub mod model;
pub mod page;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{ContentBlock, Document, Link, Row, Section, Table};
pub use page::ArticlePage;
pub use render::JsonFormat;

/// Extract a structured document from raw article HTML.
///
/// Boilerplate chrome is stripped before extraction. A page with no
/// recognizable article content degrades to an empty document titled
/// `"Unknown Title"` rather than failing.
pub fn extract_html(html: &str) -> Document {
    let page = ArticlePage::parse(html);
    extract::extract(&page)
}

/// Extract an article from raw HTML and render it as Markdown.
pub fn to_markdown(html: &str) -> String {
    render::to_markdown(&extract_html(html))
}

/// Extract an article from raw HTML and render it as JSON.
pub fn to_json(html: &str, format: JsonFormat) -> Result<String> {
    render::to_json(&extract_html(html), format)
}
