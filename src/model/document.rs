//! Document-level types.

use super::{Link, Section, Table};
use serde::{Deserialize, Serialize};

/// A structured article extracted from one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Article heading, or "Unknown Title" when the page has none
    pub title: String,

    /// Body text grouped into sections
    pub sections: Vec<Section>,

    /// External links, in document order
    pub links: Vec<Link>,

    /// Normalized data tables, in document order
    pub tables: Vec<Table>,
}

impl Document {
    /// Create an empty document with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
            links: Vec::new(),
            tables: Vec::new(),
        }
    }

    /// Check if the document carries any extracted content.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.links.is_empty() && self.tables.is_empty()
    }
}
