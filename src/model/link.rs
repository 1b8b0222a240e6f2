//! External link type.

use serde::{Deserialize, Serialize};

/// An external link found in the article body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Cleaned anchor text
    pub text: String,

    /// Raw href attribute, unmodified
    pub href: String,
}

impl Link {
    /// Create a new link.
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }
}
