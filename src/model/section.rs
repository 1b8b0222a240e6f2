//! Section and content-block types.

use serde::{Deserialize, Serialize};

/// A titled run of body content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Cleaned heading text; "Introduction" for content before the first heading
    pub title: String,

    /// Content blocks in document order
    pub content: Vec<ContentBlock>,
}

impl Section {
    /// Create an empty section with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: Vec::new(),
        }
    }

    /// Check if the section has any content blocks.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// A single block of section content.
///
/// The JSON representation keeps the `"type"` discriminator field, so
/// documents stay readable as plain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    /// A run of paragraph text
    Paragraph {
        /// Cleaned paragraph text
        text: String,
    },
    /// A flat list of item texts
    List {
        /// Cleaned text of each direct list item
        items: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_new() {
        let section = Section::new("History");
        assert_eq!(section.title, "History");
        assert!(section.is_empty());
    }

    #[test]
    fn test_content_block_json_shape() {
        let block = ContentBlock::Paragraph {
            text: "Hi".to_string(),
        };
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(json, r#"{"type":"paragraph","text":"Hi"}"#);

        let block = ContentBlock::List {
            items: vec!["a".to_string(), "b".to_string()],
        };
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(json, r#"{"type":"list","items":["a","b"]}"#);
    }

    #[test]
    fn test_content_block_round_trip() {
        let block = ContentBlock::List {
            items: vec!["x".to_string()],
        };
        let json = serde_json::to_string(&block).unwrap();
        let back: ContentBlock = serde_json::from_str(&json).unwrap();
        assert_eq!(block, back);
    }
}
