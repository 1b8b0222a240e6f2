//! JSON rendering for extracted documents.

use crate::error::{Error, Result};
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a document to JSON. Non-ASCII text is emitted literally, not
/// escaped.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContentBlock, Link, Row, Section, Table};
    use serde_json::Value;

    fn sample_document() -> Document {
        let mut doc = Document::new("Ærøskøbing");
        doc.sections.push(Section {
            title: "History".to_string(),
            content: vec![
                ContentBlock::Paragraph {
                    text: "Hello.".to_string(),
                },
                ContentBlock::List {
                    items: vec!["a".to_string(), "b".to_string()],
                },
            ],
        });
        doc.links.push(Link::new("E", "http://e.com"));

        let mut table = Table::new();
        let mut row = Row::new();
        row.insert("X".to_string(), Value::String("1".to_string()));
        table.add_row(row);
        doc.tables.push(table);

        doc
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample_document(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample_document(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_non_ascii_preserved_literally() {
        let json = to_json(&sample_document(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("Ærøskøbing"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_round_trip_preserves_document() {
        let doc = sample_document();
        let json = to_json(&doc, JsonFormat::Pretty).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);
    }
}
