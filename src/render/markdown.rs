//! Markdown rendering for extracted documents.

use serde_json::Value;

use crate::model::{ContentBlock, Document, Link, Section, Table};

/// Render a document with the fixed article template: title, sections, an
/// external-links list, and pipe tables.
pub fn to_markdown(doc: &Document) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {}\n\n", doc.title));

    for section in &doc.sections {
        render_section(&mut output, section);
    }

    output.push_str("## External Links\n\n");
    for link in &doc.links {
        render_link(&mut output, link);
    }

    output.push_str("\n## Tables\n\n");
    for table in &doc.tables {
        render_table(&mut output, table);
    }

    output
}

fn render_section(output: &mut String, section: &Section) {
    output.push_str(&format!("## {}\n\n", section.title));

    for block in &section.content {
        match block {
            ContentBlock::Paragraph { text } => {
                output.push_str(text);
                output.push_str("\n\n");
            }
            ContentBlock::List { items } => {
                for item in items {
                    output.push_str(&format!("- {item}\n"));
                }
                output.push('\n');
            }
        }
    }
}

fn render_link(output: &mut String, link: &Link) {
    output.push_str(&format!("- [{}]({})\n", link.text, link.href));
}

fn render_table(output: &mut String, table: &Table) {
    if table.is_empty() {
        return;
    }

    // Header set comes from the first row; rows carrying other keys render
    // absent values as empty cells.
    let headers = table.headers();

    output.push('|');
    for header in &headers {
        output.push_str(&format!(" {header} |"));
    }
    output.push('\n');

    output.push('|');
    for _ in &headers {
        output.push_str(" --- |");
    }
    output.push('\n');

    for row in &table.rows {
        output.push('|');
        for header in &headers {
            let value = row.get(*header).and_then(Value::as_str).unwrap_or("");
            output.push_str(&format!(" {value} |"));
        }
        output.push('\n');
    }

    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Row;

    fn row(pairs: &[(&str, &str)]) -> Row {
        let mut row = Row::new();
        for (header, value) in pairs {
            row.insert(header.to_string(), Value::String(value.to_string()));
        }
        row
    }

    #[test]
    fn test_title_and_section_template() {
        let mut doc = Document::new("Rust");
        doc.sections.push(Section {
            title: "History".to_string(),
            content: vec![ContentBlock::Paragraph {
                text: "Hello.".to_string(),
            }],
        });

        let md = to_markdown(&doc);
        assert!(md.starts_with("# Rust\n\n## History\n\nHello.\n\n"));
    }

    #[test]
    fn test_list_items_followed_by_blank_line() {
        let mut doc = Document::new("Rust");
        doc.sections.push(Section {
            title: "People".to_string(),
            content: vec![ContentBlock::List {
                items: vec!["a".to_string(), "b".to_string()],
            }],
        });

        let md = to_markdown(&doc);
        assert!(md.contains("## People\n\n- a\n- b\n\n"));
    }

    #[test]
    fn test_links_section_always_present() {
        let mut doc = Document::new("Rust");
        doc.links.push(Link::new("E", "http://e.com"));

        let md = to_markdown(&doc);
        assert!(md.contains("## External Links\n\n- [E](http://e.com)\n"));

        let md = to_markdown(&Document::new("Rust"));
        assert!(md.contains("## External Links\n\n"));
        assert!(md.contains("\n## Tables\n\n"));
    }

    #[test]
    fn test_table_rendering() {
        let mut doc = Document::new("Rust");
        let mut table = Table::new();
        table.add_row(row(&[("Year", "2015"), ("Edition", "2015")]));
        table.add_row(row(&[("Year", "2021"), ("Edition", "2021")]));
        doc.tables.push(table);

        let md = to_markdown(&doc);
        assert!(md.contains(
            "| Year | Edition |\n| --- | --- |\n| 2015 | 2015 |\n| 2021 | 2021 |\n\n"
        ));
    }

    #[test]
    fn test_missing_row_values_render_empty() {
        let mut doc = Document::new("Rust");
        let mut table = Table::new();
        table.add_row(row(&[("A", "1")]));
        table.add_row(row(&[("B", "2")]));
        doc.tables.push(table);

        let md = to_markdown(&doc);
        assert!(md.contains("| A |\n| --- |\n| 1 |\n|  |\n"));
    }

    #[test]
    fn test_empty_table_contributes_nothing() {
        let mut doc = Document::new("Rust");
        doc.tables.push(Table::new());

        let md = to_markdown(&doc);
        assert!(md.ends_with("## Tables\n\n"));
    }
}
