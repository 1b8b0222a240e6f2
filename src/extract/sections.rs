//! Section segmentation over the content root.

use std::mem;
use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use super::clean_text;
use crate::model::{ContentBlock, Section};

static BLOCK_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p, h2, h3, h4, h5, h6, ul, ol").unwrap());

/// Group the content root's paragraphs and lists into heading-delimited
/// sections.
///
/// Content before the first heading lands in a synthetic "Introduction"
/// section. Sections that end up with no content are dropped, including the
/// synthetic one.
pub fn extract_sections(content: &ElementRef) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = Section::new("Introduction");

    for element in content.select(&BLOCK_SEL) {
        match element.value().name() {
            "h2" | "h3" | "h4" | "h5" | "h6" => {
                let next = Section::new(clean_text(&element.text().collect::<String>()));
                let done = mem::replace(&mut current, next);
                if !done.is_empty() {
                    sections.push(done);
                }
            }
            "p" => {
                current.content.push(ContentBlock::Paragraph {
                    text: clean_text(&element.text().collect::<String>()),
                });
            }
            "ul" | "ol" => {
                // Direct list items only; nested sub-lists surface as their
                // own List blocks through the document-order scan.
                let items = element
                    .children()
                    .filter_map(ElementRef::wrap)
                    .filter(|child| child.value().name() == "li")
                    .map(|li| clean_text(&li.text().collect::<String>()))
                    .collect();
                current.content.push(ContentBlock::List { items });
            }
            _ => {}
        }
    }

    if !current.is_empty() {
        sections.push(current);
    }

    sections
}
