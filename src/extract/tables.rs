//! Data-table discovery and normalization.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};
use serde_json::Value;

use super::clean_text;
use crate::model::{Row, Table};

static WIKITABLE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.wikitable").unwrap());
static TR_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static CELL_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("th, td").unwrap());

/// Extract every table carrying the data-table marker class under the
/// content root, in document order. Unmarked tables are ignored.
pub fn extract_tables(content: &ElementRef) -> Vec<Table> {
    content.select(&WIKITABLE_SEL).map(normalize_table).collect()
}

/// Normalize one HTML table into header-keyed rows.
///
/// Row 0 is always taken as the header row, even when it is visually a data
/// row; there is no semantic header detection. When every header cell is
/// empty, headers are synthesized as `Column 1..Column M` for the widest
/// row. Body rows wider than the header set get synthesized overflow
/// headers; rows with no cells are skipped.
pub fn normalize_table(table: ElementRef) -> Table {
    let rows: Vec<ElementRef> = table.select(&TR_SEL).collect();
    if rows.is_empty() {
        return Table::new();
    }

    let mut headers: Vec<String> = cells(&rows[0]).iter().map(cell_text).collect();
    if headers.iter().all(|header| header.is_empty()) {
        let max_columns = rows.iter().map(|row| cells(row).len()).max().unwrap_or(0);
        headers = (1..=max_columns).map(|i| format!("Column {i}")).collect();
    }

    let mut out = Table::new();
    for row in &rows[1..] {
        let row_cells = cells(row);
        if row_cells.is_empty() {
            continue;
        }

        let mut data = Row::new();
        for (i, cell) in row_cells.iter().enumerate() {
            let header = headers
                .get(i)
                .cloned()
                .unwrap_or_else(|| format!("Column {}", i + 1));
            data.insert(header, Value::String(cell_text(cell)));
        }
        out.add_row(data);
    }

    out
}

fn cells<'a>(row: &ElementRef<'a>) -> Vec<ElementRef<'a>> {
    row.select(&CELL_SEL).collect()
}

fn cell_text(cell: &ElementRef) -> String {
    clean_text(&cell.text().collect::<String>())
}
