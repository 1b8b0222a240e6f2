//! Table types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single table row: column header → cell text, in header order.
///
/// Backed by `serde_json::Map` with the `preserve_order` feature, so header
/// order survives serialization. Duplicate headers collapse to the last cell.
pub type Row = Map<String, Value>;

/// A normalized data table: body rows keyed by the header row.
///
/// Serializes transparently as a JSON array of row objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    /// Rows in the table
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Header set, taken from the first row's keys.
    pub fn headers(&self) -> Vec<&str> {
        self.rows
            .first()
            .map(|row| row.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
