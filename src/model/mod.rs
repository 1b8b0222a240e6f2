//! Document model types for extracted article content.
//!
//! This module defines the intermediate representation that bridges HTML
//! extraction and content rendering. The model is immutable once built and
//! round-trips through JSON without loss.

mod document;
mod link;
mod section;
mod table;

pub use document::Document;
pub use link::Link;
pub use section::{ContentBlock, Section};
pub use table::{Row, Table};
