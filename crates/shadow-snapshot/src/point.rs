use std::fmt;

use serde::{Deserialize, Serialize};
use text_size::TextSize;

/// Zero-based row/column location in the source text.
///
/// Ordering is row-major: rows compare first, columns break ties.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Point {
    pub row: u32,
    pub column: u32,
}

impl Point {
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

/// A span of source text in both coordinate systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    pub start_position: Point,
    pub end_position: Point,
    #[serde(default)]
    pub start_index: TextSize,
    #[serde(default)]
    pub end_index: TextSize,
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} ({}..{})",
            self.start_position,
            self.end_position,
            u32::from(self.start_index),
            u32::from(self.end_index)
        )
    }
}

/// Description of a text change, shaped like the edits a live parser accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputEdit {
    pub start_index: TextSize,
    pub old_end_index: TextSize,
    pub new_end_index: TextSize,
    pub start_position: Point,
    pub old_end_position: Point,
    pub new_end_position: Point,
}
