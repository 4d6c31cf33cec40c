use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Per-column alignment hint written into the delimiter row.
///
/// `Unset` writes a plain `---`, which most renderers show left-aligned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Unset,
    Left,
    Center,
    Right,
}

impl Alignment {
    /// The delimiter-row token for this alignment.
    pub fn marker(self) -> &'static str {
        match self {
            Alignment::Unset => "---",
            Alignment::Left => ":---",
            Alignment::Center => ":---:",
            Alignment::Right => "---:",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown alignment: {0:?} (expected left, center, right or unset)")]
pub struct UnknownAlignment(pub String);

impl FromStr for Alignment {
    type Err = UnknownAlignment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" | ":---" => Ok(Alignment::Left),
            "center" | "centre" | "c" | ":---:" => Ok(Alignment::Center),
            "right" | "r" | "---:" => Ok(Alignment::Right),
            "unset" | "default" | "none" | "-" | "---" => Ok(Alignment::Unset),
            _ => Err(UnknownAlignment(s.to_string())),
        }
    }
}

/// Parse a comma-separated alignment list such as `"l, c, r"`.
pub fn parse_alignments(list: &str) -> Result<Vec<Alignment>, UnknownAlignment> {
    if list.trim().is_empty() {
        return Ok(Vec::new());
    }
    list.split(',').map(str::parse).collect()
}

/// A table as read from TSV: header cells, one alignment per column and the
/// data rows in input order.
///
/// Nothing here is checked on construction. A table may be ragged or empty
/// until it goes through [`validate_table`](crate::table::validate_table).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub header: Vec<String>,
    pub alignment: Vec<Alignment>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table with an `Unset` alignment slot for every header column.
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let alignment = vec![Alignment::Unset; header.len()];
        Self {
            header,
            alignment,
            rows,
        }
    }

    /// Replace the alignment wholesale, leaving header and rows as they are.
    pub fn with_alignment(self, alignment: Vec<Alignment>) -> Self {
        Self { alignment, ..self }
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// True when there is neither a header nor any data.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.rows.is_empty()
    }
}
