//! TSV to Markdown table pipeline.
//!
//! Parsing is total and never fails, validation is a separate step, and
//! rendering validates before it writes anything:
//!
//! ```text
//! &str --parse_tsv--> Table --validate_table--> Ok(()) --render_table--> String
//! ```

pub mod escape;
pub mod model;
pub mod parser;
pub mod render;
pub mod validate;

pub use escape::{convert_cell, escape_cell, newlines_to_br};
pub use model::{Alignment, Table, UnknownAlignment, parse_alignments};
pub use parser::parse_tsv;
pub use render::{
    InvalidTableError, render_alignment_row, render_data_row, render_data_rows, render_header_row,
    render_table,
};
pub use validate::{ValidationError, validate_table};

/// Convert TSV text straight into a Markdown table.
///
/// Equivalent to [`parse_tsv`] followed by [`render_table`].
pub fn tsv_to_markdown_table(
    text: &str,
    alignment_override: Option<&[Alignment]>,
) -> Result<String, InvalidTableError> {
    let table = parse_tsv(text);
    render_table(&table, alignment_override)
}
