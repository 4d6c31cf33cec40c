use super::escape::convert_cell;
use super::model::{Alignment, Table};
use super::validate::{ValidationError, check_shape};

/// Rendering was refused because the table failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid table structure: {source}")]
pub struct InvalidTableError {
    #[from]
    source: ValidationError,
}

impl InvalidTableError {
    /// The validator's reason text.
    pub fn reason(&self) -> String {
        self.source.reason()
    }

    pub fn validation_error(&self) -> &ValidationError {
        &self.source
    }
}

/// Render a table as GitHub-flavoured Markdown.
///
/// When `alignment_override` is given it replaces the table's own alignment
/// before validation; the table itself is not modified. Output is
/// all-or-nothing: an invalid table yields an error and no text.
pub fn render_table(
    table: &Table,
    alignment_override: Option<&[Alignment]>,
) -> Result<String, InvalidTableError> {
    let alignment = alignment_override.unwrap_or(table.alignment.as_slice());

    if let Err(err) = check_shape(&table.header, alignment, &table.rows) {
        log::debug!("refusing to render table: {err}");
        return Err(err.into());
    }

    let mut out = render_header_row(&table.header);
    out.push_str(&render_alignment_row(alignment));
    out.push_str(&render_data_rows(&table.rows));
    Ok(out)
}

/// `| a | b |\n` with every cell escaped. Empty input gives an empty string.
pub fn render_header_row(header: &[String]) -> String {
    render_cells(header.iter().map(|cell| convert_cell(cell)))
}

/// `| --- | :---: |\n`. Empty input gives an empty string.
pub fn render_alignment_row(alignment: &[Alignment]) -> String {
    render_cells(alignment.iter().map(|a| a.marker().to_string()))
}

/// A single data row; a row with no cells renders as an empty string.
pub fn render_data_row(row: &[String]) -> String {
    render_cells(row.iter().map(|cell| convert_cell(cell)))
}

/// Every data row in order. Rows with no cells are skipped individually, so
/// only an empty `rows` (or all-empty rows) gives an empty string.
pub fn render_data_rows(rows: &[Vec<String>]) -> String {
    rows.iter().map(|row| render_data_row(row)).collect()
}

fn render_cells(cells: impl Iterator<Item = String>) -> String {
    let cells: Vec<String> = cells.collect();
    if cells.is_empty() {
        return String::new();
    }
    format!("| {} |\n", cells.join(" | "))
}
