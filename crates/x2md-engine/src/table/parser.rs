use super::model::Table;

/// Parse tab-separated text into a [`Table`].
///
/// Lines may end in `\n`, `\r\n` or a bare `\r`. Empty lines are dropped, the
/// first remaining line becomes the header and every later line a data row.
/// Cells are taken verbatim: no trimming, and adjacent tabs yield empty cells.
///
/// This never fails. Ragged or empty input produces a table that
/// [`validate_table`](super::validate_table) will reject.
pub fn parse_tsv(text: &str) -> Table {
    // Splitting on either terminator and dropping empty pieces is the same as
    // splitting on `\r\n|\n|\r` and then dropping empty lines.
    let mut lines = text.split(['\r', '\n']).filter(|line| !line.is_empty());

    let Some(header_line) = lines.next() else {
        log::debug!("TSV input has no non-empty lines");
        return Table::default();
    };

    let header = split_cells(header_line);
    let rows: Vec<Vec<String>> = lines.map(split_cells).collect();

    log::debug!(
        "parsed TSV: {} column(s), {} data row(s)",
        header.len(),
        rows.len()
    );

    Table::new(header, rows)
}

fn split_cells(line: &str) -> Vec<String> {
    line.split('\t').map(str::to_string).collect()
}
