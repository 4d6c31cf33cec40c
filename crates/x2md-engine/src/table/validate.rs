use super::model::{Alignment, Table};

/// Why a table cannot be rendered. The display text is the reason reported
/// to callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Table header is empty")]
    EmptyHeader,
    #[error("Table header and delimiter lengths do not match")]
    AlignmentLengthMismatch,
    #[error("Table data is empty")]
    EmptyData,
    /// `lines` holds 1-based data row numbers, ascending.
    #[error(
        "Data row length does not match header length at line(s): {}",
        join_lines(.lines)
    )]
    RowLengthMismatch { lines: Vec<usize> },
}

impl ValidationError {
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

fn join_lines(lines: &[usize]) -> String {
    lines
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check that a table has a consistent shape.
///
/// The first failing check wins, in this order: empty header, alignment
/// count, empty data, then row widths. Row widths are checked for every row
/// so that all offending lines are reported together.
pub fn validate_table(table: &Table) -> Result<(), ValidationError> {
    check_shape(&table.header, &table.alignment, &table.rows)
}

pub(crate) fn check_shape(
    header: &[String],
    alignment: &[Alignment],
    rows: &[Vec<String>],
) -> Result<(), ValidationError> {
    if header.is_empty() {
        return Err(ValidationError::EmptyHeader);
    }
    if header.len() != alignment.len() {
        return Err(ValidationError::AlignmentLengthMismatch);
    }
    if rows.is_empty() {
        return Err(ValidationError::EmptyData);
    }

    let lines: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row.len() != header.len())
        .map(|(index, _)| index + 1)
        .collect();

    if lines.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::RowLengthMismatch { lines })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::parse_tsv;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn table(header: &[&str], rows: &[&[&str]]) -> Table {
        Table::new(
            header.iter().map(|s| s.to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn accepts_well_formed_table() {
        let t = table(&["Name", "Age"], &[&["Alice", "30"], &["Bob", "25"]]);
        assert_eq!(validate_table(&t), Ok(()));
    }

    #[rstest]
    #[case("", "Table header is empty")]
    #[case("H1\tH2", "Table data is empty")]
    #[case("A\tB\nX", "Data row length does not match header length at line(s): 1")]
    #[case(
        "A\tB\n1\t2\nX\n3\t4\n5\t6\t7",
        "Data row length does not match header length at line(s): 2, 4"
    )]
    fn reports_reason_for_parsed_input(#[case] tsv: &str, #[case] reason: &str) {
        let err = validate_table(&parse_tsv(tsv)).unwrap_err();
        assert_eq!(err.reason(), reason);
    }

    #[test]
    fn alignment_mismatch_is_reported() {
        let t = table(&["A", "B"], &[&["1", "2"]]).with_alignment(vec![Alignment::Left]);
        assert_eq!(
            validate_table(&t),
            Err(ValidationError::AlignmentLengthMismatch)
        );
        assert_eq!(
            ValidationError::AlignmentLengthMismatch.to_string(),
            "Table header and delimiter lengths do not match"
        );
    }

    #[test]
    fn header_check_runs_before_alignment_check() {
        let t = Table {
            header: vec![],
            alignment: vec![Alignment::Left],
            rows: vec![vec!["x".into()]],
        };
        assert_eq!(validate_table(&t), Err(ValidationError::EmptyHeader));
    }

    #[test]
    fn alignment_check_runs_before_data_check() {
        let t = table(&["A"], &[]).with_alignment(vec![]);
        assert_eq!(
            validate_table(&t),
            Err(ValidationError::AlignmentLengthMismatch)
        );
    }

    #[test]
    fn reports_every_mismatched_row() {
        let t = table(&["A", "B"], &[&["1"], &["1", "2"], &[], &["1", "2", "3"]]);
        assert_eq!(
            validate_table(&t),
            Err(ValidationError::RowLengthMismatch {
                lines: vec![1, 3, 4]
            })
        );
    }

    #[test]
    fn validation_is_repeatable() {
        let t = parse_tsv("A\tB\nX");
        assert_eq!(validate_table(&t), validate_table(&t));
    }
}
