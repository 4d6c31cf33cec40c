//! Cell text conversion for Markdown tables.
//!
//! Only backslash and pipe are escaped. Leading and trailing spaces are left
//! alone. Line breaks are turned into `<br />` so a cell stays on one line.

/// Escape the characters that would break a table cell.
///
/// Backslashes are doubled before pipes are escaped, so the backslash added in
/// front of a pipe is never escaped again.
pub fn escape_cell(cell: &str) -> String {
    cell.replace('\\', "\\\\").replace('|', "\\|")
}

/// Replace every line break (`\r\n`, `\n` or a lone `\r`) with `<br />`.
pub fn newlines_to_br(cell: &str) -> String {
    cell.replace("\r\n", "\n").replace(['\r', '\n'], "<br />")
}

/// Make arbitrary text safe to place in a table cell.
pub fn convert_cell(cell: &str) -> String {
    escape_cell(&newlines_to_br(cell))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("foo", "foo")]
    #[case("foo|bar", "foo\\|bar")]
    #[case("foo\\bar", "foo\\\\bar")]
    #[case("|foo\\bar|", "\\|foo\\\\bar\\|")]
    #[case("|\\", "\\|\\\\")]
    #[case(" |foo| bar\\ ", " \\|foo\\| bar\\\\ ")]
    #[case("a|b\\c", "a\\|b\\\\c")]
    fn escapes_backslash_and_pipe(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_cell(input), expected);
    }

    #[test]
    fn escaped_pipe_backslash_is_not_doubled() {
        // A pipe preceded by a backslash: `\|` becomes `\\` + `\|`.
        assert_eq!(escape_cell("\\|"), "\\\\\\|");
    }

    #[rstest]
    #[case("foo\nbar", "foo<br />bar")]
    #[case("foo bar", "foo bar")]
    #[case("foo\nbar\nbaz", "foo<br />bar<br />baz")]
    #[case("", "")]
    #[case("\n\n", "<br /><br />")]
    #[case("\nfoo\n", "<br />foo<br />")]
    #[case("a\r\nb", "a<br />b")]
    #[case("a\rb", "a<br />b")]
    fn replaces_line_breaks(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(newlines_to_br(input), expected);
    }

    #[rstest]
    #[case("foo|bar\nbaz", "foo\\|bar<br />baz")]
    #[case("foo|bar", "foo\\|bar")]
    #[case("", "")]
    fn convert_combines_both(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(convert_cell(input), expected);
    }

    #[test]
    fn plain_text_is_unchanged() {
        let plain = "Hello, world 123 <b>ok</b>";
        assert_eq!(convert_cell(plain), plain);
    }
}
