/// Spaces per indent level.
const INDENT_WIDTH: usize = 4;

/// Format a single `- item`, indented by four spaces per level.
pub fn to_list_item(text: &str, indent_level: usize) -> String {
    format!("{}- {text}", " ".repeat(INDENT_WIDTH * indent_level))
}

/// Format every item at the same indent, one per line, with a trailing
/// newline. An empty slice gives an empty string.
pub fn to_list<S: AsRef<str>>(items: &[S], indent_level: usize) -> String {
    items
        .iter()
        .map(|item| to_list_item(item.as_ref(), indent_level) + "\n")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, "- First item")]
    #[case(1, "    - First item")]
    #[case(2, "        - First item")]
    fn list_item_indentation(#[case] indent: usize, #[case] expected: &str) {
        assert_eq!(to_list_item("First item", indent), expected);
    }

    #[test]
    fn list_joins_items_with_trailing_newline() {
        let items = ["Item 1", "Item 2", "Item 3"];
        assert_eq!(to_list(&items, 0), "- Item 1\n- Item 2\n- Item 3\n");
        assert_eq!(
            to_list(&items, 1),
            "    - Item 1\n    - Item 2\n    - Item 3\n"
        );
    }

    #[test]
    fn empty_list_is_empty_string() {
        let items: [&str; 0] = [];
        assert_eq!(to_list(&items, 3), "");
    }

    #[test]
    fn accepts_owned_strings() {
        let items = vec!["a".to_string(), "b".to_string()];
        assert_eq!(to_list(&items, 0), "- a\n- b\n");
    }
}
