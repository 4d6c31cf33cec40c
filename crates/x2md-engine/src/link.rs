/// Format an inline link `[text](url)`.
///
/// Without a `url` the text doubles as the destination, which suits bare
/// URLs such as `https://example.com` or `mailto:` addresses.
pub fn to_link(text: &str, url: Option<&str>) -> String {
    let url = url.unwrap_or(text);
    format!("[{text}]({url})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("https://example.com", "[https://example.com](https://example.com)")]
    #[case(
        "mailto:user@example.com",
        "[mailto:user@example.com](mailto:user@example.com)"
    )]
    fn url_only(#[case] url: &str, #[case] expected: &str) {
        assert_eq!(to_link(url, None), expected);
    }

    #[test]
    fn text_and_url() {
        assert_eq!(
            to_link("Example Website", Some("https://example.com")),
            "[Example Website](https://example.com)"
        );
    }

    #[test]
    fn empty_url_is_kept() {
        assert_eq!(to_link("Nowhere", Some("")), "[Nowhere]()");
    }
}
