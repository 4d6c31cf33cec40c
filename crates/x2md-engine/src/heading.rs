/// Format `text` as an ATX heading (`# text` through `###### text`).
///
/// Levels outside `1..=6` fall back to 1.
pub fn to_header(text: &str, level: usize) -> String {
    let level = if (1..=6).contains(&level) { level } else { 1 };
    format!("{} {text}", "#".repeat(level))
}
