//! YAML (`---`) and TOML (`+++`) front matter blocks.
//!
//! Input is a JSON object so that key order is kept as given. Both writers
//! handle scalars, arrays and nested objects; keys are written unquoted.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;
use std::sync::LazyLock;

static LOOKS_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9.+-]").expect("valid regex"));
const KEYWORD_PATTERN: &str = r"(?i)^(true|false|null|yes|no|on|off)$";
static LOOKS_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(KEYWORD_PATTERN).expect("valid regex"));

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrontMatterFormat {
    #[default]
    Yaml,
    Toml,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown front matter format: {0:?} (expected yaml or toml)")]
pub struct UnknownFrontMatterFormat(pub String);

impl FromStr for FrontMatterFormat {
    type Err = UnknownFrontMatterFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(FrontMatterFormat::Yaml),
            "toml" => Ok(FrontMatterFormat::Toml),
            _ => Err(UnknownFrontMatterFormat(s.to_string())),
        }
    }
}

/// Render `data` in the requested format.
pub fn to_front_matter(data: &Map<String, Value>, format: FrontMatterFormat) -> String {
    match format {
        FrontMatterFormat::Yaml => to_yaml_front_matter(data),
        FrontMatterFormat::Toml => to_toml_front_matter(data),
    }
}

/// Render `data` between `---` fences.
pub fn to_yaml_front_matter(data: &Map<String, Value>) -> String {
    if data.is_empty() {
        return "---\n---\n".to_string();
    }
    let body = data
        .iter()
        .map(|(key, value)| yaml_entry("", key, &yaml_value(value, 0)))
        .collect::<Vec<_>>()
        .join("\n");
    format!("---\n{body}\n---\n")
}

/// Render `data` between `+++` fences.
pub fn to_toml_front_matter(data: &Map<String, Value>) -> String {
    if data.is_empty() {
        return "+++\n+++\n".to_string();
    }
    let body = data
        .iter()
        .map(|(key, value)| format!("{key} = {}", toml_value(value)))
        .collect::<Vec<_>>()
        .join("\n");
    format!("+++\n{body}\n+++\n")
}

// Block values come back starting with '\n' and sit directly after the colon.
fn yaml_entry(indent: &str, key: &str, rendered: &str) -> String {
    if rendered.starts_with('\n') {
        format!("{indent}{key}:{rendered}")
    } else {
        format!("{indent}{key}: {rendered}")
    }
}

fn yaml_value(value: &Value, depth: usize) -> String {
    let indent = "  ".repeat(depth);
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => yaml_string(s),
        Value::Array(items) if items.is_empty() => "[]".to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| format!("\n{indent}- {}", yaml_value(item, depth + 1)))
            .collect(),
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Object(map) => map
            .iter()
            .map(|(key, val)| {
                let rendered = yaml_value(val, depth + 1);
                format!("\n{}", yaml_entry(&indent, key, &rendered))
            })
            .collect(),
    }
}

fn yaml_string(s: &str) -> String {
    let needs_quoting = s.contains([':', '#', '"', '\'', '\n', '\r', '\t'])
        || s.trim() != s
        || s.is_empty()
        || LOOKS_NUMERIC.is_match(s)
        || LOOKS_KEYWORD.is_match(s);

    if needs_quoting {
        quoted(s)
    } else {
        s.to_string()
    }
}

fn toml_value(value: &Value) -> String {
    match value {
        // TOML has no null.
        Value::Null => "\"\"".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quoted(s),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(toml_value).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Object(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(key, val)| format!("{key} = {}", toml_value(val)))
                .collect();
            format!("{{ {} }}", entries.join(", "))
        }
    }
}

/// Double-quoted string with `\`, `"`, newline, carriage return and tab
/// escaped. Valid in both YAML and TOML.
fn quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}
