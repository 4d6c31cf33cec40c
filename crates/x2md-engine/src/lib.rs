//! Small pure formatters that turn plain data into Markdown fragments.
//!
//! The [`table`] module is a TSV to Markdown table pipeline. The rest are
//! single-purpose helpers for headings, lists, links and front matter.

pub mod front_matter;
pub mod heading;
pub mod link;
pub mod list;
pub mod table;

// Re-export key types for easier usage
pub use front_matter::{
    FrontMatterFormat, UnknownFrontMatterFormat, to_front_matter, to_toml_front_matter,
    to_yaml_front_matter,
};
pub use heading::to_header;
pub use link::to_link;
pub use list::{to_list, to_list_item};
pub use table::{
    Alignment, InvalidTableError, Table, ValidationError, parse_tsv, render_table,
    tsv_to_markdown_table, validate_table,
};
