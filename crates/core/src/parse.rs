//! Page response decoding.

use crate::Result;
use crate::model::Page;

/// Decodes a page response from JSON text.
///
/// Unknown block types are kept as [`crate::BlockKind::Unsupported`]; only
/// structurally invalid input (bad JSON, missing `id`/`type`, mistyped
/// fields) is an error.
///
/// # Examples
///
/// ```
/// use blockpage_core::parse_page;
///
/// let page = parse_page(r#"{"current_page_title": "Proyectos", "blocks": []}"#).unwrap();
/// assert_eq!(page.title, "Proyectos");
/// assert!(page.blocks.is_empty());
/// ```
pub fn parse_page(input: &str) -> Result<Page> {
    Ok(serde_json::from_str(input)?)
}

/// Decodes a page response that has already been parsed into a JSON value.
pub fn parse_page_value(value: serde_json::Value) -> Result<Page> {
    Ok(serde_json::from_value(value)?)
}
