//! Content block renderer.
//!
//! Converts a typed [`Page`] into a [`RenderedPage`]: the title plus one
//! [`RenderBlock`] per supported block, in page order.
//!
//! # Module Structure
//!
//! - `types` - Render descriptors (InlineNode, InlineStyle, RenderBlock, RenderedPage)
//! - `rich_text` - Span formatting, colour and link dispatch
//! - `block` - Per-block dispatch over the closed variant set
#![allow(missing_docs)]

mod block;
pub mod rich_text;
mod types;

pub use block::render_block;
pub use rich_text::{render_rich_text, render_span, style_for};
pub use types::{InlineNode, InlineStyle, PLACEHOLDER, RenderBlock, RenderedPage};

use blockpage_core::{BlockKind, BlockpageError, Page, parse_page};

/// Default text shown under a child page title.
pub const DEFAULT_CHILD_PAGE_NOTICE: &str = "Esta es una subpágina enlazada desde Notion.";

/// Rendering options.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Options {
    /// Text shown in the placeholder card of a child page reference.
    #[serde(default = "default_child_page_notice")]
    pub child_page_notice: String,
    /// Whether embedded frames are marked `loading="lazy"`.
    #[serde(default = "default_true")]
    pub enable_lazy_embeds: bool,
    /// Route the recovery buttons of error views point to.
    #[serde(default = "default_home_path")]
    pub home_path: String,
}

impl Options {
    /// Checks that the options can be used for rendering views.
    pub fn validate(&self) -> Result<(), BlockpageError> {
        if self.home_path.trim().is_empty() {
            return Err(BlockpageError::InvalidOptions(
                "home_path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_child_page_notice() -> String {
    DEFAULT_CHILD_PAGE_NOTICE.to_string()
}

fn default_true() -> bool {
    true
}

fn default_home_path() -> String {
    "/".to_string()
}

impl Default for Options {
    fn default() -> Self {
        Self {
            child_page_notice: default_child_page_notice(),
            enable_lazy_embeds: default_true(),
            home_path: default_home_path(),
        }
    }
}

/// Renders a page (entry point).
///
/// Blocks are rendered independently and in order; unsupported blocks are
/// skipped without affecting their neighbours. A page without blocks yields
/// an empty block list.
///
/// # Examples
///
/// ```
/// use blockpage_core::parse_page;
/// use blockpage_render::renderer::{Options, render_page};
///
/// let page = parse_page(r#"{"current_page_title": "Proyectos", "blocks": []}"#).unwrap();
/// let rendered = render_page(&page, &Options::default());
/// assert_eq!(rendered.title, "Proyectos");
/// assert!(rendered.blocks.is_empty());
/// ```
pub fn render_page(page: &Page, options: &Options) -> RenderedPage {
    let blocks = page
        .blocks
        .iter()
        .filter_map(|block| {
            if matches!(block.kind, BlockKind::Unsupported) {
                log::debug!("Skipping unsupported block {}", block.id);
            }
            render_block(block, options)
        })
        .collect();

    RenderedPage {
        title: page.title.clone(),
        blocks,
    }
}

/// Decodes a page response and renders it.
pub fn render_page_json(input: &str, options: &Options) -> Result<RenderedPage, BlockpageError> {
    let page = parse_page(input)?;
    Ok(render_page(&page, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_page() -> Page {
        blockpage_core::parse_page_value(json!({
            "current_page_title": "Asociación",
            "blocks": [
                {"id": "h", "type": "heading_2", "rich_text": [
                    {"plain_text": "Quiénes somos", "href": null, "annotations": {
                        "bold": false, "italic": false, "underline": false,
                        "strikethrough": false, "color": "default"}}
                ]},
                {"id": "l1", "type": "bulleted_list_item", "rich_text": [
                    {"plain_text": "Uno", "href": null, "annotations": {
                        "bold": false, "italic": false, "underline": false,
                        "strikethrough": false, "color": "default"}}
                ]},
                {"id": "l2", "type": "bulleted_list_item", "rich_text": [
                    {"plain_text": "Dos", "href": "/proyectos", "annotations": {
                        "bold": true, "italic": false, "underline": false,
                        "strikethrough": false, "color": "red"}}
                ]},
                {"id": "x", "type": "column_list"},
                {"id": "d", "type": "divider"}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_page() {
        let page = Page {
            title: "Vacía".to_string(),
            blocks: Vec::new(),
        };
        let rendered = render_page(&page, &Options::default());
        assert_eq!(rendered.title, "Vacía");
        assert!(rendered.blocks.is_empty());
    }

    #[test]
    fn test_unsupported_block_is_skipped() {
        let rendered = render_page(&sample_page(), &Options::default());
        let ids: Vec<&str> = rendered.blocks.iter().map(|b| b.id()).collect();
        assert_eq!(ids, ["h", "l1", "l2", "d"]);
    }

    #[test]
    fn test_consecutive_bullets_stay_separate_lists() {
        let rendered = render_page(&sample_page(), &Options::default());
        let lists: Vec<usize> = rendered
            .blocks
            .iter()
            .filter_map(|b| match b {
                RenderBlock::BulletedList { items, .. } => Some(items.len()),
                _ => None,
            })
            .collect();
        assert_eq!(lists, [1, 1]);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let page = sample_page();
        let options = Options::default();
        let first = render_page(&page, &options);
        let second = render_page(&page, &options);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[test]
    fn test_serialized_shape() {
        let rendered = render_page(&sample_page(), &Options::default());
        let value = serde_json::to_value(&rendered.blocks[2]).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "bulletedList",
                "id": "l2",
                "items": [[{
                    "type": "internalLink",
                    "href": "/proyectos",
                    "content": "Dos",
                    "style": {"fontWeight": 600, "color": "#E03E3E"}
                }]]
            })
        );
    }

    #[test]
    fn test_render_page_json_propagates_errors() {
        let err = render_page_json("[]", &Options::default()).unwrap_err();
        assert!(matches!(err, BlockpageError::Json(_)));
    }

    #[test]
    fn test_options_defaults_from_empty_json() {
        let options: Options = serde_json::from_str("{}").unwrap();
        assert_eq!(options.child_page_notice, DEFAULT_CHILD_PAGE_NOTICE);
        assert!(options.enable_lazy_embeds);
        assert_eq!(options.home_path, "/");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_blank_home_path_is_invalid() {
        let options = Options {
            home_path: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            options.validate(),
            Err(BlockpageError::InvalidOptions(_))
        ));
    }
}
