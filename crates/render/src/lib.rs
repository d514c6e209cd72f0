#![deny(missing_docs)]
//! blockpage rendering: content blocks to render descriptors, HTML and page views.

/// Parallel rendering of many pages.
pub mod batch;
/// HTML output for render descriptors.
pub mod html;
/// Rich-text formatter and block renderer.
pub mod renderer;
/// Views for each loading state of a content page.
pub mod view;

pub use batch::{BatchInput, BatchOptions, BatchProcessingResult, BatchResult, render_batch};
pub use html::{blocks_to_html, page_to_html};
pub use renderer::{
    InlineNode, InlineStyle, Options, RenderBlock, RenderedPage, render_block, render_page,
    render_page_json, render_rich_text,
};
pub use view::{ActionLink, LinkKind, PageView};
