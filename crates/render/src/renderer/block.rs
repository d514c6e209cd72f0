//! Block rendering: one content block to one render descriptor.

use super::Options;
use super::rich_text::render_rich_text;
use super::types::RenderBlock;
use blockpage_core::{BlockKind, ContentBlock, RichTextItem, plain_text};

/// Renders a single block.
///
/// Returns `None` for unsupported block types. The output depends only on the
/// block itself and the options; no state is carried between blocks.
pub fn render_block(block: &ContentBlock, options: &Options) -> Option<RenderBlock> {
    let id = block.id.clone();
    let rendered = match &block.kind {
        BlockKind::Paragraph { rich_text } => RenderBlock::Paragraph {
            id,
            children: render_rich_text(rich_text),
        },
        BlockKind::Heading1 { rich_text } => heading(id, 1, rich_text),
        BlockKind::Heading2 { rich_text } => heading(id, 2, rich_text),
        BlockKind::Heading3 { rich_text } => heading(id, 3, rich_text),
        // Consecutive items are not merged; each block is its own list.
        BlockKind::BulletedListItem { rich_text } => RenderBlock::BulletedList {
            id,
            items: vec![render_rich_text(rich_text)],
        },
        BlockKind::ToDo { rich_text, checked } => RenderBlock::ToDo {
            id,
            checked: *checked,
            children: render_rich_text(rich_text),
        },
        BlockKind::Quote { rich_text } => RenderBlock::Quote {
            id,
            children: render_rich_text(rich_text),
        },
        BlockKind::Bookmark { url } => RenderBlock::Bookmark {
            id,
            url: url.clone(),
        },
        BlockKind::Code {
            rich_text,
            language,
        } => RenderBlock::Code {
            id,
            language: language.clone(),
            text: plain_text(rich_text),
        },
        BlockKind::Divider => RenderBlock::Divider { id },
        BlockKind::Embed { url } => RenderBlock::Embed {
            title: format!("embed-{}", id),
            id,
            url: url.clone(),
            lazy: options.enable_lazy_embeds,
            allow_full_screen: true,
        },
        BlockKind::ChildPage { title } => RenderBlock::ChildPage {
            id,
            title: title.clone(),
            notice: options.child_page_notice.clone(),
        },
        BlockKind::Image { url, caption } => RenderBlock::Image {
            id,
            url: url.clone(),
            alt: plain_text(caption),
            caption: (!caption.is_empty()).then(|| render_rich_text(caption)),
        },
        BlockKind::Unsupported => return None,
    };
    Some(rendered)
}

fn heading(id: String, level: u8, rich_text: &[RichTextItem]) -> RenderBlock {
    RenderBlock::Heading {
        id,
        level,
        children: render_rich_text(rich_text),
    }
}
