//! Rich-text formatting: spans to inline nodes.

use super::types::{InlineNode, InlineStyle, PLACEHOLDER};
use blockpage_core::{Annotations, ColorStyle, RichTextItem, SpanLink};

/// Font weight used for bold spans.
pub const BOLD_WEIGHT: u16 = 600;

/// Resolves the presentational style of a span from its annotations.
pub fn style_for(annotations: &Annotations) -> InlineStyle {
    let decorations: Vec<&str> = [
        (annotations.underline, "underline"),
        (annotations.strikethrough, "line-through"),
    ]
    .into_iter()
    .filter_map(|(on, value)| on.then_some(value))
    .collect();

    let ColorStyle {
        color,
        background_color,
    } = ColorStyle::resolve(&annotations.color);

    InlineStyle {
        font_weight: annotations.bold.then_some(BOLD_WEIGHT),
        font_style: annotations.italic.then(|| "italic".to_string()),
        text_decoration: (!decorations.is_empty()).then(|| decorations.join(" ")),
        color,
        background_color,
    }
}

/// Formats a single span.
pub fn render_span(item: &RichTextItem) -> InlineNode {
    let style = style_for(&item.annotations);
    let content = if item.plain_text.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        item.plain_text.clone()
    };

    match SpanLink::classify(item.href.as_deref()) {
        None => InlineNode::Text { content, style },
        Some(SpanLink::Internal(href)) => InlineNode::InternalLink {
            href: href.to_string(),
            content,
            style,
        },
        Some(SpanLink::External(href)) => InlineNode::ExternalLink {
            href: href.to_string(),
            content,
            style,
        },
    }
}

/// Formats a span sequence, one node per span in input order.
///
/// An empty sequence yields a single placeholder node so that empty text
/// blocks still claim layout space.
pub fn render_rich_text(items: &[RichTextItem]) -> Vec<InlineNode> {
    if items.is_empty() {
        return vec![InlineNode::placeholder()];
    }
    items.iter().map(render_span).collect()
}
