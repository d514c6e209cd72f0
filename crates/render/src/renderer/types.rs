//! Render descriptors produced by the block renderer.
//!
//! Descriptors serialize with a `type` tag and camelCase fields so a
//! JavaScript view layer can draw them directly.

use serde::Serialize;

/// Non-breaking space used for empty text so it still takes up a line.
pub const PLACEHOLDER: &str = "\u{00A0}";

/// Presentational style resolved from a span's annotations.
///
/// Unset properties are omitted entirely rather than emitted empty.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InlineStyle {
    /// `600` when bold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    /// `"italic"` when italic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    /// `"underline"`, `"line-through"` or both, underline first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<String>,
    /// Text colour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Background colour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl InlineStyle {
    /// Returns true if no property is set.
    pub fn is_empty(&self) -> bool {
        self.font_weight.is_none()
            && self.font_style.is_none()
            && self.text_decoration.is_none()
            && self.color.is_none()
            && self.background_color.is_none()
    }

    /// CSS declarations for a `style` attribute, in a fixed property order.
    ///
    /// Colour values that are not a single hex colour or keyword are left
    /// out, so a token can never add declarations of its own.
    pub fn to_css(&self) -> String {
        let mut decls = Vec::new();
        if let Some(weight) = self.font_weight {
            decls.push(format!("font-weight: {}", weight));
        }
        if let Some(style) = &self.font_style {
            decls.push(format!("font-style: {}", style));
        }
        if let Some(decoration) = &self.text_decoration {
            decls.push(format!("text-decoration: {}", decoration));
        }
        if let Some(color) = self.color.as_deref().filter(|c| is_css_color(c)) {
            decls.push(format!("color: {}", color));
        }
        if let Some(background) = self
            .background_color
            .as_deref()
            .filter(|c| is_css_color(c))
        {
            decls.push(format!("background-color: {}", background));
        }
        decls.join("; ")
    }
}

/// A `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` colour, or a bare keyword.
fn is_css_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => {
            !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic() || c == '-')
        }
    }
}

/// One formatted rich-text span.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InlineNode {
    /// Styled text without a link.
    Text {
        /// Visible text.
        content: String,
        /// Resolved style.
        style: InlineStyle,
    },
    /// Same-site route, left to the host router.
    InternalLink {
        /// Route path, always starting with `/`.
        href: String,
        /// Visible text.
        content: String,
        /// Resolved style.
        style: InlineStyle,
    },
    /// Link opened in a new browsing context with `rel="noreferrer"`.
    ExternalLink {
        /// Link target.
        href: String,
        /// Visible text.
        content: String,
        /// Resolved style.
        style: InlineStyle,
    },
}

impl InlineNode {
    /// The unstyled non-breaking-space node used for empty span sequences.
    pub fn placeholder() -> Self {
        InlineNode::Text {
            content: PLACEHOLDER.to_string(),
            style: InlineStyle::default(),
        }
    }

    /// Visible text of the node.
    pub fn content(&self) -> &str {
        match self {
            InlineNode::Text { content, .. }
            | InlineNode::InternalLink { content, .. }
            | InlineNode::ExternalLink { content, .. } => content,
        }
    }

    /// Resolved style of the node.
    pub fn style(&self) -> &InlineStyle {
        match self {
            InlineNode::Text { style, .. }
            | InlineNode::InternalLink { style, .. }
            | InlineNode::ExternalLink { style, .. } => style,
        }
    }

    /// Link target, if the node is a link.
    pub fn href(&self) -> Option<&str> {
        match self {
            InlineNode::Text { .. } => None,
            InlineNode::InternalLink { href, .. } | InlineNode::ExternalLink { href, .. } => {
                Some(href)
            }
        }
    }
}

/// Structural output for one content block.
///
/// Every variant carries the source block's `id` as its render key.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum RenderBlock {
    /// Block of inline text.
    Paragraph { id: String, children: Vec<InlineNode> },
    /// Heading at level 1 to 3.
    Heading {
        id: String,
        level: u8,
        children: Vec<InlineNode>,
    },
    /// A list wrapper. Each bulleted block renders its own single-item list.
    BulletedList {
        id: String,
        items: Vec<Vec<InlineNode>>,
    },
    /// Read-only checkbox with a label.
    ToDo {
        id: String,
        checked: bool,
        children: Vec<InlineNode>,
    },
    /// Quoted block.
    Quote { id: String, children: Vec<InlineNode> },
    /// External link showing its own URL.
    Bookmark { id: String, url: String },
    /// Preformatted plain text.
    Code {
        id: String,
        language: String,
        text: String,
    },
    /// Separator.
    Divider { id: String },
    /// Embedded external frame.
    Embed {
        id: String,
        url: String,
        title: String,
        lazy: bool,
        allow_full_screen: bool,
    },
    /// Placeholder card for a referenced sub-page.
    ChildPage {
        id: String,
        title: String,
        notice: String,
    },
    /// Image with optional caption. `caption` is `None` when there is none.
    Image {
        id: String,
        url: String,
        alt: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<Vec<InlineNode>>,
    },
}

impl RenderBlock {
    /// Render key of the block.
    pub fn id(&self) -> &str {
        match self {
            RenderBlock::Paragraph { id, .. }
            | RenderBlock::Heading { id, .. }
            | RenderBlock::BulletedList { id, .. }
            | RenderBlock::ToDo { id, .. }
            | RenderBlock::Quote { id, .. }
            | RenderBlock::Bookmark { id, .. }
            | RenderBlock::Code { id, .. }
            | RenderBlock::Divider { id }
            | RenderBlock::Embed { id, .. }
            | RenderBlock::ChildPage { id, .. }
            | RenderBlock::Image { id, .. } => id,
        }
    }
}

/// A rendered content page: the title and the block outputs in order.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct RenderedPage {
    /// Page title.
    pub title: String,
    /// Rendered blocks. Empty for a page without blocks.
    pub blocks: Vec<RenderBlock>,
}
