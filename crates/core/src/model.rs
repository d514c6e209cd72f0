//! Typed content model for pages delivered by the content API.
//!
//! The wire format is the one produced by the content export: each block is a
//! flat JSON object carrying an `id`, a `type` tag and the fields of that
//! variant. Tags this crate does not know deserialize to
//! [`BlockKind::Unsupported`] so newer exports keep loading.

use serde::{Deserialize, Serialize};

/// Style flags attached to a rich-text span.
///
/// Missing flags read as `false` and a missing colour as `"default"`, so a
/// partially filled annotation object still yields an unstyled span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotations {
    /// Render with weight emphasis.
    pub bold: bool,
    /// Render with style emphasis.
    pub italic: bool,
    /// Underline decoration.
    pub underline: bool,
    /// Line-through decoration.
    pub strikethrough: bool,
    /// Colour token, e.g. `"blue"` or `"red_background"`.
    pub color: String,
}

impl Default for Annotations {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            strikethrough: false,
            color: "default".to_string(),
        }
    }
}

/// A run of text sharing one set of annotations and an optional link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichTextItem {
    /// Literal text. May be empty.
    pub plain_text: String,
    /// Optional navigation target.
    #[serde(default)]
    pub href: Option<String>,
    /// Style annotations.
    #[serde(default)]
    pub annotations: Annotations,
}

impl RichTextItem {
    /// Creates an unstyled span without a link.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            plain_text: text.into(),
            href: None,
            annotations: Annotations::default(),
        }
    }

    /// Returns the span with a link target attached.
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Returns the span with the given annotations.
    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }
}

/// Concatenates the literal text of a span sequence, dropping all styling.
pub fn plain_text(items: &[RichTextItem]) -> String {
    items.iter().map(|item| item.plain_text.as_str()).collect()
}

/// One structural unit of a content page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentBlock {
    /// Stable identifier, unique within a page. Used as the render key.
    pub id: String,
    /// Variant tag and payload.
    #[serde(flatten)]
    pub kind: BlockKind,
}

impl ContentBlock {
    /// Creates a block from an id and a variant payload.
    pub fn new(id: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }
}

/// The closed set of block variants, discriminated by the wire `type` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    /// Block of inline text.
    Paragraph {
        /// Inline content.
        rich_text: Vec<RichTextItem>,
    },
    /// Top level heading.
    #[serde(rename = "heading_1")]
    Heading1 {
        /// Heading text.
        rich_text: Vec<RichTextItem>,
    },
    /// Second level heading.
    #[serde(rename = "heading_2")]
    Heading2 {
        /// Heading text.
        rich_text: Vec<RichTextItem>,
    },
    /// Third level heading.
    #[serde(rename = "heading_3")]
    Heading3 {
        /// Heading text.
        rich_text: Vec<RichTextItem>,
    },
    /// A single bulleted list entry.
    BulletedListItem {
        /// Item text.
        rich_text: Vec<RichTextItem>,
    },
    /// A checkable item.
    ToDo {
        /// Item label.
        rich_text: Vec<RichTextItem>,
        /// Checkbox state. Display-only.
        checked: bool,
    },
    /// Quoted block.
    Quote {
        /// Quoted text.
        rich_text: Vec<RichTextItem>,
    },
    /// Link to an external URL, shown as the raw URL.
    Bookmark {
        /// Bookmarked URL.
        url: String,
    },
    /// Preformatted code.
    Code {
        /// Code text. Styling is dropped when rendered.
        rich_text: Vec<RichTextItem>,
        /// Language tag, display metadata only.
        language: String,
    },
    /// Horizontal separator.
    Divider,
    /// Embedded external frame.
    Embed {
        /// Frame source.
        url: String,
    },
    /// Reference to a sub-page. Never fetched recursively.
    ChildPage {
        /// Title of the referenced page.
        title: String,
    },
    /// Image with an optional caption.
    Image {
        /// Image source.
        url: String,
        /// Caption spans. Empty means no caption.
        #[serde(default)]
        caption: Vec<RichTextItem>,
    },
    /// Any tag this crate does not know about.
    #[serde(other)]
    Unsupported,
}

impl BlockKind {
    /// Wire name of the variant's `type` tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            BlockKind::Paragraph { .. } => "paragraph",
            BlockKind::Heading1 { .. } => "heading_1",
            BlockKind::Heading2 { .. } => "heading_2",
            BlockKind::Heading3 { .. } => "heading_3",
            BlockKind::BulletedListItem { .. } => "bulleted_list_item",
            BlockKind::ToDo { .. } => "to_do",
            BlockKind::Quote { .. } => "quote",
            BlockKind::Bookmark { .. } => "bookmark",
            BlockKind::Code { .. } => "code",
            BlockKind::Divider => "divider",
            BlockKind::Embed { .. } => "embed",
            BlockKind::ChildPage { .. } => "child_page",
            BlockKind::Image { .. } => "image",
            BlockKind::Unsupported => "unsupported",
        }
    }
}

/// A page response: title plus ordered blocks.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page {
    /// Page title, rendered separately from the blocks.
    #[serde(rename = "current_page_title")]
    pub title: String,
    /// Blocks in display order.
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
}
