//! HTML output for render descriptors.
//!
//! Markup mirrors the content page's element and class structure
//! (`notion-block <kind>`), so existing stylesheets keep applying. All text
//! and attribute values are escaped; the non-breaking-space placeholder is
//! written as `&nbsp;`.

use crate::renderer::{InlineNode, InlineStyle, RenderBlock, RenderedPage};
use html_escape::{encode_double_quoted_attribute, encode_text};

/// Escapes text content.
pub(crate) fn escape_text(s: &str) -> String {
    encode_text(s).replace('\u{00A0}', "&nbsp;")
}

/// Escapes a double-quoted attribute value.
pub(crate) fn escape_attr(s: &str) -> String {
    encode_double_quoted_attribute(s).into_owned()
}

fn push_style(style: &InlineStyle, out: &mut String) {
    let css = style.to_css();
    if css.is_empty() {
        return;
    }
    out.push_str(" style=\"");
    out.push_str(&escape_attr(&css));
    out.push('"');
}

/// Writes one inline node.
pub fn inline_to_html(node: &InlineNode, out: &mut String) {
    match node {
        InlineNode::Text { content, style } => {
            out.push_str("<span");
            push_style(style, out);
            out.push('>');
            out.push_str(&escape_text(content));
            out.push_str("</span>");
        }
        InlineNode::InternalLink {
            href,
            content,
            style,
        } => {
            out.push_str("<a href=\"");
            out.push_str(&escape_attr(href));
            out.push_str("\" data-link=\"internal\"");
            push_style(style, out);
            out.push('>');
            out.push_str(&escape_text(content));
            out.push_str("</a>");
        }
        InlineNode::ExternalLink {
            href,
            content,
            style,
        } => {
            out.push_str("<a href=\"");
            out.push_str(&escape_attr(href));
            out.push_str("\" target=\"_blank\" rel=\"noreferrer\"");
            push_style(style, out);
            out.push('>');
            out.push_str(&escape_text(content));
            out.push_str("</a>");
        }
    }
}

/// Writes a sequence of inline nodes.
pub fn inlines_to_html(nodes: &[InlineNode], out: &mut String) {
    for node in nodes {
        inline_to_html(node, out);
    }
}

fn wrap(tag: &str, class: &str, children: &[InlineNode], out: &mut String) {
    out.push_str(&format!("<{} class=\"notion-block {}\">", tag, class));
    inlines_to_html(children, out);
    out.push_str(&format!("</{}>", tag));
}

/// Writes one block.
pub fn block_to_html(block: &RenderBlock, out: &mut String) {
    match block {
        RenderBlock::Paragraph { children, .. } => wrap("p", "paragraph", children, out),
        RenderBlock::Heading {
            level, children, ..
        } => {
            let tag = format!("h{}", level);
            let class = format!("heading-{}", level);
            wrap(&tag, &class, children, out);
        }
        RenderBlock::BulletedList { items, .. } => {
            out.push_str("<ul class=\"notion-block bulleted-list\">");
            for item in items {
                out.push_str("<li>");
                inlines_to_html(item, out);
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        }
        RenderBlock::ToDo {
            checked, children, ..
        } => {
            let checked_attr = if *checked { " checked" } else { "" };
            out.push_str(&format!(
                "<label class=\"notion-block todo-item\"><input type=\"checkbox\"{} disabled /><span>",
                checked_attr
            ));
            inlines_to_html(children, out);
            out.push_str("</span></label>");
        }
        RenderBlock::Quote { children, .. } => wrap("blockquote", "quote", children, out),
        RenderBlock::Bookmark { url, .. } => {
            out.push_str(&format!(
                "<div class=\"notion-block bookmark\"><a href=\"{}\" target=\"_blank\" rel=\"noreferrer\">{}</a></div>",
                escape_attr(url),
                escape_text(url)
            ));
        }
        RenderBlock::Code { language, text, .. } => {
            out.push_str(&format!(
                "<pre class=\"notion-block code-block\"><code data-language=\"{}\">{}</code></pre>",
                escape_attr(language),
                escape_text(text)
            ));
        }
        RenderBlock::Divider { .. } => out.push_str("<hr class=\"notion-block divider\" />"),
        RenderBlock::Embed {
            url,
            title,
            lazy,
            allow_full_screen,
            ..
        } => {
            out.push_str("<div class=\"notion-block embed\"><iframe src=\"");
            out.push_str(&escape_attr(url));
            out.push_str("\" title=\"");
            out.push_str(&escape_attr(title));
            out.push('"');
            if *lazy {
                out.push_str(" loading=\"lazy\"");
            }
            if *allow_full_screen {
                out.push_str(" allowfullscreen");
            }
            out.push_str("></iframe></div>");
        }
        RenderBlock::ChildPage { title, notice, .. } => {
            out.push_str(&format!(
                "<article class=\"notion-block child-page\"><h4>{}</h4><p>{}</p></article>",
                escape_text(title),
                escape_text(notice)
            ));
        }
        RenderBlock::Image {
            url, alt, caption, ..
        } => {
            out.push_str(&format!(
                "<figure class=\"notion-block image\"><img src=\"{}\" alt=\"{}\" />",
                escape_attr(url),
                escape_attr(alt)
            ));
            if let Some(caption) = caption {
                out.push_str("<figcaption>");
                inlines_to_html(caption, out);
                out.push_str("</figcaption>");
            }
            out.push_str("</figure>");
        }
    }
}

/// Renders blocks to an HTML string.
pub fn blocks_to_html(blocks: &[RenderBlock]) -> String {
    let mut out = String::with_capacity(blocks.len() * 64);
    for block in blocks {
        block_to_html(block, &mut out);
    }
    out
}

/// Renders a page: title header and content section.
pub fn page_to_html(page: &RenderedPage) -> String {
    format!(
        "<main><header><h1>{}</h1></header><section>{}</section></main>",
        escape_text(&page.title),
        blocks_to_html(&page.blocks)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::PLACEHOLDER;

    fn text(content: &str, style: InlineStyle) -> InlineNode {
        InlineNode::Text {
            content: content.to_string(),
            style,
        }
    }

    #[test]
    fn unstyled_text_has_no_style_attribute() {
        let mut out = String::new();
        inline_to_html(&text("Hola", InlineStyle::default()), &mut out);
        assert_eq!(out, "<span>Hola</span>");
    }

    #[test]
    fn placeholder_is_written_as_entity() {
        let mut out = String::new();
        inline_to_html(&InlineNode::placeholder(), &mut out);
        assert_eq!(out, "<span>&nbsp;</span>");
        assert_eq!(escape_text(PLACEHOLDER), "&nbsp;");
    }

    #[test]
    fn styled_text() {
        let style = InlineStyle {
            font_weight: Some(600),
            text_decoration: Some("underline line-through".to_string()),
            color: Some("#0B6E99".to_string()),
            background_color: Some("#DDEBF1".to_string()),
            ..Default::default()
        };
        let mut out = String::new();
        inline_to_html(&text("x", style), &mut out);
        assert_eq!(
            out,
            "<span style=\"font-weight: 600; text-decoration: underline line-through; color: #0B6E99; background-color: #DDEBF1\">x</span>"
        );
    }

    #[test]
    fn colour_tokens_cannot_add_declarations() {
        let style = InlineStyle {
            font_style: Some("italic".to_string()),
            color: Some("red; position: fixed; inset: 0".to_string()),
            background_color: Some("#FBF3DB".to_string()),
            ..Default::default()
        };
        let mut out = String::new();
        inline_to_html(&text("x", style), &mut out);
        assert_eq!(
            out,
            "<span style=\"font-style: italic; background-color: #FBF3DB\">x</span>"
        );
    }

    #[test]
    fn keyword_colour_passes_and_lone_bad_colour_drops_attribute() {
        let keyword = InlineStyle {
            color: Some("mauve".to_string()),
            ..Default::default()
        };
        let mut out = String::new();
        inline_to_html(&text("a", keyword), &mut out);
        assert_eq!(out, "<span style=\"color: mauve\">a</span>");

        let bad = InlineStyle {
            color: Some("url(x)".to_string()),
            ..Default::default()
        };
        let mut out = String::new();
        inline_to_html(&text("b", bad), &mut out);
        assert_eq!(out, "<span>b</span>");
    }

    #[test]
    fn links_carry_dispatch_attributes() {
        let mut out = String::new();
        inline_to_html(
            &InlineNode::InternalLink {
                href: "/proyectos".to_string(),
                content: "Proyectos".to_string(),
                style: InlineStyle::default(),
            },
            &mut out,
        );
        assert_eq!(
            out,
            "<a href=\"/proyectos\" data-link=\"internal\">Proyectos</a>"
        );

        out.clear();
        inline_to_html(
            &InlineNode::ExternalLink {
                href: "https://example.com/?a=1&b=2".to_string(),
                content: "Web".to_string(),
                style: InlineStyle::default(),
            },
            &mut out,
        );
        assert_eq!(
            out,
            "<a href=\"https://example.com/?a=1&amp;b=2\" target=\"_blank\" rel=\"noreferrer\">Web</a>"
        );
    }

    #[test]
    fn escapes_text_and_attributes() {
        let mut out = String::new();
        inline_to_html(&text("<script>&", InlineStyle::default()), &mut out);
        assert_eq!(out, "<span>&lt;script&gt;&amp;</span>");
        assert_eq!(escape_attr("a\"b"), "a&quot;b");
    }

    #[test]
    fn to_do_is_disabled() {
        let block = RenderBlock::ToDo {
            id: "t".to_string(),
            checked: true,
            children: vec![text("Hecho", InlineStyle::default())],
        };
        assert_eq!(
            blocks_to_html(&[block]),
            "<label class=\"notion-block todo-item\"><input type=\"checkbox\" checked disabled /><span><span>Hecho</span></span></label>"
        );
    }

    #[test]
    fn image_caption_only_when_present() {
        let without = RenderBlock::Image {
            id: "i".to_string(),
            url: "a.png".to_string(),
            alt: String::new(),
            caption: None,
        };
        let html = blocks_to_html(&[without]);
        assert!(!html.contains("figcaption"));

        let with = RenderBlock::Image {
            id: "i".to_string(),
            url: "a.png".to_string(),
            alt: "Foto".to_string(),
            caption: Some(vec![text("Foto", InlineStyle::default())]),
        };
        let html = blocks_to_html(&[with]);
        assert_eq!(html.matches("<figcaption>").count(), 1);
        assert!(html.contains("alt=\"Foto\""));
    }

    #[test]
    fn embed_attributes() {
        let block = RenderBlock::Embed {
            id: "e".to_string(),
            url: "https://x".to_string(),
            title: "embed-e".to_string(),
            lazy: true,
            allow_full_screen: true,
        };
        assert_eq!(
            blocks_to_html(&[block]),
            "<div class=\"notion-block embed\"><iframe src=\"https://x\" title=\"embed-e\" loading=\"lazy\" allowfullscreen></iframe></div>"
        );
    }

    #[test]
    fn empty_page_has_empty_section() {
        let page = RenderedPage {
            title: "T".to_string(),
            blocks: Vec::new(),
        };
        assert_eq!(
            page_to_html(&page),
            "<main><header><h1>T</h1></header><section></section></main>"
        );
    }
}
