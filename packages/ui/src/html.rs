//! HTML produced for card content.
//!
//! Card blocks come from other users, so nothing they contain reaches the page
//! unescaped: markdown is rendered with raw HTML turned into text, code is
//! escaped inside `<pre>`, and link and image targets must be plain web links.

use api::{Block, BlockType};
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders markdown with any embedded HTML shown as text.
///
/// Link targets other than web links, `mailto:` and in-page anchors become
/// `#`; image sources other than web links likewise.
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH)
        .map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                id,
            }) => Event::Start(Tag::Link {
                link_type,
                dest_url: safe_destination(dest_url, is_link_target),
                title,
                id,
            }),
            Event::Start(Tag::Image {
                link_type,
                dest_url,
                title,
                id,
            }) => Event::Start(Tag::Image {
                link_type,
                dest_url: safe_destination(dest_url, is_web_link),
                title,
                id,
            }),
            other => other,
        });
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

fn safe_destination<'a>(dest: CowStr<'a>, allowed: fn(&str) -> bool) -> CowStr<'a> {
    if allowed(&dest) {
        dest
    } else {
        tracing::warn!("Dropping markdown destination: {}", &*dest);
        CowStr::Borrowed("#")
    }
}

fn is_link_target(link: &str) -> bool {
    is_web_link(link) || link.starts_with('#') || link.to_ascii_lowercase().starts_with("mailto:")
}

pub fn render_block(block: &Block) -> String {
    match block.kind {
        BlockType::Text => render_markdown(&block.content),
        BlockType::Code => {
            let language: String = block
                .metadata
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '+' | '_'))
                .collect();
            let class = if language.is_empty() {
                String::new()
            } else {
                format!(" class=\"language-{language}\"")
            };
            format!("<pre><code{class}>{}</code></pre>", escape_html(&block.content))
        }
        BlockType::Image => {
            let src = block.content.trim();
            if is_web_link(src) {
                format!(
                    "<figure><img src=\"{}\" alt=\"{}\"></figure>",
                    escape_html(src),
                    escape_html(&block.metadata)
                )
            } else {
                tracing::warn!("Skipping image with unsupported source: {src}");
                format!("<p class=\"block-error\">{}</p>", escape_html(src))
            }
        }
    }
}

pub fn render_blocks(blocks: &[Block]) -> String {
    blocks.iter().map(render_block).collect()
}

/// `http(s)://` URLs and site-relative paths.
pub fn is_web_link(link: &str) -> bool {
    let lower = link.to_ascii_lowercase();
    lower.starts_with("https://")
        || lower.starts_with("http://")
        || (link.starts_with('/') && !link.starts_with("//"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_markdown_text_block() {
        let html = render_block(&Block::text("# Title\n\nSome **bold** text"));
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_markdown_raw_html_is_escaped() {
        let html = render_block(&Block::text("hello <script>alert(1)</script>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_markdown_script_link_is_neutralised() {
        let html = render_markdown("[click](javascript:alert(document.cookie))");
        assert!(!html.contains("javascript:"));
        assert!(html.contains("<a href=\"#\">click</a>"));

        // Autolinks keep their text but lose the target
        let html = render_markdown("<JavaScript:alert(1)>");
        assert!(!html.to_ascii_lowercase().contains("href=\"javascript:"));
        assert!(html.contains("href=\"#\""));
    }

    #[test]
    fn test_markdown_script_image_is_neutralised() {
        let html = render_markdown("![x](javascript:alert(1)) ![y](data:text/html,hi)");
        assert!(!html.contains("javascript:"));
        assert!(!html.contains("data:"));
        assert!(html.contains("src=\"#\""));
    }

    #[test]
    fn test_markdown_keeps_safe_links() {
        let html = render_markdown(
            "[docs](https://doc.rust-lang.org) [mail](mailto:ada@example.com) [top](#top) ![a](/static/a.png)",
        );
        assert!(html.contains("href=\"https://doc.rust-lang.org\""));
        assert!(html.contains("href=\"mailto:ada@example.com\""));
        assert!(html.contains("href=\"#top\""));
        assert!(html.contains("src=\"/static/a.png\""));
    }

    #[test]
    fn test_code_block() {
        let html = render_block(&Block::code("if a < b {}", "rust"));
        assert_eq!(
            html,
            "<pre><code class=\"language-rust\">if a &lt; b {}</code></pre>"
        );
    }

    #[test]
    fn test_code_language_is_sanitized() {
        let html = render_block(&Block::code("x", "\"><b"));
        assert_eq!(html, "<pre><code class=\"language-b\">x</code></pre>");
    }

    #[test]
    fn test_image_block() {
        let block = Block {
            kind: BlockType::Image,
            content: "https://example.com/a.png".to_string(),
            metadata: "A \"diagram\"".to_string(),
            ..Default::default()
        };
        assert_eq!(
            render_block(&block),
            "<figure><img src=\"https://example.com/a.png\" alt=\"A &quot;diagram&quot;\"></figure>"
        );
    }

    #[test]
    fn test_image_rejects_script_links() {
        let block = Block {
            kind: BlockType::Image,
            content: "javascript:alert(1)".to_string(),
            ..Default::default()
        };
        let html = render_block(&block);
        assert!(!html.contains("<img"));
        assert!(html.contains("block-error"));
    }

    #[test]
    fn test_web_links() {
        assert!(is_web_link("HTTPS://example.com"));
        assert!(is_web_link("/static/a.png"));
        assert!(!is_web_link("//evil.example"));
        assert!(!is_web_link("data:text/html,hi"));
    }
}
