//! Markdown rendering for message bodies.
//!
//! Message text is untrusted (it comes from the user or a model), so raw HTML
//! is escaped and links with script-capable schemes are neutralised before the
//! output reaches `inner_html`.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

/// URL schemes allowed in rendered links and images.
const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Render markdown to an HTML fragment.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let events = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: sanitize_url(dest_url),
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
            dest_url: sanitize_url(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut output, events);
    output
}

fn sanitize_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) {
        url
    } else {
        CowStr::Borrowed("#")
    }
}

/// Relative URLs and the schemes in [`SAFE_SCHEMES`] pass.
fn is_safe_url(url: &str) -> bool {
    let trimmed = url.trim_start();
    let Some(colon) = trimmed.find(':') else {
        return true;
    };
    // A colon after the first path, query or fragment delimiter is not a scheme.
    if trimmed[..colon].contains(['/', '?', '#']) {
        return true;
    }
    let scheme = trimmed[..colon].to_ascii_lowercase();
    SAFE_SCHEMES.contains(&scheme.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_is_emphasized() {
        let html = render_markdown("**bold**");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(!html.contains("**"));
    }

    #[test]
    fn test_inline_formatting() {
        let html = render_markdown("# Title\n\n*em* and `code` and [docs](https://docs.rs)");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>em</em>"));
        assert!(html.contains("<code>code</code>"));
        assert!(html.contains(r#"<a href="https://docs.rs">docs</a>"#));
    }

    #[test]
    fn test_code_block() {
        let html = render_markdown("```rust\nfn main() {}\n```");
        assert!(html.contains(r#"<code class="language-rust">"#));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("<script>alert(1)</script>\n\nhi <b>there</b>");
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_script_links_are_neutralised() {
        let html = render_markdown("[x](javascript:alert(1)) [y](JavaScript:void(0))");
        assert!(!html.to_lowercase().contains("javascript:"));
        assert!(html.contains(r##"<a href="#">x</a>"##));
    }

    #[test]
    fn test_url_classification() {
        assert!(is_safe_url("https://example.com"));
        assert!(is_safe_url("mailto:dev@example.com"));
        assert!(is_safe_url("/docs/page"));
        assert!(is_safe_url("docs/a:b"));
        assert!(is_safe_url("#anchor"));
        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url(" data:text/html,hi"));
    }
}
