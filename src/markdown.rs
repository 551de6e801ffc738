//! Converts article bodies from markdown to HTML. The extension set
//! matches what the articles actually use: fenced code blocks come from
//! the base spec, and tables, footnotes, strikethrough, task lists, and
//! smart punctuation are enabled on top.

use pulldown_cmark::{html, Options, Parser};

/// Renders `markdown` into an HTML string. Link targets and image paths
/// pass through untouched; resolving asset paths is the static-asset
/// server's job.
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, Parser::new_ext(markdown, options));
    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_heading_and_code_fence() {
        let html = to_html("# 前言\n\n```javascript\nconst worker = new Worker();\n```\n");
        assert!(html.contains("<h1>前言</h1>"));
        assert!(html.contains(r#"<code class="language-javascript">"#));
    }

    #[test]
    fn test_table() {
        let html = to_html("|a|b|\n|-|-|\n|1|2|\n");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(to_html(""), "");
    }
}
