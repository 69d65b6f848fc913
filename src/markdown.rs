//! Markdown Preview
//!
//! Renders blog content for the editor's live preview pane with
//! pulldown-cmark. Tables, strikethrough and task lists are enabled to
//! match what the public site renders.

use pulldown_cmark::{html::push_html, Options, Parser};

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

/// Markdown -> HTML
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

/// Markdown -> HTML for inline use (strips outer <p> tags)
pub fn parse_markdown_inline(text: &str) -> String {
    let html = parse_markdown(text);
    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_blocks() {
        let html = parse_markdown("# Title\n\nSome **bold** text");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_inline_strips_paragraph() {
        assert_eq!(parse_markdown_inline("just a summary"), "just a summary");
    }

    #[test]
    fn test_tables_enabled() {
        let html = parse_markdown("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }
}
