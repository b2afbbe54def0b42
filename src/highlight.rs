use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

const THEME: &str = "base16-ocean.dark";

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEMES: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Replaces fenced and indented code blocks with syntect-highlighted HTML.
///
/// Blocks that can't be highlighted are passed through untouched so
/// pulldown-cmark renders them as plain `<pre><code>`.
pub fn highlight_code_blocks<'a, It>(events: It) -> Vec<Event<'a>>
where
    It: Iterator<Item = Event<'a>>,
{
    let mut block: Option<(CodeBlockKind<'a>, String)> = None;
    let mut out = Vec::new();

    for event in events {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                block = Some((kind, String::new()));
            }
            Event::Text(text) if block.is_some() => {
                if let Some((_, code)) = block.as_mut() {
                    code.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                let Some((kind, code)) = block.take() else {
                    continue;
                };
                match render_block(&kind, &code) {
                    Some(html) => out.push(Event::Html(CowStr::from(html))),
                    None => {
                        out.push(Event::Start(Tag::CodeBlock(kind)));
                        out.push(Event::Text(CowStr::from(code)));
                        out.push(Event::End(TagEnd::CodeBlock));
                    }
                }
            }
            e => out.push(e),
        }
    }

    out
}

fn render_block(kind: &CodeBlockKind<'_>, code: &str) -> Option<String> {
    let syntax = match kind {
        CodeBlockKind::Fenced(lang) => SYNTAXES.find_syntax_by_token(lang),
        CodeBlockKind::Indented => None,
    }
    .unwrap_or_else(|| SYNTAXES.find_syntax_plain_text());

    let theme = THEMES.themes.get(THEME)?;
    highlighted_html_for_string(code, &SYNTAXES, syntax, theme)
        .inspect_err(|e| log::warn!("couldn't highlight code block: {e}"))
        .ok()
}

#[cfg(test)]
mod tests {
    use pulldown_cmark::Parser;

    use super::*;

    fn render(md: &str) -> String {
        let events = highlight_code_blocks(Parser::new(md));
        let mut html = String::new();
        pulldown_cmark::html::push_html(&mut html, events.into_iter());
        html
    }

    #[test]
    fn test_fenced_block_highlighted() {
        let html = render("```rust\nfn main() {}\n```\n");
        assert!(html.starts_with("<pre style="));
        assert!(!html.contains("<code"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain_text() {
        let html = render("```notalanguage\nplain words\n```\n");
        assert!(html.contains("plain words"));
        assert!(html.contains("<pre style="));
    }

    #[test]
    fn test_other_events_untouched() {
        let html = render("Hello *world*\n");
        assert_eq!(html, "<p>Hello <em>world</em></p>\n");
    }
}
