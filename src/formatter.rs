use once_cell::sync::Lazy;
use regex::Regex;

use crate::node::{ElementKind, FormattedNode};

static CODE_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```(.+?)```").unwrap());
static INLINE_MARKUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`]+)`|\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Formats raw chat text into a formatted node tree.
///
/// Handles the markup chat messages actually use: triple-backtick code
/// blocks, inline backtick code, `[label](url)` links, and one paragraph per
/// input line. Deliberately not a markdown parser; anything else passes
/// through as literal text.
pub fn format_message(text: &str) -> FormattedNode {
    let mut children = Vec::new();
    let mut cursor = 0;

    for caps in CODE_FENCE.captures_iter(text) {
        let fence = caps.get(0).unwrap();
        push_paragraph_lines(&mut children, &text[cursor..fence.start()]);
        let code = caps.get(1).map_or("", |group| group.as_str());
        children.push(FormattedNode::element(
            ElementKind::Division,
            vec![FormattedNode::element(
                ElementKind::Code,
                vec![FormattedNode::text(code)],
            )],
        ));
        cursor = fence.end();
    }
    push_paragraph_lines(&mut children, &text[cursor..]);

    FormattedNode::element(ElementKind::Division, children)
}

fn push_paragraph_lines(out: &mut Vec<FormattedNode>, segment: &str) {
    for line in segment.lines() {
        out.push(FormattedNode::paragraph(parse_inline(line)));
    }
}

fn parse_inline(line: &str) -> Vec<FormattedNode> {
    let mut nodes = Vec::new();
    let mut cursor = 0;

    for caps in INLINE_MARKUP.captures_iter(line) {
        let matched = caps.get(0).unwrap();
        if matched.start() > cursor {
            nodes.push(FormattedNode::text(&line[cursor..matched.start()]));
        }
        if let Some(code) = caps.get(1) {
            nodes.push(FormattedNode::element(
                ElementKind::Code,
                vec![FormattedNode::text(code.as_str())],
            ));
        } else if let (Some(label), Some(href)) = (caps.get(2), caps.get(3)) {
            nodes.push(FormattedNode::element(
                ElementKind::Link {
                    href: href.as_str().to_string(),
                },
                vec![FormattedNode::text(label.as_str())],
            ));
        }
        cursor = matched.end();
    }
    if cursor < line.len() {
        nodes.push(FormattedNode::text(&line[cursor..]));
    }

    nodes
}

/// Renders a node tree to HTML for the print view.
pub fn render_html(node: &FormattedNode) -> String {
    let mut out = String::new();
    write_html(node, &mut out);
    out
}

fn write_html(node: &FormattedNode, out: &mut String) {
    match node {
        FormattedNode::Text(value) => {
            out.push_str(&html_escape::encode_text(value));
        }
        FormattedNode::Element { kind, children } => {
            let (open, close) = html_tags(kind);
            out.push_str(&open);
            for child in children {
                write_html(child, out);
            }
            out.push_str(&close);
        }
    }
}

fn html_tags(kind: &ElementKind) -> (String, String) {
    let pair = |open: &str, close: &str| (open.to_string(), close.to_string());
    match kind {
        ElementKind::Paragraph => pair("<p>", "</p>"),
        ElementKind::Division => pair("<div>", "</div>"),
        ElementKind::Heading(level) => (
            format!("<h{}>", level.as_u8()),
            format!("</h{}>", level.as_u8()),
        ),
        ElementKind::ListItem => pair("<li>", "</li>"),
        ElementKind::LineBreak => pair("<br>", ""),
        ElementKind::TableRow => pair("<tr>", "</tr>"),
        ElementKind::Code => pair("<code>", "</code>"),
        ElementKind::Strong => pair("<strong>", "</strong>"),
        ElementKind::Emphasis => pair("<em>", "</em>"),
        ElementKind::Link { href } => (
            format!(
                r#"<a href="{}" target="_blank">"#,
                html_escape::encode_double_quoted_attribute(href)
            ),
            "</a>".to_string(),
        ),
        ElementKind::Span => pair("<span>", "</span>"),
    }
}
