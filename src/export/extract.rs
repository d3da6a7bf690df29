use crate::node::{ElementKind, FormattedNode};

/// Flattens a formatted node tree into newline-structured plain text.
///
/// Text leaves contribute their literal value. Block-level elements emit a
/// newline before and after their children; paragraph-like elements emit two,
/// so that a blank line separates paragraphs. Inline and unknown kinds just
/// concatenate their children. Pure function: identical trees always produce
/// identical output.
pub fn extract_text(node: &FormattedNode) -> String {
    let mut out = String::new();
    collect_text(node, &mut out);
    out
}

fn collect_text(node: &FormattedNode, out: &mut String) {
    match node {
        FormattedNode::Text(value) => out.push_str(value),
        FormattedNode::Element { kind, children } => {
            let breaks = separator_newlines(kind);
            push_newlines(out, breaks);
            for child in children {
                collect_text(child, out);
            }
            push_newlines(out, breaks);
        }
    }
}

fn separator_newlines(kind: &ElementKind) -> usize {
    if kind.is_paragraph_like() {
        2
    } else if kind.is_block() {
        1
    } else {
        0
    }
}

fn push_newlines(out: &mut String, count: usize) {
    for _ in 0..count {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{ElementKind, FormattedNode, HeadingLevel};

    fn div(children: Vec<FormattedNode>) -> FormattedNode {
        FormattedNode::element(ElementKind::Division, children)
    }

    #[test]
    fn test_text_leaf_is_literal() {
        let node = FormattedNode::text("  keep  me  ");
        assert_eq!(extract_text(&node), "  keep  me  ");
    }

    #[test]
    fn test_adjacent_divisions_separate_paragraphs() {
        let tree = div(vec![
            div(vec![FormattedNode::text("Hello")]),
            div(vec![FormattedNode::text("World")]),
        ]);
        assert_eq!(extract_text(&tree), "\n\n\n\nHello\n\n\n\nWorld\n\n\n\n");
    }

    #[test]
    fn test_inline_kinds_add_no_whitespace() {
        let tree = FormattedNode::paragraph(vec![
            FormattedNode::text("see "),
            FormattedNode::element(
                ElementKind::Link {
                    href: "https://example.com".to_string(),
                },
                vec![FormattedNode::text("the docs")],
            ),
            FormattedNode::text(" and "),
            FormattedNode::element(ElementKind::Code, vec![FormattedNode::text("cargo doc")]),
        ]);
        assert_eq!(extract_text(&tree), "\n\nsee the docs and cargo doc\n\n");
    }

    #[test]
    fn test_line_break_emits_single_newline() {
        let tree = FormattedNode::paragraph(vec![
            FormattedNode::text("first"),
            FormattedNode::element(ElementKind::LineBreak, vec![]),
            FormattedNode::text("second"),
        ]);
        assert_eq!(extract_text(&tree), "\n\nfirst\nsecond\n\n");
    }

    #[test]
    fn test_heading_is_paragraph_like() {
        let tree = FormattedNode::element(
            ElementKind::Heading(HeadingLevel::H2),
            vec![FormattedNode::text("Summary")],
        );
        assert_eq!(extract_text(&tree), "\n\nSummary\n\n");
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let tree = div(vec![
            FormattedNode::paragraph(vec![FormattedNode::text("alpha")]),
            FormattedNode::element(ElementKind::ListItem, vec![FormattedNode::text("beta")]),
        ]);
        assert_eq!(extract_text(&tree), extract_text(&tree));
    }
}
