#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1 = 1,
    H2 = 2,
    H3 = 3,
    H4 = 4,
    H5 = 5,
    H6 = 6,
}

impl HeadingLevel {
    pub fn from_u8(level: u8) -> Option<Self> {
        match level {
            1 => Some(HeadingLevel::H1),
            2 => Some(HeadingLevel::H2),
            3 => Some(HeadingLevel::H3),
            4 => Some(HeadingLevel::H4),
            5 => Some(HeadingLevel::H5),
            6 => Some(HeadingLevel::H6),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Element kinds a formatted message can contain.
///
/// Block-level kinds separate their content with newlines during text
/// extraction; the paragraph-like subset additionally gets a blank line on
/// both sides. Everything else is an inline container.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    Paragraph,
    Division,
    Heading(HeadingLevel),
    ListItem,
    LineBreak,
    TableRow,
    Code,
    Strong,
    Emphasis,
    Link { href: String },
    Span,
}

impl ElementKind {
    /// Paragraph, division, and headings separate as full paragraphs.
    pub fn is_paragraph_like(&self) -> bool {
        matches!(
            self,
            ElementKind::Paragraph | ElementKind::Division | ElementKind::Heading(_)
        )
    }

    pub fn is_block(&self) -> bool {
        self.is_paragraph_like()
            || matches!(
                self,
                ElementKind::ListItem | ElementKind::LineBreak | ElementKind::TableRow
            )
    }
}

/// A node in the rendered representation of a chat message.
///
/// Strictly tree-shaped: each child is owned by exactly one parent. Text
/// leaves hold literal content; element nodes hold a kind tag and ordered
/// children.
#[derive(Debug, Clone, PartialEq)]
pub enum FormattedNode {
    Text(String),
    Element {
        kind: ElementKind,
        children: Vec<FormattedNode>,
    },
}

impl FormattedNode {
    pub fn text(value: impl Into<String>) -> Self {
        FormattedNode::Text(value.into())
    }

    pub fn element(kind: ElementKind, children: Vec<FormattedNode>) -> Self {
        FormattedNode::Element { kind, children }
    }

    pub fn paragraph(children: Vec<FormattedNode>) -> Self {
        Self::element(ElementKind::Paragraph, children)
    }
}
