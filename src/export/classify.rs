/// Visual prominence of a classified paragraph.
///
/// Carries the font metrics the pagination engine and the PDF writer agree
/// on: point size, line advance, and the average glyph width used for the
/// column budget (both in millimeters).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Body,
    HeadingSmall,
    HeadingLarge,
}

impl Emphasis {
    pub fn font_size(self) -> f64 {
        match self {
            Emphasis::Body => 11.0,
            Emphasis::HeadingSmall => 13.0,
            Emphasis::HeadingLarge => 16.0,
        }
    }

    pub fn line_height(self) -> f64 {
        match self {
            Emphasis::Body => 6.0,
            Emphasis::HeadingSmall => 7.0,
            Emphasis::HeadingLarge => 8.5,
        }
    }

    pub fn char_width(self) -> f64 {
        match self {
            Emphasis::Body => 2.0,
            Emphasis::HeadingSmall => 2.4,
            Emphasis::HeadingLarge => 2.9,
        }
    }

    pub fn is_bold(self) -> bool {
        !matches!(self, Emphasis::Body)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphRole {
    Heading,
    Body,
}

/// A normalized paragraph with its classification. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub role: ParagraphRole,
    pub emphasis: Emphasis,
}

impl Paragraph {
    pub fn body(text: impl Into<String>) -> Self {
        Paragraph {
            text: text.into(),
            role: ParagraphRole::Body,
            emphasis: Emphasis::Body,
        }
    }

    pub fn heading(text: impl Into<String>, emphasis: Emphasis) -> Self {
        Paragraph {
            text: text.into(),
            role: ParagraphRole::Heading,
            emphasis,
        }
    }
}

/// Strategy seam for paragraph classification.
///
/// Pagination only consumes `Paragraph` values, so a markup-aware strategy
/// can replace the default heuristic without touching layout code.
pub trait ParagraphClassifier {
    fn classify(&self, text: String) -> Paragraph;
}

const MAX_HEADING_CHARS: usize = 50;
const LARGE_HEADING_CHARS: usize = 20;
const MAX_LABEL_CHARS: usize = 25;

/// Best-effort heading detection on plain text.
///
/// A paragraph reads as a heading when it is short and either fully
/// upper-case or starts with a short `label:` prefix. Short body text that
/// happens to look like that will be misclassified; that trade-off is
/// accepted in exchange for not needing any markup.
#[derive(Debug, Default)]
pub struct HeuristicClassifier;

impl ParagraphClassifier for HeuristicClassifier {
    fn classify(&self, text: String) -> Paragraph {
        let length = text.chars().count();
        let shouty = text == text.to_uppercase();
        let labeled = text
            .split_once(':')
            .is_some_and(|(label, _)| label.chars().count() < MAX_LABEL_CHARS);

        if length < MAX_HEADING_CHARS && (shouty || labeled) {
            let emphasis = if length < LARGE_HEADING_CHARS {
                Emphasis::HeadingLarge
            } else {
                Emphasis::HeadingSmall
            };
            Paragraph::heading(text, emphasis)
        } else {
            Paragraph::body(text)
        }
    }
}
