use textwrap::Options;
use textwrap::word_splitters::WordSplitter;

use super::classify::{Emphasis, Paragraph};
use crate::error::ExportError;

/// Fixed page geometry in millimeters. Defaults to A4 portrait with the
/// margins the PDF export uses.
#[derive(Debug, Clone, PartialEq)]
pub struct PageGeometry {
    pub page_width: f64,
    pub page_height: f64,
    pub margin: f64,
    pub paragraph_gap: f64,
}

impl PageGeometry {
    pub fn a4() -> Self {
        PageGeometry {
            page_width: 210.0,
            page_height: 297.0,
            margin: 25.0,
            paragraph_gap: 3.0,
        }
    }

    pub fn content_width(&self) -> f64 {
        self.page_width - 2.0 * self.margin
    }

    /// Lowest vertical offset content may occupy, measured from the page top.
    pub fn bottom_limit(&self) -> f64 {
        self.page_height - self.margin
    }

    /// Full capacity of a fresh page, top margin to bottom margin.
    pub fn printable_height(&self) -> f64 {
        self.page_height - 2.0 * self.margin
    }

    pub fn validate(&self) -> Result<(), ExportError> {
        let finite = self.page_width.is_finite()
            && self.page_height.is_finite()
            && self.margin.is_finite()
            && self.paragraph_gap.is_finite();
        if !finite || self.content_width() <= 0.0 || self.printable_height() <= 0.0 {
            return Err(ExportError::InvalidGeometry(format!(
                "{:.1} x {:.1} mm page with {:.1} mm margins leaves no content area",
                self.page_width, self.page_height, self.margin
            )));
        }
        Ok(())
    }

    /// Column budget for one line at the given emphasis.
    pub fn max_columns(&self, emphasis: Emphasis) -> usize {
        ((self.content_width() / emphasis.char_width()).floor() as usize).max(1)
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

/// A wrapped line placed at a vertical offset on its page. Never mutated
/// after placement.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub y: f64,
    pub emphasis: Emphasis,
}

/// One page of placed lines.
///
/// Pages are sealed in order by the pagination pass; only the footer slot is
/// written afterwards, once the total page count is known.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
    pub footer: Option<String>,
}

/// Word-wraps a paragraph into lines of at most `columns` characters.
///
/// Breaks only at whitespace; a single word wider than the budget gets its
/// own line instead of being split mid-word.
pub fn wrap_paragraph(text: &str, columns: usize) -> Vec<String> {
    let options = Options::new(columns)
        .break_words(false)
        .word_splitter(WordSplitter::NoHyphenation);
    textwrap::wrap(text, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// Lays classified paragraphs out into pages.
///
/// A running cursor starts at `first_page_top` (below the page-1 header) and
/// advances by each paragraph's height plus the inter-paragraph gap. A
/// paragraph that would cross the bottom limit moves to a fresh page whole;
/// only a paragraph taller than an entire printable page spills across the
/// boundary, line by line.
pub fn paginate(
    paragraphs: &[Paragraph],
    geometry: &PageGeometry,
    first_page_top: f64,
) -> Result<Vec<Page>, ExportError> {
    geometry.validate()?;
    if !first_page_top.is_finite() || first_page_top >= geometry.bottom_limit() {
        return Err(ExportError::InvalidGeometry(format!(
            "header block at {first_page_top:.1} mm leaves no room above the {:.1} mm bottom limit",
            geometry.bottom_limit()
        )));
    }

    let mut pages: Vec<Page> = Vec::new();
    let mut current = Page::default();
    let mut cursor = first_page_top;

    for paragraph in paragraphs {
        let columns = geometry.max_columns(paragraph.emphasis);
        let line_height = paragraph.emphasis.line_height();
        let lines = wrap_paragraph(&paragraph.text, columns);
        let block_height = lines.len() as f64 * line_height;

        if cursor + block_height > geometry.bottom_limit() {
            if block_height <= geometry.printable_height() {
                // Keep the paragraph intact on a fresh page.
                pages.push(std::mem::take(&mut current));
                cursor = geometry.margin;
                for text in lines {
                    current.lines.push(PlacedLine {
                        text,
                        y: cursor,
                        emphasis: paragraph.emphasis,
                    });
                    cursor += line_height;
                }
            } else {
                // Taller than any single page: spill line by line.
                for text in lines {
                    if cursor + line_height > geometry.bottom_limit() {
                        pages.push(std::mem::take(&mut current));
                        cursor = geometry.margin;
                    }
                    current.lines.push(PlacedLine {
                        text,
                        y: cursor,
                        emphasis: paragraph.emphasis,
                    });
                    cursor += line_height;
                }
            }
        } else {
            for text in lines {
                current.lines.push(PlacedLine {
                    text,
                    y: cursor,
                    emphasis: paragraph.emphasis,
                });
                cursor += line_height;
            }
        }

        cursor += geometry.paragraph_gap;
    }

    pages.push(current);
    Ok(pages)
}
