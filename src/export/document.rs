use chrono::{DateTime, Local};

use super::classify::Paragraph;
use super::paginate::{Page, PageGeometry, paginate};
use crate::error::ExportError;

pub const APP_NAME: &str = "Chatty";
pub const DOCUMENT_TITLE: &str = "Chat Message";

// Header block metrics, mm below the top margin.
const TITLE_ADVANCE: f64 = 10.0;
const META_ADVANCE: f64 = 6.0;
const SEPARATOR_GAP: f64 = 6.0;
// Footer baseline sits this far below the bottom margin edge.
const FOOTER_DROP: f64 = 10.0;

pub const TITLE_FONT_SIZE: f64 = 18.0;
pub const META_FONT_SIZE: f64 = 11.0;
pub const FOOTER_FONT_SIZE: f64 = 9.0;

/// One line of the page-1 header block, positioned from the page top.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderLine {
    pub text: String,
    pub y: f64,
    pub font_size: f64,
    pub bold: bool,
}

/// The finished export artifact: header metadata plus sealed pages.
///
/// The footer embeds the total page count, which only exists after layout, so
/// assembly materializes every page first and then stamps footers in a second
/// pass over the sealed pages.
#[derive(Debug, Clone)]
pub struct ExportDocument {
    pub title: String,
    pub sender: String,
    pub generated_at: DateTime<Local>,
    pub geometry: PageGeometry,
    pub pages: Vec<Page>,
}

impl ExportDocument {
    pub fn assemble(
        sender: &str,
        generated_at: DateTime<Local>,
        paragraphs: Vec<Paragraph>,
        geometry: PageGeometry,
    ) -> Result<Self, ExportError> {
        let first_page_top = geometry.margin + header_height();
        let mut pages = paginate(&paragraphs, &geometry, first_page_top)?;
        stamp_footers(&mut pages);
        Ok(ExportDocument {
            title: DOCUMENT_TITLE.to_string(),
            sender: sender.to_string(),
            generated_at,
            geometry,
            pages,
        })
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Page-1 header block: title, sender, generation timestamp. Rendered
    /// once; later pages start at the top margin.
    pub fn header_lines(&self) -> Vec<HeaderLine> {
        let top = self.geometry.margin;
        vec![
            HeaderLine {
                text: self.title.clone(),
                y: top + TITLE_ADVANCE,
                font_size: TITLE_FONT_SIZE,
                bold: true,
            },
            HeaderLine {
                text: format!("From: {}", self.sender),
                y: top + TITLE_ADVANCE + META_ADVANCE,
                font_size: META_FONT_SIZE,
                bold: false,
            },
            HeaderLine {
                text: format!(
                    "Generated on: {}",
                    self.generated_at.format("%B %d, %Y %H:%M")
                ),
                y: top + TITLE_ADVANCE + 2.0 * META_ADVANCE,
                font_size: META_FONT_SIZE,
                bold: false,
            },
        ]
    }

    /// Vertical offset of the separator rule under the header block.
    pub fn separator_y(&self) -> f64 {
        self.geometry.margin + header_height() - SEPARATOR_GAP / 2.0
    }

    pub fn footer_y(&self) -> f64 {
        self.geometry.bottom_limit() + FOOTER_DROP
    }
}

/// Height of the page-1 header block; the content cursor starts below it.
pub fn header_height() -> f64 {
    TITLE_ADVANCE + 2.0 * META_ADVANCE + SEPARATOR_GAP
}

fn stamp_footers(pages: &mut [Page]) {
    let total = pages.len();
    for (index, page) in pages.iter_mut().enumerate() {
        page.footer = Some(format!("Page {} of {} - {}", index + 1, total, APP_NAME));
    }
}
