use std::path::Path;

use log::info;
use oxidize_pdf::{Color, Document, Font, Page as PdfPage};

use super::classify::Emphasis;
use super::document::{ExportDocument, FOOTER_FONT_SIZE};
use crate::error::ExportError;

const MM_TO_PT: f64 = 72.0 / 25.4;

/// Serializes an already-laid-out document to a PDF file.
///
/// Layout decisions were all made by the pagination pass; this writer only
/// converts millimeter offsets (top-left origin) into PDF points
/// (bottom-left origin) and emits text at the computed positions.
pub fn write_pdf(document: &ExportDocument, path: &Path) -> Result<(), ExportError> {
    let geometry = &document.geometry;
    let mut pdf = Document::new();
    pdf.set_title(document.title.as_str());

    for (index, page) in document.pages.iter().enumerate() {
        let mut pdf_page = PdfPage::new(
            geometry.page_width * MM_TO_PT,
            geometry.page_height * MM_TO_PT,
        );

        if index == 0 {
            for line in document.header_lines() {
                let font = if line.bold {
                    Font::HelveticaBold
                } else {
                    Font::Helvetica
                };
                pdf_page
                    .text()
                    .set_font(font, line.font_size)
                    .at(geometry.margin * MM_TO_PT, flip(geometry.page_height, line.y))
                    .write(line.text.as_str())
                    .map_err(rendering)?;
            }

            let rule_y = flip(geometry.page_height, document.separator_y());
            pdf_page
                .graphics()
                .set_stroke_color(Color::rgb(0.6, 0.6, 0.6))
                .set_line_width(0.7)
                .move_to(geometry.margin * MM_TO_PT, rule_y)
                .line_to((geometry.page_width - geometry.margin) * MM_TO_PT, rule_y)
                .stroke();
        }

        for line in &page.lines {
            pdf_page
                .text()
                .set_font(font_for(line.emphasis), line.emphasis.font_size())
                .at(geometry.margin * MM_TO_PT, flip(geometry.page_height, line.y))
                .write(line.text.as_str())
                .map_err(rendering)?;
        }

        if let Some(footer) = &page.footer {
            pdf_page
                .text()
                .set_font(Font::Helvetica, FOOTER_FONT_SIZE)
                .at(
                    geometry.margin * MM_TO_PT,
                    flip(geometry.page_height, document.footer_y()),
                )
                .write(footer.as_str())
                .map_err(rendering)?;
        }

        pdf.add_page(pdf_page);
    }

    pdf.save(path).map_err(rendering)?;
    info!(
        "Wrote {} page PDF to {}",
        document.page_count(),
        path.display()
    );
    Ok(())
}

fn font_for(emphasis: Emphasis) -> Font {
    if emphasis.is_bold() {
        Font::HelveticaBold
    } else {
        Font::Helvetica
    }
}

/// Millimeters from the page top to points from the page bottom.
fn flip(page_height_mm: f64, y_mm: f64) -> f64 {
    (page_height_mm - y_mm) * MM_TO_PT
}

fn rendering(error: impl std::fmt::Display) -> ExportError {
    ExportError::Rendering(error.to_string())
}
