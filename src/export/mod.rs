//! The document export pipeline and its front-ends.
//!
//! Three export forms share one message: clipboard copy takes the original
//! unformatted text verbatim, the print view takes the formatter's HTML and
//! lets the browser paginate, and only the PDF file export runs the full
//! pipeline: extract, normalize, classify, paginate, assemble, serialize.
//!
//! Every export runs synchronously to completion and re-derives its
//! paragraphs and pages from the current message content; nothing is shared
//! between invocations.

pub mod classify;
pub mod document;
pub mod extract;
pub mod normalize;
pub mod paginate;
pub mod pdf;
pub mod print;

use std::path::{Path, PathBuf};

use arboard::Clipboard;
use log::info;

use crate::error::ExportError;
use crate::formatter;
use crate::message::ChatMessage;
use self::classify::{HeuristicClassifier, Paragraph, ParagraphClassifier};
use self::document::ExportDocument;
use self::paginate::PageGeometry;

pub use self::print::open_print_view;

/// Fixed base name for the file export.
pub const EXPORT_FILE_STEM: &str = "chat-message";

/// Copies the message's original unformatted text to the clipboard.
///
/// Bypasses the pipeline entirely: what was authored or received is what
/// lands on the clipboard, independent of any rendering.
pub fn copy_to_clipboard(message: &ChatMessage) -> Result<(), ExportError> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| ExportError::Rendering(format!("failed to access clipboard: {e}")))?;
    clipboard
        .set_text(message.content.text().to_string())
        .map_err(|e| ExportError::Rendering(format!("failed to copy to clipboard: {e}")))?;
    info!("Copied message text to clipboard");
    Ok(())
}

/// Runs the full pipeline on one message and writes `chat-message.pdf`
/// under `dir`. Returns the written path.
pub fn export_to_pdf(message: &ChatMessage, dir: &Path) -> Result<PathBuf, ExportError> {
    let document = build_document(message, PageGeometry::a4(), &HeuristicClassifier)?;
    let path = dir.join(format!("{EXPORT_FILE_STEM}.pdf"));
    pdf::write_pdf(&document, &path)?;
    Ok(path)
}

/// The pipeline proper: message text through formatter, extractor,
/// normalizer, classifier, and pagination into a finished document.
pub fn build_document(
    message: &ChatMessage,
    geometry: PageGeometry,
    classifier: &dyn ParagraphClassifier,
) -> Result<ExportDocument, ExportError> {
    let tree = formatter::format_message(message.content.text());
    let raw = extract::extract_text(&tree);
    let paragraphs: Vec<Paragraph> = normalize::normalized_paragraphs(&raw)
        .into_iter()
        .map(|text| classifier.classify(text))
        .collect();
    ExportDocument::assemble(
        message.sender.display_name(),
        message.timestamp,
        paragraphs,
        geometry,
    )
}
