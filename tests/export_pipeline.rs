//! End-to-end checks of the export pipeline: message text in, finished
//! document (or PDF file) out.

use chatty::export::classify::{Emphasis, HeuristicClassifier, ParagraphRole};
use chatty::export::document::ExportDocument;
use chatty::export::paginate::PageGeometry;
use chatty::export::{build_document, export_to_pdf};
use chatty::message::{ChatMessage, MessageContent, UNPARSED_RESPONSE_FALLBACK};

fn assistant(text: &str) -> ChatMessage {
    ChatMessage::assistant(MessageContent::from_text(text))
}

fn build(message: &ChatMessage, geometry: PageGeometry) -> ExportDocument {
    build_document(message, geometry, &HeuristicClassifier).unwrap()
}

fn page_texts(document: &ExportDocument) -> Vec<Vec<String>> {
    document
        .pages
        .iter()
        .map(|page| page.lines.iter().map(|line| line.text.clone()).collect())
        .collect()
}

#[test]
fn message_lines_become_ordered_paragraphs() {
    let document = build(&assistant("Hello\nWorld"), PageGeometry::a4());
    assert_eq!(page_texts(&document), vec![vec!["Hello", "World"]]);
}

#[test]
fn heading_and_body_survive_the_whole_pipeline() {
    let message = assistant("SUMMARY\nThe release went out on time and nothing rolled back.");
    let document = build(&message, PageGeometry::a4());

    let lines = &document.pages[0].lines;
    assert_eq!(lines[0].text, "SUMMARY");
    assert_eq!(lines[0].emphasis, Emphasis::HeadingLarge);
    assert_eq!(lines[1].emphasis, Emphasis::Body);
    assert!(lines[1].text.starts_with("The release"));
}

#[test]
fn classifier_sees_normalized_paragraphs_not_raw_lines() {
    // Inline code markup disappears during extraction, so the classifier
    // gets plain text.
    let message = assistant("Note: run `cargo test`");
    let document = build(&message, PageGeometry::a4());
    let first = &document.pages[0].lines[0];
    assert_eq!(first.text, "Note: run cargo test");
    assert_eq!(first.emphasis, Emphasis::HeadingSmall);
}

#[test]
fn long_message_paginates_with_consistent_footers() {
    let geometry = PageGeometry {
        page_width: 210.0,
        page_height: 90.0,
        margin: 10.0,
        paragraph_gap: 3.0,
    };
    let body = "All work and no play makes this paragraph very long indeed. ".repeat(30);
    let document = build(&assistant(&body), geometry);

    let total = document.page_count();
    assert!(total > 1, "expected a multi-page document");
    for (index, page) in document.pages.iter().enumerate() {
        assert_eq!(
            page.footer.as_deref(),
            Some(format!("Page {} of {total} - Chatty", index + 1).as_str())
        );
    }
}

#[test]
fn paragraph_text_is_never_reordered_or_merged() {
    let message = assistant("first paragraph\nsecond paragraph\nthird paragraph");
    let document = build(&message, PageGeometry::a4());
    assert_eq!(
        page_texts(&document),
        vec![vec![
            "first paragraph",
            "second paragraph",
            "third paragraph"
        ]]
    );
}

#[test]
fn structured_content_without_text_exports_the_fallback() {
    let content: MessageContent = serde_json::from_str(r#"{"confidence": 1}"#).unwrap();
    let document = build(
        &ChatMessage::assistant(content),
        PageGeometry::a4(),
    );
    let first = &document.pages[0].lines[0];
    assert!(UNPARSED_RESPONSE_FALLBACK.starts_with(first.text.as_str()));
    assert_eq!(first.emphasis, Emphasis::Body);
}

#[test]
fn clipboard_source_text_is_the_raw_message() {
    // The clipboard front-end copies content.text() verbatim; formatting
    // markup and pipeline normalization must not leak into it.
    let message = assistant("Hello\nWorld");
    assert_eq!(message.content.text(), "Hello\nWorld");
}

#[test]
fn classified_roles_match_the_heuristic_end_to_end() {
    let message = assistant("STATUS\nEverything on this line is ordinary body text, long enough.");
    let document = build(&message, PageGeometry::a4());
    let classifier_roles: Vec<ParagraphRole> = document.pages[0]
        .lines
        .iter()
        .map(|line| {
            if line.emphasis == Emphasis::Body {
                ParagraphRole::Body
            } else {
                ParagraphRole::Heading
            }
        })
        .collect();
    assert_eq!(
        classifier_roles,
        vec![ParagraphRole::Heading, ParagraphRole::Body]
    );
}

#[test]
fn pdf_export_writes_the_fixed_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let message = assistant("SUMMARY\nA body paragraph that should land in the file.");

    let path = export_to_pdf(&message, dir.path()).unwrap();

    assert_eq!(path.file_name().unwrap(), "chat-message.pdf");
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}
