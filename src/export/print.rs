use std::io::Write;

use log::{info, warn};

use crate::error::ExportError;
use crate::formatter;
use crate::message::ChatMessage;

/// Builds the standalone print page for one message.
///
/// The message body is the formatter's HTML rendering; pagination is left to
/// the browser's print layout, so no part of the pagination engine runs here.
/// A visible button triggers printing manually.
pub fn print_document_html(message: &ChatMessage) -> String {
    let body = formatter::render_html(&formatter::format_message(message.content.text()));
    let sender = html_escape::encode_text(message.sender.display_name());
    let time = message.timestamp.format("%B %d, %Y %H:%M");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Chat Message</title>
<style>
  body {{ font-family: Helvetica, Arial, sans-serif; margin: 40px auto; max-width: 720px; color: #222; }}
  header {{ border-bottom: 1px solid #999; padding-bottom: 12px; margin-bottom: 24px; }}
  header h1 {{ margin: 0 0 4px 0; font-size: 24px; }}
  header p {{ margin: 0; color: #666; }}
  code {{ background: #f4f4f4; border-radius: 3px; padding: 1px 4px; font-family: monospace; }}
  div > code {{ display: block; padding: 10px; white-space: pre-wrap; }}
  .print-control {{ margin-top: 32px; }}
  @media print {{ .print-control {{ display: none; }} }}
</style>
</head>
<body>
<header>
<h1>Chat Message</h1>
<p>From: {sender}</p>
<p>{time}</p>
</header>
{body}
<div class="print-control"><button onclick="window.print()">Print</button></div>
</body>
</html>
"#
    )
}

/// Writes the print page to a scoped temp file and opens it in the browser.
///
/// The file is kept only once the browser launch succeeds; on any failure
/// path it is removed again so no scratch files accumulate.
pub fn open_print_view(message: &ChatMessage) -> Result<(), ExportError> {
    let html = print_document_html(message);

    let mut file = tempfile::Builder::new()
        .prefix("chatty-print-")
        .suffix(".html")
        .tempfile()?;
    file.write_all(html.as_bytes())?;

    let (_, path) = file
        .keep()
        .map_err(|e| ExportError::Rendering(format!("could not keep print page: {e}")))?;

    if let Err(error) = open::that(&path) {
        if let Err(cleanup) = std::fs::remove_file(&path) {
            warn!("Could not remove print page {}: {cleanup}", path.display());
        }
        return Err(ExportError::Io(error));
    }

    info!("Opened print view at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{ChatMessage, MessageContent};

    #[test]
    fn test_print_page_embeds_rendered_message_and_trigger() {
        let message = ChatMessage::assistant(MessageContent::from_text(
            "Hello\nrun `cargo test`",
        ));
        let html = print_document_html(&message);

        assert!(html.contains("<p>Hello</p>"));
        assert!(html.contains("<code>cargo test</code>"));
        assert!(html.contains("window.print()"));
        assert!(html.contains("From: Chatty"));
    }

    #[test]
    fn test_print_page_escapes_message_markup() {
        let message = ChatMessage::user("<img src=x onerror=alert(1)>");
        let html = print_document_html(&message);
        assert!(!html.contains("<img"));
    }
}
