use once_cell::sync::Lazy;
use regex::Regex;

static EXTRA_BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapses raw extractor output into clean text.
///
/// Runs of three or more newlines shrink to an empty line first, then every
/// remaining whitespace run flattens to a single space. Only the
/// double-newline paragraph boundary survives the flattening; single newlines
/// from inline breaks do not, so the paragraph is the one structural unit
/// this pipeline preserves. No space is left touching a newline, and the
/// whole string is trimmed. Idempotent.
pub fn normalize(raw: &str) -> String {
    let collapsed = EXTRA_BLANK_LINES.replace_all(raw, "\n\n");
    let flattened = WHITESPACE_RUN.replace_all(&collapsed, |caps: &regex::Captures| {
        if caps[0].matches('\n').count() >= 2 {
            "\n\n"
        } else {
            " "
        }
    });
    flattened.trim().to_string()
}

/// Splits normalized text into trimmed, non-empty paragraph strings.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalizes raw extractor output and splits it into paragraphs.
pub fn normalized_paragraphs(raw: &str) -> Vec<String> {
    split_paragraphs(&normalize(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_runs_collapse_to_one() {
        assert_eq!(normalize("a\n\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_single_newlines_become_spaces() {
        assert_eq!(normalize("first\nsecond\nthird"), "first second third");
    }

    #[test]
    fn test_spaces_around_paragraph_break_are_dropped() {
        assert_eq!(normalize("first   \n\n   second"), "first\n\nsecond");
    }

    #[test]
    fn test_separated_newlines_still_form_a_boundary() {
        assert_eq!(normalize("first \n \nsecond"), "first\n\nsecond");
    }

    #[test]
    fn test_result_is_trimmed() {
        assert_eq!(normalize("\n\n  hello  \n\n"), "hello");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let samples = [
            "\n\n\n\nHello\n\n\n\nWorld\n\n\n\n",
            "a\tb\r\nc",
            "  lots\n of \n\n mess \n\n\n here  ",
        ];
        for raw in samples {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_extractor_output_splits_into_paragraphs() {
        let raw = "\n\n\n\nHello\n\n\n\nWorld\n\n\n\n";
        assert_eq!(normalized_paragraphs(raw), vec!["Hello", "World"]);
    }

    #[test]
    fn test_empty_paragraphs_are_dropped() {
        assert_eq!(normalized_paragraphs("\n\n \n\n\n\nonly\n\n"), vec!["only"]);
        assert!(normalized_paragraphs("   \n\n\n ").is_empty());
    }
}
