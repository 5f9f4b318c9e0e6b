//! Structural validation of generated resume documents.
//!
//! A fixed battery of checks mirroring what the endpoint promises callers:
//! a real HTML document with a heading and every required section label.
//! Checks are case-insensitive pattern matches over the raw text; any single
//! failure fails the document.

use std::sync::OnceLock;

use regex::Regex;

/// One named structural check. The label is surfaced in error messages.
struct StructuralCheck {
    label: &'static str,
    pattern: Regex,
}

fn checks() -> &'static [StructuralCheck] {
    static CHECKS: OnceLock<Vec<StructuralCheck>> = OnceLock::new();
    CHECKS.get_or_init(|| {
        let check = |label, pattern: &str| StructuralCheck {
            label,
            pattern: Regex::new(pattern).expect("valid structural check pattern"),
        };
        vec![
            check("doctype declaration", r"(?i)<!DOCTYPE html>"),
            check("html root tag", r"(?i)<html[^>]*>"),
            check("head element", r"(?is)<head>.*</head>"),
            check("body element", r"(?is)<body>.*</body>"),
            check("top-level heading", r"(?is)<h1[^>]*>.*?</h1>"),
            check("Professional Summary section", r"(?i)Professional Summary"),
            check("Technical Skills section", r"(?i)Technical Skills"),
            check("Professional Experience section", r"(?i)Professional Experience"),
            check("Education section", r"(?i)Education"),
            check("Projects section", r"(?i)Projects"),
        ]
    })
}

/// Validates a generated document against the structural checklist.
/// Returns the labels of every failed check.
pub fn validate_document(html: &str) -> Result<(), Vec<&'static str>> {
    let missing: Vec<&'static str> = checks()
        .iter()
        .filter(|check| !check.pattern.is_match(html))
        .map(|check| check.label)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(missing)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Minimal document that satisfies every structural check.
    pub(crate) const MINIMAL_VALID_DOC: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><title>Resume - Jane Doe</title></head>
<body>
<h1>Jane Doe</h1>
<h2>Professional Summary</h2>
<h2>Technical Skills</h2>
<h2>Professional Experience</h2>
<h2>Education</h2>
<h2>Projects</h2>
</body>
</html>"#;

    #[test]
    fn test_minimal_valid_document_passes() {
        assert!(validate_document(MINIMAL_VALID_DOC).is_ok());
    }

    #[test]
    fn test_section_labels_match_case_insensitively() {
        let doc = MINIMAL_VALID_DOC.replace("Professional Summary", "PROFESSIONAL SUMMARY");
        assert!(validate_document(&doc).is_ok());
    }

    #[test]
    fn test_missing_doctype_fails() {
        let doc = MINIMAL_VALID_DOC.replace("<!DOCTYPE html>", "");
        let missing = validate_document(&doc).unwrap_err();
        assert!(missing.contains(&"doctype declaration"));
    }

    #[test]
    fn test_missing_section_label_fails_with_that_label() {
        let doc = MINIMAL_VALID_DOC.replace("Technical Skills", "Skills");
        let missing = validate_document(&doc).unwrap_err();
        assert_eq!(missing, vec!["Technical Skills section"]);
    }

    #[test]
    fn test_missing_h1_fails() {
        let doc = MINIMAL_VALID_DOC.replace("<h1>Jane Doe</h1>", "");
        let missing = validate_document(&doc).unwrap_err();
        assert!(missing.contains(&"top-level heading"));
    }

    #[test]
    fn test_head_and_body_must_be_paired() {
        let doc = MINIMAL_VALID_DOC.replace("</body>", "");
        let missing = validate_document(&doc).unwrap_err();
        assert!(missing.contains(&"body element"));
    }

    #[test]
    fn test_plain_text_fails_everything() {
        let missing = validate_document("just some text").unwrap_err();
        assert_eq!(missing.len(), checks().len());
    }

    #[test]
    fn test_multiline_head_body_matched_across_newlines() {
        // (?s) checks must span newlines inside head/body.
        assert!(validate_document(MINIMAL_VALID_DOC).is_ok());
    }
}
