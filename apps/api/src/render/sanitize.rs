//! HTML sanitizer — the single boundary between untrusted user text and
//! generated markup. Every leaf string a formatter interpolates must pass
//! through `sanitize` exactly once.

/// Placeholder rendered for empty leaf values.
pub const PLACEHOLDER: &str = "N/A";

/// Escapes a text fragment for HTML embedding.
///
/// Empty input yields the literal `"N/A"` placeholder. Replacement order
/// matters: `&` must go first or the entities themselves get re-escaped.
/// After entity escaping, newlines become `<br>`. Not idempotent — callers
/// sanitize once, never twice.
pub fn sanitize(text: &str) -> String {
    if text.is_empty() {
        return PLACEHOLDER.to_string();
    }
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
        .replace('\n', "<br>")
}

/// Sanitizes an optional field, falling back to the placeholder when absent.
pub fn sanitize_or_placeholder(text: Option<&str>) -> String {
    sanitize(text.unwrap_or(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_all_special_characters() {
        let out = sanitize(r#"<script>alert("x & 'y'")</script>"#);
        assert!(!out.contains('<'));
        assert!(!out.contains('>'));
        assert!(!out.contains('"'));
        assert!(!out.contains('\''));
        assert_eq!(
            out,
            "&lt;script&gt;alert(&quot;x &amp; &#039;y&#039;&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_ampersand_escaped_before_angle_brackets() {
        // If `&` ran last, "&lt;" would become "&amp;lt;".
        assert_eq!(sanitize("<"), "&lt;");
        assert_eq!(sanitize("&"), "&amp;");
        assert_eq!(sanitize("a&b<c"), "a&amp;b&lt;c");
    }

    #[test]
    fn test_newline_becomes_break_tag() {
        assert_eq!(sanitize("line one\nline two"), "line one<br>line two");
    }

    #[test]
    fn test_empty_input_yields_placeholder() {
        assert_eq!(sanitize(""), "N/A");
        assert_eq!(sanitize_or_placeholder(None), "N/A");
        assert_eq!(sanitize_or_placeholder(Some("x")), "x");
    }

    #[test]
    fn test_not_idempotent_on_escaped_input() {
        // Documented behavior: already-escaped text is escaped again.
        assert_eq!(sanitize("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(sanitize("Rust, Tokio (2020)"), "Rust, Tokio (2020)");
    }
}
