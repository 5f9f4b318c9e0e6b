//! Bullet processor — turns achievement strings into `<li>` markup with the
//! first metric highlighted.

use std::sync::OnceLock;

use regex::Regex;

use crate::render::sanitize::sanitize;

/// Matches a percentage, dollar amount (optional "k" suffix), multiplier, or
/// decimal number. Only the FIRST occurrence in a bullet gets emphasis.
fn metric_pattern() -> &'static Regex {
    static METRIC: OnceLock<Regex> = OnceLock::new();
    METRIC.get_or_init(|| Regex::new(r"(\d+%|\$\d+k?|\d+x|\d+\.\d+)").expect("valid metric regex"))
}

/// Renders bullets as `<li>` items, wrapping the first metric match in
/// `<strong>`. The emphasis markup is inserted around separately-sanitized
/// segments so it never gets escaped itself.
pub fn process_bullets(bullets: &[String]) -> String {
    bullets
        .iter()
        .map(|bullet| format!("<li>{}</li>", highlight_metric(bullet)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn highlight_metric(bullet: &str) -> String {
    match metric_pattern().find(bullet) {
        Some(m) => format!(
            "{}<strong>{}</strong>{}",
            sanitize_segment(&bullet[..m.start()]),
            sanitize(m.as_str()),
            sanitize_segment(&bullet[m.end()..]),
        ),
        None => sanitize(bullet),
    }
}

/// Like `sanitize`, but an empty segment around a metric stays empty instead
/// of turning into the "N/A" placeholder.
fn sanitize_segment(segment: &str) -> String {
    if segment.is_empty() {
        String::new()
    } else {
        sanitize(segment)
    }
}
