use tracing::debug;

/// Placeholder in screen templates replaced by the configured contact handle
pub const CONTACT_PLACEHOLDER: &str = "{contact}";

/// Render a screen template into Telegram HTML.
///
/// The template is converted first and the contact handle substituted
/// afterwards, so underscores or asterisks in a handle are never read as
/// formatting. The handle is HTML-escaped: it appears verbatim in the body
/// unless it contains `&`, `<` or `>`, which become entities that Telegram
/// renders back to the original characters.
pub fn render_template(template: &str, contact: &str) -> String {
    markdown_to_telegram_html(template).replace(CONTACT_PLACEHOLDER, &escape_html(contact))
}

/// Convert the small Markdown subset used by screen copy to Telegram HTML
///
/// Supports:
/// - Bold: **text** → <b>text</b>
/// - Italic: *text* → <i>text</i>
///
/// Unclosed markers run to the end of the input.
pub fn markdown_to_telegram_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut rest = text;

    while let Some(pos) = rest.find('*') {
        out.push_str(&escape_html(&rest[..pos]));
        let after = &rest[pos..];

        let (marker, open, close) = if after.starts_with("**") {
            ("**", "<b>", "</b>")
        } else {
            ("*", "<i>", "</i>")
        };

        let inner_start = &after[marker.len()..];
        let (inner, tail) = match inner_start.find(marker) {
            Some(end) => (&inner_start[..end], &inner_start[end + marker.len()..]),
            None => (inner_start, ""),
        };

        out.push_str(open);
        out.push_str(&markdown_to_telegram_html(inner));
        out.push_str(close);
        rest = tail;
    }
    out.push_str(&escape_html(rest));

    debug!(
        input_len = text.len(),
        output_len = out.len(),
        "Markdown conversion complete"
    );
    out
}

/// Escape HTML entities
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            c => escaped.push(c),
        }
    }
    escaped
}
