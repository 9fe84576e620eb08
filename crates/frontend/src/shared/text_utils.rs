//! Text helpers used when rendering messages and document titles

/// Ellipsis appended to truncated text
pub const ELLIPSIS: &str = "...";

/// Turn message text into safe HTML for `inner_html`
///
/// Escapes `&`, `<` and `>` and renders newlines as `<br>`. This is the
/// only sanitization applied to message text.
pub fn format_message(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\n' => out.push_str("<br>"),
            _ => out.push(ch),
        }
    }
    out
}

/// Cut `text` to `max_len` characters, marking the cut with an ellipsis
pub fn truncate_text(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}
