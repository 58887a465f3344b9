const ELLIPSIS: &str = "...";
pub const DEFAULT_PREVIEW_CHARS: usize = 40;

/// First `max_chars` characters of a body, with `...` appended when the
/// body is longer. Counts characters, not bytes.
pub fn preview_body(body: &str, max_chars: usize) -> String {
    match body.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}{ELLIPSIS}", &body[..end]),
        None => body.to_string(),
    }
}
