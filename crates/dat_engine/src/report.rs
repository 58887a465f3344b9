use std::fmt::Write;

use dat_core::PostRecord;

use crate::preview::{preview_body, DEFAULT_PREVIEW_CHARS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub preview_chars: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

/// Human-readable listing of a thread. Posts are numbered from 1 by their
/// position; the title banner comes only from the first post.
pub fn render_report(records: &[PostRecord], options: &ReportOptions) -> String {
    let mut out = String::new();

    if let Some(title) = records.first().and_then(PostRecord::title) {
        if !title.is_empty() {
            let _ = writeln!(out, "=== Thread title: {title} ===");
        }
    }

    for (idx, post) in records.iter().enumerate() {
        let _ = writeln!(out, "[Post {}]", idx + 1);
        let _ = writeln!(out, "  Name: {}", post.name());
        let _ = writeln!(out, "  Date: {}", post.timestamp());
        if let Some(id) = post.user_id().filter(|id| !id.is_empty()) {
            let _ = writeln!(out, "  ID: {id}");
        }
        if let Some(be) = post.be_id().filter(|be| !be.is_empty()) {
            let _ = writeln!(out, "  BE: {be}");
        }
        let _ = writeln!(
            out,
            "  Body:\n{}",
            preview_body(post.body(), options.preview_chars)
        );
        if !post.reply_targets().is_empty() {
            let _ = writeln!(out, "  -> Replies to: {:?}", post.reply_targets());
        }
        out.push('\n');
    }

    out
}
