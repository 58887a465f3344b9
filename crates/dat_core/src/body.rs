//! Body sanitizing and anchor extraction.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::entity::decode_entities;
use crate::text::{parse_decimal, trim_space};

/// Line-break marker used inside the body field.
pub const LINE_BREAK_MARKER: &str = "<br>";

static ANCHOR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<a\b[^>]*>(.*?)</a>").expect("anchor tag pattern"));

// Matched before entity decoding so only the encoded form counts.
static ENCODED_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&gt;&gt;(\d+)").expect("encoded anchor pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SanitizedBody {
    pub body: String,
    pub reply_targets: Vec<u64>,
}

/// Runs the full body pipeline: de-tag, anchor scan, entity decode,
/// line-break normalization and per-line trim, in that order.
pub fn sanitize_body(raw_body: &str) -> SanitizedBody {
    let detagged = strip_anchor_tags(raw_body);
    let reply_targets = extract_reply_targets(&detagged);
    let body = clean_text(&detagged);
    SanitizedBody {
        body,
        reply_targets,
    }
}

/// Replaces each `<a ...>inner</a>` with `inner`. Unterminated tags are
/// left untouched.
pub fn strip_anchor_tags(text: &str) -> Cow<'_, str> {
    ANCHOR_TAG.replace_all(text, "$1")
}

/// Collects the numbers of every `&gt;&gt;N` anchor, in order of
/// appearance. Any Unicode decimal digits count, so full-width anchors are
/// found too. Numbers too large for `u64` are dropped.
pub fn extract_reply_targets(text: &str) -> Vec<u64> {
    ENCODED_ANCHOR
        .captures_iter(text)
        .filter_map(|caps| parse_decimal(&caps[1]))
        .collect()
}

/// Entity decode, `<br>` to newline, and trim of every line. Applying it
/// to text that is already clean returns the same text.
pub fn clean_text(text: &str) -> String {
    let decoded = decode_entities(text);
    decoded
        .replace(LINE_BREAK_MARKER, "\n")
        .split('\n')
        .map(trim_space)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_tag_spanning_lines_is_stripped() {
        let text = "<A HREF=\"../test/read.cgi/x/1/2\" target=\"_blank\">&gt;&gt;2\n</A> ok";
        assert_eq!(strip_anchor_tags(text), "&gt;&gt;2\n ok");
    }

    #[test]
    fn unterminated_anchor_tag_is_left_alone() {
        let text = "<a href=\"x\">dangling";
        assert_eq!(strip_anchor_tags(text), text);
    }

    #[test]
    fn literal_chevrons_are_not_anchors() {
        assert!(extract_reply_targets(">>12 &gt;>34").is_empty());
    }

    #[test]
    fn fullwidth_anchor_is_collected() {
        assert_eq!(extract_reply_targets("&gt;&gt;１２ です &gt;&gt;3４"), vec![12, 34]);
    }

    #[test]
    fn overflowing_anchor_is_dropped() {
        let targets = extract_reply_targets("&gt;&gt;99999999999999999999999 &gt;&gt;7");
        assert_eq!(targets, vec![7]);
    }
}
