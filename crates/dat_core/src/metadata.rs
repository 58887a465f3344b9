//! Splitting of the composite date field.
//!
//! The field has the shape `DATETIME [" ID:" USERID] [" BE:" BEID]`. It is
//! decomposed by literal substring search, ID marker first, so the result
//! for odd inputs (a marker inside a value, BE before ID) is fixed by the
//! search order rather than by a grammar.

use crate::text::trim_space;

const ID_MARKER: &str = " ID:";
const BE_MARKER: &str = " BE:";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SplitMetadata {
    pub timestamp: String,
    pub user_id: Option<String>,
    pub be_id: Option<String>,
}

impl SplitMetadata {
    fn new(timestamp: &str, user_id: Option<&str>, be_id: Option<&str>) -> Self {
        Self {
            timestamp: trim_space(timestamp).to_string(),
            user_id: user_id.map(|id| trim_space(id).to_string()),
            be_id: be_id.map(|id| trim_space(id).to_string()),
        }
    }
}

pub fn split_metadata(composite: &str) -> SplitMetadata {
    if let Some((datetime, rest)) = composite.split_once(ID_MARKER) {
        return match rest.split_once(BE_MARKER) {
            Some((user_id, be_id)) => SplitMetadata::new(datetime, Some(user_id), Some(be_id)),
            None => SplitMetadata::new(datetime, Some(rest), None),
        };
    }

    match composite.split_once(BE_MARKER) {
        Some((datetime, be_id)) => SplitMetadata::new(datetime, None, Some(be_id)),
        None => SplitMetadata::new(composite, None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn be_before_id_stays_in_timestamp() {
        let split = split_metadata("2023/10/10 BE:111 ID:abc");
        assert_eq!(split.timestamp, "2023/10/10 BE:111");
        assert_eq!(split.user_id.as_deref(), Some("abc"));
        assert_eq!(split.be_id, None);
    }

    #[test]
    fn only_first_be_marker_splits() {
        let split = split_metadata("t ID:x BE:1 BE:2");
        assert_eq!(split.user_id.as_deref(), Some("x"));
        assert_eq!(split.be_id.as_deref(), Some("1 BE:2"));
    }

    #[test]
    fn marker_without_value_gives_empty_id() {
        let split = split_metadata("t ID:");
        assert_eq!(split.timestamp, "t");
        assert_eq!(split.user_id.as_deref(), Some(""));
    }

    #[test]
    fn separator_controls_are_trimmed() {
        let split = split_metadata("t\u{1f} ID:abc\u{1c}");
        assert_eq!(split.timestamp, "t");
        assert_eq!(split.user_id.as_deref(), Some("abc"));
    }

    #[test]
    fn marker_needs_leading_space() {
        let split = split_metadata("tID:abc");
        assert_eq!(split.timestamp, "tID:abc");
        assert_eq!(split.user_id, None);
    }
}
