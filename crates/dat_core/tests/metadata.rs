use dat_core::{split_metadata, SplitMetadata};
use pretty_assertions::assert_eq;

fn split(input: &str) -> (String, Option<String>, Option<String>) {
    let SplitMetadata {
        timestamp,
        user_id,
        be_id,
    } = split_metadata(input);
    (timestamp, user_id, be_id)
}

#[test]
fn date_with_id_and_be() {
    assert_eq!(
        split("2023/10/10(火) 12:34:56 ID:abcdefgh12 BE:12345678"),
        (
            "2023/10/10(火) 12:34:56".to_string(),
            Some("abcdefgh12".to_string()),
            Some("12345678".to_string())
        )
    );
}

#[test]
fn date_with_be_only() {
    assert_eq!(
        split("2023/10/10(火) 12:34:56 BE:12345678"),
        (
            "2023/10/10(火) 12:34:56".to_string(),
            None,
            Some("12345678".to_string())
        )
    );
}

#[test]
fn date_only() {
    assert_eq!(
        split("2023/10/10(火) 12:34:56"),
        ("2023/10/10(火) 12:34:56".to_string(), None, None)
    );
}

#[test]
fn date_with_id_only_is_trimmed() {
    assert_eq!(
        split("  2023/10/10(火) 12:34:56.78 ID:Ab/cD+eF0   "),
        (
            "2023/10/10(火) 12:34:56.78".to_string(),
            Some("Ab/cD+eF0".to_string()),
            None
        )
    );
}

#[test]
fn be_field_keeps_rank_suffix_verbatim() {
    let (_, user_id, be_id) = split("2009/01/01 00:00:00 ID:xyz BE:123456789-2BP(1000)");
    assert_eq!(user_id.as_deref(), Some("xyz"));
    assert_eq!(be_id.as_deref(), Some("123456789-2BP(1000)"));
}

#[test]
fn free_text_timestamp_is_carried_through() {
    assert_eq!(split("Over 1000 Thread"), ("Over 1000 Thread".to_string(), None, None));
}
