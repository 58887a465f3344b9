//! Dat core: pure parsing of `<>`-delimited post-log lines into post records.
mod assemble;
mod body;
mod entity;
mod metadata;
mod options;
mod record;
mod text;
mod tokenize;

pub use assemble::{parse_line, parse_lines, parse_lines_with_report, ParseReport, SkippedLine};
pub use body::{
    clean_text, extract_reply_targets, sanitize_body, strip_anchor_tags, SanitizedBody,
    LINE_BREAK_MARKER,
};
pub use entity::decode_entities;
pub use metadata::{split_metadata, SplitMetadata};
pub use options::{MalformedLinePolicy, ParseOptions};
pub use record::{PostParts, PostRecord, DELETED_SENTINEL};
pub use tokenize::{split_fields, tokenize_line, RawFields, Tokenized, FIELD_DELIMITER, MIN_FIELDS};
