use crate::record::DELETED_SENTINEL;

/// Separator between the fields of a dat line.
pub const FIELD_DELIMITER: &str = "<>";

/// Minimum number of fields a line needs to become a post.
pub const MIN_FIELDS: usize = 4;

/// Fields of one dat line, borrowed from the line itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFields<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub composite_date: &'a str,
    pub raw_body: &'a str,
    pub title: Option<&'a str>,
}

impl RawFields<'_> {
    /// True when the four core fields all carry the deleted-post sentinel.
    pub fn is_deleted(&self) -> bool {
        [self.name, self.email, self.composite_date, self.raw_body]
            .iter()
            .all(|field| *field == DELETED_SENTINEL)
    }
}

/// Outcome of splitting a line on [`FIELD_DELIMITER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tokenized<'a> {
    Fields(RawFields<'a>),
    /// Fewer than [`MIN_FIELDS`] fields; the line carries no post.
    Malformed { field_count: usize },
}

/// Splits a line into its fields. Fields past the title are ignored.
pub fn split_fields(line: &str) -> Tokenized<'_> {
    let parts: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if parts.len() < MIN_FIELDS {
        return Tokenized::Malformed {
            field_count: parts.len(),
        };
    }
    Tokenized::Fields(RawFields {
        name: parts[0],
        email: parts[1],
        composite_date: parts[2],
        raw_body: parts[3],
        title: parts.get(4).copied(),
    })
}

/// Convenience wrapper over [`split_fields`] for callers that do not care
/// why a line was rejected.
pub fn tokenize_line(line: &str) -> Option<RawFields<'_>> {
    match split_fields(line) {
        Tokenized::Fields(fields) => Some(fields),
        Tokenized::Malformed { .. } => None,
    }
}
