use serde::{Deserialize, Serialize};

/// Literal that replaces every core field of a deleted post.
pub const DELETED_SENTINEL: &str = "あぼーん";

/// One structured post, derived from a single dat line.
///
/// The post number is not stored: it is the 1-based position of the record
/// in the sequence returned by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    name: String,
    email: String,
    timestamp: String,
    user_id: Option<String>,
    be_id: Option<String>,
    body: String,
    title: Option<String>,
    reply_targets: Vec<u64>,
}

/// Owned parts of a regular (non-deleted) post, handed to [`PostRecord::new`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostParts {
    pub name: String,
    pub email: String,
    pub timestamp: String,
    pub user_id: Option<String>,
    pub be_id: Option<String>,
    pub body: String,
    pub title: Option<String>,
    pub reply_targets: Vec<u64>,
}

impl PostRecord {
    pub fn new(parts: PostParts) -> Self {
        Self {
            name: parts.name,
            email: parts.email,
            timestamp: parts.timestamp,
            user_id: parts.user_id,
            be_id: parts.be_id,
            body: parts.body,
            title: parts.title,
            reply_targets: parts.reply_targets,
        }
    }

    /// Record for a deleted post. A title equal to the sentinel is dropped.
    pub fn deleted(title: Option<&str>) -> Self {
        Self {
            name: DELETED_SENTINEL.to_string(),
            email: DELETED_SENTINEL.to_string(),
            timestamp: DELETED_SENTINEL.to_string(),
            user_id: None,
            be_id: None,
            body: String::new(),
            title: title
                .filter(|t| *t != DELETED_SENTINEL)
                .map(str::to_string),
            reply_targets: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn be_id(&self) -> Option<&str> {
        self.be_id.as_deref()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Post numbers referenced by `>>N` anchors, in order, duplicates kept.
    /// They are not checked against the thread length.
    pub fn reply_targets(&self) -> &[u64] {
        &self.reply_targets
    }

    /// True when this record stands in for a deleted post.
    pub fn is_deleted(&self) -> bool {
        self.name == DELETED_SENTINEL
            && self.email == DELETED_SENTINEL
            && self.timestamp == DELETED_SENTINEL
            && self.body.is_empty()
    }
}
