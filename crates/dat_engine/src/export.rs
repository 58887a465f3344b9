use std::path::{Path, PathBuf};

use dat_core::PostRecord;
use dat_logging::dat_info;
use serde_json::{json, Value};

use crate::persist::{AtomicFileWriter, PersistError};

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub filename: String,
    pub pretty: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            filename: "thread.json".to_string(),
            pretty: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// JSON view of a thread. Each post carries its 1-based `number`, which the
/// records themselves do not store.
pub fn build_json_export(records: &[PostRecord]) -> Value {
    let title = records.first().and_then(PostRecord::title);
    let posts: Vec<Value> = records
        .iter()
        .enumerate()
        .map(|(idx, post)| {
            json!({
                "number": idx + 1,
                "name": post.name(),
                "email": post.email(),
                "timestamp": post.timestamp(),
                "user_id": post.user_id(),
                "be_id": post.be_id(),
                "title": post.title(),
                "body": post.body(),
                "reply_targets": post.reply_targets(),
            })
        })
        .collect();

    json!({
        "title": title,
        "post_count": records.len(),
        "posts": posts,
    })
}

pub fn write_json_export(
    output_dir: &Path,
    records: &[PostRecord],
    options: &ExportOptions,
) -> Result<PathBuf, ExportError> {
    let value = build_json_export(records);
    let content = if options.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };

    let writer = AtomicFileWriter::new(output_dir);
    let path = writer.write(&options.filename, content.as_bytes())?;
    dat_info!("exported {} posts to {:?}", records.len(), path);
    Ok(path)
}
