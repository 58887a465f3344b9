use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use dat_core::{parse_lines_with_report, ParseOptions, ParseReport};
use dat_logging::{dat_info, dat_warn};

use crate::decode::{decode_dat, split_lines, DecodeError};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedThread {
    pub report: ParseReport,
    pub encoding_label: String,
    pub had_replacements: bool,
    pub line_count: usize,
}

/// Read, decode and parse a dat file.
pub fn load_thread(
    path: &Path,
    encoding_label: Option<&str>,
    options: &ParseOptions,
) -> Result<LoadedThread, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_dat_bytes(&bytes, encoding_label, options)
}

/// Decode and parse dat bytes that are already in memory.
pub fn parse_dat_bytes(
    bytes: &[u8],
    encoding_label: Option<&str>,
    options: &ParseOptions,
) -> Result<LoadedThread, LoadError> {
    let decoded = decode_dat(bytes, encoding_label)?;
    if decoded.had_replacements {
        dat_warn!(
            "input is not valid {}; invalid bytes were replaced",
            decoded.encoding_label
        );
    }

    let lines = split_lines(&decoded.text);
    let report = parse_lines_with_report(&lines, options);
    dat_info!(
        "loaded {} posts ({} lines, {})",
        report.records().len(),
        lines.len(),
        decoded.encoding_label
    );

    Ok(LoadedThread {
        line_count: lines.len(),
        report,
        encoding_label: decoded.encoding_label,
        had_replacements: decoded.had_replacements,
    })
}
