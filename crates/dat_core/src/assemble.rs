use dat_logging::{dat_debug, dat_trace, dat_warn};
use rayon::prelude::*;

use crate::body::sanitize_body;
use crate::metadata::split_metadata;
use crate::options::{MalformedLinePolicy, ParseOptions};
use crate::record::{PostParts, PostRecord};
use crate::tokenize::{split_fields, RawFields, Tokenized};

/// A line that produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedLine {
    /// 0-based index of the line in the input.
    pub line_index: usize,
    pub field_count: usize,
}

/// Parsed thread plus the lines that were left out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseReport {
    records: Vec<PostRecord>,
    skipped: Vec<SkippedLine>,
}

impl ParseReport {
    pub fn records(&self) -> &[PostRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<PostRecord> {
        self.records
    }

    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    /// Record for a 1-based post number.
    pub fn post(&self, number: usize) -> Option<&PostRecord> {
        number.checked_sub(1).and_then(|idx| self.records.get(idx))
    }
}

enum LineOutcome {
    Record(PostRecord),
    Skipped(SkippedLine),
}

/// Parses a single line. Returns `None` for a line with too few fields.
pub fn parse_line(line: &str) -> Option<PostRecord> {
    match split_fields(line) {
        Tokenized::Fields(fields) => Some(assemble(fields)),
        Tokenized::Malformed { .. } => None,
    }
}

pub fn parse_lines<S>(lines: &[S], options: &ParseOptions) -> Vec<PostRecord>
where
    S: AsRef<str> + Sync,
{
    parse_lines_with_report(lines, options).into_records()
}

/// Parses every line, keeping input order. The position of a record in
/// the result is its post number minus one.
pub fn parse_lines_with_report<S>(lines: &[S], options: &ParseOptions) -> ParseReport
where
    S: AsRef<str> + Sync,
{
    let outcomes: Vec<LineOutcome> = if options.parallel {
        lines
            .par_iter()
            .enumerate()
            .map(|(idx, line)| parse_indexed(idx, line.as_ref()))
            .collect()
    } else {
        lines
            .iter()
            .enumerate()
            .map(|(idx, line)| parse_indexed(idx, line.as_ref()))
            .collect()
    };

    let mut report = ParseReport::default();
    for outcome in outcomes {
        match outcome {
            LineOutcome::Record(record) => report.records.push(record),
            LineOutcome::Skipped(skipped) => {
                if options.malformed_lines == MalformedLinePolicy::Warn {
                    dat_warn!(
                        "skipping line {}: expected at least 4 fields, found {}",
                        skipped.line_index + 1,
                        skipped.field_count
                    );
                }
                report.skipped.push(skipped);
            }
        }
    }

    dat_debug!(
        "parsed {} posts from {} lines ({} skipped)",
        report.records.len(),
        lines.len(),
        report.skipped.len()
    );
    report
}

fn parse_indexed(line_index: usize, line: &str) -> LineOutcome {
    match split_fields(line) {
        Tokenized::Fields(fields) => LineOutcome::Record(assemble(fields)),
        Tokenized::Malformed { field_count } => LineOutcome::Skipped(SkippedLine {
            line_index,
            field_count,
        }),
    }
}

fn assemble(fields: RawFields<'_>) -> PostRecord {
    if fields.is_deleted() {
        dat_trace!("deleted post sentinel");
        return PostRecord::deleted(fields.title);
    }

    let metadata = split_metadata(fields.composite_date);
    let body = sanitize_body(fields.raw_body);

    PostRecord::new(PostParts {
        name: fields.name.to_string(),
        email: fields.email.to_string(),
        timestamp: metadata.timestamp,
        user_id: metadata.user_id,
        be_id: metadata.be_id,
        body: body.body,
        title: fields.title.map(str::to_string),
        reply_targets: body.reply_targets,
    })
}
