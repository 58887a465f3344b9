/// What to do with a line that has fewer than four fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedLinePolicy {
    /// Drop the line without a trace in the log.
    #[default]
    Skip,
    /// Drop the line and log a warning naming it.
    Warn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub malformed_lines: MalformedLinePolicy,
    /// Parse lines on the rayon pool. Output order is unaffected.
    pub parallel: bool,
}

impl ParseOptions {
    pub fn with_policy(mut self, policy: MalformedLinePolicy) -> Self {
        self.malformed_lines = policy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
