use thiserror::Error;

/// A line that does not match any known record grammar.
///
/// The message is always `invalid record: <line>` with the line exactly as it
/// was handed to the parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid record: {line}")]
pub struct InvalidRecord {
    line: String,
}

impl InvalidRecord {
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }

    /// The offending line.
    pub fn line(&self) -> &str {
        &self.line
    }
}
