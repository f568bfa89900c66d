use std::path::PathBuf;
use thiserror::Error;

/// Rejected edge arguments at the graph boundary.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("both vertices must be defined")]
    MissingVertex,
    #[error("node cannot depend on itself")]
    SelfDependency,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed edge line {line_no}: {line:?}")]
    MalformedLine { line_no: usize, line: String },
    #[error("invalid edge on line {line_no} ({line:?}): {source}")]
    InvalidEdge { line_no: usize, line: String, source: FormatError },
}

impl ParseError {
    /// 1-based number of the offending line.
    #[must_use]
    pub fn line_no(&self) -> usize {
        match self {
            Self::MalformedLine { line_no, .. } | Self::InvalidEdge { line_no, .. } => *line_no,
        }
    }
}

#[derive(Debug, Error)]
pub enum DepMapError {
    #[error("Parse error in file {file}: {source}")]
    Parse { file: PathBuf, source: ParseError },

    #[error("IO error on {file}: {source}")]
    Io { file: PathBuf, source: std::io::Error },
}
