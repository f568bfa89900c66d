use crate::errors::ParseError;
use crate::graph::Edge;

/// Token separating master from dependency on an edge-list line.
pub const SEPARATOR: &str = "->";

/// Parser for the `master->dependency` edge-list format.
#[derive(Debug, Default, Clone, Copy)]
pub struct EdgeListParser;

impl EdgeListParser {
    /// Parse one line. `line_no` is 1-based and only used for error context.
    ///
    /// # Errors
    /// `ParseError::MalformedLine` unless the line splits into exactly two tokens,
    /// `ParseError::InvalidEdge` when those tokens are not a valid edge.
    pub fn parse_line(line_no: usize, line: &str) -> Result<Edge, ParseError> {
        let mut tokens = line.split(SEPARATOR);
        let (Some(master), Some(dependency), None) = (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(ParseError::MalformedLine { line_no, line: line.to_string() });
        };
        Edge::new(master, dependency).map_err(|source| ParseError::InvalidEdge {
            line_no,
            line: line.to_string(),
            source,
        })
    }

    /// Parse every line, stopping at the first failure.
    ///
    /// # Errors
    /// Returns the error for the first line that does not parse.
    pub fn parse_lines<I, S>(lines: I) -> Result<Vec<Edge>, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| Self::parse_line(i + 1, line.as_ref()))
            .collect()
    }
}
