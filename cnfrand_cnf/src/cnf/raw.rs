use super::Header;
use std::fmt::{Display, Formatter};

/// A DIMACS CNF file whose body lines are kept as text.
///
/// Only the header is interpreted. Body lines are written back exactly as they were read,
/// so spacing and lines that are neither comments nor clauses (e.g. the `%` trailer of
/// SATLIB instances) survive unchanged.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct RawCnf {
    pub header: Header,
    pub lines: Vec<String>,
}

impl RawCnf {
    pub fn new(header: Header, lines: Vec<String>) -> Self {
        Self { header, lines }
    }

    /// Whether `line` is a comment containing `marker`.
    pub fn is_marker(line: &str, marker: &str) -> bool {
        line.trim_start().starts_with('c') && line.contains(marker)
    }
}

impl Display for RawCnf {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.header)?;

        self.lines
            .iter()
            .try_for_each(|line| write!(f, "\n{line}"))
    }
}
