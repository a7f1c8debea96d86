mod header;
mod line;
mod raw;

pub use header::Header;
pub use line::Line;
pub use raw::RawCnf;

use itertools::Itertools;
use std::fmt::{Display, Formatter};

pub type Variable = usize;
pub type Literal = isize;

/// A DIMACS CNF file held in memory.
///
/// The header is kept exactly as declared by the input. Body lines keep their original
/// order and grouping, comments included.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct CnfDocument {
    pub header: Header,
    pub lines: Vec<Line>,
}

impl CnfDocument {
    pub fn new(header: Header, lines: Vec<Line>) -> Self {
        Self { header, lines }
    }

    /// All clause lines in body order.
    pub fn clauses(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|line| line.is_clause())
    }

    /// All comment lines in body order.
    pub fn comments(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|line| line.is_comment())
    }

    /// The number of clause lines in the body, independent of the header.
    pub fn num_clause_lines(&self) -> usize {
        self.clauses().count()
    }

    /// The distinct variables mentioned in any clause, in order of first appearance.
    pub fn variables(&self) -> Vec<Variable> {
        self.clauses()
            .flat_map(Line::literals)
            .map(|literal| literal.unsigned_abs())
            .unique()
            .collect()
    }
}

impl Display for CnfDocument {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.header)?;

        self.lines
            .iter()
            .try_for_each(|line| write!(f, "\n{line}"))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn example() -> CnfDocument {
        CnfDocument::new(
            Header {
                num_variables: 4,
                num_clauses: 3,
            },
            vec![
                Line::Comment("c first block".into()),
                Line::Clause(vec![3, -1, 0]),
                Line::Clause(vec![-3, 4, 0]),
                Line::Comment("c matchings".into()),
                Line::Clause(vec![1, 2, -4, 0]),
            ],
        )
    }

    #[test]
    fn display_cnf() {
        let expected = r#"p cnf 4 3
c first block
3 -1 0
-3 4 0
c matchings
1 2 -4 0"#;

        assert_eq!(example().to_string(), expected);
    }

    #[test]
    fn display_header_only() {
        let cnf = CnfDocument::new(
            Header {
                num_variables: 0,
                num_clauses: 0,
            },
            Vec::new(),
        );

        assert_eq!(cnf.to_string(), "p cnf 0 0");
    }

    #[test]
    fn variables_in_first_appearance_order() {
        assert_eq!(example().variables(), vec![3, 1, 4, 2]);
    }

    #[test]
    fn counts_ignore_the_header() {
        let mut cnf = example();
        cnf.lines.pop();

        assert_eq!(cnf.header.num_clauses, 3);
        assert_eq!(cnf.num_clause_lines(), 2);
        assert_eq!(cnf.comments().count(), 2);
    }
}
