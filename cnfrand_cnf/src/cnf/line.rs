use super::Literal;
use std::fmt::{Display, Formatter};

/// A single body line of a DIMACS CNF file.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Line {
    /// A line starting with `c`. The text is kept as is, including the leading `c`.
    Comment(String),
    /// The tokens of a clause line in reading order.
    /// The terminating `0` is kept as a token, just like any interior zero.
    Clause(Vec<Literal>),
}

impl Line {
    pub fn is_comment(&self) -> bool {
        matches!(self, Line::Comment(_))
    }

    pub fn is_clause(&self) -> bool {
        matches!(self, Line::Clause(_))
    }

    /// Whether this is a clause whose last token is the `0` sentinel.
    pub fn is_terminated(&self) -> bool {
        match self {
            Line::Clause(tokens) => tokens.last() == Some(&0),
            Line::Comment(_) => false,
        }
    }

    /// The nonzero tokens of a clause. Empty for comments.
    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        let tokens: &[Literal] = match self {
            Line::Clause(tokens) => tokens,
            Line::Comment(_) => &[],
        };

        tokens.iter().copied().filter(|&literal| literal != 0)
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Comment(text) => write!(f, "{text}"),
            Line::Clause(tokens) => {
                tokens.iter().enumerate().try_for_each(|(index, token)| {
                    if index > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{token}")
                })
            }
        }
    }
}
