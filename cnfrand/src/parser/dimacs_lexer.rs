use cnfrand_cnf::Literal;
use nom::{
    bytes::complete::tag,
    character::complete::{char, digit1, space1},
    combinator::{all_consuming, map, map_res, opt, recognize, value, verify},
    multi::separated_list1,
    sequence::{pair, preceded, separated_pair},
    IResult, Parser,
};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A classification for the different kinds of lines a CNF file contains
pub enum DimacsToken {
    /// The head of a CNF file of the format p cnf #VARIABLES #CLAUSES
    Header {
        num_variables: usize,
        num_clauses: usize,
    },
    /// A comment in the CNF. It starts with a 'c'
    Comment,
    /// A clause that consists of a sequence of (signed) numbers, zeros included
    Clause { tokens: Vec<Literal> },
}

use DimacsToken::*;

/// Lexes a trimmed line and checks whether it is a CNF header, comment or clause.
/// The whole line has to be consumed, trailing garbage makes the lexer fail.
///
/// # Examples
///
/// ```
/// use cnfrand::parser::dimacs_lexer::*;
///
/// assert_eq!(lex_line("c a comment").unwrap().1, DimacsToken::Comment);
/// assert_eq!(
///     lex_line("p cnf 3 2").unwrap().1,
///     DimacsToken::Header { num_variables: 3, num_clauses: 2 }
/// );
/// assert_eq!(
///     lex_line("-1 3 0").unwrap().1,
///     DimacsToken::Clause { tokens: vec![-1, 3, 0] }
/// );
/// assert!(lex_line("% 0").is_err());
/// ```
#[inline]
pub fn lex_line(line: &str) -> IResult<&str, DimacsToken> {
    if line.starts_with('c') {
        return lex_comment(line);
    }

    if line.starts_with('p') {
        return lex_header(line);
    }

    lex_clause(line)
}

// lexes the head of a CNF file of the format p cnf #VARIABLES #CLAUSES
pub fn lex_header(line: &str) -> IResult<&str, DimacsToken> {
    map(
        all_consuming(preceded(
            (char('p'), space1, tag("cnf"), space1),
            separated_pair(unsigned::<usize>, space1, unsigned::<usize>),
        )),
        |(num_variables, num_clauses)| Header {
            num_variables,
            num_clauses,
        },
    )
    .parse(line)
}

// identifies a CNF comment by its leading 'c'
fn lex_comment(line: &str) -> IResult<&str, DimacsToken> {
    value(Comment, char('c')).parse(line)
}

// identifies a CNF clause by finding a sequence of (signed) numbers
fn lex_clause(line: &str) -> IResult<&str, DimacsToken> {
    map(
        all_consuming(separated_list1(space1, literal)),
        |tokens| Clause { tokens },
    )
    .parse(line)
}

/// Parses an unsigned integer.
fn unsigned<I: FromStr>(input: &str) -> IResult<&str, I> {
    map_res(digit1, I::from_str).parse(input)
}

/// Parses a literal. Its magnitude has to fit into a positive [`Literal`], otherwise
/// negating it would overflow.
fn literal(input: &str) -> IResult<&str, Literal> {
    verify(signed::<Literal>, |literal: &Literal| *literal != Literal::MIN).parse(input)
}

/// Parses an integer with an optional leading minus.
fn signed<I: FromStr>(input: &str) -> IResult<&str, I> {
    map_res(recognize(pair(opt(char('-')), digit1)), I::from_str).parse(input)
}
