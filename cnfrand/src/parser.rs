pub mod dimacs_lexer;
pub mod persisting;

use crate::{Error, Result};
use cnfrand_cnf::{CnfDocument, Header, Line, RawCnf};
use dimacs_lexer::{lex_header, lex_line, DimacsToken};
use log::{debug, warn};
use std::{fs, path::Path};

/// Parses the CNF file referenced by the path.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use cnfrand::parser;
///
/// let document = parser::parse_file(Path::new("./tests/data/small.cnf")).unwrap();
/// assert_eq!(document.header.num_variables, 4);
/// ```
///
/// # Errors
///
/// Fails for paths that do not exist, directories and everything [`parse_lines`] rejects.
pub fn parse_file(path: &Path) -> Result<CnfDocument> {
    parse_str(&read_file(path)?)
}

/// Reads the CNF file referenced by the path, keeping its body lines as text.
///
/// # Errors
///
/// Fails for paths that do not exist, directories and everything [`parse_raw_lines`] rejects.
pub fn parse_raw_file(path: &Path) -> Result<RawCnf> {
    parse_raw_str(&read_file(path)?)
}

fn read_file(path: &Path) -> Result<String> {
    if path.is_dir() {
        return Err(Error::IsDirectory(path.to_path_buf()));
    }

    fs::read_to_string(path).map_err(|source| Error::File {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a whole CNF file held in a string.
pub fn parse_str(text: &str) -> Result<CnfDocument> {
    parse_lines(text.lines())
}

/// Reads a whole CNF file held in a string, keeping its body lines as text.
pub fn parse_raw_str(text: &str) -> Result<RawCnf> {
    parse_raw_lines(text.lines())
}

/// Parses the lines of a CNF file.
///
/// The first line has to be the `p cnf <variables> <clauses>` header. Every line is
/// trimmed before it is lexed, blank body lines are skipped.
pub fn parse_lines<I, S>(lines: I) -> Result<CnfDocument>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = lines.into_iter();
    let header = parse_header(lines.next())?;

    let mut body = Vec::new();

    // the header is line 1, the body starts at line 2
    for (number, line) in lines.enumerate().map(|(index, line)| (index + 2, line)) {
        let line = line.as_ref().trim();

        if line.is_empty() {
            debug!("Skipping blank line {number}.");
            continue;
        }

        body.push(match lex_line(line) {
            Ok((_, DimacsToken::Comment)) => Line::Comment(line.to_string()),
            Ok((_, DimacsToken::Clause { tokens })) => Line::Clause(tokens),
            Ok((_, DimacsToken::Header { .. })) => {
                return Err(Error::Format {
                    line: number,
                    message: "a second header is not allowed".into(),
                })
            }
            Err(_) => {
                return Err(Error::Format {
                    line: number,
                    message: format!("\"{line}\" is neither a comment nor a clause"),
                })
            }
        });
    }

    let document = CnfDocument::new(header, body);

    let clause_lines = document.num_clause_lines();
    if clause_lines != header.num_clauses {
        warn!(
            "The header declares {} clauses, but the body contains {clause_lines} clause lines.",
            header.num_clauses
        );
    }

    Ok(document)
}

/// Reads the lines of a CNF file without lexing the body.
///
/// The header is validated like in [`parse_lines`]. Body lines only lose their trailing
/// whitespace, blank ones are skipped. Everything else is kept as it is.
pub fn parse_raw_lines<I, S>(lines: I) -> Result<RawCnf>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = lines.into_iter();
    let header = parse_header(lines.next())?;

    let body: Vec<String> = lines
        .map(|line| line.as_ref().trim_end().to_string())
        .filter(|line| !line.trim_start().is_empty())
        .collect();

    debug!("Read {} body lines.", body.len());
    Ok(RawCnf::new(header, body))
}

fn parse_header<S: AsRef<str>>(first: Option<S>) -> Result<Header> {
    let first = first.ok_or(Error::EmptyInput)?;

    match lex_header(first.as_ref().trim()) {
        Ok((
            _,
            DimacsToken::Header {
                num_variables,
                num_clauses,
            },
        )) => Ok(Header {
            num_variables,
            num_clauses,
        }),
        _ => Err(Error::Format {
            line: 1,
            message: "expected a `p cnf <variables> <clauses>` header".into(),
        }),
    }
}

/// Ensures the document has at least one body line.
pub fn require_body<T>(lines: &[T]) -> Result<()> {
    if lines.is_empty() {
        return Err(Error::EmptyInput);
    }

    Ok(())
}
