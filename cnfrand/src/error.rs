//! The error taxonomy shared by the parser, the sampler and the transformer.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The input path could not be opened or read.
    #[error("unable to read {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input path names a directory instead of a CNF file.
    #[error("{} is a directory, expected a CNF file", .0.display())]
    IsDirectory(PathBuf),

    /// The input holds no lines at all, or no body lines where a body is required.
    #[error("the supplied CNF input is empty")]
    EmptyInput,

    /// A line does not follow the DIMACS CNF convention.
    #[error("line {line}: {message}")]
    Format { line: usize, message: String },

    /// A configuration value lies outside its valid range.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The blocking marker comment is missing.
    #[error("no comment line containing \"{marker}\" separates the blocking clauses")]
    Structural { marker: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn messages() {
        let format = Error::Format {
            line: 1,
            message: "expected a `p cnf <variables> <clauses>` header".into(),
        };
        assert_eq!(
            format.to_string(),
            "line 1: expected a `p cnf <variables> <clauses>` header"
        );

        let structural = Error::Structural {
            marker: "matchings".into(),
        };
        assert!(structural.to_string().contains("\"matchings\""));
    }
}
