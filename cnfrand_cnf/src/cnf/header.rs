use std::fmt::{Display, Formatter};

/// The problem line of a DIMACS CNF file, `p cnf <variables> <clauses>`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Header {
    pub num_variables: usize,
    pub num_clauses: usize,
}

impl Display for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "p cnf {} {}", self.num_variables, self.num_clauses)
    }
}

#[cfg(test)]
mod test {
    use super::Header;

    #[test]
    fn display_header() {
        let header = Header {
            num_variables: 12,
            num_clauses: 40,
        };

        assert_eq!(header.to_string(), "p cnf 12 40");
    }
}
