mod cnf;

pub use cnf::*;
