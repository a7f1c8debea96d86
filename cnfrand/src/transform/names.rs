use cnfrand_cnf::{CnfDocument, Line, Literal, Variable};
use rand::{seq::SliceRandom, Rng};
use std::collections::HashMap;

/// A random bijection of the variables observed in a document onto themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiteralPermutation {
    mapping: HashMap<Variable, Variable>,
}

impl LiteralPermutation {
    /// Maps the variables, given in order of first appearance, onto a shuffled copy of
    /// themselves.
    pub fn random(variables: Vec<Variable>, rng: &mut impl Rng) -> Self {
        let mut targets = variables.clone();
        targets.shuffle(rng);

        Self {
            mapping: variables.into_iter().zip(targets).collect(),
        }
    }

    pub fn get(&self, variable: Variable) -> Option<Variable> {
        self.mapping.get(&variable).copied()
    }

    /// Renames the variable of a literal and keeps its sign.
    /// Zeros and variables outside the mapping are returned unchanged.
    pub fn apply(&self, literal: Literal) -> Literal {
        if literal == 0 {
            return 0;
        }

        let target = self
            .get(literal.unsigned_abs())
            .unwrap_or(literal.unsigned_abs()) as Literal;

        if literal < 0 {
            -target
        } else {
            target
        }
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Variable, Variable)> + '_ {
        self.mapping.iter().map(|(&from, &to)| (from, to))
    }
}

/// Renames every variable of the document according to a fresh random permutation of the
/// observed variables. Literal order and signs are left as they are.
pub fn permute_variables(document: &mut CnfDocument, rng: &mut impl Rng) -> LiteralPermutation {
    let permutation = LiteralPermutation::random(document.variables(), rng);

    for line in document.lines.iter_mut() {
        if let Line::Clause(tokens) = line {
            tokens
                .iter_mut()
                .for_each(|token| *token = permutation.apply(*token));
        }
    }

    permutation
}
