use crate::{Error, Result};
use cnfrand_cnf::{Line, Literal};
use rand::Rng;
use rand_distr::{Bernoulli, Distribution};
use std::collections::HashMap;

/// Memoized flip decisions, one per distinct literal.
///
/// The key is the signed literal, so `3` and `-3` are decided independently of each other.
/// Flipping both is therefore possible, as is flipping only one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignFlipTable {
    decisions: HashMap<Literal, bool>,
}

impl SignFlipTable {
    /// Returns the decision for `literal`, tossing the coin on its first occurrence.
    pub fn decide(&mut self, literal: Literal, coin: &Bernoulli, rng: &mut impl Rng) -> bool {
        *self
            .decisions
            .entry(literal)
            .or_insert_with(|| coin.sample(rng))
    }

    /// The decision taken for `literal`, if it was encountered.
    pub fn is_flipped(&self, literal: Literal) -> Option<bool> {
        self.decisions.get(&literal).copied()
    }

    /// The number of distinct literals that were decided.
    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }
}

/// Negates literals, deciding per distinct literal with the given probability.
///
/// Literals are visited in reading order, comments and zeros are left alone.
pub fn flip_signs(
    lines: &mut [Line],
    probability: f64,
    rng: &mut impl Rng,
) -> Result<SignFlipTable> {
    let coin = Bernoulli::new(probability).map_err(|_| {
        Error::Config(format!(
            "the sign flip probability has to be between 0 and 1, got {probability}"
        ))
    })?;

    let mut table = SignFlipTable::default();

    for line in lines.iter_mut() {
        let Line::Clause(tokens) = line else {
            continue;
        };

        for token in tokens.iter_mut().filter(|token| **token != 0) {
            if table.decide(*token, &coin, rng) {
                *token = -*token;
            }
        }
    }

    Ok(table)
}
