use crate::{Error, Result};
use cnfrand_cnf::Line;
use rand::{seq::SliceRandom, Rng};
use rand_distr::{Bernoulli, Distribution};

/// Shuffles the tokens of each clause line with the given probability.
///
/// A trailing `0` stays in place. Comment lines are skipped without a coin flip.
/// Returns the number of clause lines that were shuffled.
pub fn shuffle_literal_order(
    lines: &mut [Line],
    probability: f64,
    rng: &mut impl Rng,
) -> Result<usize> {
    let coin = Bernoulli::new(probability).map_err(|_| {
        Error::Config(format!(
            "the literal order probability has to be between 0 and 1, got {probability}"
        ))
    })?;

    let mut shuffled = 0;

    for line in lines.iter_mut() {
        let terminated = line.is_terminated();

        let Line::Clause(tokens) = line else {
            continue;
        };

        if !coin.sample(rng) {
            continue;
        }

        let end = if terminated {
            tokens.len() - 1
        } else {
            tokens.len()
        };
        tokens[..end].shuffle(rng);
        shuffled += 1;
    }

    Ok(shuffled)
}
