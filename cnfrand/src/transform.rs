//! Randomized structural rewrites of a CNF document.
//!
//! The stages run in a fixed order: clause order, literal order inside clauses, variable
//! names and finally signs. Every stage draws from the same generator, so a seed
//! determines the complete output. None of the stages changes the number of clauses or
//! variables, the header is written back unchanged.

mod clauses;
mod literal_order;
mod names;
mod signs;

pub use clauses::shuffle_lines;
pub use literal_order::shuffle_literal_order;
pub use names::{permute_variables, LiteralPermutation};
pub use signs::{flip_signs, SignFlipTable};

use crate::{Error, Result};
use cnfrand_cnf::CnfDocument;
use log::debug;
use rand::Rng;

/// Which stages run, and with which probabilities.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TransformConfig {
    /// Shuffle the order of all body lines.
    pub clauses: bool,
    /// Permute the variable names.
    pub names: bool,
    /// Shuffle the literals of each clause with this probability, in `(0, 1]`.
    pub literal_order: Option<f64>,
    /// Flip each distinct literal with this probability, in `[0, 1]`.
    pub signs: Option<f64>,
}

impl TransformConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(probability) = self.literal_order {
            if !(probability > 0.0 && probability <= 1.0) {
                return Err(Error::Config(format!(
                    "the literal order probability has to be in (0, 1], got {probability}"
                )));
            }
        }

        if let Some(probability) = self.signs {
            if !(0.0..=1.0).contains(&probability) {
                return Err(Error::Config(format!(
                    "the sign flip probability has to be in [0, 1], got {probability}"
                )));
            }
        }

        Ok(())
    }
}

/// What the randomized stages decided during one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    /// The number of clause lines whose literals were shuffled.
    pub shuffled_clauses: usize,
    pub permutation: Option<LiteralPermutation>,
    pub sign_flips: Option<SignFlipTable>,
}

/// Applies the configured stages to documents.
#[derive(Debug, Copy, Clone)]
pub struct Transformer {
    config: TransformConfig,
}

impl Transformer {
    pub fn new(config: TransformConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Runs every enabled stage on the document in place.
    pub fn apply(&self, document: &mut CnfDocument, rng: &mut impl Rng) -> Result<Transcript> {
        let mut transcript = Transcript::default();

        if self.config.clauses {
            debug!("Shuffling the order of {} lines.", document.lines.len());
            shuffle_lines(&mut document.lines, rng);
        }

        if let Some(probability) = self.config.literal_order {
            transcript.shuffled_clauses =
                shuffle_literal_order(&mut document.lines, probability, rng)?;
            debug!(
                "Shuffled the literals of {} clauses.",
                transcript.shuffled_clauses
            );
        }

        if self.config.names {
            let permutation = permute_variables(document, rng);
            debug!("Permuted the names of {} variables.", permutation.len());
            transcript.permutation = Some(permutation);
        }

        if let Some(probability) = self.config.signs {
            let table = flip_signs(&mut document.lines, probability, rng)?;
            debug!("Decided the signs of {} distinct literals.", table.len());
            transcript.sign_flips = Some(table);
        }

        Ok(transcript)
    }
}
