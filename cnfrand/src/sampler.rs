//! Random subsets of the blocking clauses that follow a marker comment.
//!
//! A CNF file handed to the sampler consists of a block of regular lines, a single comment
//! containing the marker (by default `matchings`) and a tail of blocking clauses. Every
//! trial keeps the regular block and the marker as they are and replaces the tail with a
//! random subset of it.

use crate::{Error, Result};
use cnfrand_cnf::{Header, RawCnf};
use log::{debug, warn};
use rand::{seq::SliceRandom, Rng};

/// The substring identifying the comment that separates the blocking clauses.
pub const DEFAULT_MARKER: &str = "matchings";

/// Parameters of a sampling run.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SampleConfig {
    /// The fraction of blocking clauses each trial keeps.
    pub probability: f64,
    /// The number of trials to produce.
    pub trials: usize,
}

impl SampleConfig {
    pub fn validate(&self) -> Result<()> {
        validate_probability(self.probability)?;

        if self.trials == 0 {
            return Err(Error::Config("the number of trials has to be at least 1".into()));
        }

        Ok(())
    }
}

fn validate_probability(probability: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(Error::Config(format!(
            "the sampling probability has to be between 0 and 1, got {probability}"
        )));
    }

    Ok(())
}

/// A document cut at its marker comment.
///
/// Every line is kept as the text it was read as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSplit {
    pub header: Header,
    /// Every body line before the marker, always kept.
    pub prefix_lines: Vec<String>,
    pub marker_comment: String,
    /// Every body line after the marker, the population to sample from.
    pub tail_clauses: Vec<String>,
}

impl BlockSplit {
    /// Splits the document at the first comment containing `marker`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Structural`] if no comment contains the marker.
    pub fn locate(document: RawCnf, marker: &str) -> Result<Self> {
        let mut markers = document
            .lines
            .iter()
            .enumerate()
            .filter(|(_, line)| RawCnf::is_marker(line, marker))
            .map(|(index, _)| index);

        let index = markers.next().ok_or_else(|| Error::Structural {
            marker: marker.to_string(),
        })?;

        let further = markers.count();
        if further > 0 {
            warn!("Found {further} more comments containing \"{marker}\", splitting at the first one.");
        }

        let RawCnf { header, mut lines } = document;
        let tail_clauses = lines.split_off(index + 1);
        let marker_comment = lines.pop().ok_or_else(|| Error::Structural {
            marker: marker.to_string(),
        })?;

        Ok(Self {
            header,
            prefix_lines: lines,
            marker_comment,
            tail_clauses,
        })
    }
}

/// Draws trials from a [`BlockSplit`].
///
/// The population is shuffled in place for each trial, so the order left behind by one
/// trial is the starting point of the next.
#[derive(Debug, Clone)]
pub struct BlockingSampler {
    split: BlockSplit,
    kept: usize,
}

impl BlockingSampler {
    pub fn new(split: BlockSplit, probability: f64) -> Result<Self> {
        validate_probability(probability)?;

        let kept = (split.tail_clauses.len() as f64 * probability).floor() as usize;
        debug!(
            "Keeping {kept} of {} blocking clauses per trial.",
            split.tail_clauses.len()
        );

        Ok(Self { split, kept })
    }

    /// How many blocking clauses each trial keeps.
    pub fn kept(&self) -> usize {
        self.kept
    }

    /// How many blocking clauses each trial drops.
    pub fn removed(&self) -> usize {
        self.split.tail_clauses.len() - self.kept
    }

    /// The header every trial is written with.
    pub fn trial_header(&self) -> Header {
        let header = self.split.header;
        let removed = self.removed();

        if header.num_clauses < removed {
            warn!(
                "The header declares {} clauses, fewer than the {removed} dropped ones.",
                header.num_clauses
            );
        }

        Header {
            num_variables: header.num_variables,
            num_clauses: header.num_clauses.saturating_sub(removed),
        }
    }

    /// Produces the next trial.
    pub fn next_trial(&mut self, rng: &mut impl Rng) -> RawCnf {
        self.split.tail_clauses.shuffle(rng);

        let mut lines = Vec::with_capacity(self.split.prefix_lines.len() + 1 + self.kept);
        lines.extend(self.split.prefix_lines.iter().cloned());
        lines.push(self.split.marker_comment.clone());
        lines.extend(self.split.tail_clauses[..self.kept].iter().cloned());

        RawCnf::new(self.trial_header(), lines)
    }

    /// Turns the sampler into an iterator over `trials` trials, drawn one after the other
    /// from `rng` as the iterator advances.
    pub fn into_trials<R: Rng>(self, rng: &mut R, trials: usize) -> Trials<'_, R> {
        Trials {
            sampler: self,
            rng,
            remaining: trials,
        }
    }
}

/// The trials of a [`BlockingSampler`]. Only the trial last returned is held in memory.
#[derive(Debug)]
pub struct Trials<'a, R> {
    sampler: BlockingSampler,
    rng: &'a mut R,
    remaining: usize,
}

impl<R: Rng> Iterator for Trials<'_, R> {
    type Item = RawCnf;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.sampler.next_trial(&mut *self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Rng> ExactSizeIterator for Trials<'_, R> {}

/// Validates the configuration and splits the document at `marker`.
///
/// The returned iterator draws the trials lazily, each one is meant to be written before
/// the next is drawn.
pub fn sample<'a, R: Rng>(
    document: RawCnf,
    config: &SampleConfig,
    marker: &str,
    rng: &'a mut R,
) -> Result<Trials<'a, R>> {
    config.validate()?;
    crate::parser::require_body(&document.lines)?;

    let split = BlockSplit::locate(document, marker)?;
    let sampler = BlockingSampler::new(split, config.probability)?;

    Ok(sampler.into_trials(rng, config.trials))
}
