use cnfrand_cnf::Line;
use rand::{seq::SliceRandom, Rng};

/// Uniformly permutes the body lines.
///
/// Comments are part of the population, so they end up at random positions as well.
pub fn shuffle_lines(lines: &mut [Line], rng: &mut impl Rng) {
    lines.shuffle(rng);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::util::rng;

    #[test]
    fn keeps_every_line() {
        let original: Vec<Line> = (1..=20)
            .map(|variable| Line::Clause(vec![variable, -(variable + 1), 0]))
            .chain([Line::Comment("c somewhere".into())])
            .collect();

        let mut shuffled = original.clone();
        shuffle_lines(&mut shuffled, &mut rng(Some(5), || 0));

        assert_ne!(shuffled, original);

        let mut sorted = shuffled.clone();
        sorted.sort_by_key(|line| line.to_string());
        let mut expected = original.clone();
        expected.sort_by_key(|line| line.to_string());
        assert_eq!(sorted, expected);
    }
}
