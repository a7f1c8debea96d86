use cnfrand::parser::{self, persisting::write_document};
use cnfrand::transform::{flip_signs, permute_variables};
use cnfrand::{util, Line, TransformConfig, Transformer};
use std::collections::{HashMap, HashSet};
use std::path::Path;

fn blocking() -> cnfrand::CnfDocument {
    parser::parse_file(Path::new("./tests/data/blocking.cnf")).unwrap()
}

fn serialize(document: &cnfrand::CnfDocument) -> String {
    let mut output = Vec::new();
    write_document(document, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn zero_sign_probability_is_identity() {
    let original = blocking();
    let mut document = original.clone();

    Transformer::new(TransformConfig {
        signs: Some(0.0),
        ..Default::default()
    })
    .unwrap()
    .apply(&mut document, &mut util::rng(Some(6), util::entropy_seed))
    .unwrap();

    assert_eq!(serialize(&document), serialize(&original));
}

#[test]
fn full_pipeline_keeps_the_multiset_of_line_shapes() {
    let original = blocking();

    for seed in 0..20 {
        let mut document = original.clone();
        Transformer::new(TransformConfig {
            clauses: true,
            names: true,
            literal_order: Some(0.5),
            signs: Some(0.5),
        })
        .unwrap()
        .apply(&mut document, &mut util::rng(Some(seed), util::entropy_seed))
        .unwrap();

        assert_eq!(document.header, original.header);

        let shapes = |document: &cnfrand::CnfDocument| {
            let mut shapes: Vec<(bool, usize)> = document
                .lines
                .iter()
                .map(|line| match line {
                    Line::Comment(_) => (false, 0),
                    Line::Clause(tokens) => (line.is_terminated(), tokens.len()),
                })
                .collect();
            shapes.sort_unstable();
            shapes
        };
        assert_eq!(shapes(&document), shapes(&original));

        let comments: HashSet<&Line> = document.comments().collect();
        assert_eq!(comments, original.comments().collect::<HashSet<_>>());
    }
}

#[test]
fn renaming_is_a_bijection_on_the_observed_variables() {
    let original = blocking();
    let mut document = original.clone();
    let mut rng = util::rng(Some(31), util::entropy_seed);
    let permutation = permute_variables(&mut document, &mut rng);

    let mut seen: HashMap<usize, usize> = HashMap::new();
    for (before, after) in original.lines.iter().zip(&document.lines) {
        for (before, after) in before.literals().zip(after.literals()) {
            assert_eq!(before.signum(), after.signum());
            let target = *seen
                .entry(before.unsigned_abs())
                .or_insert(after.unsigned_abs());
            assert_eq!(target, after.unsigned_abs());
        }
    }

    let targets: HashSet<usize> = seen.values().copied().collect();
    assert_eq!(targets.len(), seen.len());
    assert_eq!(targets, original.variables().into_iter().collect::<HashSet<_>>());
    assert_eq!(permutation.len(), 6);
}

#[test]
fn sign_decisions_are_memoized_per_literal() {
    let original = blocking();
    let mut document = original.clone();
    let mut rng = util::rng(Some(2), util::entropy_seed);
    let table = flip_signs(&mut document.lines, 0.5, &mut rng).unwrap();

    let mut decisions: HashMap<isize, bool> = HashMap::new();
    for (before, after) in original.lines.iter().zip(&document.lines) {
        for (before, after) in before.literals().zip(after.literals()) {
            let flipped = after == -before;
            assert_eq!(*decisions.entry(before).or_insert(flipped), flipped);
            assert_eq!(table.is_flipped(before), Some(flipped));
        }
    }

    assert_eq!(decisions.len(), table.len());
}

#[test]
fn certain_sign_flip_example() {
    let mut document = parser::parse_str("p cnf 2 1\n1 -2 0\n").unwrap();

    Transformer::new(TransformConfig {
        signs: Some(1.0),
        ..Default::default()
    })
    .unwrap()
    .apply(&mut document, &mut util::rng(Some(0), util::entropy_seed))
    .unwrap();

    assert_eq!(serialize(&document), "p cnf 2 1\n-1 2 0\n");
}
