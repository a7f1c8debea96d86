use cnfrand::parser;
use cnfrand::{util, CnfDocument, Header, Line, TransformConfig, Transformer};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// A random 3-CNF with the given number of variables and clauses.
fn random_3cnf(variables: isize, clauses: usize) -> CnfDocument {
    use rand::Rng;

    let mut rng = util::rng(Some(1), util::entropy_seed);
    let lines = (0..clauses)
        .map(|_| {
            let mut tokens: Vec<isize> = (0..3)
                .map(|_| {
                    let variable = rng.gen_range(1..=variables);
                    if rng.gen_bool(0.5) {
                        variable
                    } else {
                        -variable
                    }
                })
                .collect();
            tokens.push(0);
            Line::Clause(tokens)
        })
        .collect();

    CnfDocument::new(
        Header {
            num_variables: variables as usize,
            num_clauses: clauses,
        },
        lines,
    )
}

fn parse(c: &mut Criterion) {
    let text = random_3cnf(2_000, 8_500).to_string();
    c.bench_function("parse 3-cnf", |b| {
        b.iter(|| parser::parse_str(black_box(&text)))
    });
}

fn full_pipeline(c: &mut Criterion) {
    let document = random_3cnf(2_000, 8_500);
    let transformer = Transformer::new(TransformConfig {
        clauses: true,
        names: true,
        literal_order: Some(0.5),
        signs: Some(0.5),
    })
    .unwrap();

    c.bench_function("transform 3-cnf", |b| {
        b.iter(|| {
            let mut document = document.clone();
            let mut rng = util::rng(Some(7), util::entropy_seed);
            transformer.apply(black_box(&mut document), &mut rng)
        })
    });
}

criterion_group!(benches, parse, full_pipeline);
criterion_main!(benches);
