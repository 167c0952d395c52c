//! Model-to-PDAG translation benchmarks.
//!
//! Run with:
//! ```bash
//! cargo bench --bench construction
//! ```

use std::rc::Rc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use pdag_rs::gate::Operator;
use pdag_rs::model::{Arg, BasicEvent, Formula};
use pdag_rs::pdag::Pdag;

/// Build a random fault-tree model with the given number of basic events
/// and formula depth.
fn build_random_model(num_events: usize, depth: u32, seed: u64) -> Rc<Formula> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let events: Vec<_> = (0..num_events).map(|i| BasicEvent::new(format!("e{}", i))).collect();
    random_formula(&mut rng, &events, depth)
}

fn random_formula(rng: &mut ChaCha8Rng, events: &[Rc<BasicEvent>], depth: u32) -> Rc<Formula> {
    let mut args = Vec::new();
    let count = rng.random_range(2..6);
    for _ in 0..count {
        if depth == 0 || rng.random_bool(0.5) {
            args.push(Arg::Basic(Rc::clone(&events[rng.random_range(0..events.len())])));
        } else {
            let sub = random_formula(rng, events, depth - 1);
            if rng.random_bool(0.2) {
                args.push(Arg::Complement(sub));
            } else {
                args.push(Arg::Formula(sub));
            }
        }
    }
    let operator = match rng.random_range(0..4) {
        0 => Operator::And,
        1..=2 => Operator::Or,
        _ => Operator::Nand,
    };
    Formula::new(operator, args)
}

fn bench_translation(c: &mut Criterion) {
    let mut group = c.benchmark_group("pdag/translation");

    for depth in [4u32, 6, 8] {
        let model = build_random_model(50, depth, 42);
        group.bench_with_input(BenchmarkId::new("depth", depth), &model, |b, model| {
            b.iter(|| Pdag::from_model(model));
        });
    }

    group.finish();
}

fn bench_wide_and_or(c: &mut Criterion) {
    let mut group = c.benchmark_group("pdag/wide_tree");

    for width in [100usize, 1000] {
        group.throughput(Throughput::Elements(width as u64));
        group.bench_with_input(BenchmarkId::new("two_level", width), &width, |b, &width| {
            // OR of `width` two-event ANDs over a shared event pool.
            let events: Vec<_> = (0..width).map(|i| BasicEvent::new(format!("e{}", i))).collect();
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            let ands: Vec<Arg> = (0..width)
                .map(|_| {
                    let a = rng.random_range(0..events.len());
                    let b = rng.random_range(0..events.len());
                    Arg::Formula(Formula::new(
                        Operator::And,
                        vec![
                            Arg::Basic(Rc::clone(&events[a])),
                            Arg::Basic(Rc::clone(&events[b])),
                        ],
                    ))
                })
                .collect();
            let top = Formula::new(Operator::Or, ands);
            b.iter(|| Pdag::from_model(&top));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_translation, bench_wide_and_or);
criterion_main!(benches);
