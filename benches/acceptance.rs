use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use libautomata::prelude::*;

fn odd_ones_dfa() -> Dfa {
    let transition = |from: &str, symbol: &str, to: &str| DfaTransition {
        from: from.to_string(),
        symbol: symbol.to_string(),
        to: to.to_string(),
    };
    Dfa::validate(DfaDefinition {
        states: vec!["q0".to_string(), "q1".to_string()],
        input_symbols: vec!["0".to_string(), "1".to_string()],
        transitions: vec![
            transition("q0", "0", "q0"),
            transition("q0", "1", "q1"),
            transition("q1", "0", "q1"),
            transition("q1", "1", "q0"),
        ],
        initial_state: "q0".to_string(),
        final_states: vec!["q1".to_string()],
    })
    .unwrap()
}

fn balanced_parens_npda() -> Npda {
    let rule = |from: &str, input: &str, top: &str, to: &str, push: &str| NpdaTransition {
        from: from.to_string(),
        input: input.to_string(),
        stack_top: top.to_string(),
        to: to.to_string(),
        push: push.to_string(),
    };
    Npda::validate(NpdaDefinition {
        states: vec!["q0".to_string()],
        input_symbols: vec!["(".to_string(), ")".to_string()],
        stack_symbols: vec!["Z".to_string(), "(".to_string()],
        transitions: vec![
            rule("q0", "(", "Z", "q0", "(Z"),
            rule("q0", "(", "(", "q0", "(("),
            rule("q0", ")", "(", "q0", ""),
        ],
        initial_state: "q0".to_string(),
        initial_stack_symbol: "Z".to_string(),
        final_states: vec!["q0".to_string()],
    })
    .unwrap()
}

/// Benchmark the linear DFA walk across word lengths
fn bench_dfa_walk(c: &mut Criterion) {
    let dfa = odd_ones_dfa();
    let mut group = c.benchmark_group("dfa_walk");

    for size in [64usize, 1_024, 16_384] {
        let word: String = (0..size).map(|i| if i % 3 == 0 { '1' } else { '0' }).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &word, |b, word| {
            b.iter(|| dfa.accepts(black_box(word)).unwrap());
        });
    }
    group.finish();
}

/// Benchmark the NPDA configuration search on nested parentheses
fn bench_npda_search(c: &mut Criterion) {
    let npda = balanced_parens_npda();
    let mut group = c.benchmark_group("npda_search");

    for depth in [8usize, 32, 128] {
        let word = format!("{}{}", "(".repeat(depth), ")".repeat(depth));
        group.throughput(Throughput::Elements(2 * depth as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &word, |b, word| {
            b.iter(|| npda.accepts(black_box(word)).unwrap());
        });
    }
    group.finish();
}

/// Benchmark the DTM step loop on growing unary inputs
fn bench_dtm_steps(c: &mut Criterion) {
    let step = |from: &str, read: &str, to: &str, write: &str, direction: Direction| {
        DtmTransition {
            from: from.to_string(),
            read: read.to_string(),
            to: to.to_string(),
            write: write.to_string(),
            direction,
        }
    };
    let dtm = Dtm::validate(DtmDefinition {
        states: vec!["scan".to_string(), "done".to_string()],
        input_symbols: vec!["1".to_string()],
        tape_symbols: vec!["1".to_string(), ".".to_string()],
        transitions: vec![
            step("scan", "1", "scan", "1", Direction::Right),
            step("scan", ".", "done", "1", Direction::Stay),
        ],
        initial_state: "scan".to_string(),
        blank_symbol: ".".to_string(),
        final_states: vec!["done".to_string()],
    })
    .unwrap();

    let mut group = c.benchmark_group("dtm_steps");
    for size in [64usize, 1_024, 16_384] {
        let word = "1".repeat(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &word, |b, word| {
            b.iter(|| dtm.accepts(black_box(word)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dfa_walk, bench_npda_search, bench_dtm_steps);
criterion_main!(benches);
