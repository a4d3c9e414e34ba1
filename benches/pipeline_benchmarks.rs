//! Benchmark suite for the expression pipeline
//!
//! Expressions are grouped by size so regressions in one stage show up
//! against the number of gates involved.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use logic_sim::{
    generate_truth_table, layout, parse_expression, sequence_steps, Circuit, Limits, Options,
};

/// Category of benchmark expressions
#[derive(Debug, Clone, Copy)]
enum Category {
    Small,  // one gate
    Medium, // a handful of gates
    Large,  // deep nesting, maximum variables
}

impl Category {
    fn as_str(&self) -> &str {
        match self {
            Category::Small => "small",
            Category::Medium => "medium",
            Category::Large => "large",
        }
    }
}

const EXPRESSIONS: &[(Category, &str, &str)] = &[
    (Category::Small, "and", "a and b"),
    (Category::Small, "not", "not a"),
    (Category::Medium, "majority", "a and b or b and c or a and c"),
    (Category::Medium, "mux", "not s and a or s and b"),
    (
        Category::Large,
        "nested",
        "not ((a xor b) nand (c xnor d)) or (a nor (not (b and c))) and d",
    ),
    (
        Category::Large,
        "chain",
        "a xor b xor c xor d xor a and b and c and d or (not a) nor (not b)",
    ),
];

fn param(category: Category, name: &str) -> String {
    format!("{}/{}", category.as_str(), name)
}

/// Benchmark: tokenize, validate and parse
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for &(category, name, text) in EXPRESSIONS {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("expression", param(category, name)), text, |b, data| {
            b.iter(|| {
                let ast = parse_expression(black_box(data)).unwrap();
                black_box(ast);
            });
        });
    }

    group.finish();
}

/// Benchmark: truth table, layout and steps from a parsed tree
fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");

    for &(category, name, text) in EXPRESSIONS {
        let ast = parse_expression(text).unwrap();
        let variables: Vec<char> = ast.collect_variables().into_iter().collect();
        let id = param(category, name);

        group.throughput(Throughput::Elements(ast.gate_count() as u64));
        group.bench_with_input(BenchmarkId::new("truth_table", &id), &ast, |b, ast| {
            b.iter(|| black_box(generate_truth_table(black_box(ast), &variables).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("layout", &id), &ast, |b, ast| {
            b.iter(|| black_box(layout(black_box(ast))));
        });
        group.bench_with_input(BenchmarkId::new("steps", &id), &ast, |b, ast| {
            b.iter(|| black_box(sequence_steps(black_box(ast), &variables)));
        });
    }

    group.finish();
}

/// Benchmark: full pipeline
fn bench_full_pipeline(c: &mut Criterion) {
    let options = Options {
        limits: Limits::unbounded(),
        ..Options::default()
    };
    let mut group = c.benchmark_group("full_pipeline");

    for &(category, name, text) in EXPRESSIONS {
        group.bench_with_input(BenchmarkId::new("compile", param(category, name)), text, |b, data| {
            b.iter(|| {
                let circuit = Circuit::compile_with(black_box(data), &options).unwrap();
                black_box(circuit);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_stages, bench_full_pipeline);
criterion_main!(benches);
