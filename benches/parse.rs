use std::time::Duration;

use bioterm::OboGraph;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Builds an OBO document with `n` chained terms
fn synthetic_obo(n: usize) -> String {
    let mut obo = String::from("format-version: 1.2\n\n");
    for i in 0..n {
        obo.push_str(&format!(
            "[Term]\nid: GO:{i:07}\nname: synthetic term number {i}\n"
        ));
        obo.push_str(&format!(
            "def: \"A synthetic process observed in sample {i}, recorded for benchmarking.\" [GOC:bench]\n"
        ));
        obo.push_str(&format!("synonym: \"synthetic process {i}\" EXACT []\n"));
        if i > 0 {
            obo.push_str(&format!(
                "is_a: GO:{:07} ! synthetic term number {}\n",
                i - 1,
                i - 1
            ));
        }
        obo.push('\n');
    }
    obo
}

fn parse_benchmark(c: &mut Criterion) {
    let obo = synthetic_obo(1_000);
    c.bench_function("parse and assemble 1k terms", |b| {
        b.iter(|| {
            OboGraph::from_reader(black_box(obo.as_bytes()))
                .expect("requires valid input")
                .len()
        })
    });
}

criterion_group! {
    name = parse;
    config = Criterion::default().sample_size(20).measurement_time(Duration::from_secs(10));
    targets = parse_benchmark
}
criterion_main!(parse);
