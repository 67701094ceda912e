use std::time::Duration;

use bioterm::OboGraph;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

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
        obo.push('\n');
    }
    obo
}

fn search_benchmark(c: &mut Criterion) {
    let obo = synthetic_obo(10_000);
    let graph = OboGraph::from_reader(obo.as_bytes()).expect("requires valid input");

    c.bench_function("ranked search", |b| {
        b.iter(|| graph.search(black_box("synthetic process number 5000")).len())
    });

    c.bench_function("exact name search", |b| {
        b.iter(|| graph.search_exact(black_box("Synthetic Term Number 5000")).len())
    });

    c.bench_function("lookup by id", |b| {
        b.iter(|| graph.node(black_box("GO:0005000")).is_some())
    });
}

criterion_group! {
    name = search;
    config = Criterion::default().sample_size(50).measurement_time(Duration::from_secs(10));
    targets = search_benchmark
}
criterion_main!(search);
