use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_record_utils::search::{search, search_with_options, SearchOptions};

fn records_json(n: usize) -> String {
    let mut out = String::from("[");
    for i in 0..n {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&format!(
            r#"{{"id":{i},"name":"Person {i}","city":"{}","score":{}.5,"active":{}}}"#,
            if i % 10 == 0 { "Springfield" } else { "Shelbyville" },
            i % 100,
            i % 2 == 0
        ));
    }
    out.push(']');
    out
}

fn bench_search(c: &mut Criterion) {
    let text = records_json(50_000);

    c.bench_function("search/sequential_50k", |b| {
        b.iter(|| search(black_box(&text), black_box("springfield")))
    });

    let parallel = SearchOptions {
        parallel_threshold: Some(1),
        ..Default::default()
    };
    c.bench_function("search/parallel_50k", |b| {
        b.iter(|| search_with_options(black_box(&text), black_box("springfield"), &parallel))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
