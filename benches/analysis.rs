use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use countrymgr::{
    analysis::analyze,
    core::store::MemoryCountryStore,
    country::Country,
    persist::CountryStore,
    types::CountryCode,
};

fn countries(n: usize) -> Vec<Country> {
    (0..n)
        .map(|i| {
            let code = CountryCode::parse(&format!("{:03}", i % 1000)).expect("code");
            let internet = (i % 7 != 0).then(|| (i * 37 % 10_000) as f64 / 100.0);
            let literacy = (i % 5 != 0).then(|| (i * 53 % 10_000) as f64 / 100.0);
            Country::builder(code, format!("Country {i}"))
                .internet_users(internet)
                .adult_literacy_rate(literacy)
                .build()
        })
        .collect()
}

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");
    for n in [10usize, 200usize, 1000usize] {
        let data = countries(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter(|| analyze(data));
        });
    }
    group.finish();
}

fn bench_memory_inserts(c: &mut Criterion) {
    let data = countries(1000);
    c.bench_function("memory_store_insert_1k", |b| {
        b.iter(|| {
            let mut store = MemoryCountryStore::new();
            for country in data.iter().cloned() {
                store.insert(country).expect("insert");
            }
        });
    });
}

criterion_group!(benches, bench_analysis, bench_memory_inserts);
criterion_main!(benches);
