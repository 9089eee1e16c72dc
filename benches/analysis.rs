//! Scoring benchmark: one observation through the engine, built-in and injected catalogs.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sfas_engine::reference::ReferenceCatalog;
use sfas_engine::risk::{analyze_flood_risk, Observation, RainfallLevel, RiskEngine, RiverLevel};

fn observation(location: &str) -> Observation {
    Observation {
        location: location.to_string(),
        rainfall: 75.0,
        rainfall_level: RainfallLevel::Heavy,
        river_level: RiverLevel::Rising,
    }
}

fn bench_builtin_catalog(c: &mut Criterion) {
    let known = observation("guwahati");
    let unknown = observation("atlantis");

    c.bench_function("analyze_known_location", |b| {
        b.iter(|| analyze_flood_risk(black_box(&known)))
    });
    c.bench_function("analyze_unknown_location", |b| {
        b.iter(|| analyze_flood_risk(black_box(&unknown)))
    });
}

fn bench_catalog_size(c: &mut Criterion) {
    let builtin = ReferenceCatalog::builtin();
    let mut g = c.benchmark_group("analyze_by_catalog_size");
    for copies in [1usize, 10, 100] {
        let locations = (0..copies)
            .flat_map(|i| {
                builtin.locations().iter().cloned().map(move |mut l| {
                    l.id = format!("{}-{}", l.id, i);
                    l
                })
            })
            .collect::<Vec<_>>();
        let catalog = ReferenceCatalog::new(locations, builtin.history().to_vec());
        let engine = RiskEngine::new(&catalog);
        let last = observation(&format!("surat-{}", copies - 1));
        g.bench_function(format!("locations_{}", copies * builtin.locations().len()).as_str(), |b| {
            b.iter(|| engine.analyze(black_box(&last)))
        });
    }
    g.finish();
}

criterion_group!(benches, bench_builtin_catalog, bench_catalog_size);
criterion_main!(benches);
