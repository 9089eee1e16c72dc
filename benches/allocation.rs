//! Allocation and dashboard benchmark: level lookup and the full submit path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sfas_engine::dashboard::Dashboard;
use sfas_engine::resources::get_resource_allocation;
use sfas_engine::risk::{RiskEngine, RiskLevel};
use sfas_engine::session::Session;
use sfas_engine::validation::ObservationInput;

fn bench_allocation(c: &mut Criterion) {
    c.bench_function("allocation_all_levels", |b| {
        b.iter(|| {
            for level in RiskLevel::ALL {
                black_box(get_resource_allocation(black_box(level)));
            }
        })
    });
}

fn bench_dashboard_submit(c: &mut Criterion) {
    let session = Session::sign_in("bench", "bench").unwrap();
    let dashboard = Dashboard::new(session, RiskEngine::default());
    let input = ObservationInput {
        location: "patna".to_string(),
        rainfall: Some(95.0),
        rainfall_level: "heavy".to_string(),
        river_level: "danger".to_string(),
    };

    c.bench_function("dashboard_submit", |b| {
        b.iter(|| black_box(dashboard.submit(black_box(&input))).unwrap())
    });
}

criterion_group!(benches, bench_allocation, bench_dashboard_submit);
criterion_main!(benches);
