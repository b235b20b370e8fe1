use criterion::{black_box, criterion_group, criterion_main, Criterion};
use route_selector::{
    models::{RoadSegment, Route, WeightVector},
    OptimizedPathSelection, PathSelector,
};

fn benchmark_selection(c: &mut Criterion) {
    // Create benchmark data
    let routes = create_benchmark_routes();
    let weights = WeightVector::new(0.2, 0.5, 0.3);
    let selector = OptimizedPathSelection::new();

    // Benchmark the full aggregate -> filter -> select pipeline
    c.bench_function("select_optimal_route", |b| {
        b.iter(|| selector.select(black_box(routes.clone()), black_box(&weights)))
    });

    // Benchmark the filter alone
    c.bench_function("filter_long_routes", |b| {
        b.iter(|| selector.filter_long_routes(black_box(routes.clone())))
    });
}

// Create data for benchmarking
fn create_benchmark_routes() -> Vec<Route> {
    // 500 routes with 10-19 roads each
    (0..500)
        .map(|i| {
            let roads = (0..10 + i % 10)
                .map(|j| {
                    let distance = 0.5 + ((i * 7 + j * 3) % 20) as f64 * 0.25;
                    let quality = ((i + j) % 11) as f64;
                    let safety = ((i * j) % 11) as f64;
                    RoadSegment::new(format!("Road {}-{}", i, j), distance, quality, safety)
                        .expect("benchmark roads are in range")
                })
                .collect();
            Route::with_roads(format!("Route {}", i), roads)
        })
        .collect()
}

criterion_group!(benches, benchmark_selection);
criterion_main!(benches);
