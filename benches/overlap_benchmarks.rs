//! Performance benchmarks for the overlap engine.
//!
//! The pair search is quadratic per project group by design, so these
//! benches track how the engine behaves as rosters grow:
//! - direct longest-pair search over a single project group
//! - global search across several project groups
//! - the full upload-then-query path through the router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;

use overlap_engine::api::{AppState, create_router};
use overlap_engine::engine::{global_longest_pair, longest_pair_among};
use overlap_engine::models::AssignmentRecord;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Builds a synthetic roster spread over `projects` project groups.
fn synthetic_roster(count: usize, projects: i64) -> Vec<AssignmentRecord> {
    let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
    let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();

    (0..count)
        .map(|i| {
            let start = base + chrono::Duration::days((i % 37) as i64 * 3);
            let end = start + chrono::Duration::days(20 + (i % 11) as i64 * 7);
            AssignmentRecord::new(i as i64 + 1, (i as i64 % projects) + 1, start, Some(end), today)
        })
        .collect()
}

/// Renders a roster as the CSV the upload endpoint accepts.
fn roster_csv(records: &[AssignmentRecord]) -> String {
    let mut csv = String::from("EmpID,ProjectID,DateFrom,DateTo\n");
    for record in records {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            record.emp_id, record.project_id, record.date_from, record.date_to
        ));
    }
    csv
}

/// Benchmark: longest-pair search within a single project group.
fn bench_single_group_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_group_search");

    for size in [10usize, 50, 100, 250].iter() {
        let records = synthetic_roster(*size, 1);
        let members: Vec<&AssignmentRecord> = records.iter().collect();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("records", size), size, |b, _| {
            b.iter(|| black_box(longest_pair_among(&members)))
        });
    }

    group.finish();
}

/// Benchmark: global search across 8 project groups.
fn bench_global_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("global_search");

    for size in [100usize, 500, 1000].iter() {
        let records = synthetic_roster(*size, 8);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("records", size), size, |b, _| {
            b.iter(|| black_box(global_longest_pair(&records)))
        });
    }

    group.finish();
}

/// Benchmark: the full upload-then-query path through the router.
fn bench_upload_and_query(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let records = synthetic_roster(200, 8);
    let csv = roster_csv(&records);

    c.bench_function("upload_and_query_200", |b| {
        b.to_async(&rt).iter(|| async {
            let router = create_router(AppState::new());

            let response = router
                .clone()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/dataset")
                        .header("Content-Type", "text/csv")
                        .body(Body::from(csv.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response);

            let response = router
                .oneshot(
                    Request::builder()
                        .uri("/pair")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_single_group_search,
    bench_global_search,
    bench_upload_and_query,
);
criterion_main!(benches);
