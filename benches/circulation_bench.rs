use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use circulation_desk::{Library, PatronId, SeedConfig};
use std::time::Duration;

const ORWELL: &str = "978-0-452-28423-4";

fn custom_criterion() -> Criterion {
    Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(1))
        .warm_up_time(Duration::from_secs(1))
}

fn stocked_library(copies: usize) -> Library {
    let mut library = Library::from_seed(&SeedConfig::default());
    for _ in 0..copies {
        library.add_book("1984", "George Orwell", ORWELL);
    }
    library
}

fn circulation_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("Circulation Operations");

    group.bench_function("issue_then_return", |b| {
        b.iter_batched(
            || stocked_library(0),
            |mut library| {
                assert!(library.issue_book(PatronId(1), ORWELL).is_ok());
                assert!(library.return_book(PatronId(1), ORWELL).is_ok());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("fulfill_1000_requests", |b| {
        b.iter_batched(
            || {
                let mut library = stocked_library(1000);
                assert!(library.issue_book(PatronId(1), ORWELL).is_ok());
                for _ in 0..1000 {
                    assert!(library.request_book(PatronId(2), ORWELL).is_ok());
                }
                library
            },
            |mut library| library.process_requests(),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = custom_criterion();
    targets = circulation_bench
}
criterion_main!(benches);
