use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use passforge::{generate, GenerateOptions, MIN_ITERATIONS};

fn benchmark_work_factor(c: &mut Criterion) {
    let mut group = c.benchmark_group("work_factor");
    group.sample_size(10);

    // The iteration count is the tunable cost knob: derivation time
    // should scale linearly with it.
    let counts = [
        ("100k", MIN_ITERATIONS),
        ("300k", 300_000),
        ("600k", 600_000),
    ];

    for (name, iterations) in counts {
        let options = GenerateOptions {
            context: "bench.example".to_string(),
            length: 20,
            iterations,
        };

        group.throughput(Throughput::Elements(iterations as u64));
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &options,
            |b, options| {
                b.iter(|| {
                    generate(
                        black_box("correct horse battery staple"),
                        black_box(1),
                        black_box(options),
                    )
                    .unwrap()
                });
            },
        );
    }
    group.finish();
}

fn benchmark_output_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("output_length");
    group.sample_size(10);

    // Length mostly moves the stretched-key width and shuffle stream;
    // the iteration cost dominates, so the curve should be nearly flat.
    for length in [16usize, 40, 120] {
        let options = GenerateOptions {
            context: "bench.example".to_string(),
            length,
            iterations: MIN_ITERATIONS,
        };

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(length),
            &options,
            |b, options| {
                b.iter(|| {
                    generate(
                        black_box("correct horse battery staple"),
                        black_box(1),
                        black_box(options),
                    )
                    .unwrap()
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, benchmark_work_factor, benchmark_output_length);
criterion_main!(benches);
