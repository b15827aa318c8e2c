use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use core_sim::{BaccaratGame, HistoryRetention, MarketGame, MarketKind, SeededSource, SimulationConfig};
use runtime::{logging::InMemoryRunLogWriter, SimulationRun};

const BENCH_ROUNDS: u64 = 10_000;

fn bench_config() -> SimulationConfig {
    // Deep enough bankroll that the run is not cut short.
    SimulationConfig::new(BENCH_ROUNDS, 1.0e12, 1.0, 1_024.0)
        .with_history(HistoryRetention::Capped(100))
}

fn bench_runner_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("runner_throughput");
    group.throughput(Throughput::Elements(BENCH_ROUNDS));

    group.bench_function(BenchmarkId::new("baccarat", BENCH_ROUNDS), |b| {
        b.iter(|| {
            let run = SimulationRun::new(BaccaratGame, bench_config(), SeededSource::new(7))
                .expect("bench config is valid");
            let mut log = InMemoryRunLogWriter::new();
            black_box(run.run_to_completion(&mut log));
        });
    });

    group.bench_function(BenchmarkId::new("crypto", BENCH_ROUNDS), |b| {
        b.iter(|| {
            let game = MarketGame::new(MarketKind::Crypto);
            let run = SimulationRun::new(game, bench_config(), SeededSource::new(7))
                .expect("bench config is valid");
            let mut log = InMemoryRunLogWriter::new();
            black_box(run.run_to_completion(&mut log));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_runner_throughput);
criterion_main!(benches);
