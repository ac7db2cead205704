use criterion::{black_box, criterion_group, criterion_main, Criterion};

use letterdrill_core::generator::generate;
use letterdrill_core::model::{Configuration, GridOrder, Mode, Unit};
use letterdrill_core::random::RngSource;

fn config(mode: Mode, unit: Unit, count: u32) -> Configuration {
    Configuration {
        mode,
        unit,
        question_count: count,
        sequence_length: 6,
        grid_order: GridOrder::Shuffled,
        ..Configuration::default()
    }
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    let single = config(Mode::Mixed, Unit::Single, 100);
    group.bench_function("mixed_single_100", |b| {
        let mut rng = RngSource::seeded(1);
        b.iter(|| generate(black_box(&single), &mut rng))
    });

    let sequence = config(Mode::LetterToNumber, Unit::Sequence, 100);
    group.bench_function("sequence_100", |b| {
        let mut rng = RngSource::seeded(2);
        b.iter(|| generate(black_box(&sequence), &mut rng))
    });

    let grid = config(Mode::Grid, Unit::Single, 1);
    group.bench_function("shuffled_grid", |b| {
        let mut rng = RngSource::seeded(3);
        b.iter(|| generate(black_box(&grid), &mut rng))
    });

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
