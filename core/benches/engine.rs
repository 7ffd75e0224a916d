use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use sapper_core::*;

fn generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, config) in [
        ("beginner", GameConfig::beginner()),
        ("intermediate", GameConfig::intermediate()),
        ("expert", GameConfig::expert()),
    ] {
        group.bench_function(name, |b| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                ShuffleGenerator::new(seed)
                    .generate(black_box(config.size), black_box(config.mines))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn flood_fill(c: &mut Criterion) {
    // one mine in the far corner, so a corner reveal floods the whole board
    let board = Board::from_mine_coords((Coord::MAX, Coord::MAX), &[(254, 254)]).unwrap();

    c.bench_function("flood_reveal_max_board", |b| {
        b.iter_batched(
            || board.clone(),
            |mut board| board.flood_reveal(black_box((0, 0))),
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, generation, flood_fill);
criterion_main!(benches);
