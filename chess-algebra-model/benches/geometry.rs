use criterion::{criterion_group, criterion_main, Criterion};

use chess_algebra_model::board::Square;
use chess_algebra_model::board::locations::{A1, H8};
use chess_algebra_model::distance::{DistanceMatrix, Metric};
use chess_algebra_model::graph;
use chess_algebra_model::piece::{Piece, PIECES};
use chess_algebra_model::player::Player;
use chess_algebra_model::reach;

use std::hint::black_box;

fn bench_distance_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance matrix");

    for metric in [Metric::Euclidean, Metric::Manhattan, Metric::Chebyshev] {
        group.bench_function(metric.to_string(),
            |bencher| bencher.iter(|| DistanceMatrix::new(black_box(metric))));
    }

    group.finish();
}

fn bench_reach(c: &mut Criterion) {
    let mut group = c.benchmark_group("reach all squares");

    for piece in PIECES {
        group.bench_function(piece.name(), |bencher| bencher.iter(|| {
            Square::ALL.iter()
                .map(|&square| reach::reachable(black_box(piece), Player::White, square).len())
                .sum::<u32>()
        }));
    }

    group.finish();
}

fn bench_move_graph(c: &mut Criterion) {
    c.bench_function("knight a1 to h8", |bencher| bencher.iter(||
        graph::move_distance(Piece::Knight, Player::White, black_box(A1), black_box(H8))));
}

criterion_group!(benches, bench_distance_matrix, bench_reach, bench_move_graph);
criterion_main!(benches);
