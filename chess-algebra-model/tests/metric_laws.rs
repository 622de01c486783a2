//! This module contains integration tests which check the metric axioms and
//! the relations between the different distance metrics over all pairs of
//! squares, as well as properties of the move graphs.

use chess_algebra_model::board::Square;
use chess_algebra_model::board::locations::*;
use chess_algebra_model::distance::{
    self,
    DistanceMatrix,
    Metric
};
use chess_algebra_model::graph;
use chess_algebra_model::piece::Piece;
use chess_algebra_model::player::Player;

use kernal::prelude::*;

use rstest::rstest;

const EPSILON: f64 = 1e-9;

#[rstest]
#[case::euclidean(Metric::Euclidean)]
#[case::manhattan(Metric::Manhattan)]
#[case::chebyshev(Metric::Chebyshev)]
fn symmetry_and_identity(#[case] metric: Metric) {
    let matrix = DistanceMatrix::new(metric);

    for a in Square::ALL {
        for b in Square::ALL {
            assert_that!(matrix.get(a, b)).is_equal_to(matrix.get(b, a));
            assert_that!(matrix.get(a, b) == 0.0).is_equal_to(a == b);
        }
    }
}

#[rstest]
#[case::euclidean(Metric::Euclidean)]
#[case::manhattan(Metric::Manhattan)]
#[case::chebyshev(Metric::Chebyshev)]
fn triangle_inequality(#[case] metric: Metric) {
    let matrix = DistanceMatrix::new(metric);

    for a in Square::ALL {
        for b in Square::ALL {
            for c in [A1, E4, H8, C7, G2] {
                assert!(matrix.get(a, b) <= matrix.get(a, c) + matrix.get(c, b) + EPSILON,
                    "triangle inequality violated for {} {} {} under {}", a, b, c,
                    metric);
            }
        }
    }
}

#[test]
fn metrics_are_ordered() {
    for a in Square::ALL {
        for b in Square::ALL {
            let chebyshev = distance::chebyshev(a, b) as f64;
            let euclidean = distance::euclidean(a, b);
            let manhattan = distance::manhattan(a, b) as f64;

            assert!(chebyshev <= euclidean + EPSILON);
            assert!(euclidean <= manhattan + EPSILON);
        }
    }
}

#[test]
fn king_move_distance_is_chebyshev_distance() {
    for a in Square::ALL {
        for b in [A1, D4, H5, B8] {
            assert_that!(graph::move_distance(Piece::King, Player::White, a, b))
                .contains(distance::chebyshev(a, b));
        }
    }
}

#[test]
fn rook_needs_at_most_two_moves() {
    for a in Square::ALL {
        for b in Square::ALL {
            let expected = if a == b {
                0
            }
            else if a.file() == b.file() || a.rank() == b.rank() {
                1
            }
            else {
                2
            };

            assert_that!(graph::move_distance(Piece::Rook, Player::White, a, b))
                .contains(expected);
        }
    }
}

#[test]
fn knight_reaches_every_square_within_six_moves() {
    for a in Square::ALL {
        for b in Square::ALL {
            let moves = graph::move_distance(Piece::Knight, Player::White, a, b);

            assert_that!(moves).is_some();
            assert!(moves.unwrap() <= 6);
        }
    }
}

#[test]
fn bishop_reachability_follows_square_color() {
    for a in Square::ALL {
        for b in Square::ALL {
            let moves = graph::move_distance(Piece::Bishop, Player::White, a, b);

            assert_that!(moves.is_some()).is_equal_to(a.color() == b.color());
        }
    }
}
