//! This module contains integration tests which check, for every ordered pair
//! of squares, that the empty-board reach sets agree with the classification
//! of the movement vector between the squares.

use chess_algebra_model::board::Square;
use chess_algebra_model::piece::{Piece, PIECES};
use chess_algebra_model::player::{Player, PLAYERS};
use chess_algebra_model::reach::{reachable, reachable_squares};
use chess_algebra_model::vector::MoveVector;

use kernal::prelude::*;

use rstest::rstest;

#[rstest]
#[case::knight(Piece::Knight)]
#[case::bishop(Piece::Bishop)]
#[case::rook(Piece::Rook)]
#[case::queen(Piece::Queen)]
#[case::king(Piece::King)]
fn reach_agrees_with_vector_classification(#[case] piece: Piece) {
    for from in Square::ALL {
        let reach = reachable(piece, Player::White, from);

        for to in Square::ALL {
            let vector = MoveVector::between(from, to);

            assert_eq!(reach.contains(to), piece.matches(Player::White, vector),
                "{} from {} to {}", piece, from, to);
        }
    }
}

#[test]
fn pawn_reach_is_subset_of_pawn_vectors() {
    for player in PLAYERS {
        for from in Square::ALL {
            for to in reachable_squares(Piece::Pawn, player, from) {
                let vector = MoveVector::between(from, to);

                assert!(Piece::Pawn.matches(player, vector),
                    "{} pawn from {} to {}", player, from, to);
            }
        }
    }
}

#[test]
fn queen_reach_is_union_of_rook_and_bishop_reach() {
    for from in Square::ALL {
        let rook = reachable(Piece::Rook, Player::White, from);
        let bishop = reachable(Piece::Bishop, Player::White, from);

        assert_that!(reachable(Piece::Queen, Player::White, from))
            .is_equal_to(rook | bishop);
        assert!((rook & bishop).is_empty());
    }
}

#[test]
fn reach_is_symmetric_for_everything_but_pawns() {
    for piece in PIECES.into_iter().filter(|&piece| piece != Piece::Pawn) {
        for a in Square::ALL {
            for b in reachable_squares(piece, Player::White, a) {
                assert!(reachable(piece, Player::Black, b).contains(a),
                    "{} from {} to {} is not reversible", piece, a, b);
            }
        }
    }
}

#[test]
fn bishops_stay_on_their_color() {
    for from in Square::ALL {
        for to in reachable_squares(Piece::Bishop, Player::White, from) {
            assert_that!(to.color()).is_equal_to(from.color());
        }
    }
}

#[test]
fn knights_always_change_color() {
    for from in Square::ALL {
        for to in reachable_squares(Piece::Knight, Player::White, from) {
            assert_that!(to.color()).is_not_equal_to(from.color());
        }
    }
}
