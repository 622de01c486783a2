//! This module computes the squares a single [Piece] can move to on an
//! otherwise empty board. There are no captures, no blocking pieces, and no
//! notion of check; the results only illustrate the movement definitions.

use crate::board::{Bitboard, BOARD_HEIGHT, BOARD_WIDTH, Square};
use crate::board::locations::{D4, D5, E4, E5};
use crate::piece::Piece;
use crate::player::Player;
use crate::vector::{
    DIAGONAL_DIRECTIONS,
    KING_STEPS,
    KNIGHT_JUMPS,
    MoveVector,
    ORTHOGONAL_DIRECTIONS
};

/// The four central squares d4, e4, d5, and e5.
pub const CENTER: Bitboard = Bitboard::of([D4, E4, D5, E5]);

fn steps(from: Square, offsets: &[MoveVector]) -> Bitboard {
    offsets.iter()
        .filter_map(|&offset| from.offset(offset))
        .collect()
}

fn slides(from: Square, directions: &[MoveVector]) -> Bitboard {
    let mut result = Bitboard::EMPTY;

    for &direction in directions {
        let mut current = from;

        while let Some(next) = current.offset(direction) {
            result |= Bitboard::singleton(next);
            current = next;
        }
    }

    result
}

fn pawn_reach(player: Player, from: Square) -> Bitboard {
    let forward = MoveVector::new(0, player.forward());
    let mut result = Bitboard::EMPTY;

    if let Some(single) = from.offset(forward) {
        result |= Bitboard::singleton(single);

        if from.rank() == player.pawn_start_rank() {
            if let Some(double) = single.offset(forward) {
                result |= Bitboard::singleton(double);
            }
        }
    }

    result
}

/// Computes all squares the given piece can move to from the given square on
/// an empty board. The origin square itself is never contained.
///
/// # Arguments
///
/// * `piece`: The [Piece] that moves.
/// * `player`: The [Player] who owns the piece. Only relevant for pawns,
/// which move towards the opponent and may advance two squares from their
/// starting rank.
/// * `from`: The [Square] on which the piece stands.
///
/// # Returns
///
/// A [Bitboard] of all target squares.
pub fn reachable(piece: Piece, player: Player, from: Square) -> Bitboard {
    match piece {
        Piece::Pawn => pawn_reach(player, from),
        Piece::Knight => steps(from, &KNIGHT_JUMPS),
        Piece::Bishop => slides(from, &DIAGONAL_DIRECTIONS),
        Piece::Rook => slides(from, &ORTHOGONAL_DIRECTIONS),
        Piece::Queen => slides(from, &ORTHOGONAL_DIRECTIONS) |
            slides(from, &DIAGONAL_DIRECTIONS),
        Piece::King => steps(from, &KING_STEPS)
    }
}

/// The same as [reachable], but lists the target squares in ascending order
/// of index.
pub fn reachable_squares(piece: Piece, player: Player, from: Square)
        -> Vec<Square> {
    reachable(piece, player, from).squares().collect()
}

/// Counts how many of the four [CENTER] squares the given piece reaches from
/// the given square, as a simple measure of center control.
pub fn center_control(piece: Piece, player: Player, from: Square) -> u32 {
    (reachable(piece, player, from) & CENTER).len()
}

/// Computes, for every square, the number of squares the given piece reaches
/// from there on an empty board.
///
/// # Returns
///
/// A grid indexed as `[rank][file]` with 0-based indices.
pub fn mobility_map(piece: Piece, player: Player)
        -> [[u32; BOARD_WIDTH]; BOARD_HEIGHT] {
    let mut map = [[0; BOARD_WIDTH]; BOARD_HEIGHT];

    for square in Square::ALL {
        let (file, rank) = square.coordinates();
        map[rank][file] = reachable(piece, player, square).len();
    }

    map
}

#[cfg(test)]
mod tests {

    use kernal::prelude::*;

    use rstest::rstest;

    use super::*;

    use crate::board::locations::*;

    #[rstest]
    #[case::knight_e4(Piece::Knight, E4, 8)]
    #[case::knight_a1(Piece::Knight, A1, 2)]
    #[case::bishop_e4(Piece::Bishop, E4, 13)]
    #[case::bishop_a1(Piece::Bishop, A1, 7)]
    #[case::rook_e4(Piece::Rook, E4, 14)]
    #[case::rook_h8(Piece::Rook, H8, 14)]
    #[case::queen_e4(Piece::Queen, E4, 27)]
    #[case::queen_a1(Piece::Queen, A1, 21)]
    #[case::king_e4(Piece::King, E4, 8)]
    #[case::king_h1(Piece::King, H1, 3)]
    fn reach_counts(#[case] piece: Piece, #[case] from: Square,
            #[case] expected: u32) {
        assert_that!(reachable(piece, Player::White, from).len())
            .is_equal_to(expected);
    }

    #[test]
    fn knight_reach_from_e4() {
        let squares = reachable_squares(Piece::Knight, Player::White, E4);

        assert_that!(squares).contains_exactly_in_given_order(
            [D2, F2, C3, G3, C5, G5, D6, F6]);
    }

    #[rstest]
    #[case::white_start(Player::White, E2, vec![E3, E4])]
    #[case::white_advanced(Player::White, E4, vec![E5])]
    #[case::white_last_rank(Player::White, E8, vec![])]
    #[case::black_start(Player::Black, D7, vec![D5, D6])]
    #[case::black_advanced(Player::Black, D5, vec![D4])]
    fn pawn_reach(#[case] player: Player, #[case] from: Square,
            #[case] expected: Vec<Square>) {
        assert_that!(reachable_squares(Piece::Pawn, player, from))
            .is_equal_to(expected);
    }

    #[test]
    fn origin_is_never_reachable() {
        for piece in crate::piece::PIECES {
            for square in Square::ALL {
                assert!(!reachable(piece, Player::White, square).contains(square));
            }
        }
    }

    #[rstest]
    #[case::knight_f3(Piece::Knight, F3, 2)]
    #[case::knight_a1(Piece::Knight, A1, 0)]
    #[case::queen_d1(Piece::Queen, D1, 2)]
    #[case::queen_c3(Piece::Queen, C3, 2)]
    #[case::king_e4(Piece::King, E4, 3)]
    fn center_control_counts(#[case] piece: Piece, #[case] from: Square,
            #[case] expected: u32) {
        assert_that!(center_control(piece, Player::White, from))
            .is_equal_to(expected);
    }

    #[test]
    fn knight_mobility_map_corners_and_center() {
        let map = mobility_map(Piece::Knight, Player::White);

        assert_that!(map[0][0]).is_equal_to(2);
        assert_that!(map[7][7]).is_equal_to(2);
        assert_that!(map[3][3]).is_equal_to(8);
        assert_that!(map.iter().flatten().sum::<u32>()).is_equal_to(336);
    }
}
