//! This module defines the [Piece] enumeration and any associated
//! functionality.

use crate::error::{PieceError, PieceResult};
use crate::player::Player;
use crate::vector::{MoveVector, Pattern};

use serde::{Deserialize, Serialize};

use std::fmt;
use std::fmt::{Display, Formatter};

/// An enumeration of the different kinds of pieces. Does not encode the
/// [Player] who owns the piece. This can be converted to a [usize] to obtain
/// the piece index.
#[repr(usize)]
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Piece {

    /// A pawn. Moves forwards (towards the enemy's base) by one, or by two if
    /// on its starting rank.
    Pawn = 0,

    /// A knight. Jumps to all squares that have a distance of two on one axis
    /// and a distance of one on the other axis.
    Knight = 1,

    /// A bishop. Slides diagonally.
    Bishop = 2,

    /// A rook. Slides horizontally or vertically.
    Rook = 3,

    /// A queen. Slides horizontally, vertically, or diagonally, combining the
    /// movement of [Piece::Rook] and [Piece::Bishop].
    Queen = 4,

    /// A king. Steps to all orthogonally or diagonally adjacent squares.
    King = 5
}

impl Piece {

    /// Reads the piece kind from its abbreviation (P, N, B, R, Q, or K). Upper
    /// and lower case are accepted; use [Player::from_piece_char] to obtain
    /// the owner encoded by the case.
    ///
    /// # Errors
    ///
    /// [PieceError::InvalidPiece] if the character is not a valid piece
    /// abbreviation.
    pub fn from_char(c: char) -> PieceResult<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Ok(Piece::Pawn),
            'n' => Ok(Piece::Knight),
            'b' => Ok(Piece::Bishop),
            'r' => Ok(Piece::Rook),
            'q' => Ok(Piece::Queen),
            'k' => Ok(Piece::King),
            _ => Err(PieceError::InvalidPiece(c))
        }
    }

    /// Converts this piece into its upper case abbreviation.
    pub fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'P',
            Piece::Knight => 'N',
            Piece::Bishop => 'B',
            Piece::Rook => 'R',
            Piece::Queen => 'Q',
            Piece::King => 'K'
        }
    }

    /// Gets the English name of this piece, capitalized.
    pub fn name(self) -> &'static str {
        match self {
            Piece::Pawn => "Pawn",
            Piece::Knight => "Knight",
            Piece::Bishop => "Bishop",
            Piece::Rook => "Rook",
            Piece::Queen => "Queen",
            Piece::King => "King"
        }
    }

    /// Indicates whether this piece moves in a sliding manner. This is the
    /// case for [Piece::Bishop], [Piece::Rook], and [Piece::Queen].
    pub fn is_slider(self) -> bool {
        const BISHOP_IDX: usize = Piece::Bishop as usize;
        const QUEEN_IDX: usize = Piece::Queen as usize;

        let idx = self as usize;
        (BISHOP_IDX..=QUEEN_IDX).contains(&idx)
    }

    /// The conventional material value of this piece in pawns. The king,
    /// which cannot be traded, is given the nominal value 100.
    pub fn value(self) -> u32 {
        match self {
            Piece::Pawn => 1,
            Piece::Knight => 3,
            Piece::Bishop => 3,
            Piece::Rook => 5,
            Piece::Queen => 9,
            Piece::King => 100
        }
    }

    /// Gets the [Pattern] that describes the movement of this piece, or
    /// `None` for [Piece::Pawn], whose movement depends on its owner.
    pub fn pattern(self) -> Option<Pattern> {
        match self {
            Piece::Pawn => None,
            Piece::Knight => Some(Pattern::Knight),
            Piece::Bishop => Some(Pattern::Bishop),
            Piece::Rook => Some(Pattern::Rook),
            Piece::Queen => Some(Pattern::Queen),
            Piece::King => Some(Pattern::King)
        }
    }

    /// Indicates whether the given vector is one of the movement patterns of
    /// this piece when owned by the given player. For pawns, both the single
    /// and the double step forward are accepted, regardless of where the
    /// pawn stands.
    ///
    /// # Arguments
    ///
    /// * `player`: The [Player] who owns the piece. Only relevant for pawns.
    /// * `vector`: The [MoveVector] to classify.
    pub fn matches(self, player: Player, vector: MoveVector) -> bool {
        match self.pattern() {
            Some(pattern) => pattern.matches(vector),
            None => {
                let forward = player.forward();

                vector.dx == 0 &&
                    (vector.dy == forward || vector.dy == 2 * forward)
            }
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The number of different pieces, i.e. the length of [PIECES].
pub const PIECE_COUNT: usize = 6;

/// A list containing all [Piece]s in order of their indices.
pub const PIECES: [Piece; PIECE_COUNT] = [
    Piece::Pawn,
    Piece::Knight,
    Piece::Bishop,
    Piece::Rook,
    Piece::Queen,
    Piece::King
];

#[cfg(test)]
mod tests {

    use kernal::prelude::*;

    use rstest::rstest;

    use super::*;

    #[test]
    fn char_round_trip() {
        for piece in PIECES {
            assert_that!(Piece::from_char(piece.to_char())).contains_value(piece);
            assert_that!(Piece::from_char(piece.to_char().to_ascii_lowercase()))
                .contains_value(piece);
        }
    }

    #[test]
    fn invalid_piece_char() {
        assert_that!(Piece::from_char('x'))
            .contains_error(PieceError::InvalidPiece('x'));
    }

    #[test]
    fn sliders() {
        let sliders = PIECES.iter()
            .copied()
            .filter(|piece| piece.is_slider())
            .collect::<Vec<_>>();

        assert_that!(sliders)
            .contains_exactly_in_given_order([Piece::Bishop, Piece::Rook, Piece::Queen]);
    }

    #[rstest]
    #[case::white_single(Player::White, MoveVector::new(0, 1), true)]
    #[case::white_double(Player::White, MoveVector::new(0, 2), true)]
    #[case::white_backwards(Player::White, MoveVector::new(0, -1), false)]
    #[case::white_triple(Player::White, MoveVector::new(0, 3), false)]
    #[case::white_diagonal(Player::White, MoveVector::new(1, 1), false)]
    #[case::black_single(Player::Black, MoveVector::new(0, -1), true)]
    #[case::black_double(Player::Black, MoveVector::new(0, -2), true)]
    #[case::black_backwards(Player::Black, MoveVector::new(0, 1), false)]
    fn pawn_matches(#[case] player: Player, #[case] vector: MoveVector,
            #[case] expected: bool) {
        assert_that!(Piece::Pawn.matches(player, vector)).is_equal_to(expected);
    }

    #[test]
    fn queen_matches_union_of_rook_and_bishop() {
        for dx in -7..=7 {
            for dy in -7..=7 {
                let vector = MoveVector::new(dx, dy);
                let rook = Piece::Rook.matches(Player::White, vector);
                let bishop = Piece::Bishop.matches(Player::White, vector);

                assert_that!(Piece::Queen.matches(Player::White, vector))
                    .is_equal_to(rook || bishop);
            }
        }
    }

    #[test]
    fn values_are_ordered() {
        let values = PIECES.iter().map(|piece| piece.value()).collect::<Vec<_>>();

        assert_that!(values).contains_exactly_in_given_order([1, 3, 3, 5, 9, 100]);
    }
}
