//! This module defines the [Player] enumeration and any associated
//! functionality.

use crate::board::Rank;

use serde::{Deserialize, Serialize};

use std::fmt;
use std::fmt::{Display, Formatter};

/// An enumeration of the two different players. This can be converted to a
/// [usize] to obtain the player index.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Player {

    /// The white player who initially occupies the lower ranks.
    White = 0,

    /// The black player who initially occupies the upper ranks.
    Black = 1
}

impl Player {

    /// Reads the player who a piece belongs to from the char representing
    /// that piece. Upper case characters represent [Player::White]'s pieces,
    /// lower case characters belong to [Player::Black].
    pub fn from_piece_char(c: char) -> Player {
        if c.is_uppercase() {
            Player::White
        }
        else {
            Player::Black
        }
    }

    /// Gets the opponent who plays against this player, i.e. the other
    /// player.
    pub fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White
        }
    }

    /// The rank displacement of one pawn step of this player: `1` for
    /// [Player::White] and `-1` for [Player::Black].
    pub fn forward(self) -> i32 {
        match self {
            Player::White => 1,
            Player::Black => -1
        }
    }

    /// The rank on which the pawns of this player start and from which they
    /// may advance two squares.
    pub fn pawn_start_rank(self) -> Rank {
        match self {
            Player::White => Rank::R2,
            Player::Black => Rank::R7
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black")
        }
    }
}

/// The number of different players, i.e. the length of [PLAYERS].
pub const PLAYER_COUNT: usize = 2;

/// A list containing both [Player]s in order of their indices.
pub const PLAYERS: [Player; PLAYER_COUNT] = [Player::White, Player::Black];
