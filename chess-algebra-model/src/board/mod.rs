//! This module defines the coordinate system of the Chess board: [File]s,
//! [Rank]s, [Square]s with their algebraic notation, and [Bitboard]s as sets
//! of squares.

pub mod locations;

use crate::error::{SquareError, SquareResult};
use crate::vector::MoveVector;

use serde::{Deserialize, Serialize};

use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    Not,
    Sub,
    SubAssign
};
use std::str::FromStr;

/// The width of a Chess board, i.e. the number of files.
pub const BOARD_WIDTH: usize = 8;

/// The height of a Chess board, i.e. the number of ranks.
pub const BOARD_HEIGHT: usize = 8;

/// The number of squares on a Chess board.
pub const SQUARE_COUNT: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// Represents a file (column of squares) on the Chess board. Can be converted
/// to and from 0-based file indices using [File::from_usize] and
/// [File::as_usize].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct File(usize);

impl File {

    /// The A-file (index 0).
    pub const A: File = File(0);

    /// The B-file (index 1).
    pub const B: File = File(1);

    /// The C-file (index 2).
    pub const C: File = File(2);

    /// The D-file (index 3).
    pub const D: File = File(3);

    /// The E-file (index 4).
    pub const E: File = File(4);

    /// The F-file (index 5).
    pub const F: File = File(5);

    /// The G-file (index 6).
    pub const G: File = File(6);

    /// The H-file (index 7).
    pub const H: File = File(7);

    /// An array of all files from A to H (indices 0 to 7).
    pub const FILES: [File; BOARD_WIDTH] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H
    ];

    /// Converts this file to its 0-based index starting at the A-file (A = 0,
    /// B = 1, ...).
    pub const fn as_usize(self) -> usize {
        self.0
    }

    /// Constructs a file from its 0-based index starting at the A-file (0 = A,
    /// 1 = B, ...).
    ///
    /// # Arguments
    ///
    /// * `file`: The 0-based index of the file to construct. Must be in the
    /// range 0 to 7 to yield a result.
    ///
    /// # Returns
    ///
    /// `Some(...)` with the file with the given index, if it is in the valid
    /// range, and `None` otherwise.
    pub const fn from_usize(file: usize) -> Option<File> {
        if file < BOARD_WIDTH {
            Some(File(file))
        }
        else {
            None
        }
    }

    /// Gets the lowercase letter representing this file (`'a'`, `'b'`, ...,
    /// `'h'`).
    pub const fn as_char(self) -> char {
        (b'a' + self.0 as u8) as char
    }

    /// Parses a file from its letter. Uppercase letters are accepted as well.
    ///
    /// # Arguments
    ///
    /// * `file`: A character containing the letter representing the file to
    /// return (`'a'`, `'b'`, ..., `'h'`).
    ///
    /// # Returns
    ///
    /// `Some(...)` with the file represented by the given letter, if it is in
    /// the valid range, and `None` otherwise.
    pub const fn from_char(file: char) -> Option<File> {
        let file = file.to_ascii_lowercase();

        if file >= 'a' {
            File::from_usize(file as usize - 'a' as usize)
        }
        else {
            None
        }
    }
}

impl Display for File {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Represents a rank (row of squares) on the Chess board. Can be converted to
/// and from 0-based rank indices using [Rank::from_usize] and
/// [Rank::as_usize].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Rank(usize);

impl Rank {

    /// The first rank (index 0, White's back rank).
    pub const R1: Rank = Rank(0);

    /// The second rank (index 1, White's pawn rank).
    pub const R2: Rank = Rank(1);

    /// The third rank (index 2).
    pub const R3: Rank = Rank(2);

    /// The fourth rank (index 3).
    pub const R4: Rank = Rank(3);

    /// The fifth rank (index 4).
    pub const R5: Rank = Rank(4);

    /// The sixth rank (index 5).
    pub const R6: Rank = Rank(5);

    /// The seventh rank (index 6, Black's pawn rank).
    pub const R7: Rank = Rank(6);

    /// The eighth rank (index 7, Black's back rank).
    pub const R8: Rank = Rank(7);

    /// An array of all ranks from 1st to 8th (indices 0 to 7, White's side to
    /// Black's side).
    pub const RANKS: [Rank; BOARD_HEIGHT] = [
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8
    ];

    /// Converts this rank to its 0-based index starting at the first rank
    /// (1st = 0, 2nd = 1, ...).
    pub const fn as_usize(self) -> usize {
        self.0
    }

    /// Constructs a rank from its 0-based index starting at the first rank
    /// (0 = 1st, 1 = 2nd, ...).
    ///
    /// # Arguments
    ///
    /// * `rank`: The 0-based index of the rank to construct. Must be in the
    /// range 0 to 7 to yield a result.
    ///
    /// # Returns
    ///
    /// `Some(...)` with the rank with the given index, if it is in the valid
    /// range, and `None` otherwise.
    pub const fn from_usize(rank: usize) -> Option<Rank> {
        if rank < BOARD_HEIGHT {
            Some(Rank(rank))
        }
        else {
            None
        }
    }

    /// Gets the digit representing this rank (`'1'`, `'2'`, ..., `'8'`).
    pub const fn as_char(self) -> char {
        (b'1' + self.0 as u8) as char
    }

    /// Parses a rank from its digit.
    ///
    /// # Arguments
    ///
    /// * `rank`: A character containing the digit representing the rank to
    /// return (`'1'`, `'2'`, ..., `'8'`).
    ///
    /// # Returns
    ///
    /// `Some(...)` with the rank represented by the given digit, if it is in
    /// the valid range, and `None` otherwise.
    pub const fn from_char(rank: char) -> Option<Rank> {
        if rank >= '1' {
            Rank::from_usize(rank as usize - '1' as usize)
        }
        else {
            None
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The color of a square on the Chess board. The a1-square is dark.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SquareColor {

    /// A light square, such as h1 or e4.
    Light,

    /// A dark square, such as a1 or d4.
    Dark
}

impl Display for SquareColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SquareColor::Light => write!(f, "light"),
            SquareColor::Dark => write!(f, "dark")
        }
    }
}

/// Represents a single square on the board as an index, where a1 has index 0,
/// b1 has index 1, and h8 has index 63. Squares serialize to and from their
/// algebraic notation.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd,
    Serialize)]
#[serde(into = "String", try_from = "String")]
pub struct Square(usize);

impl Square {

    /// All 64 squares in ascending order of index, i.e. a1, b1, ..., h1, a2,
    /// ..., h8.
    pub const ALL: [Square; SQUARE_COUNT] = {
        let mut squares = [Square(0); SQUARE_COUNT];
        let mut index = 0;

        while index < SQUARE_COUNT {
            squares[index] = Square(index);
            index += 1;
        }

        squares
    };

    /// Creates a new square from 0-based file and rank indices.
    ///
    /// # Arguments
    ///
    /// * `file`: The 0-based file index (0 = a-file).
    /// * `rank`: The 0-based rank index (0 = 1st rank).
    ///
    /// # Errors
    ///
    /// [SquareError::FileOutOfBounds] or [SquareError::RankOutOfBounds] if
    /// the respective index is 8 or greater.
    pub fn new(file: usize, rank: usize) -> SquareResult<Square> {
        let file = File::from_usize(file)
            .ok_or(SquareError::FileOutOfBounds(file))?;
        let rank = Rank::from_usize(rank)
            .ok_or(SquareError::RankOutOfBounds(rank))?;

        Ok(Square::from_file_and_rank(file, rank))
    }

    /// Creates a new square that lies in the given file and rank.
    pub const fn from_file_and_rank(file: File, rank: Rank) -> Square {
        Square(rank.as_usize() * BOARD_WIDTH + file.as_usize())
    }

    /// Gets the square with the given index (a1 = 0, b1 = 1, ..., h8 = 63),
    /// if it is in the valid range.
    pub const fn from_index(index: usize) -> Option<Square> {
        if index < SQUARE_COUNT {
            Some(Square(index))
        }
        else {
            None
        }
    }

    /// Parses a square from algebraic notation such as `"e4"`. The file
    /// letter may be given in upper case.
    ///
    /// # Arguments
    ///
    /// * `algebraic`: Exactly one file letter followed by one rank digit.
    ///
    /// # Errors
    ///
    /// * [SquareError::WrongLength] if `algebraic` does not consist of exactly
    /// two characters.
    /// * [SquareError::InvalidFile] if the first character is not a file
    /// letter.
    /// * [SquareError::InvalidRank] if the second character is not a rank
    /// digit.
    pub fn parse(algebraic: &str) -> SquareResult<Square> {
        let mut chars = algebraic.chars();

        let (file_char, rank_char) =
            match (chars.next(), chars.next(), chars.next()) {
                (Some(file), Some(rank), None) => (file, rank),
                _ => return Err(SquareError::WrongLength(algebraic.to_owned()))
            };

        let file = File::from_char(file_char)
            .ok_or(SquareError::InvalidFile(file_char))?;
        let rank = Rank::from_char(rank_char)
            .ok_or(SquareError::InvalidRank(rank_char))?;

        Ok(Square::from_file_and_rank(file, rank))
    }

    /// Gets the [File] (column) in which this square lies.
    pub const fn file(self) -> File {
        File(self.0 % BOARD_WIDTH)
    }

    /// Gets the [Rank] (row) on which this square lies.
    pub const fn rank(self) -> Rank {
        Rank(self.0 / BOARD_WIDTH)
    }

    /// Gets the index of this square (a1 = 0, b1 = 1, ..., h8 = 63).
    pub const fn index(self) -> usize {
        self.0
    }

    /// Gets the 0-based coordinates of this square as a `(file, rank)` pair,
    /// that is, as `(x, y)` with the origin at a1. For example, e4 has the
    /// coordinates `(4, 3)`.
    pub const fn coordinates(self) -> (usize, usize) {
        (self.file().as_usize(), self.rank().as_usize())
    }

    /// Gets the algebraic notation of this square, such as `"e4"`.
    pub fn to_algebraic(self) -> String {
        self.to_string()
    }

    /// Gets the [SquareColor] of this square.
    pub const fn color(self) -> SquareColor {
        if (self.file().as_usize() + self.rank().as_usize()) % 2 == 0 {
            SquareColor::Dark
        }
        else {
            SquareColor::Light
        }
    }

    /// Displaces this square by the given vector.
    ///
    /// # Returns
    ///
    /// `Some(...)` with the displaced square, if it lies on the board, and
    /// `None` otherwise. Vectors of any size are accepted.
    pub fn offset(self, vector: MoveVector) -> Option<Square> {
        let file = (self.file().as_usize() as i32).checked_add(vector.dx)?;
        let rank = (self.rank().as_usize() as i32).checked_add(vector.dy)?;

        if file < 0 || rank < 0 {
            return None;
        }

        Square::new(file as usize, rank as usize).ok()
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> SquareResult<Square> {
        Square::parse(s)
    }
}

impl From<(File, Rank)> for Square {
    fn from((file, rank): (File, Rank)) -> Square {
        Square::from_file_and_rank(file, rank)
    }
}

impl From<Square> for String {
    fn from(square: Square) -> String {
        square.to_algebraic()
    }
}

impl TryFrom<String> for Square {
    type Error = SquareError;

    fn try_from(algebraic: String) -> SquareResult<Square> {
        Square::parse(&algebraic)
    }
}

/// An [Iterator] over the [Square]s contained in a [Bitboard], in ascending
/// order of index.
pub struct BitboardSquareIter {
    bitboard: Bitboard
}

impl Iterator for BitboardSquareIter {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.bitboard.is_empty() {
            None
        }
        else {
            let trailing_zeros = self.bitboard.0.trailing_zeros();
            self.bitboard.0 &= self.bitboard.0 - 1;
            Some(Square(trailing_zeros as usize))
        }
    }
}

/// A bitboard is a 64-bit data type that has one bit associated with each
/// square of a board. It is used as the set of squares a piece can reach.
///
/// Set operations are offered through operators.
///
/// * Union through the bitwise or operator (`|`, [BitOr]).
/// * Intersection through the bitwise and operator (`&`, [BitAnd]).
/// * Difference through the subtraction operator (`-`, [Sub]).
/// * Complement through the not operator (`!`, [Not]).
///
/// The [Display] implementation draws the set as a diagram with the 8th rank
/// at the top, marking contained squares with `x`.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq,
    Serialize)]
pub struct Bitboard(pub u64);

impl Bitboard {

    /// The bitboard which contains no square.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// The bitboard which contains every square.
    pub const FULL: Bitboard = Bitboard(0xffffffffffffffff);

    /// The bitboard which contains all light squares.
    pub const LIGHT_SQUARES: Bitboard = Bitboard(0x55aa55aa55aa55aa);

    /// The bitboard which contains all dark squares.
    pub const DARK_SQUARES: Bitboard = Bitboard(0xaa55aa55aa55aa55);

    /// Creates a new bitboard which contains exactly the given square.
    pub const fn singleton(square: Square) -> Bitboard {
        Bitboard(1 << square.0)
    }

    /// Creates a new bitboard which contains all squares specified by the
    /// given array.
    pub const fn of<const LEN: usize>(squares: [Square; LEN]) -> Bitboard {
        let mut result = Bitboard::EMPTY;
        let mut index = 0;

        while index < LEN {
            result = result.union(Bitboard::singleton(squares[index]));
            index += 1;
        }

        result
    }

    /// Gets a bitboard of all squares in the given file.
    pub const fn of_file(file: File) -> Bitboard {
        const OF_A_FILE: u64 = 0x0101010101010101;

        Bitboard(OF_A_FILE << file.as_usize())
    }

    /// Gets a bitboard of all squares on the given rank.
    pub const fn of_rank(rank: Rank) -> Bitboard {
        const OF_RANK_1: u64 = 0x00000000000000ff;

        Bitboard(OF_RANK_1 << (rank.as_usize() * BOARD_WIDTH))
    }

    /// Gets the bitboard of all squares of the given color.
    pub const fn of_color(color: SquareColor) -> Bitboard {
        match color {
            SquareColor::Light => Bitboard::LIGHT_SQUARES,
            SquareColor::Dark => Bitboard::DARK_SQUARES
        }
    }

    /// Gets the number of squares contained in this bitboard.
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Indicates whether this bitboard is empty, i.e. it contains no squares.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Indicates whether the given square is contained in this bitboard.
    pub fn contains(self, square: Square) -> bool {
        (self.0 & (1u64 << square.0)) != 0
    }

    /// Indicates whether every square of this bitboard is also contained in
    /// `other`.
    pub fn is_subset(self, other: Bitboard) -> bool {
        self & other == self
    }

    /// Creates an iterator over all squares contained in this bitboard, in
    /// ascending order of index.
    pub fn squares(self) -> BitboardSquareIter {
        BitboardSquareIter {
            bitboard: self
        }
    }

    /// Computes the union of this and the given other bitboard. Also
    /// accessible through the operator [BitOr].
    #[inline]
    pub const fn union(self, other: Bitboard) -> Bitboard {
        Bitboard(self.0 | other.0)
    }

    /// Computes the intersection of this and the given other bitboard. Also
    /// accessible through the operator [BitAnd].
    #[inline]
    pub const fn intersection(self, other: Bitboard) -> Bitboard {
        Bitboard(self.0 & other.0)
    }

    /// Computes the difference between this and the given other bitboard,
    /// containing all squares which are contained in this one, but not the
    /// `other`. Also accessible through the operator [Sub].
    #[inline]
    pub const fn difference(self, other: Bitboard) -> Bitboard {
        Bitboard(self.0 & !other.0)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    fn bitor(self, rhs: Bitboard) -> Bitboard {
        self.union(rhs)
    }
}

impl BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Bitboard) {
        *self = *self | rhs;
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;

    fn bitand(self, rhs: Bitboard) -> Bitboard {
        self.intersection(rhs)
    }
}

impl BitAndAssign for Bitboard {
    fn bitand_assign(&mut self, rhs: Bitboard) {
        *self = *self & rhs;
    }
}

impl Sub for Bitboard {
    type Output = Bitboard;

    fn sub(self, rhs: Bitboard) -> Bitboard {
        self.difference(rhs)
    }
}

impl SubAssign for Bitboard {
    fn sub_assign(&mut self, rhs: Bitboard) {
        *self = *self - rhs;
    }
}

impl Not for Bitboard {
    type Output = Bitboard;

    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Bitboard {
        iter.into_iter()
            .fold(Bitboard::EMPTY, |acc, square| acc | Bitboard::singleton(square))
    }
}

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for rank in Rank::RANKS.iter().rev() {
            write!(f, "{} ", rank)?;

            for file in File::FILES {
                let square = Square::from_file_and_rank(file, *rank);
                let c = if self.contains(square) { 'x' } else { '.' };

                write!(f, " {}", c)?;
            }

            writeln!(f)?;
        }

        write!(f, " ")?;

        for file in File::FILES {
            write!(f, " {}", file)?;
        }

        Ok(())
    }
}
