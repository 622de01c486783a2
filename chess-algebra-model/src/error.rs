//! This module defines all error types that can occur in this crate. All
//! computations are pure, so the only failure modes are invalid inputs.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// An enumeration of the different errors that can occur when constructing or
/// parsing [Square](crate::board::Square)s.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SquareError {

    /// Indicates that a square in algebraic notation did not consist of
    /// exactly two characters. The full input is provided.
    WrongLength(String),

    /// Indicates that the first character of a square in algebraic notation
    /// was not a file letter between `'a'` and `'h'`. The character in
    /// question is provided.
    InvalidFile(char),

    /// Indicates that the second character of a square in algebraic notation
    /// was not a rank digit between `'1'` and `'8'`. The character in question
    /// is provided.
    InvalidRank(char),

    /// Indicates that a square was constructed with a file index that does
    /// not fit on the board. The index in question is provided.
    FileOutOfBounds(usize),

    /// Indicates that a square was constructed with a rank index that does
    /// not fit on the board. The index in question is provided.
    RankOutOfBounds(usize)
}

impl Display for SquareError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::WrongLength(square) =>
                write!(f, "expected a file letter and a rank digit, but got \
                    \"{}\"", square),
            SquareError::InvalidFile(c) =>
                write!(f, "invalid file char: \'{}\'", c),
            SquareError::InvalidRank(c) =>
                write!(f, "invalid rank char: \'{}\'", c),
            SquareError::FileOutOfBounds(file) =>
                write!(f, "file index {} out of bounds", file),
            SquareError::RankOutOfBounds(rank) =>
                write!(f, "rank index {} out of bounds", rank)
        }
    }
}

impl Error for SquareError { }

/// Syntactic sugar for `Result<T, SquareError>`.
pub type SquareResult<T = ()> = Result<T, SquareError>;

/// An enumeration of the errors that can occur when reading
/// [Piece](crate::piece::Piece)s from their character abbreviations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PieceError {

    /// Indicates that a character does not abbreviate any piece. The
    /// character in question is provided.
    InvalidPiece(char)
}

impl Display for PieceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PieceError::InvalidPiece(c) =>
                write!(f, "invalid piece char: \'{}\'", c)
        }
    }
}

impl Error for PieceError { }

/// Syntactic sugar for `Result<T, PieceError>`.
pub type PieceResult<T = ()> = Result<T, PieceError>;

/// An enumeration of the errors that can occur when building payoff matrices
/// and strategies in the [game_theory](crate::game_theory) module.
#[derive(Clone, Debug, PartialEq)]
pub enum GameTheoryError {

    /// Indicates that a payoff matrix without rows or without columns was
    /// requested.
    EmptyMatrix,

    /// Indicates that the number of payoff rows differs from the number of
    /// row labels.
    RowCountMismatch {

        /// The number of row labels.
        labels: usize,

        /// The number of payoff rows.
        rows: usize
    },

    /// Indicates that some payoff row has a different number of entries than
    /// there are column labels.
    ColumnCountMismatch {

        /// The index of the offending payoff row.
        row: usize,

        /// The number of column labels.
        expected: usize,

        /// The number of entries in the offending row.
        actual: usize
    },

    /// Indicates that a payoff is not a finite number.
    InvalidPayoff {

        /// The row of the offending payoff.
        row: usize,

        /// The column of the offending payoff.
        column: usize,

        /// The offending payoff.
        value: f64
    },

    /// Indicates that two vectors or a vector and a matrix that are combined
    /// have incompatible sizes.
    DimensionMismatch {

        /// The size that was required.
        expected: usize,

        /// The size that was provided.
        actual: usize
    },

    /// Indicates that a probability was negative or not a finite number. The
    /// offending value is provided.
    InvalidProbability(f64),

    /// Indicates that the probabilities of a distribution do not sum to one.
    /// The actual sum is provided.
    ProbabilitySum(f64)
}

impl Display for GameTheoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GameTheoryError::EmptyMatrix =>
                write!(f, "payoff matrix must have at least one row and one \
                    column"),
            GameTheoryError::RowCountMismatch { labels, rows } =>
                write!(f, "{} row labels, but {} payoff rows", labels, rows),
            GameTheoryError::ColumnCountMismatch { row, expected, actual } =>
                write!(f, "payoff row {} has {} entries, but there are {} \
                    column labels", row, actual, expected),
            GameTheoryError::InvalidPayoff { row, column, value } =>
                write!(f, "payoff at row {}, column {} is not finite: {}", row,
                    column, value),
            GameTheoryError::DimensionMismatch { expected, actual } =>
                write!(f, "expected dimension {}, but got {}", expected,
                    actual),
            GameTheoryError::InvalidProbability(p) =>
                write!(f, "invalid probability: {}", p),
            GameTheoryError::ProbabilitySum(sum) =>
                write!(f, "probabilities must sum to 1, but sum to {}", sum)
        }
    }
}

impl Error for GameTheoryError { }

/// Syntactic sugar for `Result<T, GameTheoryError>`.
pub type GameTheoryResult<T = ()> = Result<T, GameTheoryError>;
