use chess_algebra_model::error::{GameTheoryError, PieceError, SquareError};

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io;

/// An enumeration of everything that can go wrong while running a command.
#[derive(Debug)]
pub(crate) enum CliError {

    /// A square was given in invalid algebraic notation.
    Square(SquareError),

    /// A piece abbreviation was invalid.
    Piece(PieceError),

    /// A payoff matrix or strategy could not be analyzed.
    GameTheory(GameTheoryError),

    /// The JSON report could not be written.
    Json(serde_json::Error),

    /// Writing the output failed.
    Io(io::Error)
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Square(e) => write!(f, "invalid square: {}", e),
            CliError::Piece(e) => write!(f, "invalid piece: {}", e),
            CliError::GameTheory(e) => write!(f, "game theory error: {}", e),
            CliError::Json(e) => write!(f, "error writing JSON: {}", e),
            CliError::Io(e) => write!(f, "error writing output: {}", e)
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CliError::Square(e) => Some(e),
            CliError::Piece(e) => Some(e),
            CliError::GameTheory(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e)
        }
    }
}

impl From<SquareError> for CliError {
    fn from(e: SquareError) -> CliError {
        CliError::Square(e)
    }
}

impl From<PieceError> for CliError {
    fn from(e: PieceError) -> CliError {
        CliError::Piece(e)
    }
}

impl From<GameTheoryError> for CliError {
    fn from(e: GameTheoryError) -> CliError {
        CliError::GameTheory(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> CliError {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> CliError {
        CliError::Io(e)
    }
}

/// Syntactic sugar for `Result<T, CliError>`.
pub(crate) type CliResult<T = ()> = Result<T, CliError>;
