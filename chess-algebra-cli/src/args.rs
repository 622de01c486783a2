use chess_algebra_model::board::Square;
use chess_algebra_model::distance::Metric;

use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
pub(crate) enum Command {

    /// Converts squares from algebraic notation to 0-based (file, rank)
    /// coordinates and back, and shows their color.
    Coordinates {

        /// The squares to convert, in algebraic notation.
        #[clap(default_values = &["e4", "d4", "e5", "f3", "a1", "h8"])]
        squares: Vec<Square>
    },

    /// Shows how many squares each piece reaches from one square on an empty
    /// board.
    Pieces {

        /// The square on which the pieces stand.
        #[clap(long, default_value = "e4")]
        square: Square
    },

    /// Lists the L-shaped knight vectors and their Manhattan norm.
    Knight,

    /// Lists diagonal bishop vectors up to a given length.
    Bishop {

        /// The largest step length that is listed, from 1 to 7.
        #[clap(long, default_value = "4",
            value_parser = clap::value_parser!(i32).range(1..=7))]
        max_step: i32
    },

    /// Computes Euclidean distances from one square to others.
    Distance {

        /// The square from which distances are measured.
        #[clap(long, default_value = "e4")]
        from: Square,

        /// The squares to which distances are measured.
        #[clap(default_values = &["e4", "d4", "e5", "d5", "f6", "a1", "h8"])]
        to: Vec<Square>
    },

    /// Draws the distances of all squares from one origin.
    HeatMap {

        /// The origin of the heat map.
        #[clap(long, default_value = "e4")]
        from: Square,

        /// The metric to use: euclidean, manhattan, or chebyshev.
        #[clap(long, default_value = "euclidean")]
        metric: Metric
    },

    /// Classifies the movement vector between two squares.
    Classify {
        from: Square,
        to: Square
    },

    /// Finds the minimum number of moves a piece needs between two squares
    /// on an empty board.
    Path {

        /// The piece abbreviation (P, N, B, R, Q, K). Upper case for White,
        /// lower case for Black, which matters only for pawns.
        #[clap(long)]
        piece: char,

        from: Square,

        to: Square
    },

    /// Shows the one-hot position vector of a square and the properties of
    /// the distance matrix.
    Vectors {

        /// The square whose position vector is shown.
        #[clap(long, default_value = "e4")]
        square: Square
    },

    /// Analyzes the toy payoff matrix of opening moves.
    GameTheory {

        /// Print the analysis as JSON instead of text.
        #[clap(long)]
        json: bool
    },

    /// Runs the coordinate, piece, knight, bishop, distance, vector, and game
    /// theory demonstrations in sequence.
    Demo
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub(crate) struct Args {

    /// The log filter used if `RUST_LOG` is not set, for example `debug` or
    /// `chess_algebra_model=trace`.
    #[clap(long, default_value = "warn")]
    pub(crate) log_filter: String,

    #[clap(subcommand)]
    pub(crate) command: Command
}
