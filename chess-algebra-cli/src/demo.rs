use crate::error::CliResult;

use chess_algebra_model::board::{BOARD_HEIGHT, BOARD_WIDTH, File, Rank, Square};
use chess_algebra_model::distance::{
    self,
    DistanceBand,
    DistanceMatrix,
    Metric
};
use chess_algebra_model::game_theory::{
    self,
    MixedStrategy,
    PayoffMatrix,
    SaddlePoint,
    SecurityLevel
};
use chess_algebra_model::graph;
use chess_algebra_model::piece::{PIECES, Piece};
use chess_algebra_model::player::Player;
use chess_algebra_model::reach;
use chess_algebra_model::vector::{KNIGHT_JUMPS, MoveVector};

use serde::Serialize;

use std::io::Write;

const BANNER_WIDTH: usize = 50;
const SAMPLE_SIZE: usize = 5;
const EQUILIBRIUM_TOLERANCE: f64 = 1e-9;

/// The pieces that can be captured, i.e. all but the king.
const CAPTURABLE_PIECES: [Piece; 5] = [
    Piece::Pawn,
    Piece::Knight,
    Piece::Bishop,
    Piece::Rook,
    Piece::Queen
];

/// The pieces shown by [pieces], in display order.
const SHOWN_PIECES: [Piece; 5] = [
    Piece::Knight,
    Piece::Bishop,
    Piece::Rook,
    Piece::Queen,
    Piece::King
];

pub(crate) fn banner<W: Write>(out: &mut W, title: &str) -> CliResult {
    let line = "=".repeat(BANNER_WIDTH);

    writeln!(out, "{}", line)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", line)?;
    Ok(())
}

fn join<T: ToString>(items: impl IntoIterator<Item = T>, separator: &str)
        -> String {
    items.into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

pub(crate) fn coordinates<W: Write>(out: &mut W, squares: &[Square])
        -> CliResult {
    for &square in squares {
        let (file, rank) = square.coordinates();
        let round_trip = Square::new(file, rank)?;

        writeln!(out, "{} -> ({}, {}) -> {} ({})", square, file, rank,
            round_trip, square.color())?;
    }

    Ok(())
}

pub(crate) fn pieces<W: Write>(out: &mut W, square: Square) -> CliResult {
    for piece in SHOWN_PIECES {
        let targets = reach::reachable_squares(piece, Player::White, square);
        let control = reach::center_control(piece, Player::White, square);

        writeln!(out, "{} at {}: {} possible moves, {} central squares \
            controlled", piece, square, targets.len(), control)?;
        writeln!(out, "  Sample moves: {}",
            join(targets.iter().take(SAMPLE_SIZE), ", "))?;
        writeln!(out, "{}", reach::reachable(piece, Player::White, square))?;
        writeln!(out)?;
    }

    Ok(())
}

pub(crate) fn knight<W: Write>(out: &mut W) -> CliResult {
    writeln!(out, "Knight movement vectors:")?;

    for jump in KNIGHT_JUMPS {
        writeln!(out, "  {}", jump)?;
    }

    writeln!(out)?;
    writeln!(out, "Mathematical property: |dx| + |dy| = 3")?;

    for jump in KNIGHT_JUMPS {
        writeln!(out, "  |{}| + |{}| = {} + {} = {}", jump.dx, jump.dy,
            jump.dx.abs(), jump.dy.abs(), jump.manhattan())?;
    }

    Ok(())
}

pub(crate) fn bishop_vectors(max_step: i32) -> Vec<MoveVector> {
    (1..=max_step)
        .flat_map(|i| [
            MoveVector::new(i, i),
            MoveVector::new(i, -i),
            MoveVector::new(-i, i),
            MoveVector::new(-i, -i)
        ])
        .collect()
}

pub(crate) fn bishop<W: Write>(out: &mut W, max_step: i32) -> CliResult {
    let vectors = bishop_vectors(max_step);

    writeln!(out, "Bishop movement vectors:")?;

    for vector in &vectors {
        writeln!(out, "  {}", vector)?;
    }

    writeln!(out)?;
    writeln!(out, "Mathematical property: |dx| = |dy|")?;

    for vector in &vectors {
        writeln!(out, "  |{}| = |{}| = {}", vector.dx, vector.dy,
            vector.dx.abs())?;
    }

    Ok(())
}

pub(crate) fn distance<W: Write>(out: &mut W, from: Square, to: &[Square])
        -> CliResult {
    let (file, rank) = from.coordinates();

    writeln!(out, "Distances from {} ({}, {}):", from, file, rank)?;

    for &target in to {
        let vector = MoveVector::between(from, target);

        writeln!(out, "  {} -> {}: distance = {:.2} (dx={}, dy={})", from,
            target, vector.euclidean(), vector.dx, vector.dy)?;
    }

    Ok(())
}

pub(crate) fn heat_map<W: Write>(out: &mut W, from: Square, metric: Metric)
        -> CliResult {
    let map = distance::heat_map(from, metric);

    writeln!(out, "{} distances from {}:", metric, from)?;

    for rank in (0..BOARD_HEIGHT).rev() {
        write!(out, "{} ", Rank::RANKS[rank])?;

        for file in 0..BOARD_WIDTH {
            write!(out, " {:5.2}", map[rank][file])?;
        }

        writeln!(out)?;
    }

    write!(out, "  ")?;

    for file in File::FILES {
        write!(out, " {:>5}", file)?;
    }

    writeln!(out)?;

    if metric == Metric::Euclidean {
        writeln!(out)?;
        writeln!(out, "Bands (@ origin, # <= 1, + <= 2, - <= 3, . farther):")?;

        for rank in (0..BOARD_HEIGHT).rev() {
            let symbols = map[rank].iter()
                .map(|&d| DistanceBand::of(d).symbol());

            writeln!(out, "{}  {}", Rank::RANKS[rank], join(symbols, " "))?;
        }
    }

    Ok(())
}

pub(crate) fn classify<W: Write>(out: &mut W, from: Square, to: Square)
        -> CliResult {
    let vector = MoveVector::between(from, to);
    let patterns = vector.patterns();

    writeln!(out, "{} -> {}: vector {}", from, to, vector)?;
    writeln!(out, "  Manhattan norm: {}", vector.manhattan())?;
    writeln!(out, "  Chebyshev norm: {}", vector.chebyshev())?;
    writeln!(out, "  Euclidean norm: {:.2}", vector.euclidean())?;

    if patterns.is_empty() {
        writeln!(out, "  Movement patterns: none")?;
    }
    else {
        writeln!(out, "  Movement patterns: {}", join(patterns, ", "))?;
    }

    Ok(())
}

pub(crate) fn path<W: Write>(out: &mut W, piece_char: char, from: Square,
        to: Square) -> CliResult {
    let piece = Piece::from_char(piece_char)?;
    let player = Player::from_piece_char(piece_char);

    tracing::debug!(%piece, %player, %from, %to, "searching move graph");

    match graph::shortest_path(piece, player, from, to) {
        Some(path) => {
            writeln!(out, "{} {} needs {} move(s) from {} to {}", player,
                piece, path.len() - 1, from, to)?;
            writeln!(out, "  Path: {}", join(path, " -> "))?;
        },
        None => {
            writeln!(out, "{} {} cannot reach {} from {}", player, piece, to,
                from)?;
        }
    }

    Ok(())
}

pub(crate) fn vectors<W: Write>(out: &mut W, square: Square) -> CliResult {
    let vector = distance::one_hot(square);
    let matrix = DistanceMatrix::new(Metric::Euclidean);
    let (rows, columns) = matrix.shape();

    writeln!(out, "{} vector (first 16 elements): [{}]", square,
        join(vector.iter().take(16), ", "))?;
    writeln!(out, "{} vector sum: {} (should be 1)", square,
        vector.iter().sum::<f64>())?;
    writeln!(out, "Distance matrix shape: ({}, {})", rows, columns)?;
    writeln!(out, "Distance matrix min: {:.2}", matrix.min())?;
    writeln!(out, "Distance matrix max: {:.2}", matrix.max())?;
    Ok(())
}

#[derive(Debug, Serialize)]
pub(crate) struct PieceValue {
    piece: &'static str,
    value: u32
}

#[derive(Debug, Serialize)]
pub(crate) struct GameTheoryReport {
    piece_values: Vec<PieceValue>,
    expected_capture_value: f64,
    matrix: PayoffMatrix,
    maximin: SecurityLevel,
    minimax: SecurityLevel,
    pure_equilibria: Vec<SaddlePoint>,
    uniform_value: f64,
    uniform_is_equilibrium: bool
}

impl GameTheoryReport {

    pub(crate) fn analyze(matrix: PayoffMatrix) -> CliResult<GameTheoryReport> {
        let rows = MixedStrategy::uniform(matrix.row_count())?;
        let columns = MixedStrategy::uniform(matrix.column_count())?;
        let uniform_value = matrix.expected_payoff(&rows, &columns)?;
        let uniform_is_equilibrium =
            matrix.is_equilibrium(&rows, &columns, EQUILIBRIUM_TOLERANCE)?;
        let captures = MixedStrategy::uniform(CAPTURABLE_PIECES.len())?;
        let capture_values = CAPTURABLE_PIECES.iter()
            .map(|piece| piece.value() as f64)
            .collect::<Vec<_>>();
        let expected_capture_value = game_theory::expected_value(
            captures.probabilities(), &capture_values)?;
        let piece_values = PIECES.iter()
            .map(|piece| PieceValue {
                piece: piece.name(),
                value: piece.value()
            })
            .collect();

        Ok(GameTheoryReport {
            piece_values,
            expected_capture_value,
            maximin: matrix.maximin(),
            minimax: matrix.minimax(),
            pure_equilibria: matrix.pure_equilibria(),
            matrix,
            uniform_value,
            uniform_is_equilibrium
        })
    }
}

pub(crate) fn game_theory<W: Write>(out: &mut W, json: bool) -> CliResult {
    let report = GameTheoryReport::analyze(PayoffMatrix::opening())?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    let matrix = &report.matrix;

    writeln!(out, "Piece values:")?;

    for entry in &report.piece_values {
        writeln!(out, "  {:<8}{:>4}", entry.piece, entry.value)?;
    }

    writeln!(out, "Expected Value = Σ(Probability × Value)")?;
    writeln!(out, "Expected value of a uniformly random capture (king \
        excluded): {:.2}", report.expected_capture_value)?;
    writeln!(out)?;
    writeln!(out, "Opening move payoff matrix (White perspective):")?;
    writeln!(out, "{}", matrix)?;
    writeln!(out)?;
    writeln!(out, "White's maximin: {} with {}", report.maximin.value,
        matrix.row_labels()[report.maximin.strategy])?;
    writeln!(out, "Black's minimax: {} with {}", report.minimax.value,
        matrix.column_labels()[report.minimax.strategy])?;

    if report.pure_equilibria.is_empty() {
        writeln!(out, "Pure Nash equilibria: none")?;
    }
    else {
        for saddle in &report.pure_equilibria {
            writeln!(out, "Pure Nash equilibrium: {} / {} with value {}",
                matrix.row_labels()[saddle.row],
                matrix.column_labels()[saddle.column], saddle.value)?;
        }
    }

    writeln!(out, "Uniform mixed strategies: expected value {:.2}, {}",
        report.uniform_value,
        if report.uniform_is_equilibrium {
            "a Nash equilibrium"
        }
        else {
            "not an equilibrium"
        })?;
    Ok(())
}

pub(crate) fn demo<W: Write>(out: &mut W) -> CliResult {
    let coordinate_squares = ["e4", "d4", "e5", "f3", "a1", "h8"];
    let distance_squares = ["e4", "d4", "e5", "d5", "f6", "a1", "h8"];
    let e4 = Square::parse("e4")?;

    writeln!(out, "CHESS ALGEBRA DEMONSTRATION")?;
    writeln!(out, "Mathematical Analysis of Chess Concepts")?;
    writeln!(out)?;

    banner(out, "CHESS COORDINATE SYSTEM")?;
    coordinates(out, &parse_all(&coordinate_squares)?)?;
    writeln!(out)?;

    banner(out, "PIECE MOVEMENT VECTORS")?;
    pieces(out, e4)?;

    banner(out, "KNIGHT MATHEMATICS")?;
    knight(out)?;
    writeln!(out)?;

    banner(out, "BISHOP MATHEMATICS")?;
    bishop(out, 4)?;
    writeln!(out)?;

    banner(out, "DISTANCE ANALYSIS")?;
    distance(out, e4, &parse_all(&distance_squares)?)?;
    writeln!(out)?;

    banner(out, "VECTOR REPRESENTATIONS")?;
    vectors(out, e4)?;
    writeln!(out)?;

    banner(out, "GAME THEORY CONCEPTS")?;
    game_theory(out, false)?;
    writeln!(out)?;

    banner(out, "DEMONSTRATION COMPLETE")?;
    Ok(())
}

fn parse_all(squares: &[&str]) -> CliResult<Vec<Square>> {
    Ok(squares.iter()
        .map(|square| Square::parse(square))
        .collect::<Result<Vec<_>, _>>()?)
}
