use crate::args::{Args, Command};
use crate::error::CliResult;

use clap::Parser;

use std::io::{self, Write};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod args;
mod demo;
mod error;

fn init_logging(filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_writer(io::stderr))
        .init();
}

fn run<W: Write>(command: Command, out: &mut W) -> CliResult {
    match command {
        Command::Coordinates { squares } => demo::coordinates(out, &squares),
        Command::Pieces { square } => demo::pieces(out, square),
        Command::Knight => demo::knight(out),
        Command::Bishop { max_step } => demo::bishop(out, max_step),
        Command::Distance { from, to } => demo::distance(out, from, &to),
        Command::HeatMap { from, metric } => demo::heat_map(out, from, metric),
        Command::Classify { from, to } => demo::classify(out, from, to),
        Command::Path { piece, from, to } => demo::path(out, piece, from, to),
        Command::Vectors { square } => demo::vectors(out, square),
        Command::GameTheory { json } => demo::game_theory(out, json),
        Command::Demo => demo::demo(out)
    }
}

/// Reports the outcome of a command on `err` and returns the exit status of
/// the process: 0 on success and 1 on failure.
fn report<E: Write>(result: CliResult, err: &mut E) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            tracing::info!(error = ?e, "command failed");
            let _ = writeln!(err, "Error: {}", e);
            1
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(&args.log_filter);
    tracing::debug!(command = ?args.command, "running command");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = run(args.command, &mut out).and_then(|()| Ok(out.flush()?));

    ExitCode::from(report(result, &mut io::stderr()))
}

#[cfg(test)]
mod tests {

    use chess_algebra_model::board::Square;
    use chess_algebra_model::error::PieceError;

    use kernal::prelude::*;

    use super::*;

    use crate::error::CliError;

    fn square(algebraic: &str) -> Square {
        Square::parse(algebraic).unwrap()
    }

    fn invalid_path() -> Command {
        Command::Path {
            piece: 'x',
            from: square("a1"),
            to: square("h8")
        }
    }

    #[test]
    fn invalid_piece_fails_without_output() {
        let mut out = Vec::new();
        let result = run(invalid_path(), &mut out);

        assert!(matches!(result,
            Err(CliError::Piece(PieceError::InvalidPiece('x')))));
        assert_that!(out).is_empty();
    }

    #[test]
    fn failure_is_reported_with_non_zero_status() {
        let mut err = Vec::new();
        let status = report(run(invalid_path(), &mut Vec::new()), &mut err);

        assert_that!(status).is_equal_to(1);
        assert_that!(String::from_utf8(err).unwrap())
            .is_equal_to("Error: invalid piece: invalid piece char: 'x'\n"
                .to_owned());
    }

    #[test]
    fn success_is_reported_with_zero_status() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let status = report(run(Command::Knight, &mut out), &mut err);

        assert_that!(status).is_equal_to(0);
        assert_that!(out).is_not_empty();
        assert_that!(err).is_empty();
    }
}
