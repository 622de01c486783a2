//! This module views the board as a directed graph for a single piece: the
//! squares are vertices and there is an edge from `a` to `b` whenever the
//! piece [reaches](crate::reach::reachable) `b` from `a` on an empty board.
//! Path lengths in this graph are move counts.

use crate::board::{SQUARE_COUNT, Square};
use crate::piece::Piece;
use crate::player::Player;
use crate::reach;

use std::collections::VecDeque;

/// Runs a breadth-first search from `from` and returns, for every square, the
/// predecessor on some shortest path, if the square was visited. The origin is
/// its own predecessor.
fn search(piece: Piece, player: Player, from: Square, to: Square)
        -> [Option<Square>; SQUARE_COUNT] {
    let mut predecessors = [None; SQUARE_COUNT];
    let mut queue = VecDeque::new();
    let mut expanded = 0usize;

    predecessors[from.index()] = Some(from);
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            break;
        }

        expanded += 1;

        for next in reach::reachable(piece, player, current).squares() {
            if predecessors[next.index()].is_none() {
                predecessors[next.index()] = Some(current);
                queue.push_back(next);
            }
        }
    }

    tracing::trace!(%piece, %from, %to, expanded, "move graph search finished");

    predecessors
}

/// Computes one shortest sequence of squares along which the given piece
/// travels from `from` to `to` on an empty board.
///
/// # Returns
///
/// `Some(...)` with the squares of the path, starting with `from` and ending
/// with `to`, if `to` is reachable at all. The path of a square to itself
/// consists of that square only. `None` if `to` cannot be reached, for
/// example for a bishop targeting a square of the other color.
pub fn shortest_path(piece: Piece, player: Player, from: Square, to: Square)
        -> Option<Vec<Square>> {
    let predecessors = search(piece, player, from, to);

    if predecessors[to.index()].is_none() {
        return None;
    }

    let mut path = vec![to];
    let mut current = to;

    while current != from {
        current = predecessors[current.index()]?;
        path.push(current);
    }

    path.reverse();
    Some(path)
}

/// Computes the minimum number of moves the given piece needs to travel from
/// `from` to `to` on an empty board.
///
/// # Returns
///
/// `Some(0)` if both squares are the same, `Some(n)` for a minimum of `n`
/// moves, and `None` if `to` cannot be reached.
pub fn move_distance(piece: Piece, player: Player, from: Square, to: Square)
        -> Option<u32> {
    shortest_path(piece, player, from, to).map(|path| path.len() as u32 - 1)
}

/// Counts the directed edges of the move graph of the given piece, i.e. the
/// total number of (origin, target) pairs over all squares.
pub fn edge_count(piece: Piece, player: Player) -> u32 {
    Square::ALL.iter()
        .map(|&square| reach::reachable(piece, player, square).len())
        .sum()
}

#[cfg(test)]
mod tests {

    use kernal::prelude::*;

    use rstest::rstest;

    use super::*;

    use crate::board::locations::*;

    #[rstest]
    #[case::knight_same_square(Piece::Knight, E4, E4, Some(0))]
    #[case::knight_single_jump(Piece::Knight, G1, F3, Some(1))]
    #[case::knight_corner_to_corner(Piece::Knight, A1, H8, Some(6))]
    #[case::knight_diagonal_neighbor(Piece::Knight, A1, B2, Some(4))]
    #[case::bishop_same_color(Piece::Bishop, C1, H6, Some(1))]
    #[case::bishop_two_moves(Piece::Bishop, C1, C3, Some(2))]
    #[case::bishop_other_color(Piece::Bishop, C1, C2, None)]
    #[case::rook_two_moves(Piece::Rook, A1, H8, Some(2))]
    #[case::queen_two_moves(Piece::Queen, A1, B3, Some(2))]
    #[case::king_corner_to_corner(Piece::King, A1, H8, Some(7))]
    fn move_distances(#[case] piece: Piece, #[case] from: Square,
            #[case] to: Square, #[case] expected: Option<u32>) {
        assert_that!(move_distance(piece, Player::White, from, to))
            .is_equal_to(expected);
    }

    #[rstest]
    #[case::white_double_step(Player::White, E2, E4, Some(1))]
    #[case::white_long_march(Player::White, E2, E8, Some(5))]
    #[case::white_backwards(Player::White, E4, E2, None)]
    #[case::black_double_step(Player::Black, D7, D5, Some(1))]
    fn pawn_move_distances(#[case] player: Player, #[case] from: Square,
            #[case] to: Square, #[case] expected: Option<u32>) {
        assert_that!(move_distance(Piece::Pawn, player, from, to))
            .is_equal_to(expected);
    }

    #[test]
    fn shortest_path_consists_of_moves() {
        let path = shortest_path(Piece::Knight, Player::White, A1, H8).unwrap();

        assert_that!(path.len()).is_equal_to(7);
        assert_that!(path[0]).is_equal_to(A1);
        assert_that!(path[6]).is_equal_to(H8);

        for step in path.windows(2) {
            assert!(reach::reachable(Piece::Knight, Player::White, step[0])
                .contains(step[1]));
        }
    }

    #[test]
    fn shortest_path_to_unreachable_square() {
        assert_that!(shortest_path(Piece::Bishop, Player::White, A1, A2))
            .is_none();
    }

    #[rstest]
    #[case::knight(Piece::Knight, 336)]
    #[case::bishop(Piece::Bishop, 560)]
    #[case::rook(Piece::Rook, 896)]
    #[case::queen(Piece::Queen, 1456)]
    #[case::king(Piece::King, 420)]
    fn edge_counts(#[case] piece: Piece, #[case] expected: u32) {
        assert_that!(edge_count(piece, Player::White)).is_equal_to(expected);
    }
}
