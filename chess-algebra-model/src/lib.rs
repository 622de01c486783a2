//! This crate contains the mathematics behind illustrations of Chess as
//! algebra: square coordinates and algebraic notation, movement vectors and
//! their classification, distance metrics, empty-board reach sets and move
//! graphs, and toy game theory on payoff matrices.
//!
//! It does not play Chess. There is no legality checking, no notion of check,
//! and no search; everything here only illustrates definitions.

pub mod board;
pub mod distance;
pub mod error;
pub mod game_theory;
pub mod graph;
pub mod piece;
pub mod player;
pub mod reach;
pub mod vector;
