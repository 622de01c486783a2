//! This module contains toy zero-sum game theory on payoff matrices, used to
//! illustrate strategic choices such as the choice of an opening move. The
//! payoffs are always given from the perspective of the row player, who wants
//! to maximize them, while the column player wants to minimize them.

use crate::error::{GameTheoryError, GameTheoryResult};

use rand::Rng;

use serde::Serialize;

use std::fmt;
use std::fmt::{Display, Formatter};

const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// A probability distribution over the strategies of one player.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MixedStrategy(Vec<f64>);

impl MixedStrategy {

    /// Creates a new mixed strategy from the probabilities of the individual
    /// pure strategies.
    ///
    /// # Errors
    ///
    /// * [GameTheoryError::InvalidProbability] if any probability is negative
    /// or not finite.
    /// * [GameTheoryError::ProbabilitySum] if the probabilities do not sum to
    /// one (up to a tolerance of `1e-9`). In particular, this is the case for
    /// an empty list.
    pub fn new(probabilities: Vec<f64>) -> GameTheoryResult<MixedStrategy> {
        if let Some(&p) = probabilities.iter()
                .find(|p| !p.is_finite() || **p < 0.0) {
            return Err(GameTheoryError::InvalidProbability(p));
        }

        let sum = probabilities.iter().sum::<f64>();

        if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(GameTheoryError::ProbabilitySum(sum));
        }

        Ok(MixedStrategy(probabilities))
    }

    /// Creates the mixed strategy which chooses each of `len` pure strategies
    /// with the same probability.
    ///
    /// # Errors
    ///
    /// [GameTheoryError::ProbabilitySum] if `len` is zero.
    pub fn uniform(len: usize) -> GameTheoryResult<MixedStrategy> {
        MixedStrategy::new(vec![1.0 / len as f64; len])
    }

    /// Creates the mixed strategy which always chooses the pure strategy with
    /// index `strategy` out of `len`.
    ///
    /// # Errors
    ///
    /// [GameTheoryError::DimensionMismatch] if `strategy` is not less than
    /// `len`, i.e. at least `strategy + 1` strategies would be required.
    pub fn pure(strategy: usize, len: usize) -> GameTheoryResult<MixedStrategy> {
        if strategy >= len {
            return Err(GameTheoryError::DimensionMismatch {
                expected: strategy + 1,
                actual: len
            });
        }

        let mut probabilities = vec![0.0; len];
        probabilities[strategy] = 1.0;
        Ok(MixedStrategy(probabilities))
    }

    /// The probabilities of the individual pure strategies.
    pub fn probabilities(&self) -> &[f64] {
        &self.0
    }

    /// The number of pure strategies.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Indicates whether there are no pure strategies. This is never the case
    /// for validated strategies.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Draws the index of a pure strategy according to the probabilities.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let mut remaining = rng.gen::<f64>();

        for (index, &p) in self.0.iter().enumerate() {
            if remaining < p {
                return index;
            }

            remaining -= p;
        }

        // Rounding may leave a tiny remainder; fall back to the last strategy
        // that can be chosen at all.
        self.0.iter().rposition(|&p| p > 0.0).unwrap_or(0)
    }
}

/// The guaranteed payoff of one player together with the pure strategy that
/// guarantees it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SecurityLevel {

    /// The payoff that can be guaranteed.
    pub value: f64,

    /// The index of the pure strategy that guarantees `value`.
    pub strategy: usize
}

/// A pure-strategy equilibrium of a zero-sum game, i.e. a cell that is the
/// minimum of its row and the maximum of its column.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SaddlePoint {

    /// The index of the row strategy.
    pub row: usize,

    /// The index of the column strategy.
    pub column: usize,

    /// The payoff in the cell, i.e. the value of the game.
    pub value: f64
}

/// A matrix of payoffs for a two-player zero-sum game with labelled
/// strategies. Entry `(i, j)` is the payoff for the row player if the row
/// player chooses strategy `i` and the column player chooses strategy `j`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PayoffMatrix {
    row_labels: Vec<String>,
    column_labels: Vec<String>,
    payoffs: Vec<Vec<f64>>
}

impl PayoffMatrix {

    /// Creates a new payoff matrix.
    ///
    /// # Arguments
    ///
    /// * `row_labels`: The names of the strategies of the row player.
    /// * `column_labels`: The names of the strategies of the column player.
    /// * `payoffs`: One row of payoffs per row label, each with one entry per
    /// column label.
    ///
    /// # Errors
    ///
    /// * [GameTheoryError::EmptyMatrix] if there are no row or no column
    /// labels.
    /// * [GameTheoryError::RowCountMismatch] if the number of payoff rows is
    /// different from the number of row labels.
    /// * [GameTheoryError::ColumnCountMismatch] if some payoff row has a
    /// different length than the number of column labels.
    /// * [GameTheoryError::InvalidPayoff] if some payoff is infinite or NaN.
    pub fn new<R, C>(row_labels: Vec<R>, column_labels: Vec<C>,
        payoffs: Vec<Vec<f64>>) -> GameTheoryResult<PayoffMatrix>
    where
        R: Into<String>,
        C: Into<String>
    {
        if row_labels.is_empty() || column_labels.is_empty() {
            return Err(GameTheoryError::EmptyMatrix);
        }

        if payoffs.len() != row_labels.len() {
            return Err(GameTheoryError::RowCountMismatch {
                labels: row_labels.len(),
                rows: payoffs.len()
            });
        }

        if let Some((row, entries)) = payoffs.iter()
                .enumerate()
                .find(|(_, entries)| entries.len() != column_labels.len()) {
            return Err(GameTheoryError::ColumnCountMismatch {
                row,
                expected: column_labels.len(),
                actual: entries.len()
            });
        }

        for (row, entries) in payoffs.iter().enumerate() {
            if let Some((column, &value)) = entries.iter()
                    .enumerate()
                    .find(|(_, value)| !value.is_finite()) {
                return Err(GameTheoryError::InvalidPayoff { row, column, value });
            }
        }

        Ok(PayoffMatrix {
            row_labels: row_labels.into_iter().map(Into::into).collect(),
            column_labels: column_labels.into_iter().map(Into::into).collect(),
            payoffs
        })
    }

    /// The toy matrix of opening choices: White picks e4, d4, or Nf3, Black
    /// answers with e5, d5, or Nf6, and the payoff is White's expected score.
    /// Every answer is best against exactly one opening, so there is no pure
    /// equilibrium, but the uniform strategies form a mixed one.
    pub fn opening() -> PayoffMatrix {
        PayoffMatrix {
            row_labels: vec![
                "White: e4".to_owned(),
                "White: d4".to_owned(),
                "White: Nf3".to_owned()
            ],
            column_labels: vec![
                "Black: e5".to_owned(),
                "Black: d5".to_owned(),
                "Black: Nf6".to_owned()
            ],
            payoffs: vec![
                vec![0.5, 0.6, 0.4],
                vec![0.4, 0.5, 0.6],
                vec![0.6, 0.4, 0.5]
            ]
        }
    }

    /// The names of the row player's strategies.
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    /// The names of the column player's strategies.
    pub fn column_labels(&self) -> &[String] {
        &self.column_labels
    }

    /// The number of row strategies.
    pub fn row_count(&self) -> usize {
        self.row_labels.len()
    }

    /// The number of column strategies.
    pub fn column_count(&self) -> usize {
        self.column_labels.len()
    }

    /// The payoff in the given row and column, if both are in bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.payoffs.get(row)?.get(column).copied()
    }

    fn row_min(&self, row: usize) -> f64 {
        self.payoffs[row].iter().copied().fold(f64::INFINITY, f64::min)
    }

    fn column_max(&self, column: usize) -> f64 {
        self.payoffs.iter()
            .map(|entries| entries[column])
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// The security level of the row player: the row whose worst payoff is
    /// best, and that payoff. Ties are resolved in favor of the first row.
    pub fn maximin(&self) -> SecurityLevel {
        let mut best = SecurityLevel {
            value: self.row_min(0),
            strategy: 0
        };

        for row in 1..self.row_count() {
            let value = self.row_min(row);

            if value > best.value {
                best = SecurityLevel { value, strategy: row };
            }
        }

        best
    }

    /// The security level of the column player: the column whose largest
    /// payoff (i.e. worst outcome for the column player) is smallest, and
    /// that payoff. Ties are resolved in favor of the first column.
    pub fn minimax(&self) -> SecurityLevel {
        let mut best = SecurityLevel {
            value: self.column_max(0),
            strategy: 0
        };

        for column in 1..self.column_count() {
            let value = self.column_max(column);

            if value < best.value {
                best = SecurityLevel { value, strategy: column };
            }
        }

        best
    }

    /// Finds all pure-strategy equilibria, i.e. cells which are the minimum
    /// of their row and the maximum of their column, in row-major order.
    pub fn pure_equilibria(&self) -> Vec<SaddlePoint> {
        let mut result = Vec::new();

        for (row, entries) in self.payoffs.iter().enumerate() {
            let row_min = self.row_min(row);

            for (column, &value) in entries.iter().enumerate() {
                if value == row_min && value == self.column_max(column) {
                    result.push(SaddlePoint { row, column, value });
                }
            }
        }

        result
    }

    fn check_dimension(expected: usize, strategy: &MixedStrategy)
            -> GameTheoryResult {
        if strategy.len() == expected {
            Ok(())
        }
        else {
            Err(GameTheoryError::DimensionMismatch {
                expected,
                actual: strategy.len()
            })
        }
    }

    fn row_payoffs(&self, column_strategy: &MixedStrategy) -> Vec<f64> {
        self.payoffs.iter()
            .map(|entries| expected_value_unchecked(
                column_strategy.probabilities(), entries))
            .collect()
    }

    fn column_payoffs(&self, row_strategy: &MixedStrategy) -> Vec<f64> {
        (0..self.column_count())
            .map(|column| self.payoffs.iter()
                .zip(row_strategy.probabilities())
                .map(|(entries, p)| p * entries[column])
                .sum())
            .collect()
    }

    /// Computes the expected payoff if both players randomize independently
    /// according to the given mixed strategies, i.e. the sum of
    /// `p_i * q_j * a_ij` over all cells.
    ///
    /// # Errors
    ///
    /// [GameTheoryError::DimensionMismatch] if a strategy does not have
    /// exactly one probability per row or column, respectively.
    pub fn expected_payoff(&self, row_strategy: &MixedStrategy,
            column_strategy: &MixedStrategy) -> GameTheoryResult<f64> {
        PayoffMatrix::check_dimension(self.row_count(), row_strategy)?;
        PayoffMatrix::check_dimension(self.column_count(), column_strategy)?;

        let row_payoffs = self.row_payoffs(column_strategy);

        Ok(expected_value_unchecked(row_strategy.probabilities(), &row_payoffs))
    }

    /// Finds the pure row strategy with the highest expected payoff against
    /// the given column strategy. Ties are resolved in favor of the first
    /// row.
    ///
    /// # Errors
    ///
    /// [GameTheoryError::DimensionMismatch] if the strategy does not have
    /// exactly one probability per column.
    pub fn best_row_response(&self, column_strategy: &MixedStrategy)
            -> GameTheoryResult<SecurityLevel> {
        PayoffMatrix::check_dimension(self.column_count(), column_strategy)?;

        let row_payoffs = self.row_payoffs(column_strategy);
        let mut best = SecurityLevel { value: row_payoffs[0], strategy: 0 };

        for (row, &value) in row_payoffs.iter().enumerate().skip(1) {
            if value > best.value {
                best = SecurityLevel { value, strategy: row };
            }
        }

        Ok(best)
    }

    /// Finds the pure column strategy with the lowest expected payoff against
    /// the given row strategy. Ties are resolved in favor of the first
    /// column.
    ///
    /// # Errors
    ///
    /// [GameTheoryError::DimensionMismatch] if the strategy does not have
    /// exactly one probability per row.
    pub fn best_column_response(&self, row_strategy: &MixedStrategy)
            -> GameTheoryResult<SecurityLevel> {
        PayoffMatrix::check_dimension(self.row_count(), row_strategy)?;

        let column_payoffs = self.column_payoffs(row_strategy);
        let mut best = SecurityLevel { value: column_payoffs[0], strategy: 0 };

        for (column, &value) in column_payoffs.iter().enumerate().skip(1) {
            if value < best.value {
                best = SecurityLevel { value, strategy: column };
            }
        }

        Ok(best)
    }

    /// Indicates whether the given pair of mixed strategies is an
    /// equilibrium, i.e. neither player can improve their expected payoff by
    /// more than `tolerance` by switching to any pure strategy.
    ///
    /// # Errors
    ///
    /// [GameTheoryError::DimensionMismatch] if a strategy does not fit the
    /// matrix.
    pub fn is_equilibrium(&self, row_strategy: &MixedStrategy,
            column_strategy: &MixedStrategy, tolerance: f64)
            -> GameTheoryResult<bool> {
        let value = self.expected_payoff(row_strategy, column_strategy)?;
        let best_row = self.best_row_response(column_strategy)?;
        let best_column = self.best_column_response(row_strategy)?;

        Ok(best_row.value <= value + tolerance &&
            best_column.value >= value - tolerance)
    }
}

impl Display for PayoffMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label_width = self.row_labels.iter()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(0);
        let cells = self.payoffs.iter()
            .map(|entries| entries.iter()
                .map(|value| value.to_string())
                .collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let column_widths = self.column_labels.iter()
            .enumerate()
            .map(|(column, label)| cells.iter()
                .map(|entries| entries[column].chars().count())
                .chain(Some(label.chars().count()))
                .max()
                .unwrap_or(0))
            .collect::<Vec<_>>();

        write!(f, "{:label_width$}", "")?;

        for (label, width) in self.column_labels.iter().zip(&column_widths) {
            write!(f, "  {:>width$}", label, width = width)?;
        }

        for (label, entries) in self.row_labels.iter().zip(&cells) {
            writeln!(f)?;
            write!(f, "{:label_width$}", label)?;

            for (cell, width) in entries.iter().zip(&column_widths) {
                write!(f, "  {:>width$}", cell, width = width)?;
            }
        }

        Ok(())
    }
}

fn expected_value_unchecked(probabilities: &[f64], values: &[f64]) -> f64 {
    probabilities.iter()
        .zip(values)
        .map(|(p, v)| p * v)
        .sum()
}

/// Computes the expected value `Σ p_i · v_i` of a discrete random variable
/// that takes the value `values[i]` with probability `probabilities[i]`.
///
/// # Errors
///
/// [GameTheoryError::DimensionMismatch] if both slices have different
/// lengths.
pub fn expected_value(probabilities: &[f64], values: &[f64])
        -> GameTheoryResult<f64> {
    if probabilities.len() != values.len() {
        return Err(GameTheoryError::DimensionMismatch {
            expected: probabilities.len(),
            actual: values.len()
        });
    }

    Ok(expected_value_unchecked(probabilities, values))
}

#[cfg(test)]
mod tests {

    use kernal::prelude::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use rstest::rstest;

    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn matching_pennies() -> PayoffMatrix {
        PayoffMatrix::new(vec!["heads", "tails"], vec!["heads", "tails"],
            vec![vec![1.0, -1.0], vec![-1.0, 1.0]]).unwrap()
    }

    fn with_saddle_point() -> PayoffMatrix {
        PayoffMatrix::new(vec!["a", "b"], vec!["x", "y", "z"],
            vec![vec![3.0, 1.0, 4.0], vec![2.0, 0.0, -1.0]]).unwrap()
    }

    #[test]
    fn empty_matrix_is_rejected() {
        let result = PayoffMatrix::new(Vec::<String>::new(), vec!["x"], vec![]);

        assert_that!(result).contains_error(GameTheoryError::EmptyMatrix);
    }

    #[test]
    fn row_count_mismatch_is_rejected() {
        let result = PayoffMatrix::new(vec!["a", "b"], vec!["x"], vec![vec![1.0]]);

        assert_that!(result).contains_error(GameTheoryError::RowCountMismatch {
            labels: 2,
            rows: 1
        });
    }

    #[test]
    fn column_count_mismatch_is_rejected() {
        let result = PayoffMatrix::new(vec!["a", "b"], vec!["x", "y"],
            vec![vec![1.0, 2.0], vec![3.0]]);

        assert_that!(result).contains_error(GameTheoryError::ColumnCountMismatch {
            row: 1,
            expected: 2,
            actual: 1
        });
    }

    #[rstest]
    #[case::nan(vec![vec![f64::NAN], vec![0.0]], 0, 0)]
    #[case::infinite(vec![vec![1.0, 2.0], vec![3.0, f64::NEG_INFINITY]], 1, 1)]
    fn non_finite_payoff_is_rejected(#[case] payoffs: Vec<Vec<f64>>,
            #[case] row: usize, #[case] column: usize) {
        let labels = (0..payoffs.len()).map(|i| i.to_string()).collect();
        let columns = (0..payoffs[0].len()).map(|i| i.to_string()).collect();
        let result = PayoffMatrix::new::<String, String>(labels, columns,
            payoffs);

        match result {
            Err(GameTheoryError::InvalidPayoff { row: r, column: c, value }) => {
                assert_that!(r).is_equal_to(row);
                assert_that!(c).is_equal_to(column);
                assert!(!value.is_finite());
            },
            other => panic!("expected invalid payoff error, got {:?}", other)
        }
    }

    #[rstest]
    #[case::first(0, 3, Ok(vec![1.0, 0.0, 0.0]))]
    #[case::last(2, 3, Ok(vec![0.0, 0.0, 1.0]))]
    #[case::out_of_bounds(3, 3, Err(GameTheoryError::DimensionMismatch {
        expected: 4,
        actual: 3
    }))]
    #[case::empty(0, 0, Err(GameTheoryError::DimensionMismatch {
        expected: 1,
        actual: 0
    }))]
    fn pure_strategy(#[case] strategy: usize, #[case] len: usize,
            #[case] expected: GameTheoryResult<Vec<f64>>) {
        let result = MixedStrategy::pure(strategy, len)
            .map(|strategy| strategy.probabilities().to_vec());

        assert_that!(result).is_equal_to(expected);
    }

    #[test]
    fn opening_security_levels() {
        let matrix = PayoffMatrix::opening();

        assert_that!(matrix.maximin()).is_equal_to(SecurityLevel {
            value: 0.4,
            strategy: 0
        });
        assert_that!(matrix.minimax()).is_equal_to(SecurityLevel {
            value: 0.6,
            strategy: 0
        });
        assert!(matrix.pure_equilibria().is_empty());
    }

    #[test]
    fn saddle_point_is_found() {
        let matrix = with_saddle_point();

        assert_that!(matrix.maximin()).is_equal_to(SecurityLevel {
            value: 1.0,
            strategy: 0
        });
        assert_that!(matrix.minimax()).is_equal_to(SecurityLevel {
            value: 1.0,
            strategy: 1
        });
        assert_that!(matrix.pure_equilibria()).is_equal_to(vec![SaddlePoint {
            row: 0,
            column: 1,
            value: 1.0
        }]);
    }

    #[test]
    fn uniform_opening_strategies_form_an_equilibrium() {
        let matrix = PayoffMatrix::opening();
        let uniform = MixedStrategy::uniform(3).unwrap();
        let value = matrix.expected_payoff(&uniform, &uniform).unwrap();

        assert!((value - 0.5).abs() < TOLERANCE);
        assert_that!(matrix.is_equilibrium(&uniform, &uniform, TOLERANCE))
            .contains_value(true);
    }

    #[test]
    fn pure_strategies_are_not_an_equilibrium_of_matching_pennies() {
        let matrix = matching_pennies();
        let heads = MixedStrategy::pure(0, 2).unwrap();
        let uniform = MixedStrategy::uniform(2).unwrap();

        assert_that!(matrix.is_equilibrium(&heads, &heads, TOLERANCE))
            .contains_value(false);
        assert_that!(matrix.is_equilibrium(&uniform, &uniform, TOLERANCE))
            .contains_value(true);
        assert_that!(matrix.best_column_response(&heads).unwrap().strategy)
            .is_equal_to(1);
        assert_that!(matrix.best_row_response(&heads).unwrap().strategy)
            .is_equal_to(0);
    }

    #[test]
    fn expected_payoff_dimension_mismatch() {
        let matrix = PayoffMatrix::opening();
        let two = MixedStrategy::uniform(2).unwrap();
        let three = MixedStrategy::uniform(3).unwrap();

        assert_that!(matrix.expected_payoff(&two, &three))
            .contains_error(GameTheoryError::DimensionMismatch {
                expected: 3,
                actual: 2
            });
    }

    #[rstest]
    #[case::negative(vec![1.5, -0.5], GameTheoryError::InvalidProbability(-0.5))]
    #[case::infinite(vec![f64::INFINITY], GameTheoryError::InvalidProbability(f64::INFINITY))]
    #[case::too_small(vec![0.25, 0.25], GameTheoryError::ProbabilitySum(0.5))]
    #[case::empty(vec![], GameTheoryError::ProbabilitySum(0.0))]
    fn invalid_mixed_strategy(#[case] probabilities: Vec<f64>,
            #[case] expected: GameTheoryError) {
        assert_that!(MixedStrategy::new(probabilities)).contains_error(expected);
    }

    #[test]
    fn sampling_follows_probabilities() {
        let strategy = MixedStrategy::new(vec![0.0, 0.25, 0.75]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0usize; 3];

        for _ in 0..10_000 {
            counts[strategy.sample(&mut rng)] += 1;
        }

        assert_that!(counts[0]).is_equal_to(0);
        assert_that!(counts[1]).is_greater_than(2_000);
        assert_that!(counts[2]).is_greater_than(7_000);
    }

    #[test]
    fn expected_value_of_piece_values() {
        let probabilities = [0.5, 0.25, 0.25];
        let values = [1.0, 3.0, 9.0];

        assert_that!(expected_value(&probabilities, &values)).contains_value(3.5);
        assert_that!(expected_value(&probabilities, &values[..2]))
            .contains_error(GameTheoryError::DimensionMismatch {
                expected: 3,
                actual: 2
            });
    }

    #[test]
    fn display_aligns_columns() {
        let matrix = PayoffMatrix::new(vec!["a", "long"], vec!["x", "yy"],
            vec![vec![0.5, 1.0], vec![-2.0, 10.0]]).unwrap();

        assert_that!(matrix.to_string()).is_equal_to(
            "        x  yy\n\
             a     0.5   1\n\
             long   -2  10".to_owned());
    }
}
