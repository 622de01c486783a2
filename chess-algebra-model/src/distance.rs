//! This module contains distance metrics between squares, the full distance
//! matrix between all pairs of squares, distance heat maps, and the one-hot
//! position vectors of squares.

use crate::board::{BOARD_HEIGHT, BOARD_WIDTH, SQUARE_COUNT, Square};
use crate::vector::MoveVector;

use serde::{Deserialize, Serialize};

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The Euclidean (straight line) distance between the centers of two
/// squares, `sqrt(dx² + dy²)`.
pub fn euclidean(a: Square, b: Square) -> f64 {
    MoveVector::between(a, b).euclidean()
}

/// The Manhattan (taxicab) distance between two squares, `|dx| + |dy|`. This
/// is the number of rook steps of length one needed to get from `a` to `b`.
pub fn manhattan(a: Square, b: Square) -> u32 {
    MoveVector::between(a, b).manhattan()
}

/// The Chebyshev distance between two squares, `max(|dx|, |dy|)`. This is
/// the number of king moves needed to get from `a` to `b`.
pub fn chebyshev(a: Square, b: Square) -> u32 {
    MoveVector::between(a, b).chebyshev()
}

/// An enumeration of the supported distance metrics.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {

    /// See [euclidean].
    Euclidean,

    /// See [manhattan].
    Manhattan,

    /// See [chebyshev].
    Chebyshev
}

impl Metric {

    /// Computes the distance between the given squares under this metric.
    pub fn distance(self, a: Square, b: Square) -> f64 {
        match self {
            Metric::Euclidean => euclidean(a, b),
            Metric::Manhattan => manhattan(a, b) as f64,
            Metric::Chebyshev => chebyshev(a, b) as f64
        }
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Euclidean => write!(f, "euclidean"),
            Metric::Manhattan => write!(f, "manhattan"),
            Metric::Chebyshev => write!(f, "chebyshev")
        }
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Metric, String> {
        match s.to_ascii_lowercase().as_str() {
            "euclidean" => Ok(Metric::Euclidean),
            "manhattan" => Ok(Metric::Manhattan),
            "chebyshev" => Ok(Metric::Chebyshev),
            _ => Err(format!("unknown metric: \"{}\"", s))
        }
    }
}

/// The table of distances between all 64 × 64 ordered pairs of squares under
/// one [Metric]. Rows and columns are indexed by [Square::index].
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    metric: Metric,
    distances: Vec<f64>
}

impl DistanceMatrix {

    /// Computes the distance matrix for the given metric.
    pub fn new(metric: Metric) -> DistanceMatrix {
        let mut distances = Vec::with_capacity(SQUARE_COUNT * SQUARE_COUNT);

        for a in Square::ALL {
            for b in Square::ALL {
                distances.push(metric.distance(a, b));
            }
        }

        DistanceMatrix {
            metric,
            distances
        }
    }

    /// The [Metric] with which this matrix was computed.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// The number of rows and columns, which is always `(64, 64)`.
    pub fn shape(&self) -> (usize, usize) {
        (SQUARE_COUNT, SQUARE_COUNT)
    }

    /// Gets the distance between the given squares.
    pub fn get(&self, a: Square, b: Square) -> f64 {
        self.distances[a.index() * SQUARE_COUNT + b.index()]
    }

    /// Gets the row of distances from the given square to all squares, in
    /// order of index.
    pub fn row(&self, from: Square) -> &[f64] {
        let start = from.index() * SQUARE_COUNT;

        &self.distances[start..start + SQUARE_COUNT]
    }

    /// The smallest entry, which is 0 on the diagonal.
    pub fn min(&self) -> f64 {
        self.distances.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// The largest entry, attained between opposite corners.
    pub fn max(&self) -> f64 {
        self.distances.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Computes the distances of all squares from the given origin.
///
/// # Returns
///
/// A grid indexed as `[rank][file]` with 0-based indices.
pub fn heat_map(from: Square, metric: Metric)
        -> [[f64; BOARD_WIDTH]; BOARD_HEIGHT] {
    let mut map = [[0.0; BOARD_WIDTH]; BOARD_HEIGHT];

    for square in Square::ALL {
        let (file, rank) = square.coordinates();
        map[rank][file] = metric.distance(from, square);
    }

    map
}

/// Coarse classification of a Euclidean distance, used to color heat maps.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum DistanceBand {

    /// Distance 0, i.e. the origin itself.
    Origin,

    /// Distance at most 1: the orthogonal neighbors.
    Adjacent,

    /// Distance at most 2.
    Near,

    /// Distance at most 3.
    Medium,

    /// Distance greater than 3.
    Far
}

impl DistanceBand {

    /// Classifies the given distance.
    pub fn of(distance: f64) -> DistanceBand {
        if distance == 0.0 {
            DistanceBand::Origin
        }
        else if distance <= 1.0 {
            DistanceBand::Adjacent
        }
        else if distance <= 2.0 {
            DistanceBand::Near
        }
        else if distance <= 3.0 {
            DistanceBand::Medium
        }
        else {
            DistanceBand::Far
        }
    }

    /// A single character representing this band in text heat maps.
    pub fn symbol(self) -> char {
        match self {
            DistanceBand::Origin => '@',
            DistanceBand::Adjacent => '#',
            DistanceBand::Near => '+',
            DistanceBand::Medium => '-',
            DistanceBand::Far => '.'
        }
    }
}

/// Computes the one-hot position vector of the given square: 64 entries that
/// are all 0 except for a 1 at the index of the square.
pub fn one_hot(square: Square) -> [f64; SQUARE_COUNT] {
    let mut vector = [0.0; SQUARE_COUNT];
    vector[square.index()] = 1.0;
    vector
}
