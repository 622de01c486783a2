//! This module defines [MoveVector]s, the displacement between two squares,
//! together with the norms and movement-pattern predicates used to classify
//! them.

use crate::board::Square;

use serde::{Deserialize, Serialize};

use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{Add, Mul, Neg, Sub};

/// The displacement between two squares. `dx` counts files (positive towards
/// the h-file) and `dy` counts ranks (positive towards the 8th rank).
/// Arithmetic on vectors saturates at the bounds of `i32`.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq,
    Serialize)]
pub struct MoveVector {

    /// The displacement along the files.
    pub dx: i32,

    /// The displacement along the ranks.
    pub dy: i32
}

/// A movement pattern of a piece that can be recognized from a [MoveVector]
/// alone. Pawn moves depend on the moving player and are handled by
/// [Piece::matches](crate::piece::Piece::matches) instead.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Pattern {

    /// A horizontal or vertical line, see [MoveVector::is_orthogonal].
    Rook,

    /// A diagonal line, see [MoveVector::is_diagonal].
    Bishop,

    /// An L-shaped jump, see [MoveVector::is_knight_jump].
    Knight,

    /// Any straight line, see [MoveVector::is_queen_line].
    Queen,

    /// A single step in any direction, see [MoveVector::is_king_step].
    King
}

/// All [Pattern]s in the order in which [MoveVector::patterns] reports them.
pub const PATTERNS: [Pattern; 5] = [
    Pattern::Rook,
    Pattern::Bishop,
    Pattern::Knight,
    Pattern::Queen,
    Pattern::King
];

impl Pattern {

    /// Indicates whether the given vector matches this pattern.
    pub fn matches(self, vector: MoveVector) -> bool {
        match self {
            Pattern::Rook => vector.is_orthogonal(),
            Pattern::Bishop => vector.is_diagonal(),
            Pattern::Knight => vector.is_knight_jump(),
            Pattern::Queen => vector.is_queen_line(),
            Pattern::King => vector.is_king_step()
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pattern::Rook => "rook",
            Pattern::Bishop => "bishop",
            Pattern::Knight => "knight",
            Pattern::Queen => "queen",
            Pattern::King => "king"
        };

        write!(f, "{}", name)
    }
}

impl MoveVector {

    /// The vector which does not move at all.
    pub const NULL: MoveVector = MoveVector::new(0, 0);

    /// Creates a new vector from its components.
    pub const fn new(dx: i32, dy: i32) -> MoveVector {
        MoveVector { dx, dy }
    }

    /// Computes the vector that leads from `from` to `to`. This is the null
    /// vector if both squares are the same.
    pub fn between(from: Square, to: Square) -> MoveVector {
        let (from_file, from_rank) = from.coordinates();
        let (to_file, to_rank) = to.coordinates();

        MoveVector::new(to_file as i32 - from_file as i32,
            to_rank as i32 - from_rank as i32)
    }

    /// Indicates whether this is the null vector.
    pub fn is_null(self) -> bool {
        self == MoveVector::NULL
    }

    /// The Manhattan (taxicab) norm `|dx| + |dy|`.
    pub fn manhattan(self) -> u32 {
        self.dx.unsigned_abs().saturating_add(self.dy.unsigned_abs())
    }

    /// The Chebyshev norm `max(|dx|, |dy|)`, i.e. the number of king steps
    /// needed to cover this vector.
    pub fn chebyshev(self) -> u32 {
        self.dx.unsigned_abs().max(self.dy.unsigned_abs())
    }

    /// The Euclidean norm `sqrt(dx² + dy²)`.
    pub fn euclidean(self) -> f64 {
        let dx = self.dx as f64;
        let dy = self.dy as f64;

        (dx * dx + dy * dy).sqrt()
    }

    /// Indicates whether this vector describes a horizontal or vertical line,
    /// i.e. exactly one component is non-zero. This is the movement pattern
    /// of rooks.
    pub fn is_orthogonal(self) -> bool {
        (self.dx == 0) != (self.dy == 0)
    }

    /// Indicates whether this vector describes a diagonal line, i.e.
    /// `|dx| = |dy| > 0`. This is the movement pattern of bishops.
    pub fn is_diagonal(self) -> bool {
        self.dx != 0 && self.dx.unsigned_abs() == self.dy.unsigned_abs()
    }

    /// Indicates whether this vector is an L-shaped knight jump, i.e. one
    /// component has absolute value 1 and the other 2. Equivalently, both
    /// components are non-zero and `|dx| + |dy| = 3`.
    pub fn is_knight_jump(self) -> bool {
        self.dx != 0 && self.dy != 0 && self.manhattan() == 3
    }

    /// Indicates whether this vector is any straight line, i.e. orthogonal
    /// or diagonal. This is the movement pattern of queens.
    pub fn is_queen_line(self) -> bool {
        self.is_orthogonal() || self.is_diagonal()
    }

    /// Indicates whether this vector is a single step to one of the eight
    /// neighboring squares. This is the movement pattern of kings.
    pub fn is_king_step(self) -> bool {
        self.chebyshev() == 1
    }

    /// Lists all [Pattern]s this vector matches, in the order of [PATTERNS].
    /// The null vector matches none.
    pub fn patterns(self) -> Vec<Pattern> {
        PATTERNS.iter()
            .copied()
            .filter(|pattern| pattern.matches(self))
            .collect()
    }

    /// Reduces this vector to a unit step along its line, if it is a straight
    /// line. For example, `(3, -3)` is reduced to `(1, -1)`.
    ///
    /// # Returns
    ///
    /// `Some(...)` with the step direction if this vector
    /// [is a queen line](MoveVector::is_queen_line), and `None` otherwise.
    pub fn direction(self) -> Option<MoveVector> {
        if self.is_queen_line() {
            Some(MoveVector::new(self.dx.signum(), self.dy.signum()))
        }
        else {
            None
        }
    }
}

impl Display for MoveVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.dx, self.dy)
    }
}

impl Add for MoveVector {
    type Output = MoveVector;

    fn add(self, rhs: MoveVector) -> MoveVector {
        MoveVector::new(self.dx.saturating_add(rhs.dx),
            self.dy.saturating_add(rhs.dy))
    }
}

impl Sub for MoveVector {
    type Output = MoveVector;

    fn sub(self, rhs: MoveVector) -> MoveVector {
        MoveVector::new(self.dx.saturating_sub(rhs.dx),
            self.dy.saturating_sub(rhs.dy))
    }
}

impl Neg for MoveVector {
    type Output = MoveVector;

    fn neg(self) -> MoveVector {
        MoveVector::new(self.dx.saturating_neg(), self.dy.saturating_neg())
    }
}

impl Mul<i32> for MoveVector {
    type Output = MoveVector;

    fn mul(self, rhs: i32) -> MoveVector {
        MoveVector::new(self.dx.saturating_mul(rhs),
            self.dy.saturating_mul(rhs))
    }
}

/// The four unit steps along files and ranks, in which rooks slide.
pub const ORTHOGONAL_DIRECTIONS: [MoveVector; 4] = [
    MoveVector::new(1, 0),
    MoveVector::new(-1, 0),
    MoveVector::new(0, 1),
    MoveVector::new(0, -1)
];

/// The four unit steps along diagonals, in which bishops slide.
pub const DIAGONAL_DIRECTIONS: [MoveVector; 4] = [
    MoveVector::new(1, 1),
    MoveVector::new(1, -1),
    MoveVector::new(-1, 1),
    MoveVector::new(-1, -1)
];

/// The eight L-shaped knight jumps.
pub const KNIGHT_JUMPS: [MoveVector; 8] = [
    MoveVector::new(-2, -1),
    MoveVector::new(-2, 1),
    MoveVector::new(-1, -2),
    MoveVector::new(-1, 2),
    MoveVector::new(1, -2),
    MoveVector::new(1, 2),
    MoveVector::new(2, -1),
    MoveVector::new(2, 1)
];

/// The eight king steps around the origin.
pub const KING_STEPS: [MoveVector; 8] = [
    MoveVector::new(-1, -1),
    MoveVector::new(-1, 0),
    MoveVector::new(-1, 1),
    MoveVector::new(0, -1),
    MoveVector::new(0, 1),
    MoveVector::new(1, -1),
    MoveVector::new(1, 0),
    MoveVector::new(1, 1)
];
