//! Distance heuristics and movement costs.

use pathviz_core::Point;

/// Cost of an orthogonal step.
pub const ORTHO_COST: f64 = 1.0;

/// Cost of a diagonal step.
pub const DIAG_COST: f64 = std::f64::consts::SQRT_2;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> f64 {
    ((a.x - b.x).abs() + (a.y - b.y).abs()) as f64
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    dx.hypot(dy)
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> f64 {
    (a.x - b.x).abs().max((a.y - b.y).abs()) as f64
}

/// Cost of moving between two adjacent cells: [`ORTHO_COST`] for a
/// cardinal step, [`DIAG_COST`] for a diagonal one.
#[inline]
pub fn move_cost(from: Point, to: Point) -> f64 {
    if from.is_diagonal_to(to) {
        DIAG_COST
    } else {
        ORTHO_COST
    }
}

/// Heuristic kind used to estimate remaining cost to the goal.
///
/// Manhattan is admissible (never overestimates) for 4-way movement;
/// Chebyshev and Euclidean are admissible for 8-way movement with √2
/// diagonals. An inadmissible pairing (or a weight above 1) turns the
/// search into a deliberately inexact greedy variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
    Chebyshev,
}

impl Heuristic {
    /// Evaluate the distance estimate from `a` to `b`.
    #[inline]
    pub fn distance(self, a: Point, b: Point) -> f64 {
        match self {
            Self::Manhattan => manhattan(a, b),
            Self::Euclidean => euclidean(a, b),
            Self::Chebyshev => chebyshev(a, b),
        }
    }
}
