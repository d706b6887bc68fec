//! Lagrange point labels and solved positions.

use std::fmt;

use crate::point::Point2;

/// One of the five equilibrium points of the CR3BP.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LagrangeLabel {
    /// Collinear point between the two primaries.
    L1,
    /// Collinear point beyond the smaller primary.
    L2,
    /// Collinear point beyond the larger primary.
    L3,
    /// Leading triangular point (`y > 0`).
    L4,
    /// Trailing triangular point (`y < 0`).
    L5,
}

impl LagrangeLabel {
    /// All five labels in canonical order.
    pub const ALL: [LagrangeLabel; 5] = [Self::L1, Self::L2, Self::L3, Self::L4, Self::L5];

    /// Position of this label in [`ALL`](Self::ALL).
    pub fn index(self) -> usize {
        match self {
            Self::L1 => 0,
            Self::L2 => 1,
            Self::L3 => 2,
            Self::L4 => 3,
            Self::L5 => 4,
        }
    }

    /// Whether the point lies on the line through both primaries.
    pub fn is_collinear(self) -> bool {
        matches!(self, Self::L1 | Self::L2 | Self::L3)
    }
}

impl fmt::Display for LagrangeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::L1 => "L1",
            Self::L2 => "L2",
            Self::L3 => "L3",
            Self::L4 => "L4",
            Self::L5 => "L5",
        };
        f.write_str(s)
    }
}

/// How a Lagrange position was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveMethod {
    /// Exact formula (L4, L5).
    ClosedForm,
    /// Bracketed root solve.
    Numerical {
        /// Iterations the root finder used.
        iterations: u32,
    },
    /// The point lies closer to a primary than `f64` spacing can
    /// separate; the position is the nearest sample beside that mass.
    AtResolution,
}

/// A located equilibrium point in the rotating frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LagrangePoint {
    /// Which point this is.
    pub label: LagrangeLabel,
    /// Position in normalized rotating-frame units.
    pub position: Point2,
    /// How the position was obtained.
    pub method: SolveMethod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_index_order() {
        for (i, label) in LagrangeLabel::ALL.iter().enumerate() {
            assert_eq!(label.index(), i);
        }
    }

    #[test]
    fn collinear_split() {
        let collinear: Vec<_> = LagrangeLabel::ALL
            .iter()
            .filter(|l| l.is_collinear())
            .collect();
        assert_eq!(collinear.len(), 3);
        assert!(!LagrangeLabel::L4.is_collinear());
        assert!(!LagrangeLabel::L5.is_collinear());
    }

    #[test]
    fn display_matches_conventional_names() {
        let names: Vec<String> = LagrangeLabel::ALL.iter().map(|l| l.to_string()).collect();
        assert_eq!(names, ["L1", "L2", "L3", "L4", "L5"]);
    }
}
