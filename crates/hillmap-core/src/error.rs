//! Error types for the hillmap workspace.
//!
//! Organized by failure class: invalid physical or grid configuration
//! ([`DomainError`]), collinear root-finding failure
//! ([`ConvergenceError`]), and the internal finite-value guard
//! ([`NonFiniteValueError`]).

use std::error::Error;
use std::fmt;

use crate::label::LagrangeLabel;

/// A grid axis, used to locate a degenerate configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis (columns).
    X,
    /// Vertical axis (rows).
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

/// Invalid physical or sampling configuration.
///
/// Raised before any field value is computed. Fatal to the run; a
/// rerun with the same inputs fails identically.
#[derive(Clone, Debug, PartialEq)]
pub enum DomainError {
    /// The mass ratio is not strictly inside `(0, 1)` or is not finite.
    MassRatioOutOfRange {
        /// The rejected value.
        mu: f64,
    },
    /// A mass used to derive the ratio is non-positive or non-finite.
    InvalidMass {
        /// Which mass (`"m1"` or `"m2"`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// Bounds on an axis are non-finite or have `min >= max`.
    DegenerateBounds {
        /// The offending axis.
        axis: Axis,
        /// Lower bound as given.
        min: f64,
        /// Upper bound as given.
        max: f64,
    },
    /// Fewer than two samples requested along an axis.
    TooFewSamples {
        /// The offending axis.
        axis: Axis,
        /// The requested sample count.
        count: usize,
    },
    /// A named scalar parameter is outside its valid range.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the valid range.
        reason: String,
    },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MassRatioOutOfRange { mu } => {
                write!(f, "mass ratio must lie strictly inside (0, 1), got {mu}")
            }
            Self::InvalidMass { name, value } => {
                write!(f, "mass {name} must be finite and positive, got {value}")
            }
            Self::DegenerateBounds { axis, min, max } => {
                write!(
                    f,
                    "{axis} bounds must be finite with min < max, got [{min}, {max}]"
                )
            }
            Self::TooFewSamples { axis, count } => {
                write!(f, "{axis} axis needs at least 2 samples, got {count}")
            }
            Self::InvalidParameter { name, reason } => {
                write!(f, "invalid parameter '{name}': {reason}")
            }
        }
    }
}

impl Error for DomainError {}

/// Failure of the bracketed root solve for a collinear Lagrange point.
///
/// Reported per label. L4/L5 and the potential field are unaffected.
#[derive(Clone, Debug, PartialEq)]
pub enum ConvergenceError {
    /// The derivative has the same sign at both bracket ends.
    NoSignChange {
        /// The point being solved.
        label: LagrangeLabel,
        /// Bracket lower end.
        lo: f64,
        /// Bracket upper end.
        hi: f64,
    },
    /// The iteration budget ran out before the bracket shrank to tolerance.
    IterationLimit {
        /// The point being solved.
        label: LagrangeLabel,
        /// Iterations spent.
        iterations: u32,
        /// Width of the remaining bracket.
        bracket_width: f64,
    },
}

impl ConvergenceError {
    /// The Lagrange point this error belongs to.
    pub fn label(&self) -> LagrangeLabel {
        match self {
            Self::NoSignChange { label, .. } | Self::IterationLimit { label, .. } => *label,
        }
    }
}

impl fmt::Display for ConvergenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSignChange { label, lo, hi } => {
                write!(f, "{label}: no sign change in bracket [{lo}, {hi}]")
            }
            Self::IterationLimit {
                label,
                iterations,
                bracket_width,
            } => write!(
                f,
                "{label}: not converged after {iterations} iterations \
                 (bracket width {bracket_width:e})"
            ),
        }
    }
}

impl Error for ConvergenceError {}

/// A non-finite value produced while filling a field cell.
///
/// Internal to field evaluation: the evaluator converts it into an
/// excluded cell, so it never reaches a caller of `evaluate_potential`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NonFiniteValueError {
    /// Flat row-major index of the offending cell.
    pub cell_index: usize,
    /// The value that was rejected.
    pub value: f64,
}

impl fmt::Display for NonFiniteValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "non-finite value {} at cell {}", self.value, self.cell_index)
    }
}

impl Error for NonFiniteValueError {}
