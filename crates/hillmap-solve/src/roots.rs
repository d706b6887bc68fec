//! Brent's bracketed root finder.
//!
//! Combines bisection, secant and inverse quadratic interpolation. The
//! root stays bracketed at every step, so convergence is guaranteed for
//! any continuous function with a sign change, and is superlinear near
//! a simple root.

use std::error::Error;
use std::fmt;

use hillmap_core::{ConvergenceError, LagrangeLabel};

/// A converged root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Root {
    /// Abscissa of the root.
    pub x: f64,
    /// Iterations used.
    pub iterations: u32,
}

/// Why [`brent`] gave up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RootError {
    /// `f(lo)` and `f(hi)` do not have opposite signs (or one is NaN).
    NoSignChange {
        /// Bracket lower end.
        lo: f64,
        /// Bracket upper end.
        hi: f64,
    },
    /// The bracket did not shrink to tolerance within the budget.
    IterationLimit {
        /// Iterations spent.
        iterations: u32,
        /// Width of the remaining bracket.
        bracket_width: f64,
    },
}

impl RootError {
    /// Attach the Lagrange label this solve was for.
    pub fn for_label(self, label: LagrangeLabel) -> ConvergenceError {
        match self {
            Self::NoSignChange { lo, hi } => ConvergenceError::NoSignChange { label, lo, hi },
            Self::IterationLimit {
                iterations,
                bracket_width,
            } => ConvergenceError::IterationLimit {
                label,
                iterations,
                bracket_width,
            },
        }
    }
}

impl fmt::Display for RootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSignChange { lo, hi } => write!(f, "no sign change in bracket [{lo}, {hi}]"),
            Self::IterationLimit {
                iterations,
                bracket_width,
            } => write!(
                f,
                "not converged after {iterations} iterations (bracket width {bracket_width:e})"
            ),
        }
    }
}

impl Error for RootError {}

/// Find a root of `f` in `[lo, hi]` to absolute tolerance `tol`.
///
/// `f(lo)` and `f(hi)` must have opposite signs. An endpoint that is
/// already an exact zero is returned with zero iterations.
///
/// # Examples
///
/// ```
/// use hillmap_solve::brent;
///
/// let root = brent(|x| x * x - 2.0, 0.0, 2.0, 1e-12, 100).unwrap();
/// assert!((root.x - 2f64.sqrt()).abs() < 1e-12);
/// ```
pub fn brent<F>(mut f: F, lo: f64, hi: f64, tol: f64, max_iterations: u32) -> Result<Root, RootError>
where
    F: FnMut(f64) -> f64,
{
    let (mut a, mut b) = (lo, hi);
    let (mut fa, mut fb) = (f(a), f(b));
    if fa == 0.0 {
        return Ok(Root { x: a, iterations: 0 });
    }
    if fb == 0.0 {
        return Ok(Root { x: b, iterations: 0 });
    }
    if fa.is_nan() || fb.is_nan() || fa.signum() == fb.signum() {
        return Err(RootError::NoSignChange { lo, hi });
    }

    let (mut c, mut fc) = (b, fb);
    let mut d = b - a;
    let mut e = d;

    for iteration in 1..=max_iterations {
        if (fb > 0.0) == (fc > 0.0) {
            // Restore the bracket [b, c].
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol1 = 2.0 * f64::EPSILON * b.abs() + 0.5 * tol;
        let xm = 0.5 * (c - b);
        if xm.abs() <= tol1 || fb == 0.0 {
            return Ok(Root { x: b, iterations: iteration });
        }

        if e.abs() >= tol1 && fa.abs() > fb.abs() {
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                (2.0 * xm * s, 1.0 - s)
            } else {
                let q = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * xm * q * (q - r) - (b - a) * (r - 1.0)),
                    (q - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };
            if p > 0.0 {
                q = -q;
            }
            p = p.abs();
            let min1 = 3.0 * xm * q - (tol1 * q).abs();
            let min2 = (e * q).abs();
            if 2.0 * p < min1.min(min2) {
                // Interpolation accepted.
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }

        a = b;
        fa = fb;
        b += if d.abs() > tol1 { d } else { tol1.copysign(xm) };
        fb = f(b);
    }

    let bracket_width = if (fb > 0.0) == (fc > 0.0) {
        (b - a).abs()
    } else {
        (c - b).abs()
    };
    Err(RootError::IterationLimit {
        iterations: max_iterations,
        bracket_width,
    })
}
