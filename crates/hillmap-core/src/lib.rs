//! Core types for the hillmap workspace.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! two-body configuration of the circular restricted three-body problem,
//! positions in the rotating frame, Lagrange point labels, and the error
//! taxonomy shared by the evaluator, the solver, and the scene engine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod label;
pub mod point;
pub mod system;

pub use error::{Axis, ConvergenceError, DomainError, NonFiniteValueError};
pub use label::{LagrangeLabel, LagrangePoint, SolveMethod};
pub use point::Point2;
pub use system::TwoBodySystem;
