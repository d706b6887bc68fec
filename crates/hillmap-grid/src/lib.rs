//! Sampling grids for hillmap potential fields.
//!
//! This crate defines the [`SampleGrid`] trait, the read-only set of
//! sample positions a potential field is evaluated over, along with the
//! two concrete layouts used by the map scenes.
//!
//! # Layouts
//!
//! - [`LinearGrid`]: uniform, endpoint-inclusive sampling of a rectangle
//!   in the rotating frame
//! - [`LogPolarGrid`]: square screen grid whose radius maps
//!   logarithmically onto heliocentric distance
//!
//! Both reject fewer than two samples per axis and degenerate bounds
//! with a [`DomainError`](hillmap_core::DomainError).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod grid;
pub mod linear;
pub mod log_polar;

#[cfg(test)]
pub(crate) mod compliance;

pub use bounds::Bounds;
pub use grid::{check_shape, SampleGrid};
pub use linear::LinearGrid;
pub use log_polar::{LogPolarGrid, LogPolarMapping, PolarSample};
