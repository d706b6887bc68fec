//! Topographic rendering of potential fields.
//!
//! A [`PotentialField`](hillmap_field::PotentialField) is drawn one pixel
//! per cell as filled contour bands ([`Levels`] + [`Colormap`]), then
//! isolines ([`Isoline`]) and overlays ([`Overlay`]) are composited on
//! top in world coordinates through a [`Viewport`]. Labels and titles
//! are drawn with an 8×8 bitmap font ([`text`]). The result is an
//! [`image::RgbImage`] that [`save_png`] writes to disk.
//!
//! Row 0 of a field is the bottom of the domain; row 0 of an image is the
//! top. The rasterizer flips rows so north stays up.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod canvas;
pub mod colormap;
pub mod contour;
pub mod error;
pub mod overlay;
pub mod raster;
pub mod spec;
pub mod text;
pub mod viewport;

pub use colormap::{hex, Colormap};
pub use contour::Isoline;
pub use error::RenderError;
pub use overlay::{MarkerShape, Overlay};
pub use raster::Levels;
pub use spec::{render, save_png, RenderSpec};
pub use text::{text_width, TextAnchor};
pub use viewport::Viewport;
