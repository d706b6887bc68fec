//! Filled contour bands.

use hillmap_field::PotentialField;
use image::{Rgb, RgbImage};

use crate::colormap::Colormap;
use crate::error::RenderError;

/// `count` equal bands spanning the clip window `[lo, hi]`.
///
/// Values outside the window are clipped into the first or last band.
/// Scenes usually build these with [`Levels::linspace`], which counts
/// boundaries rather than bands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Levels {
    lo: f64,
    hi: f64,
    count: usize,
}

impl Levels {
    /// Create a level set. `lo < hi`, both finite, at least one band.
    pub fn new(lo: f64, hi: f64, count: usize) -> Result<Self, RenderError> {
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(RenderError::InvalidSpec {
                name: "clip",
                reason: format!("need finite lo < hi, got [{lo}, {hi}]"),
            });
        }
        if count == 0 {
            return Err(RenderError::InvalidSpec {
                name: "levels",
                reason: "need at least one band".to_string(),
            });
        }
        Ok(Self { lo, hi, count })
    }

    /// `boundaries` evenly spaced level values from `lo` to `hi`
    /// inclusive, so `n` boundaries make `n - 1` bands.
    pub fn linspace(lo: f64, hi: f64, boundaries: usize) -> Result<Self, RenderError> {
        if boundaries < 2 {
            return Err(RenderError::InvalidSpec {
                name: "levels",
                reason: format!("need at least two boundaries, got {boundaries}"),
            });
        }
        Self::new(lo, hi, boundaries - 1)
    }

    /// Lower edge of the clip window.
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Upper edge of the clip window.
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Number of bands.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Value of band boundary `i` for `i` in `0..=count`.
    pub fn boundary(&self, i: usize) -> f64 {
        self.lo + (self.hi - self.lo) * (i as f64) / (self.count as f64)
    }

    /// Every band boundary from `lo` to `hi`.
    pub fn boundaries(&self) -> impl Iterator<Item = f64> + '_ {
        (0..=self.count).map(|i| self.boundary(i))
    }

    /// Interior band boundaries, lowest first.
    pub fn interior_boundaries(&self) -> impl Iterator<Item = f64> + '_ {
        (1..self.count).map(|i| self.boundary(i))
    }

    /// Band index of `value` after clipping.
    pub fn band(&self, value: f64) -> usize {
        let t = ((value - self.lo) / (self.hi - self.lo)).clamp(0.0, 1.0);
        ((t * self.count as f64) as usize).min(self.count - 1)
    }

    /// Colormap position of band `i`, evenly spread over `[0, 1]`.
    pub fn band_position(&self, i: usize) -> f64 {
        if self.count == 1 {
            0.5
        } else {
            i as f64 / (self.count - 1) as f64
        }
    }
}

/// Paint one pixel per cell. Excluded cells get `background`.
pub fn fill_bands(
    field: &PotentialField,
    levels: &Levels,
    colormap: Colormap,
    background: Rgb<u8>,
) -> RgbImage {
    let (rows, cols) = field.shape();
    let palette: Vec<Rgb<u8>> = (0..levels.count())
        .map(|i| colormap.sample(levels.band_position(i)))
        .collect();
    RgbImage::from_fn(cols as u32, rows as u32, |x, y| {
        let row = rows - 1 - y as usize;
        match field.get(row, x as usize) {
            Some(v) => palette[levels.band(v)],
            None => background,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hillmap_field::EXCLUDED_SENTINEL;
    use proptest::prelude::*;

    #[test]
    fn bands_clip_at_both_ends() {
        let l = Levels::new(-2.0, 2.0, 4).unwrap();
        assert_eq!(l.band(-100.0), 0);
        assert_eq!(l.band(-1.5), 0);
        assert_eq!(l.band(-0.5), 1);
        assert_eq!(l.band(1.999), 3);
        assert_eq!(l.band(2.0), 3);
        assert_eq!(l.band(1e9), 3);
    }

    #[test]
    fn boundaries_span_the_window() {
        let l = Levels::new(0.0, 1.0, 4).unwrap();
        assert_eq!(l.boundary(0), 0.0);
        assert_eq!(l.boundary(4), 1.0);
        let inner: Vec<_> = l.interior_boundaries().collect();
        assert_eq!(inner, [0.25, 0.5, 0.75]);
    }

    #[test]
    fn linspace_counts_boundaries() {
        let l = Levels::linspace(-4.0, 0.5, 90).unwrap();
        assert_eq!(l.count(), 89);
        assert_eq!(l.boundaries().count(), 90);
        assert_eq!(l.boundaries().next(), Some(-4.0));
        assert_eq!(l.boundaries().last(), Some(0.5));
        assert_eq!(Levels::linspace(0.0, 1.0, 2).unwrap().count(), 1);
        assert!(Levels::linspace(0.0, 1.0, 1).is_err());
    }

    #[test]
    fn invalid_levels() {
        assert!(Levels::new(1.0, 1.0, 3).is_err());
        assert!(Levels::new(f64::NAN, 1.0, 3).is_err());
        assert!(Levels::new(0.0, 1.0, 0).is_err());
    }

    #[test]
    fn rows_are_flipped_and_excluded_cells_use_background() {
        // Row 0 (bottom) is low, row 1 (top) is high; one excluded cell.
        let field = PotentialField::from_values(
            2,
            2,
            vec![-1.0, EXCLUDED_SENTINEL, 1.0, 1.0],
            vec![false, true, false, false],
        )
        .unwrap();
        let levels = Levels::new(-1.0, 1.0, 2).unwrap();
        let bg = Rgb([1, 2, 3]);
        let img = fill_bands(&field, &levels, Colormap::Grayscale, bg);
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(*img.get_pixel(0, 0), Rgb([255, 255, 255]));
        assert_eq!(*img.get_pixel(0, 1), Rgb([0, 0, 0]));
        assert_eq!(*img.get_pixel(1, 1), bg);
    }

    proptest! {
        #[test]
        fn band_is_monotone_and_in_range(
            lo in -100.0f64..0.0,
            width in 0.1f64..100.0,
            count in 1usize..200,
            a in -300.0f64..300.0,
            b in -300.0f64..300.0,
        ) {
            let l = Levels::new(lo, lo + width, count).unwrap();
            let (small, large) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(l.band(large) < count);
            prop_assert!(l.band(small) <= l.band(large));
        }
    }
}
