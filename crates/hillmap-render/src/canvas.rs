//! Alpha-blended drawing primitives over an [`RgbImage`].
//!
//! Every primitive rasterizes into a coverage mask first and blends the
//! covered pixels once, so overlapping strokes of a translucent overlay
//! do not darken where they cross.

use image::{Rgb, RgbImage};

/// Blend `src` over `dst` with opacity `alpha` in `[0, 1]`.
pub fn blend(dst: Rgb<u8>, src: Rgb<u8>, alpha: f64) -> Rgb<u8> {
    let a = alpha.clamp(0.0, 1.0);
    let mix = |d: u8, s: u8| (f64::from(d) * (1.0 - a) + f64::from(s) * a).round() as u8;
    Rgb([mix(dst[0], src[0]), mix(dst[1], src[1]), mix(dst[2], src[2])])
}

/// An image plus a reusable coverage mask.
pub struct Canvas {
    image: RgbImage,
    mask: Vec<bool>,
    touched: Vec<usize>,
}

impl Canvas {
    /// Wrap an image.
    pub fn new(image: RgbImage) -> Self {
        let n = image.width() as usize * image.height() as usize;
        Self {
            image,
            mask: vec![false; n],
            touched: Vec::new(),
        }
    }

    /// The underlying image.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Give back the image.
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Mark one pixel as covered. Off-image pixels are ignored.
    pub fn cover(&mut self, x: i64, y: i64) {
        let (w, h) = (i64::from(self.image.width()), i64::from(self.image.height()));
        if x < 0 || y < 0 || x >= w || y >= h {
            return;
        }
        let i = (y * w + x) as usize;
        if !self.mask[i] {
            self.mask[i] = true;
            self.touched.push(i);
        }
    }

    /// Cover a filled square brush of side `thickness` centred at `(x, y)`.
    pub fn cover_brush(&mut self, x: i64, y: i64, thickness: u32) {
        let t = i64::from(thickness.max(1));
        let lo = -(t - 1) / 2;
        for dy in lo..lo + t {
            for dx in lo..lo + t {
                self.cover(x + dx, y + dy);
            }
        }
    }

    /// Cover a line with Bresenham's algorithm.
    pub fn cover_line(&mut self, from: (f64, f64), to: (f64, f64), thickness: u32) {
        let (mut x, mut y) = (from.0.round() as i64, from.1.round() as i64);
        let (x1, y1) = (to.0.round() as i64, to.1.round() as i64);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.cover_brush(x, y, thickness);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Cover a polyline; `dash` of `Some((on, off))` skips every
    /// `off` segments after `on` drawn ones.
    pub fn cover_polyline(&mut self, points: &[(f64, f64)], thickness: u32, dash: Option<(usize, usize)>) {
        for (i, w) in points.windows(2).enumerate() {
            if let Some((on, off)) = dash {
                if i % (on + off) >= on {
                    continue;
                }
            }
            self.cover_line(w[0], w[1], thickness);
        }
    }

    /// Cover a filled disc.
    pub fn cover_disc(&mut self, center: (f64, f64), radius: f64) {
        let r = radius.max(0.5);
        let (x0, x1) = ((center.0 - r).floor() as i64, (center.0 + r).ceil() as i64);
        let (y0, y1) = ((center.1 - r).floor() as i64, (center.1 + r).ceil() as i64);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let (ddx, ddy) = (x as f64 - center.0, y as f64 - center.1);
                if ddx * ddx + ddy * ddy <= r * r {
                    self.cover(x, y);
                }
            }
        }
    }

    /// Blend `color` over every covered pixel and clear the mask.
    pub fn fill_covered(&mut self, color: Rgb<u8>, alpha: f64) {
        for i in self.touched.drain(..) {
            self.mask[i] = false;
            let w = self.image.width() as usize;
            let (x, y) = ((i % w) as u32, (i / w) as u32);
            let dst = *self.image.get_pixel(x, y);
            self.image.put_pixel(x, y, blend(dst, color, alpha));
        }
    }

    /// Number of pixels currently covered.
    pub fn covered(&self) -> usize {
        self.touched.len()
    }
}
