//! Perceptual colormaps as piecewise-linear stops.

use std::fmt;
use std::str::FromStr;

use image::Rgb;

use crate::error::RenderError;

/// `0xRRGGBB` as a pixel.
pub const fn hex(rgb: u32) -> Rgb<u8> {
    Rgb([(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8])
}

type Stop = (f64, [u8; 3]);

const MAGMA: &[Stop] = &[
    (0.0, [0, 0, 4]),
    (0.125, [28, 16, 68]),
    (0.25, [79, 18, 123]),
    (0.375, [129, 37, 129]),
    (0.5, [181, 54, 122]),
    (0.625, [229, 80, 100]),
    (0.75, [251, 135, 97]),
    (0.875, [254, 194, 135]),
    (1.0, [252, 253, 191]),
];

const INFERNO: &[Stop] = &[
    (0.0, [0, 0, 4]),
    (0.125, [31, 12, 72]),
    (0.25, [85, 15, 109]),
    (0.375, [136, 34, 106]),
    (0.5, [186, 54, 85]),
    (0.625, [227, 89, 51]),
    (0.75, [249, 140, 10]),
    (0.875, [249, 201, 50]),
    (1.0, [252, 255, 164]),
];

// Channel breakpoints of gist_stern merged into one stop list.
const GIST_STERN: &[Stop] = &[
    (0.0, [0, 0, 0]),
    (0.0547, [255, 14, 28]),
    (0.25, [7, 64, 128]),
    (0.5, [89, 128, 255]),
    (0.735, [167, 187, 0]),
    (1.0, [255, 255, 255]),
];

const GRAYSCALE: &[Stop] = &[(0.0, [0, 0, 0]), (1.0, [255, 255, 255])];

/// A named colormap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Colormap {
    /// Black through purple and orange to pale yellow.
    Magma,
    /// Black through purple and orange to bright yellow.
    Inferno,
    /// Black, red, blue, olive, white. Strong contrast between bands.
    GistStern,
    /// Black to white.
    Grayscale,
}

impl Colormap {
    fn stops(self) -> &'static [Stop] {
        match self {
            Self::Magma => MAGMA,
            Self::Inferno => INFERNO,
            Self::GistStern => GIST_STERN,
            Self::Grayscale => GRAYSCALE,
        }
    }

    /// Color at `t`, clamped to `[0, 1]`. NaN maps to the low end.
    pub fn sample(self, t: f64) -> Rgb<u8> {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let i = stops
            .windows(2)
            .position(|w| t <= w[1].0)
            .unwrap_or(stops.len() - 2);
        let (t0, c0) = stops[i];
        let (t1, c1) = stops[i + 1];
        let f = (t - t0) / (t1 - t0);
        let mix = |a: u8, b: u8| (f64::from(a) + f * (f64::from(b) - f64::from(a))).round() as u8;
        Rgb([mix(c0[0], c1[0]), mix(c0[1], c1[1]), mix(c0[2], c1[2])])
    }

    /// Every colormap, in declaration order.
    pub const ALL: [Colormap; 4] = [Self::Magma, Self::Inferno, Self::GistStern, Self::Grayscale];

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Magma => "magma",
            Self::Inferno => "inferno",
            Self::GistStern => "gist_stern",
            Self::Grayscale => "grayscale",
        }
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Colormap {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s) || (s == "gist-stern" && *c == Self::GistStern))
            .ok_or_else(|| RenderError::InvalidSpec {
                name: "colormap",
                reason: format!("unknown colormap '{s}'"),
            })
    }
}
