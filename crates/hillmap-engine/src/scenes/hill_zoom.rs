//! Close-up of Earth's Hill sphere.

use hillmap_core::{LagrangeLabel, Point2, TwoBodySystem};
use hillmap_field::effective_potential;
use hillmap_grid::Bounds;
use hillmap_render::{hex, Colormap, Isoline, Levels, MarkerShape, Overlay, RenderSpec, TextAnchor};
use hillmap_solve::approximate_collinear;
use image::Rgb;

use super::{evaluate_rotating_frame, Evaluated, Scene};
use crate::config::{SceneConfig, SceneKind};
use crate::error::RunError;
use crate::metrics::RunMetrics;

/// Zoomed map of the region around the smaller primary, with the
/// zero-velocity curves through L1 and L2 and stylized halo orbits.
#[derive(Clone, Debug, PartialEq)]
pub struct HillZoomScene {
    /// Mass ratio. Default: Earth–Sun.
    pub mu: f64,
    /// Half-width and half-height of the window around mass 2. Default: 0.016.
    pub half_extent: f64,
    /// Samples along y at scale 1. Default: 2000.
    pub rows: usize,
    /// Columns per row. Default: 1.77.
    pub aspect: f64,
    /// Clip window below Φ(L1). Default: 2.5e-5.
    pub depth_below_l1: f64,
    /// Clip window above Φ(L1). Default: 5e-6.
    pub height_above_l1: f64,
    /// Level boundaries over the clip window; `n` boundaries give
    /// `n - 1` bands. Default: 150.
    pub levels: usize,
    /// Band palette. Default: inferno.
    pub colormap: Colormap,
    /// Excluded-cell color. Default: `#000005`.
    pub background: Rgb<u8>,
    /// Semi-axes of the halo orbit drawn around L1. Default: 0.0015 × 0.003.
    pub l1_halo: (f64, f64),
    /// Semi-axes of the halo orbit drawn around L2. Default: 0.002 × 0.005.
    pub l2_halo: (f64, f64),
    /// Spacing of the distance labels along the bottom edge, in AU.
    /// Default: 0.005.
    pub axis_tick: f64,
    /// Text across the top of the map.
    pub title: Option<String>,
}

impl Default for HillZoomScene {
    fn default() -> Self {
        Self {
            mu: TwoBodySystem::EARTH_SUN_MU,
            half_extent: 0.016,
            rows: 2000,
            aspect: 1.77,
            depth_below_l1: 2.5e-5,
            height_above_l1: 5e-6,
            levels: 150,
            colormap: Colormap::Inferno,
            background: hex(0x000005),
            l1_halo: (0.0015, 0.003),
            l2_halo: (0.002, 0.005),
            axis_tick: 0.005,
            title: Some("Earth's Hill Sphere: L1 & L2 Gateways".to_string()),
        }
    }
}

const EARTH: Rgb<u8> = hex(0x22aaff);
const WHITE: Rgb<u8> = hex(0xffffff);
const CYAN: Rgb<u8> = hex(0x00ffff);
const MAGENTA: Rgb<u8> = hex(0xff00ff);
const GRAY: Rgb<u8> = hex(0x808080);

/// Million kilometres per AU.
const MKM_PER_AU: f64 = 149.6;

impl HillZoomScene {
    /// Columns for a given row count.
    pub fn cols_for(&self, rows: usize) -> usize {
        ((rows as f64 * self.aspect).round() as usize).max(2)
    }

    /// Distance labels in million km from mass 2, plus the axis caption,
    /// along the bottom of the window.
    fn distance_axis(&self, system: &TwoBodySystem, glyph: u32) -> Vec<Overlay> {
        let earth = system.secondary();
        let ticks = (self.half_extent / self.axis_tick).floor() as i64;
        let tick_y = -self.half_extent * 0.93;
        let mut labels: Vec<Overlay> = (-ticks..=ticks)
            .map(|k| {
                let dx = k as f64 * self.axis_tick;
                let text = format!("{:.1} M km", dx * MKM_PER_AU);
                Overlay::label(Point2::new(earth.x + dx, tick_y), text, glyph, GRAY)
            })
            .collect();
        labels.push(Overlay::label(
            Point2::new(earth.x, -self.half_extent * 0.975),
            "Distance from Earth (Million km)",
            glyph,
            GRAY,
        ));
        labels
    }

    /// Position and Φ of a gateway, falling back to the Hill
    /// approximation if the solve failed.
    fn gateway(&self, system: &TwoBodySystem, evaluated: &Evaluated, label: LagrangeLabel) -> (Point2, f64) {
        let solved = evaluated
            .solution
            .as_ref()
            .and_then(|s| s.position(label))
            .zip(evaluated.levels.as_ref().and_then(|l| l.get(label)));
        match solved {
            Some(found) => found,
            None => {
                let [l1, l2, _] = approximate_collinear(system);
                let p = if label == LagrangeLabel::L1 { l1 } else { l2 };
                tracing::warn!(%label, x = p.x, "using Hill approximation for gateway");
                (p, effective_potential(system, p))
            }
        }
    }
}

impl Scene for HillZoomScene {
    fn kind(&self) -> SceneKind {
        SceneKind::HillZoom
    }

    fn evaluate(&self, config: &SceneConfig, metrics: &mut RunMetrics) -> Result<Evaluated, RunError> {
        let system = TwoBodySystem::new(self.mu)?;
        let bounds = Bounds::centered(system.secondary(), self.half_extent, self.half_extent)?;
        let rows = config.scaled(self.rows);
        evaluate_rotating_frame(&system, bounds, self.cols_for(rows), rows, config, metrics)
    }

    fn describe(&self, config: &SceneConfig, evaluated: &Evaluated) -> Result<RenderSpec, RunError> {
        let system = TwoBodySystem::new(self.mu)?;
        let (l1, phi_l1) = self.gateway(&system, evaluated, LagrangeLabel::L1);
        let (l2, phi_l2) = self.gateway(&system, evaluated, LagrangeLabel::L2);
        let levels = Levels::linspace(
            phi_l1 - self.depth_below_l1,
            phi_l1 + self.height_above_l1,
            self.levels,
        )?;
        let px = |v: f64| config.scaled_px(v);
        let stroke = |v: u32| config.scaled_stroke(v);
        let glyph = |v: u32| config.scaled_glyph(v);

        let halo = |center: Point2, (semi_x, semi_y): (f64, f64)| Overlay::Ellipse {
            center,
            semi_x,
            semi_y,
            thickness: stroke(3),
            dashed: true,
            color: WHITE,
            alpha: 0.8,
        };

        let caption = |at: Point2, text: &str| Overlay::Label {
            at,
            text: text.to_string(),
            size: glyph(3),
            anchor: TextAnchor::Middle,
            color: WHITE,
            alpha: 0.7,
        };

        let mut overlays = vec![
            Overlay::disc(system.secondary(), px(28.0), WHITE),
            Overlay::disc(system.secondary(), px(24.0), EARTH),
            Overlay::marker(l1, MarkerShape::Plus, px(17.0), stroke(6), CYAN),
            Overlay::marker(l2, MarkerShape::Plus, px(17.0), stroke(6), MAGENTA),
            halo(l2, self.l2_halo),
            caption(Point2::new(l2.x, self.l2_halo.1 + 0.001), "JWST Halo Orbit"),
            halo(l1, self.l1_halo),
            caption(Point2::new(l1.x, -self.l1_halo.1 - 0.002), "SOHO Halo Orbit"),
        ];
        overlays.extend(self.distance_axis(&system, glyph(2)));
        if let Some(title) = &self.title {
            overlays.push(Overlay::title(title.clone(), glyph(4), WHITE));
        }

        Ok(RenderSpec::new(self.colormap, levels)
            .with_background(self.background)
            .with_isoline(Isoline::new(phi_l1, CYAN).with_alpha(0.8).with_thickness(stroke(4)))
            .with_isoline(Isoline::new(phi_l2, MAGENTA).with_alpha(0.8).with_thickness(stroke(4)))
            .with_overlays(overlays))
    }
}
