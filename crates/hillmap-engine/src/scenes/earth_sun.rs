//! Global topography of the Earth–Sun system.

use hillmap_core::{Point2, TwoBodySystem};
use hillmap_grid::Bounds;
use hillmap_render::{hex, Colormap, Isoline, Levels, MarkerShape, Overlay, RenderSpec};
use image::Rgb;

use super::{evaluate_rotating_frame, Evaluated, Scene};
use crate::config::{SceneConfig, SceneKind};
use crate::error::RunError;
use crate::metrics::RunMetrics;

/// Whole-system map: both wells, the saddles at L1..L3, and the
/// triangular hills at L4/L5.
#[derive(Clone, Debug, PartialEq)]
pub struct EarthSunScene {
    /// Mass ratio. Default: Earth–Sun.
    pub mu: f64,
    /// Horizontal extent. Default: `[-1.5, 1.7]`.
    pub x_range: (f64, f64),
    /// Vertical extent. Default: `[-0.9, 0.9]`.
    pub y_range: (f64, f64),
    /// Samples along x at scale 1. Default: 2560.
    pub cols: usize,
    /// Samples along y at scale 1. Default: 1440.
    pub rows: usize,
    /// Clip window of the filled bands. Default: `[-3.05, -1.499]`.
    pub clip: (f64, f64),
    /// Level boundaries over the clip window; `n` boundaries give
    /// `n - 1` bands. Default: 120.
    pub levels: usize,
    /// Draw a faint isoline on every n-th boundary. Default: 2.
    pub isoline_every: usize,
    /// Band palette. Default: magma.
    pub colormap: Colormap,
    /// Excluded-cell color. Default: `#050508`.
    pub background: Rgb<u8>,
    /// Text across the top of the map.
    pub title: Option<String>,
}

impl Default for EarthSunScene {
    fn default() -> Self {
        Self {
            mu: TwoBodySystem::EARTH_SUN_MU,
            x_range: (-1.5, 1.7),
            y_range: (-0.9, 0.9),
            cols: 2560,
            rows: 1440,
            clip: (-3.05, -1.499),
            levels: 120,
            isoline_every: 2,
            colormap: Colormap::Magma,
            background: hex(0x050508),
            title: Some("Earth-Sun System: Gravitational Topography (Effective Potential)".to_string()),
        }
    }
}

const SUN: Rgb<u8> = hex(0xffd700);
const SUN_EDGE: Rgb<u8> = hex(0xffaa00);
const EARTH: Rgb<u8> = hex(0x00ffff);
const WHITE: Rgb<u8> = hex(0xffffff);

/// Vertical offset of a point label above its marker (world units).
const LABEL_LIFT: f64 = 0.06;

impl Scene for EarthSunScene {
    fn kind(&self) -> SceneKind {
        SceneKind::EarthSun
    }

    fn evaluate(&self, config: &SceneConfig, metrics: &mut RunMetrics) -> Result<Evaluated, RunError> {
        let system = TwoBodySystem::new(self.mu)?;
        let bounds = Bounds::new(self.x_range.0, self.x_range.1, self.y_range.0, self.y_range.1)?;
        evaluate_rotating_frame(
            &system,
            bounds,
            config.scaled(self.cols),
            config.scaled(self.rows),
            config,
            metrics,
        )
    }

    fn describe(&self, config: &SceneConfig, evaluated: &Evaluated) -> Result<RenderSpec, RunError> {
        let system = TwoBodySystem::new(self.mu)?;
        let levels = Levels::linspace(self.clip.0, self.clip.1, self.levels)?;
        let px = |v: f64| config.scaled_px(v);
        let glyph = |v: u32| config.scaled_glyph(v);

        // The first boundary is the clip floor; nothing to trace there.
        let topo = levels
            .boundaries()
            .step_by(self.isoline_every.max(1))
            .skip(1)
            .map(|v| Isoline::new(v, WHITE).with_alpha(0.08))
            .collect::<Vec<_>>();

        let mut overlays = vec![
            Overlay::disc(system.primary(), px(20.0), SUN_EDGE),
            Overlay::disc(system.primary(), px(16.0), SUN),
            Overlay::disc(system.secondary(), px(9.0), WHITE),
            Overlay::disc(system.secondary(), px(7.0), EARTH),
        ];
        if let Some(solution) = &evaluated.solution {
            for p in solution.converged() {
                overlays.push(Overlay::marker(
                    p.position,
                    MarkerShape::Cross,
                    px(13.0),
                    config.scaled_stroke(5),
                    WHITE,
                ));
                let above = Point2::new(p.position.x, p.position.y + LABEL_LIFT);
                overlays.push(Overlay::label(above, p.label.to_string(), glyph(3), WHITE));
            }
        }
        // 1 AU scale bar.
        overlays.push(Overlay::Segment {
            from: Point2::new(0.0, -0.85),
            to: Point2::new(1.0, -0.85),
            thickness: config.scaled_stroke(2),
            color: WHITE,
            alpha: 1.0,
        });
        overlays.push(Overlay::label(Point2::new(0.5, -0.88), "1 AU (150 million km)", glyph(2), WHITE));
        if let Some(title) = &self.title {
            overlays.push(Overlay::title(title.clone(), glyph(4), WHITE));
        }

        Ok(RenderSpec::new(self.colormap, levels)
            .with_background(self.background)
            .with_isolines(topo)
            .with_overlays(overlays))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> SceneConfig {
        SceneConfig {
            scale: 0.05,
            workers: Some(2),
            ..SceneConfig::default()
        }
    }

    #[test]
    fn evaluates_with_all_five_points() {
        let mut m = RunMetrics::default();
        let e = EarthSunScene::default().evaluate(&small(), &mut m).unwrap();
        assert_eq!(e.field.shape(), (72, 128));
        assert!(e.solution.as_ref().unwrap().is_complete());
    }

    #[test]
    fn describes_crosses_for_every_point() {
        let scene = EarthSunScene::default();
        let cfg = small();
        let e = scene.evaluate(&cfg, &mut RunMetrics::default()).unwrap();
        let spec = scene.describe(&cfg, &e).unwrap();
        let crosses = spec
            .overlays
            .iter()
            .filter(|o| matches!(o, Overlay::Marker { shape: MarkerShape::Cross, .. }))
            .count();
        assert_eq!(crosses, 5);
        let labels: Vec<&str> = spec
            .overlays
            .iter()
            .filter_map(|o| match o {
                Overlay::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, ["L1", "L2", "L3", "L4", "L5", "1 AU (150 million km)"]);
        assert_eq!(
            spec.overlays.iter().filter(|o| matches!(o, Overlay::Title { .. })).count(),
            1
        );
        assert_eq!(spec.levels.count(), 119);
        assert_eq!(spec.isolines.len(), 59);
    }

    #[test]
    fn labels_sit_above_their_points() {
        let scene = EarthSunScene {
            title: None,
            ..EarthSunScene::default()
        };
        let cfg = small();
        let e = scene.evaluate(&cfg, &mut RunMetrics::default()).unwrap();
        let spec = scene.describe(&cfg, &e).unwrap();
        let l4 = e.solution.as_ref().unwrap().position(hillmap_core::LagrangeLabel::L4).unwrap();
        let label = spec
            .overlays
            .iter()
            .find_map(|o| match o {
                Overlay::Label { at, text, .. } if text == "L4" => Some(*at),
                _ => None,
            })
            .unwrap();
        assert_eq!(label.x, l4.x);
        assert!((label.y - l4.y - LABEL_LIFT).abs() < 1e-12);
        assert!(!spec.overlays.iter().any(|o| matches!(o, Overlay::Title { .. })));
    }

    #[test]
    fn invalid_mu_is_a_domain_error() {
        let scene = EarthSunScene {
            mu: 1.5,
            ..EarthSunScene::default()
        };
        let err = scene.evaluate(&small(), &mut RunMetrics::default()).unwrap_err();
        assert!(matches!(err, RunError::Domain(_)));
    }
}
