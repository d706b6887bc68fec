//! Log-polar "archipelago" of normalized planetary wells.

use std::f64::consts::{FRAC_PI_3, PI};
use std::time::Instant;

use hillmap_core::Point2;
use hillmap_field::{evaluate_archipelago, Archipelago, ArchipelagoParams, PlanetWell};
use hillmap_grid::{LogPolarGrid, LogPolarMapping};
use hillmap_render::{hex, Colormap, Isoline, Levels, Overlay, RenderSpec};
use image::Rgb;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use super::{Evaluated, Scene};
use crate::config::{SceneConfig, SceneKind};
use crate::error::RunError;
use crate::metrics::{elapsed_us, RunMetrics};

/// Five planets from Mercury to Jupiter on one log-polar image, each
/// drawn as its own normalized Hill well.
#[derive(Clone, Debug, PartialEq)]
pub struct ArchipelagoScene {
    /// Samples per side at scale 1. Default: 1800.
    pub resolution: usize,
    /// Screen → heliocentric radius law.
    pub mapping: LogPolarMapping,
    /// Blending of the per-planet wells.
    pub params: ArchipelagoParams,
    /// Clip window of the filled bands. Default: `[-4, 0.5]`.
    pub clip: (f64, f64),
    /// Level boundaries over the clip window; `n` boundaries give
    /// `n - 1` bands. Default: 90.
    pub levels: usize,
    /// Band palette. Default: gist_stern.
    pub colormap: Colormap,
    /// Excluded-cell color. Default: `#050505`.
    pub background: Rgb<u8>,
    /// Planet whose L4/L5 get a Trojan cloud. Default: Jupiter.
    pub trojan_host: Option<String>,
    /// Points per Trojan cloud. Default: 300.
    pub trojan_count: usize,
    /// Standard deviation of a cloud in screen units. Default: 0.02.
    pub trojan_sigma: f64,
    /// Text across the top of the map.
    pub title: Option<String>,
}

impl Default for ArchipelagoScene {
    fn default() -> Self {
        Self {
            resolution: 1800,
            mapping: LogPolarMapping::default(),
            params: ArchipelagoParams::default(),
            clip: (-4.0, 0.5),
            levels: 90,
            colormap: Colormap::GistStern,
            background: hex(0x050505),
            trojan_host: Some("Jupiter".to_string()),
            trojan_count: 300,
            trojan_sigma: 0.02,
            title: Some(
                "Solar System Gravity Archipelago\n(Log-Polar Projection - Normalized Local Wells)".to_string(),
            ),
        }
    }
}

const SUN: Rgb<u8> = hex(0xffd700);
const SUN_EDGE: Rgb<u8> = hex(0xffaa00);
const WHITE: Rgb<u8> = hex(0xffffff);
const BLACK: Rgb<u8> = hex(0x000000);
const TROJAN: Rgb<u8> = hex(0xaaaaaa);
const GRAY: Rgb<u8> = hex(0x808080);

/// Planet names sit this factor further out than the planet.
const NAME_PUSH: f64 = 1.15;
/// Trojan labels sit this factor further out than L4/L5.
const TROJAN_LABEL_PUSH: f64 = 1.08;

fn planet_color(name: &str) -> Rgb<u8> {
    match name {
        "Venus" => hex(0xffaa00),
        "Mars" => hex(0xff5533),
        "Earth" => hex(0x00aaff),
        "Jupiter" => hex(0xdbaa77),
        _ => WHITE,
    }
}

/// Standard normal sample.
fn box_muller(rng: &mut ChaCha8Rng) -> f64 {
    let u1 = rng.random::<f64>().max(1e-300);
    let u2 = rng.random::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

impl ArchipelagoScene {
    /// The planets drawn by this scene.
    pub fn archipelago(&self) -> Result<Archipelago, RunError> {
        let mut a = Archipelago::new(self.params)?;
        for planet in Archipelago::solar_system()?.planets() {
            a.insert(planet.clone())?;
        }
        Ok(a)
    }

    /// Screen position of a heliocentric point at `(radius, angle)`.
    pub fn screen_point(&self, radius: f64, angle: f64) -> Point2 {
        let rho = self.mapping.screen_radius_for(radius);
        Point2::new(rho * angle.cos(), rho * angle.sin())
    }

    /// Gaussian clouds around the host's L4 and L5, in screen units.
    ///
    /// Deterministic for a given `seed`.
    pub fn trojan_clouds(&self, host: &PlanetWell, seed: u64) -> Vec<Point2> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut points = Vec::with_capacity(2 * self.trojan_count);
        for offset in [FRAC_PI_3, -FRAC_PI_3] {
            let c = self.screen_point(host.orbit_radius(), host.angle() + offset);
            for _ in 0..self.trojan_count {
                let dx = box_muller(&mut rng) * self.trojan_sigma;
                let dy = box_muller(&mut rng) * self.trojan_sigma;
                points.push(Point2::new(c.x + dx, c.y + dy));
            }
        }
        points
    }
}

impl Scene for ArchipelagoScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Archipelago
    }

    fn evaluate(&self, config: &SceneConfig, metrics: &mut RunMetrics) -> Result<Evaluated, RunError> {
        let archipelago = self.archipelago()?;

        let t = Instant::now();
        let grid = LogPolarGrid::new(config.scaled(self.resolution), self.mapping)?;
        metrics.grid_us = elapsed_us(t);

        let t = Instant::now();
        let field = evaluate_archipelago(&archipelago, &grid)?;
        metrics.evaluate_us = elapsed_us(t);

        Ok(Evaluated {
            field,
            bounds: grid.screen_bounds(),
            solution: None,
            levels: None,
        })
    }

    fn describe(&self, config: &SceneConfig, _evaluated: &Evaluated) -> Result<RenderSpec, RunError> {
        let archipelago = self.archipelago()?;
        let levels = Levels::linspace(self.clip.0, self.clip.1, self.levels)?;
        let px = |v: f64| config.scaled_px(v);
        let glyph = |v: u32| config.scaled_glyph(v);

        let topo = levels
            .boundaries()
            .map(|v| Isoline::new(v, WHITE).with_alpha(0.05))
            .collect::<Vec<_>>();

        let mut overlays = Vec::new();
        for planet in archipelago.planets() {
            let rho = self.mapping.screen_radius_for(planet.orbit_radius());
            overlays.push(Overlay::Ellipse {
                center: Point2::ORIGIN,
                semi_x: rho,
                semi_y: rho,
                thickness: 1,
                dashed: true,
                color: WHITE,
                alpha: 0.05,
            });
        }
        for planet in archipelago.planets() {
            let at = self.screen_point(planet.orbit_radius(), planet.angle());
            overlays.push(Overlay::disc(at, px(11.0), BLACK));
            let color = planet_color(planet.name());
            overlays.push(Overlay::disc(at, px(9.0), color));
            overlays.push(Overlay::label(at.scaled(NAME_PUSH), planet.name(), glyph(2), color));
        }
        if let Some(host) = self.trojan_host.as_deref().and_then(|n| archipelago.get(n)) {
            overlays.push(Overlay::Scatter {
                points: self.trojan_clouds(host, config.seed),
                radius: px(1.0),
                color: TROJAN,
                alpha: 0.5,
            });
            for (offset, name) in [(FRAC_PI_3, "L4"), (-FRAC_PI_3, "L5")] {
                let at = self.screen_point(host.orbit_radius(), host.angle() + offset);
                overlays.push(Overlay::label(at.scaled(TROJAN_LABEL_PUSH), name, glyph(2), GRAY));
            }
        }
        overlays.push(Overlay::disc(Point2::ORIGIN, px(28.0), SUN_EDGE));
        overlays.push(Overlay::disc(Point2::ORIGIN, px(24.0), SUN));
        if let Some(title) = &self.title {
            overlays.push(Overlay::title(title.clone(), glyph(3), WHITE));
        }

        Ok(RenderSpec::new(self.colormap, levels)
            .with_background(self.background)
            .with_isolines(topo)
            .with_overlays(overlays))
    }
}
