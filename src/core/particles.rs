use super::constants::{
    PARTICLE_COUNT, PARTICLE_LIFETIME_MS, PARTICLE_PALETTE, PARTICLE_SPEED_MAX,
    PARTICLE_SPEED_MIN,
};
use glam::DVec2;
use rand::seq::SliceRandom;
use rand::Rng;
use std::f64::consts::TAU;

// Used when a config is built with an empty palette.
const FALLBACK_COLOR: &str = "#ffffff";

/// Axis-aligned box in client (viewport) pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.left, self.top)
    }
}

/// Point where a burst starts: the target's center expressed relative to the
/// container's top-left corner.
pub fn burst_origin(target: Bounds, container: Bounds) -> DVec2 {
    target.center() - container.origin()
}

/// Parameters of one particle burst.
#[derive(Clone, Debug, PartialEq)]
pub struct BurstConfig {
    pub count: usize,
    pub speed_min: f64,
    pub speed_max: f64,
    pub lifetime_ms: u32,
    pub palette: &'static [&'static str],
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            speed_min: PARTICLE_SPEED_MIN,
            speed_max: PARTICLE_SPEED_MAX,
            lifetime_ms: PARTICLE_LIFETIME_MS,
            palette: &PARTICLE_PALETTE,
        }
    }
}

/// A single planned particle. `displacement` is how far it travels from
/// `origin` over its lifetime; its length is the particle's speed.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub origin: DVec2,
    pub displacement: DVec2,
    pub color: &'static str,
}

/// Direction of the `index`-th of `count` particles, evenly spread over a
/// full turn.
#[inline]
pub fn burst_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    TAU * index as f64 / count as f64
}

/// Plan a burst of `config.count` particles radiating from `origin`.
///
/// Directions are deterministic; speed and color are drawn from `rng`.
pub fn plan_burst<R: Rng + ?Sized>(origin: DVec2, config: &BurstConfig, rng: &mut R) -> Vec<Particle> {
    (0..config.count)
        .map(|i| {
            let angle = burst_angle(i, config.count);
            let speed = if config.speed_max > config.speed_min {
                rng.gen_range(config.speed_min..config.speed_max)
            } else {
                config.speed_min
            };
            let displacement = DVec2::new(angle.cos(), angle.sin()) * speed;
            let color = config.palette.choose(rng).copied().unwrap_or(FALLBACK_COLOR);
            Particle {
                origin,
                displacement,
                color,
            }
        })
        .collect()
}
