//! Particle explosions
//!
//! Purely visual, but they live in the simulation so they freeze with pause
//! and clear on reset.

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use crate::consts::{EXPLOSION_LIFE, EXPLOSION_PARTICLES};
use crate::palette::Rgb;

/// A single spark
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Ticks left before it stops being drawn
    pub life: i32,
    pub color: Rgb,
    pub radius: f32,
}

impl Particle {
    pub fn is_visible(&self) -> bool {
        self.life > 0
    }

    /// Opacity 0-255 fading over the last ticks of life
    pub fn alpha(&self) -> u8 {
        (self.life.max(0) * 12).min(255) as u8
    }
}

/// A burst of particles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub origin: Vec2,
    /// Size of whatever blew up
    pub size: f32,
    pub life: u32,
    pub particles: Vec<Particle>,
}

impl Explosion {
    pub fn new(origin: Vec2, size: f32, rng: &mut impl RandomSource) -> Self {
        let particles = (0..EXPLOSION_PARTICLES)
            .map(|_| {
                let angle = rng.range_f32(0.0, TAU);
                let speed = rng.range_f32(1.0, 5.0);
                Particle {
                    pos: origin,
                    vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                    life: rng.range_i32(10, 20),
                    radius: rng.range_i32(2, 5) as f32,
                    color: [
                        rng.range_i32(200, 255) as u8,
                        rng.range_i32(100, 200) as u8,
                        rng.range_i32(0, 100) as u8,
                    ],
                }
            })
            .collect();

        Self {
            origin,
            size,
            life: EXPLOSION_LIFE,
            particles,
        }
    }

    /// Advance one tick. Returns true when the explosion has burned out.
    pub fn update(&mut self) -> bool {
        for p in &mut self.particles {
            p.pos += p.vel;
            p.life -= 1;
        }
        self.life = self.life.saturating_sub(1);
        self.life == 0
    }

    pub fn visible_particles(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(|p| p.is_visible())
    }
}
