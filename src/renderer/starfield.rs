//! Scrolling star background
//!
//! Purely cosmetic, so it draws from its own random stream and never touches
//! the simulation. It keeps scrolling across restarts.

use glam::Vec2;

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, STAR_COUNT, STAR_MAX_SPEED, STAR_MIN_SPEED};
use crate::sim::{RandomSource, SeededRng};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
}

#[derive(Debug, Clone)]
pub struct Starfield<R = SeededRng> {
    pub stars: Vec<Star>,
    rng: R,
}

impl<R: RandomSource> Starfield<R> {
    pub fn new(mut rng: R) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                pos: Vec2::new(
                    rng.range_i32(0, CANVAS_WIDTH as i32) as f32,
                    rng.range_i32(0, CANVAS_HEIGHT as i32) as f32,
                ),
                radius: rng.range_i32(1, 3) as f32,
                speed: rng.range_f32(STAR_MIN_SPEED, STAR_MAX_SPEED),
            })
            .collect();
        Self { stars, rng }
    }

    /// Scroll one frame; stars leaving the bottom reappear at the top
    pub fn update(&mut self) {
        for star in &mut self.stars {
            star.pos.y += star.speed;
            if star.pos.y > CANVAS_HEIGHT {
                star.pos.y = 0.0;
                star.pos.x = self.rng.range_i32(0, CANVAS_WIDTH as i32) as f32;
            }
        }
    }
}
