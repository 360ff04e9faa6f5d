//! Rendering module
//!
//! The game hands a [`FrameSnapshot`] to a [`RenderSink`] once per frame.
//! [`DrawList`] is the built-in sink: it flattens the snapshot into
//! backend-agnostic [`Shape`]s.

pub mod shapes;
pub mod starfield;

pub use shapes::Shape;
pub use starfield::Starfield;

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::palette;
use crate::sim::GamePhase;
use crate::snapshot::FrameSnapshot;
use glam::Vec2;

/// Receives one immutable snapshot per rendered frame
pub trait RenderSink {
    fn render(&mut self, frame: &FrameSnapshot);
}

/// Collects draw commands for the last rendered frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub shapes: Vec<Shape>,
    /// Particle cap from the quality settings
    pub max_particles: usize,
    /// Background stars, when the quality preset allows them
    pub starfield: Option<Starfield>,
    pub frames: u64,
}

impl DrawList {
    pub fn new(max_particles: usize) -> Self {
        Self {
            shapes: Vec::new(),
            max_particles,
            starfield: None,
            frames: 0,
        }
    }

    pub fn with_starfield(mut self, starfield: Starfield) -> Self {
        self.starfield = Some(starfield);
        self
    }

    fn overlay(&mut self, title: &str, subtitle: Option<String>) {
        let white = shapes::rgba(palette::WHITE, 255);
        self.shapes.push(Shape::Text {
            pos: Vec2::new(CANVAS_WIDTH / 2.0 - 80.0, CANVAS_HEIGHT / 2.0 - 50.0),
            text: title.to_string(),
            color: white,
        });
        if let Some(text) = subtitle {
            self.shapes.push(Shape::Text {
                pos: Vec2::new(CANVAS_WIDTH / 2.0 - 120.0, CANVAS_HEIGHT / 2.0 + 20.0),
                text,
                color: white,
            });
        }
    }
}

impl RenderSink for DrawList {
    fn render(&mut self, frame: &FrameSnapshot) {
        self.shapes.clear();
        self.frames += 1;

        if let Some(starfield) = &mut self.starfield {
            // Pause freezes the background along with the game
            if frame.phase != GamePhase::Paused {
                starfield.update();
            }
            self.shapes.extend(starfield.stars.iter().map(shapes::star));
        }

        self.shapes.extend(shapes::player(&frame.player));
        for enemy in &frame.enemies {
            self.shapes.extend(shapes::enemy(enemy));
        }
        if let Some(boss) = &frame.boss {
            self.shapes.extend(shapes::boss(boss));
        }
        self.shapes
            .extend(frame.boss_projectiles.iter().map(shapes::projectile));
        self.shapes.extend(frame.bullets.iter().flat_map(shapes::bullet));
        self.shapes.extend(frame.powerups.iter().flat_map(shapes::powerup));
        self.shapes.extend(
            frame
                .particles
                .iter()
                .take(self.max_particles)
                .map(shapes::particle),
        );
        self.shapes.extend(shapes::hud(&frame.hud));

        match frame.phase {
            GamePhase::Playing => {}
            GamePhase::Paused => self.overlay("PAUSED", None),
            GamePhase::GameOver => self.overlay(
                "GAME OVER",
                Some(format!(
                    "Final Score: {} - R to restart, Q to quit",
                    frame.hud.score
                )),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::STAR_COUNT;
    use crate::sim::{GameState, PowerUp, PowerUpKind, SeededRng};

    fn texts(list: &DrawList) -> Vec<&str> {
        list.shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_game_over_overlay() {
        let mut state = GameState::default();
        state.phase = GamePhase::GameOver;
        let mut list = DrawList::new(100);
        list.render(&FrameSnapshot::capture(&state));
        assert!(texts(&list).contains(&"GAME OVER"));
    }

    #[test]
    fn test_particle_cap() {
        let mut state = GameState::default();
        let mut rng = SeededRng::new(1);
        for _ in 0..4 {
            state.spawn_explosion(Vec2::new(100.0, 100.0), 40.0, &mut rng);
        }
        let snap = FrameSnapshot::capture(&state);
        assert_eq!(snap.particles.len(), 60);

        let mut list = DrawList::new(10);
        list.render(&snap);
        let circles_capped = list.shapes.len();

        let mut list = DrawList::new(0);
        list.render(&snap);
        assert_eq!(circles_capped - list.shapes.len(), 10);
    }

    #[test]
    fn test_starfield_scrolls_unless_paused() {
        let mut state = GameState::default();
        let mut list = DrawList::new(0).with_starfield(Starfield::new(SeededRng::new(5)));

        list.render(&FrameSnapshot::capture(&state));
        let first = list.starfield.as_ref().map(|f| f.stars[0]);
        let circles = list
            .shapes
            .iter()
            .filter(|s| matches!(s, Shape::Circle { .. }))
            .count();
        assert!(circles >= STAR_COUNT);

        state.phase = GamePhase::Paused;
        list.render(&FrameSnapshot::capture(&state));
        assert_eq!(list.starfield.as_ref().map(|f| f.stars[0]), first);

        state.phase = GamePhase::GameOver;
        list.render(&FrameSnapshot::capture(&state));
        assert_ne!(list.starfield.as_ref().map(|f| f.stars[0]), first);
    }

    #[test]
    fn test_powerup_letter_drawn() {
        let mut state = GameState::default();
        state
            .powerups
            .push(PowerUp::new(Vec2::new(100.0, 100.0), PowerUpKind::Rapid));
        let mut list = DrawList::new(0);
        list.render(&FrameSnapshot::capture(&state));
        assert!(texts(&list).contains(&"R"));
    }
}
