//! Read-only per-frame view of the game for renderers
//!
//! Renderers never touch [`GameState`] directly; they get a snapshot of
//! positions, sizes, variants and colors plus the HUD values.

use glam::Vec2;
use serde::Serialize;

use crate::palette::{self, Rgb};
use crate::sim::{BulletKind, GamePhase, GameState, PowerUpKind, Rect};

/// HUD values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub score: u32,
    pub level: u32,
    pub ship_level: u32,
    /// Never negative
    pub health: i32,
    pub max_health: i32,
    pub bullet_power: i32,
    /// `(health, max_health)` while a boss is alive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boss_health: Option<(i32, i32)>,
}

impl Hud {
    /// Fraction of the health bar to fill (0.0 - 1.0)
    pub fn health_fraction(&self) -> f32 {
        if self.max_health <= 0 {
            return 0.0;
        }
        (self.health as f32 / self.max_health as f32).clamp(0.0, 1.0)
    }

    pub fn boss_health_fraction(&self) -> Option<f32> {
        self.boss_health
            .map(|(hp, max)| (hp.max(0) as f32 / max.max(1) as f32).clamp(0.0, 1.0))
    }
}

/// One drawable entity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityView {
    pub rect: Rect,
    pub kind: &'static str,
    pub color: Rgb,
    /// Letter drawn on top, for pickups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<char>,
}

/// A visible particle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParticleView {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub alpha: u8,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub tick: u64,
    pub hud: Hud,
    pub player: EntityView,
    pub enemies: Vec<EntityView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boss: Option<EntityView>,
    pub boss_projectiles: Vec<EntityView>,
    pub bullets: Vec<EntityView>,
    pub powerups: Vec<EntityView>,
    pub particles: Vec<ParticleView>,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let player = &state.player;

        let hud = Hud {
            score: state.score,
            level: state.level,
            ship_level: player.level,
            health: player.health.max(0),
            max_health: player.max_health,
            bullet_power: player.bullet_power,
            boss_health: state.boss.as_ref().map(|b| (b.health.max(0), b.max_health)),
        };

        let enemies = state
            .enemies
            .iter()
            .map(|e| EntityView {
                rect: e.rect(),
                kind: e.kind.as_str(),
                color: e.kind.color(),
                label: None,
            })
            .collect();

        let bullets = state
            .bullets
            .iter()
            .map(|b| EntityView {
                rect: b.rect(),
                kind: match b.kind {
                    BulletKind::Normal => "normal",
                    BulletKind::Power => "power",
                },
                color: b.kind.color(),
                label: None,
            })
            .collect();

        let powerups = state
            .powerups
            .iter()
            .map(|p| EntityView {
                rect: p.rect(),
                kind: powerup_name(p.kind),
                color: p.kind.color(),
                label: Some(p.kind.label()),
            })
            .collect();

        let boss = state.boss.as_ref().map(|b| EntityView {
            rect: b.rect(),
            kind: "boss",
            color: b.color(),
            label: None,
        });

        let boss_projectiles = state
            .boss
            .iter()
            .flat_map(|b| b.projectiles.iter())
            .map(|p| EntityView {
                rect: p.rect(),
                kind: "boss_projectile",
                color: palette::RED,
                label: None,
            })
            .collect();

        let particles = state
            .explosions
            .iter()
            .flat_map(|e| e.visible_particles())
            .map(|p| ParticleView {
                pos: p.pos,
                radius: p.radius,
                color: p.color,
                alpha: p.alpha(),
            })
            .collect();

        Self {
            phase: state.phase,
            tick: state.time_ticks,
            hud,
            player: EntityView {
                rect: player.rect(),
                kind: "player",
                color: player.color(),
                label: None,
            },
            enemies,
            boss,
            boss_projectiles,
            bullets,
            powerups,
            particles,
        }
    }
}

fn powerup_name(kind: PowerUpKind) -> &'static str {
    match kind {
        PowerUpKind::Health => "health",
        PowerUpKind::Rapid => "rapid",
        PowerUpKind::Power => "power",
        PowerUpKind::Upgrade => "upgrade",
    }
}
