//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod boss;
pub mod collision;
pub mod entities;
pub mod explosion;
pub mod rng;
pub mod spawner;
pub mod state;
pub mod tick;

pub use boss::{Boss, BossProjectile, SpreadMotion};
pub use collision::Rect;
pub use entities::{BulletKind, Enemy, EnemyKind, Player, PlayerBullet, PowerUp, PowerUpKind};
pub use explosion::{Explosion, Particle};
pub use rng::{RandomSource, SeededRng};
pub use spawner::Spawner;
pub use state::{Cue, GameEvent, GamePhase, GameState, MusicCommand, SimOptions};
pub use tick::{TickInput, TickOutcome, apply_powerup, tick};
