//! Space Shooter - a vertical arcade shooter with waves and a boss
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, game state)
//! - `game`: Fixed-timestep frame driver that owns state, RNG and audio
//! - `audio`: Cue sink abstraction
//! - `renderer`: Render sink abstraction and draw-list generation
//! - `snapshot`: Read-only per-frame view for renderers
//! - `settings`: User preferences

pub mod audio;
pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use game::Game;
pub use settings::{QualityPreset, Settings};
pub use snapshot::{FrameSnapshot, Hud};

/// Game configuration constants
pub mod consts {
    /// Virtual canvas size
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Fixed simulation rate. Every timer below counts ticks at this rate.
    pub const TICK_RATE: u32 = 60;
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const PLAYER_SPEED: f32 = 8.0;
    pub const PLAYER_START_HEALTH: i32 = 100;

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 40.0;
    pub const ENEMY_MIN_SPEED: f32 = 2.0;
    pub const ENEMY_MAX_SPEED: f32 = 5.0;
    pub const ENEMY_SPAWN_DELAY: u32 = 30;

    /// Boss defaults
    pub const BOSS_SIZE: f32 = 120.0;
    pub const BOSS_MAX_HEALTH: i32 = 500;
    pub const BOSS_SPEED: f32 = 2.0;
    pub const BOSS_START_Y: f32 = 50.0;
    pub const BOSS_SPAWN_DELAY: u32 = 1000;
    pub const BOSS_ATTACK_DELAY: u32 = 60;
    pub const BOSS_PROJECTILE_SPEED: f32 = 5.0;
    /// Side length of the square boss projectile hit box
    pub const BOSS_PROJECTILE_SIZE: f32 = 8.0;

    /// Player bullets
    pub const BULLET_SPEED: f32 = 15.0;
    pub const BULLET_COOLDOWN_MAX: u32 = 10;
    /// Rapid-fire power-ups can't push the cooldown below this
    pub const RAPID_FIRE_FLOOR: u32 = 5;
    pub const RAPID_FIRE_STEP: u32 = 2;

    /// Power-ups
    pub const POWERUP_SIZE: f32 = 30.0;
    pub const POWERUP_SPEED: f32 = 3.0;
    pub const POWERUP_SPAWN_DELAY: u32 = 300;
    pub const POWERUP_HEAL: i32 = 30;
    pub const BOSS_BONUS_POWERUPS: usize = 3;

    /// Damage dealt to the player
    pub const ENEMY_COLLISION_DAMAGE: i32 = 10;
    pub const BOSS_COLLISION_DAMAGE: i32 = 30;
    pub const BOSS_PROJECTILE_DAMAGE: i32 = 15;

    /// Score awards
    pub const SCORE_ENEMY_ESCAPED: u32 = 1;
    pub const SCORE_ENEMY_DESTROYED: u32 = 5;
    pub const SCORE_BOSS_DEFEATED: u32 = 100;
    pub const SCORE_PER_LEVEL: u32 = 50;

    /// Ship upgrade
    pub const UPGRADE_HEALTH_BONUS: i32 = 50;
    pub const UPGRADE_BURST_COUNT: usize = 20;

    /// Explosion particle system
    pub const EXPLOSION_LIFE: u32 = 20;
    pub const EXPLOSION_PARTICLES: usize = 15;

    /// Background star-field
    pub const STAR_COUNT: usize = 100;
    pub const STAR_MIN_SPEED: f32 = 0.5;
    pub const STAR_MAX_SPEED: f32 = 1.5;
}

/// Entity colors (RGB)
pub mod palette {
    pub type Rgb = [u8; 3];

    pub const WHITE: Rgb = [255, 255, 255];
    pub const RED: Rgb = [255, 0, 0];
    pub const GREEN: Rgb = [0, 255, 0];
    pub const BLUE: Rgb = [0, 0, 255];
    pub const YELLOW: Rgb = [255, 255, 0];
    pub const PURPLE: Rgb = [128, 0, 128];
    pub const ORANGE: Rgb = [255, 165, 0];
    pub const CYAN: Rgb = [0, 255, 255];
    pub const DARK_RED: Rgb = [139, 0, 0];
}
