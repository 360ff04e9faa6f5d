//! Player ship and the small entities that fly around it

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::rng::RandomSource;
use crate::consts::*;
use crate::palette::{self, Rgb};

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner of the bounding square
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    /// May dip below zero on the tick that ends the game
    pub health: i32,
    pub max_health: i32,
    /// Ship level (>= 1), raised by upgrade power-ups
    pub level: u32,
    /// Damage carried by newly fired bullets (>= 1)
    pub bullet_power: i32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT - 2.0 * PLAYER_SIZE),
            size: PLAYER_SIZE,
            speed: PLAYER_SPEED,
            health: PLAYER_START_HEALTH,
            max_health: PLAYER_START_HEALTH,
            level: 1,
            bullet_power: 1,
        }
    }
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    /// Move horizontally by `dir` steps of `speed`, staying on the canvas
    pub fn steer(&mut self, dir: f32) {
        let max_x = CANVAS_WIDTH - self.size;
        self.pos.x = (self.pos.x + dir * self.speed).clamp(0.0, max_x);
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    /// Raise ship level: more health, a full heal and stronger bullets
    pub fn upgrade(&mut self) {
        self.level += 1;
        self.max_health += UPGRADE_HEALTH_BONUS;
        self.health = self.max_health;
        self.bullet_power += 1;
    }

    /// Bullets for one trigger pull: one from the nose, plus two wing guns
    /// from ship level 2 on.
    pub fn fire(&self) -> Vec<PlayerBullet> {
        let nose = self.pos.y;
        let mut offsets = vec![self.size / 2.0];
        if self.level >= 2 {
            offsets.push(self.size / 4.0);
            offsets.push(3.0 * self.size / 4.0);
        }
        offsets
            .into_iter()
            .map(|dx| {
                PlayerBullet::new(
                    Vec2::new(self.pos.x + dx - 2.0, nose),
                    BulletKind::Normal,
                    self.bullet_power,
                )
            })
            .collect()
    }

    pub fn color(&self) -> Rgb {
        match self.level {
            1 => palette::BLUE,
            2 => palette::GREEN,
            _ => palette::PURPLE,
        }
    }
}

/// Enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnemyKind {
    #[default]
    Normal,
    Fast,
    Big,
}

impl EnemyKind {
    /// Roll a variant: 10% big, 20% fast, the rest normal
    pub fn roll(rng: &mut impl RandomSource) -> Self {
        let roll = rng.unit();
        if roll < 0.1 {
            EnemyKind::Big
        } else if roll < 0.3 {
            EnemyKind::Fast
        } else {
            EnemyKind::Normal
        }
    }

    pub fn speed_multiplier(&self) -> f32 {
        match self {
            EnemyKind::Normal => 1.0,
            EnemyKind::Fast => 1.5,
            EnemyKind::Big => 0.7,
        }
    }

    pub fn size(&self) -> f32 {
        match self {
            EnemyKind::Normal => ENEMY_SIZE,
            EnemyKind::Fast => (ENEMY_SIZE * 0.7).floor(),
            EnemyKind::Big => (ENEMY_SIZE * 1.5).floor(),
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            EnemyKind::Normal => palette::RED,
            EnemyKind::Fast => palette::YELLOW,
            EnemyKind::Big => palette::PURPLE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnemyKind::Normal => "normal",
            EnemyKind::Fast => "fast",
            EnemyKind::Big => "big",
        }
    }
}

/// A descending enemy ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub kind: EnemyKind,
    pub size: f32,
    /// Pixels per tick, fixed at creation
    pub speed: f32,
}

impl Enemy {
    /// Create an enemy; `base_speed` is scaled by the variant and the current
    /// game level. Later level changes don't affect it.
    pub fn new(pos: Vec2, kind: EnemyKind, base_speed: f32, level: u32) -> Self {
        let speed = base_speed * (1.0 + level as f32 * 0.1) * kind.speed_multiplier();
        Self {
            pos,
            kind,
            size: kind.size(),
            speed,
        }
    }

    /// Advance one tick. Returns true once past the bottom of the canvas.
    pub fn update(&mut self) -> bool {
        self.pos.y += self.speed;
        self.pos.y > CANVAS_HEIGHT
    }

    pub fn rect(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }
}

/// Player bullet variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BulletKind {
    #[default]
    Normal,
    Power,
}

impl BulletKind {
    pub fn speed(&self) -> f32 {
        match self {
            BulletKind::Normal => BULLET_SPEED,
            BulletKind::Power => BULLET_SPEED * 1.2,
        }
    }

    /// Width and height
    pub fn extent(&self) -> Vec2 {
        match self {
            BulletKind::Normal => Vec2::new(5.0, 15.0),
            BulletKind::Power => Vec2::new(8.0, 20.0),
        }
    }

    pub fn power(&self, bullet_power: i32) -> i32 {
        match self {
            BulletKind::Normal => bullet_power,
            BulletKind::Power => bullet_power * 2,
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            BulletKind::Normal => palette::GREEN,
            BulletKind::Power => palette::YELLOW,
        }
    }
}

/// A bullet fired by the player. Single hit: it is consumed by the first
/// enemy or boss it touches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerBullet {
    pub pos: Vec2,
    pub kind: BulletKind,
    pub extent: Vec2,
    pub speed: f32,
    /// Damage against the boss, captured when fired
    pub power: i32,
}

impl PlayerBullet {
    pub fn new(pos: Vec2, kind: BulletKind, bullet_power: i32) -> Self {
        Self {
            pos,
            kind,
            extent: kind.extent(),
            speed: kind.speed(),
            power: kind.power(bullet_power),
        }
    }

    /// Advance one tick. Returns true once past the top of the canvas.
    pub fn update(&mut self) -> bool {
        self.pos.y -= self.speed;
        self.pos.y < 0.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.extent.x, self.extent.y)
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Restore some health
    Health,
    /// Permanently shorten the fire cooldown
    Rapid,
    /// +1 bullet power
    Power,
    /// Ship level up with full heal
    Upgrade,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::Health,
        PowerUpKind::Rapid,
        PowerUpKind::Power,
        PowerUpKind::Upgrade,
    ];

    /// Pick a type uniformly
    pub fn roll(rng: &mut impl RandomSource) -> Self {
        Self::ALL[rng.index(Self::ALL.len())]
    }

    pub fn color(&self) -> Rgb {
        match self {
            PowerUpKind::Health => palette::GREEN,
            PowerUpKind::Rapid => palette::BLUE,
            PowerUpKind::Power => palette::YELLOW,
            PowerUpKind::Upgrade => palette::PURPLE,
        }
    }

    /// Letter shown on the pickup
    pub fn label(&self) -> char {
        match self {
            PowerUpKind::Health => 'H',
            PowerUpKind::Rapid => 'R',
            PowerUpKind::Power => 'P',
            PowerUpKind::Upgrade => 'U',
        }
    }
}

/// A falling power-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub kind: PowerUpKind,
    pub size: f32,
    pub speed: f32,
}

impl PowerUp {
    pub fn new(pos: Vec2, kind: PowerUpKind) -> Self {
        Self {
            pos,
            kind,
            size: POWERUP_SIZE,
            speed: POWERUP_SPEED,
        }
    }

    /// Advance one tick. Returns true once past the bottom of the canvas.
    pub fn update(&mut self) -> bool {
        self.pos.y += self.speed;
        self.pos.y > CANVAS_HEIGHT
    }

    pub fn rect(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }
}
