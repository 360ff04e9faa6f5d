//! Boss ship and its spread-shot projectiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;
use crate::palette::{self, Rgb};

/// Spread angles in degrees, left to right
pub const SPREAD_ANGLES: [f32; 5] = [-30.0, -15.0, 0.0, 15.0, 30.0];

/// How boss projectiles travel once fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpreadMotion {
    /// Straight down regardless of spread angle (classic behaviour)
    #[default]
    Vertical,
    /// Along the fired spread angle
    Angled,
}

/// A boss bullet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BossProjectile {
    /// Centre of the projectile
    pub pos: Vec2,
    /// Velocity along the spread angle
    pub vel: Vec2,
}

impl BossProjectile {
    /// Fire along `angle_deg` from vertical (positive = rightward)
    pub fn new(origin: Vec2, angle_deg: f32) -> Self {
        let rad = angle_deg.to_radians();
        Self {
            pos: origin,
            vel: Vec2::new(rad.sin(), rad.cos()) * BOSS_PROJECTILE_SPEED,
        }
    }

    /// Advance one tick. Returns true once past the bottom of the canvas.
    pub fn update(&mut self, motion: SpreadMotion) -> bool {
        match motion {
            SpreadMotion::Vertical => self.pos.y += BOSS_PROJECTILE_SPEED,
            SpreadMotion::Angled => self.pos += self.vel,
        }
        self.pos.y > CANVAS_HEIGHT
    }

    pub fn rect(&self) -> Rect {
        Rect::centered(self.pos, BOSS_PROJECTILE_SIZE, BOSS_PROJECTILE_SIZE)
    }
}

/// The boss. Its absence from the game state is its inactive state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub pos: Vec2,
    pub size: f32,
    pub health: i32,
    pub max_health: i32,
    pub speed: f32,
    /// +1 moving right, -1 moving left
    pub direction: f32,
    pub attack_timer: u32,
    pub attack_delay: u32,
    pub projectiles: Vec<BossProjectile>,
}

impl Default for Boss {
    fn default() -> Self {
        Self {
            pos: Vec2::new(CANVAS_WIDTH / 2.0 - BOSS_SIZE / 2.0, BOSS_START_Y),
            size: BOSS_SIZE,
            health: BOSS_MAX_HEALTH,
            max_health: BOSS_MAX_HEALTH,
            speed: BOSS_SPEED,
            direction: 1.0,
            attack_timer: 0,
            attack_delay: BOSS_ATTACK_DELAY,
            projectiles: Vec::new(),
        }
    }
}

impl Boss {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rect(&self) -> Rect {
        Rect::square(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    /// Where spread shots leave the hull
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size / 2.0, self.pos.y + self.size)
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Apply bullet damage. Returns true if this hit defeated the boss.
    pub fn take_hit(&mut self, power: i32) -> bool {
        debug_assert!(power > 0);
        self.health -= power;
        self.is_defeated()
    }

    /// Fire the five-shot spread
    pub fn attack(&mut self) {
        let muzzle = self.muzzle();
        self.projectiles
            .extend(SPREAD_ANGLES.iter().map(|&angle| BossProjectile::new(muzzle, angle)));
    }

    /// Advance one tick: sweep sideways, fire on schedule, move projectiles.
    /// Returns true when the boss is defeated.
    pub fn update(&mut self, motion: SpreadMotion) -> bool {
        self.pos.x += self.speed * self.direction;
        if self.pos.x <= 0.0 || self.pos.x >= CANVAS_WIDTH - self.size {
            self.direction = -self.direction;
        }

        self.attack_timer += 1;
        if self.attack_timer >= self.attack_delay {
            self.attack();
            self.attack_timer = 0;
        }

        self.projectiles.retain_mut(|p| !p.update(motion));

        self.is_defeated()
    }

    /// Remove the first projectile overlapping `target`, in firing order
    pub fn take_projectile_hit(&mut self, target: &Rect) -> Option<BossProjectile> {
        let index = self
            .projectiles
            .iter()
            .position(|p| p.rect().intersects(target))?;
        Some(self.projectiles.remove(index))
    }

    pub fn color(&self) -> Rgb {
        palette::DARK_RED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_spawns_centered() {
        let boss = Boss::new();
        assert_eq!(boss.pos, Vec2::new(340.0, 50.0));
        assert_eq!(boss.health, 500);
    }

    #[test]
    fn test_direction_flips_at_edges() {
        let mut boss = Boss::new();
        boss.pos.x = CANVAS_WIDTH - boss.size - 1.0;
        boss.update(SpreadMotion::Vertical);
        assert_eq!(boss.direction, -1.0);

        boss.pos.x = 1.0;
        boss.update(SpreadMotion::Vertical);
        assert_eq!(boss.direction, 1.0);
    }

    #[test]
    fn test_attack_every_delay_ticks() {
        let mut boss = Boss::new();
        for _ in 0..BOSS_ATTACK_DELAY - 1 {
            boss.update(SpreadMotion::Vertical);
        }
        assert!(boss.projectiles.is_empty());

        boss.update(SpreadMotion::Vertical);
        assert_eq!(boss.projectiles.len(), 5);
        assert_eq!(boss.attack_timer, 0);
    }

    #[test]
    fn test_spread_velocity() {
        let shot = BossProjectile::new(Vec2::ZERO, -30.0);
        assert!((shot.vel.x + 2.5).abs() < 1e-4);
        assert!((shot.vel.y - 5.0 * 30f32.to_radians().cos()).abs() < 1e-4);
    }

    #[test]
    fn test_vertical_motion_ignores_angle() {
        let mut shot = BossProjectile::new(Vec2::new(100.0, 100.0), 30.0);
        shot.update(SpreadMotion::Vertical);
        assert_eq!(shot.pos, Vec2::new(100.0, 105.0));

        let mut shot = BossProjectile::new(Vec2::new(100.0, 100.0), 30.0);
        shot.update(SpreadMotion::Angled);
        assert!(shot.pos.x > 100.0);
    }

    #[test]
    fn test_projectiles_expire_below_canvas() {
        let mut boss = Boss::new();
        boss.projectiles.push(BossProjectile::new(Vec2::new(10.0, CANVAS_HEIGHT - 2.0), 0.0));
        boss.update(SpreadMotion::Vertical);
        assert!(boss.projectiles.is_empty());
    }

    #[test]
    fn test_projectile_hits_removed_in_order() {
        let mut boss = Boss::new();
        boss.projectiles.push(BossProjectile::new(Vec2::new(10.0, 10.0), 0.0));
        boss.projectiles.push(BossProjectile::new(Vec2::new(12.0, 12.0), 0.0));
        boss.projectiles.push(BossProjectile::new(Vec2::new(500.0, 500.0), 0.0));
        let target = Rect::new(0.0, 0.0, 50.0, 50.0);

        let first = boss.take_projectile_hit(&target).map(|p| p.pos);
        assert_eq!(first, Some(Vec2::new(10.0, 10.0)));
        assert_eq!(boss.projectiles.len(), 2);

        assert!(boss.take_projectile_hit(&target).is_some());
        assert!(boss.take_projectile_hit(&target).is_none());
        assert_eq!(boss.projectiles.len(), 1);
    }

    #[test]
    fn test_update_reports_defeat() {
        let mut boss = Boss::new();
        assert!(!boss.update(SpreadMotion::Vertical));
        boss.health = 0;
        assert!(boss.update(SpreadMotion::Vertical));
    }

    proptest! {
        #[test]
        fn health_strictly_decreases(hits in proptest::collection::vec(1i32..20, 1..60)) {
            let mut boss = Boss::new();
            let mut last = boss.health;
            for power in hits {
                let defeated = boss.take_hit(power);
                prop_assert!(boss.health < last);
                prop_assert_eq!(defeated, boss.health <= 0);
                last = boss.health;
                if defeated {
                    break;
                }
            }
        }
    }
}
