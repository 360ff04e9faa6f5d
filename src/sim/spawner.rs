//! Spawn timers for enemies, power-ups and the boss
//!
//! Timers count ticks, so spawn cadence assumes the fixed `TICK_RATE`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::boss::Boss;
use super::entities::{Enemy, EnemyKind, PowerUp, PowerUpKind};
use super::rng::RandomSource;
use crate::consts::*;

/// Independent spawn timers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawner {
    pub enemy_timer: u32,
    pub enemy_delay: u32,
    pub powerup_timer: u32,
    pub powerup_delay: u32,
    pub boss_timer: u32,
    pub boss_delay: u32,
}

impl Default for Spawner {
    fn default() -> Self {
        Self {
            enemy_timer: 0,
            enemy_delay: ENEMY_SPAWN_DELAY,
            powerup_timer: 0,
            powerup_delay: POWERUP_SPAWN_DELAY,
            boss_timer: 0,
            boss_delay: BOSS_SPAWN_DELAY,
        }
    }
}

impl Spawner {
    /// Tick the enemy timer, spawning one when it reaches the delay
    pub fn try_spawn_enemy(&mut self, rng: &mut impl RandomSource, level: u32) -> Option<Enemy> {
        self.enemy_timer += 1;
        if self.enemy_timer < self.enemy_delay {
            return None;
        }
        self.enemy_timer = 0;
        Some(spawn_enemy(rng, level))
    }

    /// Tick the power-up timer, spawning one when it reaches the delay
    pub fn try_spawn_powerup(&mut self, rng: &mut impl RandomSource) -> Option<PowerUp> {
        self.powerup_timer += 1;
        if self.powerup_timer < self.powerup_delay {
            return None;
        }
        self.powerup_timer = 0;
        Some(spawn_powerup(rng))
    }

    /// Tick the boss timer. The timer is frozen while a boss is alive.
    pub fn try_spawn_boss(&mut self, boss_exists: bool) -> Option<Boss> {
        if boss_exists {
            return None;
        }
        self.boss_timer += 1;
        if self.boss_timer < self.boss_delay {
            return None;
        }
        self.boss_timer = 0;
        Some(Boss::new())
    }
}

/// Create an enemy at the top edge with a random variant, column and speed
pub fn spawn_enemy(rng: &mut impl RandomSource, level: u32) -> Enemy {
    let kind = EnemyKind::roll(rng);
    let x = rng.range_i32(0, (CANVAS_WIDTH - ENEMY_SIZE) as i32) as f32;
    let base_speed = rng.range_f32(ENEMY_MIN_SPEED, ENEMY_MAX_SPEED);
    Enemy::new(Vec2::new(x, 0.0), kind, base_speed, level)
}

/// Create a power-up of a random type at the top edge
pub fn spawn_powerup(rng: &mut impl RandomSource) -> PowerUp {
    let x = rng.range_i32(0, (CANVAS_WIDTH - POWERUP_SIZE) as i32) as f32;
    PowerUp::new(Vec2::new(x, 0.0), PowerUpKind::roll(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ScriptedRng;

    #[test]
    fn test_enemy_fires_on_delay() {
        let mut spawner = Spawner::default();
        let mut rng = ScriptedRng::constant(0.5);
        for _ in 0..ENEMY_SPAWN_DELAY - 1 {
            assert!(spawner.try_spawn_enemy(&mut rng, 1).is_none());
        }
        assert!(spawner.try_spawn_enemy(&mut rng, 1).is_some());
        assert_eq!(spawner.enemy_timer, 0);
    }

    #[test]
    fn test_scripted_enemy_spawn() {
        // variant roll, column, base speed
        let mut rng = ScriptedRng::new(&[0.05, 0.0, 0.0]);
        let enemy = spawn_enemy(&mut rng, 1);
        assert_eq!(enemy.kind, EnemyKind::Big);
        assert_eq!(enemy.pos, Vec2::new(0.0, 0.0));
        assert!((enemy.speed - 2.0 * 1.1 * 0.7).abs() < 1e-5);

        let mut rng = ScriptedRng::new(&[0.5, 0.999_999, 0.0]);
        let enemy = spawn_enemy(&mut rng, 1);
        assert_eq!(enemy.kind, EnemyKind::Normal);
        assert_eq!(enemy.pos.x, CANVAS_WIDTH - ENEMY_SIZE);
    }

    #[test]
    fn test_scripted_powerup_spawn() {
        let mut rng = ScriptedRng::new(&[0.999_999, 0.3]);
        let powerup = spawn_powerup(&mut rng);
        assert_eq!(powerup.pos, Vec2::new(CANVAS_WIDTH - POWERUP_SIZE, 0.0));
        assert_eq!(powerup.kind, PowerUpKind::Rapid);
    }

    #[test]
    fn test_powerup_fires_on_delay() {
        let mut spawner = Spawner::default();
        let mut rng = ScriptedRng::constant(0.0);
        let spawned = (0..POWERUP_SPAWN_DELAY * 2)
            .filter_map(|_| spawner.try_spawn_powerup(&mut rng))
            .count();
        assert_eq!(spawned, 2);
    }

    #[test]
    fn test_boss_timer_frozen_while_alive() {
        let mut spawner = Spawner::default();
        for _ in 0..BOSS_SPAWN_DELAY * 2 {
            assert!(spawner.try_spawn_boss(true).is_none());
        }
        assert_eq!(spawner.boss_timer, 0);

        for _ in 0..BOSS_SPAWN_DELAY - 1 {
            assert!(spawner.try_spawn_boss(false).is_none());
        }
        let boss = spawner.try_spawn_boss(false).expect("boss due");
        assert_eq!(boss.health, BOSS_MAX_HEALTH);
        assert_eq!(spawner.boss_timer, 0);
    }
}
