//! Fixed timestep simulation tick
//!
//! [`tick`] is the phase state machine: it handles pause, restart and quit,
//! and only runs the simulation step while playing. The step applies input,
//! ticks the spawner, then resolves each entity group in a fixed order so
//! score and removal stay consistent:
//!
//! 1. enemies vs player
//! 2. player bullets vs enemies, then vs boss
//! 3. boss movement/attack, boss and its projectiles vs player
//! 4. power-ups vs player
//! 5. explosions
//! 6. level from score

use std::ops::ControlFlow;

use super::autopilot;
use super::rng::RandomSource;
use super::spawner::spawn_powerup;
use super::state::{Cue, GameEvent, GamePhase, GameState, MusicCommand};
use super::entities::PowerUpKind;
use crate::consts::*;

/// Input commands for a single tick (sampled once per tick)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Held fire; shots are gated by the cooldown
    pub fire: bool,
    /// Pause toggle (one-shot)
    pub pause: bool,
    /// Start over after game over (one-shot)
    pub restart: bool,
    /// Leave the game from the game over screen (one-shot)
    pub quit: bool,
    /// Idle/demo mode - AI steers and fires
    pub autopilot: bool,
}

/// What the driver should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

/// Advance the game by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, rng: &mut impl RandomSource) -> TickOutcome {
    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.set_phase(GamePhase::Paused);
                state.emit(GameEvent::Music(MusicCommand::Pause));
                return TickOutcome::Continue;
            }
            GamePhase::Paused => {
                state.set_phase(GamePhase::Playing);
                state.emit(GameEvent::Music(MusicCommand::Resume));
            }
            GamePhase::GameOver => {}
        }
    }

    match state.phase {
        GamePhase::Paused => return TickOutcome::Continue,
        GamePhase::GameOver => {
            if input.quit {
                log::info!("Quit after game over (score {})", state.score);
                return TickOutcome::Quit;
            }
            if input.restart {
                log::info!("Restarting session");
                state.reset();
                state.emit(GameEvent::Music(MusicCommand::Play));
            }
            return TickOutcome::Continue;
        }
        GamePhase::Playing => {}
    }

    let input = if input.autopilot {
        autopilot::steer(state, input)
    } else {
        input.clone()
    };

    // Level is kept in sync even on the tick that ends the game
    let _ = step(state, &input, rng);
    state.update_level();

    debug_assert!(state.phase == GamePhase::GameOver || !state.player.is_dead());
    TickOutcome::Continue
}

/// One simulation step. Breaks as soon as the game ends.
fn step(state: &mut GameState, input: &TickInput, rng: &mut impl RandomSource) -> ControlFlow<()> {
    state.time_ticks += 1;

    apply_input(state, input);
    run_spawner(state, rng);

    resolve_enemies(state, rng)?;
    resolve_bullets(state, rng);
    resolve_boss(state, rng)?;
    resolve_powerups(state, rng);
    update_explosions(state);

    ControlFlow::Continue(())
}

fn apply_input(state: &mut GameState, input: &TickInput) {
    if input.left {
        state.player.steer(-1.0);
    }
    if input.right {
        state.player.steer(1.0);
    }

    state.bullet_cooldown = state.bullet_cooldown.saturating_sub(1);
    if input.fire && state.bullet_cooldown == 0 {
        let shots = state.player.fire();
        state.bullets.extend(shots);
        state.bullet_cooldown = state.bullet_cooldown_max;
        state.play(Cue::Shoot);
    }
}

fn run_spawner(state: &mut GameState, rng: &mut impl RandomSource) {
    let level = state.level;
    if let Some(enemy) = state.spawner.try_spawn_enemy(rng, level) {
        log::debug!("Spawned {} enemy at x={}", enemy.kind.as_str(), enemy.pos.x);
        state.enemies.push(enemy);
    }

    if let Some(powerup) = state.spawner.try_spawn_powerup(rng) {
        log::debug!("Spawned {:?} power-up at x={}", powerup.kind, powerup.pos.x);
        state.powerups.push(powerup);
    }

    let boss_exists = state.boss_exists();
    if let Some(boss) = state.spawner.try_spawn_boss(boss_exists) {
        log::info!("Boss spawned (tick {})", state.time_ticks);
        state.boss = Some(boss);
        state.play(Cue::BossSpawn);
        state.emit(GameEvent::BossSpawned);
    }
}

/// Apply damage to the player, ending the game if health runs out
fn damage_player(state: &mut GameState, amount: i32) -> ControlFlow<()> {
    state.player.health -= amount;
    let health = state.player.health;
    state.emit(GameEvent::PlayerDamaged { amount, health });

    if state.player.is_dead() {
        log::info!("Game over - final score {}", state.score);
        state.set_phase(GamePhase::GameOver);
        state.play(Cue::GameOver);
        state.emit(GameEvent::Music(MusicCommand::Stop));
        return ControlFlow::Break(());
    }
    ControlFlow::Continue(())
}

fn resolve_enemies(state: &mut GameState, rng: &mut impl RandomSource) -> ControlFlow<()> {
    let player_rect = state.player.rect();
    let mut i = 0;
    while i < state.enemies.len() {
        if state.enemies[i].update() {
            state.enemies.remove(i);
            state.score += SCORE_ENEMY_ESCAPED;
            continue;
        }

        if state.enemies[i].rect().intersects(&player_rect) {
            let enemy = state.enemies.remove(i);
            state.spawn_explosion(enemy.center(), enemy.size, rng);
            state.play(Cue::Explosion);
            damage_player(state, ENEMY_COLLISION_DAMAGE)?;
            continue;
        }

        i += 1;
    }
    ControlFlow::Continue(())
}

fn resolve_bullets(state: &mut GameState, rng: &mut impl RandomSource) {
    let mut i = 0;
    while i < state.bullets.len() {
        if state.bullets[i].update() {
            state.bullets.remove(i);
            continue;
        }

        let rect = state.bullets[i].rect();

        // First enemy hit consumes the bullet
        if let Some(e) = state.enemies.iter().position(|e| e.rect().intersects(&rect)) {
            state.bullets.remove(i);
            let enemy = state.enemies.remove(e);
            state.score += SCORE_ENEMY_DESTROYED;
            state.spawn_explosion(enemy.center(), enemy.size, rng);
            state.play(Cue::Explosion);
            continue;
        }

        let hits_boss = state
            .boss
            .as_ref()
            .is_some_and(|boss| boss.rect().intersects(&rect));
        if hits_boss {
            let bullet = state.bullets.remove(i);
            let defeated = state
                .boss
                .as_mut()
                .is_some_and(|boss| boss.take_hit(bullet.power));
            state.play(Cue::BossHit);
            if defeated {
                defeat_boss(state, rng);
            }
            continue;
        }

        i += 1;
    }
}

/// Remove the boss and pay out the defeat rewards
fn defeat_boss(state: &mut GameState, rng: &mut impl RandomSource) {
    let Some(boss) = state.boss.take() else {
        return;
    };

    state.score += SCORE_BOSS_DEFEATED;
    state.spawn_explosion(boss.center(), boss.size * 2.0, rng);
    state.play(Cue::Explosion);
    for _ in 0..BOSS_BONUS_POWERUPS {
        let powerup = spawn_powerup(rng);
        state.powerups.push(powerup);
    }

    log::info!("Boss defeated (score {})", state.score);
    state.emit(GameEvent::BossDefeated { score: state.score });
}

fn resolve_boss(state: &mut GameState, rng: &mut impl RandomSource) -> ControlFlow<()> {
    let motion = state.options.boss_spread;
    let Some(boss) = state.boss.as_mut() else {
        return ControlFlow::Continue(());
    };

    if boss.update(motion) {
        defeat_boss(state, rng);
        return ControlFlow::Continue(());
    }

    let player_rect = state.player.rect();
    let body_hit = boss.rect().intersects(&player_rect);
    let center = state.player.center();
    let size = state.player.size;

    if body_hit {
        state.spawn_explosion(center, size * 2.0, rng);
        state.play(Cue::Explosion);
        damage_player(state, BOSS_COLLISION_DAMAGE)?;
    }

    // Projectiles past a fatal hit stay in flight
    while state
        .boss
        .as_mut()
        .and_then(|boss| boss.take_projectile_hit(&player_rect))
        .is_some()
    {
        state.spawn_explosion(center, size, rng);
        state.play(Cue::Explosion);
        damage_player(state, BOSS_PROJECTILE_DAMAGE)?;
    }

    ControlFlow::Continue(())
}

fn resolve_powerups(state: &mut GameState, rng: &mut impl RandomSource) {
    let player_rect = state.player.rect();
    let mut i = 0;
    while i < state.powerups.len() {
        if state.powerups[i].update() {
            state.powerups.remove(i);
            continue;
        }

        if state.powerups[i].rect().intersects(&player_rect) {
            let powerup = state.powerups.remove(i);
            state.play(Cue::PowerUp);
            apply_powerup(state, powerup.kind, rng);
            continue;
        }

        i += 1;
    }
}

/// Apply a collected power-up to the player
pub fn apply_powerup(state: &mut GameState, kind: PowerUpKind, rng: &mut impl RandomSource) {
    match kind {
        PowerUpKind::Health => state.player.heal(POWERUP_HEAL),
        PowerUpKind::Rapid => {
            state.bullet_cooldown_max = state
                .bullet_cooldown_max
                .saturating_sub(RAPID_FIRE_STEP)
                .max(RAPID_FIRE_FLOOR);
        }
        PowerUpKind::Power => state.player.bullet_power += 1,
        PowerUpKind::Upgrade => {
            state.player.upgrade();
            log::debug!("Ship upgraded to level {}", state.player.level);
            let center = state.player.center();
            let size = state.player.size;
            for _ in 0..UPGRADE_BURST_COUNT {
                state.spawn_explosion(center, size, rng);
            }
        }
    }
    state.emit(GameEvent::PowerUpCollected(kind));
}

fn update_explosions(state: &mut GameState) {
    state.explosions.retain_mut(|e| !e.update());
}
