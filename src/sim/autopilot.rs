//! Idle/demo mode
//!
//! Synthesizes movement and fire input from the current state: dodge boss
//! fire first, grab power-ups when nothing is about to hit the ship, and
//! otherwise line up under the lowest enemy.

use super::state::GameState;
use super::tick::TickInput;

/// How far above the ship (in pixels) a falling threat is worth dodging
const DANGER_ZONE: f32 = 140.0;
/// Dead zone to stop the ship jittering around its target
const SLACK: f32 = 6.0;

/// Produce the input the autopilot would press this tick
pub fn steer(state: &GameState, input: &TickInput) -> TickInput {
    let player = &state.player;
    let ship = player.rect();
    let center_x = player.center().x;

    // Nearest incoming boss projectile in our column
    let incoming = state
        .boss
        .iter()
        .flat_map(|boss| boss.projectiles.iter())
        .filter(|p| {
            let above = ship.y - p.pos.y;
            (0.0..DANGER_ZONE).contains(&above)
                && p.pos.x > ship.x - ship.w * 0.5
                && p.pos.x < ship.right() + ship.w * 0.5
        })
        .map(|p| p.pos.x)
        .next();

    let target_x = if let Some(threat_x) = incoming {
        // Step away from the shot, toward the roomier side
        if threat_x >= center_x {
            center_x - player.size
        } else {
            center_x + player.size
        }
    } else if let Some(powerup) = state
        .powerups
        .iter()
        .filter(|p| p.pos.y < ship.y)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
    {
        powerup.rect().center().x
    } else if let Some(enemy) = state
        .enemies
        .iter()
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
    {
        enemy.center().x
    } else if let Some(boss) = &state.boss {
        boss.center().x
    } else {
        center_x
    };

    let delta = target_x - center_x;
    TickInput {
        left: delta < -SLACK,
        right: delta > SLACK,
        fire: true,
        ..input.clone()
    }
}
