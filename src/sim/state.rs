//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`], owned by the
//! caller and passed by `&mut` into each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::boss::{Boss, SpreadMotion};
use super::entities::{Enemy, Player, PlayerBullet, PowerUp, PowerUpKind};
use super::explosion::Explosion;
use super::rng::RandomSource;
use super::spawner::Spawner;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Simulation frozen by the player
    Paused,
    /// Run ended, waiting for restart or quit
    GameOver,
}

/// Named audio cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    Shoot,
    Explosion,
    PowerUp,
    GameOver,
    BossSpawn,
    BossHit,
}

impl Cue {
    pub fn name(&self) -> &'static str {
        match self {
            Cue::Shoot => "shoot",
            Cue::Explosion => "explosion",
            Cue::PowerUp => "powerup",
            Cue::GameOver => "game_over",
            Cue::BossSpawn => "boss_spawn",
            Cue::BossHit => "boss_hit",
        }
    }
}

/// Background music control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MusicCommand {
    Play,
    Pause,
    Resume,
    Stop,
}

/// Things that happened during a tick, drained by the frame driver
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Sound(Cue),
    Music(MusicCommand),
    PlayerDamaged { amount: i32, health: i32 },
    BossSpawned,
    BossDefeated { score: u32 },
    PowerUpCollected(PowerUpKind),
    PhaseChanged { from: GamePhase, to: GamePhase },
}

/// Behaviour switches that survive a reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimOptions {
    pub boss_spread: SpreadMotion,
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub options: SimOptions,
    pub phase: GamePhase,
    pub score: u32,
    /// Difficulty level, always `score / SCORE_PER_LEVEL + 1`
    pub level: u32,
    /// Simulation tick counter (only advances while playing)
    pub time_ticks: u64,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<PlayerBullet>,
    pub powerups: Vec<PowerUp>,
    pub boss: Option<Boss>,
    pub spawner: Spawner,
    /// Ticks until the next shot is allowed
    pub bullet_cooldown: u32,
    /// Cooldown applied after each shot; lowered by rapid-fire power-ups
    pub bullet_cooldown_max: u32,
    /// Visual particles (not gameplay-affecting)
    #[serde(skip)]
    pub explosions: Vec<Explosion>,
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(SimOptions::default())
    }
}

impl GameState {
    pub fn new(options: SimOptions) -> Self {
        Self {
            options,
            phase: GamePhase::Playing,
            score: 0,
            level: 1,
            time_ticks: 0,
            player: Player::default(),
            enemies: Vec::new(),
            bullets: Vec::new(),
            powerups: Vec::new(),
            boss: None,
            spawner: Spawner::default(),
            bullet_cooldown: 0,
            bullet_cooldown_max: BULLET_COOLDOWN_MAX,
            explosions: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Back to the start of a fresh session. Options and undrained events
    /// are kept.
    pub fn reset(&mut self) {
        let events = std::mem::take(&mut self.events);
        *self = Self::new(self.options);
        self.events = events;
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn play(&mut self, cue: Cue) {
        self.emit(GameEvent::Sound(cue));
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from != to {
            self.phase = to;
            self.emit(GameEvent::PhaseChanged { from, to });
        }
    }

    pub fn spawn_explosion(&mut self, origin: Vec2, size: f32, rng: &mut impl RandomSource) {
        self.explosions.push(Explosion::new(origin, size, rng));
    }

    /// Recompute the difficulty level from the score
    pub fn update_level(&mut self) {
        self.level = self.score / SCORE_PER_LEVEL + 1;
    }

    pub fn boss_exists(&self) -> bool {
        self.boss.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ScriptedRng;

    #[test]
    fn test_new_state() {
        let state = GameState::default();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.level, 1);
        assert_eq!(state.player.health, 100);
        assert_eq!(state.bullet_cooldown_max, BULLET_COOLDOWN_MAX);
        assert!(state.boss.is_none());
    }

    #[test]
    fn test_reset_keeps_options() {
        let mut state = GameState::new(SimOptions {
            boss_spread: SpreadMotion::Angled,
        });
        let mut rng = ScriptedRng::constant(0.5);
        state.score = 420;
        state.bullet_cooldown_max = 5;
        state.boss = Some(Boss::new());
        state.spawn_explosion(Vec2::ZERO, 10.0, &mut rng);
        state.reset();

        assert_eq!(state.options.boss_spread, SpreadMotion::Angled);
        assert_eq!(state.score, 0);
        assert_eq!(state.bullet_cooldown_max, BULLET_COOLDOWN_MAX);
        assert!(state.boss.is_none());
        assert!(state.explosions.is_empty());
    }

    #[test]
    fn test_cue_names() {
        assert_eq!(Cue::GameOver.name(), "game_over");
        assert_eq!(Cue::BossHit.name(), "boss_hit");
    }

    #[test]
    fn test_serde_skips_visuals() {
        let mut state = GameState::default();
        let mut rng = ScriptedRng::constant(0.5);
        state.spawn_explosion(Vec2::ZERO, 10.0, &mut rng);
        state.play(Cue::Shoot);

        let json = serde_json::to_string(&state).expect("serialize");
        let restored: GameState = serde_json::from_str(&json).expect("deserialize");
        assert!(restored.explosions.is_empty());
        assert!(restored.events().is_empty());
        assert_eq!(restored.player.pos, state.player.pos);
    }
}
