//! Frame driver
//!
//! Owns the simulation state, its RNG and the audio manager. Each rendered
//! frame feeds real elapsed time into a fixed-timestep accumulator, runs as
//! many ticks as are due and routes the resulting events to audio.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::audio::{AudioManager, AudioSink};
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, MusicCommand, SeededRng, TickInput, TickOutcome, tick};
use crate::snapshot::FrameSnapshot;

/// Game instance holding all state
pub struct Game<S: AudioSink> {
    state: GameState,
    rng: SeededRng,
    audio: AudioManager<S>,
    accumulator: f32,
}

impl<S: AudioSink> Game<S> {
    pub fn new(settings: &Settings, sink: S) -> Self {
        let seed = settings.seed.unwrap_or_else(time_seed);
        log::info!("Game initialized with seed: {}", seed);

        let mut audio = AudioManager::new(sink);
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_music_volume(settings.music_volume);
        audio.set_muted(settings.muted);
        audio.music(MusicCommand::Play);

        Self {
            state: GameState::new(settings.sim_options()),
            rng: SeededRng::new(seed),
            audio,
            accumulator: 0.0,
        }
    }

    /// Run the ticks due after `dt` seconds of real time.
    ///
    /// One-shot inputs (pause/restart/quit) apply to the first tick only.
    pub fn frame(&mut self, dt: f32, input: &TickInput) -> TickOutcome {
        if !dt.is_finite() {
            log::warn!("Ignoring non-finite frame time {}", dt);
            return TickOutcome::Continue;
        }
        self.accumulator += dt.clamp(0.0, 0.25);

        let mut input = input.clone();
        let mut substeps = 0;
        let mut outcome = TickOutcome::Continue;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            outcome = self.step(&input);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            input.pause = false;
            input.restart = false;
            input.quit = false;

            if outcome == TickOutcome::Quit {
                break;
            }
        }
        outcome
    }

    /// Run exactly one tick, bypassing the accumulator
    pub fn step(&mut self, input: &TickInput) -> TickOutcome {
        let outcome = tick(&mut self.state, input, &mut self.rng);
        let events = self.state.drain_events();
        self.audio.dispatch(&events);
        for event in &events {
            match event {
                GameEvent::PhaseChanged { from, to } => log::info!("Phase {:?} -> {:?}", from, to),
                GameEvent::PlayerDamaged { amount, health } => {
                    log::debug!("Player took {} damage, health {}", amount, health)
                }
                GameEvent::PowerUpCollected(kind) => log::debug!("Collected {:?} power-up", kind),
                _ => {}
            }
        }
        outcome
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn audio(&self) -> &AudioManager<S> {
        &self.audio
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5EED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::LogSink;
    use crate::consts::TICK_RATE;
    use crate::sim::{Enemy, EnemyKind, PowerUp, PowerUpKind};

    fn settings() -> Settings {
        Settings {
            seed: Some(1234),
            ..Default::default()
        }
    }

    #[test]
    fn test_accumulator_runs_due_ticks() {
        let mut game = Game::new(&settings(), LogSink::default());
        game.frame(SIM_DT * 3.5, &TickInput::default());
        assert_eq!(game.state().time_ticks, 3);
        game.frame(SIM_DT * 0.6, &TickInput::default());
        assert_eq!(game.state().time_ticks, 4);
    }

    #[test]
    fn test_substeps_capped() {
        let mut game = Game::new(&settings(), LogSink::default());
        game.frame(1.0, &TickInput::default());
        assert_eq!(game.state().time_ticks, MAX_SUBSTEPS as u64);
    }

    #[test]
    fn test_bad_frame_time_is_ignored() {
        let mut game = Game::new(&settings(), LogSink::default());
        game.frame(f32::NAN, &TickInput::default());
        game.frame(f32::INFINITY, &TickInput::default());
        game.frame(-1.0, &TickInput::default());
        assert_eq!(game.state().time_ticks, 0);

        game.frame(SIM_DT * 2.5, &TickInput::default());
        assert_eq!(game.state().time_ticks, 2);
    }

    #[test]
    fn test_pause_applies_once_per_frame() {
        let mut game = Game::new(&settings(), LogSink::default());
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        // Several due ticks in one frame must not toggle pause back off
        game.frame(SIM_DT * 4.0, &pause);
        assert_eq!(game.phase(), GamePhase::Paused);
    }

    #[test]
    fn test_events_drained_to_audio() {
        let mut game = Game::new(&settings(), LogSink::default());
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        game.step(&fire);
        assert!(game.state().events().is_empty());
        assert_eq!(game.audio().sink().cues_played, 1);
    }

    #[test]
    fn test_damage_and_pickup_events_consumed() {
        let mut game = Game::new(&settings(), LogSink::default());
        let pos = game.state.player.pos;
        game.state.enemies.push(Enemy::new(pos, EnemyKind::Normal, 0.0, 0));
        game.state.powerups.push(PowerUp::new(pos, PowerUpKind::Power));

        game.step(&TickInput::default());

        assert!(game.state().events().is_empty());
        assert_eq!(game.state().player.health, 90);
        assert_eq!(game.state().player.bullet_power, 2);
        // explosion + power-up cues
        assert_eq!(game.audio().sink().cues_played, 2);
    }

    #[test]
    fn test_same_seed_same_run() {
        let autopilot = TickInput {
            autopilot: true,
            ..Default::default()
        };
        let mut a = Game::new(&settings(), LogSink::default());
        let mut b = Game::new(&settings(), LogSink::default());
        for _ in 0..TICK_RATE * 30 {
            a.step(&autopilot);
            b.step(&autopilot);
        }
        assert_eq!(a.state().score, b.state().score);
        assert_eq!(a.snapshot().hud, b.snapshot().hud);
    }
}
