//! Audio cue routing
//!
//! The simulation only emits named cues and music commands. An [`AudioSink`]
//! turns them into sound; delivery is fire-and-forget and a sink that does
//! nothing is perfectly valid.

use crate::sim::{Cue, GameEvent, MusicCommand};

/// Something that can play cues and control background music.
///
/// Implementations must not fail loudly: missing assets or a dead device
/// just mean silence.
pub trait AudioSink {
    /// Play a one-shot cue at `volume` (0.0 - 1.0)
    fn play_cue(&mut self, cue: Cue, volume: f32);

    /// Apply a music command; `volume` is the music volume (0.0 - 1.0)
    fn music(&mut self, command: MusicCommand, volume: f32);
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn play_cue(&mut self, _cue: Cue, _volume: f32) {}

    fn music(&mut self, _command: MusicCommand, _volume: f32) {}
}

/// Logs cues at debug level; useful headless
#[derive(Debug, Default, Clone)]
pub struct LogSink {
    pub cues_played: u64,
}

impl AudioSink for LogSink {
    fn play_cue(&mut self, cue: Cue, volume: f32) {
        self.cues_played += 1;
        log::debug!("cue {} @ {:.2}", cue.name(), volume);
    }

    fn music(&mut self, command: MusicCommand, volume: f32) {
        log::debug!("music {:?} @ {:.2}", command, volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.5,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, cue: Cue) {
        let vol = self.effective_sfx_volume();
        if vol <= 0.0 {
            return;
        }
        self.sink.play_cue(cue, vol);
    }

    /// Forward a music command. Always delivered, even muted, so the
    /// sink's play/pause state stays in step with the game.
    pub fn music(&mut self, command: MusicCommand) {
        let vol = self.effective_music_volume();
        self.sink.music(command, vol);
    }

    /// Route the audio-relevant events of a tick to the sink
    pub fn dispatch(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::Sound(cue) => self.play(*cue),
                GameEvent::Music(command) => self.music(*command),
                _ => {}
            }
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
