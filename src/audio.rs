//! Sound effect cues
//!
//! The simulation emits `GameEvent`s; this module turns them into cues on an
//! output sink supplied by the host. Decoding and mixing belong to the sink.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Number of independent voices for the clank effect
pub const CLANK_VOICES: usize = 10;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Jump started
    Jump,
    /// Collectible consumed
    Coin,
    /// Head hit a ceiling
    Clank,
}

impl SoundEffect {
    /// Voices available to this effect
    pub fn voices(self) -> usize {
        match self {
            SoundEffect::Clank => CLANK_VOICES,
            SoundEffect::Jump | SoundEffect::Coin => 1,
        }
    }

    /// Cue for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Jumped => Some(SoundEffect::Jump),
            GameEvent::Collected { .. } => Some(SoundEffect::Coin),
            GameEvent::Bumped { .. } => Some(SoundEffect::Clank),
            GameEvent::Landed { .. } => None,
        }
    }
}

/// Host-side audio output
pub trait AudioSink {
    /// Whether a buffer for this voice was loaded
    fn is_loaded(&self, _effect: SoundEffect, _voice: usize) -> bool {
        true
    }

    /// Whether this voice is still playing its last cue
    fn is_playing(&self, effect: SoundEffect, voice: usize) -> bool;

    /// Start this voice from the beginning
    fn play(&mut self, effect: SoundEffect, voice: usize, volume: f32);
}

/// Audio manager for the game
pub struct AudioManager {
    sink: Option<Box<dyn AudioSink>>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    /// Last clank voice used
    clank_voice: usize,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(None)
    }
}

impl AudioManager {
    pub fn new(sink: Option<Box<dyn AudioSink>>) -> Self {
        if sink.is_none() {
            log::warn!("No audio sink - audio disabled");
        }
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            clank_voice: 0,
        }
    }

    /// Manager with volumes taken from `settings`
    pub fn with_settings(sink: Option<Box<dyn AudioSink>>, settings: &Settings) -> Self {
        let mut manager = Self::new(sink);
        manager.apply_settings(settings);
        manager
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.set_muted(settings.muted);
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Cue a sound effect
    ///
    /// Returns true if a voice was started. A cue whose voice is still
    /// playing is dropped rather than restarted.
    pub fn play(&mut self, effect: SoundEffect) -> bool {
        let voice = match effect {
            SoundEffect::Clank => {
                self.clank_voice = (self.clank_voice + 1) % effect.voices();
                self.clank_voice
            }
            SoundEffect::Jump | SoundEffect::Coin => 0,
        };

        let vol = self.effective_volume();
        let Some(sink) = self.sink.as_mut() else {
            return false;
        };
        if vol <= 0.0 || !sink.is_loaded(effect, voice) || sink.is_playing(effect, voice) {
            return false;
        }

        sink.play(effect, voice, vol);
        log::trace!("Playing {:?} on voice {}", effect, voice);
        true
    }

    /// Cue every event that has a sound, returning how many voices started
    pub fn handle_events(&mut self, events: &[GameEvent]) -> usize {
        events
            .iter()
            .filter_map(SoundEffect::for_event)
            .filter(|&effect| self.play(effect))
            .count()
    }
}
