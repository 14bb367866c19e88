//! macroquad-backed cue playback

use std::collections::HashMap;

use macroquad::audio::{self, PlaySoundParams, Sound, load_sound_from_bytes};
use tracing::{debug, warn};

use super::sfx::preset_for;
use super::synth::render_preset;
use super::{AudioSink, Cue};
use crate::theme::Theme;

/// Every themed cue synthesized once at start-up.
pub struct SfxBank {
    sounds: HashMap<(Theme, Cue), Sound>,
    unlocked: bool,
    volume: f32,
}

impl SfxBank {
    /// Synthesize and load all cues. Cues that fail to load stay silent.
    pub async fn load(volume: f32) -> Self {
        let mut sounds = HashMap::new();
        for theme in Theme::ALL {
            for cue in Cue::ALL {
                let preset = preset_for(cue, theme);
                match load_sound_from_bytes(&render_preset(&preset)).await {
                    Ok(sound) => {
                        sounds.insert((theme, cue), sound);
                    }
                    Err(e) => warn!("Could not load sound {}: {:?}", preset.name, e),
                }
            }
        }
        debug!("Loaded {} sound cues", sounds.len());
        Self {
            sounds,
            unlocked: false,
            volume: volume.clamp(0.0, 1.0),
        }
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }
}

impl AudioSink for SfxBank {
    fn unlock(&mut self) {
        self.unlocked = true;
    }

    fn play_cue(&mut self, cue: Cue, theme: Theme) {
        if !self.unlocked || self.volume <= 0.0 {
            return;
        }
        if let Some(sound) = self.sounds.get(&(theme, cue)) {
            audio::play_sound(
                sound,
                PlaySoundParams {
                    looped: false,
                    volume: self.volume,
                },
            );
        }
    }

    fn stop_all(&mut self) {
        for sound in self.sounds.values() {
            audio::stop_sound(sound);
        }
    }
}
