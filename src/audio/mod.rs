//! Sound cues
//!
//! The game only ever asks for a named cue; how it sounds lives in [`sfx`] and
//! [`synth`], and [`player`] turns it into macroquad playback.

pub mod player;
pub mod sfx;
pub mod synth;

pub use player::SfxBank;

use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Start,
    Eat,
    Move,
    Turn,
    Invalid,
    Die,
}

impl Cue {
    pub const ALL: [Cue; 6] = [
        Cue::Start,
        Cue::Eat,
        Cue::Move,
        Cue::Turn,
        Cue::Invalid,
        Cue::Die,
    ];
}

/// Fire-and-forget playback. Implementations must treat every call made before
/// [`AudioSink::unlock`] as a no-op.
pub trait AudioSink {
    /// Called on the first user gesture that may start audio.
    fn unlock(&mut self) {}

    fn play_cue(&mut self, cue: Cue, theme: Theme);

    /// Cut off anything still playing.
    fn stop_all(&mut self) {}
}

/// Plays nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_cue(&mut self, _cue: Cue, _theme: Theme) {}
}
