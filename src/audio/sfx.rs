//! Sound presets written as little note scores

use super::Cue;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

/// A short tune: notes like `C5/8` (pitch + octave / note value), `R/8` rests,
/// and a trailing `.` for dotted values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SfxPreset {
    pub name: &'static str,
    pub bpm: f32,
    pub waveform: Waveform,
    pub score: &'static str,
}

const fn preset(name: &'static str, bpm: f32, waveform: Waveform, score: &'static str) -> SfxPreset {
    SfxPreset {
        name,
        bpm,
        waveform,
        score,
    }
}

const NEON_START: SfxPreset = preset("Start (neon)", 160.0, Waveform::Triangle, "C5/8 E5/8 G5/8 C6/8 R/8 G5/8 E5/8 C5/4");
const NEON_EAT: SfxPreset = preset("Eat (neon)", 260.0, Waveform::Triangle, "E6/32 G6/32 B6/32");
const NEON_MOVE: SfxPreset = preset("Move (neon)", 320.0, Waveform::Square, "C6/64");
const NEON_TURN: SfxPreset = preset("Turn (neon)", 300.0, Waveform::Square, "E6/32");
const NEON_INVALID: SfxPreset = preset("Invalid (neon)", 260.0, Waveform::Sine, "C4/64");
// Start motif played backwards and down.
const NEON_DIE: SfxPreset = preset("Crash (neon)", 140.0, Waveform::Sawtooth, "C6/8 G5/8 E5/8 C5/8");

const RETRO_START: SfxPreset = preset("Start (retro)", 150.0, Waveform::Square, "C4/8 D4/8 E4/8 G4/8 R/8 E4/8 D4/8 C4/4");
const RETRO_EAT: SfxPreset = preset("Eat (retro)", 220.0, Waveform::Sine, "C5/32 D5/32");
const RETRO_MOVE: SfxPreset = preset("Move (retro)", 300.0, Waveform::Square, "C4/64");
const RETRO_TURN: SfxPreset = preset("Turn (retro)", 280.0, Waveform::Square, "D4/64");
const RETRO_INVALID: SfxPreset = preset("Invalid (retro)", 240.0, Waveform::Sine, "A3/64");
const RETRO_DIE: SfxPreset = preset("Crash (retro)", 120.0, Waveform::Square, "G4/8 E4/8 D4/8 C4/8");

pub fn preset_for(cue: Cue, theme: Theme) -> SfxPreset {
    match (theme, cue) {
        (Theme::Neon, Cue::Start) => NEON_START,
        (Theme::Neon, Cue::Eat) => NEON_EAT,
        (Theme::Neon, Cue::Move) => NEON_MOVE,
        (Theme::Neon, Cue::Turn) => NEON_TURN,
        (Theme::Neon, Cue::Invalid) => NEON_INVALID,
        (Theme::Neon, Cue::Die) => NEON_DIE,
        (Theme::Retro, Cue::Start) => RETRO_START,
        (Theme::Retro, Cue::Eat) => RETRO_EAT,
        (Theme::Retro, Cue::Move) => RETRO_MOVE,
        (Theme::Retro, Cue::Turn) => RETRO_TURN,
        (Theme::Retro, Cue::Invalid) => RETRO_INVALID,
        (Theme::Retro, Cue::Die) => RETRO_DIE,
    }
}

/// One entry of a parsed score. `freq` is `None` for rests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    pub freq: Option<f32>,
    /// Seconds
    pub duration: f32,
}

/// Parse a score at `bpm` quarter notes per minute. Malformed tokens are skipped.
pub fn parse_score(score: &str, bpm: f32) -> Vec<Note> {
    let quarter = 60.0 / bpm;
    score
        .split_whitespace()
        .filter_map(|token| parse_token(token, quarter))
        .collect()
}

fn parse_token(token: &str, quarter: f32) -> Option<Note> {
    let (pitch, value) = token.split_once('/')?;
    let (value, dotted) = match value.strip_suffix('.') {
        Some(v) => (v, true),
        None => (value, false),
    };
    let denominator: u32 = value.parse().ok().filter(|d| *d > 0)?;
    let mut duration = 4.0 / denominator as f32 * quarter;
    if dotted {
        duration *= 1.5;
    }

    let freq = if pitch.eq_ignore_ascii_case("r") {
        None
    } else {
        Some(pitch_frequency(pitch)?)
    };
    Some(Note { freq, duration })
}

/// Equal-tempered frequency of names like `C4`, `F#5`, tuned to A4 = 440 Hz.
pub fn pitch_frequency(pitch: &str) -> Option<f32> {
    let mut chars = pitch.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    let rest = chars.as_str();
    let (sharp, octave) = match rest.strip_prefix('#') {
        Some(o) => (1, o),
        None => (0, rest),
    };
    let octave: i32 = octave.parse().ok()?;
    let semitone = match letter {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    } + sharp;
    let midi = 12 * (octave + 1) + semitone;
    Some(440.0 * 2f32.powf((midi - 69) as f32 / 12.0))
}
