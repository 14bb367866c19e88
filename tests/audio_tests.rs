use std::collections::HashSet;

use neon_snake::audio::sfx::{parse_score, preset_for};
use neon_snake::audio::synth::render_preset;
use neon_snake::audio::{AudioSink, Cue, NullAudio};
use neon_snake::config::SAMPLE_RATE;
use neon_snake::theme::Theme;

#[test]
fn every_themed_cue_renders_a_playable_wav() {
    for theme in Theme::ALL {
        for cue in Cue::ALL {
            let preset = preset_for(cue, theme);
            let notes = parse_score(preset.score, preset.bpm);
            assert!(!notes.is_empty(), "{} has no notes", preset.name);

            let wav = render_preset(&preset);
            assert_eq!(&wav[0..4], b"RIFF");
            assert_eq!(&wav[36..40], b"data");
            let rate = u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]);
            assert_eq!(rate, SAMPLE_RATE);
            let data_len = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]) as usize;
            assert_eq!(data_len, wav.len() - 44);
            assert!(data_len > 0, "{} is silent", preset.name);
        }
    }
}

#[test]
fn themes_sound_different() {
    let mut names = HashSet::new();
    for theme in Theme::ALL {
        for cue in Cue::ALL {
            assert!(names.insert(preset_for(cue, theme).name));
        }
    }
    for cue in Cue::ALL {
        assert_ne!(
            preset_for(cue, Theme::Neon).score,
            preset_for(cue, Theme::Retro).score
        );
    }
}

#[test]
fn start_jingle_outlasts_feedback_blips() {
    let length = |cue| render_preset(&preset_for(cue, Theme::Neon)).len();
    assert!(length(Cue::Start) > length(Cue::Turn) * 10);
    assert!(length(Cue::Die) > length(Cue::Eat));
}

#[test]
fn null_audio_accepts_every_call() {
    let mut audio = NullAudio;
    audio.play_cue(Cue::Eat, Theme::Neon);
    audio.unlock();
    for cue in Cue::ALL {
        audio.play_cue(cue, Theme::Retro);
    }
    audio.stop_all();
}
