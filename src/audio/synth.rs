//! Procedural tone rendering into in-memory WAV files

use std::f32::consts::TAU;

use super::sfx::{Note, SfxPreset, Waveform, parse_score};
use crate::config::{NOTE_FLOOR_GAIN, NOTE_GAIN, SAMPLE_RATE};

const HEADER_LEN: usize = 44;

/// Render a preset at full volume.
pub fn render_preset(preset: &SfxPreset) -> Vec<u8> {
    render_wav(&parse_score(preset.score, preset.bpm), preset.waveform)
}

/// PCM16 mono WAV of `notes` played back to back.
///
/// Each note starts at [`NOTE_GAIN`] and decays exponentially to
/// [`NOTE_FLOOR_GAIN`] by 90% of its length.
pub fn render_wav(notes: &[Note], waveform: Waveform) -> Vec<u8> {
    let lengths: Vec<u32> = notes
        .iter()
        .map(|n| (n.duration * SAMPLE_RATE as f32) as u32)
        .collect();
    let num_samples: u32 = lengths.iter().sum();
    let mut data = Vec::with_capacity(num_samples as usize * 2 + HEADER_LEN);
    write_header(&mut data, num_samples);

    for (note, &len) in notes.iter().zip(&lengths) {
        let decay_samples = (len as f32 * 0.9).max(1.0);
        let ratio = NOTE_FLOOR_GAIN / NOTE_GAIN;
        for n in 0..len {
            let sample = match note.freq {
                Some(freq) => {
                    let t = n as f32 / SAMPLE_RATE as f32;
                    let progress = (n as f32 / decay_samples).min(1.0);
                    let gain = NOTE_GAIN * ratio.powf(progress);
                    gain * oscillate(waveform, freq * t)
                }
                None => 0.0,
            };
            let pcm = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
            data.extend_from_slice(&pcm.to_le_bytes());
        }
    }
    data
}

/// One period of `waveform` in [-1, 1]; `cycles` is frequency times time.
fn oscillate(waveform: Waveform, cycles: f32) -> f32 {
    let phase = cycles.fract();
    match waveform {
        Waveform::Sine => (TAU * phase).sin(),
        Waveform::Square => {
            if phase < 0.5 {
                1.0
            } else {
                -1.0
            }
        }
        Waveform::Triangle => 1.0 - 4.0 * (phase - 0.5).abs(),
        Waveform::Sawtooth => 2.0 * phase - 1.0,
    }
}

fn write_header(data: &mut Vec<u8>, num_samples: u32) {
    let block_align: u16 = 2; // mono 16-bit
    let byte_rate: u32 = SAMPLE_RATE * block_align as u32;
    let data_size: u32 = num_samples * 2;
    let chunk_size: u32 = 36 + data_size;

    // RIFF header
    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&chunk_size.to_le_bytes());
    data.extend_from_slice(b"WAVE");
    // fmt chunk
    data.extend_from_slice(b"fmt ");
    data.extend_from_slice(&16u32.to_le_bytes()); // PCM chunk size
    data.extend_from_slice(&1u16.to_le_bytes()); // PCM format
    data.extend_from_slice(&1u16.to_le_bytes()); // channels
    data.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    data.extend_from_slice(&byte_rate.to_le_bytes());
    data.extend_from_slice(&block_align.to_le_bytes());
    data.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    // data chunk
    data.extend_from_slice(b"data");
    data.extend_from_slice(&data_size.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(wav: &[u8]) -> Vec<i16> {
        wav[HEADER_LEN..]
            .chunks_exact(2)
            .map(|b| i16::from_le_bytes([b[0], b[1]]))
            .collect()
    }

    #[test]
    fn test_header_matches_payload() {
        let notes = [Note {
            freq: Some(440.0),
            duration: 0.1,
        }];
        let wav = render_wav(&notes, Waveform::Sine);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]);
        assert_eq!(data_size as usize, wav.len() - HEADER_LEN);
        assert_eq!(data_size, 4410 * 2);
    }

    #[test]
    fn test_rests_are_silent() {
        let notes = [Note {
            freq: None,
            duration: 0.05,
        }];
        assert!(samples(&render_wav(&notes, Waveform::Square)).iter().all(|s| *s == 0));
    }

    #[test]
    fn test_notes_decay() {
        let notes = [Note {
            freq: Some(220.0),
            duration: 0.2,
        }];
        let pcm = samples(&render_wav(&notes, Waveform::Square));
        let head = pcm[..200].iter().map(|s| s.unsigned_abs()).max().unwrap();
        let tail = pcm[pcm.len() - 200..].iter().map(|s| s.unsigned_abs()).max().unwrap();
        assert!(head > 7000);
        assert!(tail < 100);
    }

    #[test]
    fn test_waveforms_stay_in_range() {
        for waveform in [
            Waveform::Sine,
            Waveform::Square,
            Waveform::Triangle,
            Waveform::Sawtooth,
        ] {
            for i in 0..100 {
                let v = oscillate(waveform, i as f32 * 0.037);
                assert!((-1.0..=1.0).contains(&v));
            }
        }
    }
}
