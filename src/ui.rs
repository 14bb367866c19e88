//! HUD, overlay panels, on-screen pad and the dev sound tester

use macroquad::prelude::*;

use crate::audio::Cue;
use crate::audio::sfx::preset_for;
use crate::controls::dpad_buttons;
use crate::game::{Direction, NameEntry, Overlay, Stats};
use crate::leaderboard::{LeaderboardRecord, format_clock};
use crate::render::{BoardLayout, HUD_HEIGHT, Palette};
use crate::theme::Theme;

const GOLD: Color = Color::new(1.0, 0.84, 0.0, 1.0);
const SILVER: Color = Color::new(0.75, 0.75, 0.78, 1.0);
const BRONZE: Color = Color::new(0.8, 0.5, 0.2, 1.0);

/// Everything an overlay panel shows
pub struct OverlayView<'a> {
    pub overlay: Overlay,
    pub theme: Theme,
    pub stats: Stats,
    pub name_entry: Option<NameEntry>,
    pub typed_name: &'a str,
    pub records: &'a [LeaderboardRecord],
    pub highlight: Option<&'a str>,
}

fn centered(text: &str, center_x: f32, y: f32, size: u16, color: Color) {
    let m = measure_text(text, None, size, 1.0);
    draw_text(text, center_x - m.width * 0.5, y, size as f32, color);
}

pub fn hud_lines(stats: &Stats) -> [String; 4] {
    [
        format!("Score {}", stats.score),
        format!("Level {}", stats.level),
        format!("Time {}", format_clock(stats.elapsed.as_millis() as u64)),
        format!("Length {}", stats.length),
    ]
}

pub fn draw_hud(stats: &Stats, palette: &Palette, layout: &BoardLayout, muted: bool) {
    let lines = hud_lines(stats);
    let slot = layout.width() / lines.len() as f32;
    let y = (layout.origin.y - HUD_HEIGHT * 0.35).max(22.0);
    for (i, line) in lines.iter().enumerate() {
        let cx = layout.origin.x + slot * (i as f32 + 0.5);
        centered(line, cx, y, 22, palette.text);
    }
    if muted {
        draw_text("muted", layout.origin.x, y - 24.0, 16.0, palette.dim);
    }
}

pub fn draw_overlay(view: &OverlayView<'_>, layout: &BoardLayout) {
    if !view.overlay.is_visible() {
        return;
    }
    let palette = Palette::for_theme(view.theme);
    let board = layout.rect();
    draw_rectangle(board.x, board.y, board.w, board.h, palette.panel);

    let cx = board.x + board.w * 0.5;
    let mut y = board.y + board.h * 0.2;
    centered(view.overlay.title(), cx, y, 40, palette.accent);
    y += 44.0;

    match view.overlay {
        Overlay::Menu => {
            for hint in [
                "Enter to start",
                "Arrows / WASD to steer, Esc to pause",
                "L leaderboard   T theme   M mute",
            ] {
                centered(hint, cx, y, 20, palette.text);
                y += 28.0;
            }
            centered(&format!("Theme: {}", view.theme.label()), cx, y + 12.0, 18, palette.dim);
        }
        Overlay::Paused => {
            centered("Enter or Esc to continue", cx, y, 20, palette.text);
            centered("R restart   L leaderboard", cx, y + 28.0, 20, palette.dim);
        }
        Overlay::GameOver => draw_game_over(view, &palette, cx, y),
        Overlay::Leaderboard(_) => draw_leaderboard(view, &palette, layout, y),
        Overlay::Running => {}
    }
}

fn draw_game_over(view: &OverlayView<'_>, palette: &Palette, cx: f32, mut y: f32) {
    let stats = &view.stats;
    let summary = format!(
        "Score {}   Length {}   Time {}",
        stats.score,
        stats.length,
        format_clock(stats.elapsed.as_millis() as u64)
    );
    centered(&summary, cx, y, 20, palette.text);
    y += 40.0;

    match view.name_entry {
        Some(entry) => {
            centered(&format!("New record! Rank #{}", entry.rank), cx, y, 26, palette.accent);
            y += 34.0;
            let caret = if (get_time() * 2.0) as i64 % 2 == 0 { "_" } else { " " };
            centered(&format!("Name: {}{}", view.typed_name, caret), cx, y, 22, palette.text);
            y += 28.0;
            centered("Enter to save", cx, y, 18, palette.dim);
        }
        None => {
            centered("Enter to play again", cx, y, 20, palette.text);
            centered("R restart   L leaderboard", cx, y + 28.0, 20, palette.dim);
        }
    }
}

pub fn medal_color(index: usize) -> Option<Color> {
    match index {
        0 => Some(GOLD),
        1 => Some(SILVER),
        2 => Some(BRONZE),
        _ => None,
    }
}

fn draw_leaderboard(view: &OverlayView<'_>, palette: &Palette, layout: &BoardLayout, mut y: f32) {
    let board = layout.rect();
    let left = board.x + board.w * 0.12;
    let right = board.x + board.w * 0.88;
    if view.records.is_empty() {
        centered("No scores yet", board.x + board.w * 0.5, y + 20.0, 20, palette.dim);
    }
    let row = (board.h * 0.055).clamp(18.0, 30.0);
    for (i, record) in view.records.iter().enumerate() {
        let highlighted = view.highlight == Some(record.key().as_str());
        if highlighted {
            draw_rectangle(left - 8.0, y - row * 0.75, right - left + 16.0, row, Color::new(1.0, 1.0, 1.0, 0.12));
        }
        let rank_color = medal_color(i).unwrap_or(palette.dim);
        let text_color = if highlighted { palette.accent } else { palette.text };
        draw_text(&format!("{}.", i + 1), left, y, row * 0.8, rank_color);
        draw_text(&record.name, left + row * 1.8, y, row * 0.8, text_color);
        let score = format!("{}  {}", record.score, format_clock(record.time_ms));
        let m = measure_text(&score, None, (row * 0.8) as u16, 1.0);
        draw_text(&score, right - m.width, y, row * 0.8, text_color);
        y += row;
    }
    centered("Backspace or Esc to go back", board.x + board.w * 0.5, board.y + board.h - 16.0, 18, palette.dim);
}

pub fn draw_dpad(layout: &BoardLayout, palette: &Palette) {
    for (direction, rect) in dpad_buttons(layout) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, palette.panel);
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, palette.dim);
        let label = match direction {
            Direction::Up => "^",
            Direction::Down => "v",
            Direction::Left => "<",
            Direction::Right => ">",
        };
        let c = rect.center();
        centered(label, c.x, c.y + 8.0, 28, palette.text);
    }
}

/// Dev-only browser over every themed cue
#[derive(Debug, Clone, Default)]
pub struct SfxTester {
    index: usize,
}

impl SfxTester {
    const LEN: usize = Theme::ALL.len() * Cue::ALL.len();

    pub fn current(&self) -> (Theme, Cue) {
        let theme = Theme::ALL[self.index / Cue::ALL.len()];
        let cue = Cue::ALL[self.index % Cue::ALL.len()];
        (theme, cue)
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % Self::LEN;
    }

    pub fn previous(&mut self) {
        self.index = (self.index + Self::LEN - 1) % Self::LEN;
    }

    pub fn draw(&self, palette: &Palette) {
        let (theme, cue) = self.current();
        let preset = preset_for(cue, theme);
        let line = format!(
            "SFX {}/{}: {} ({:?}, {} bpm)   [ ] select, P play",
            self.index + 1,
            Self::LEN,
            preset.name,
            preset.waveform,
            preset.bpm
        );
        draw_text(&line, 8.0, screen_height() - 8.0, 16.0, palette.dim);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_hud_lines() {
        let stats = Stats {
            score: 40,
            level: 2,
            length: 7,
            elapsed: Duration::from_millis(83_400),
            speed: Duration::from_millis(142),
        };
        assert_eq!(
            hud_lines(&stats),
            [
                "Score 40".to_string(),
                "Level 2".to_string(),
                "Time 01:23".to_string(),
                "Length 7".to_string(),
            ]
        );
    }

    #[test]
    fn test_only_top_three_get_medals() {
        assert!(medal_color(0).is_some());
        assert!(medal_color(2).is_some());
        assert!(medal_color(3).is_none());
    }

    #[test]
    fn test_tester_wraps_and_covers_every_cue() {
        let mut tester = SfxTester::default();
        tester.previous();
        assert_eq!(tester.current(), (Theme::Retro, Cue::Die));
        tester.next();
        assert_eq!(tester.current(), (Theme::Neon, Cue::Start));

        let mut seen = std::collections::HashSet::new();
        for _ in 0..SfxTester::LEN {
            seen.insert(tester.current());
            tester.next();
        }
        assert_eq!(seen.len(), 12);
    }
}
