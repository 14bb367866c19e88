//! Keyboard, touch and pointer input decoded into game actions

use macroquad::prelude::*;

use crate::config::{NAME_MAX_CHARS, SWIPE_MIN_PX};
use crate::game::{Action, Direction};
use crate::render::BoardLayout;

const DPAD_BUTTON: f32 = 56.0;
const DPAD_GAP: f32 = 10.0;

/// One decoded input for this frame
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Game(Action),
    ToggleMute,
    TesterPrevious,
    TesterNext,
    TesterPlay,
}

/// Per-frame facts the decoder needs from the game
#[derive(Debug, Clone, Copy)]
pub struct InputContext {
    /// A name prompt is open and owns the keyboard
    pub typing_name: bool,
    /// Whether taps on the board should confirm or go back
    pub overlay_visible: bool,
    pub dev: bool,
    pub layout: BoardLayout,
}

pub fn direction_for_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Up | KeyCode::W => Some(Direction::Up),
        KeyCode::Down | KeyCode::S => Some(Direction::Down),
        KeyCode::Left | KeyCode::A => Some(Direction::Left),
        KeyCode::Right | KeyCode::D => Some(Direction::Right),
        _ => None,
    }
}

/// Dominant axis of a finished swipe, or `None` for a tap.
pub fn swipe_direction(delta: Vec2) -> Option<Direction> {
    if delta.x.abs().max(delta.y.abs()) < SWIPE_MIN_PX {
        return None;
    }
    Some(if delta.x.abs() > delta.y.abs() {
        if delta.x > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if delta.y > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    })
}

/// On-screen direction pad, laid out in a row under the board.
pub fn dpad_buttons(layout: &BoardLayout) -> [(Direction, Rect); 4] {
    let total = DPAD_BUTTON * 4.0 + DPAD_GAP * 3.0;
    let left = layout.origin.x + (layout.width() - total) * 0.5;
    let top = layout.origin.y + layout.height() + DPAD_GAP;
    let order = [Direction::Left, Direction::Up, Direction::Down, Direction::Right];
    std::array::from_fn(|slot| {
        let x = left + slot as f32 * (DPAD_BUTTON + DPAD_GAP);
        (order[slot], Rect::new(x, top, DPAD_BUTTON, DPAD_BUTTON))
    })
}

pub fn dpad_hit(layout: &BoardLayout, point: Vec2) -> Option<Direction> {
    dpad_buttons(layout)
        .into_iter()
        .find(|(_, rect)| rect.contains(point))
        .map(|(direction, _)| direction)
}

/// Text typed into the name prompt
#[derive(Debug, Clone, Default)]
pub struct NameField {
    text: String,
}

impl NameField {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns false if the character was not accepted.
    pub fn push(&mut self, ch: char) -> bool {
        if ch.is_control() || self.text.chars().count() >= NAME_MAX_CHARS {
            return false;
        }
        if self.text.is_empty() && ch.is_whitespace() {
            return false;
        }
        self.text.push(ch);
        true
    }

    pub fn pop(&mut self) {
        self.text.pop();
    }

    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}

#[derive(Debug, Default)]
pub struct Controls {
    name: NameField,
    swipe_origin: Option<(u64, Vec2)>,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn typed_name(&self) -> &str {
        self.name.text()
    }

    pub fn poll(&mut self, ctx: &InputContext) -> Vec<Command> {
        let mut out = Vec::new();

        // Drain the character queue every frame so steering keys never leak
        // into a prompt that opens later.
        let mut typed = Vec::new();
        while let Some(ch) = get_char_pressed() {
            typed.push(ch);
        }

        if ctx.typing_name {
            for ch in typed {
                self.name.push(ch);
            }
            if is_key_pressed(KeyCode::Backspace) {
                self.name.pop();
            }
            if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter) {
                out.push(Command::Game(Action::SubmitName(self.name.take())));
            }
            self.poll_pointer(ctx, &mut out);
            return out;
        }

        for key in [
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Left,
            KeyCode::Right,
            KeyCode::W,
            KeyCode::A,
            KeyCode::S,
            KeyCode::D,
        ] {
            if is_key_pressed(key) {
                if let Some(direction) = direction_for_key(key) {
                    out.push(Command::Game(Action::Turn {
                        direction,
                        forced: false,
                    }));
                }
            }
        }

        if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter) || is_key_pressed(KeyCode::Space) {
            out.push(Command::Game(Action::Confirm));
        }
        if is_key_pressed(KeyCode::Escape) {
            out.push(Command::Game(Action::Cancel));
        }
        if is_key_pressed(KeyCode::Backspace) {
            out.push(Command::Game(Action::Back));
        }
        if is_key_pressed(KeyCode::L) {
            out.push(Command::Game(Action::ShowLeaderboard));
        }
        if is_key_pressed(KeyCode::R) {
            out.push(Command::Game(Action::Restart));
        }
        if is_key_pressed(KeyCode::T) {
            out.push(Command::Game(Action::ToggleTheme));
        }
        if is_key_pressed(KeyCode::M) {
            out.push(Command::ToggleMute);
        }
        if ctx.dev {
            if is_key_pressed(KeyCode::LeftBracket) {
                out.push(Command::TesterPrevious);
            }
            if is_key_pressed(KeyCode::RightBracket) {
                out.push(Command::TesterNext);
            }
            if is_key_pressed(KeyCode::P) {
                out.push(Command::TesterPlay);
            }
        }

        self.poll_swipe(&mut out);
        self.poll_pointer(ctx, &mut out);
        out
    }

    fn poll_swipe(&mut self, out: &mut Vec<Command>) {
        for touch in touches() {
            match touch.phase {
                TouchPhase::Started => self.swipe_origin = Some((touch.id, touch.position)),
                TouchPhase::Ended => {
                    let Some((id, origin)) = self.swipe_origin else {
                        continue;
                    };
                    if id != touch.id {
                        continue;
                    }
                    self.swipe_origin = None;
                    if let Some(direction) = swipe_direction(touch.position - origin) {
                        out.push(Command::Game(Action::Turn {
                            direction,
                            forced: false,
                        }));
                    }
                }
                TouchPhase::Cancelled => self.swipe_origin = None,
                TouchPhase::Moved | TouchPhase::Stationary => {}
            }
        }
    }

    /// Clicks, and taps through macroquad's touch-to-mouse emulation.
    fn poll_pointer(&mut self, ctx: &InputContext, out: &mut Vec<Command>) {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return;
        }
        let point = Vec2::from(mouse_position());
        if let Some(direction) = dpad_hit(&ctx.layout, point) {
            out.push(Command::Game(Action::Turn {
                direction,
                forced: true,
            }));
            return;
        }
        if !ctx.overlay_visible || !ctx.layout.rect().contains(point) {
            return;
        }
        if ctx.typing_name {
            out.push(Command::Game(Action::SubmitName(self.name.take())));
        } else {
            out.push(Command::Game(Action::Confirm));
        }
    }
}
