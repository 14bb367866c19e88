//! Frame-driven game loop and overlay transitions

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use super::effects::{EatEffect, EffectParams};
use super::grid::{Cell, Direction, initial_snake, random_food};
use super::input::{Feedback, InputBuffer};
use super::overlay::{Overlay, ReturnTo};
use super::step::{StepOutcome, step};
use crate::audio::{AudioSink, Cue};
use crate::config::{
    COLS, INITIAL_TICK, LEVEL_LENGTH_DIVISOR, MIN_TICK, ROWS, SCORE_PER_FOOD, TICK_STEP,
};
use crate::leaderboard::{Leaderboard, LeaderboardRecord, LeaderboardStorage, now_millis};
use crate::theme::Theme;

/// Player intents, already decoded from keys, buttons or gestures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `forced` asks for turn feedback even when nothing changed (on-screen pad)
    Turn { direction: Direction, forced: bool },
    /// Start, resume, play again or close the leaderboard
    Confirm,
    /// Pause, resume or close the leaderboard
    Cancel,
    ShowLeaderboard,
    Back,
    /// Full reset from paused or game over
    Restart,
    SubmitName(String),
    ToggleTheme,
}

/// A finished run that made the board and is waiting for a name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameEntry {
    pub rank: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub score: u32,
    pub level: u32,
    pub length: u32,
    pub elapsed: Duration,
    pub speed: Duration,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct RenderSnapshot<'a> {
    pub overlay: Overlay,
    pub theme: Theme,
    pub snake: &'a [Cell],
    pub food: Cell,
    pub effects: EffectParams,
    pub stats: Stats,
}

pub struct GameLoop<A, S> {
    overlay: Overlay,
    theme: Theme,

    snake: Vec<Cell>,
    direction: Direction,
    input: InputBuffer,
    food: Cell,

    score: u32,
    level: u32,
    speed: Duration,
    since_tick: Duration,
    elapsed: Duration,

    effect: EatEffect,
    name_entry: Option<NameEntry>,
    highlight: Option<String>,
    intro_played: bool,

    rng: StdRng,
    audio: A,
    leaderboard: Leaderboard<S>,
}

impl<A: AudioSink, S: LeaderboardStorage> GameLoop<A, S> {
    pub fn new(audio: A, leaderboard: Leaderboard<S>, theme: Theme) -> Self {
        Self::with_rng(audio, leaderboard, theme, StdRng::from_os_rng())
    }

    /// Deterministic food placement for tests and replays.
    pub fn with_rng(audio: A, leaderboard: Leaderboard<S>, theme: Theme, rng: StdRng) -> Self {
        let mut game = Self {
            overlay: Overlay::Menu,
            theme,
            snake: Vec::new(),
            direction: Direction::Right,
            input: InputBuffer::new(),
            food: Cell::new(0, 0),
            score: 0,
            level: 1,
            speed: INITIAL_TICK,
            since_tick: Duration::ZERO,
            elapsed: Duration::ZERO,
            effect: EatEffect::new(),
            name_entry: None,
            highlight: None,
            intro_played: false,
            rng,
            audio,
            leaderboard,
        };
        game.reset();
        game
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme != theme {
            info!("Theme set to {}", theme.label());
        }
        self.theme = theme;
    }

    pub fn snake(&self) -> &[Cell] {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.input.pending()
    }

    pub fn name_entry(&self) -> Option<NameEntry> {
        self.name_entry
    }

    /// Key of the record submitted this session, until the next restart
    pub fn highlight(&self) -> Option<&str> {
        self.highlight.as_deref()
    }

    pub fn leaderboard(&self) -> &Leaderboard<S> {
        &self.leaderboard
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    pub fn stats(&self) -> Stats {
        Stats {
            score: self.score,
            level: self.level,
            length: self.snake.len() as u32,
            elapsed: self.elapsed,
            speed: self.speed,
        }
    }

    pub fn snapshot(&self) -> RenderSnapshot<'_> {
        RenderSnapshot {
            overlay: self.overlay,
            theme: self.theme,
            snake: &self.snake,
            food: self.food,
            effects: self.effect.params(),
            stats: self.stats(),
        }
    }

    /// Advance by one frame of `dt` wall time.
    ///
    /// At most one tick runs per frame. The accumulator restarts from zero
    /// after a tick, so long frames never trigger catch-up steps.
    pub fn advance(&mut self, dt: Duration) -> RenderSnapshot<'_> {
        if self.overlay != Overlay::Paused {
            self.effect.advance(dt);
        }
        if self.overlay.is_running() {
            self.elapsed += dt;
            self.since_tick += dt;
            if self.since_tick >= self.speed {
                self.since_tick = Duration::ZERO;
                self.tick();
            }
        }
        self.snapshot()
    }

    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Turn { direction, forced } => self.turn(direction, forced),
            Action::Confirm => match self.overlay {
                Overlay::Menu => self.begin(false),
                Overlay::Paused => self.resume(),
                Overlay::GameOver => self.begin(false),
                Overlay::Leaderboard(_) => self.back(),
                Overlay::Running => {}
            },
            Action::Cancel => match self.overlay {
                Overlay::Running => self.pause(),
                Overlay::Paused => self.resume(),
                Overlay::Leaderboard(_) => self.back(),
                Overlay::Menu | Overlay::GameOver => {}
            },
            Action::ShowLeaderboard => self.show_leaderboard(),
            Action::Back => self.back(),
            Action::Restart => {
                if matches!(self.overlay, Overlay::Paused | Overlay::GameOver) {
                    self.begin(true);
                }
            }
            Action::SubmitName(name) => self.submit_name(&name),
            Action::ToggleTheme => self.set_theme(self.theme.toggled()),
        }
    }

    fn turn(&mut self, direction: Direction, forced: bool) {
        if !self.overlay.is_running() {
            return;
        }
        match self.input.propose(self.direction, direction, forced) {
            Feedback::Turn => self.audio.play_cue(Cue::Turn, self.theme),
            Feedback::Invalid => {
                debug!("Rejected reversal {:?} -> {:?}", self.direction, direction);
                self.audio.play_cue(Cue::Invalid, self.theme);
            }
            Feedback::Silent => {}
        }
    }

    fn reset(&mut self) {
        self.snake = initial_snake();
        self.direction = Direction::Right;
        self.input.clear();
        self.food = random_food(&mut self.rng, &self.snake);
        self.score = 0;
        self.level = 1;
        self.speed = INITIAL_TICK;
        self.since_tick = Duration::ZERO;
        self.elapsed = Duration::ZERO;
        self.effect.reset();
        self.name_entry = None;
        self.highlight = None;
    }

    /// Start a fresh run. The jingle plays on the first run of the session
    /// and whenever `jingle` is set.
    fn begin(&mut self, jingle: bool) {
        self.audio.unlock();
        self.reset();
        self.overlay = Overlay::Running;
        if jingle || !self.intro_played {
            self.intro_played = true;
            self.audio.play_cue(Cue::Start, self.theme);
        }
        info!("Run started");
    }

    fn pause(&mut self) {
        self.overlay = Overlay::Paused;
        self.audio.stop_all();
        debug!("Paused at {:?}", self.elapsed);
    }

    fn resume(&mut self) {
        self.overlay = Overlay::Running;
        debug!("Resumed");
    }

    fn show_leaderboard(&mut self) {
        let Some(origin) = self.overlay.return_point() else {
            return;
        };
        self.audio.unlock();
        if origin == ReturnTo::Running {
            self.audio.stop_all();
        }
        self.overlay = Overlay::Leaderboard(origin);
    }

    fn back(&mut self) {
        if let Overlay::Leaderboard(origin) = self.overlay {
            self.overlay = origin.into();
        }
    }

    fn submit_name(&mut self, name: &str) {
        if self.overlay != Overlay::GameOver || self.name_entry.take().is_none() {
            return;
        }
        let record = LeaderboardRecord::new(
            name,
            self.score,
            self.snake.len() as u32,
            self.elapsed.as_millis() as u64,
            now_millis(),
        );
        let key = record.key();
        if self.leaderboard.insert(record).is_some() {
            self.highlight = Some(key);
        }
        self.overlay = Overlay::Leaderboard(ReturnTo::GameOver);
    }

    fn tick(&mut self) {
        if let Some(next) = self.input.take() {
            debug_assert!(!next.is_opposite(self.direction));
            self.direction = next;
        }
        match step(&self.snake, self.direction, self.food) {
            StepOutcome::Crashed => self.game_over(),
            StepOutcome::Advanced { snake, ate } => {
                self.snake = snake;
                if ate {
                    self.eat();
                }
            }
        }
    }

    fn eat(&mut self) {
        self.score += SCORE_PER_FOOD;
        if self.snake.len() % LEVEL_LENGTH_DIVISOR == 0 {
            self.level += 1;
            self.speed = self.speed.saturating_sub(TICK_STEP).max(MIN_TICK);
            debug!("Level {} at {:?} per tick", self.level, self.speed);
        }
        self.audio.play_cue(Cue::Eat, self.theme);
        self.effect.trigger();

        if self.snake.len() >= (COLS * ROWS) as usize {
            info!("Board filled");
            self.game_over();
            return;
        }
        self.food = random_food(&mut self.rng, &self.snake);
        debug!("Food at ({}, {})", self.food.x, self.food.y);
    }

    fn game_over(&mut self) {
        self.overlay = Overlay::GameOver;
        self.input.clear();
        self.audio.stop_all();
        self.audio.play_cue(Cue::Die, self.theme);

        let length = self.snake.len() as u32;
        let time_ms = self.elapsed.as_millis() as u64;
        info!(
            "Game over: {} points, length {}, {} ms",
            self.score, length, time_ms
        );
        if self.leaderboard.qualifies(self.score, length, time_ms) {
            self.name_entry = self
                .leaderboard
                .rank(self.score, length, time_ms)
                .map(|rank| NameEntry { rank });
        }
    }
}
