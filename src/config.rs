//! Game tuning constants

use std::time::Duration;

/// Grid width in cells
pub const COLS: i32 = 24;

/// Grid height in cells
pub const ROWS: i32 = 24;

/// Starting snake length
pub const INITIAL_SNAKE_LENGTH: usize = 3;

// =============================================================================
// Timing
// =============================================================================

/// Tick interval of a fresh game
pub const INITIAL_TICK: Duration = Duration::from_millis(150);

/// Fastest allowed tick interval
pub const MIN_TICK: Duration = Duration::from_millis(70);

/// How much the tick interval shrinks per level
pub const TICK_STEP: Duration = Duration::from_millis(8);

// =============================================================================
// Scoring
// =============================================================================

pub const SCORE_PER_FOOD: u32 = 10;

/// A level-up happens whenever the grown length is a multiple of this
pub const LEVEL_LENGTH_DIVISOR: usize = 3;

// =============================================================================
// Eat pulse
// =============================================================================

/// Length of one eat pulse
pub const EAT_PULSE: Duration = Duration::from_millis(240);

/// Most pulses that can be queued behind the active one
pub const EAT_QUEUE_MAX: u8 = 5;

/// Where a queued pulse restarts: 40% into the window
pub const EAT_CHAIN_REWIND: Duration = Duration::from_millis(EAT_PULSE.as_millis() as u64 * 2 / 5);

pub const EAT_BASE_AMPLITUDE: f32 = 0.28;
pub const EAT_AMPLITUDE_PER_QUEUED: f32 = 0.08;
pub const EAT_AMPLITUDE_BONUS_MAX: f32 = 0.38;
pub const EAT_OVERSHOOT: f32 = 2.2;
pub const EAT_GLOW_MAX: f32 = 0.6;

// =============================================================================
// Leaderboard
// =============================================================================

pub const LEADERBOARD_CAPACITY: usize = 10;

/// Name stored when the player submits a blank one
pub const DEFAULT_PLAYER_NAME: &str = "Player";

pub const NAME_MAX_CHARS: usize = 12;

// =============================================================================
// Layout
// =============================================================================

pub const MIN_BOARD_PX: f32 = 240.0;
pub const MAX_BOARD_PX: f32 = 640.0;

/// Horizontal space kept free around the board
pub const BOARD_MARGIN_X: f32 = 40.0;

/// Vertical space kept free for the HUD and controls
pub const BOARD_MARGIN_Y: f32 = 140.0;

/// Shortest swipe that counts as a direction
pub const SWIPE_MIN_PX: f32 = 24.0;

// =============================================================================
// Audio
// =============================================================================

pub const SAMPLE_RATE: u32 = 44_100;

/// Peak gain of a synthesized note
pub const NOTE_GAIN: f32 = 0.22;

/// Gain a note decays to by 90% of its duration
pub const NOTE_FLOOR_GAIN: f32 = 0.001;
