//! Board rules and the frame loop that drives them
//!
//! Nothing here touches the window or the audio device, so the whole game can
//! be stepped headless.

pub mod effects;
pub mod game_loop;
pub mod grid;
pub mod input;
pub mod overlay;
pub mod step;

pub use effects::EffectParams;
pub use game_loop::{Action, GameLoop, NameEntry, RenderSnapshot, Stats};
pub use grid::{Cell, Direction};
pub use overlay::{Overlay, ReturnTo};
