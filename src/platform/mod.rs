//! Platform abstraction layer
//!
//! Handles the collaborators the game core calls into:
//! - Time/ticks (frame clock)
//! - Input events and held keys
//! - Presenting a finished frame
//! - Loading sprites

pub mod assets;
pub mod clock;
pub mod terminal;

pub use assets::{Assets, BuiltinAssets, FileAssets};
pub use clock::FrameClock;
pub use terminal::Terminal;

use std::io;

use crate::input::{InputEvent, KeyState};
use crate::renderer::Canvas;

/// A display plus keyboard the director loop can drive
pub trait Platform {
    /// Drain the pending event queue and refresh the held-key state
    fn poll_events(&mut self) -> io::Result<Vec<InputEvent>>;

    /// Keys held as of the last poll
    fn key_state(&self) -> &KeyState;

    /// Show a finished frame
    fn present(&mut self, canvas: &Canvas) -> io::Result<()>;
}
