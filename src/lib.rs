//! Not Pong - a Pong variant with a home/options/game scene flow
//!
//! Core modules:
//! - `sim`: Ball/paddle simulation and rectangle collision
//! - `scene`: Home, Options and Game screens
//! - `director`: Owns the active scene and runs the timed loop
//! - `renderer`: Drawable surfaces, sprites, text and the character canvas
//! - `audio`: Music tracks behind a pluggable sink
//! - `input`: Keys, input events and held-key state
//! - `platform`: Frame clock, asset loading and the terminal backend
//! - `settings`: Player-facing settings (music, mode, key bindings)

pub mod audio;
pub mod director;
pub mod error;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use director::Director;
pub use error::{AssetError, Error, SettingsError};
pub use settings::{Resolution, Settings};

/// Game configuration constants
pub mod consts {
    /// Target frame rate of the director loop
    pub const TARGET_FPS: u32 = 60;
    /// Upper bound on a single frame's elapsed time (ms), so a stall can't
    /// launch the ball through a paddle
    pub const MAX_FRAME_MS: f32 = 100.0;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 640.0;
    pub const PLAYFIELD_HEIGHT: f32 = 480.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 64.0;
    /// Distance of each paddle's center from its side wall
    pub const PADDLE_INSET: f32 = 30.0;
    /// Human paddle speed (units per ms)
    pub const PLAYER_PADDLE_SPEED: f32 = 0.5;
    /// Computer paddle is deliberately slower
    pub const COMPUTER_PADDLE_SPEED: f32 = 0.4;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 16.0;
    /// Opening velocity before the first point (units per ms)
    pub const BALL_OPENING_VELOCITY: (f32, f32) = (0.5, -0.5);
    /// Per-axis speed range drawn on every reset
    pub const BALL_RESET_SPEED_MIN: f32 = 0.3;
    pub const BALL_RESET_SPEED_MAX: f32 = 0.6;
    /// Draws above this value serve left-and-down, the rest right-and-up
    pub const SERVE_SPLIT: f32 = 0.45;

    /// Text sizes (px)
    pub const TITLE_TEXT_SIZE: f32 = 75.0;
    pub const MENU_TEXT_SIZE: f32 = 25.0;
}
