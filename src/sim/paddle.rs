//! Paddles: keyboard-driven and computer-driven vertical movement

use glam::Vec2;

use super::ball::Ball;
use super::rect::Rect;
use super::state::Playfield;
use crate::input::{KeyBindings, KeyState};

/// Who moves a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Human(KeyBindings),
    Computer,
}

/// A paddle entity
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub rect: Rect,
    /// Vertical speed in units per millisecond
    pub speed: f32,
    pub control: Control,
}

impl Paddle {
    /// Paddle centered vertically at horizontal position `x`
    pub fn new(x: f32, size: Vec2, speed: f32, control: Control, playfield: &Playfield) -> Self {
        Self {
            rect: Rect::new(Vec2::new(x, playfield.height / 2.0), size),
            speed,
            control,
        }
    }

    /// Move according to held keys.
    ///
    /// The bound check uses the rect before the move; the result is then
    /// clamped so the paddle never leaves the playfield.
    pub fn move_manual(
        &mut self,
        elapsed_ms: f32,
        keys: &KeyState,
        bindings: KeyBindings,
        playfield: &Playfield,
    ) {
        let step = self.speed * elapsed_ms;
        let before = self.rect;

        if before.top() >= 0.0 && keys.is_pressed(bindings.up) {
            self.rect.center.y -= step;
        }
        if before.bottom() <= playfield.height && keys.is_pressed(bindings.down) {
            self.rect.center.y += step;
        }

        self.clamp_to(playfield);
    }

    /// Chase the ball vertically.
    ///
    /// Only engages while the ball is heading right and is on the right half
    /// of the field. No overshoot check, so the paddle may jitter around the
    /// ball when close.
    pub fn move_ai(&mut self, elapsed_ms: f32, ball: &Ball, playfield: &Playfield) {
        let target = ball.center();
        if ball.velocity.x < 0.0 || target.x < playfield.width / 2.0 {
            return;
        }

        let step = self.speed * elapsed_ms;
        if self.rect.center.y < target.y {
            self.rect.center.y += step;
        }
        if self.rect.center.y > target.y {
            self.rect.center.y -= step;
        }

        self.clamp_to(playfield);
    }

    fn clamp_to(&mut self, playfield: &Playfield) {
        let half = self.rect.half_extents().y;
        self.rect.center.y = self.rect.center.y.clamp(half, playfield.height - half);
    }
}
