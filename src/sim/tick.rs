//! Per-frame simulation step
//!
//! Advances one match by the elapsed frame time: human paddles first, then
//! the ball, then the computer paddle reacting to the ball's new position.

use super::paddle::{Control, Paddle};
use super::state::{GameState, Playfield, Side};
use crate::input::KeyState;

/// Advance the match by `elapsed_ms`. Returns the side that scored, if any.
pub fn tick(state: &mut GameState, keys: &KeyState, elapsed_ms: f32) -> Option<Side> {
    let playfield = state.playfield;

    move_human(&mut state.left, keys, elapsed_ms, &playfield);
    move_human(&mut state.right, keys, elapsed_ms, &playfield);

    let scored = state.ball.advance(
        elapsed_ms,
        &playfield,
        [&state.left.rect, &state.right.rect],
        &mut state.score,
        &mut state.rng,
    );
    if let Some(side) = scored {
        log::debug!(
            "Point to {:?}: {}-{}",
            side,
            state.score.player,
            state.score.computer
        );
    }

    for paddle in [&mut state.left, &mut state.right] {
        if paddle.control == Control::Computer {
            paddle.move_ai(elapsed_ms, &state.ball, &playfield);
        }
    }

    scored
}

fn move_human(paddle: &mut Paddle, keys: &KeyState, elapsed_ms: f32, playfield: &Playfield) {
    if let Control::Human(bindings) = paddle.control {
        paddle.move_manual(elapsed_ms, keys, bindings, playfield);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, KeyBindings};
    use crate::sim::state::{GameMode, Score, Seats};
    use glam::Vec2;

    const FRAME_MS: f32 = 16.0;

    #[test]
    fn test_left_goal_scenario() {
        let mut state = GameState::with_seed(5);
        state.ball.velocity = Vec2::new(-0.5, 0.5);
        // Park the player paddle out of the ball's path
        state.left.rect.center.y = state.left.rect.half_extents().y;
        let keys = KeyState::new();

        let mut frames = 0;
        let scored = loop {
            frames += 1;
            assert!(frames < 200, "ball never reached the left wall");
            if let Some(side) = tick(&mut state, &keys, FRAME_MS) {
                break side;
            }
        };

        assert_eq!(scored, Side::Computer);
        assert_eq!(state.score, Score { player: 0, computer: 1 });
        assert_eq!(state.ball.center(), state.playfield.center());
    }

    #[test]
    fn test_human_paddle_moves_with_keys() {
        let mut state = GameState::with_seed(1);
        let keys: KeyState = [Key::Down].into_iter().collect();

        tick(&mut state, &keys, 10.0);

        assert_eq!(state.left.rect.center.y, 245.0);
    }

    #[test]
    fn test_two_player_moves_both_paddles() {
        let seats = Seats {
            left: KeyBindings::WS,
            right: KeyBindings::ARROWS,
        };
        let mut state = GameState::new(
            Vec2::splat(16.0),
            Vec2::new(10.0, 64.0),
            GameMode::TwoPlayer,
            seats,
            3,
        );
        let keys: KeyState = [Key::Char('w'), Key::Down].into_iter().collect();

        tick(&mut state, &keys, 10.0);

        assert_eq!(state.left.rect.center.y, 235.0);
        assert_eq!(state.right.rect.center.y, 245.0);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::with_seed(99);
        let mut b = GameState::with_seed(99);
        let keys: KeyState = [Key::Up].into_iter().collect();

        for _ in 0..2_000 {
            tick(&mut a, &keys, FRAME_MS);
            tick(&mut b, &keys, FRAME_MS);
        }

        assert_eq!(a.score, b.score);
        assert_eq!(a.ball, b.ball);
        assert_eq!(a.right.rect, b.right.rect);
    }
}
