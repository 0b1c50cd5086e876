//! The ball: Euler integration, wall rebounds, scoring and serve

use glam::Vec2;
use rand::Rng;

use super::rect::Rect;
use super::state::{Playfield, Score, Side};
use crate::consts::*;

/// A ball entity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub rect: Rect,
    /// Velocity in units per millisecond
    pub velocity: Vec2,
}

impl Ball {
    /// Ball at the playfield center with the opening velocity
    pub fn new(playfield: &Playfield, size: Vec2) -> Self {
        let (vx, vy) = BALL_OPENING_VELOCITY;
        Self {
            rect: Rect::new(playfield.center(), size),
            velocity: Vec2::new(vx, vy),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect.center
    }

    /// Advance the ball by `elapsed_ms` and resolve walls, goals and paddles.
    ///
    /// Order matters: integrate, score (and reset), rebound off walls with a
    /// same-frame correction step, then rebound off any overlapping paddle.
    /// Returns the side that won a point this frame.
    pub fn advance<R: Rng>(
        &mut self,
        elapsed_ms: f32,
        playfield: &Playfield,
        paddles: [&Rect; 2],
        score: &mut Score,
        rng: &mut R,
    ) -> Option<Side> {
        self.rect.center += self.velocity * elapsed_ms;

        let mut scored = None;
        if self.rect.left() <= 0.0 {
            score.award(Side::Computer);
            self.reset(playfield, rng);
            scored = Some(Side::Computer);
        }
        if self.rect.right() >= playfield.right_goal() {
            score.award(Side::Player);
            self.reset(playfield, rng);
            scored = Some(Side::Player);
        }

        if self.rect.left() <= 0.0 || self.rect.right() >= playfield.width {
            self.velocity.x = -self.velocity.x;
            self.rect.center.x += self.velocity.x * elapsed_ms;
        }
        if self.rect.top() <= 0.0 || self.rect.bottom() >= playfield.height {
            self.velocity.y = -self.velocity.y;
            self.rect.center.y += self.velocity.y * elapsed_ms;
        }

        // Only the horizontal direction flips on a paddle hit
        for paddle in paddles {
            if self.rect.intersects(paddle) {
                self.velocity.x = -self.velocity.x;
                self.rect.center.x += self.velocity.x * elapsed_ms;
            }
        }

        scored
    }

    /// Recenter and serve with a random velocity.
    ///
    /// One draw picks the sign pair, then each axis gets an independent speed
    /// from the reset range.
    pub fn reset<R: Rng>(&mut self, playfield: &Playfield, rng: &mut R) {
        self.rect.center = playfield.center();

        let (sign_x, sign_y) = if rng.random::<f32>() > SERVE_SPLIT {
            (-1.0, 1.0)
        } else {
            (1.0, -1.0)
        };
        self.velocity = Vec2::new(
            sign_x * rng.random_range(BALL_RESET_SPEED_MIN..=BALL_RESET_SPEED_MAX),
            sign_y * rng.random_range(BALL_RESET_SPEED_MIN..=BALL_RESET_SPEED_MAX),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn ball_at(center: Vec2, velocity: Vec2) -> Ball {
        Ball {
            rect: Rect::new(center, Vec2::splat(BALL_SIZE)),
            velocity,
        }
    }

    /// Paddles parked far from the ball's path
    fn far_paddles() -> [Rect; 2] {
        let size = Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT);
        [
            Rect::new(Vec2::new(-1000.0, -1000.0), size),
            Rect::new(Vec2::new(-2000.0, -1000.0), size),
        ]
    }

    #[test]
    fn test_advance_integrates_velocity() {
        let playfield = Playfield::default();
        let mut ball = ball_at(Vec2::new(320.0, 240.0), Vec2::new(0.5, -0.25));
        let mut score = Score::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let [a, b] = far_paddles();

        let scored = ball.advance(16.0, &playfield, [&a, &b], &mut score, &mut rng);

        assert_eq!(scored, None);
        assert_eq!(ball.center(), Vec2::new(328.0, 236.0));
        assert_eq!(score, Score::default());
    }

    #[test]
    fn test_left_goal_awards_computer_and_recenters() {
        let playfield = Playfield::default();
        let mut ball = ball_at(Vec2::new(10.0, 240.0), Vec2::new(-0.5, 0.0));
        let mut score = Score::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let [a, b] = far_paddles();

        let scored = ball.advance(10.0, &playfield, [&a, &b], &mut score, &mut rng);

        assert_eq!(scored, Some(Side::Computer));
        assert_eq!(score.computer, 1);
        assert_eq!(score.player, 0);
        assert_eq!(ball.center(), playfield.center());
    }

    #[test]
    fn test_right_goal_uses_margin() {
        let playfield = Playfield::default();
        // Right edge lands exactly on width - margin
        let x = playfield.right_goal() - BALL_SIZE / 2.0 - 5.0;
        let mut ball = ball_at(Vec2::new(x, 240.0), Vec2::new(0.5, 0.0));
        let mut score = Score::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let [a, b] = far_paddles();

        let scored = ball.advance(10.0, &playfield, [&a, &b], &mut score, &mut rng);

        assert_eq!(scored, Some(Side::Player));
        assert_eq!(score.player, 1);
        assert_eq!(ball.center(), playfield.center());
    }

    #[test]
    fn test_top_wall_rebound_with_correction() {
        let playfield = Playfield::default();
        let mut ball = ball_at(Vec2::new(320.0, 10.0), Vec2::new(0.0, -0.5));
        let mut score = Score::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let [a, b] = far_paddles();

        ball.advance(4.0, &playfield, [&a, &b], &mut score, &mut rng);

        // Moved to y=8 (top=0), flipped, then re-applied: back to y=10
        assert_eq!(ball.velocity.y, 0.5);
        assert_eq!(ball.center().y, 10.0);
    }

    #[test]
    fn test_paddle_hit_flips_horizontal_only() {
        let playfield = Playfield::default();
        let paddle = Rect::new(Vec2::new(30.0, 240.0), Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT));
        let far = Rect::new(Vec2::new(-500.0, 0.0), Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT));
        let mut ball = ball_at(Vec2::new(44.0, 250.0), Vec2::new(-0.5, 0.3));
        let mut score = Score::default();
        let mut rng = Pcg32::seed_from_u64(3);

        ball.advance(4.0, &playfield, [&paddle, &far], &mut score, &mut rng);

        assert_eq!(ball.velocity, Vec2::new(0.5, 0.3));
        // 44 - 2 = 42 (overlaps), then corrected back to 44
        assert_eq!(ball.center().x, 44.0);
        assert_eq!(score, Score::default());
    }

    #[test]
    fn test_reset_speed_range_and_signs() {
        let playfield = Playfield::default();
        let mut ball = Ball::new(&playfield, Vec2::splat(BALL_SIZE));
        let mut rng = Pcg32::seed_from_u64(42);

        for _ in 0..500 {
            ball.reset(&playfield, &mut rng);
            let v = ball.velocity;
            assert!((BALL_RESET_SPEED_MIN..=BALL_RESET_SPEED_MAX).contains(&v.x.abs()));
            assert!((BALL_RESET_SPEED_MIN..=BALL_RESET_SPEED_MAX).contains(&v.y.abs()));
            assert!(v.x.signum() == -v.y.signum(), "signs must be (-,+) or (+,-)");
            assert_eq!(ball.center(), playfield.center());
        }
    }

    #[test]
    fn test_reset_favours_left_serve() {
        let playfield = Playfield::default();
        let mut ball = Ball::new(&playfield, Vec2::splat(BALL_SIZE));
        let mut rng = Pcg32::seed_from_u64(2024);

        let trials = 10_000;
        let mut left = 0;
        for _ in 0..trials {
            ball.reset(&playfield, &mut rng);
            if ball.velocity.x < 0.0 {
                left += 1;
            }
        }
        let share = left as f32 / trials as f32;
        assert!((0.52..0.58).contains(&share), "left serve share {share}");
    }
}
