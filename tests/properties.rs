//! Ball and paddle invariants over random frame times and seeds

use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use not_pong::consts::*;
use not_pong::input::{Key, KeyBindings, KeyState};
use not_pong::sim::{Ball, Control, Paddle, Playfield, Rect, Score};

fn playfield() -> Playfield {
    Playfield::default()
}

fn overlaps_x(rect: &Rect, field: &Playfield) -> bool {
    rect.right() > 0.0 && rect.left() < field.width
}

fn overlaps_y(rect: &Rect, field: &Playfield) -> bool {
    rect.bottom() > 0.0 && rect.top() < field.height
}

proptest! {
    #[test]
    fn test_reset_speed_and_signs(seed in any::<u64>()) {
        let field = playfield();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut ball = Ball::new(&field, Vec2::splat(BALL_SIZE));

        ball.reset(&field, &mut rng);

        prop_assert_eq!(ball.center(), field.center());
        for speed in [ball.velocity.x.abs(), ball.velocity.y.abs()] {
            prop_assert!((BALL_RESET_SPEED_MIN..=BALL_RESET_SPEED_MAX).contains(&speed));
        }
        let signs = (ball.velocity.x.signum(), ball.velocity.y.signum());
        prop_assert!(signs == (-1.0, 1.0) || signs == (1.0, -1.0), "signs {:?}", signs);
    }

    #[test]
    fn test_ball_never_leaves_on_both_axes(
        x in 8.0f32..632.0,
        y in 8.0f32..472.0,
        vx in -0.6f32..0.6,
        vy in -0.6f32..0.6,
        elapsed in 0.0f32..=MAX_FRAME_MS,
        seed in any::<u64>(),
    ) {
        let field = playfield();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut score = Score::default();
        let mut ball = Ball {
            rect: Rect::new(Vec2::new(x, y), Vec2::splat(BALL_SIZE)),
            velocity: Vec2::new(vx, vy),
        };
        let left = Rect::new(Vec2::new(PADDLE_INSET, 240.0), Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT));
        let right = Rect::new(
            Vec2::new(field.width - PADDLE_INSET, 240.0),
            Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
        );

        ball.advance(elapsed, &field, [&left, &right], &mut score, &mut rng);

        prop_assert!(overlaps_x(&ball.rect, &field) || overlaps_y(&ball.rect, &field));
    }

    #[test]
    fn test_manual_paddle_stays_inside(
        y in 32.0f32..448.0,
        elapsed in 0.0f32..10_000.0,
        up in any::<bool>(),
    ) {
        let field = playfield();
        let bindings = KeyBindings::ARROWS;
        let mut paddle = Paddle::new(
            PADDLE_INSET,
            Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            PLAYER_PADDLE_SPEED,
            Control::Human(bindings),
            &field,
        );
        paddle.rect.center.y = y;
        let keys: KeyState = [if up { Key::Up } else { Key::Down }].into_iter().collect();

        paddle.move_manual(elapsed, &keys, bindings, &field);

        prop_assert!(paddle.rect.top() >= 0.0);
        prop_assert!(paddle.rect.bottom() <= field.height);
    }
}
