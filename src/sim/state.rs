//! Match state: playfield, score and the entities of one game

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::paddle::{Control, Paddle};
use crate::consts::*;
use crate::input::KeyBindings;

/// The visible game area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
    /// Distance in from the right wall at which the player scores
    pub goal_margin: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            goal_margin: PADDLE_WIDTH,
        }
    }
}

impl Playfield {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// x coordinate the ball's right edge must reach for the player to score
    #[inline]
    pub fn right_goal(&self) -> f32 {
        self.width - self.goal_margin
    }
}

/// Which side won a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Computer,
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub computer: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Computer => self.computer += 1,
        }
    }
}

/// Who controls the right-hand paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    VsComputer,
    TwoPlayer,
}

/// Everything one match owns
#[derive(Debug, Clone)]
pub struct GameState {
    pub playfield: Playfield,
    pub ball: Ball,
    /// Left paddle (always human)
    pub left: Paddle,
    /// Right paddle (computer or second human)
    pub right: Paddle,
    pub score: Score,
    pub mode: GameMode,
    /// RNG for serves
    pub rng: Pcg32,
}

/// Key bindings for the two human seats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seats {
    pub left: KeyBindings,
    pub right: KeyBindings,
}

impl Default for Seats {
    fn default() -> Self {
        Self {
            left: KeyBindings::ARROWS,
            right: KeyBindings::ARROWS,
        }
    }
}

impl GameState {
    /// Fresh match with entity sizes taken from their sprites
    pub fn new(
        ball_size: Vec2,
        paddle_size: Vec2,
        mode: GameMode,
        seats: Seats,
        seed: u64,
    ) -> Self {
        let playfield = Playfield {
            goal_margin: paddle_size.x,
            ..Playfield::default()
        };

        let left = Paddle::new(
            PADDLE_INSET,
            paddle_size,
            PLAYER_PADDLE_SPEED,
            Control::Human(seats.left),
            &playfield,
        );
        let right = match mode {
            GameMode::VsComputer => Paddle::new(
                playfield.width - PADDLE_INSET,
                paddle_size,
                COMPUTER_PADDLE_SPEED,
                Control::Computer,
                &playfield,
            ),
            GameMode::TwoPlayer => Paddle::new(
                playfield.width - PADDLE_INSET,
                paddle_size,
                PLAYER_PADDLE_SPEED,
                Control::Human(seats.right),
                &playfield,
            ),
        };

        Self {
            playfield,
            ball: Ball::new(&playfield, ball_size),
            left,
            right,
            score: Score::default(),
            mode,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Match with the default sprite sizes against the computer
    pub fn with_seed(seed: u64) -> Self {
        Self::new(
            Vec2::splat(BALL_SIZE),
            Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            GameMode::VsComputer,
            Seats::default(),
            seed,
        )
    }
}
