//! Gameplay screen

use glam::Vec2;
use rand::Rng;

use super::{Scene, SceneContext, SceneId};
use crate::audio::Track;
use crate::consts::MENU_TEXT_SIZE;
use crate::error::AssetError;
use crate::input::{InputEvent, Key};
use crate::platform::Assets;
use crate::platform::assets::paths;
use crate::renderer::{Color, Image, Surface, Text};
use crate::sim::{self, GameState, Playfield, Rect, Score};

/// Score lines for (player, computer)
fn score_texts(assets: &dyn Assets, playfield: &Playfield, score: &Score) -> [Text; 2] {
    [
        assets.render_text(
            &score.player.to_string(),
            Vec2::new(playfield.width / 4.0, 40.0),
            Color::WHITE,
            MENU_TEXT_SIZE,
        ),
        assets.render_text(
            &score.computer.to_string(),
            Vec2::new(playfield.width - playfield.width / 4.0, 40.0),
            Color::WHITE,
            MENU_TEXT_SIZE,
        ),
    ]
}

pub struct GameScene {
    state: GameState,
    background: Image,
    ball: Image,
    paddle: Image,
    scores: [Text; 2],
}

impl GameScene {
    pub fn new(ctx: &mut SceneContext<'_>) -> Result<Self, AssetError> {
        ctx.audio.stop();
        if ctx.settings.audio_enabled {
            ctx.audio.play(Track::Game);
        }

        let background = ctx.assets.load_image(paths::BACKGROUND, false)?;
        let ball = ctx.assets.load_image(paths::BALL, true)?;
        let paddle = ctx.assets.load_image(paths::PADDLE, false)?;

        let seed = ctx.settings.seed.unwrap_or_else(|| rand::rng().random());
        let state = GameState::new(
            ball.size,
            paddle.size,
            ctx.settings.game_mode(),
            ctx.settings.seats(),
            seed,
        );
        log::info!("New match ({:?}, seed {})", state.mode, seed);

        let scores = score_texts(ctx.assets, &state.playfield, &state.score);
        Ok(Self {
            state,
            background,
            ball,
            paddle,
            scores,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn score_texts(&self) -> &[Text; 2] {
        &self.scores
    }
}

impl Scene for GameScene {
    fn id(&self) -> SceneId {
        SceneId::Game
    }

    fn update(&mut self, ctx: &mut SceneContext<'_>, elapsed_ms: f32) {
        if let Some(side) = sim::tick(&mut self.state, ctx.keys, elapsed_ms) {
            log::info!(
                "{:?} scores ({} - {})",
                side,
                self.state.score.player,
                self.state.score.computer
            );
        }
        self.scores = score_texts(ctx.assets, &self.state.playfield, &self.state.score);
    }

    fn handle_event(
        &mut self,
        _ctx: &mut SceneContext<'_>,
        _elapsed_ms: f32,
        event: &InputEvent,
    ) -> Option<SceneId> {
        match event {
            InputEvent::KeyDown(Key::Backspace) => Some(SceneId::Home),
            _ => None,
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill(Color::BLACK);
        surface.blit_image(
            &self.background,
            &Rect::from_top_left(Vec2::ZERO, self.background.size),
        );
        surface.blit_image(&self.ball, &self.state.ball.rect);
        surface.blit_image(&self.paddle, &self.state.left.rect);
        surface.blit_image(&self.paddle, &self.state.right.rect);
        for text in &self.scores {
            surface.blit_text(text);
        }
    }
}
