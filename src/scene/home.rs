//! Home screen: title, "Start" and "Options"

use glam::Vec2;

use super::{Menu, Scene, SceneContext, SceneId};
use crate::audio::Track;
use crate::consts::*;
use crate::error::AssetError;
use crate::input::{InputEvent, Key};
use crate::renderer::{Color, Surface, Text};

pub const TITLE: &str = "Not Pong";

/// Title line shared by the menu screens
pub(crate) fn title_text(ctx: &SceneContext<'_>) -> Text {
    ctx.assets.render_text(
        TITLE,
        Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT / 4.0),
        Color::WHITE,
        TITLE_TEXT_SIZE,
    )
}

pub struct HomeScene {
    title: Text,
    menu: Menu,
}

impl HomeScene {
    pub const START: usize = 0;
    pub const OPTIONS: usize = 1;

    pub fn new(ctx: &mut SceneContext<'_>) -> Result<Self, AssetError> {
        let menu = Menu::new(
            ctx.assets,
            &[
                (
                    "Start",
                    Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT / 2.0 + 20.0),
                ),
                (
                    "Options",
                    Vec2::new(PLAYFIELD_WIDTH / 2.0, 3.0 * PLAYFIELD_HEIGHT / 4.0),
                ),
            ],
        )?;

        if ctx.settings.audio_enabled {
            ctx.audio.ensure_playing(Track::Title);
        }

        Ok(Self {
            title: title_text(ctx),
            menu,
        })
    }

    pub fn selected(&self) -> usize {
        self.menu.selected()
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }
}

impl Scene for HomeScene {
    fn id(&self) -> SceneId {
        SceneId::Home
    }

    fn update(&mut self, _ctx: &mut SceneContext<'_>, _elapsed_ms: f32) {}

    fn handle_event(
        &mut self,
        _ctx: &mut SceneContext<'_>,
        _elapsed_ms: f32,
        event: &InputEvent,
    ) -> Option<SceneId> {
        let InputEvent::KeyDown(key) = *event else {
            return None;
        };
        if self.menu.navigate(key) {
            return None;
        }
        match (key, self.menu.selected()) {
            (Key::Enter, Self::START) => Some(SceneId::Game),
            (Key::Enter, Self::OPTIONS) => Some(SceneId::Options),
            _ => None,
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill(Color::BLACK);
        surface.blit_text(&self.title);
        self.menu.draw(surface);
    }
}
