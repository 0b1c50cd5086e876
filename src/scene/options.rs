//! Options screen: music toggle, resolution (not implemented), back

use glam::Vec2;

use super::home::title_text;
use super::{Menu, Scene, SceneContext, SceneId};
use crate::audio::Track;
use crate::consts::*;
use crate::error::AssetError;
use crate::input::{InputEvent, Key};
use crate::renderer::{Color, Surface, Text};
use crate::settings::Settings;

fn music_label(enabled: bool) -> String {
    format!("Music: {}", if enabled { "On" } else { "Off" })
}

fn resolution_label(settings: &Settings) -> String {
    format!(
        "Resolution: {} (not implemented)",
        settings.resolution.as_str()
    )
}

pub struct OptionsScene {
    title: Text,
    menu: Menu,
}

impl OptionsScene {
    pub const MUSIC: usize = 0;
    pub const RESOLUTION: usize = 1;
    pub const BACK: usize = 2;

    pub fn new(ctx: &mut SceneContext<'_>) -> Result<Self, AssetError> {
        let music = music_label(ctx.settings.audio_enabled);
        let resolution = resolution_label(ctx.settings);
        let menu = Menu::new(
            ctx.assets,
            &[
                (
                    music.as_str(),
                    Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT / 2.0 + 20.0),
                ),
                (
                    resolution.as_str(),
                    Vec2::new(PLAYFIELD_WIDTH / 2.0, 3.0 * PLAYFIELD_HEIGHT / 4.0),
                ),
                (
                    "Back",
                    Vec2::new(PLAYFIELD_WIDTH / 6.0, PLAYFIELD_HEIGHT - 40.0),
                ),
            ],
        )?;

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

    fn toggle_music(&mut self, ctx: &mut SceneContext<'_>) {
        if ctx.settings.toggle_audio() {
            ctx.audio.play(Track::Title);
        } else {
            ctx.audio.stop();
        }
        log::info!(
            "Music {}",
            if ctx.settings.audio_enabled { "enabled" } else { "disabled" }
        );
        self.menu.relabel(
            Self::MUSIC,
            &music_label(ctx.settings.audio_enabled),
            ctx.assets,
        );
    }
}

impl Scene for OptionsScene {
    fn id(&self) -> SceneId {
        SceneId::Options
    }

    fn update(&mut self, _ctx: &mut SceneContext<'_>, _elapsed_ms: f32) {}

    fn handle_event(
        &mut self,
        ctx: &mut SceneContext<'_>,
        _elapsed_ms: f32,
        event: &InputEvent,
    ) -> Option<SceneId> {
        let InputEvent::KeyDown(key) = *event else {
            return None;
        };
        if self.menu.navigate(key) || key != Key::Enter {
            return None;
        }
        match self.menu.selected() {
            Self::MUSIC => self.toggle_music(ctx),
            Self::RESOLUTION => {
                log::warn!(
                    "Resolution switching is not implemented (staying at {})",
                    ctx.settings.resolution.as_str()
                );
            }
            Self::BACK => return Some(SceneId::Home),
            _ => {}
        }
        None
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill(Color::BLACK);
        surface.blit_text(&self.title);
        self.menu.draw(surface);
    }
}
