//! Screens of the game
//!
//! One scene is active at a time. A scene asks for a transition by
//! returning the [`SceneId`] of the next screen from `handle_event`; the
//! director builds that scene and drops the old one.

pub mod game;
pub mod home;
pub mod menu;
pub mod options;

pub use game::GameScene;
pub use home::HomeScene;
pub use menu::Menu;
pub use options::OptionsScene;

use crate::audio::AudioManager;
use crate::error::AssetError;
use crate::input::{InputEvent, KeyState};
use crate::platform::Assets;
use crate::renderer::Surface;
use crate::settings::Settings;

/// The screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    Home,
    Options,
    Game,
}

impl SceneId {
    /// Construct the scene, running its entry actions
    pub fn build(self, ctx: &mut SceneContext<'_>) -> Result<Box<dyn Scene>, AssetError> {
        Ok(match self {
            SceneId::Home => Box::new(HomeScene::new(ctx)?),
            SceneId::Options => Box::new(OptionsScene::new(ctx)?),
            SceneId::Game => Box::new(GameScene::new(ctx)?),
        })
    }
}

/// What the director lends a scene for one call
pub struct SceneContext<'a> {
    pub settings: &'a mut Settings,
    pub audio: &'a mut AudioManager,
    pub assets: &'a dyn Assets,
    /// Keys held this frame
    pub keys: &'a KeyState,
}

pub trait Scene {
    fn id(&self) -> SceneId;

    /// Advance by the frame's elapsed time
    fn update(&mut self, ctx: &mut SceneContext<'_>, elapsed_ms: f32);

    /// React to one input event. Returns the scene to switch to, if any.
    fn handle_event(
        &mut self,
        ctx: &mut SceneContext<'_>,
        elapsed_ms: f32,
        event: &InputEvent,
    ) -> Option<SceneId>;

    fn draw(&self, surface: &mut dyn Surface);
}

#[cfg(test)]
pub(crate) mod testing {
    //! Shared fixtures for scene tests

    use super::*;
    use crate::platform::BuiltinAssets;

    pub struct Harness {
        pub settings: Settings,
        pub audio: AudioManager,
        pub assets: BuiltinAssets,
        pub keys: KeyState,
    }

    impl Harness {
        pub fn new() -> Self {
            Self {
                settings: Settings::default(),
                audio: AudioManager::default(),
                assets: BuiltinAssets,
                keys: KeyState::new(),
            }
        }

        pub fn ctx(&mut self) -> SceneContext<'_> {
            SceneContext {
                settings: &mut self.settings,
                audio: &mut self.audio,
                assets: &self.assets,
                keys: &self.keys,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::Harness;
    use super::*;
    use crate::audio::Track;

    #[test]
    fn test_build_each_scene() {
        let mut harness = Harness::new();
        for id in [SceneId::Home, SceneId::Options, SceneId::Game] {
            let scene = id.build(&mut harness.ctx()).unwrap();
            assert_eq!(scene.id(), id);
        }
        // Game entry leaves the game track running
        assert_eq!(harness.audio.current_track(), Some(Track::Game));
    }
}
