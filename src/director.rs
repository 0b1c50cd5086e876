//! Owns the active scene and drives the frame loop
//!
//! Each frame: wait for the frame clock, drain input, forward every event
//! to the scene (switching scenes as soon as one is requested), update,
//! draw, present. Escape or a quit request ends the loop after the frame.

use crate::audio::AudioManager;
use crate::consts::TARGET_FPS;
use crate::error::{AssetError, Error};
use crate::input::{InputEvent, Key, KeyState};
use crate::platform::{Assets, FrameClock, Platform};
use crate::renderer::{Canvas, Surface};
use crate::scene::{Scene, SceneContext, SceneId};
use crate::settings::Settings;
use crate::sim::Playfield;

pub struct Director {
    scene: Box<dyn Scene>,
    quit_flag: bool,
    settings: Settings,
    audio: AudioManager,
    assets: Box<dyn Assets>,
}

impl Director {
    /// Start on the home screen
    pub fn new(
        mut settings: Settings,
        mut audio: AudioManager,
        assets: Box<dyn Assets>,
    ) -> Result<Self, AssetError> {
        let keys = KeyState::new();
        let scene = SceneId::Home.build(&mut SceneContext {
            settings: &mut settings,
            audio: &mut audio,
            assets: assets.as_ref(),
            keys: &keys,
        })?;
        log::info!("Director ready, starting on {:?}", scene.id());

        Ok(Self {
            scene,
            quit_flag: false,
            settings,
            audio,
            assets,
        })
    }

    /// Process one frame's input and advance the active scene
    pub fn step(
        &mut self,
        events: &[InputEvent],
        keys: &KeyState,
        elapsed_ms: f32,
    ) -> Result<(), AssetError> {
        if events
            .iter()
            .any(|event| matches!(event, InputEvent::Quit | InputEvent::KeyDown(Key::Escape)))
        {
            self.quit();
        }

        let mut ctx = SceneContext {
            settings: &mut self.settings,
            audio: &mut self.audio,
            assets: self.assets.as_ref(),
            keys,
        };

        for event in events {
            if let Some(next) = self.scene.handle_event(&mut ctx, elapsed_ms, event) {
                log::info!("Scene change: {:?} -> {:?}", self.scene.id(), next);
                self.scene = next.build(&mut ctx)?;
            }
        }

        self.scene.update(&mut ctx, elapsed_ms);
        Ok(())
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        self.scene.draw(surface);
    }

    /// Replace the active scene outright
    pub fn change_scene(&mut self, id: SceneId, keys: &KeyState) -> Result<(), AssetError> {
        log::info!("Scene change: {:?} -> {:?}", self.scene.id(), id);
        self.scene = id.build(&mut SceneContext {
            settings: &mut self.settings,
            audio: &mut self.audio,
            assets: self.assets.as_ref(),
            keys,
        })?;
        Ok(())
    }

    pub fn active_scene(&self) -> SceneId {
        self.scene.id()
    }

    /// End the loop after the current frame
    pub fn quit(&mut self) {
        if !self.quit_flag {
            log::info!("Quit requested from {:?}", self.scene.id());
        }
        self.quit_flag = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit_flag
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn audio(&self) -> &AudioManager {
        &self.audio
    }

    /// Run frames until quit
    pub fn run<P: Platform>(&mut self, platform: &mut P) -> Result<(), Error> {
        let mut clock = FrameClock::new();
        let mut canvas = Canvas::for_playfield(&Playfield::default());

        while !self.should_quit() {
            let elapsed_ms = clock.tick(TARGET_FPS);
            let events = platform.poll_events()?;
            self.step(&events, platform.key_state(), elapsed_ms)?;
            self.draw(&mut canvas);
            platform.present(&canvas)?;
        }

        log::info!("Quit requested, leaving the loop");
        Ok(())
    }
}
