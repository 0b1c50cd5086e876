//! Vertical text menu with an arrow cursor
//!
//! Shared by the home and options screens. The cursor is clamped to the
//! item list, it never wraps around.

use glam::Vec2;

use crate::consts::MENU_TEXT_SIZE;
use crate::error::AssetError;
use crate::input::Key;
use crate::platform::Assets;
use crate::platform::assets::paths;
use crate::renderer::{Color, Image, Surface, Text};
use crate::sim::Rect;

/// Gap between the arrow's center and the left edge of the selected item
const ARROW_GAP: f32 = 20.0;

pub struct Menu {
    items: Vec<Text>,
    selected: usize,
    arrow: Image,
    arrow_rect: Rect,
}

impl Menu {
    /// Lay out `items` (label, center) and load the arrow sprite
    pub fn new(assets: &dyn Assets, items: &[(&str, Vec2)]) -> Result<Self, AssetError> {
        let items: Vec<Text> = items
            .iter()
            .map(|(label, center)| assets.render_text(label, *center, Color::WHITE, MENU_TEXT_SIZE))
            .collect();

        // Arrow is sized from the first item
        let arrow_size = items
            .first()
            .map(|text| Vec2::new(text.width() / 2.0 + 10.0, text.height() / 2.0 + 10.0))
            .unwrap_or(Vec2::splat(MENU_TEXT_SIZE));
        let arrow = assets.load_image(paths::ARROW, false)?.scaled(arrow_size);
        let arrow_rect = Rect::new(Vec2::ZERO, arrow.size);

        let mut menu = Self {
            items,
            selected: 0,
            arrow,
            arrow_rect,
        };
        menu.place_arrow();
        Ok(menu)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn item(&self, index: usize) -> Option<&Text> {
        self.items.get(index)
    }

    pub fn arrow_rect(&self) -> &Rect {
        &self.arrow_rect
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.place_arrow();
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
        self.place_arrow();
    }

    /// Apply Up/Down. Returns false for any other key.
    pub fn navigate(&mut self, key: Key) -> bool {
        match key {
            Key::Up => self.move_up(),
            Key::Down => self.move_down(),
            _ => return false,
        }
        true
    }

    /// Replace an item's label, keeping its position
    pub fn relabel(&mut self, index: usize, label: &str, assets: &dyn Assets) {
        if let Some(text) = self.items.get_mut(index) {
            *text = assets.render_text(label, text.rect.center, text.color, text.size);
        }
        self.place_arrow();
    }

    fn place_arrow(&mut self) {
        if let Some(text) = self.items.get(self.selected) {
            self.arrow_rect.center = Vec2::new(
                text.rect.center.x - text.width() / 2.0 - ARROW_GAP,
                text.rect.center.y,
            );
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.blit_image(&self.arrow, &self.arrow_rect);
        for item in &self.items {
            surface.blit_text(item);
        }
    }
}
