//! Rendering primitives
//!
//! Scenes draw through the [`Surface`] trait in playfield coordinates.
//! [`Canvas`] rasterises onto a character grid for the terminal.

pub mod canvas;

pub use canvas::{Canvas, Cell};

use glam::Vec2;

use crate::sim::Rect;

/// Horizontal advance of one glyph as a fraction of the text size
pub const GLYPH_ADVANCE: f32 = 0.32;

/// 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Which pixels of a colour-keyed sprite are drawn, in source pixels
#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    width: u32,
    height: u32,
    opaque: Vec<bool>,
}

impl Mask {
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> bool) -> Self {
        let mut opaque = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                opaque.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            opaque,
        }
    }

    /// Sample at normalised coordinates (`0..1` on each axis, clamped)
    pub fn is_opaque_at(&self, u: f32, v: f32) -> bool {
        if self.width == 0 || self.height == 0 {
            return false;
        }
        let x = ((u * self.width as f32) as u32).min(self.width - 1);
        let y = ((v * self.height as f32) as u32).min(self.height - 1);
        self.opaque
            .get((y * self.width + x) as usize)
            .copied()
            .unwrap_or(false)
    }
}

/// A loaded sprite
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    /// Size in pixels
    pub size: Vec2,
    /// Average colour of the visible pixels
    pub color: Color,
    /// Pixels of this colour are not drawn
    pub color_key: Option<Color>,
    /// Pixels left after the colour key, set for keyed sprites
    pub mask: Option<Mask>,
}

impl Image {
    pub fn new(size: Vec2, color: Color) -> Self {
        Self {
            size,
            color,
            color_key: None,
            mask: None,
        }
    }

    /// Same sprite stretched to `size`
    pub fn scaled(&self, size: Vec2) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }

    /// Whether the sprite is drawn at normalised position (`u`, `v`)
    pub fn is_opaque_at(&self, u: f32, v: f32) -> bool {
        self.mask.as_ref().is_none_or(|mask| mask.is_opaque_at(u, v))
    }
}

/// A rendered line of text and its bounding box
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
    pub rect: Rect,
    pub color: Color,
    pub size: f32,
}

impl Text {
    pub fn width(&self) -> f32 {
        self.rect.width()
    }

    pub fn height(&self) -> f32 {
        self.rect.height()
    }
}

/// Lay out `content` centered at `center`
pub fn render_text(content: &str, center: Vec2, color: Color, size: f32) -> Text {
    let glyphs = content.chars().count() as f32;
    let extent = Vec2::new(glyphs * size * GLYPH_ADVANCE, size);
    Text {
        content: content.to_string(),
        rect: Rect::new(center, extent),
        color,
        size,
    }
}

/// Anything a scene can draw onto
pub trait Surface {
    /// Clear to a solid colour
    fn fill(&mut self, color: Color);
    /// Draw `image` stretched over `dest`
    fn blit_image(&mut self, image: &Image, dest: &Rect);
    fn blit_text(&mut self, text: &Text);
}
