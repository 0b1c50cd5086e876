//! Sprite loading and text layout
//!
//! Scenes load every sprite once on construction. A failure is an
//! [`AssetError`] that ends the run.

use std::path::PathBuf;

use glam::Vec2;

use crate::consts::*;
use crate::error::AssetError;
use crate::renderer::{self, Color, Image, Mask, Text};

/// Sprite paths, relative to the asset root
pub mod paths {
    pub const BACKGROUND: &str = "images/background.png";
    pub const BALL: &str = "images/ball.png";
    pub const PADDLE: &str = "images/paddle.png";
    pub const ARROW: &str = "images/arrow.png";
}

/// Where scenes get their sprites and text from
pub trait Assets {
    /// Load a sprite. With `transparent`, the top-left pixel's colour is
    /// treated as see-through.
    fn load_image(&self, path: &str, transparent: bool) -> Result<Image, AssetError>;

    /// Lay out a line of text centered at `center`
    fn render_text(&self, content: &str, center: Vec2, color: Color, size: f32) -> Text {
        renderer::render_text(content, center, color, size)
    }
}

/// PNG sprites read from a directory
#[derive(Debug, Clone)]
pub struct FileAssets {
    root: PathBuf,
}

impl FileAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Assets for FileAssets {
    fn load_image(&self, path: &str, transparent: bool) -> Result<Image, AssetError> {
        let full = self.root.join(path);
        let pixels = image::open(&full)
            .map_err(|source| AssetError::Image {
                path: full.clone(),
                source,
            })?
            .to_rgba8();

        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(AssetError::EmptyImage { path: full });
        }

        let color_key = transparent.then(|| {
            let [r, g, b, _] = pixels.get_pixel(0, 0).0;
            Color::rgb(r, g, b)
        });

        // Average colour of the pixels that will actually be drawn
        let (mut sum, mut count) = ([0u64; 3], 0u64);
        for pixel in pixels.pixels() {
            let [r, g, b, a] = pixel.0;
            if a == 0 || color_key == Some(Color::rgb(r, g, b)) {
                continue;
            }
            sum[0] += r as u64;
            sum[1] += g as u64;
            sum[2] += b as u64;
            count += 1;
        }
        let color = if count == 0 {
            color_key.unwrap_or(Color::BLACK)
        } else {
            Color::rgb(
                (sum[0] / count) as u8,
                (sum[1] / count) as u8,
                (sum[2] / count) as u8,
            )
        };

        let mask = color_key.map(|key| {
            Mask::from_fn(width, height, |x, y| {
                let [r, g, b, a] = pixels.get_pixel(x, y).0;
                a > 0 && Color::rgb(r, g, b) != key
            })
        });

        log::debug!("Loaded {} ({}x{})", full.display(), width, height);
        Ok(Image {
            size: Vec2::new(width as f32, height as f32),
            color,
            color_key,
            mask,
        })
    }
}

/// The game's sprites generated in memory, no files needed
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinAssets;

impl Assets for BuiltinAssets {
    fn load_image(&self, path: &str, transparent: bool) -> Result<Image, AssetError> {
        let (size, color) = match path {
            paths::BACKGROUND => (
                Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
                Color::rgb(12, 44, 28),
            ),
            paths::BALL => (Vec2::splat(BALL_SIZE), Color::WHITE),
            paths::PADDLE => (Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT), Color::rgb(230, 230, 230)),
            paths::ARROW => (Vec2::new(24.0, 16.0), Color::rgb(255, 200, 0)),
            _ => {
                return Err(AssetError::UnknownSprite {
                    path: PathBuf::from(path),
                });
            }
        };
        // Round ball, everything else fills its rect
        let round = path == paths::BALL;
        let (w, h) = (size.x as u32, size.y as u32);
        let mask = transparent.then(|| {
            Mask::from_fn(w, h, |x, y| {
                !round || {
                    let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - size / 2.0;
                    d.length() <= size.x / 2.0
                }
            })
        });
        Ok(Image {
            size,
            color,
            color_key: transparent.then_some(Color::BLACK),
            mask,
        })
    }
}
