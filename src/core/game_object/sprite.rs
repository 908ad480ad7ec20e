//=========================================================================
// Textures & Sprites
//=========================================================================
//
// A texture is a grid of characters, usually read from a plain text
// file. A sprite is a rectangular window onto a texture.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::path::{Path, PathBuf};

//=== Internal Dependencies ===============================================

use crate::core::error::SceneError;
use crate::core::math::{Rect, Vector2};

//=== Texture =============================================================

/// Character texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    path: PathBuf,
    pixels: Vec<Vec<char>>,
}

impl Texture {
    /// Blank character used when a texture grows.
    pub const EMPTY_PIXEL: char = ' ';

    /// Creates an empty texture referring to `path` without reading it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pixels: Vec::new(),
        }
    }

    /// Reads the texture file at `path`, one row per line.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut texture = Self::new(path);
        texture.pixels = contents.lines().map(|line| line.chars().collect()).collect();

        let width = texture.width();
        texture.set_width(width);
        Ok(texture)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn width(&self) -> usize {
        self.pixels.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.pixels.len()
    }

    /// Resizes every row to `width`, padding with blanks or truncating.
    pub fn set_width(&mut self, width: usize) {
        for row in &mut self.pixels {
            row.resize(width, Self::EMPTY_PIXEL);
        }
    }

    /// Resizes the texture to `height` rows.
    pub fn set_height(&mut self, height: usize) {
        let width = self.width();
        self.pixels.resize(height, vec![Self::EMPTY_PIXEL; width]);
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<char> {
        self.pixels.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Replaces a pixel. Returns false when out of bounds.
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: char) -> bool {
        match self.pixels.get_mut(y).and_then(|row| row.get_mut(x)) {
            Some(slot) => {
                *slot = pixel;
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.pixels.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            let line: String = row.iter().collect();
            f.write_str(&line)?;
        }
        Ok(())
    }
}

//=== Sprite ==============================================================

/// A rectangular region of a texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    texture: Texture,
    rect: Rect,
}

impl Sprite {
    pub fn new(texture: Texture, rect: Rect) -> Self {
        Self { texture, rect }
    }

    pub fn texture(&self) -> &Texture {
        &self.texture
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Rows of the sprite region; cells outside the texture (or outside
    /// the coordinate range) are blank.
    pub fn rows(&self) -> Vec<String> {
        let origin: Vector2 = self.rect.position;
        (0..self.rect.height().max(0))
            .map(|dy| {
                (0..self.rect.width().max(0))
                    .map(|dx| {
                        let x = origin.x.checked_add(dx).and_then(|x| usize::try_from(x).ok());
                        let y = origin.y.checked_add(dy).and_then(|y| usize::try_from(y).ok());
                        x.zip(y)
                            .and_then(|(x, y)| self.texture.pixel(x, y))
                            .unwrap_or(Texture::EMPTY_PIXEL)
                    })
                    .collect()
            })
            .collect()
    }
}

//=========================================================================
// Tests
//=========================================================================
