//! Sprite-sheet frame stepping for the walking target

use serde::{Deserialize, Serialize};

use crate::consts::{FRAME_HEIGHT, FRAME_WIDTH, GUMBA_FRAME_INCREMENT, GUMBA_FRAMES, SHEET_COLUMNS};

/// Pixel rectangle inside a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl TextureRect {
    /// Cell of `frame` in a row-major sheet of `columns` cells per row
    pub fn grid_cell(frame: u32, columns: u32, width: u32, height: u32) -> Self {
        Self {
            x: (frame % columns) * width,
            y: (frame / columns) * height,
            width,
            height,
        }
    }
}

/// Fractional frame counter that advances every tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteAnimation {
    pub counter: f32,
    pub frame: u32,
    pub frame_count: u32,
    pub increment: f32,
}

impl Default for SpriteAnimation {
    fn default() -> Self {
        Self::new(GUMBA_FRAMES, GUMBA_FRAME_INCREMENT)
    }
}

impl SpriteAnimation {
    pub fn new(frame_count: u32, increment: f32) -> Self {
        Self {
            counter: 0.0,
            frame: 0,
            frame_count,
            increment,
        }
    }

    /// Advance one tick. Returns the new cell only when the discrete frame changed.
    pub fn advance(&mut self) -> Option<TextureRect> {
        self.counter += self.increment;
        let mut frame = self.counter as u32;
        if frame >= self.frame_count {
            frame = 0;
            self.counter = 0.0;
        }
        if frame == self.frame {
            return None;
        }
        self.frame = frame;
        Some(self.rect())
    }

    /// Sheet cell for the current frame
    pub fn rect(&self) -> TextureRect {
        TextureRect::grid_cell(self.frame, SHEET_COLUMNS, FRAME_WIDTH, FRAME_HEIGHT)
    }
}
