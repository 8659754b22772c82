//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Stride of one vertex in a tightly packed buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BALL: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const CANNON: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const WALL: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const AIM_LINE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const TARGET: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const GRAVITY_BAR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const GRAVITY_BAR_CLAMPED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const HUD_TEXT: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Arrow tint when gravity bottomed out
    pub const ARROW_CLAMPED: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
}
