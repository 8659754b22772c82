//! Bullet Bill - drag-to-aim artillery game
//!
//! Core modules:
//! - `sim`: Fixed-step simulation (aiming, ballistics, collisions, score)
//! - `host`: Fixed timestep frame pump and input buffering
//! - `renderer`: Backend-agnostic draw list built from a sim snapshot
//! - `assets`: Asset identifiers and log-and-continue loading
//! - `settings`: JSON-backed configuration

pub mod assets;
pub mod host;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use host::Host;
pub use settings::{DisplayMode, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the host will account for (seconds)
    pub const MAX_FRAME_TIME: f32 = 0.25;

    /// Window / playfield dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Cannon pivot; also where the bullet waits between shots
    pub const ANCHOR: Vec2 = Vec2::new(100.0, 550.0);
    pub const SPAWN: Vec2 = ANCHOR;
    /// Drag distance (px) per unit of launch velocity
    pub const LAUNCH_DIVISOR: f32 = 50.0;
    /// Barrel starts tilted toward the wall
    pub const INITIAL_BARREL_ANGLE: f32 = 45.0;

    /// Bullet collision circle
    pub const BALL_RADIUS: f32 = 10.0;

    /// Gravity (px/tick²) and its indicator bar
    pub const INITIAL_GRAVITY: f32 = 0.05;
    pub const GRAVITY_STEP: f32 = 0.005;
    pub const GRAVITY_BAR_SCALE: f32 = 500.0;
    pub const GRAVITY_BAR_OFFSET: f32 = 35.0;
    /// Bar height the arrow sprite is drawn at when unscaled
    pub const GRAVITY_ARROW_BASE: f32 = 60.0;

    /// Wall obstacle
    pub const WALL_POS: Vec2 = Vec2::new(400.0, 500.0);
    pub const WALL_SIZE: Vec2 = Vec2::new(32.0, 100.0);

    /// Walking target
    pub const TARGET_START: Vec2 = Vec2::new(420.0, 545.0);
    pub const TARGET_SIZE: Vec2 = Vec2::new(55.0, 55.0);
    pub const TARGET_SPEED: f32 = 0.6;
    pub const TARGET_LEFT_EDGE: f32 = 420.0;
    pub const TARGET_RIGHT_EDGE: f32 = 740.0;

    /// Gumba sprite sheet
    pub const GUMBA_FRAMES: u32 = 20;
    pub const GUMBA_FRAME_INCREMENT: f32 = 0.25;
    pub const FRAME_WIDTH: u32 = 52;
    pub const FRAME_HEIGHT: u32 = 54;
    pub const SHEET_COLUMNS: u32 = 10;

    /// Aim guide
    pub const PREVIEW_STEPS: u32 = 255;
    pub const PREVIEW_SAMPLE_EVERY: u32 = 20;
}

/// Heading of a vector in degrees, rotated so that "straight up" is 0°
///
/// Sprites are authored pointing up, while atan2 measures from +x.
#[inline]
pub fn sprite_heading(v: Vec2) -> f32 {
    v.y.atan2(v.x).to_degrees() + 90.0
}

/// Screen-space rotation of `point` by `degrees` around `pivot` (y down, clockwise positive)
#[inline]
pub fn rotate_about(point: Vec2, pivot: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let d = point - pivot;
    pivot + Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_heading() {
        // Straight up on screen (negative y) is 0°
        assert!(sprite_heading(Vec2::new(0.0, -1.0)).abs() < 1e-4);
        // Right is 90°
        assert!((sprite_heading(Vec2::new(1.0, 0.0)) - 90.0).abs() < 1e-4);
        // Straight down is 180°
        assert!((sprite_heading(Vec2::new(0.0, 1.0)) - 180.0).abs() < 1e-4);
    }

    #[test]
    fn test_rotate_about() {
        let p = rotate_about(Vec2::new(10.0, 0.0), Vec2::ZERO, 90.0);
        assert!((p - Vec2::new(0.0, 10.0)).length() < 1e-4);
    }
}
