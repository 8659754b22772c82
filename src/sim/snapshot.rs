//! Read-only view of the simulation for renderers and HUD

use glam::Vec2;
use serde::Serialize;

use super::anim::TextureRect;
use super::collision::Rect;
use super::state::{Facing, GameState, GravityIndicator, ScoreCounters};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub projectile_pos: Vec2,
    pub projectile_radius: f32,
    pub projectile_rotation: f32,
    pub anchor: Vec2,
    pub barrel_angle: f32,
    /// (pointer, anchor) while aiming
    pub aim_line: Option<(Vec2, Vec2)>,
    pub target: Rect,
    pub target_facing: Facing,
    pub target_frame: TextureRect,
    pub wall: Rect,
    pub gravity: GravityIndicator,
    pub score: ScoreCounters,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            projectile_pos: self.projectile.pos,
            projectile_radius: self.projectile.radius,
            projectile_rotation: self.projectile.rotation,
            anchor: self.aim.anchor,
            barrel_angle: self.aim.barrel_angle,
            aim_line: self.aim_line(),
            target: self.target.bounds(),
            target_facing: self.target.facing,
            target_frame: self.animation.rect(),
            wall: self.wall,
            gravity: self.gravity.indicator(),
            score: self.score,
        }
    }
}
