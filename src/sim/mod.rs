//! Aiming and ballistics simulation
//!
//! All gameplay logic lives here. This module is pure and deterministic:
//! - Fixed timestep only
//! - No rendering or platform dependencies
//! - Display mode has no influence on anything in here

pub mod anim;
pub mod collision;
pub mod input;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod trajectory;

pub use anim::{SpriteAnimation, TextureRect};
pub use collision::{Rect, ball_rect_overlap, out_of_bounds};
pub use input::{InputEvent, KeyAction};
pub use snapshot::Snapshot;
pub use state::{
    AimState, Facing, GameState, Gravity, GravityIndicator, Projectile, ScoreCounters,
    ShotOutcome, ShotPhase, Target,
};
pub use tick::{TickInput, TickReport, adjust_gravity, tick, tick_animation, tick_projectile, tick_target};
pub use trajectory::{PreviewPoint, TrajectoryPreview};
