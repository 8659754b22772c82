//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`]; input handlers and
//! the fixed tick are the only writers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::anim::SpriteAnimation;
use super::collision::Rect;
use crate::consts::*;

/// Where the current shot is in its cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShotPhase {
    /// Bullet parked at the cannon, ready for a new aim
    #[default]
    Idle,
    /// Pointer held down, barrel follows the pointer
    Aiming,
    /// Bullet in the air
    Flying,
}

/// How a flying shot ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOutcome {
    /// Left the playfield through the floor or a side
    OutOfBounds,
    /// Struck the walking target
    TargetHit,
    /// Struck the wall
    WallHit,
}

impl ShotOutcome {
    pub fn is_hit(self) -> bool {
        self == ShotOutcome::TargetHit
    }
}

/// Drag-to-aim state, meaningful while [`ShotPhase::Aiming`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AimState {
    /// Latest pointer position (aim line end)
    pub pointer: Vec2,
    /// Fixed cannon pivot (aim line start)
    pub anchor: Vec2,
    /// Barrel rotation in degrees, 0 = pointing up
    pub barrel_angle: f32,
}

impl Default for AimState {
    fn default() -> Self {
        Self {
            pointer: ANCHOR,
            anchor: ANCHOR,
            barrel_angle: INITIAL_BARREL_ANGLE,
        }
    }
}

impl AimState {
    /// Velocity the bullet would leave the barrel with if released now
    #[inline]
    pub fn launch_velocity(&self) -> Vec2 {
        (self.pointer - self.anchor) / LAUNCH_DIVISOR
    }

    /// Point the barrel at the stored pointer position
    pub fn point_barrel(&mut self) {
        self.barrel_angle = crate::sprite_heading(self.pointer - self.anchor);
    }
}

/// The bullet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Sprite rotation in degrees (follows velocity, no physical effect)
    pub rotation: f32,
    pub radius: f32,
}

impl Default for Projectile {
    fn default() -> Self {
        Self {
            pos: SPAWN,
            vel: Vec2::ZERO,
            rotation: INITIAL_BARREL_ANGLE,
            radius: BALL_RADIUS,
        }
    }
}

impl Projectile {
    /// One Euler step: gravity is per tick, not per second
    pub fn integrate(&mut self, gravity: Vec2) {
        self.vel += gravity;
        self.pos += self.vel;
        self.rotation = crate::sprite_heading(self.vel);
    }

    /// Park the bullet back at the cannon
    pub fn reset(&mut self) {
        self.pos = SPAWN;
    }

    pub fn bounds(&self) -> Rect {
        Rect::around_circle(self.pos, self.radius)
    }
}

/// Result of a gravity key press, for the indicator bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GravityIndicator {
    /// Bar length in px
    pub magnitude: f32,
    /// Vertical scale for the arrow sprite
    pub arrow_scale: f32,
    /// The last adjustment hit the zero floor (bar drawn red)
    pub clamped: bool,
}

/// Downward acceleration applied to the bullet each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gravity {
    y: f32,
    clamped: bool,
}

impl Default for Gravity {
    fn default() -> Self {
        Self::new(INITIAL_GRAVITY)
    }
}

impl Gravity {
    pub fn new(y: f32) -> Self {
        Self {
            y: y.max(0.0),
            clamped: false,
        }
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(0.0, self.y)
    }

    /// Add `delta`; anything that would go negative lands on exactly zero
    pub fn adjust(&mut self, delta: f32) -> GravityIndicator {
        self.y += delta;
        self.clamped = self.y < 0.0;
        if self.clamped {
            self.y = 0.0;
        }
        self.indicator()
    }

    pub fn indicator(&self) -> GravityIndicator {
        let magnitude = self.y * GRAVITY_BAR_SCALE + GRAVITY_BAR_OFFSET;
        GravityIndicator {
            magnitude,
            arrow_scale: magnitude / GRAVITY_ARROW_BASE,
            clamped: self.clamped,
        }
    }
}

/// Which way the target sprite faces
///
/// The sheet is drawn walking left; walking right mirrors it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Forward,
    Mirrored,
}

/// The walking gumba
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub pos: Vec2,
    pub vel: Vec2,
    pub facing: Facing,
    pub size: Vec2,
}

impl Default for Target {
    fn default() -> Self {
        Self {
            pos: TARGET_START,
            vel: Vec2::new(TARGET_SPEED, 0.0),
            facing: Facing::Mirrored,
            size: TARGET_SIZE,
        }
    }
}

impl Target {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Walk one tick, turning around past either edge
    ///
    /// The turn happens after the edge is crossed, so the target can sit up to
    /// one step outside `[left, right]` before heading back.
    /// Returns true when the facing changed.
    pub fn walk(&mut self, left: f32, right: f32, speed: f32) -> bool {
        let before = self.facing;
        if self.pos.x < left {
            self.vel.x = speed;
            self.facing = Facing::Mirrored;
        }
        if self.pos.x > right {
            self.vel.x = -speed;
            self.facing = Facing::Forward;
        }
        self.pos += self.vel;
        before != self.facing
    }
}

/// Shot tally, never reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCounters {
    pub hits: u32,
    pub misses: u32,
}

impl ScoreCounters {
    pub fn record(&mut self, outcome: ShotOutcome) {
        if outcome.is_hit() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: ShotPhase,
    pub aim: AimState,
    pub projectile: Projectile,
    pub gravity: Gravity,
    pub target: Target,
    pub animation: SpriteAnimation,
    pub score: ScoreCounters,
    /// Static obstacle between cannon and target
    pub wall: Rect,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Simulated seconds (sum of tick durations)
    pub sim_time: f32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(INITIAL_GRAVITY)
    }
}

impl GameState {
    /// Fresh game with the cannon idle and the given starting gravity
    pub fn new(gravity: f32) -> Self {
        Self {
            phase: ShotPhase::Idle,
            aim: AimState::default(),
            projectile: Projectile::default(),
            gravity: Gravity::new(gravity),
            target: Target::default(),
            animation: SpriteAnimation::default(),
            score: ScoreCounters::default(),
            wall: Rect::new(WALL_POS, WALL_SIZE),
            time_ticks: 0,
            sim_time: 0.0,
        }
    }

    #[inline]
    pub fn is_aiming(&self) -> bool {
        self.phase == ShotPhase::Aiming
    }

    #[inline]
    pub fn is_flying(&self) -> bool {
        self.phase == ShotPhase::Flying
    }

    /// Finish the current shot: park the bullet, score it, go idle
    pub(crate) fn resolve_shot(&mut self, outcome: ShotOutcome) {
        self.projectile.reset();
        self.score.record(outcome);
        self.phase = ShotPhase::Idle;
        log::debug!(
            "Shot resolved: {:?} (hits {}, misses {})",
            outcome,
            self.score.hits,
            self.score.misses
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_clamps_to_zero() {
        let mut g = Gravity::new(0.01);
        let ind = g.adjust(-0.5);
        assert_eq!(g.y(), 0.0);
        assert!(ind.clamped);
        assert_eq!(ind.magnitude, GRAVITY_BAR_OFFSET);

        // A later positive press starts from zero, the discarded remainder is gone
        let ind = g.adjust(0.005);
        assert!((g.y() - 0.005).abs() < 1e-6);
        assert!(!ind.clamped);
    }

    #[test]
    fn test_gravity_indicator_initial_bar() {
        let g = Gravity::default();
        let ind = g.indicator();
        assert!((ind.magnitude - 60.0).abs() < 1e-4);
        assert!((ind.arrow_scale - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_target_turns_at_right_edge() {
        let mut t = Target {
            pos: Vec2::new(741.0, 545.0),
            ..Default::default()
        };
        let turned = t.walk(TARGET_LEFT_EDGE, TARGET_RIGHT_EDGE, TARGET_SPEED);
        assert!(turned);
        assert_eq!(t.vel.x, -TARGET_SPEED);
        assert_eq!(t.facing, Facing::Forward);
        assert!((t.pos.x - 740.4).abs() < 1e-3);
    }

    #[test]
    fn test_target_overshoots_before_turning() {
        let mut t = Target {
            pos: Vec2::new(739.9, 545.0),
            ..Default::default()
        };
        assert!(!t.walk(TARGET_LEFT_EDGE, TARGET_RIGHT_EDGE, TARGET_SPEED));
        // Soft clamp: now past the edge, still walking right
        assert!(t.pos.x > TARGET_RIGHT_EDGE);
        assert!(t.walk(TARGET_LEFT_EDGE, TARGET_RIGHT_EDGE, TARGET_SPEED));
    }

    #[test]
    fn test_projectile_integrate() {
        let mut p = Projectile {
            vel: Vec2::new(0.0, -1.0),
            ..Default::default()
        };
        p.integrate(Vec2::new(0.0, 0.1));
        assert!((p.vel.y - -0.9).abs() < 1e-6);
        assert!((p.pos.y - 549.1).abs() < 1e-3);
        assert!(p.rotation.abs() < 1e-3);
    }

    #[test]
    fn test_score_record() {
        let mut s = ScoreCounters::default();
        s.record(ShotOutcome::TargetHit);
        s.record(ShotOutcome::WallHit);
        s.record(ShotOutcome::OutOfBounds);
        assert_eq!(s, ScoreCounters { hits: 1, misses: 2 });
    }
}
