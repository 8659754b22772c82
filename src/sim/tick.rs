//! Fixed timestep simulation tick
//!
//! One call to [`tick`] is one 1/60 s step. Gravity and velocities are in
//! pixels per tick, so `dt` only feeds the elapsed-time counter.

use super::anim::TextureRect;
use super::collision::{ball_rect_overlap, out_of_bounds};
use super::state::{GameState, GravityIndicator, ShotOutcome};
use crate::consts::*;

/// Buffered one-shot input applied at the start of the next tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Net gravity change from key presses since the last tick, one entry per press
    pub gravity_adjustments: Vec<f32>,
}

/// What changed during a tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Set when the bullet's flight ended this tick
    pub shot: Option<ShotOutcome>,
    /// New target sprite cell, only when the frame index changed
    pub frame_changed: Option<TextureRect>,
    /// Target turned around
    pub facing_changed: bool,
    /// Indicator after the last gravity adjustment applied this tick
    pub gravity: Option<GravityIndicator>,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickReport {
    state.time_ticks += 1;
    state.sim_time += dt;

    let mut report = TickReport::default();

    for &delta in &input.gravity_adjustments {
        report.gravity = Some(adjust_gravity(state, delta));
    }

    report.shot = tick_projectile(state);
    report.facing_changed = tick_target(state);
    report.frame_changed = tick_animation(state);

    report
}

/// Move the bullet and resolve its flight
///
/// Out of bounds is checked before the target, and the target before the
/// wall; the first that fires ends the shot.
pub fn tick_projectile(state: &mut GameState) -> Option<ShotOutcome> {
    if !state.is_flying() {
        return None;
    }

    state.projectile.integrate(state.gravity.as_vec2());

    let pos = state.projectile.pos;
    let radius = state.projectile.radius;

    let outcome = if out_of_bounds(pos, WORLD_WIDTH, WORLD_HEIGHT) {
        ShotOutcome::OutOfBounds
    } else if ball_rect_overlap(pos, radius, &state.target.bounds()) {
        ShotOutcome::TargetHit
    } else if ball_rect_overlap(pos, radius, &state.wall) {
        ShotOutcome::WallHit
    } else {
        return None;
    };

    state.resolve_shot(outcome);
    Some(outcome)
}

/// Walk the target; true when it turned around
pub fn tick_target(state: &mut GameState) -> bool {
    state
        .target
        .walk(TARGET_LEFT_EDGE, TARGET_RIGHT_EDGE, TARGET_SPEED)
}

/// Step the target's sprite animation
pub fn tick_animation(state: &mut GameState) -> Option<TextureRect> {
    state.animation.advance()
}

/// Apply a gravity key press
pub fn adjust_gravity(state: &mut GameState, delta: f32) -> GravityIndicator {
    let indicator = state.gravity.adjust(delta);
    if indicator.clamped {
        log::debug!("Gravity clamped at zero");
    } else {
        log::debug!("Gravity now {:.3}", state.gravity.y());
    }
    indicator
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Facing, Gravity, ShotPhase};
    use glam::Vec2;

    fn flying(pos: Vec2, vel: Vec2, gravity: f32) -> GameState {
        let mut state = GameState::new(gravity);
        state.phase = ShotPhase::Flying;
        state.projectile.pos = pos;
        state.projectile.vel = vel;
        state
    }

    #[test]
    fn test_launch_and_first_tick() {
        let mut state = GameState::new(0.1);
        state.start_aim(Vec2::new(100.0, 500.0));
        state.release_aim(Vec2::new(100.0, 500.0));
        assert_eq!(state.projectile.vel, Vec2::new(0.0, -1.0));

        let report = tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(report.shot, None);
        assert!((state.projectile.vel - Vec2::new(0.0, -0.9)).length() < 1e-5);
        assert!((state.projectile.pos - Vec2::new(100.0, 549.1)).length() < 1e-3);
        assert!(state.is_flying());
    }

    #[test]
    fn test_out_of_bounds_right() {
        let mut state = flying(Vec2::new(810.0, 300.0), Vec2::ZERO, 0.05);
        let outcome = tick_projectile(&mut state);
        assert_eq!(outcome, Some(ShotOutcome::OutOfBounds));
        assert_eq!(state.score.misses, 1);
        assert_eq!(state.score.hits, 0);
        assert_eq!(state.projectile.pos, SPAWN);
        assert!(!state.is_flying());
    }

    #[test]
    fn test_target_hit_skips_wall() {
        // Put the wall on top of the target so both would overlap
        let mut state = flying(Vec2::new(440.0, 560.0), Vec2::ZERO, 0.0);
        state.wall = state.target.bounds();
        assert_eq!(state.target.bounds().min, Vec2::new(420.0, 545.0));
        assert_eq!(state.target.bounds().max(), Vec2::new(475.0, 600.0));

        let outcome = tick_projectile(&mut state);
        assert_eq!(outcome, Some(ShotOutcome::TargetHit));
        assert_eq!(state.score.hits, 1);
        assert_eq!(state.score.misses, 0);
        assert!(!state.is_flying());
    }

    #[test]
    fn test_out_of_bounds_beats_target() {
        // Below the floor but still overlapping the target box
        let mut state = flying(Vec2::new(440.0, 605.0), Vec2::ZERO, 0.0);
        assert_eq!(tick_projectile(&mut state), Some(ShotOutcome::OutOfBounds));
        assert_eq!(state.score.hits, 0);
        assert_eq!(state.score.misses, 1);
    }

    #[test]
    fn test_wall_hit() {
        let mut state = flying(Vec2::new(390.0, 550.0), Vec2::new(5.0, 0.0), 0.0);
        assert_eq!(tick_projectile(&mut state), Some(ShotOutcome::WallHit));
        assert_eq!(state.score.misses, 1);
        assert_eq!(state.projectile.pos, SPAWN);
    }

    #[test]
    fn test_idle_projectile_does_not_move() {
        let mut state = GameState::default();
        let report = tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(report.shot, None);
        assert_eq!(state.projectile.pos, SPAWN);
        assert_eq!(state.time_ticks, 1);
        assert_eq!(state.sim_time, SIM_DT);
    }

    #[test]
    fn test_target_keeps_walking_while_idle() {
        let mut state = GameState::default();
        let x0 = state.target.pos.x;
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert!((state.target.pos.x - (x0 + 6.0)).abs() < 1e-3);
    }

    #[test]
    fn test_target_turn_reported() {
        let mut state = GameState::default();
        state.target.pos.x = 741.0;
        let report = tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(report.facing_changed);
        assert_eq!(state.target.vel.x, -TARGET_SPEED);
        assert_eq!(state.target.facing, Facing::Forward);
    }

    #[test]
    fn test_gravity_input_applied_before_flight() {
        let mut state = flying(Vec2::new(200.0, 300.0), Vec2::ZERO, 0.05);
        let input = TickInput {
            gravity_adjustments: vec![GRAVITY_STEP, GRAVITY_STEP],
        };
        let report = tick(&mut state, &input, SIM_DT);
        assert!((state.gravity.y() - 0.06).abs() < 1e-6);
        assert!((state.projectile.vel.y - 0.06).abs() < 1e-6);
        let ind = report.gravity.unwrap();
        assert!((ind.magnitude - 65.0).abs() < 1e-3);
    }

    #[test]
    fn test_full_flight_resolves() {
        let mut state = GameState::new(Gravity::default().y());
        state.start_aim(Vec2::new(250.0, 350.0));
        state.release_aim(Vec2::new(250.0, 350.0));
        let mut outcome = None;
        for _ in 0..1000 {
            let report = tick(&mut state, &TickInput::default(), SIM_DT);
            if report.shot.is_some() {
                outcome = report.shot;
                break;
            }
        }
        assert!(outcome.is_some());
        assert!(!state.is_flying());
        assert_eq!(state.score.hits + state.score.misses, 1);
    }
}
