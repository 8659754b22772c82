//! Pointer and keyboard input for the simulation
//!
//! Pointer events drive the aim cycle directly. Key actions that are not the
//! simulation's business (display mode, quitting) are handed back to the host.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameState, ShotPhase};
use super::trajectory::TrajectoryPreview;

/// Discrete keyboard actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyAction {
    /// Switch between plain shapes and sprites
    ToggleDisplayMode,
    IncreaseGravity,
    DecreaseGravity,
    Exit,
}

/// One input event from the platform's event pump
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerDown(Vec2),
    PointerMove(Vec2),
    PointerUp(Vec2),
    Key(KeyAction),
}

impl GameState {
    /// Pointer pressed: begin aiming if the cannon is idle
    pub fn start_aim(&mut self, pointer: Vec2) {
        if self.phase != ShotPhase::Idle {
            return;
        }
        self.phase = ShotPhase::Aiming;
        self.aim.pointer = pointer;
        self.aim.point_barrel();
    }

    /// Pointer dragged: follow it with the barrel while aiming
    pub fn update_aim(&mut self, pointer: Vec2) {
        if !self.is_aiming() {
            return;
        }
        self.aim.pointer = pointer;
        self.aim.point_barrel();
    }

    /// Pointer released: fire with a velocity proportional to the drag
    pub fn release_aim(&mut self, pointer: Vec2) {
        if !self.is_aiming() {
            return;
        }
        self.aim.pointer = pointer;
        self.projectile.vel = self.aim.launch_velocity();
        self.phase = ShotPhase::Flying;
        log::debug!(
            "Fired from {:?} with velocity {:?}",
            self.projectile.pos,
            self.projectile.vel
        );
    }

    /// Aim endpoints (pointer, anchor) while aiming
    pub fn aim_line(&self) -> Option<(Vec2, Vec2)> {
        self.is_aiming().then_some((self.aim.pointer, self.aim.anchor))
    }

    /// Predicted path for the current aim; empty unless aiming
    pub fn trajectory_preview(&self) -> TrajectoryPreview {
        if !self.is_aiming() {
            return TrajectoryPreview::empty();
        }
        TrajectoryPreview::new(
            self.projectile.pos,
            self.aim.launch_velocity(),
            self.gravity.as_vec2(),
        )
    }

    /// Route an event to its handler
    ///
    /// Pointer events are applied immediately. Key actions are returned untouched
    /// so the host can decide when (and whether) to apply them.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<KeyAction> {
        match event {
            InputEvent::PointerDown(p) => self.start_aim(p),
            InputEvent::PointerMove(p) => self.update_aim(p),
            InputEvent::PointerUp(p) => self.release_aim(p),
            InputEvent::Key(action) => return Some(action),
        }
        None
    }
}
