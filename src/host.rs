//! Fixed timestep frame pump
//!
//! Input can arrive at any time, the simulation advances in whole 1/60 s steps,
//! and a frame can be drawn whenever the platform likes from the latest state.

use crate::consts::{MAX_FRAME_TIME, SIM_DT};
use crate::renderer::{DrawList, build_scene};
use crate::settings::{DisplayMode, Settings};
use crate::sim::{GameState, InputEvent, KeyAction, TickInput, TickReport, tick};

/// Game instance holding all state
#[derive(Debug)]
pub struct Host {
    state: GameState,
    settings: Settings,
    display_mode: DisplayMode,
    accumulator: f32,
    /// One-shot input waiting for the next fixed step
    input: TickInput,
    exit_requested: bool,
}

impl Host {
    pub fn new(settings: Settings) -> Self {
        Self {
            state: GameState::new(settings.initial_gravity),
            display_mode: settings.display_mode,
            settings,
            accumulator: 0.0,
            input: TickInput::default(),
            exit_requested: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// The player asked to quit; the platform should close the window
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Feed one platform event
    pub fn push_event(&mut self, event: InputEvent) {
        let Some(action) = self.state.handle_event(event) else {
            return;
        };
        match action {
            KeyAction::IncreaseGravity => self.input.gravity_adjustments.push(self.settings.gravity_step),
            KeyAction::DecreaseGravity => self.input.gravity_adjustments.push(-self.settings.gravity_step),
            KeyAction::ToggleDisplayMode => {
                self.display_mode = self.display_mode.toggled();
                log::info!("Display mode: {}", self.display_mode.as_str());
            }
            KeyAction::Exit => {
                log::info!("Exit requested");
                self.exit_requested = true;
            }
        }
    }

    /// Account for `dt` seconds of real time and run the fixed steps it covers
    ///
    /// Returns the reports of the steps that ran, oldest first.
    pub fn update(&mut self, dt: f32) -> Vec<TickReport> {
        // A NaN would poison the accumulator and stall the sim for good
        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_FRAME_TIME) } else { 0.0 };
        self.accumulator += dt;

        let mut reports = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < self.settings.max_substeps {
            let input = std::mem::take(&mut self.input);
            let report = tick(&mut self.state, &input, SIM_DT);
            if let Some(outcome) = report.shot {
                log::info!(
                    "{:?} - hits {}, misses {}",
                    outcome,
                    self.state.score.hits,
                    self.state.score.misses
                );
            }
            reports.push(report);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        if substeps == self.settings.max_substeps && self.accumulator >= SIM_DT {
            log::debug!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator %= SIM_DT;
        }

        reports
    }

    /// Draw list for the latest state
    pub fn frame(&self) -> DrawList {
        build_scene(&self.state, self.display_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_steps_follow_accumulated_time() {
        let mut host = Host::new(Settings::default());
        assert!(host.update(SIM_DT * 0.5).is_empty());
        assert_eq!(host.update(SIM_DT * 0.6).len(), 1);
        assert_eq!(host.update(SIM_DT * 3.0).len(), 3);
        assert_eq!(host.state().time_ticks, 4);
    }

    #[test]
    fn test_substep_cap() {
        let settings = Settings {
            max_substeps: 4,
            ..Default::default()
        };
        let mut host = Host::new(settings);
        let reports = host.update(1.0);
        assert_eq!(reports.len(), 4);
        // Backlog is dropped rather than carried into the next frame
        assert!(host.update(0.0).is_empty());
    }

    #[test]
    fn test_gravity_keys_wait_for_step() {
        let mut host = Host::new(Settings::default());
        let g0 = host.state().gravity.y();
        host.push_event(InputEvent::Key(KeyAction::IncreaseGravity));
        assert_eq!(host.state().gravity.y(), g0);
        host.update(SIM_DT * 1.5);
        assert!((host.state().gravity.y() - (g0 + 0.005)).abs() < 1e-6);
        // Consumed, not reapplied
        host.update(SIM_DT);
        assert!((host.state().gravity.y() - (g0 + 0.005)).abs() < 1e-6);
    }

    #[test]
    fn test_non_finite_frame_time_ignored() {
        let mut host = Host::new(Settings::default());
        assert!(host.update(f32::NAN).is_empty());
        assert!(host.update(f32::INFINITY).is_empty());
        let steps: usize = (0..60).map(|_| host.update(SIM_DT).len()).sum();
        assert!(steps > 0);
        assert_eq!(host.state().time_ticks, steps as u64);
    }

    #[test]
    fn test_toggle_and_exit() {
        let mut host = Host::new(Settings::default());
        assert_eq!(host.display_mode(), DisplayMode::Sprites);
        host.push_event(InputEvent::Key(KeyAction::ToggleDisplayMode));
        assert_eq!(host.display_mode(), DisplayMode::Shapes);
        assert!(!host.exit_requested());
        host.push_event(InputEvent::Key(KeyAction::Exit));
        assert!(host.exit_requested());
    }

    #[test]
    fn test_pointer_events_apply_immediately() {
        let mut host = Host::new(Settings::default());
        host.push_event(InputEvent::PointerDown(Vec2::new(150.0, 500.0)));
        assert!(host.state().is_aiming());
        host.push_event(InputEvent::PointerUp(Vec2::new(150.0, 500.0)));
        assert!(host.state().is_flying());
    }
}
