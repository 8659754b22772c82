//! Aim guide: where the bullet would go if released now
//!
//! Runs the same per-tick Euler step as the live bullet, on copies, and yields a
//! sparse set of samples. Nothing in [`GameState`](super::GameState) is touched.

use glam::Vec2;

use crate::consts::{PREVIEW_SAMPLE_EVERY, PREVIEW_STEPS};

/// One ghost bullet along the predicted path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewPoint {
    /// Integration step this sample was taken at
    pub step: u32,
    pub pos: Vec2,
    /// Sprite rotation in degrees
    pub rotation: f32,
    /// Fades with distance along the path
    pub alpha: u8,
}

/// Lazy forward simulation; clone it to restart from the beginning
#[derive(Debug, Clone)]
pub struct TrajectoryPreview {
    pos: Vec2,
    vel: Vec2,
    gravity: Vec2,
    step: u32,
    steps: u32,
    every: u32,
}

impl TrajectoryPreview {
    pub fn new(start: Vec2, launch_vel: Vec2, gravity: Vec2) -> Self {
        Self::with_sampling(start, launch_vel, gravity, PREVIEW_STEPS, PREVIEW_SAMPLE_EVERY)
    }

    pub fn with_sampling(start: Vec2, launch_vel: Vec2, gravity: Vec2, steps: u32, every: u32) -> Self {
        Self {
            pos: start,
            vel: launch_vel,
            gravity,
            step: 0,
            steps,
            every: every.max(1),
        }
    }

    /// A preview that yields nothing (used when not aiming)
    pub fn empty() -> Self {
        Self::with_sampling(Vec2::ZERO, Vec2::ZERO, Vec2::ZERO, 0, 1)
    }
}

impl Iterator for TrajectoryPreview {
    type Item = PreviewPoint;

    fn next(&mut self) -> Option<PreviewPoint> {
        while self.step < self.steps {
            let i = self.step;
            self.step += 1;
            self.vel += self.gravity;
            self.pos += self.vel;
            if i % self.every == 0 {
                return Some(PreviewPoint {
                    step: i,
                    pos: self.pos,
                    rotation: crate::sprite_heading(self.vel),
                    alpha: 255u32.saturating_sub(i).min(255) as u8,
                });
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps.saturating_sub(self.step);
        // Samples at multiples of `every` in [step, steps)
        let first = self.step.div_ceil(self.every) * self.every;
        let n = if first >= self.steps {
            0
        } else {
            ((self.steps - 1 - first) / self.every + 1).min(remaining)
        };
        (n as usize, Some(n as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count_and_fade() {
        let points: Vec<_> =
            TrajectoryPreview::new(Vec2::new(100.0, 550.0), Vec2::new(2.0, -3.0), Vec2::new(0.0, 0.05))
                .collect();
        // Steps 0, 20, ..., 240
        assert_eq!(points.len(), 13);
        assert_eq!(points[0].step, 0);
        assert_eq!(points[0].alpha, 255);
        assert_eq!(points[12].step, 240);
        assert_eq!(points[12].alpha, 15);
        assert!(points.windows(2).all(|w| w[0].alpha > w[1].alpha));
    }

    #[test]
    fn test_first_sample_is_one_step_out() {
        let mut preview =
            TrajectoryPreview::new(Vec2::new(100.0, 550.0), Vec2::new(0.0, -1.0), Vec2::new(0.0, 0.1));
        let p = preview.next().unwrap();
        assert!((p.pos - Vec2::new(100.0, 549.1)).length() < 1e-3);
    }

    #[test]
    fn test_restartable() {
        let preview =
            TrajectoryPreview::new(Vec2::new(100.0, 550.0), Vec2::new(3.0, -4.0), Vec2::new(0.0, 0.05));
        let a: Vec<_> = preview.clone().collect();
        let b: Vec<_> = preview.collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_size_hint_matches() {
        let preview = TrajectoryPreview::new(Vec2::ZERO, Vec2::ONE, Vec2::ZERO);
        assert_eq!(preview.size_hint(), (13, Some(13)));
        assert_eq!(preview.count(), 13);
        assert_eq!(TrajectoryPreview::empty().count(), 0);
    }
}
