// extensions/tween.rs
//
// Tween records: an eased move from one point to another over a fixed duration.
// Advanced explicitly by the owner each frame; no global registry.
//
// Usage:
//   let mut tween = Tween::new(from, to, 1.0, Easing::QuadOut);
//   tween.advance(dt);
//   camera.position = tween.value();

use glam::Vec3;
use super::easing::{ease_vec3, Easing};

/// A single eased interpolation of a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: Vec3,
    pub to: Vec3,
    /// Duration in seconds.
    pub duration: f32,
    /// Seconds elapsed since start.
    pub elapsed: f32,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: Vec3, to: Vec3, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            easing,
        }
    }

    /// Add `dt` seconds. Elapsed time never exceeds the duration.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration.max(0.0));
    }

    /// Normalized progress [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Current interpolated point. Exactly `to` once complete.
    pub fn value(&self) -> Vec3 {
        if self.is_complete() {
            self.to
        } else {
            ease_vec3(self.from, self.to, self.progress(), self.easing)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tween_position() {
        let mut tween = Tween::new(Vec3::ZERO, Vec3::new(100.0, 0.0, 0.0), 1.0, Easing::Linear);

        tween.advance(0.5);
        assert!((tween.value().x - 50.0).abs() < 0.01);
        assert!(!tween.is_complete());

        tween.advance(0.5);
        assert!(tween.is_complete());
        assert_eq!(tween.value(), Vec3::new(100.0, 0.0, 0.0));
    }

    #[test]
    fn overshooting_dt_clamps() {
        let mut tween = Tween::new(Vec3::ONE, Vec3::splat(3.0), 1.0, Easing::QuadOut);
        tween.advance(5.0);
        assert_eq!(tween.elapsed, 1.0);
        assert_eq!(tween.value(), Vec3::splat(3.0));
    }

    #[test]
    fn zero_duration_is_immediately_complete() {
        let tween = Tween::new(Vec3::ZERO, Vec3::X, 0.0, Easing::Linear);
        assert!(tween.is_complete());
        assert_eq!(tween.value(), Vec3::X);
    }

    #[test]
    fn quad_out_leads_linear() {
        let mut tween = Tween::new(Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0), 1.0, Easing::QuadOut);
        tween.advance(0.5);
        assert!((tween.value().y - 7.5).abs() < 1e-4);
    }
}
