// extensions/easing.rs
//
// Pure easing curves for camera transitions.
// No dependencies on the scene; just math.

use std::f32::consts::PI;
use glam::Vec3;
use serde::Deserialize;

/// Easing curve. Deserializes from its name, e.g. `"quadOut"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// Slow start.
    QuadIn,
    /// Slow end.
    #[default]
    QuadOut,
    /// Slow start and end.
    QuadInOut,
    /// Stronger slow end.
    CubicOut,
    SineInOut,
}

impl Easing {
    /// Apply the curve to `t`, clamped to [0, 1]. Every curve maps 0 to 0 and 1 to 1.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}

#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Interpolate with easing.
#[inline]
pub fn ease_vec3(a: Vec3, b: Vec3, t: f32, easing: Easing) -> Vec3 {
    lerp_vec3(a, b, easing.apply(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for easing in [
            Easing::Linear,
            Easing::QuadIn,
            Easing::QuadOut,
            Easing::QuadInOut,
            Easing::CubicOut,
        ] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
        }
        assert!(Easing::SineInOut.apply(0.0).abs() < 1e-6);
        assert!((Easing::SineInOut.apply(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn quad_out_faster_start() {
        let mid = Easing::QuadOut.apply(0.5);
        assert!((mid - 0.75).abs() < 1e-6, "QuadOut at 0.5 should be 0.75, got {}", mid);
    }

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(Easing::QuadOut.apply(1.7), 1.0);
        assert_eq!(Easing::QuadOut.apply(-0.2), 0.0);
    }

    #[test]
    fn parses_from_name() {
        let e: Easing = serde_json::from_str("\"quadOut\"").unwrap();
        assert_eq!(e, Easing::QuadOut);
    }

    #[test]
    fn ease_interpolates() {
        let v = ease_vec3(Vec3::ZERO, Vec3::new(100.0, 0.0, -50.0), 0.5, Easing::Linear);
        assert!((v - Vec3::new(50.0, 0.0, -25.0)).length() < 1e-4);
    }
}
