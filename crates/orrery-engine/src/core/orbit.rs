/// Parametric orbit paths. Pure math, no scene dependencies.
///
/// An orbit is an ellipse in its own 2D plane with the star at one focus.
/// The plane maps onto world X/Z; inclination is applied by the enclosing
/// container node, never here.

use std::f32::consts::TAU;
use glam::{Vec2, Vec3};

/// Closed elliptical path around the origin.
///
/// Semi-major axis `a`, focal offset `c = a·e`, semi-minor axis `b = sqrt(a² − c²)`.
/// The ellipse is centered at `(−c, 0)` so the origin sits on a focus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPath {
    semi_major: f32,
    semi_minor: f32,
    focal_offset: f32,
}

impl OrbitPath {
    /// Build a path from orbital radius and eccentricity in [0, 1).
    pub fn new(orbital_radius: f32, eccentricity: f32) -> Self {
        let a = orbital_radius;
        let c = a * eccentricity;
        let b = (a * a - c * c).sqrt();
        Self {
            semi_major: a,
            semi_minor: b,
            focal_offset: c,
        }
    }

    pub fn semi_major(&self) -> f32 {
        self.semi_major
    }

    pub fn semi_minor(&self) -> f32 {
        self.semi_minor
    }

    pub fn focal_offset(&self) -> f32 {
        self.focal_offset
    }

    /// Point on the path for progress `t` in [0, 1).
    /// `θ = t·2π`, `x = a·cos θ − c`, `y = b·sin θ`.
    #[inline]
    pub fn point_at(&self, t: f32) -> Vec2 {
        let theta = t * TAU;
        Vec2::new(
            self.semi_major * theta.cos() - self.focal_offset,
            self.semi_minor * theta.sin(),
        )
    }

    /// Evenly spaced samples for drawing the trace.
    /// Returns `divisions + 1` points; the last one closes the loop.
    pub fn sample(&self, divisions: usize) -> Vec<Vec2> {
        let divisions = divisions.max(1);
        (0..=divisions)
            .map(|i| self.point_at(i as f32 / divisions as f32))
            .collect()
    }
}

/// Lift a point from the orbital plane onto the world's horizontal axes.
#[inline]
pub fn plane_to_world(point: Vec2) -> Vec3 {
    Vec3::new(point.x, 0.0, point.y)
}
