use std::f32::consts::TAU;
use glam::Vec3;

use crate::api::types::BodyId;
use crate::core::orbit::{plane_to_world, OrbitPath};

/// How a body advances each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Does not move (the star).
    Fixed,
    /// Follows its own path around the star.
    Orbiting { path: OrbitPath, period: f32 },
    /// Carried around its parent by a rotating container.
    Satellite { period: f32, container_angle: f32 },
}

/// Mutable per-body simulation state.
#[derive(Debug, Clone)]
pub struct BodyState {
    pub id: BodyId,
    /// Position along the orbit path in [0, 1).
    pub orbit_progress: f32,
    /// Accumulated spin in radians. Never wrapped.
    pub self_rotation: f32,
    /// Cloud shell spin relative to the body, in radians.
    pub cloud_rotation: f32,
    /// Fixed tilt of the spin axis in radians.
    pub axial_tilt: f32,
    rotation_speed: Option<f32>,
    motion: Motion,
    /// Position inside the parent container.
    position: Vec3,
}

impl BodyState {
    /// State for the star.
    pub fn fixed(id: BodyId) -> Self {
        Self {
            id,
            orbit_progress: 0.0,
            self_rotation: 0.0,
            cloud_rotation: 0.0,
            axial_tilt: 0.0,
            rotation_speed: None,
            motion: Motion::Fixed,
            position: Vec3::ZERO,
        }
    }

    /// State for a planet starting at `progress` along `path`.
    pub fn orbiting(id: BodyId, path: OrbitPath, period: f32, progress: f32) -> Self {
        let orbit_progress = progress.rem_euclid(1.0);
        Self {
            orbit_progress,
            motion: Motion::Orbiting { path, period },
            position: plane_to_world(path.point_at(orbit_progress)),
            ..Self::fixed(id)
        }
    }

    /// State for a satellite held `orbital_radius` from its parent.
    /// The container starts rotated by `progress · 2π`.
    pub fn satellite(id: BodyId, orbital_radius: f32, period: f32, progress: f32) -> Self {
        let orbit_progress = progress.rem_euclid(1.0);
        Self {
            orbit_progress,
            motion: Motion::Satellite {
                period,
                container_angle: orbit_progress * TAU,
            },
            position: Vec3::new(orbital_radius, 0.0, 0.0),
            ..Self::fixed(id)
        }
    }

    pub fn with_spin(mut self, rotation_speed: Option<f32>, axial_tilt: f32) -> Self {
        self.rotation_speed = rotation_speed;
        self.axial_tilt = axial_tilt;
        self
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    pub fn rotation_speed(&self) -> Option<f32> {
        self.rotation_speed
    }

    /// Position inside the parent container (orbit plane for planets,
    /// fixed radial offset for satellites).
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Satellite container rotation in radians, if this body is a satellite.
    pub fn container_angle(&self) -> Option<f32> {
        match self.motion {
            Motion::Satellite { container_angle, .. } => Some(container_angle),
            _ => None,
        }
    }

    /// Advance one logical step. Progress and position update together.
    fn advance(&mut self) {
        if let Some(speed) = self.rotation_speed {
            self.self_rotation += speed;
            self.cloud_rotation += speed * 0.5;
        }

        match &mut self.motion {
            Motion::Fixed => {}
            Motion::Orbiting { path, period } => {
                let progress = (self.orbit_progress + *period).rem_euclid(1.0);
                // rem_euclid rounds tiny negative sums up to exactly 1.0
                self.orbit_progress = if progress >= 1.0 { 0.0 } else { progress };
                self.position = plane_to_world(path.point_at(self.orbit_progress));
            }
            Motion::Satellite { period, container_angle } => {
                *container_angle += *period;
            }
        }
    }
}

/// Owns every body's motion state and the global pause flag.
#[derive(Debug, Default)]
pub struct Simulation {
    bodies: Vec<BodyState>,
    paused: bool,
    ticks: u64,
}

impl Simulation {
    /// States must be ordered by `BodyId`.
    pub fn new(bodies: Vec<BodyState>) -> Self {
        debug_assert!(bodies.iter().enumerate().all(|(i, b)| b.id.index() == i));
        Self {
            bodies,
            paused: false,
            ticks: 0,
        }
    }

    /// Advance every body by one step unless paused.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }
        for body in &mut self.bodies {
            body.advance();
        }
        self.ticks += 1;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Flip the pause flag. Returns the new state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Number of unpaused ticks so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn body(&self, id: BodyId) -> Option<&BodyState> {
        self.bodies.get(id.index())
    }

    pub fn bodies(&self) -> &[BodyState] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

/// Deterministic starting progress in [0, 1) for a body.
pub fn initial_progress(seed: u32, body: BodyId) -> f32 {
    let mut n = seed ^ body.0.wrapping_mul(0x9e37_79b9);
    n = n.wrapping_mul(2654435761);
    n ^= n >> 16;
    n = n.wrapping_mul(2246822519);
    n ^= n >> 13;
    // 24 bits keeps the result strictly below 1.0 in f32
    (n >> 8) as f32 / (1u32 << 24) as f32
}
