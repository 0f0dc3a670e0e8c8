// systems/picking.rs
//
// Resolve a pointer ray to the nearest focusable body. Only body surfaces
// and ring adornments are tested; a ring hit resolves to its owner.

use glam::Vec3;

use crate::api::types::{BodyId, NodeId};
use crate::core::builder::SolarScene;
use crate::core::scene::NodeKind;

/// Hits closer than this to the ray origin are ignored.
const MIN_DISTANCE: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.try_normalize().unwrap_or(Vec3::NEG_Z),
        }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Distance along the ray to the first sphere crossing in front of the origin.
pub fn intersect_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let (t1, t2) = (-b - sq, -b + sq);
    if t1 > MIN_DISTANCE {
        Some(t1)
    } else if t2 > MIN_DISTANCE {
        Some(t2)
    } else {
        None
    }
}

/// Distance along the ray to a flat annulus, hit from either side.
pub fn intersect_ring(ray: &Ray, center: Vec3, normal: Vec3, inner: f32, outer: f32) -> Option<f32> {
    let denom = ray.direction.dot(normal);
    if denom.abs() < 1e-6 {
        return None;
    }
    let t = (center - ray.origin).dot(normal) / denom;
    if t < MIN_DISTANCE {
        return None;
    }
    let dist = ray.at(t).distance(center);
    (inner..=outer).contains(&dist).then_some(t)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// The focusable body, already resolved from any adornment.
    pub body: BodyId,
    /// The node actually struck.
    pub node: NodeId,
    pub distance: f32,
}

/// Nearest pickable node along `ray`.
pub fn pick(scene: &SolarScene, ray: &Ray) -> Option<PickHit> {
    let graph = scene.graph();
    let matrices = graph.propagate();
    let mut best: Option<PickHit> = None;

    for (node, kind) in graph.iter() {
        if !kind.is_pickable() {
            continue;
        }
        let Some(body) = kind.owner() else { continue };
        let world = matrices[node.index()];
        let center = world.transform_point3(Vec3::ZERO);

        let t = match kind {
            NodeKind::Body(_) => scene
                .radius(body)
                .and_then(|r| intersect_sphere(ray, center, r)),
            NodeKind::Rings(_) => scene.ring_bounds(body).and_then(|(inner, outer)| {
                let normal = world.transform_vector3(Vec3::Z).try_normalize()?;
                intersect_ring(ray, center, normal, inner, outer)
            }),
            _ => None,
        };

        if let Some(distance) = t {
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(PickHit { body, node, distance });
            }
        }
    }
    best
}
