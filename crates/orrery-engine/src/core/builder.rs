// core/builder.rs
//
// Assembles the scene hierarchy from the catalog in two passes:
// create every body, then wire satellites into their parents.
//
//   root
//   ├── star ── [glow]
//   └── orbit container (inclination)
//       ├── orbit trace
//       └── planet ── label, [clouds], [glow], [rings]
//           └── satellite container (rotates)
//               └── moon ── label, ...

use std::f32::consts::FRAC_PI_2;
use glam::{Mat4, Quat, Vec3};

use crate::api::config::OrreryConfig;
use crate::api::types::{BodyId, NodeId};
use crate::assets::{TextureHandle, TextureSet, TextureSlot};
use crate::catalog::{BodyRole, Catalog, CelestialBodyDefinition};
use crate::core::orbit::{plane_to_world, OrbitPath};
use crate::core::scene::{LocalTransform, NodeKind, SceneGraph};
use crate::core::simulation::{initial_progress, BodyState, Simulation};
use crate::error::{ConfigError, ConfigResult};
use crate::renderer::material::BodyMaterial;

/// Cloud shell radius relative to the body.
pub const CLOUD_SCALE: f32 = 1.01;
/// Glow sprite size relative to the radius when the catalog gives none.
pub const DEFAULT_ATMOSPHERE_SCALE: f32 = 2.5;
/// Ring annulus bounds relative to the radius.
pub const RING_INNER: f32 = 1.2;
pub const RING_OUTER: f32 = 2.0;
/// Label anchor offset relative to the radius, along +X and +Y.
pub const LABEL_OFFSET: f32 = 1.5;

/// Scene nodes created for one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyNodes {
    pub body: NodeId,
    /// Orbit container for planets, satellite container for moons.
    pub container: Option<NodeId>,
    pub trace: Option<NodeId>,
    pub label: Option<NodeId>,
    pub clouds: Option<NodeId>,
    pub atmosphere: Option<NodeId>,
    pub rings: Option<NodeId>,
}

impl BodyNodes {
    fn new(body: NodeId) -> Self {
        Self {
            body,
            container: None,
            trace: None,
            label: None,
            clouds: None,
            atmosphere: None,
            rings: None,
        }
    }
}

/// Pre-sampled orbit path, in the orbit container's space.
#[derive(Debug, Clone)]
pub struct OrbitTrace {
    pub body: BodyId,
    pub node: NodeId,
    pub points: Vec<Vec3>,
}

/// A built scene: hierarchy, motion state and render data for every body.
#[derive(Debug)]
pub struct SolarScene {
    catalog: Catalog,
    graph: SceneGraph,
    simulation: Simulation,
    nodes: Vec<BodyNodes>,
    traces: Vec<OrbitTrace>,
    materials: Vec<BodyMaterial>,
    star: BodyId,
    starfield: Option<TextureHandle>,
    glow: Option<TextureHandle>,
}

/// Validate the catalog and build the scene. Any configuration error aborts the build.
pub fn build_scene(
    catalog: &Catalog,
    textures: &TextureSet,
    config: &OrreryConfig,
) -> ConfigResult<SolarScene> {
    let mut roles = Vec::with_capacity(catalog.len());
    let mut star: Option<(BodyId, &str)> = None;
    for (body, id, def) in catalog.iter() {
        let role = def.role(id)?;
        if matches!(role, BodyRole::Star) {
            if let Some((_, first)) = star {
                return Err(ConfigError::MultipleStars {
                    first: first.to_string(),
                    second: id.to_string(),
                });
            }
            star = Some((body, id));
        }
        roles.push(role);
    }
    let (star, _) = star.ok_or(ConfigError::NoStar)?;

    let mut graph = SceneGraph::new();
    let root = graph.root();
    let mut nodes = Vec::with_capacity(catalog.len());
    let mut states = Vec::with_capacity(catalog.len());
    let mut traces = Vec::new();
    let mut materials = Vec::with_capacity(catalog.len());

    // Pass 1: every body, satellites parked under the root
    for ((body, _, def), role) in catalog.iter().zip(&roles) {
        let progress = initial_progress(config.seed, body);
        let spin = (def.rotation_speed, def.axial_tilt_rad());

        let (state, mut body_nodes) = match *role {
            BodyRole::Star => {
                let state = BodyState::fixed(body).with_spin(spin.0, spin.1);
                let node = graph.add(root, NodeKind::Body(body), body_local(&state));
                (state, BodyNodes::new(node))
            }
            BodyRole::Planet { orbital_radius, eccentricity, orbital_period, inclination_deg } => {
                let path = OrbitPath::new(orbital_radius, eccentricity);
                let container = graph.add(
                    root,
                    NodeKind::OrbitContainer(body),
                    LocalTransform::new().with_rotation(Quat::from_rotation_x(inclination_deg.to_radians())),
                );
                let trace = graph.add(container, NodeKind::OrbitTrace(body), LocalTransform::new());
                traces.push(OrbitTrace {
                    body,
                    node: trace,
                    points: path
                        .sample(config.trace_divisions)
                        .into_iter()
                        .map(plane_to_world)
                        .collect(),
                });

                let state = BodyState::orbiting(body, path, orbital_period, progress).with_spin(spin.0, spin.1);
                let node = graph.add(container, NodeKind::Body(body), body_local(&state));
                let mut body_nodes = BodyNodes::new(node);
                body_nodes.container = Some(container);
                body_nodes.trace = Some(trace);
                (state, body_nodes)
            }
            BodyRole::Satellite { orbital_radius, orbital_period, .. } => {
                let state = BodyState::satellite(body, orbital_radius, orbital_period, progress)
                    .with_spin(spin.0, spin.1);
                let node = graph.add(root, NodeKind::Body(body), body_local(&state));
                (state, BodyNodes::new(node))
            }
        };

        add_adornments(&mut graph, &mut body_nodes, body, def, textures);
        nodes.push(body_nodes);
        states.push(state);
        materials.push(BodyMaterial::resolve(body, def, textures));
    }

    // Pass 2: move satellites into a rotating container under their parent
    for ((body, id, _), role) in catalog.iter().zip(&roles) {
        let BodyRole::Satellite { parent, .. } = *role else { continue };
        let parent_body = catalog.find(parent).ok_or_else(|| ConfigError::DanglingParent {
            body: id.to_string(),
            parent: parent.to_string(),
        })?;
        match roles[parent_body.index()] {
            BodyRole::Star => {
                return Err(ConfigError::ParentIsStar {
                    body: id.to_string(),
                    parent: parent.to_string(),
                })
            }
            BodyRole::Satellite { .. } => {
                return Err(ConfigError::NestedSatellite {
                    body: id.to_string(),
                    parent: parent.to_string(),
                })
            }
            BodyRole::Planet { .. } => {}
        }

        let angle = states[body.index()].container_angle().unwrap_or(0.0);
        let container = graph.add(
            nodes[parent_body.index()].body,
            NodeKind::SatelliteContainer(body),
            LocalTransform::new().with_rotation(Quat::from_rotation_y(angle)),
        );
        graph.set_parent(nodes[body.index()].body, container);
        nodes[body.index()].container = Some(container);
    }

    log::info!(
        "Scene built: {} bodies, {} nodes, {} texture failures",
        catalog.len(),
        graph.len(),
        textures.failures().len()
    );

    Ok(SolarScene {
        catalog: catalog.clone(),
        graph,
        simulation: Simulation::new(states),
        nodes,
        traces,
        materials,
        star,
        starfield: textures.starfield(),
        glow: textures.glow(),
    })
}

/// Body node transform: container-space position, then tilt, then spin.
fn body_local(state: &BodyState) -> LocalTransform {
    LocalTransform::new()
        .with_translation(state.position())
        .with_rotation(Quat::from_rotation_x(state.axial_tilt) * Quat::from_rotation_y(state.self_rotation))
}

/// Label, clouds, glow and rings. Cosmetic children only exist when their texture loaded.
fn add_adornments(
    graph: &mut SceneGraph,
    nodes: &mut BodyNodes,
    body: BodyId,
    def: &CelestialBodyDefinition,
    textures: &TextureSet,
) {
    let r = def.radius;

    if !def.is_light {
        nodes.label = Some(graph.add(
            nodes.body,
            NodeKind::Label(body),
            LocalTransform::new().with_translation(Vec3::new(r * LABEL_OFFSET, r * LABEL_OFFSET, 0.0)),
        ));

        if textures.body(body, TextureSlot::Clouds).is_some() {
            nodes.clouds = Some(graph.add(
                nodes.body,
                NodeKind::Clouds(body),
                LocalTransform::new().with_uniform_scale(CLOUD_SCALE),
            ));
        }
    }

    if def.atmosphere_color.is_some() && textures.glow().is_some() {
        let scale = match def.atmosphere_scale {
            Some(scale) if def.is_light => scale,
            _ => DEFAULT_ATMOSPHERE_SCALE,
        };
        let size = r * scale;
        nodes.atmosphere = Some(graph.add(
            nodes.body,
            NodeKind::Atmosphere(body),
            LocalTransform::new().with_scale(Vec3::new(size, size, 1.0)),
        ));
    }

    if def.has_rings && textures.body(body, TextureSlot::Rings).is_some() {
        nodes.rings = Some(graph.add(
            nodes.body,
            NodeKind::Rings(body),
            LocalTransform::new().with_rotation(Quat::from_rotation_x(FRAC_PI_2)),
        ));
    }
}

impl SolarScene {
    /// One simulation step, then copy motion state into the hierarchy.
    pub fn tick(&mut self) {
        self.simulation.tick();
        self.sync();
    }

    fn sync(&mut self) {
        for state in self.simulation.bodies() {
            let nodes = self.nodes[state.id.index()];
            self.graph.set_local(nodes.body, body_local(state));

            if let (Some(angle), Some(container)) = (state.container_angle(), nodes.container) {
                if let Some(local) = self.graph.get_local_mut(container) {
                    local.rotation = Quat::from_rotation_y(angle);
                }
            }
            if let Some(clouds) = nodes.clouds {
                if let Some(local) = self.graph.get_local_mut(clouds) {
                    local.rotation = Quat::from_rotation_y(state.cloud_rotation);
                }
            }
        }
    }

    /// World-space center of a body, composed through its container chain.
    pub fn world_position(&self, body: BodyId) -> Option<Vec3> {
        self.nodes
            .get(body.index())
            .map(|n| self.graph.world_position(n.body))
    }

    /// World matrix of every node, indexed by `NodeId`.
    pub fn world_matrices(&self) -> Vec<Mat4> {
        self.graph.propagate()
    }

    /// Inner and outer ring radii, if the body has rings.
    pub fn ring_bounds(&self, body: BodyId) -> Option<(f32, f32)> {
        self.nodes.get(body.index())?.rings?;
        let r = self.radius(body)?;
        Some((r * RING_INNER, r * RING_OUTER))
    }

    pub fn radius(&self, body: BodyId) -> Option<f32> {
        self.catalog.get(body).map(|d| d.radius)
    }

    pub fn nodes(&self, body: BodyId) -> Option<&BodyNodes> {
        self.nodes.get(body.index())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.simulation
    }

    pub fn traces(&self) -> &[OrbitTrace] {
        &self.traces
    }

    pub fn material(&self, body: BodyId) -> Option<&BodyMaterial> {
        self.materials.get(body.index())
    }

    pub fn star(&self) -> BodyId {
        self.star
    }

    pub fn starfield(&self) -> Option<TextureHandle> {
        self.starfield
    }

    /// Sprite shared by every atmosphere node.
    pub fn glow(&self) -> Option<TextureHandle> {
        self.glow
    }

    /// All bodies in catalog order.
    pub fn bodies(&self) -> impl Iterator<Item = BodyId> + '_ {
        (0..self.nodes.len() as u32).map(BodyId)
    }
}
