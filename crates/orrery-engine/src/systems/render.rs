use crate::core::builder::SolarScene;
use crate::core::scene::NodeKind;
use crate::renderer::instance::{NodeInstance, RenderBuffer};
use crate::systems::labels::LabelVisibility;

/// Base opacity of each drawable kind. Containers and the root draw nothing.
fn base_opacity(kind: NodeKind, is_star: bool) -> Option<f32> {
    match kind {
        NodeKind::Body(_) => Some(1.0),
        NodeKind::OrbitTrace(_) => Some(0.3),
        NodeKind::Clouds(_) => Some(0.7),
        NodeKind::Atmosphere(_) => Some(if is_star { 0.8 } else { 0.6 }),
        NodeKind::Rings(_) => Some(0.8),
        NodeKind::Label(_) => Some(1.0),
        NodeKind::Root | NodeKind::OrbitContainer(_) | NodeKind::SatelliteContainer(_) => None,
    }
}

/// Rebuild the buffer from the scene. World matrices are composed fresh.
pub fn build_render_buffer(scene: &SolarScene, labels: &LabelVisibility, buffer: &mut RenderBuffer) {
    buffer.clear();
    let graph = scene.graph();
    let matrices = graph.propagate();

    for (node, kind) in graph.iter() {
        let Some(body) = kind.owner() else { continue };
        let Some(mut opacity) = base_opacity(kind, body == scene.star()) else { continue };
        if let NodeKind::Label(_) = kind {
            opacity = labels.opacity(body).unwrap_or(0.0);
        }

        buffer.push(NodeInstance {
            world: matrices[node.index()].to_cols_array_2d(),
            kind: kind.code() as f32,
            body: body.0 as f32,
            opacity,
            radius: scene.radius(body).unwrap_or(0.0),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Mat4, Vec3};
    use crate::api::config::OrreryConfig;
    use crate::assets::TextureSet;
    use crate::catalog::builtin::solar_system;
    use crate::core::builder::build_scene;

    #[test]
    fn containers_are_skipped_and_labels_fade() {
        let catalog = solar_system();
        let scene = build_scene(&catalog, &TextureSet::empty(), &OrreryConfig::default()).unwrap();
        let earth = catalog.find("earth").unwrap();
        let mut labels = LabelVisibility::new();
        labels.update(&scene, scene.world_position(earth).unwrap() + Vec3::Z);

        let mut buffer = RenderBuffer::new();
        build_render_buffer(&scene, &labels, &mut buffer);

        let containers = scene
            .graph()
            .iter()
            .filter(|(_, k)| base_opacity(*k, false).is_none())
            .count();
        assert_eq!(buffer.instances.len(), scene.graph().len() - containers);

        let earth_label = buffer
            .instances
            .iter()
            .find(|i| i.kind == NodeKind::Label(earth).code() as f32 && i.body == earth.0 as f32)
            .unwrap();
        assert_eq!(earth_label.opacity, 0.0);
    }

    #[test]
    fn body_matrix_matches_world_position() {
        let catalog = solar_system();
        let scene = build_scene(&catalog, &TextureSet::empty(), &OrreryConfig::default()).unwrap();
        let mars = catalog.find("mars").unwrap();
        let mut buffer = RenderBuffer::new();
        build_render_buffer(&scene, &LabelVisibility::new(), &mut buffer);

        let inst = buffer
            .instances
            .iter()
            .find(|i| i.kind == NodeKind::Body(mars).code() as f32 && i.body == mars.0 as f32)
            .unwrap();
        let pos = Mat4::from_cols_array_2d(&inst.world).transform_point3(Vec3::ZERO);
        assert!((pos - scene.world_position(mars).unwrap()).length() < 1e-3);
        assert_eq!(inst.radius, 0.53);
    }
}
