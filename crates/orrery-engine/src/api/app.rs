// api/app.rs
//
// The application context: scene, camera, focus and UI flags in one struct,
// advanced by one `update` call per logical step.
//
// Usage:
//   let mut orrery = Orrery::from_catalog(&solar_system(), &textures, &config)?;
//   orrery.update(config.fixed_dt, &input);
//   for event in orrery.drain_ui_events() { /* update panels */ }

use glam::Vec2;

use crate::api::config::OrreryConfig;
use crate::api::types::{BodyId, UiEvent};
use crate::assets::TextureSet;
use crate::camera::{CameraPose, CameraUniform, FocusController, OrbitControls, PerspectiveCamera};
use crate::catalog::Catalog;
use crate::core::builder::{build_scene, SolarScene};
use crate::error::ConfigResult;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::instance::RenderBuffer;
use crate::systems::labels::LabelVisibility;
use crate::systems::picking::pick;
use crate::systems::render::build_render_buffer;

pub struct Orrery {
    scene: SolarScene,
    pose: CameraPose,
    camera: PerspectiveCamera,
    controls: OrbitControls,
    focus: FocusController,
    labels: LabelVisibility,
    panel_open: bool,
    ui_events: Vec<UiEvent>,
}

impl Orrery {
    pub fn new(scene: SolarScene, config: &OrreryConfig) -> Self {
        let pose = CameraPose::new(config.camera.position(), config.camera.target());
        let mut labels = LabelVisibility::new();
        labels.update(&scene, pose.position);

        Self {
            scene,
            pose,
            camera: PerspectiveCamera::from_config(&config.camera),
            controls: OrbitControls::from_config(&config.camera),
            focus: FocusController::from_config(&config.focus),
            labels,
            panel_open: false,
            ui_events: Vec::new(),
        }
    }

    /// Build the scene and wrap it. Fails on a malformed catalog.
    pub fn from_catalog(catalog: &Catalog, textures: &TextureSet, config: &OrreryConfig) -> ConfigResult<Self> {
        let scene = build_scene(catalog, textures, config)?;
        Ok(Self::new(scene, config))
    }

    /// One logical step: input, simulation, free camera, focus, labels.
    /// Bodies are fully updated before anything reads their positions.
    pub fn update(&mut self, dt: f32, input: &InputQueue) {
        for event in input.iter() {
            self.handle(*event);
        }

        self.scene.tick();
        self.controls.update(&mut self.pose);
        let scene = &self.scene;
        self.focus.update(dt, &mut self.pose, |body| scene.world_position(body));
        self.labels.update(&self.scene, self.pose.position);
    }

    fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Click { x, y } => {
                self.click(Vec2::new(x, y));
            }
            InputEvent::Drag { dx, dy } => self.controls.rotate(dx, dy),
            InputEvent::Zoom { delta } => self.controls.zoom(delta),
            InputEvent::LabelClick { body } => {
                self.select(body);
            }
            InputEvent::ClosePanel => {
                self.close_panel();
            }
            InputEvent::TogglePause => {
                self.toggle_pause();
            }
            InputEvent::Resize { width, height } => self.resize(width, height),
        }
    }

    /// Pick at a pointer position in normalized device coordinates.
    /// A hit selects its body; a miss closes the detail panel.
    pub fn click(&mut self, ndc: Vec2) -> Option<BodyId> {
        let ray = self.camera.ray_through(&self.pose, ndc);
        match pick(&self.scene, &ray) {
            Some(hit) => {
                self.select(hit.body);
                Some(hit.body)
            }
            None => {
                self.close_panel();
                None
            }
        }
    }

    /// Show a body's details and fly the camera to it.
    /// Returns false when the body is unknown or already focused.
    pub fn select(&mut self, body: BodyId) -> bool {
        if self.focus.focused() == Some(body) {
            return false;
        }
        let catalog = self.scene.catalog();
        let (Some(id), Some(def)) = (catalog.id(body), catalog.get(body)) else {
            return false;
        };
        let (Some(position), Some(radius)) = (self.scene.world_position(body), self.scene.radius(body)) else {
            return false;
        };

        self.ui_events.push(UiEvent::ShowDetails {
            body_id: id.to_string(),
            details: def.details.clone(),
        });
        self.panel_open = true;
        self.focus.focus(body, position, radius, &self.pose)
    }

    /// Hide the detail panel and return the camera to where it was before focusing.
    /// Returns false when the panel is not open.
    pub fn close_panel(&mut self) -> bool {
        if !self.panel_open {
            return false;
        }
        self.panel_open = false;
        self.ui_events.push(UiEvent::ClosePanel);
        self.focus.close(&self.pose);
        true
    }

    /// Flip the pause flag. Returns the new state.
    pub fn toggle_pause(&mut self) -> bool {
        let is_paused = self.scene.simulation_mut().toggle_pause();
        log::info!("simulation {}", if is_paused { "paused" } else { "resumed" });
        self.ui_events.push(UiEvent::PauseIndicator { is_paused });
        is_paused
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.resize(width, height);
    }

    /// Take the UI notifications produced since the last drain.
    pub fn drain_ui_events(&mut self) -> Vec<UiEvent> {
        std::mem::take(&mut self.ui_events)
    }

    pub fn ui_events(&self) -> &[UiEvent] {
        &self.ui_events
    }

    pub fn build_render_buffer(&self, buffer: &mut RenderBuffer) {
        build_render_buffer(&self.scene, &self.labels, buffer);
    }

    pub fn camera_uniform(&self) -> CameraUniform {
        self.camera.uniform(&self.pose)
    }

    pub fn scene(&self) -> &SolarScene {
        &self.scene
    }

    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn focus(&self) -> &FocusController {
        &self.focus
    }

    pub fn labels(&self) -> &LabelVisibility {
        &self.labels
    }

    pub fn focus_light(&self) -> bool {
        self.focus.focus_light()
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn is_paused(&self) -> bool {
        self.scene.simulation().is_paused()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::FocusPhase;
    use crate::catalog::builtin::solar_system;

    const DT: f32 = 1.0 / 60.0;

    fn orrery() -> Orrery {
        Orrery::from_catalog(&solar_system(), &TextureSet::empty(), &OrreryConfig::default()).unwrap()
    }

    fn run(orrery: &mut Orrery, steps: usize) {
        let input = InputQueue::new();
        for _ in 0..steps {
            orrery.update(DT, &input);
        }
    }

    #[test]
    fn select_flies_to_body_and_tracks_it() {
        let mut o = orrery();
        let earth = o.scene().catalog().find("earth").unwrap();

        assert!(o.select(earth));
        assert!(o.is_panel_open());
        assert!(o.focus_light());
        match &o.drain_ui_events()[..] {
            [UiEvent::ShowDetails { body_id, details }] => {
                assert_eq!(body_id, "earth");
                assert_eq!(details.title, "Earth");
            }
            other => panic!("unexpected events {other:?}"),
        }

        run(&mut o, 70);
        assert_eq!(o.focus().phase(), FocusPhase::Focused);
        let at = o.scene().world_position(earth).unwrap();
        assert!((o.pose().target - at).length() < 1e-4, "{} vs {}", o.pose().target, at);

        // Selecting the focused body again does nothing
        assert!(!o.select(earth));
        assert!(o.ui_events().is_empty());
    }

    #[test]
    fn close_before_arrival_restores_camera() {
        let mut o = orrery();
        let before = *o.pose();
        let mars = o.scene().catalog().find("mars").unwrap();

        o.select(mars);
        run(&mut o, 10);
        assert!(o.close_panel());
        assert!(!o.focus_light());
        run(&mut o, 70);

        assert_eq!(o.focus().phase(), FocusPhase::Free);
        assert_eq!(*o.pose(), before);
        assert!(!o.close_panel());
    }

    #[test]
    fn clicking_center_picks_the_sun() {
        let mut o = orrery();
        let sun = o.scene().star();
        assert_eq!(o.click(Vec2::ZERO), Some(sun));
        assert!(o.is_panel_open());
        assert_eq!(o.drain_ui_events().len(), 1);

        // Same body again: still a hit, but no new details
        assert_eq!(o.click(Vec2::ZERO), Some(sun));
        assert!(o.ui_events().is_empty());
    }

    #[test]
    fn clicking_empty_space_closes_panel() {
        let mut o = orrery();
        let sky = Vec2::new(0.0, 0.99);

        // Nothing open: a miss is a no-op
        assert_eq!(o.click(sky), None);
        assert!(o.ui_events().is_empty());

        let venus = o.scene().catalog().find("venus").unwrap();
        o.select(venus);
        o.drain_ui_events();
        assert_eq!(o.click(sky), None);
        assert_eq!(o.drain_ui_events(), vec![UiEvent::ClosePanel]);
        assert!(!o.is_panel_open());
        assert_eq!(o.focus().phase(), FocusPhase::TransitioningOut);
    }

    #[test]
    fn pause_freezes_bodies_and_notifies() {
        let mut o = orrery();
        let jupiter = o.scene().catalog().find("jupiter").unwrap();

        assert!(o.toggle_pause());
        assert_eq!(o.drain_ui_events(), vec![UiEvent::PauseIndicator { is_paused: true }]);
        let frozen = o.scene().world_position(jupiter).unwrap();
        run(&mut o, 30);
        assert_eq!(o.scene().world_position(jupiter).unwrap(), frozen);

        assert!(!o.toggle_pause());
        run(&mut o, 30);
        assert_ne!(o.scene().world_position(jupiter).unwrap(), frozen);
    }

    #[test]
    fn labels_fade_while_paused() {
        let mut o = orrery();
        let earth = o.scene().catalog().find("earth").unwrap();
        assert_eq!(o.labels().opacity(earth), Some(1.0));

        o.toggle_pause();
        o.select(earth);
        run(&mut o, 70);

        assert_eq!(o.scene().simulation().ticks(), 0);
        let faded = o.labels().opacity(earth).unwrap();
        assert!(faded < 0.5, "label still at {faded}");
    }

    #[test]
    fn queued_input_is_applied() {
        let mut o = orrery();
        let moon = o.scene().catalog().find("moon").unwrap();
        let mut input = InputQueue::new();
        input.push(InputEvent::TogglePause);
        input.push(InputEvent::Resize { width: 800.0, height: 800.0 });
        input.push(InputEvent::LabelClick { body: moon });

        o.update(DT, &input);
        assert!(o.is_paused());
        assert_eq!(o.camera().aspect, 1.0);
        assert_eq!(o.focus().focused(), Some(moon));
        assert_eq!(o.drain_ui_events().len(), 2);
    }

    #[test]
    fn zoom_and_drag_move_free_camera() {
        let mut o = orrery();
        let before = *o.pose();
        let mut input = InputQueue::new();
        input.push(InputEvent::Zoom { delta: 3.0 });
        input.push(InputEvent::Drag { dx: 0.1, dy: 0.0 });
        o.update(DT, &input);

        assert!(o.pose().distance() > before.distance());
        assert_ne!(o.pose().position, before.position);
        assert_eq!(o.pose().target, before.target);
    }
}
