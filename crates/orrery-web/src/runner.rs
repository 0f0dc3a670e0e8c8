use orrery_engine::{
    BodyId, CameraUniform, Catalog, ConfigResult, FixedTimestep, InputEvent, InputQueue, NodeInstance,
    Orrery, OrreryConfig, PendingTextures, RenderBuffer, TextureHandle, TextureManifest, UiEvent,
};
use orrery_engine::error::AssetError;
use serde_json::json;

/// Drives the orrery from the browser's frame callback.
///
/// Lives in a `thread_local!` in `lib.rs`; the JS host loads the textures it
/// is asked for, reports each outcome, then calls `tick` every frame.
/// The scene is built once every texture has an outcome.
pub struct OrreryRunner {
    config: OrreryConfig,
    catalog: Catalog,
    pending: PendingTextures,
    orrery: Option<Orrery>,
    input: InputQueue,
    render_buffer: RenderBuffer,
    camera: CameraUniform,
    timestep: FixedTimestep,
    ui_events: Vec<UiEvent>,
}

impl OrreryRunner {
    pub fn new(catalog: Catalog, config: OrreryConfig) -> Self {
        let manifest = TextureManifest::from_catalog(&catalog, &config.texture_path);
        let timestep = FixedTimestep::new(config.fixed_dt).with_max_steps(config.max_steps_per_frame);

        Self {
            render_buffer: RenderBuffer::with_capacity(catalog.len() * 8),
            pending: PendingTextures::new(manifest),
            orrery: None,
            input: InputQueue::new(),
            camera: CameraUniform::default(),
            ui_events: Vec::new(),
            timestep,
            catalog,
            config,
        }
    }

    /// Distinct texture paths the host must load, in request order.
    pub fn texture_paths(&self) -> Vec<String> {
        self.pending.manifest().paths().into_iter().map(String::from).collect()
    }

    /// Record a loaded texture, then build if that was the last outstanding load.
    pub fn texture_loaded(&mut self, path: &str, handle: u32) -> ConfigResult<bool> {
        if let Err(err) = self.pending.record_loaded(path, TextureHandle(handle)) {
            log::warn!("{err}");
        }
        self.try_build()
    }

    /// Record a failed texture. The scene is built without it.
    pub fn texture_failed(&mut self, path: &str, reason: &str) -> ConfigResult<bool> {
        if let Err(err @ AssetError::Unrequested(_)) = self.pending.record_failed(path, reason) {
            log::warn!("{err}");
        }
        self.try_build()
    }

    /// Build the scene once every texture has an outcome. Returns whether
    /// the scene is ready. A malformed catalog is reported every time.
    pub fn try_build(&mut self) -> ConfigResult<bool> {
        if self.orrery.is_some() {
            return Ok(true);
        }
        let Some(textures) = self.pending.finish() else {
            return Ok(false);
        };

        let orrery = Orrery::from_catalog(&self.catalog, &textures, &self.config)?;
        log::info!(
            "orrery: scene built with {} bodies ({} textures loaded, {} failed)",
            self.catalog.len(),
            textures.len(),
            textures.failures().len(),
        );
        self.orrery = Some(orrery);
        Ok(true)
    }

    pub fn is_ready(&self) -> bool {
        self.orrery.is_some()
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one display frame: fixed steps, then frame output.
    /// Queued input is consumed by the first step; later steps see none.
    pub fn tick(&mut self, dt: f32) {
        let Some(orrery) = self.orrery.as_mut() else { return };

        let steps = self.timestep.accumulate(dt);
        if steps > 0 {
            let input = std::mem::take(&mut self.input);
            let idle = InputQueue::new();
            for step in 0..steps {
                orrery.update(self.timestep.dt(), if step == 0 { &input } else { &idle });
            }
        }

        self.ui_events.extend(orrery.drain_ui_events());
        orrery.build_render_buffer(&mut self.render_buffer);
        self.camera = orrery.camera_uniform();
    }

    /// UI notifications since the last call, as a JSON array.
    pub fn take_ui_events_json(&mut self) -> String {
        let events = std::mem::take(&mut self.ui_events);
        serde_json::to_string(&events).unwrap_or_else(|err| {
            log::warn!("ui events not serializable: {err}");
            "[]".to_string()
        })
    }

    /// Static render data: per-body materials, orbit traces and scene-level
    /// textures. Read once after the scene is built.
    pub fn scene_json(&self) -> Option<String> {
        let scene = self.orrery.as_ref()?.scene();
        let bodies: Vec<_> = scene
            .bodies()
            .map(|body| {
                json!({
                    "index": body.0,
                    "id": scene.catalog().id(body),
                    "radius": scene.radius(body),
                    "material": scene.material(body),
                })
            })
            .collect();
        let traces: Vec<_> = scene
            .traces()
            .iter()
            .map(|trace| {
                json!({
                    "body": trace.body,
                    "node": trace.node.0,
                    "points": trace.points.iter().map(|p| p.to_array()).collect::<Vec<_>>(),
                })
            })
            .collect();

        Some(
            json!({
                "star": scene.star(),
                "starfield": scene.starfield(),
                "glow": scene.glow(),
                "bodies": bodies,
                "traces": traces,
            })
            .to_string(),
        )
    }

    // ---- Pointer accessors for direct memory reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn instance_floats(&self) -> u32 {
        NodeInstance::FLOATS as u32
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera as *const CameraUniform as *const f32
    }

    pub fn focus_light(&self) -> bool {
        self.orrery.as_ref().is_some_and(Orrery::focus_light)
    }

    pub fn is_paused(&self) -> bool {
        self.orrery.as_ref().is_some_and(Orrery::is_paused)
    }

    pub fn focused_body(&self) -> Option<BodyId> {
        self.orrery.as_ref().and_then(|o| o.focus().focused())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::solar_system;

    const DT: f32 = 1.0 / 60.0;

    fn fail_all(runner: &mut OrreryRunner) -> ConfigResult<bool> {
        let mut ready = false;
        for path in runner.texture_paths() {
            ready = runner.texture_failed(&path, "404")?;
        }
        Ok(ready)
    }

    #[test]
    fn builds_only_after_every_texture_settles() {
        let mut runner = OrreryRunner::new(solar_system(), OrreryConfig::default());
        let paths = runner.texture_paths();
        assert!(paths.len() > 1);

        assert!(!runner.texture_loaded(&paths[0], 7).unwrap());
        assert!(!runner.is_ready());
        for path in &paths[1..] {
            runner.texture_failed(path, "404").unwrap();
        }
        assert!(runner.is_ready());

        let scene = runner.scene_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&scene).unwrap();
        assert_eq!(value["bodies"].as_array().unwrap().len(), 10);
    }

    #[test]
    fn tick_before_ready_is_a_noop() {
        let mut runner = OrreryRunner::new(solar_system(), OrreryConfig::default());
        runner.tick(DT);
        assert_eq!(runner.instance_count(), 0);
        assert!(runner.scene_json().is_none());
    }

    #[test]
    fn tick_fills_frame_output() {
        let mut runner = OrreryRunner::new(solar_system(), OrreryConfig::default());
        assert!(fail_all(&mut runner).unwrap());
        runner.tick(DT);

        assert!(runner.instance_count() > 0);
        assert!(!runner.camera_ptr().is_null());
        assert_eq!(runner.instance_floats(), 20);
    }

    #[test]
    fn input_reaches_the_first_step_only() {
        let mut runner = OrreryRunner::new(solar_system(), OrreryConfig::default());
        fail_all(&mut runner).unwrap();

        // Two steps in one frame; the pause toggle must not be applied twice
        runner.push_input(InputEvent::TogglePause);
        runner.tick(DT * 2.5);
        assert!(runner.is_paused());

        let json = runner.take_ui_events_json();
        assert_eq!(json, r#"[{"type":"pauseIndicator","isPaused":true}]"#);
        assert_eq!(runner.take_ui_events_json(), "[]");
    }

    #[test]
    fn input_waits_for_a_step() {
        let mut runner = OrreryRunner::new(solar_system(), OrreryConfig::default());
        fail_all(&mut runner).unwrap();

        runner.push_input(InputEvent::ClosePanel);
        runner.push_input(InputEvent::TogglePause);
        runner.tick(DT * 0.25);
        assert!(!runner.is_paused());
        runner.tick(DT);
        assert!(runner.is_paused());
    }

    #[test]
    fn malformed_catalog_fails_the_build() {
        let catalog = Catalog::from_json(r#"{ "rock": { "title": "Rock", "radius": 1.0, "orbitalRadius": 5.0, "orbitalPeriod": 0.01 } }"#).unwrap();
        let mut runner = OrreryRunner::new(catalog, OrreryConfig::default());
        assert!(!runner.try_build().unwrap());
        assert!(fail_all(&mut runner).is_err());
        assert!(!runner.is_ready());
        assert!(runner.try_build().is_err());
    }
}
