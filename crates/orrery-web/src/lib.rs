pub mod runner;

pub use runner::OrreryRunner;

use std::cell::RefCell;

use orrery_engine::{solar_system, BodyId, Catalog, ConfigError, InputEvent, OrreryConfig};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<OrreryRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut OrreryRunner) -> R) -> Result<R, JsValue> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .ok_or_else(|| JsValue::from_str("orrery not initialized; call orrery_init() first"))?;
        Ok(f(runner))
    })
}

fn config_error(err: ConfigError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn push(event: InputEvent) -> Result<(), JsValue> {
    with_runner(|r| r.push_input(event))
}

/// Create the runner. `catalog_json` replaces the built-in solar system;
/// `config_json` overrides defaults field by field. Returns the texture
/// paths the host must load and report back.
#[wasm_bindgen]
pub fn orrery_init(catalog_json: Option<String>, config_json: Option<String>) -> Result<js_sys::Array, JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("orrery: logger already initialized"));
    }

    let config = match config_json {
        Some(json) => OrreryConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => OrreryConfig::default(),
    };
    let catalog = match catalog_json {
        Some(json) => Catalog::from_json(&json).map_err(config_error)?,
        None => solar_system(),
    };

    let runner = OrreryRunner::new(catalog, config);
    let paths: js_sys::Array = runner.texture_paths().into_iter().map(JsValue::from).collect();
    log::info!("orrery: initialized, {} textures requested", paths.length());

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    Ok(paths)
}

/// Report a loaded texture. Returns true once the scene is built.
#[wasm_bindgen]
pub fn orrery_texture_loaded(path: &str, handle: u32) -> Result<bool, JsValue> {
    with_runner(|r| r.texture_loaded(path, handle))?.map_err(config_error)
}

/// Report a failed texture. Returns true once the scene is built.
#[wasm_bindgen]
pub fn orrery_texture_failed(path: &str, reason: &str) -> Result<bool, JsValue> {
    with_runner(|r| r.texture_failed(path, reason))?.map_err(config_error)
}

#[wasm_bindgen]
pub fn orrery_is_ready() -> bool {
    with_runner(|r| r.is_ready()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn orrery_tick(dt: f32) -> Result<(), JsValue> {
    with_runner(|r| r.tick(dt))
}

// ---- Input ----

#[wasm_bindgen]
pub fn orrery_click(x: f32, y: f32) -> Result<(), JsValue> {
    push(InputEvent::Click { x, y })
}

#[wasm_bindgen]
pub fn orrery_drag(dx: f32, dy: f32) -> Result<(), JsValue> {
    push(InputEvent::Drag { dx, dy })
}

#[wasm_bindgen]
pub fn orrery_zoom(delta: f32) -> Result<(), JsValue> {
    push(InputEvent::Zoom { delta })
}

#[wasm_bindgen]
pub fn orrery_label_click(body: u32) -> Result<(), JsValue> {
    push(InputEvent::LabelClick { body: BodyId(body) })
}

#[wasm_bindgen]
pub fn orrery_close_panel() -> Result<(), JsValue> {
    push(InputEvent::ClosePanel)
}

#[wasm_bindgen]
pub fn orrery_toggle_pause() -> Result<(), JsValue> {
    push(InputEvent::TogglePause)
}

#[wasm_bindgen]
pub fn orrery_resize(width: f32, height: f32) -> Result<(), JsValue> {
    push(InputEvent::Resize { width, height })
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> Result<*const f32, JsValue> {
    with_runner(|r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_instance_floats() -> u32 {
    with_runner(|r| r.instance_floats()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_camera_ptr() -> Result<*const f32, JsValue> {
    with_runner(|r| r.camera_ptr())
}

#[wasm_bindgen]
pub fn get_focus_light() -> bool {
    with_runner(|r| r.focus_light()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn get_is_paused() -> bool {
    with_runner(|r| r.is_paused()).unwrap_or(false)
}

/// Index of the focused body, or -1.
#[wasm_bindgen]
pub fn get_focused_body() -> i32 {
    with_runner(|r| r.focused_body())
        .ok()
        .flatten()
        .map_or(-1, |b| b.0 as i32)
}

/// JSON array of UI events since the last call.
#[wasm_bindgen]
pub fn take_ui_events() -> Result<String, JsValue> {
    with_runner(|r| r.take_ui_events_json())
}

/// Materials, traces and scene textures as JSON. Errors until the scene is built.
#[wasm_bindgen]
pub fn get_scene_json() -> Result<String, JsValue> {
    with_runner(|r| r.scene_json())?.ok_or_else(|| JsValue::from_str("scene not built yet"))
}
