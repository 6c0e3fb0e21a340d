use crate::handler::{handle, handle_request};
use crate::messages::RendererRequest;
use crate::scene::build_standard_scene;
use gloo_utils::format::JsValueSerdeExt;
use photonsphere_core::SimulationConfig;
use wasm_bindgen::prelude::*;

/// Install the panic hook and console logger. Call once before anything else.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
}

/// Serve a JSON-encoded [`RendererRequest`], returning a JSON-encoded response.
#[wasm_bindgen]
pub fn process_request(message_json: String) -> Result<String, JsValue> {
    Ok(handle_request(&message_json))
}

/// Serve a request given as a plain JS object.
#[wasm_bindgen]
pub fn process_request_value(request: JsValue) -> Result<JsValue, JsValue> {
    let request: RendererRequest = request
        .into_serde()
        .map_err(|e| JsValue::from_str(&format!("Parse error: {}", e)))?;
    JsValue::from_serde(&handle(request))
        .map_err(|e| JsValue::from_str(&format!("Serialize error: {}", e)))
}

/// Build the standard scene from a (possibly partial) configuration object.
#[wasm_bindgen]
pub fn compute_scene(config: JsValue) -> Result<JsValue, JsValue> {
    let config: SimulationConfig = if config.is_undefined() || config.is_null() {
        SimulationConfig::default()
    } else {
        config
            .into_serde()
            .map_err(|e| JsValue::from_str(&format!("Parse config: {}", e)))?
    };

    let scene = build_standard_scene(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;

    JsValue::from_serde(&scene).map_err(|e| JsValue::from_str(&format!("Serialize error: {}", e)))
}
