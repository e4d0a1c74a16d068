use wasm_bindgen::JsValue;
use web_sys::{Storage, Window};

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No browser window available".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|e| js_message(&e))?
        .ok_or_else(|| "localStorage is not available".to_string())
}

pub fn location_search() -> String {
    window()
        .and_then(|w| w.location().search().map_err(|e| js_message(&e)))
        .unwrap_or_default()
}

/// Blocking text prompt. `None` when dismissed or unavailable.
pub fn prompt(message: &str) -> Option<String> {
    window()
        .ok()
        .and_then(|w| w.prompt_with_message(message).ok().flatten())
}

/// Blocking confirmation. Anything but an explicit OK counts as declined.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

pub fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
