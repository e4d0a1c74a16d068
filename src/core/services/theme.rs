use super::browser::{js_message, local_storage, window};
use crate::core::models::Theme;

const DARK_MODE_CLASS: &str = "dark-mode";

// Read the stored theme preference, defaulting to light
pub fn load_theme(storage_key: &str) -> Theme {
    match local_storage().and_then(|s| s.get_item(storage_key).map_err(|e| js_message(&e))) {
        Ok(stored) => Theme::from_stored(stored.as_deref()),
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to read theme preference: {}", e).into());
            Theme::Light
        }
    }
}

pub fn save_theme(storage_key: &str, theme: Theme) {
    let result = local_storage()
        .and_then(|s| s.set_item(storage_key, theme.as_str()).map_err(|e| js_message(&e)));
    if let Err(e) = result {
        web_sys::console::error_1(&format!("Failed to save theme preference: {}", e).into());
    }
}

// Toggle the dark-mode class on <body>
pub fn apply_theme(theme: Theme) {
    let body = window().ok().and_then(|w| w.document()).and_then(|d| d.body());
    match body {
        Some(body) => {
            if let Err(e) = body
                .class_list()
                .toggle_with_force(DARK_MODE_CLASS, theme.is_dark())
            {
                web_sys::console::error_1(&format!("Failed to apply theme: {}", js_message(&e)).into());
            }
        }
        None => web_sys::console::error_1(&"No document body to apply theme to".into()),
    }
}
