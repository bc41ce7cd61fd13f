// Browser-side helpers shared by the components.
use wasm_bindgen::JsValue;

use crate::state::PaperState;

/// Debug console logging; compiled out of release builds.
pub fn clog(msg: &str) {
    if cfg!(debug_assertions) {
        web_sys::console::debug_1(&JsValue::from_str(msg));
    }
}

pub fn cwarn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

/// Random initial tilt in [-15, 15) degrees.
pub fn random_tilt() -> f64 {
    PaperState::tilt_from_unit(js_sys::Math::random())
}
