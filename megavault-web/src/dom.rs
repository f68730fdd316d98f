use chrono::NaiveDate;
use log::Level;
use web_sys::{Document, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

#[must_use]
pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Current viewport width in CSS pixels.
#[must_use]
pub fn inner_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Current vertical scroll offset.
#[must_use]
pub fn scroll_y() -> Option<f64> {
    web_sys::window()?.scroll_y().ok()
}

/// Today's date in the visitor's local time zone.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    i32::try_from(now.get_full_year())
        .ok()
        .and_then(|year| NaiveDate::from_ymd_opt(year, now.get_month() + 1, now.get_date()))
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn today() -> NaiveDate {
    NaiveDate::default()
}

/// Write a line to the browser console using the method for `level`.
#[cfg(target_arch = "wasm32")]
pub fn console(level: Level, message: &str) {
    let value = wasm_bindgen::JsValue::from(message);
    match crate::logging::console_method(level) {
        "error" => web_sys::console::error_1(&value),
        "warn" => web_sys::console::warn_1(&value),
        "info" => web_sys::console::info_1(&value),
        _ => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn console(level: Level, message: &str) {
    eprintln!("{} {message}", crate::logging::console_method(level));
}
