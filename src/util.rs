// Browser helpers shared by the components.

/// Milliseconds on the same clock as animation-frame timestamps.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

pub fn pct(value: f64) -> String {
    format!("{:.2}%", value)
}
