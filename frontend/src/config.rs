use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Reveal timings are only logged locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Fraction of an element that must be on screen before it counts as having
/// entered the viewport.
pub fn viewport_threshold() -> f64 {
    0.1
}
