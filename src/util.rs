// Small helpers shared by the surface and the web shell.

pub trait LogErr<T> {
    /// Logs the error at `error` with `what` as the message and drops it.
    fn log_err(self, what: &str) -> Option<T>;
}

impl<T, E: std::fmt::Display> LogErr<T> for Result<T, E> {
    fn log_err(self, what: &str) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(err) => {
                tracing::error!(error = %err, "{what}");
                None
            }
        }
    }
}

/// Window inner size, falling back to 800x600 when the host won't say.
pub fn viewport_size(window: &web_sys::Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(600.0);
    (width, height)
}

/// `window.devicePixelRatio`, or 1 where it isn't meaningful.
pub fn pixel_ratio(window: &web_sys::Window) -> f64 {
    let ratio = window.device_pixel_ratio();
    if ratio.is_finite() && ratio > 0.0 { ratio } else { 1.0 }
}
