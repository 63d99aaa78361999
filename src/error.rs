use thiserror::Error;

use crate::model::PointerId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// A move arrived for an id that was never started (or already cleared).
    #[error("pointer {0} moved without a preceding start")]
    UnknownPointer(PointerId),
}

/// Any failure of the snapshot store. Callers log it and carry on; no
/// particular failure (quota or otherwise) is treated differently.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("could not read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("could not write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("Your browser does not support Canvas 2D drawing.")]
    Unsupported,
    #[error("could not encode snapshot: {0}")]
    Encode(String),
    #[error("could not decode snapshot: {0}")]
    Decode(String),
}

/// Failures surfaced by `Sketchpad::restore`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RestoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Renders a `JsValue` thrown by a web API into something loggable.
pub(crate) fn describe_js(value: &wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &wasm_bindgen::JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
