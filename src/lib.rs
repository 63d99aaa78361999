//! Multi-touch sketchpad on a 2D canvas.
//!
//! The drawing logic (`state`, `session`) is host independent; `surface` and
//! `persist` provide browser and in-memory backends, and `components` is the
//! yew front end.

pub mod components;
pub mod config;
pub mod error;
pub mod model;
pub mod persist;
pub mod session;
pub mod state;
pub mod surface;
pub mod util;

pub use components::App;
pub use config::SketchConfig;
pub use error::{RestoreError, StorageError, SurfaceError, TrackerError};
pub use session::Sketchpad;
pub use state::{GestureEnd, StrokeTracker};
