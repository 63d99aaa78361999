pub mod pointers;
pub mod primary;
pub mod tracker;

pub use pointers::PointerMap;
pub use primary::PrimaryStroke;
pub use tracker::{GestureEnd, StrokeTracker};
