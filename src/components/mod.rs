mod app;
mod listener;
mod sketch_view;
pub mod viewport;

pub use app::App;
pub use sketch_view::SketchView;
