//! Rendering surfaces the tracker draws onto.

pub mod canvas;
pub mod recording;

pub use canvas::CanvasSurface;
pub use recording::RecordingSurface;

use crate::error::SurfaceError;
use crate::model::{BrushStyle, Point};

/// A 2D raster target with canvas-style path primitives.
///
/// The surface owns its pixels. `snapshot` and `restore` move the raster in
/// and out as an opaque encoded blob.
pub trait Surface {
    /// Current width and height in surface pixels.
    fn size(&self) -> (f64, f64);

    fn set_style(&mut self, style: &BrushStyle);
    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn stroke(&mut self);
    fn close_path(&mut self);

    /// Blank the surface and resize it.
    fn reset(&mut self, width: f64, height: f64);

    /// Encode the current raster.
    fn snapshot(&self) -> Result<String, SurfaceError>;

    /// Paint a blob produced by `snapshot` at the origin. Backends that decode
    /// asynchronously may paint after this returns.
    fn restore(&mut self, blob: &str) -> Result<(), SurfaceError>;
}
