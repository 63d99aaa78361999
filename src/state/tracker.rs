//! Turns pointer lifecycle events into stroked line segments.
//!
//! Touches are tracked independently by id; the mouse uses a single implicit
//! pointer. Every move strokes exactly one segment from the pointer's previous
//! position to the new one.

use super::{PointerMap, PrimaryStroke};
use crate::error::TrackerError;
use crate::model::{BrushStyle, Point, PointerId, PointerState, Segment, DEFAULT_LINE_WIDTH};
use crate::surface::Surface;

/// What a lift/cancel means for the gesture as a whole.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureEnd {
    /// Other pointers are still down.
    Continuing,
    /// Nothing is down anymore; the raster is ready to be saved.
    Finished,
}

#[derive(Debug)]
pub struct StrokeTracker<S> {
    surface: S,
    pointers: PointerMap,
    primary: PrimaryStroke,
    line_width: f64,
}

impl<S: Surface> StrokeTracker<S> {
    pub fn new(surface: S) -> Self {
        Self::with_line_width(surface, DEFAULT_LINE_WIDTH)
    }

    pub fn with_line_width(surface: S, line_width: f64) -> Self {
        Self {
            surface,
            pointers: PointerMap::default(),
            primary: PrimaryStroke::default(),
            line_width,
        }
    }

    pub fn on_pointer_start(&mut self, id: PointerId, x: f64, y: f64) {
        tracing::trace!(id, x, y, "pointer start");
        self.pointers.start(id, x, y);
    }

    /// Strokes from the pointer's last position to `(x, y)` and returns the new
    /// position.
    pub fn on_pointer_move(&mut self, id: PointerId, x: f64, y: f64) -> Result<Point, TrackerError> {
        let from = self
            .pointers
            .advance(id, x, y)
            .ok_or(TrackerError::UnknownPointer(id))?;
        let to = Point::new(x, y);
        self.draw_segment(Segment { from, to });
        Ok(to)
    }

    /// `remaining` is the number of pointers still down after this one lifted.
    /// Zero wipes every tracked pointer, not only the one that lifted.
    pub fn on_pointer_end(&mut self, remaining: usize) -> GestureEnd {
        if remaining > 0 {
            return GestureEnd::Continuing;
        }
        tracing::trace!(cleared = self.pointers.len(), "all pointers lifted");
        self.pointers.clear();
        GestureEnd::Finished
    }

    pub fn on_pointer_cancel(&mut self, remaining: usize) -> GestureEnd {
        self.on_pointer_end(remaining)
    }

    pub fn on_primary_down(&mut self) {
        self.primary.down();
    }

    /// Returns `None` while the button is up.
    pub fn on_primary_move(&mut self, x: f64, y: f64) -> Option<Point> {
        let (from, to) = self.primary.advance(Point::new(x, y))?;
        self.draw_segment(Segment { from, to });
        Some(to)
    }

    pub fn on_primary_up(&mut self) -> GestureEnd {
        self.primary.up();
        GestureEnd::Finished
    }

    /// True between `on_primary_down` and `on_primary_up`.
    pub fn primary_active(&self) -> bool {
        self.primary.button_down
    }

    pub fn pointer(&self, id: PointerId) -> Option<&PointerState> {
        self.pointers.get(id)
    }

    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn draw_segment(&mut self, seg: Segment) {
        // Style (gradient included) is rebuilt from the current size every time.
        let (w, h) = self.surface.size();
        let style = BrushStyle::for_surface(w, h, self.line_width);
        self.surface.set_style(&style);
        self.surface.begin_path();
        self.surface.move_to(seg.from);
        self.surface.line_to(seg.to);
        self.surface.stroke();
        self.surface.close_path();
    }
}
