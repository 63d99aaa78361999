// Headless surface: keeps the issued primitives as its "raster".
use serde::{Deserialize, Serialize};

use super::Surface;
use crate::error::SurfaceError;
use crate::model::{BrushStyle, DrawCommand, Point, Segment};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordingSurface {
    pub width: f64,
    pub height: f64,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Segments stroked so far, reconstructed from `MoveTo`/`LineTo` pairs that
    /// were followed by a `Stroke`.
    pub fn segments(&self) -> Vec<Segment> {
        let mut out = Vec::new();
        let mut from = None;
        let mut to = None;
        for cmd in &self.commands {
            match cmd {
                DrawCommand::BeginPath => {
                    from = None;
                    to = None;
                }
                DrawCommand::MoveTo(p) => from = Some(*p),
                DrawCommand::LineTo(p) => to = Some(*p),
                DrawCommand::Stroke => {
                    if let (Some(f), Some(t)) = (from, to) {
                        out.push(Segment { from: f, to: t });
                    }
                }
                DrawCommand::SetStyle(_) | DrawCommand::ClosePath => {}
            }
        }
        out
    }

    pub fn styles(&self) -> impl Iterator<Item = &BrushStyle> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::SetStyle(s) => Some(s),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn set_style(&mut self, style: &BrushStyle) {
        self.commands.push(DrawCommand::SetStyle(*style));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.commands.push(DrawCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.commands.push(DrawCommand::LineTo(p));
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn reset(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.commands.clear();
    }

    fn snapshot(&self) -> Result<String, SurfaceError> {
        serde_json::to_string(self).map_err(|e| SurfaceError::Encode(e.to_string()))
    }

    fn restore(&mut self, blob: &str) -> Result<(), SurfaceError> {
        let saved: RecordingSurface =
            serde_json::from_str(blob).map_err(|e| SurfaceError::Decode(e.to_string()))?;
        // Painting at the origin layers the saved raster under anything drawn later.
        self.commands.extend(saved.commands);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_rejects_garbage() {
        let mut s = RecordingSurface::new(10.0, 10.0);
        assert!(matches!(s.restore("not json"), Err(SurfaceError::Decode(_))));
        assert!(s.commands.is_empty());
    }

    #[test]
    fn reset_blanks_and_resizes() {
        let mut s = RecordingSurface::new(10.0, 10.0);
        s.begin_path();
        s.reset(30.0, 40.0);
        assert_eq!(s.size(), (30.0, 40.0));
        assert!(s.commands.is_empty());
    }
}
