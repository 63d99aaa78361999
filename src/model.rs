//! Core value types for the sketchpad.
//! Geometry, brush styling and the recorded draw primitives live here so the
//! tracker can be driven without a browser.

use serde::{Deserialize, Serialize};

/// Touch identifier as reported by the host (`Touch.identifier`).
pub type PointerId = i32;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Last known position of one active pointer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
    pub id: PointerId,
    pub x: f64,
    pub y: f64,
}

impl PointerState {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineCap {
    Round,
}

impl LineCap {
    pub fn as_str(self) -> &'static str {
        match self {
            LineCap::Round => "round",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineJoin {
    Round,
}

impl LineJoin {
    pub fn as_str(self) -> &'static str {
        match self {
            LineJoin::Round => "round",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Composite {
    SourceOver,
}

impl Composite {
    pub fn as_str(self) -> &'static str {
        match self {
            Composite::SourceOver => "source-over",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopColor {
    Yellow,
    Red,
    Blue,
    LimeGreen,
}

impl StopColor {
    /// CSS color keyword.
    pub fn as_css(self) -> &'static str {
        match self {
            StopColor::Yellow => "yellow",
            StopColor::Red => "red",
            StopColor::Blue => "blue",
            StopColor::LimeGreen => "limegreen",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    /// Position along the gradient axis, 0.0..=1.0.
    pub offset: f64,
    pub color: StopColor,
}

pub const GRADIENT_STOPS: [ColorStop; 4] = [
    ColorStop { offset: 0.0, color: StopColor::Yellow },
    ColorStop { offset: 0.25, color: StopColor::Red },
    ColorStop { offset: 0.50, color: StopColor::Blue },
    ColorStop { offset: 0.75, color: StopColor::LimeGreen },
];

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: [ColorStop; 4],
}

impl LinearGradient {
    /// The stroke gradient spanning the surface diagonal.
    pub fn diagonal(width: f64, height: f64) -> Self {
        Self {
            start: Point::new(0.0, 0.0),
            end: Point::new(width, height),
            stops: GRADIENT_STOPS,
        }
    }
}

pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

/// Everything the surface needs configured before a segment is stroked.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrushStyle {
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub line_width: f64,
    pub composite: Composite,
    pub gradient: LinearGradient,
}

impl BrushStyle {
    pub fn for_surface(width: f64, height: f64, line_width: f64) -> Self {
        Self {
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            line_width,
            composite: Composite::SourceOver,
            gradient: LinearGradient::diagonal(width, height),
        }
    }
}

/// A primitive issued against a surface, as captured by `RecordingSurface`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    SetStyle(BrushStyle),
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Stroke,
    ClosePath,
}
