// Single implicit pointer used by the mouse path.
use crate::model::Point;

#[derive(Default, Debug, Clone)]
pub struct PrimaryStroke {
    pub button_down: bool,
    pub last: Option<Point>,
}

impl PrimaryStroke {
    pub fn down(&mut self) {
        self.button_down = true;
        self.last = None;
    }

    /// Returns the segment endpoints for a move, or `None` when the button is
    /// up. The first move after `down` starts from the current point.
    pub fn advance(&mut self, to: Point) -> Option<(Point, Point)> {
        if !self.button_down {
            return None;
        }
        let from = self.last.unwrap_or(to);
        self.last = Some(to);
        Some((from, to))
    }

    pub fn up(&mut self) {
        self.button_down = false;
        self.last = None;
    }
}
