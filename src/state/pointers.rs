// Multi-touch pointer table, one entry per finger currently on the surface.
use std::collections::BTreeMap;

use crate::model::{Point, PointerId, PointerState};

#[derive(Default, Debug, Clone)]
pub struct PointerMap {
    active: BTreeMap<PointerId, PointerState>,
}

impl PointerMap {
    /// Inserts or overwrites the state for `id`.
    pub fn start(&mut self, id: PointerId, x: f64, y: f64) {
        self.active.insert(id, PointerState { id, x, y });
    }

    /// Moves `id` to `(x, y)`, returning the previous position, or `None` if
    /// `id` is not tracked.
    pub fn advance(&mut self, id: PointerId, x: f64, y: f64) -> Option<Point> {
        let state = self.active.get_mut(&id)?;
        let previous = state.position();
        state.x = x;
        state.y = y;
        Some(previous)
    }

    pub fn get(&self, id: PointerId) -> Option<&PointerState> {
        self.active.get(&id)
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
