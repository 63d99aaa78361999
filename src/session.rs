//! One drawing session: a tracker plus the store its snapshots go to.

use crate::config::SketchConfig;
use crate::error::{RestoreError, StorageError, TrackerError};
use crate::model::{Point, PointerId};
use crate::persist::{Persistence, SnapshotStore};
use crate::state::{GestureEnd, StrokeTracker};
use crate::surface::Surface;

#[derive(Debug)]
pub struct Sketchpad<S, K> {
    tracker: StrokeTracker<S>,
    persistence: Option<Persistence<K>>,
    restoring: bool,
}

impl<S: Surface, K: SnapshotStore> Sketchpad<S, K> {
    pub fn new(surface: S, store: K, config: &SketchConfig) -> Self {
        let persistence = config
            .persist
            .then(|| Persistence::new(store, config.storage_key.clone()));
        Self {
            tracker: StrokeTracker::with_line_width(surface, config.line_width),
            persistence,
            restoring: false,
        }
    }

    /// Hands the saved snapshot, if any, to the surface. Returns whether one
    /// was found. Surfaces that decode asynchronously may not have painted it
    /// yet; use `begin_restore` when that matters.
    pub fn restore(&mut self) -> Result<bool, RestoreError> {
        let Some(persistence) = &self.persistence else {
            return Ok(false);
        };
        let Some(blob) = persistence.load()? else {
            return Ok(false);
        };
        self.tracker.surface_mut().restore(&blob)?;
        tracing::debug!(key = persistence.key(), "saved drawing handed to surface");
        Ok(true)
    }

    /// Reads the saved snapshot for the caller to paint. While a snapshot is
    /// pending, finished gestures are not saved, so the stored copy cannot be
    /// replaced by a raster that lacks it. Call `finish_restore` once painted.
    pub fn begin_restore(&mut self) -> Result<Option<String>, StorageError> {
        let Some(persistence) = &self.persistence else {
            return Ok(None);
        };
        let blob = persistence.load()?;
        self.restoring = blob.is_some();
        Ok(blob)
    }

    pub fn finish_restore(&mut self) {
        self.restoring = false;
    }

    pub fn is_restoring(&self) -> bool {
        self.restoring
    }

    pub fn pointer_start(&mut self, id: PointerId, x: f64, y: f64) {
        self.tracker.on_pointer_start(id, x, y);
    }

    pub fn pointer_move(&mut self, id: PointerId, x: f64, y: f64) -> Result<Point, TrackerError> {
        self.tracker.on_pointer_move(id, x, y)
    }

    pub fn pointer_end(&mut self, remaining: usize) -> GestureEnd {
        let end = self.tracker.on_pointer_end(remaining);
        self.after_gesture(end)
    }

    pub fn pointer_cancel(&mut self, remaining: usize) -> GestureEnd {
        let end = self.tracker.on_pointer_cancel(remaining);
        self.after_gesture(end)
    }

    pub fn primary_down(&mut self) {
        self.tracker.on_primary_down();
    }

    pub fn primary_move(&mut self, x: f64, y: f64) -> Option<Point> {
        self.tracker.on_primary_move(x, y)
    }

    pub fn primary_active(&self) -> bool {
        self.tracker.primary_active()
    }

    pub fn primary_up(&mut self) -> GestureEnd {
        let end = self.tracker.on_primary_up();
        self.after_gesture(end)
    }

    /// Blank the surface at a new size. The saved snapshot is left alone until
    /// the next gesture overwrites it.
    pub fn clear(&mut self, width: f64, height: f64) {
        self.tracker.surface_mut().reset(width, height);
    }

    pub fn tracker(&self) -> &StrokeTracker<S> {
        &self.tracker
    }

    pub fn persistence(&self) -> Option<&Persistence<K>> {
        self.persistence.as_ref()
    }

    fn after_gesture(&mut self, end: GestureEnd) -> GestureEnd {
        if end != GestureEnd::Finished {
            return end;
        }
        if self.restoring {
            tracing::debug!("saved drawing not painted yet, skipping save");
        } else {
            self.save();
        }
        end
    }

    fn save(&mut self) {
        let Some(persistence) = &mut self.persistence else {
            return;
        };
        if let Err(err) = persistence.save(self.tracker.surface()) {
            tracing::error!(%err, "could not save the drawing");
        }
    }
}
