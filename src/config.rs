use serde::{Deserialize, Serialize};

use crate::model::DEFAULT_LINE_WIDTH;
use crate::persist::{SnapshotStore, DEFAULT_STORAGE_KEY};

/// Local storage key holding an optional JSON `SketchConfig`.
pub const CONFIG_KEY: &str = "sketchpad_config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Key the snapshot is saved under.
    pub storage_key: String,
    pub line_width: f64,
    /// Save after each gesture and restore on startup.
    pub persist: bool,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            line_width: DEFAULT_LINE_WIDTH,
            persist: true,
        }
    }
}

impl SketchConfig {
    /// Reads overrides from `store`, falling back to defaults on any problem.
    pub fn load(store: &impl SnapshotStore) -> Self {
        let raw = match store.get(CONFIG_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(err) => {
                tracing::warn!(%err, "config unreadable, using defaults");
                return Self::default();
            }
        };
        match serde_json::from_str::<SketchConfig>(&raw) {
            Ok(cfg) if cfg.line_width.is_finite() && cfg.line_width > 0.0 => cfg,
            Ok(cfg) => {
                tracing::warn!(line_width = cfg.line_width, "invalid line width, using default");
                Self {
                    line_width: DEFAULT_LINE_WIDTH,
                    ..cfg
                }
            }
            Err(err) => {
                tracing::warn!(%err, "config is not valid JSON, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemoryStore;

    #[test]
    fn missing_config_is_default() {
        assert_eq!(SketchConfig::load(&MemoryStore::default()), SketchConfig::default());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let mut store = MemoryStore::default();
        store.set(CONFIG_KEY, r#"{"persist": false}"#).unwrap();
        let cfg = SketchConfig::load(&store);
        assert!(!cfg.persist);
        assert_eq!(cfg.storage_key, "sketchpad");
        assert_eq!(cfg.line_width, 1.0);
    }

    #[test]
    fn bad_json_falls_back() {
        let mut store = MemoryStore::default();
        store.set(CONFIG_KEY, "{oops").unwrap();
        assert_eq!(SketchConfig::load(&store), SketchConfig::default());
    }

    #[test]
    fn non_positive_line_width_is_replaced() {
        let mut store = MemoryStore::default();
        store
            .set(CONFIG_KEY, r#"{"line_width": 0, "storage_key": "pad2"}"#)
            .unwrap();
        let cfg = SketchConfig::load(&store);
        assert_eq!(cfg.line_width, 1.0);
        assert_eq!(cfg.storage_key, "pad2");
    }
}
