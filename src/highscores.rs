//! Persisted high score
//!
//! A single integer stored under one fixed key. The storage backend is
//! injected so the game logic can be exercised with an in-memory double.

use serde::{Deserialize, Serialize};

/// LocalStorage key for the high score record
pub const STORAGE_KEY: &str = "poke_runner_high";

/// Storage capability: read an integer-or-absent, write an integer.
///
/// Absence on read means no high score yet (zero).
pub trait ScoreStore {
    fn read(&self) -> Option<u32>;
    fn write(&mut self, score: u32);
}

/// The stored record. Kept as a tiny JSON document so the format can grow
/// (e.g. a timestamp) without breaking old saves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub score: u32,
}

/// Process-wide high score, loaded once at startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighScore {
    best: u32,
}

impl HighScore {
    /// Load the high score through the given store.
    pub fn load(store: &dyn ScoreStore) -> Self {
        let best = store.read().unwrap_or(0);
        if best > 0 {
            log::info!("loaded high score {best}");
        } else {
            log::info!("no stored high score, starting at 0");
        }
        Self { best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record a finished session's score. Persists and returns true iff it
    /// beats the current best.
    pub fn record(&mut self, score: u32, store: &mut dyn ScoreStore) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        store.write(score);
        log::info!("new high score {score}");
        true
    }
}

/// In-memory store for tests and the native headless mode.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<u32>,
}

impl ScoreStore for MemoryStore {
    fn read(&self) -> Option<u32> {
        self.value
    }

    fn write(&mut self, score: u32) {
        self.value = Some(score);
    }
}

/// Browser LocalStorage store.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStorageStore {
    fn read(&self) -> Option<u32> {
        let storage = web_sys::window()?.local_storage().ok()??;
        let json = storage.get_item(STORAGE_KEY).ok()??;
        // Accept both the JSON record and a bare integer from older saves
        serde_json::from_str::<HighScoreRecord>(&json)
            .map(|r| r.score)
            .ok()
            .or_else(|| json.parse().ok())
    }

    fn write(&mut self, score: u32) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(&HighScoreRecord { score }) {
                if storage.set_item(STORAGE_KEY, &json).is_err() {
                    log::warn!("failed to persist high score");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_reads_as_zero() {
        let store = MemoryStore::default();
        let high = HighScore::load(&store);
        assert_eq!(high.best(), 0);
    }

    #[test]
    fn test_record_persists_only_improvements() {
        let mut store = MemoryStore::default();
        store.write(100);

        let mut high = HighScore::load(&store);
        assert_eq!(high.best(), 100);

        // 120 beats 100: persisted
        assert!(high.record(120, &mut store));
        assert_eq!(store.read(), Some(120));

        // 50 does not: store untouched
        assert!(!high.record(50, &mut store));
        assert_eq!(store.read(), Some(120));
        assert_eq!(high.best(), 120);
    }

    #[test]
    fn test_equal_score_is_not_a_new_best() {
        let mut store = MemoryStore::default();
        let mut high = HighScore::load(&store);
        assert!(high.record(10, &mut store));
        assert!(!high.record(10, &mut store));
    }

    #[test]
    fn test_record_round_trips_as_json() {
        let json = serde_json::to_string(&HighScoreRecord { score: 340 }).unwrap();
        let back: HighScoreRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.score, 340);
    }
}
