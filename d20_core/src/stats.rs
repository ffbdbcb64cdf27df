//! Persistent roll counter.
//!
//! The browser original kept a single `lifetimeRolls` counter in
//! `localStorage`; here it lives as pretty-printed JSON in `~/.d20/stats.json`
//! together with a timestamp of the last roll. A missing or unreadable file
//! silently loads as defaults — the counter is a novelty, not data worth
//! failing startup over.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{D20Error, D20Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollStats {
    pub lifetime_rolls: u64,
    #[serde(default)]
    pub last_roll: Option<DateTime<Utc>>,
}

impl Default for RollStats {
    fn default() -> Self {
        Self {
            lifetime_rolls: 0,
            last_roll: None,
        }
    }
}

impl RollStats {
    /// Default on-disk location: `~/.d20/stats.json`.
    pub fn default_path() -> D20Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(".d20").join("stats.json"))
            .ok_or(D20Error::HomeNotFound)
    }

    /// Load from the default location, falling back to defaults on any
    /// failure.
    pub fn load() -> Self {
        match Self::default_path() {
            Ok(path) => Self::load_or_default(&path),
            Err(_) => Self::default(),
        }
    }

    /// Load from an explicit path, falling back to defaults on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(stats) => stats,
            Err(err) => {
                tracing::debug!(?path, %err, "no usable stats file, starting fresh");
                Self::default()
            }
        }
    }

    pub fn load_from_file(path: &Path) -> D20Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save to the default location.
    pub fn save(&self) -> D20Result<()> {
        self.save_to_file(&Self::default_path()?)
    }

    pub fn save_to_file(&self, path: &Path) -> D20Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::debug!(?path, lifetime = self.lifetime_rolls, "stats saved");
        Ok(())
    }

    /// Count a roll: bump the lifetime counter and stamp the time.
    pub fn record_roll(&mut self) {
        self.lifetime_rolls += 1;
        self.last_roll = Some(Utc::now());
    }
}
