//! Sync direction value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which way the executor copies a task's items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncDirection {
    /// source_root -> target_root
    Up,
    /// target_root -> source_root
    Down,
}

impl SyncDirection {
    pub fn reversed(self) -> Self {
        match self {
            SyncDirection::Up => SyncDirection::Down,
            SyncDirection::Down => SyncDirection::Up,
        }
    }
}

impl fmt::Display for SyncDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncDirection::Up => f.write_str("up"),
            SyncDirection::Down => f.write_str("down"),
        }
    }
}

impl FromStr for SyncDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(SyncDirection::Up),
            "down" => Ok(SyncDirection::Down),
            other => Err(format!("unknown sync direction '{}' (expected up or down)", other)),
        }
    }
}
