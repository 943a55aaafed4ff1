//! Validation Mode Value Object
//!
//! Selects how the validator treats advisory problems such as a missing
//! exclusion file, and whether it keeps going after a broken task.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Validation policy for a resolution pass
///
/// - `Permissive`: a missing exclusion file is a warning, errors from every
///   task are collected (default)
/// - `Strict`: a missing exclusion file is fatal, the first broken task stops
///   validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    #[default]
    Permissive,
    Strict,
}

impl ValidationMode {
    /// Accepted spellings, for error messages
    pub const NAMES: [&'static str; 2] = ["permissive", "strict"];

    pub fn is_strict(&self) -> bool {
        matches!(self, ValidationMode::Strict)
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValidationMode::Permissive => "permissive",
            ValidationMode::Strict => "strict",
        })
    }
}

impl FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" | "report" => Ok(ValidationMode::Permissive),
            "strict" => Ok(ValidationMode::Strict),
            other => Err(format!("unknown validation mode '{}'", other)),
        }
    }
}
