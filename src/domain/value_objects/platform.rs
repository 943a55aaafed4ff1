//! Platform value object - the operating system family a resolution runs on

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Operating system family used for platform-conditional task items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlatformFamily {
    Linux,
    #[serde(rename = "macos")]
    MacOs,
    /// Anything not recognized above
    #[default]
    Other,
}

impl PlatformFamily {
    /// All families, in display order
    pub const ALL: [PlatformFamily; 3] = [
        PlatformFamily::Linux,
        PlatformFamily::MacOs,
        PlatformFamily::Other,
    ];

    /// The family of the platform this binary was compiled for
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map an OS identifier (as in `std::env::consts::OS`) to a family.
    ///
    /// Unrecognized names map to `Other` rather than failing.
    pub fn from_os_name(os: &str) -> Self {
        match os.trim().to_ascii_lowercase().as_str() {
            "linux" => PlatformFamily::Linux,
            "macos" | "darwin" | "osx" => PlatformFamily::MacOs,
            _ => PlatformFamily::Other,
        }
    }

    /// Lowercase name, as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformFamily::Linux => "linux",
            PlatformFamily::MacOs => "macos",
            PlatformFamily::Other => "other",
        }
    }
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linux" => Ok(PlatformFamily::Linux),
            "macos" => Ok(PlatformFamily::MacOs),
            "other" => Ok(PlatformFamily::Other),
            other => Err(format!("unknown platform '{}'", other)),
        }
    }
}
