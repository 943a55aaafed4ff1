//! PlatformProbe port - which operating system family resolution runs on

use crate::domain::value_objects::PlatformFamily;

/// Reports the operating system family. Never fails.
pub trait PlatformProbe {
    fn family(&self) -> PlatformFamily;
}

/// A probe that always reports the same family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPlatform(pub PlatformFamily);

impl PlatformProbe for FixedPlatform {
    fn family(&self) -> PlatformFamily {
        self.0
    }
}
