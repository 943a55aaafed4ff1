//! Host platform detection

use crate::domain::ports::PlatformProbe;
use crate::domain::value_objects::PlatformFamily;

/// Reports the family of the OS this binary was built for.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPlatform;

impl PlatformProbe for HostPlatform {
    fn family(&self) -> PlatformFamily {
        PlatformFamily::current()
    }
}
