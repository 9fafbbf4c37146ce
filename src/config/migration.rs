//! Config schema migration

use anyhow::Result;

/// Versioned config shapes upgrade themselves in place on load
pub trait Migrate {
    fn current_version(&self) -> u32;
    fn target_version() -> u32;
    fn migrate(&mut self) -> Result<()>;
}
