//! Test and helper mocks for actuator_core

use actuator_traits::{Drive, Switches};

/// Switch port that reports fixed raw levels; useful for decision-only runs
/// and doctests.
pub struct FixedSwitches {
    pub extend: bool,
    pub shrink: bool,
}

impl Switches for FixedSwitches {
    fn read_extend(&mut self) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.extend)
    }
    fn read_shrink(&mut self) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.shrink)
    }
}

/// Drive port that discards every write. Never errors.
#[derive(Default)]
pub struct NoopDrive;

impl Drive for NoopDrive {
    fn set_extend_line(&mut self, _high: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(())
    }
    fn set_shrink_line(&mut self, _high: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(())
    }
    fn set_extend_indicator(&mut self, _on: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(())
    }
    fn set_shrink_indicator(&mut self, _on: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(())
    }
}
