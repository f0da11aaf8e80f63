//! Maps `Box<dyn Error>` from trait boundaries to typed `ActuatorError`.
//!
//! The traits in `actuator_traits` use `Box<dyn Error + Send + Sync>` for
//! maximum flexibility; this module converts those to our typed error enum,
//! with an optional feature-gated path for `actuator_hardware::HwError`
//! downcasting.

use crate::error::ActuatorError;

/// Map a trait-boundary error to a typed `ActuatorError`.
///
/// Attempts to downcast known hardware error types first, then falls back
/// to a generic hardware error.
pub fn map_hw_error(e: &(dyn std::error::Error + 'static)) -> ActuatorError {
    // Feature-gated: try to downcast to HwError for precise mapping
    #[cfg(feature = "hardware-errors")]
    {
        if let Some(hw) = e.downcast_ref::<actuator_hardware::error::HwError>() {
            return ActuatorError::HardwareFault(hw.to_string());
        }
    }

    ActuatorError::Hardware(e.to_string())
}
