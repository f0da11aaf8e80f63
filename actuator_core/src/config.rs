//! Runtime configuration for the actuator core.
//!
//! These are the runtime configuration structs used by `Actuator`.
//! They are separate from the TOML-deserialized config in `actuator_config`.

/// Limit-switch input configuration.
#[derive(Debug, Clone)]
pub struct SwitchCfg {
    /// Raw level meaning "extend switch pressed" (true = high).
    pub extend_active_high: bool,
    /// Raw level meaning "shrink switch pressed" (true = high).
    pub shrink_active_high: bool,
    /// Minimum duration (ms) a raw transition must hold before it is
    /// accepted. Shared by both switches.
    pub debounce_ms: u32,
}

impl Default for SwitchCfg {
    fn default() -> Self {
        Self {
            // Switches wired to ground with pull-ups: pressed pulls low.
            extend_active_high: false,
            shrink_active_high: false,
            debounce_ms: 20,
        }
    }
}

/// Drive-line output polarities.
#[derive(Debug, Clone)]
pub struct DriveCfg {
    /// Level that energizes the extend control line (true = high).
    pub extend_active_high: bool,
    /// Level that energizes the shrink control line (true = high).
    pub shrink_active_high: bool,
}

impl Default for DriveCfg {
    fn default() -> Self {
        Self {
            extend_active_high: true,
            shrink_active_high: true,
        }
    }
}

/// Homing supervision configuration.
#[derive(Debug, Clone, Default)]
pub struct HomingCfg {
    /// Abort homing into `MotionState::Error` if a single phase runs longer
    /// than this many milliseconds. 0 disables the guard; a wedged or missing
    /// limit switch then stalls the phase indefinitely.
    pub max_phase_ms: u32,
}

/// Complete runtime configuration, set once at construction.
#[derive(Debug, Clone, Default)]
pub struct ActuatorCfg {
    pub switches: SwitchCfg,
    pub drive: DriveCfg,
    pub homing: HomingCfg,
}
