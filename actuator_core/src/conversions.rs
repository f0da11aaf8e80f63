//! `From` implementations bridging `actuator_config` types to
//! `actuator_core` types.
//!
//! These eliminate manual field-by-field mapping in the CLI.

use crate::config::{ActuatorCfg, DriveCfg, HomingCfg, SwitchCfg};

impl From<&actuator_config::SwitchesCfg> for SwitchCfg {
    fn from(c: &actuator_config::SwitchesCfg) -> Self {
        Self {
            extend_active_high: c.extend_active_high,
            shrink_active_high: c.shrink_active_high,
            debounce_ms: c.debounce_ms,
        }
    }
}

impl From<&actuator_config::DriveCfg> for DriveCfg {
    fn from(c: &actuator_config::DriveCfg) -> Self {
        Self {
            extend_active_high: c.extend_active_high,
            shrink_active_high: c.shrink_active_high,
        }
    }
}

impl From<&actuator_config::HomingCfg> for HomingCfg {
    fn from(c: &actuator_config::HomingCfg) -> Self {
        Self {
            max_phase_ms: c.max_phase_ms,
        }
    }
}

impl From<&actuator_config::Config> for ActuatorCfg {
    fn from(c: &actuator_config::Config) -> Self {
        Self {
            switches: (&c.switches).into(),
            drive: (&c.drive).into(),
            homing: (&c.homing).into(),
        }
    }
}
