#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schema for the actuator driver.
//!
//! `Config` and sub-structs are deserialized from TOML and validated. The
//! schema covers board wiring (`[pins]`), switch and drive polarities, the
//! shared debounce delay, homing supervision, and logging.

use serde::Deserialize;

/// Board wiring (BCM pin numbers).
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct Pins {
    pub extend_switch: u8,
    pub shrink_switch: u8,
    pub extend_drive: u8,
    pub shrink_drive: u8,
    pub led_extend: Option<u8>,
    pub led_shrink: Option<u8>,
}

/// Limit-switch inputs.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct SwitchesCfg {
    /// Raw level meaning "pressed" for the extend switch (true = high).
    pub extend_active_high: bool,
    /// Raw level meaning "pressed" for the shrink switch (true = high).
    pub shrink_active_high: bool,
    /// Shared debounce delay in milliseconds.
    pub debounce_ms: u32,
}

impl Default for SwitchesCfg {
    fn default() -> Self {
        Self {
            extend_active_high: false,
            shrink_active_high: false,
            debounce_ms: 20,
        }
    }
}

/// Drive-line output polarities.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
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

/// Homing supervision and control-loop pacing.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct HomingCfg {
    /// Abort homing into the error state if a single phase runs longer than
    /// this many milliseconds. 0 disables the guard.
    pub max_phase_ms: u32,
    /// Control-loop update period in milliseconds.
    pub period_ms: u32,
}

impl Default for HomingCfg {
    fn default() -> Self {
        Self {
            max_phase_ms: 0,
            period_ms: 5,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Logging {
    pub file: Option<String>,  // path to .log (JSON lines)
    pub level: Option<String>, // "info","debug"
    /// Log rotation policy: "never" | "daily" | "hourly" (default: never)
    pub rotation: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub pins: Pins,
    #[serde(default)]
    pub switches: SwitchesCfg,
    #[serde(default)]
    pub drive: DriveCfg,
    #[serde(default)]
    pub homing: HomingCfg,
    #[serde(default)]
    pub logging: Logging,
}

impl Config {
    /// Structural validation beyond what serde enforces.
    pub fn validate(&self) -> eyre::Result<()> {
        if self.switches.debounce_ms == 0 {
            eyre::bail!("switches.debounce_ms must be >= 1");
        }
        if self.homing.period_ms == 0 {
            eyre::bail!("homing.period_ms must be >= 1");
        }
        // The debounce window needs several update cycles to be meaningful.
        if self.homing.period_ms > self.switches.debounce_ms {
            eyre::bail!(
                "homing.period_ms ({}) must not exceed switches.debounce_ms ({})",
                self.homing.period_ms,
                self.switches.debounce_ms
            );
        }

        let mut pins = vec![
            self.pins.extend_switch,
            self.pins.shrink_switch,
            self.pins.extend_drive,
            self.pins.shrink_drive,
        ];
        pins.extend(self.pins.led_extend);
        pins.extend(self.pins.led_shrink);
        pins.sort_unstable();
        if pins.windows(2).any(|w| w[0] == w[1]) {
            eyre::bail!("[pins] assigns the same pin to more than one role");
        }
        Ok(())
    }
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}
