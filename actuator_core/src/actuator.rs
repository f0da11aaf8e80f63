//! The actuator state machine (`Actuator`).
//!
//! Drives each control cycle: limit-switch sampling through the debounce
//! filters, homing phase supervision with travel-time measurement, the simple
//! motion transitions, and drive-command application through the injected
//! output port.
//!
//! `update` never blocks; all timing is expressed as wrapping differences
//! against the externally supplied monotonic millisecond timestamp. The
//! caller is responsible for invoking `update` at a bounded cadence of at
//! least a few calls per debounce window.

use actuator_traits::{Drive, Switches};
use eyre::WrapErr;

use crate::command::DriveCommand;
use crate::config::ActuatorCfg;
use crate::debounce::Debounce;
use crate::error::Result;
use crate::hw_error::map_hw_error;
use crate::state::{HomingPhase, MotionState};

/// Control core for one linear actuator with two limit switches.
///
/// Owns both debounce filters exclusively; single-threaded, consumer-paced.
pub struct Actuator<S: Switches, D: Drive> {
    pub(crate) switches: S,
    pub(crate) drive: D,
    pub(crate) cfg: ActuatorCfg,

    pub(crate) state: MotionState,
    pub(crate) homing: Option<HomingPhase>,
    /// Measurement reference for the current homing phase. `None` until the
    /// Init phase has reached the shrink limit; an explicit flag rather than
    /// a zero-timestamp sentinel so t=0 stays a legitimate timestamp.
    pub(crate) phase_start: Option<u32>,
    /// First update timestamp seen in the current homing phase, for the
    /// optional stuck-phase guard.
    pub(crate) phase_entered: Option<u32>,
    pub(crate) extend_ms: u32,
    pub(crate) shrink_ms: u32,

    pub(crate) extend_switch: Debounce,
    pub(crate) shrink_switch: Debounce,
}

impl<S: Switches, D: Drive> core::fmt::Debug for Actuator<S, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Actuator")
            .field("state", &self.state)
            .field("homing", &self.homing)
            .field("extend_ms", &self.extend_ms)
            .field("shrink_ms", &self.shrink_ms)
            .finish()
    }
}

impl<S: Switches, D: Drive> Actuator<S, D> {
    pub(crate) fn from_parts(switches: S, drive: D, cfg: ActuatorCfg) -> Self {
        let extend_switch = Debounce::new(cfg.switches.extend_active_high, cfg.switches.debounce_ms);
        let shrink_switch = Debounce::new(cfg.switches.shrink_active_high, cfg.switches.debounce_ms);
        Self {
            switches,
            drive,
            cfg,
            state: MotionState::Idle,
            homing: None,
            phase_start: None,
            phase_entered: None,
            extend_ms: 0,
            shrink_ms: 0,
            extend_switch,
            shrink_switch,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    /// Current motion state.
    pub fn state(&self) -> MotionState {
        self.state
    }

    /// Whether a homing run is in progress.
    pub fn is_homing(&self) -> bool {
        self.homing.is_some()
    }

    /// Current homing phase, if a homing run is in progress.
    pub fn homing_phase(&self) -> Option<HomingPhase> {
        self.homing
    }

    /// Latched error state.
    pub fn has_error(&self) -> bool {
        self.state == MotionState::Error
    }

    /// Measured shrink-to-extend travel time (ms). 0 until a homing run has
    /// completed the MeasureExtend phase.
    pub fn extend_travel_ms(&self) -> u32 {
        self.extend_ms
    }

    /// Measured extend-to-shrink travel time (ms). 0 until a homing run has
    /// completed the MeasureShrink phase.
    pub fn shrink_travel_ms(&self) -> u32 {
        self.shrink_ms
    }

    // ── Commands ─────────────────────────────────────────────────────────────

    /// Drive toward the extend limit. Must not be called while homing; the
    /// core does not guard against it.
    pub fn extend(&mut self) -> Result<()> {
        self.apply(DriveCommand::Extend)?;
        self.state = MotionState::Extending;
        Ok(())
    }

    /// Drive toward the shrink limit. Must not be called while homing; the
    /// core does not guard against it.
    pub fn shrink(&mut self) -> Result<()> {
        self.apply(DriveCommand::Shrink)?;
        self.state = MotionState::Shrinking;
        Ok(())
    }

    /// De-assert both control lines and indicators.
    pub fn stop(&mut self) -> Result<()> {
        self.apply(DriveCommand::Stop)?;
        self.state = MotionState::Idle;
        Ok(())
    }

    /// Latch the error state (supervising-layer entry point). Stops the
    /// drive; the state does not self-clear and every subsequent update
    /// re-issues the stop.
    pub fn set_error(&mut self) -> Result<()> {
        self.homing = None;
        self.phase_start = None;
        self.phase_entered = None;
        self.apply(DriveCommand::Stop)?;
        self.state = MotionState::Error;
        Ok(())
    }

    /// Begin (or restart) a homing run. Unconditional: a run already in
    /// progress is restarted, not rejected. Homing always starts by driving
    /// toward the shrink reference so measurements begin from a known point.
    pub fn start_homing(&mut self) -> Result<()> {
        self.extend_ms = 0;
        self.shrink_ms = 0;
        self.phase_start = None;
        self.phase_entered = None;
        self.homing = Some(HomingPhase::Init);
        tracing::debug!("homing started");
        self.apply(DriveCommand::Shrink)?;
        self.state = MotionState::Shrinking;
        Ok(())
    }

    /// One control cycle: sample and debounce both switches, then run either
    /// the homing phase table or the simple motion transitions.
    pub fn update(&mut self, now_ms: u32) -> Result<()> {
        self.sample_switches(now_ms)?;
        if self.homing.is_some() {
            self.update_homing(now_ms)
        } else {
            self.update_motion()
        }
    }

    // ── Private: control cycle pieces ────────────────────────────────────────

    fn sample_switches(&mut self, now_ms: u32) -> Result<()> {
        let raw_extend = self
            .switches
            .read_extend()
            .map_err(|e| eyre::Report::new(map_hw_error(&*e)))
            .wrap_err("reading extend limit switch")?;
        let raw_shrink = self
            .switches
            .read_shrink()
            .map_err(|e| eyre::Report::new(map_hw_error(&*e)))
            .wrap_err("reading shrink limit switch")?;
        self.extend_switch.update(raw_extend, now_ms);
        self.shrink_switch.update(raw_shrink, now_ms);
        Ok(())
    }

    fn update_homing(&mut self, now: u32) -> Result<()> {
        let Some(phase) = self.homing else {
            return Ok(());
        };

        // Optional stuck-phase guard: a wedged or missing switch otherwise
        // stalls the phase forever.
        let entered = *self.phase_entered.get_or_insert(now);
        let max_phase_ms = self.cfg.homing.max_phase_ms;
        if max_phase_ms > 0 && now.wrapping_sub(entered) >= max_phase_ms {
            tracing::warn!(?phase, max_phase_ms, "homing phase overran guard");
            self.homing = None;
            self.phase_start = None;
            self.phase_entered = None;
            self.apply(DriveCommand::Stop)?;
            self.state = MotionState::Error;
            return Ok(());
        }

        match phase {
            HomingPhase::Init => {
                if self.shrink_switch.is_pressed() {
                    // Shrink reference reached; timing starts here.
                    self.phase_start = Some(now);
                    self.enter_phase(HomingPhase::MeasureExtend);
                    self.apply(DriveCommand::Extend)?;
                    self.state = MotionState::Extending;
                }
            }
            HomingPhase::MeasureExtend => {
                if self.extend_switch.is_pressed() {
                    if let Some(start) = self.phase_start {
                        self.extend_ms = now.wrapping_sub(start);
                    }
                    tracing::debug!(extend_ms = self.extend_ms, "extend travel measured");
                    self.phase_start = Some(now);
                    self.enter_phase(HomingPhase::MeasureShrink);
                    self.apply(DriveCommand::Shrink)?;
                    self.state = MotionState::Shrinking;
                }
            }
            HomingPhase::MeasureShrink => {
                if self.shrink_switch.is_pressed() {
                    if let Some(start) = self.phase_start {
                        self.shrink_ms = now.wrapping_sub(start);
                    }
                    tracing::debug!(shrink_ms = self.shrink_ms, "shrink travel measured");
                    self.phase_start = Some(now);
                    self.enter_phase(HomingPhase::MoveToMiddle);
                    self.apply(DriveCommand::Extend)?;
                    self.state = MotionState::Extending;
                }
            }
            HomingPhase::MoveToMiddle => {
                // Truncating division: the observed calibration behavior.
                let hold_ms = self.extend_ms / 2;
                if let Some(start) = self.phase_start
                    && now.wrapping_sub(start) >= hold_ms
                {
                    tracing::debug!(
                        extend_ms = self.extend_ms,
                        shrink_ms = self.shrink_ms,
                        "homing complete, parked at midpoint"
                    );
                    self.homing = None;
                    self.phase_start = None;
                    self.phase_entered = None;
                    self.apply(DriveCommand::Stop)?;
                    self.state = MotionState::Idle;
                }
            }
        }
        Ok(())
    }

    fn update_motion(&mut self) -> Result<()> {
        match self.state {
            MotionState::Extending => {
                if self.extend_switch.is_pressed() {
                    self.stop()?;
                }
            }
            MotionState::Shrinking => {
                if self.shrink_switch.is_pressed() {
                    self.stop()?;
                }
            }
            MotionState::Idle => {}
            MotionState::Error => {
                // Re-issue stop every cycle; the state never self-clears.
                self.apply(DriveCommand::Stop)?;
            }
        }
        Ok(())
    }

    fn enter_phase(&mut self, phase: HomingPhase) {
        tracing::debug!(?phase, "homing phase entered");
        self.homing = Some(phase);
        self.phase_entered = None;
    }

    /// Apply a drive command through the output port. Idempotent; issued
    /// without "already in this state" checks.
    fn apply(&mut self, cmd: DriveCommand) -> Result<()> {
        let levels = cmd.levels(&self.cfg.drive);
        self.drive
            .set_extend_line(levels.extend_line)
            .map_err(|e| eyre::Report::new(map_hw_error(&*e)))
            .wrap_err("writing extend control line")?;
        self.drive
            .set_shrink_line(levels.shrink_line)
            .map_err(|e| eyre::Report::new(map_hw_error(&*e)))
            .wrap_err("writing shrink control line")?;
        self.drive
            .set_extend_indicator(levels.extend_indicator)
            .map_err(|e| eyre::Report::new(map_hw_error(&*e)))
            .wrap_err("writing extend indicator")?;
        self.drive
            .set_shrink_indicator(levels.shrink_indicator)
            .map_err(|e| eyre::Report::new(map_hw_error(&*e)))
            .wrap_err("writing shrink indicator")?;
        Ok(())
    }
}
