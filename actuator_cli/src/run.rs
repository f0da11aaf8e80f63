//! Hardware assembly and the periodic control loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use actuator_core::error::{ActuatorError, Result};
use actuator_core::{ActuatorCfg, MotionState, build_actuator};
use actuator_traits::{Clock, MonotonicClock};

/// What a run is trying to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    Home,
    Extend,
    Shrink,
}

impl Goal {
    pub fn name(self) -> &'static str {
        match self {
            Goal::Home => "home",
            Goal::Extend => "extend",
            Goal::Shrink => "shrink",
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy)]
pub struct RunReport {
    pub elapsed_ms: u32,
    /// Measured travel times; 0 unless a homing run completed them.
    pub extend_travel_ms: u32,
    pub shrink_travel_ms: u32,
}

/// Drive the actuator until the goal is reached, the supervision window runs
/// out, or ctrl-c is received.
pub fn run(
    cfg: &actuator_config::Config,
    goal: Goal,
    max_run_ms: u32,
    sim_travel_ms: u32,
    shutdown: &Arc<AtomicBool>,
) -> Result<RunReport> {
    let clock = MonotonicClock::new();

    #[cfg(all(feature = "hardware", target_os = "linux"))]
    let (sim, switches, drive) = {
        use eyre::WrapErr;
        let _ = sim_travel_ms; // simulation-only knob
        let switches = actuator_hardware::gpio::GpioSwitches::new(
            cfg.pins.extend_switch,
            cfg.pins.shrink_switch,
            cfg.switches.extend_active_high,
            cfg.switches.shrink_active_high,
        )
        .wrap_err("open limit-switch pins")?;
        let drive = actuator_hardware::gpio::GpioDrive::new(
            cfg.pins.extend_drive,
            cfg.pins.shrink_drive,
            cfg.pins.led_extend,
            cfg.pins.led_shrink,
            cfg.drive.extend_active_high,
            cfg.drive.shrink_active_high,
        )
        .wrap_err("open drive pins")?;
        (None::<actuator_hardware::SimulatedActuator>, switches, drive)
    };

    #[cfg(not(all(feature = "hardware", target_os = "linux")))]
    let (sim, switches, drive) = {
        // The plant assumes symmetric wiring; the extend-side polarities
        // stand in for both.
        let sim = actuator_hardware::SimulatedActuator::with_levels(
            sim_travel_ms,
            cfg.switches.extend_active_high,
            cfg.drive.extend_active_high,
        );
        let (switches, drive) = sim.ports();
        tracing::info!(travel_ms = sim_travel_ms, "running against the simulated actuator");
        (Some(sim), switches, drive)
    };

    let mut act = build_actuator(switches, drive, ActuatorCfg::from(cfg))?;

    match goal {
        Goal::Home => act.start_homing()?,
        Goal::Extend => act.extend()?,
        Goal::Shrink => act.shrink()?,
    }

    let period = Duration::from_millis(u64::from(cfg.homing.period_ms));
    let started = clock.now_ms();
    loop {
        if shutdown.load(Ordering::SeqCst) {
            act.stop()?;
            return Err(eyre::Report::new(ActuatorError::State(
                "interrupted by ctrl-c; drive stopped".into(),
            )));
        }

        let now = clock.now_ms();
        if let Some(sim) = sim.as_ref() {
            sim.advance_to(now);
        }
        act.update(now)?;

        let done = match goal {
            Goal::Home => !act.is_homing(),
            Goal::Extend | Goal::Shrink => act.state() == MotionState::Idle,
        };
        if done && !act.has_error() {
            return Ok(RunReport {
                elapsed_ms: now.wrapping_sub(started),
                extend_travel_ms: act.extend_travel_ms(),
                shrink_travel_ms: act.shrink_travel_ms(),
            });
        }
        if act.has_error() {
            return Err(eyre::Report::new(ActuatorError::State(
                "actuator latched the error state".into(),
            )));
        }

        // Host-level supervision; the core itself never times a run out
        // unless the in-config phase guard is enabled.
        if now.wrapping_sub(started) >= max_run_ms {
            act.set_error()?;
            return Err(eyre::Report::new(ActuatorError::State(format!(
                "{} run exceeded max_run_ms ({max_run_ms} ms); error state latched",
                goal.name()
            ))));
        }

        clock.sleep(period);
    }
}
