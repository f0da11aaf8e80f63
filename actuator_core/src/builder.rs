//! Type-state builder for `Actuator` and the generic `build_actuator`
//! constructor.
//!
//! The builder enforces at compile time that the switches and drive ports are
//! provided before `build()` is available. `try_build()` is always available
//! for dynamic checks.

use std::marker::PhantomData;

use actuator_traits::{Drive, Switches};

use crate::actuator::Actuator;
use crate::config::ActuatorCfg;
use crate::error::{BuildError, Result};

/// Boxed (dynamic-dispatch) actuator, the builder's output type.
pub type BoxedActuator = Actuator<Box<dyn Switches>, Box<dyn Drive>>;

impl BoxedActuator {
    /// Start building an actuator.
    ///
    /// ```
    /// use actuator_core::{ActuatorCfg, BoxedActuator};
    /// use actuator_core::mocks::{FixedSwitches, NoopDrive};
    ///
    /// let mut act = BoxedActuator::builder()
    ///     .with_switches(FixedSwitches { extend: false, shrink: false })
    ///     .with_drive(NoopDrive)
    ///     .with_config(ActuatorCfg::default())
    ///     .build()?;
    /// act.start_homing()?;
    /// act.update(0)?;
    /// assert!(act.is_homing());
    /// # Ok::<(), eyre::Report>(())
    /// ```
    pub fn builder() -> ActuatorBuilder<Missing, Missing> {
        ActuatorBuilder::default()
    }
}

// ── Type-state markers ───────────────────────────────────────────────────────

pub struct Missing;
pub struct Set;

/// Builder for `Actuator`. Configuration is validated on build.
pub struct ActuatorBuilder<S, D> {
    switches: Option<Box<dyn Switches>>,
    drive: Option<Box<dyn Drive>>,
    cfg: Option<ActuatorCfg>,
    _s: PhantomData<S>,
    _d: PhantomData<D>,
}

impl Default for ActuatorBuilder<Missing, Missing> {
    fn default() -> Self {
        Self {
            switches: None,
            drive: None,
            cfg: None,
            _s: PhantomData,
            _d: PhantomData,
        }
    }
}

impl<S, D> ActuatorBuilder<S, D> {
    /// Provide the limit-switch input port.
    pub fn with_switches(self, switches: impl Switches + 'static) -> ActuatorBuilder<Set, D> {
        ActuatorBuilder {
            switches: Some(Box::new(switches)),
            drive: self.drive,
            cfg: self.cfg,
            _s: PhantomData,
            _d: PhantomData,
        }
    }

    /// Provide the drive output port.
    pub fn with_drive(self, drive: impl Drive + 'static) -> ActuatorBuilder<S, Set> {
        ActuatorBuilder {
            switches: self.switches,
            drive: Some(Box::new(drive)),
            cfg: self.cfg,
            _s: PhantomData,
            _d: PhantomData,
        }
    }

    /// Provide the runtime configuration (defaults are used otherwise).
    pub fn with_config(mut self, cfg: ActuatorCfg) -> Self {
        self.cfg = Some(cfg);
        self
    }

    /// Build with runtime checks for the port fields.
    pub fn try_build(self) -> Result<BoxedActuator> {
        let switches = self
            .switches
            .ok_or_else(|| eyre::Report::new(BuildError::MissingSwitches))?;
        let drive = self
            .drive
            .ok_or_else(|| eyre::Report::new(BuildError::MissingDrive))?;
        build_actuator(switches, drive, self.cfg.unwrap_or_default())
    }
}

impl ActuatorBuilder<Set, Set> {
    /// Build; both ports are known to be present at compile time.
    pub fn build(self) -> Result<BoxedActuator> {
        self.try_build()
    }
}

/// Validate configuration and construct an `Actuator`.
///
/// This is the single source of truth for validation and construction, used
/// by both `ActuatorBuilder` and callers that want static dispatch.
pub fn build_actuator<S: Switches, D: Drive>(
    switches: S,
    drive: D,
    cfg: ActuatorCfg,
) -> Result<Actuator<S, D>> {
    if cfg.switches.debounce_ms == 0 {
        return Err(eyre::Report::new(BuildError::InvalidConfig(
            "debounce_ms must be >= 1",
        )));
    }
    Ok(Actuator::from_parts(switches, drive, cfg))
}
