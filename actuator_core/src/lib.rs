#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Core actuator control logic (hardware-agnostic).
//!
//! This crate provides the hardware-independent control core for a linear
//! actuator with two mechanical limit switches. All hardware interactions go
//! through the `actuator_traits::Switches` and `actuator_traits::Drive`
//! traits.
//!
//! ## Architecture
//!
//! - **Debouncing**: per-switch debounce filter (`debounce` module)
//! - **Decision/effect split**: drive decisions are pure `DriveCommand`
//!   values rendered against the configured polarities, then applied through
//!   the injected output port (`command` module)
//! - **Control**: motion state machine with timed homing calibration
//!   (`actuator` module)
//! - **Configuration**: runtime config structs (`config` module)
//!
//! ## Timing
//!
//! All timing is expressed against an externally supplied monotonic
//! millisecond timestamp (`u32`, wrapping like a 32-bit tick counter).
//! `Actuator::update` never sleeps; the caller paces the control loop and
//! must call `update` every cycle, at least a few times per debounce window.

pub mod actuator;
pub mod builder;
pub mod command;
pub mod config;
pub mod conversions;
pub mod debounce;
pub mod error;
pub mod hw_error;
pub mod mocks;
pub mod state;

pub use actuator::Actuator;
pub use builder::{ActuatorBuilder, BoxedActuator, build_actuator};
pub use command::{DriveCommand, LineLevels};
pub use config::{ActuatorCfg, DriveCfg, HomingCfg, SwitchCfg};
pub use debounce::Debounce;
pub use error::{ActuatorError, BuildError};
pub use state::{HomingPhase, MotionState};
