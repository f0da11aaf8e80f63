//! Motion state and homing phases.

/// Externally visible motion state of the actuator.
///
/// `Error` is never entered by the core's own transitions except through the
/// optional stuck-phase guard; it is otherwise set by a supervising layer via
/// `Actuator::set_error` and never self-clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionState {
    /// Not driving. Both control lines de-asserted.
    Idle,
    /// Driving toward the extend limit switch.
    Extending,
    /// Driving toward the shrink limit switch.
    Shrinking,
    /// Latched fault. The drive is re-stopped on every update cycle.
    Error,
}

/// Sub-phase of a homing run. Meaningful only while homing is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomingPhase {
    /// Driving to the shrink reference before any measurement is trusted.
    Init,
    /// Timing the shrink-to-extend traversal.
    MeasureExtend,
    /// Timing the extend-to-shrink traversal.
    MeasureShrink,
    /// Driving extend for half the measured extend time, then parking.
    MoveToMiddle,
}
