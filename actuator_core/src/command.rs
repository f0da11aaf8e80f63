//! Drive commands and their electrical rendering.
//!
//! The state machine decides a `DriveCommand` as a pure value; rendering it
//! against the configured line polarities and writing the result through the
//! `Drive` port are separate steps. This keeps the transition logic testable
//! without hardware.

use crate::config::DriveCfg;

/// Directional drive command computed by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveCommand {
    Extend,
    Shrink,
    Stop,
}

/// Concrete output levels for one command against a polarity config.
///
/// Control lines carry electrical levels (true = high); indicators are
/// logical on/off, with LED polarity left to the output port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineLevels {
    pub extend_line: bool,
    pub shrink_line: bool,
    pub extend_indicator: bool,
    pub shrink_indicator: bool,
}

impl DriveCommand {
    /// Render the command to output levels. Pure; commands are idempotent and
    /// may be re-rendered and re-applied every cycle.
    pub fn levels(self, drive: &DriveCfg) -> LineLevels {
        // Asserting a line means writing its active level; de-asserting means
        // the opposite level.
        let (extend_on, shrink_on) = match self {
            DriveCommand::Extend => (true, false),
            DriveCommand::Shrink => (false, true),
            DriveCommand::Stop => (false, false),
        };
        LineLevels {
            extend_line: extend_on == drive.extend_active_high,
            shrink_line: shrink_on == drive.shrink_active_high,
            extend_indicator: extend_on,
            shrink_indicator: shrink_on,
        }
    }
}
