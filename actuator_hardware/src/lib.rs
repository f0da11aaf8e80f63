//! Hardware bindings for the actuator driver: a simulated plant for
//! development and tests, and (behind the `hardware` feature) Raspberry Pi
//! GPIO ports over `rppal`.

pub mod error;
#[cfg(all(feature = "hardware", target_os = "linux"))]
pub mod gpio;

use std::cell::RefCell;
use std::rc::Rc;

use actuator_traits::{Drive, Switches};

/// Shared plant state behind the simulated ports.
#[derive(Debug)]
struct Plant {
    travel_ms: u32,
    switch_active_high: bool,
    drive_active_high: bool,
    /// Contact-bounce window after a switch engages; 0 = clean contacts.
    bounce_ms: u32,

    /// Carriage position in milliseconds of travel. 0 = shrink end.
    position_ms: u32,
    last_advance_ms: Option<u32>,
    now_ms: u32,

    extend_line: bool,
    shrink_line: bool,
    extend_led: bool,
    shrink_led: bool,

    extend_engaged_at: Option<u32>,
    shrink_engaged_at: Option<u32>,
    reads: u32,
}

impl Plant {
    fn extending(&self) -> bool {
        self.extend_line == self.drive_active_high
    }

    fn shrinking(&self) -> bool {
        self.shrink_line == self.drive_active_high
    }

    fn advance_to(&mut self, now_ms: u32) {
        if let Some(last) = self.last_advance_ms {
            let dt = now_ms.wrapping_sub(last);
            // Both lines asserted is an invalid command; the plant holds.
            if self.extending() && !self.shrinking() {
                self.position_ms = self.position_ms.saturating_add(dt).min(self.travel_ms);
            } else if self.shrinking() && !self.extending() {
                self.position_ms = self.position_ms.saturating_sub(dt);
            }
        }
        self.last_advance_ms = Some(now_ms);
        self.now_ms = now_ms;

        if self.position_ms >= self.travel_ms {
            self.extend_engaged_at.get_or_insert(now_ms);
        } else {
            self.extend_engaged_at = None;
        }
        if self.position_ms == 0 {
            self.shrink_engaged_at.get_or_insert(now_ms);
        } else {
            self.shrink_engaged_at = None;
        }
    }

    /// Raw level for one switch, with optional bounce right after engagement.
    fn switch_level(&mut self, engaged_at: Option<u32>) -> bool {
        let pressed = match engaged_at {
            None => false,
            Some(at) if self.bounce_ms > 0 && self.now_ms.wrapping_sub(at) < self.bounce_ms => {
                // Alternate readings while the contacts settle.
                self.reads = self.reads.wrapping_add(1);
                self.reads % 2 == 0
            }
            Some(_) => true,
        };
        pressed == self.switch_active_high
    }
}

/// Simulated linear actuator: the carriage moves while a drive line is
/// asserted and the end-stop switches engage at the travel limits.
///
/// `advance_to` must be called with the loop timestamp before each control
/// cycle so the plant integrates motion against the same clock the core sees.
#[derive(Clone, Debug)]
pub struct SimulatedActuator {
    plant: Rc<RefCell<Plant>>,
}

impl SimulatedActuator {
    /// Plant with active-high switches and drive lines, carriage mid-travel.
    pub fn new(travel_ms: u32) -> Self {
        Self::with_levels(travel_ms, true, true)
    }

    /// Plant with explicit switch and drive polarities.
    pub fn with_levels(travel_ms: u32, switch_active_high: bool, drive_active_high: bool) -> Self {
        let plant = Plant {
            travel_ms,
            switch_active_high,
            drive_active_high,
            bounce_ms: 0,
            position_ms: travel_ms / 2,
            last_advance_ms: None,
            now_ms: 0,
            extend_line: !drive_active_high,
            shrink_line: !drive_active_high,
            extend_led: false,
            shrink_led: false,
            extend_engaged_at: None,
            shrink_engaged_at: None,
            reads: 0,
        };
        Self {
            plant: Rc::new(RefCell::new(plant)),
        }
    }

    /// Inject contact bounce for the given window after a switch engages.
    pub fn with_bounce(self, bounce_ms: u32) -> Self {
        self.plant.borrow_mut().bounce_ms = bounce_ms;
        self
    }

    /// The switch and drive halves handed to the control core.
    pub fn ports(&self) -> (SimSwitches, SimDrive) {
        (
            SimSwitches {
                plant: Rc::clone(&self.plant),
            },
            SimDrive {
                plant: Rc::clone(&self.plant),
            },
        )
    }

    /// Integrate carriage motion up to the given loop timestamp.
    pub fn advance_to(&self, now_ms: u32) {
        self.plant.borrow_mut().advance_to(now_ms);
    }

    pub fn set_position_ms(&self, position_ms: u32) {
        let mut p = self.plant.borrow_mut();
        p.position_ms = position_ms.min(p.travel_ms);
    }

    pub fn position_ms(&self) -> u32 {
        self.plant.borrow().position_ms
    }
}

/// Simulated limit-switch inputs.
pub struct SimSwitches {
    plant: Rc<RefCell<Plant>>,
}

impl Switches for SimSwitches {
    fn read_extend(&mut self) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let mut p = self.plant.borrow_mut();
        let engaged = p.extend_engaged_at;
        Ok(p.switch_level(engaged))
    }
    fn read_shrink(&mut self) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let mut p = self.plant.borrow_mut();
        let engaged = p.shrink_engaged_at;
        Ok(p.switch_level(engaged))
    }
}

/// Simulated drive outputs.
pub struct SimDrive {
    plant: Rc<RefCell<Plant>>,
}

impl Drive for SimDrive {
    fn set_extend_line(&mut self, high: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        tracing::trace!(high, "sim extend line");
        self.plant.borrow_mut().extend_line = high;
        Ok(())
    }
    fn set_shrink_line(&mut self, high: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        tracing::trace!(high, "sim shrink line");
        self.plant.borrow_mut().shrink_line = high;
        Ok(())
    }
    fn set_extend_indicator(&mut self, on: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.plant.borrow_mut().extend_led = on;
        Ok(())
    }
    fn set_shrink_indicator(&mut self, on: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.plant.borrow_mut().shrink_led = on;
        Ok(())
    }
}
