//! Raspberry Pi GPIO ports over `rppal`.
//!
//! Input pins get a pull toward the released level of the configured
//! polarity; output pins are initialized de-asserted so the actuator comes up
//! stopped.

use rppal::gpio::{Gpio, InputPin, OutputPin};

use crate::error::HwError;
use actuator_traits::{Drive, Switches};

/// Limit-switch inputs on two BCM pins.
pub struct GpioSwitches {
    extend: InputPin,
    shrink: InputPin,
}

impl GpioSwitches {
    pub fn new(
        extend_pin: u8,
        shrink_pin: u8,
        extend_active_high: bool,
        shrink_active_high: bool,
    ) -> Result<Self, HwError> {
        let gpio = Gpio::new().map_err(|e| HwError::Gpio(e.to_string()))?;
        let input = |pin: u8, active_high: bool| -> Result<InputPin, HwError> {
            let pin = gpio.get(pin).map_err(|e| HwError::Gpio(e.to_string()))?;
            Ok(if active_high {
                pin.into_input_pulldown()
            } else {
                pin.into_input_pullup()
            })
        };
        Ok(Self {
            extend: input(extend_pin, extend_active_high)?,
            shrink: input(shrink_pin, shrink_active_high)?,
        })
    }
}

impl Switches for GpioSwitches {
    fn read_extend(&mut self) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.extend.is_high())
    }
    fn read_shrink(&mut self) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.shrink.is_high())
    }
}

/// Drive-line and indicator outputs. Indicator pins are optional; boards
/// without status LEDs simply skip the writes.
pub struct GpioDrive {
    extend: OutputPin,
    shrink: OutputPin,
    led_extend: Option<OutputPin>,
    led_shrink: Option<OutputPin>,
}

impl GpioDrive {
    pub fn new(
        extend_pin: u8,
        shrink_pin: u8,
        led_extend_pin: Option<u8>,
        led_shrink_pin: Option<u8>,
        extend_active_high: bool,
        shrink_active_high: bool,
    ) -> Result<Self, HwError> {
        let gpio = Gpio::new().map_err(|e| HwError::Gpio(e.to_string()))?;
        let output = |pin: u8, level_high: bool| -> Result<OutputPin, HwError> {
            let pin = gpio.get(pin).map_err(|e| HwError::Gpio(e.to_string()))?;
            Ok(if level_high {
                pin.into_output_high()
            } else {
                pin.into_output_low()
            })
        };
        let led = |pin: Option<u8>| -> Result<Option<OutputPin>, HwError> {
            pin.map(|p| output(p, false)).transpose()
        };
        Ok(Self {
            // De-asserted at startup: the opposite of each active level.
            extend: output(extend_pin, !extend_active_high)?,
            shrink: output(shrink_pin, !shrink_active_high)?,
            led_extend: led(led_extend_pin)?,
            led_shrink: led(led_shrink_pin)?,
        })
    }
}

impl Drive for GpioDrive {
    fn set_extend_line(&mut self, high: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        tracing::trace!(high, "extend line");
        if high {
            self.extend.set_high();
        } else {
            self.extend.set_low();
        }
        Ok(())
    }
    fn set_shrink_line(&mut self, high: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        tracing::trace!(high, "shrink line");
        if high {
            self.shrink.set_high();
        } else {
            self.shrink.set_low();
        }
        Ok(())
    }
    fn set_extend_indicator(&mut self, on: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if let Some(led) = self.led_extend.as_mut() {
            if on {
                led.set_high();
            } else {
                led.set_low();
            }
        }
        Ok(())
    }
    fn set_shrink_indicator(&mut self, on: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if let Some(led) = self.led_shrink.as_mut() {
            if on {
                led.set_high();
            } else {
                led.set_low();
            }
        }
        Ok(())
    }
}
