pub mod clock;

pub use clock::{Clock, MonotonicClock};

type PortError = Box<dyn std::error::Error + Send + Sync>;

/// Raw limit-switch inputs for one actuator.
///
/// Implementations return the electrical level of each switch line (true =
/// high). Interpreting a level as "pressed" is the core's job; ports report
/// what they see.
pub trait Switches {
    fn read_extend(&mut self) -> Result<bool, PortError>;
    fn read_shrink(&mut self) -> Result<bool, PortError>;
}

/// Drive-line and indicator outputs for one actuator.
///
/// Levels are electrical (true = high); polarity is resolved by the caller.
pub trait Drive {
    fn set_extend_line(&mut self, high: bool) -> Result<(), PortError>;
    fn set_shrink_line(&mut self, high: bool) -> Result<(), PortError>;
    fn set_extend_indicator(&mut self, on: bool) -> Result<(), PortError>;
    fn set_shrink_indicator(&mut self, on: bool) -> Result<(), PortError>;
}

impl<T: Switches + ?Sized> Switches for Box<T> {
    fn read_extend(&mut self) -> Result<bool, PortError> {
        (**self).read_extend()
    }
    fn read_shrink(&mut self) -> Result<bool, PortError> {
        (**self).read_shrink()
    }
}

impl<T: Drive + ?Sized> Drive for Box<T> {
    fn set_extend_line(&mut self, high: bool) -> Result<(), PortError> {
        (**self).set_extend_line(high)
    }
    fn set_shrink_line(&mut self, high: bool) -> Result<(), PortError> {
        (**self).set_shrink_line(high)
    }
    fn set_extend_indicator(&mut self, on: bool) -> Result<(), PortError> {
        (**self).set_extend_indicator(on)
    }
    fn set_shrink_indicator(&mut self, on: bool) -> Result<(), PortError> {
        (**self).set_shrink_indicator(on)
    }
}
