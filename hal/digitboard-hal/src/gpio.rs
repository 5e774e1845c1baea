//! GPIO pin abstractions
//!
//! Indicator LEDs are written from interrupt priority, so every
//! implementation must complete a write without blocking or taking a lock
//! the polling loop could hold.

/// Digital output pin
pub trait OutputPin {
    /// Drive the pin high (logic 1)
    fn set_high(&mut self);

    /// Drive the pin low (logic 0)
    fn set_low(&mut self);

    /// Drive the pin to a specific level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Level the pin is currently driven to
    fn is_set_high(&self) -> bool;
}
