//! Indicator LED outputs
//!
//! Thin wrapper over `embassy_rp::gpio::Output` so the core debouncer can
//! drive an LED without knowing about the chip. A pin write is a single
//! SIO register store, safe from any interrupt priority.

use digitboard_hal::OutputPin;
use embassy_rp::gpio::{Level, Output, Pin};
use embassy_rp::Peri;

/// Push-pull indicator LED, active high
pub struct IndicatorLed<'d> {
    pin: Output<'d>,
}

impl<'d> IndicatorLed<'d> {
    /// Configure `pin` as an output driven to `on`
    pub fn new(pin: Peri<'d, impl Pin>, on: bool) -> Self {
        let level = if on { Level::High } else { Level::Low };
        Self {
            pin: Output::new(pin, level),
        }
    }

    /// Configure `pin` as an output, initially off
    pub fn off(pin: Peri<'d, impl Pin>) -> Self {
        Self::new(pin, false)
    }
}

impl OutputPin for IndicatorLed<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
