//! I2C bus configuration
//!
//! The display controller is the only I2C device on the board; the bus
//! itself is driven through `embedded-hal` by the display driver, so only
//! the configuration is abstracted here.

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Enable the internal pull-ups on SDA and SCL
    pub internal_pullups: bool,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self {
        frequency: 100_000,
        internal_pullups: true,
    };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self {
        frequency: 400_000,
        internal_pullups: true,
    };

    /// Fast mode plus (1 MHz)
    pub const FAST_PLUS: Self = Self {
        frequency: 1_000_000,
        internal_pullups: true,
    };
}
