//! Board configuration types
//!
//! These types describe the fixed hardware of the board: which GPIO drives
//! what, the debounce and tick timing, and the peripheral parameters for
//! the LED matrix and the status display.

use digitboard_hal::{I2cConfig, UartConfig};

use crate::matrix::Rgb;

/// Number of pixels in the LED matrix
pub const NUM_PIXELS: usize = 25;

/// Matrix edge length (the matrix is square)
pub const MATRIX_SIDE: usize = 5;

/// Minimum interval between two accepted edges on one button (µs)
pub const DEBOUNCE_WINDOW_US: u64 = 300_000;

/// Polling loop cadence (ms)
pub const TICK_INTERVAL_MS: u64 = 50;

/// GPIO assignment for the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinMap {
    /// WS2812 data line
    pub matrix_data: u8,
    /// Red indicator (held off)
    pub led_red: u8,
    /// Green indicator, toggled by button A
    pub led_green: u8,
    /// Blue indicator, toggled by button B
    pub led_blue: u8,
    /// Button A (active-low, pull-up)
    pub button_a: u8,
    /// Button B (active-low, pull-up)
    pub button_b: u8,
    /// Display I2C data
    pub i2c_sda: u8,
    /// Display I2C clock
    pub i2c_scl: u8,
    /// Serial console TX
    pub uart_tx: u8,
    /// Serial console RX
    pub uart_rx: u8,
}

impl PinMap {
    pub const DEFAULT: Self = Self {
        matrix_data: 7,
        led_red: 13,
        led_green: 11,
        led_blue: 12,
        button_a: 5,
        button_b: 6,
        i2c_sda: 14,
        i2c_scl: 15,
        uart_tx: 0,
        uart_rx: 1,
    };

    /// All assigned pins, in declaration order
    pub const fn all(&self) -> [u8; 10] {
        [
            self.matrix_data,
            self.led_red,
            self.led_green,
            self.led_blue,
            self.button_a,
            self.button_b,
            self.i2c_sda,
            self.i2c_scl,
            self.uart_tx,
            self.uart_rx,
        ]
    }
}

/// Loop and debounce timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Debounce window per button channel (µs)
    pub debounce_window_us: u64,
    /// Sleep between polling loop ticks (ms)
    pub tick_interval_ms: u64,
}

impl Timing {
    pub const DEFAULT: Self = Self {
        debounce_window_us: DEBOUNCE_WINDOW_US,
        tick_interval_ms: TICK_INTERVAL_MS,
    };
}

/// Monochrome status display parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// 7-bit I2C address of the controller
    pub address: u8,
    /// Panel width in pixels
    pub width: u16,
    /// Panel height in pixels
    pub height: u16,
    /// Bus settings
    pub i2c: I2cConfig,
}

impl DisplayConfig {
    pub const DEFAULT: Self = Self {
        address: 0x3C,
        width: 128,
        height: 64,
        i2c: I2cConfig::FAST,
    };
}

/// Addressable LED matrix parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MatrixConfig {
    /// Number of pixels on the strip
    pub pixels: usize,
    /// Data rate of the strip protocol (bits per second)
    pub bit_rate_hz: u32,
    /// Color used for every lit digit pixel
    pub digit_color: Rgb,
}

impl MatrixConfig {
    pub const DEFAULT: Self = Self {
        pixels: NUM_PIXELS,
        bit_rate_hz: 800_000,
        digit_color: Rgb::new(0, 180, 200),
    };
}

/// Complete board description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    pub pins: PinMap,
    pub timing: Timing,
    pub display: DisplayConfig,
    pub matrix: MatrixConfig,
    pub console: UartConfig,
}

impl BoardConfig {
    pub const DEFAULT: Self = Self {
        pins: PinMap::DEFAULT,
        timing: Timing::DEFAULT,
        display: DisplayConfig::DEFAULT,
        matrix: MatrixConfig::DEFAULT,
        console: UartConfig {
            baudrate: 115_200,
            data_bits: digitboard_hal::uart::DataBits::Eight,
            parity: digitboard_hal::uart::Parity::None,
            stop_bits: digitboard_hal::uart::StopBits::One,
        },
    };
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
