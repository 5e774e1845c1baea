//! RP2040-specific HAL for the digitboard firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `digitboard-hal` and `digitboard-core` traits:
//!
//! - Indicator LED outputs (`OutputPin`)
//! - Buffered UART console halves (`UartRx`/`UartTx`)
//! - PIO-based WS2812 transmitter (`PixelSink`)
//! - Conversions from the board config into `embassy_rp` configs

#![no_std]

pub mod gpio;
pub mod i2c;
pub mod pio;
pub mod uart;
pub mod ws2812;

pub use gpio::IndicatorLed;
pub use i2c::i2c_config;
pub use pio::ws2812_clock_divider;
pub use uart::{uart_config, ConsoleRx, ConsoleTx};
pub use ws2812::PioWs2812;
