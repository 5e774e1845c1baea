//! Digitboard Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the board-agnostic
//! core is written against. Chip-specific HALs implement them for real
//! peripherals; the core's host tests implement them with recording mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  digitboard-firmware (embassy binary)    │
//! └──────────────────────────────────────────┘
//!          │                      │
//!          ▼                      ▼
//! ┌──────────────────┐   ┌──────────────────┐
//! │ digitboard-core  │   │ digitboard-hal-  │
//! │ (debounce, loop) │◄──│     rp2040       │
//! └──────────────────┘   └──────────────────┘
//!          │                      │
//!          └──────────┬───────────┘
//!                     ▼
//! ┌──────────────────────────────────────────┐
//! │  digitboard-hal (this crate - traits)    │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (indicator LEDs)
//! - [`uart::UartTx`], [`uart::UartRx`] - Serial communication

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use i2c::I2cConfig;
pub use uart::{UartConfig, UartRx, UartTx};
