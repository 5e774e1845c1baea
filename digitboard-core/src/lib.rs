//! Board-agnostic core logic for the digitboard firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Board configuration constants
//! - Button debouncing and the state shared with interrupt context
//! - Digit glyphs and the LED matrix renderer
//! - Display and LED strip traits
//! - Status line formatting
//! - The polling loop and its tick schedule
//!
//! ```text
//!  button IRQ ──► ButtonDebouncer ──► indicator LED
//!                      │ (pending flags)
//!                      ▼
//!  UART RX ────────► InputLoop ──► StatusPresenter ──► SSD1306
//!                      │
//!                      └──► render ──► PixelSink ──► WS2812
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod input;
pub mod matrix;
pub mod status;
pub mod traits;
