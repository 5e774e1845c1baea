//! Board configuration
//!
//! Compile-time constants describing the board wiring, timing and
//! peripheral settings. Pin mapping is fixed at build time; nothing here
//! is read from storage.

pub mod board;

pub use board::*;
