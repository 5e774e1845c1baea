//! Cooperative polling loop
//!
//! One tick polls the serial source for a single byte, drains latched
//! button events (A before B) and then yields for the tick interval. The
//! sleep itself belongs to the executor; this module only decides what a
//! tick does and how long the pause is.

pub mod input_loop;
pub mod schedule;

pub use input_loop::{InputLoop, LoopError, TickActivity};
pub use schedule::TickSchedule;
