//! Button input
//!
//! Debounced falling-edge handling shared between the button interrupt
//! context and the polling loop.

pub mod channel;
pub mod debouncer;

pub use channel::ButtonChannel;
pub use debouncer::{ButtonDebouncer, ButtonEvent, ChannelId};
