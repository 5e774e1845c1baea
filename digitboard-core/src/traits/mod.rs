//! Hardware abstraction traits
//!
//! These traits define the interface between the polling loop and the
//! peripheral drivers that live in the chip and firmware crates.

pub mod display;
pub mod pixels;

pub use display::{DisplayError, StatusPresenter, TextDisplay};
pub use pixels::{PixelError, PixelSink};
