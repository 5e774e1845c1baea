//! 5x5 addressable LED matrix
//!
//! Pixel masks, the digit glyph table and the renderer that turns a mask
//! plus a color into the words transmitted to the LED strip.

pub mod digits;
pub mod mask;
pub mod render;

pub use digits::{digit_mask, mask_for_char, DIGIT_MASKS};
pub use mask::PixelMask;
pub use render::{render, Frame, Rgb, DARK_FRAME};
