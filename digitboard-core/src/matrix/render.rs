//! Mask-to-strip renderer
//!
//! WS2812 pixels expect green, red, blue in that order, MSB first. A
//! packed word holds them in the low 24 bits as `0x00GGRRBB`; shifting into
//! the transmit FIFO is the driver's job.

use crate::config::NUM_PIXELS;

use super::mask::PixelMask;

/// One frame of packed color words, in wiring order
pub type Frame = [u32; NUM_PIXELS];

/// An all-off frame
pub const DARK_FRAME: Frame = [0; NUM_PIXELS];

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into the strip's GRB word (`0x00GGRRBB`)
    pub const fn pack_grb(self) -> u32 {
        ((self.g as u32) << 16) | ((self.r as u32) << 8) | (self.b as u32)
    }
}

/// Render a mask in a single color
///
/// Position `i` holds `color` packed if `mask[i]` is lit, zero otherwise.
pub fn render(mask: &PixelMask, color: Rgb) -> Frame {
    let word = color.pack_grb();
    let mut frame = DARK_FRAME;
    for (slot, &lit) in frame.iter_mut().zip(mask.cells()) {
        if lit {
            *slot = word;
        }
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{mask_for_char, DIGIT_MASKS};
    use proptest::prelude::*;

    #[test]
    fn test_pack_grb_order() {
        assert_eq!(Rgb::new(0x11, 0x22, 0x33).pack_grb(), 0x0022_1133);
        assert_eq!(Rgb::new(0, 180, 200).pack_grb(), (180 << 16) | 200);
        assert_eq!(Rgb::default().pack_grb(), 0);
    }

    #[test]
    fn test_every_digit_renders_byte_exact() {
        let color = Rgb::new(0, 180, 200);
        for mask in &DIGIT_MASKS {
            let frame = render(mask, color);
            assert_eq!(frame.len(), NUM_PIXELS);
            for (i, &word) in frame.iter().enumerate() {
                let expected = if mask.is_lit(i) { color.pack_grb() } else { 0 };
                assert_eq!(word, expected);
            }
        }
    }

    #[test]
    fn test_non_digit_renders_dark() {
        let frame = render(mask_for_char(b'x'), Rgb::new(255, 255, 255));
        assert_eq!(frame, DARK_FRAME);
    }

    #[test]
    fn test_black_digit_is_dark() {
        assert_eq!(render(&DIGIT_MASKS[8], Rgb::default()), DARK_FRAME);
    }

    proptest! {
        #[test]
        fn prop_render_follows_mask(
            cells in proptest::array::uniform25(any::<bool>()),
            r in any::<u8>(),
            g in any::<u8>(),
            b in any::<u8>(),
        ) {
            let color = Rgb::new(r, g, b);
            let frame = render(&PixelMask(cells), color);
            for i in 0..NUM_PIXELS {
                let expected = if cells[i] { color.pack_grb() } else { 0 };
                prop_assert_eq!(frame[i], expected);
            }
        }

        #[test]
        fn prop_packed_word_fits_24_bits(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            prop_assert_eq!(Rgb::new(r, g, b).pack_grb() >> 24, 0);
        }
    }
}
