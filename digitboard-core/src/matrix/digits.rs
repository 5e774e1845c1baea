//! Digit glyph table

use super::mask::PixelMask;

/// Glyphs for the digits 0-9, indexed by value
#[rustfmt::skip]
pub static DIGIT_MASKS: [PixelMask; 10] = [
    PixelMask::from_rows([0b01110, 0b10001, 0b10001, 0b10001, 0b01110]), // 0
    PixelMask::from_rows([0b00100, 0b01100, 0b00100, 0b00100, 0b01110]), // 1
    PixelMask::from_rows([0b01110, 0b00001, 0b01110, 0b10000, 0b11111]), // 2
    PixelMask::from_rows([0b11110, 0b00001, 0b01110, 0b00001, 0b11110]), // 3
    PixelMask::from_rows([0b10001, 0b10001, 0b11111, 0b00001, 0b00001]), // 4
    PixelMask::from_rows([0b11111, 0b10000, 0b11110, 0b00001, 0b11110]), // 5
    PixelMask::from_rows([0b01110, 0b10000, 0b11110, 0b10001, 0b01110]), // 6
    PixelMask::from_rows([0b11111, 0b00001, 0b00010, 0b00100, 0b00100]), // 7
    PixelMask::from_rows([0b01110, 0b10001, 0b01110, 0b10001, 0b01110]), // 8
    PixelMask::from_rows([0b01110, 0b10001, 0b01111, 0b00001, 0b01110]), // 9
];

/// Glyph for a digit value, `None` outside 0-9
pub fn digit_mask(digit: u8) -> Option<&'static PixelMask> {
    DIGIT_MASKS.get(digit as usize)
}

/// Glyph for a received character
///
/// ASCII digits map to their glyph; every other byte maps to the blank
/// mask.
pub fn mask_for_char(ch: u8) -> &'static PixelMask {
    if ch.is_ascii_digit() {
        digit_mask(ch - b'0').unwrap_or(&PixelMask::BLANK)
    } else {
        &PixelMask::BLANK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_digit_has_a_distinct_glyph() {
        for (i, a) in DIGIT_MASKS.iter().enumerate() {
            assert!(!a.is_blank(), "digit {} is blank", i);
            for (j, b) in DIGIT_MASKS.iter().enumerate().skip(i + 1) {
                assert_ne!(a, b, "digits {} and {} share a glyph", i, j);
            }
        }
    }

    #[test]
    fn test_digit_one_is_centre_column() {
        let one = digit_mask(1).unwrap();
        for row in 0..5 {
            assert!(one.is_lit(row * 5 + 2));
        }
    }

    #[test]
    fn test_digit_mask_rejects_out_of_range() {
        assert!(digit_mask(10).is_none());
        assert!(digit_mask(255).is_none());
    }

    #[test]
    fn test_mask_for_char() {
        assert_eq!(mask_for_char(b'7'), &DIGIT_MASKS[7]);
        assert_eq!(mask_for_char(b'0'), &DIGIT_MASKS[0]);
        assert_eq!(mask_for_char(b'9'), &DIGIT_MASKS[9]);
        assert!(mask_for_char(b'x').is_blank());
        assert!(mask_for_char(b'/').is_blank());
        assert!(mask_for_char(b':').is_blank());
        assert!(mask_for_char(0xB7).is_blank());
    }
}
