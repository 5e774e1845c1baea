//! Pixel occupancy masks

use crate::config::{MATRIX_SIDE, NUM_PIXELS};

/// Which cells of the matrix are lit
///
/// Index order is the strip's wiring order: row-major, top row first,
/// left to right within a row. Renderers must not reorder it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelMask(pub [bool; NUM_PIXELS]);

impl PixelMask {
    /// Every cell off
    pub const BLANK: Self = Self([false; NUM_PIXELS]);

    /// Build a mask from five row bitmaps, top row first
    ///
    /// Bit 4 of each row is the leftmost column, bit 0 the rightmost.
    pub const fn from_rows(rows: [u8; MATRIX_SIDE]) -> Self {
        let mut cells = [false; NUM_PIXELS];
        let mut row = 0;
        while row < MATRIX_SIDE {
            let mut col = 0;
            while col < MATRIX_SIDE {
                let bit = (MATRIX_SIDE - 1 - col) as u32;
                cells[row * MATRIX_SIDE + col] = (rows[row] >> bit) & 1 == 1;
                col += 1;
            }
            row += 1;
        }
        Self(cells)
    }

    /// Whether the cell at wiring index `index` is lit
    pub fn is_lit(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    /// Number of lit cells
    pub fn lit_count(&self) -> usize {
        self.0.iter().filter(|&&lit| lit).count()
    }

    pub fn is_blank(&self) -> bool {
        self.lit_count() == 0
    }

    pub fn cells(&self) -> &[bool; NUM_PIXELS] {
        &self.0
    }
}

impl Default for PixelMask {
    fn default() -> Self {
        Self::BLANK
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PixelMask {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "PixelMask[");
        for (i, lit) in self.0.iter().enumerate() {
            if i > 0 && i % MATRIX_SIDE == 0 {
                defmt::write!(f, "|");
            }
            defmt::write!(f, "{}", if *lit { "#" } else { "." });
        }
        defmt::write!(f, "]");
    }
}
