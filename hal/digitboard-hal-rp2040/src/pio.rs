//! PIO timing for the WS2812 transmitter
//!
//! The WS2812 program spends a fixed number of PIO cycles on every bit,
//! split into three phases:
//!
//! ```text
//!   |<- T1 ->|<- T2 ->|<- T3 ->|
//!   high     data     low
//! ```
//!
//! The bit rate is therefore set entirely by the PIO clock divider.

/// System clock frequency (RP2040 default)
pub const SYS_CLK_HZ: u32 = 125_000_000;

/// Cycles the line is high at the start of every bit
pub const T1: u32 = 2;
/// Cycles that carry the bit value (high for 1, low for 0)
pub const T2: u32 = 5;
/// Cycles the line is low at the end of every bit
pub const T3: u32 = 3;

/// PIO cycles per transmitted bit
pub const CYCLES_PER_BIT: u32 = T1 + T2 + T3;

/// Standard WS2812 data rate
pub const WS2812_BIT_RATE_HZ: u32 = 800_000;

/// Calculate the clock divider for a target bit rate
///
/// The PIO program runs at SYS_CLK / divider Hz and spends
/// CYCLES_PER_BIT cycles per bit, so:
/// divider = SYS_CLK / (bit_rate * CYCLES_PER_BIT)
///
/// Returns (integer_part, fractional_part) for the 16.8 fixed-point divider.
pub fn ws2812_clock_divider(bit_rate_hz: u32) -> (u16, u8) {
    if bit_rate_hz == 0 {
        return (0xFFFF, 0xFF); // Maximum divider = slowest possible
    }

    // To get 8-bit fractional precision, multiply by 256 first
    let divisor = bit_rate_hz as u64 * CYCLES_PER_BIT as u64;
    let divider_x256 = (SYS_CLK_HZ as u64 * 256) / divisor;

    let int_part = (divider_x256 / 256).clamp(1, 0xFFFF) as u16;
    let frac_part = if divider_x256 / 256 == 0 {
        0
    } else {
        (divider_x256 % 256) as u8
    };

    (int_part, frac_part)
}

/// Pack a divider into the U24F8 bit layout used by the state machine
pub fn divider_bits(int_part: u16, frac_part: u8) -> u32 {
    ((int_part as u32) << 8) | (frac_part as u32)
}

/// Bit rate actually produced by a divider (Hz)
pub fn effective_bit_rate(int_part: u16, frac_part: u8) -> u32 {
    let bits = divider_bits(int_part, frac_part) as u64;
    ((SYS_CLK_HZ as u64 * 256) / (bits * CYCLES_PER_BIT as u64)) as u32
}
