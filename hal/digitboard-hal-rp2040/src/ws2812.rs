//! PIO-based WS2812 LED strip driver
//!
//! One state machine shifts 24-bit GRB words out MSB first. The CPU only
//! pushes words into the TX FIFO; bit timing comes from the PIO program
//! and its clock divider.

use digitboard_core::matrix::Frame;
use digitboard_core::traits::{PixelError, PixelSink};
use embassy_rp::pio::{
    Common, Config, Direction as PioDirection, FifoJoin, Instance, PioPin, ShiftConfig,
    ShiftDirection, StateMachine,
};
use embassy_rp::Peri;
use fixed::types::U24F8;

use crate::pio::{divider_bits, ws2812_clock_divider};

/// FIFO polls before a push is declared stalled
///
/// One word takes 30 µs on the wire at 800 kHz; this allows several
/// milliseconds for the FIFO to make room.
const PUSH_SPIN_LIMIT: u32 = 200_000;

/// PIO WS2812 transmitter
pub struct PioWs2812<'d, PIO: Instance, const SM: usize> {
    /// State machine running the bit program
    sm: StateMachine<'d, PIO, SM>,
}

impl<'d, PIO: Instance, const SM: usize> PioWs2812<'d, PIO, SM> {
    /// Load the WS2812 program and start the state machine
    ///
    /// # Arguments
    /// * `common` - PIO common resources (for loading program)
    /// * `sm` - State machine to use
    /// * `data_pin` - GPIO pin wired to the strip's DIN (must be PIO-capable)
    /// * `bit_rate_hz` - Strip data rate, 800 kHz for WS2812
    pub fn new<DATA: PioPin>(
        common: &mut Common<'d, PIO>,
        mut sm: StateMachine<'d, PIO, SM>,
        data_pin: Peri<'d, DATA>,
        bit_rate_hz: u32,
    ) -> Self {
        // Delays are phase length (T1/T2/T3 in crate::pio) minus one
        let prg = pio::pio_asm!(
            ".side_set 1",
            ".wrap_target",
            "bitloop:",
            "    out x, 1        side 0 [2]", // T3
            "    jmp !x do_zero  side 1 [1]", // T1
            "do_one:",
            "    jmp bitloop     side 1 [4]", // T2
            "do_zero:",
            "    nop             side 0 [4]", // T2
            ".wrap"
        );

        let installed = common.load_program(&prg.program);
        let data_pio_pin = common.make_pio_pin(data_pin);

        let mut cfg = Config::default();
        cfg.use_program(&installed, &[&data_pio_pin]);

        let (int_div, frac_div) = ws2812_clock_divider(bit_rate_hz);
        cfg.clock_divider = U24F8::from_bits(divider_bits(int_div, frac_div));

        // 24-bit words, MSB first, pulled automatically
        cfg.fifo_join = FifoJoin::TxOnly;
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: 24,
            direction: ShiftDirection::Left,
        };

        sm.set_config(&cfg);
        sm.set_pin_dirs(PioDirection::Out, &[&data_pio_pin]);
        sm.set_enable(true);

        Self { sm }
    }

    fn push(&mut self, word: u32) -> Result<(), PixelError> {
        for _ in 0..PUSH_SPIN_LIMIT {
            if self.sm.tx().try_push(word) {
                return Ok(());
            }
        }
        Err(PixelError::Stalled)
    }
}

impl<PIO: Instance, const SM: usize> PixelSink for PioWs2812<'_, PIO, SM> {
    fn write_frame(&mut self, frame: &Frame) -> Result<(), PixelError> {
        for &grb in frame {
            // Left-justify the 24 color bits in the 32-bit FIFO word
            self.push(grb << 8)?;
        }
        Ok(())
    }
}
