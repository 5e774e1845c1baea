//! The polling loop body
//!
//! `InputLoop` owns every peripheral the loop talks to and borrows the
//! shared button state. It never blocks: the serial read is a zero-wait
//! poll and the only pause is the sleep the caller runs between ticks.

use digitboard_hal::{UartRx, UartTx};

use crate::input::{ButtonDebouncer, ChannelId};
use crate::matrix::{mask_for_char, render, Rgb};
use crate::status;
use crate::traits::{DisplayError, PixelError, PixelSink, StatusPresenter, TextDisplay};

/// Hardware fault surfaced by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoopError {
    /// Serial receiver reported an error (overrun, framing, break)
    Serial,
    /// Status display write failed
    Display(DisplayError),
    /// LED strip write failed
    Pixels(PixelError),
}

impl From<DisplayError> for LoopError {
    fn from(e: DisplayError) -> Self {
        LoopError::Display(e)
    }
}

impl From<PixelError> for LoopError {
    fn from(e: PixelError) -> Self {
        LoopError::Pixels(e)
    }
}

/// What one tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickActivity {
    /// Byte consumed from the serial source
    pub received: Option<u8>,
    /// Button events drained
    pub button_events: u8,
}

impl TickActivity {
    /// Nothing reached the display or the matrix
    pub fn is_idle(&self) -> bool {
        self.received.is_none() && self.button_events == 0
    }
}

/// Polling loop state
pub struct InputLoop<'a, S, P, D, C> {
    buttons: &'a ButtonDebouncer,
    serial: S,
    pixels: P,
    display: D,
    console: C,
    color: Rgb,
}

impl<'a, S, P, D, C> InputLoop<'a, S, P, D, C>
where
    S: UartRx,
    P: PixelSink,
    D: TextDisplay,
    C: UartTx,
{
    pub fn new(
        buttons: &'a ButtonDebouncer,
        serial: S,
        pixels: P,
        display: D,
        console: C,
        color: Rgb,
    ) -> Self {
        Self {
            buttons,
            serial,
            pixels,
            display,
            console,
            color,
        }
    }

    /// Run one tick: serial poll, then button drain
    ///
    /// A serial fault ends the tick before the drain; pending button
    /// events stay latched for the next tick.
    pub fn tick(&mut self) -> Result<TickActivity, LoopError> {
        let received = self.poll_serial()?;
        let button_events = self.drain_buttons()?;
        Ok(TickActivity {
            received,
            button_events,
        })
    }

    /// Consume at most one serial byte and route it
    ///
    /// Digits light their glyph in the loop color; any other byte blanks
    /// the matrix. The matrix is written even when the display fails.
    pub fn poll_serial(&mut self) -> Result<Option<u8>, LoopError> {
        let byte = match self.serial.try_read_byte() {
            Ok(Some(byte)) => byte,
            Ok(None) => return Ok(None),
            Err(_) => return Err(LoopError::Serial),
        };
        let c = char::from(byte);

        let shown = self.display.show(&status::received(c));
        self.mirror(&status::console_received(c));

        let frame = render(mask_for_char(byte), self.color);
        self.pixels.write_frame(&frame)?;
        shown?;

        Ok(Some(byte))
    }

    /// Report every latched button event, channel A first
    ///
    /// Returns how many events were drained. A second call with no edge in
    /// between drains nothing. Every channel is drained even when the
    /// display fails; the first display error is returned afterwards.
    pub fn drain_buttons(&mut self) -> Result<u8, LoopError> {
        let mut drained = 0;
        let mut first_error = None;
        for id in ChannelId::ALL {
            let Some(event) = self.buttons.take_event(id) else {
                continue;
            };
            drained += 1;
            let shown = self
                .display
                .show(&status::indicator(event.channel, event.indicator_on));
            self.mirror(&status::console_button(event.channel, event.indicator_on));
            if let (Err(e), None) = (shown, first_error) {
                first_error = Some(e);
            }
        }
        match first_error {
            Some(e) => Err(e.into()),
            None => Ok(drained),
        }
    }

    /// Show a line that is not tied to an input, e.g. the boot banner
    pub fn announce(&mut self, text: &str) -> Result<(), LoopError> {
        let shown = self.display.show(text);
        self.mirror(text);
        shown.map_err(LoopError::from)
    }

    /// Digit color
    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn pixels(&self) -> &P {
        &self.pixels
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn serial_mut(&mut self) -> &mut S {
        &mut self.serial
    }

    // Console output is best effort
    fn mirror(&mut self, line: &str) {
        let _ = self.console.write_blocking(line.as_bytes());
        let _ = self.console.write_blocking(b"\r\n");
    }
}
