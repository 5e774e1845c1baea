//! LED strip output

use crate::matrix::Frame;

/// Errors from the LED strip transmitter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelError {
    /// Transmit FIFO did not drain in time
    Stalled,
}

/// Sink for whole matrix frames
pub trait PixelSink {
    /// Transmit one frame of packed GRB words in wiring order
    fn write_frame(&mut self, frame: &Frame) -> Result<(), PixelError>;
}
