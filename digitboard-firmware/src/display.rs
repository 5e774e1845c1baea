//! SSD1306 status display
//!
//! Buffered graphics mode: drawing goes to RAM and `flush` pushes the
//! whole frame over I2C.

use defmt::*;
use digitboard_core::config;
use digitboard_core::traits::{DisplayError, TextDisplay};
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

/// Concrete 128x64 panel driver
pub type Panel<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

/// Status panel, possibly absent
///
/// If the controller does not answer at boot the panel stays `None` and
/// every operation reports `NotReady`; the rest of the board keeps working.
pub struct StatusDisplay<I2C> {
    panel: Option<Panel<I2C>>,
}

impl<I2C> StatusDisplay<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Initialise the controller and blank the screen
    pub fn init(i2c: I2C, cfg: &config::DisplayConfig) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, cfg.address);
        let mut panel = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        if panel.init().is_err() {
            error!("SSD1306 at {=u8:#x} did not respond", cfg.address);
            return Self { panel: None };
        }

        panel.clear_buffer();
        if panel.flush().is_err() {
            error!("SSD1306 initial flush failed");
            return Self { panel: None };
        }

        info!(
            "SSD1306 {}x{} ready at {=u8:#x}",
            cfg.width, cfg.height, cfg.address
        );
        Self { panel: Some(panel) }
    }

    pub fn is_ready(&self) -> bool {
        self.panel.is_some()
    }

    fn panel(&mut self) -> Result<&mut Panel<I2C>, DisplayError> {
        self.panel.as_mut().ok_or(DisplayError::NotReady)
    }
}

impl<I2C> TextDisplay for StatusDisplay<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.panel()?.clear_buffer();
        Ok(())
    }

    fn draw_text(&mut self, text: &str) -> Result<(), DisplayError> {
        Text::with_baseline(text, Point::zero(), text_style(), Baseline::Top)
            .draw(self.panel()?)
            .map_err(|_| DisplayError::Draw)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.panel()?.flush().map_err(|_| DisplayError::Bus)
    }
}
