//! Status display traits

/// Errors that can occur while driving the status display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transaction to the display controller failed
    Bus,
    /// Drawing into the frame buffer failed
    Draw,
    /// Display was never initialized
    NotReady,
}

/// Minimal text surface over a buffered graphical display
///
/// Drawing only touches the frame buffer; nothing reaches the panel
/// until `flush`.
pub trait TextDisplay {
    /// Blank the frame buffer
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw `text` with its top-left corner at the display origin
    ///
    /// Text that runs past the panel edge is clipped, not wrapped.
    fn draw_text(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Commit the frame buffer to the panel
    fn flush(&mut self) -> Result<(), DisplayError>;
}

/// Full-frame status line presenter
pub trait StatusPresenter: TextDisplay {
    /// Replace whatever is on screen with `text`
    ///
    /// Always a full overwrite: clear, draw at the origin, commit.
    fn show(&mut self, text: &str) -> Result<(), DisplayError> {
        self.clear()?;
        self.draw_text(text)?;
        self.flush()
    }
}

// Blanket implementation for all TextDisplay types
impl<T: TextDisplay> StatusPresenter for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear,
        Draw(String),
        Flush,
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
        fail_draw: bool,
    }

    impl TextDisplay for Recorder {
        fn clear(&mut self) -> Result<(), DisplayError> {
            self.ops.push(Op::Clear);
            Ok(())
        }

        fn draw_text(&mut self, text: &str) -> Result<(), DisplayError> {
            if self.fail_draw {
                return Err(DisplayError::Draw);
            }
            self.ops.push(Op::Draw(text.into()));
            Ok(())
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            self.ops.push(Op::Flush);
            Ok(())
        }
    }

    #[test]
    fn test_show_clears_draws_and_flushes() {
        let mut display = Recorder::default();
        display.show("Received: 7").unwrap();
        assert_eq!(
            display.ops,
            [Op::Clear, Op::Draw("Received: 7".into()), Op::Flush]
        );
    }

    #[test]
    fn test_show_stops_at_first_error() {
        let mut display = Recorder {
            fail_draw: true,
            ..Default::default()
        };
        assert_eq!(display.show("x"), Err(DisplayError::Draw));
        assert_eq!(display.ops, [Op::Clear]);
    }
}
