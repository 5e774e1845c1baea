//! Status line text
//!
//! Every display update has a matching console line. Both are formatted
//! into fixed-capacity strings; the longest line fits with room to spare,
//! so formatting never truncates.

use core::fmt::Write;

use heapless::String;

use crate::input::ChannelId;

/// Capacity of a formatted status line (bytes)
pub const STATUS_CAPACITY: usize = 40;

/// A formatted status or console line
pub type StatusLine = String<STATUS_CAPACITY>;

/// Shown once after display bring-up
pub const BOOT: &str = "System started";

fn on_off(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}

/// Display text for a received serial character
pub fn received(c: char) -> StatusLine {
    let mut line = StatusLine::new();
    let _ = write!(line, "Received: {}", c);
    line
}

/// Display text for an indicator toggle, e.g. "Green LED on"
pub fn indicator(channel: ChannelId, on: bool) -> StatusLine {
    let mut line = StatusLine::new();
    let _ = write!(line, "{} LED {}", channel.indicator_name(), on_off(on));
    line
}

/// Console line for a received serial character
pub fn console_received(c: char) -> StatusLine {
    let mut line = StatusLine::new();
    let _ = write!(line, "Character received: {}", c);
    line
}

/// Console line for a button toggle, e.g. "Button A pressed: Green LED on"
pub fn console_button(channel: ChannelId, on: bool) -> StatusLine {
    let mut line = StatusLine::new();
    let _ = write!(
        line,
        "Button {} pressed: {} LED {}",
        channel.label(),
        channel.indicator_name(),
        on_off(on)
    );
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_received_text() {
        assert_eq!(received('7').as_str(), "Received: 7");
        assert_eq!(received('x').as_str(), "Received: x");
    }

    #[test]
    fn test_indicator_text() {
        assert_eq!(indicator(ChannelId::A, true).as_str(), "Green LED on");
        assert_eq!(indicator(ChannelId::A, false).as_str(), "Green LED off");
        assert_eq!(indicator(ChannelId::B, true).as_str(), "Blue LED on");
        assert_eq!(indicator(ChannelId::B, false).as_str(), "Blue LED off");
    }

    #[test]
    fn test_console_text() {
        assert_eq!(console_received('3').as_str(), "Character received: 3");
        assert_eq!(
            console_button(ChannelId::A, true).as_str(),
            "Button A pressed: Green LED on"
        );
        assert_eq!(
            console_button(ChannelId::B, false).as_str(),
            "Button B pressed: Blue LED off"
        );
    }

    #[test]
    fn test_widest_char_fits() {
        // Four-byte UTF-8 scalar
        let line = console_received('\u{1F600}');
        assert!(line.ends_with('\u{1F600}'));
    }
}
