//! State shared between the button interrupt tasks and the input loop

use digitboard_core::config::BoardConfig;
use digitboard_core::input::ButtonDebouncer;

/// Debounce state for buttons A and B
///
/// Written by the button tasks on the high priority executor, drained by
/// the input loop in thread mode.
pub static BUTTONS: ButtonDebouncer =
    ButtonDebouncer::new(BoardConfig::DEFAULT.timing.debounce_window_us);
