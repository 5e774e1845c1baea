//! Button edge tasks
//!
//! Spawned on the interrupt executor so they preempt the input loop. Each
//! edge is handed to the debouncer immediately: no delay, no logging, no
//! display work at this priority.

use digitboard_core::input::ChannelId;
use digitboard_hal_rp2040::IndicatorLed;
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use crate::shared::BUTTONS;

/// Button task - toggles `led` on every debounced press of `button`
#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(
    mut button: Input<'static>,
    channel: ChannelId,
    mut led: IndicatorLed<'static>,
) {
    loop {
        button.wait_for_falling_edge().await;
        BUTTONS.on_edge(channel, Instant::now().as_micros(), &mut led);
    }
}
