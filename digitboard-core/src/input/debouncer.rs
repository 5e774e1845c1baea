//! Two-channel button debouncer
//!
//! `on_edge` runs at interrupt priority: it makes the debounce decision,
//! writes the indicator LED directly and latches a pending event. It never
//! blocks, logs or touches the display. The polling loop later drains the
//! latched events with `take_event`, always channel A before channel B.

use digitboard_hal::OutputPin;

use super::channel::ButtonChannel;
use crate::config::DEBOUNCE_WINDOW_US;

/// Physical button line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelId {
    /// Button A, drives the green indicator
    A,
    /// Button B, drives the blue indicator
    B,
}

impl ChannelId {
    /// Drain order used by the polling loop
    pub const ALL: [ChannelId; 2] = [ChannelId::A, ChannelId::B];

    pub const fn index(self) -> usize {
        match self {
            ChannelId::A => 0,
            ChannelId::B => 1,
        }
    }

    /// Button label as printed on the board
    pub const fn label(self) -> &'static str {
        match self {
            ChannelId::A => "A",
            ChannelId::B => "B",
        }
    }

    /// Color of the indicator LED this button toggles
    pub const fn indicator_name(self) -> &'static str {
        match self {
            ChannelId::A => "Green",
            ChannelId::B => "Blue",
        }
    }
}

/// A debounced toggle observed by the polling loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    pub channel: ChannelId,
    /// Indicator level after the toggle
    pub indicator_on: bool,
}

/// Shared debounce state for both buttons
///
/// Lives in a `static`; the interrupt context and the polling loop both
/// hold `&'static` references.
#[derive(Debug)]
pub struct ButtonDebouncer {
    channels: [ButtonChannel; 2],
    window_us: u64,
}

impl Default for ButtonDebouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_WINDOW_US)
    }
}

impl ButtonDebouncer {
    pub const fn new(window_us: u64) -> Self {
        Self {
            channels: [ButtonChannel::new(), ButtonChannel::new()],
            window_us,
        }
    }

    /// Debounce window (µs)
    pub fn window_us(&self) -> u64 {
        self.window_us
    }

    /// State block for one channel
    pub fn channel(&self, id: ChannelId) -> &ButtonChannel {
        &self.channels[id.index()]
    }

    /// Handle a falling edge on `id` at `now_us`
    ///
    /// Accepted edges drive `led` to the new indicator level before
    /// returning. Returns whether the edge was accepted.
    pub fn on_edge<P: OutputPin>(&self, id: ChannelId, now_us: u64, led: &mut P) -> bool {
        match self.channel(id).on_edge(now_us, self.window_us) {
            Some(level) => {
                led.set_state(level);
                true
            }
            None => false,
        }
    }

    /// Drain the pending event of one channel
    pub fn take_event(&self, id: ChannelId) -> Option<ButtonEvent> {
        self.channel(id)
            .take_pending()
            .map(|indicator_on| ButtonEvent {
                channel: id,
                indicator_on,
            })
    }

    /// Whether any channel has an undrained event
    pub fn has_pending(&self) -> bool {
        self.channels.iter().any(ButtonChannel::is_pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const WINDOW: u64 = 300_000;
    const T0: u64 = 10_000_000;

    #[derive(Default)]
    struct MockLed {
        level: bool,
        writes: usize,
    }

    impl OutputPin for MockLed {
        fn set_high(&mut self) {
            self.level = true;
            self.writes += 1;
        }

        fn set_low(&mut self) {
            self.level = false;
            self.writes += 1;
        }

        fn is_set_high(&self) -> bool {
            self.level
        }
    }

    #[test]
    fn test_accepted_edge_drives_led() {
        let buttons = ButtonDebouncer::new(WINDOW);
        let mut led = MockLed::default();

        assert!(buttons.on_edge(ChannelId::A, T0, &mut led));
        assert!(led.level);
        assert!(buttons.channel(ChannelId::A).indicator());

        assert!(buttons.on_edge(ChannelId::A, T0 + WINDOW + 1, &mut led));
        assert!(!led.level);
        assert_eq!(led.writes, 2);
    }

    #[test]
    fn test_bounce_does_not_touch_led() {
        let buttons = ButtonDebouncer::new(WINDOW);
        let mut led = MockLed::default();

        buttons.on_edge(ChannelId::B, T0, &mut led);
        for offset in [1, 500, 20_000, WINDOW] {
            assert!(!buttons.on_edge(ChannelId::B, T0 + offset, &mut led));
        }
        assert_eq!(led.writes, 1);
        assert!(led.level);
    }

    #[test]
    fn test_close_edges_yield_one_event() {
        let buttons = ButtonDebouncer::new(WINDOW);
        let mut led = MockLed::default();

        buttons.on_edge(ChannelId::A, T0, &mut led);
        buttons.on_edge(ChannelId::A, T0 + WINDOW / 2, &mut led);

        assert_eq!(
            buttons.take_event(ChannelId::A),
            Some(ButtonEvent {
                channel: ChannelId::A,
                indicator_on: true
            })
        );
        assert_eq!(buttons.take_event(ChannelId::A), None);
    }

    #[test]
    fn test_separated_edges_yield_two_events() {
        let buttons = ButtonDebouncer::new(WINDOW);
        let mut led = MockLed::default();

        buttons.on_edge(ChannelId::A, T0, &mut led);
        let first = buttons.take_event(ChannelId::A);
        buttons.on_edge(ChannelId::A, T0 + WINDOW + 1, &mut led);
        let second = buttons.take_event(ChannelId::A);

        assert_eq!(first.map(|e| e.indicator_on), Some(true));
        assert_eq!(second.map(|e| e.indicator_on), Some(false));
    }

    #[test]
    fn test_same_instant_on_both_channels() {
        let buttons = ButtonDebouncer::new(WINDOW);
        let mut green = MockLed::default();
        let mut blue = MockLed::default();

        assert!(buttons.on_edge(ChannelId::A, T0, &mut green));
        assert!(buttons.on_edge(ChannelId::B, T0, &mut blue));
        assert!(green.level && blue.level);
        assert!(buttons.has_pending());
    }

    #[test]
    fn test_b_edges_leave_a_untouched() {
        let buttons = ButtonDebouncer::new(WINDOW);
        let mut blue = MockLed::default();

        let mut accepted = 0;
        for i in 0..20 {
            if buttons.on_edge(ChannelId::B, T0 + i * (WINDOW + 1), &mut blue) {
                accepted += 1;
            }
        }
        assert_eq!(accepted, 20);

        let a = buttons.channel(ChannelId::A);
        assert!(!a.indicator());
        assert!(!a.is_pending());
        assert_eq!(a.last_trigger_us(), 0);
        assert_eq!(buttons.take_event(ChannelId::A), None);
    }

    #[test]
    fn test_channel_labels() {
        assert_eq!(ChannelId::A.indicator_name(), "Green");
        assert_eq!(ChannelId::B.indicator_name(), "Blue");
        assert_eq!(ChannelId::ALL, [ChannelId::A, ChannelId::B]);
    }

    proptest! {
        #[test]
        fn prop_gap_decides_flip_count(gap in 1u64..2 * WINDOW) {
            let buttons = ButtonDebouncer::new(WINDOW);
            let mut led = MockLed::default();

            buttons.on_edge(ChannelId::A, T0, &mut led);
            let second = buttons.on_edge(ChannelId::A, T0 + gap, &mut led);

            prop_assert_eq!(second, gap > WINDOW);
            prop_assert_eq!(led.writes, if gap > WINDOW { 2 } else { 1 });
            prop_assert_eq!(led.level, gap <= WINDOW);
        }

        #[test]
        fn prop_channels_are_independent(
            edges in proptest::collection::vec((any::<bool>(), 0u64..1_000_000), 0..40)
        ) {
            let buttons = ButtonDebouncer::new(WINDOW);
            let reference_a = ButtonChannel::new();
            let reference_b = ButtonChannel::new();
            let mut green = MockLed::default();
            let mut blue = MockLed::default();
            let mut now = T0;

            // Each channel must track a standalone channel fed only its own edges
            for (on_a, step) in edges {
                now += step;
                if on_a {
                    buttons.on_edge(ChannelId::A, now, &mut green);
                    reference_a.on_edge(now, WINDOW);
                } else {
                    buttons.on_edge(ChannelId::B, now, &mut blue);
                    reference_b.on_edge(now, WINDOW);
                }
            }

            for (id, reference, led) in [
                (ChannelId::A, &reference_a, &green),
                (ChannelId::B, &reference_b, &blue),
            ] {
                let ch = buttons.channel(id);
                prop_assert_eq!(ch.indicator(), reference.indicator());
                prop_assert_eq!(ch.is_pending(), reference.is_pending());
                prop_assert_eq!(ch.last_trigger_us(), reference.last_trigger_us());
                prop_assert_eq!(led.level, reference.indicator());
            }
        }

        #[test]
        fn prop_timestamp_never_moves_backwards(
            times in proptest::collection::vec(0u64..5_000_000, 1..40)
        ) {
            let ch = ButtonChannel::new();
            let mut previous = ch.last_trigger_us();
            for t in times {
                ch.on_edge(t, WINDOW);
                prop_assert!(ch.last_trigger_us() >= previous);
                previous = ch.last_trigger_us();
            }
        }
    }
}
