//! Digitboard - Serial digit display firmware
//!
//! Reads single characters from UART0, shows digits on a 5x5 WS2812
//! matrix, mirrors every event on an SSD1306 panel and toggles two
//! indicator LEDs from debounced push buttons.
//!
//! Two execution contexts:
//! - Button tasks on an interrupt executor (SWI_IRQ_1), preempting
//! - The input loop in `main`, on the thread executor

#![no_std]
#![no_main]

mod display;
mod shared;
mod tasks;

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::I2c;
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::peripherals::{PIO0, UART0};
use embassy_rp::pio::Pio;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use embassy_time::Timer;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use digitboard_core::config::BoardConfig;
use digitboard_core::control::{InputLoop, TickSchedule};
use digitboard_core::input::ChannelId;
use digitboard_core::matrix::DARK_FRAME;
use digitboard_core::status;
use digitboard_core::traits::PixelSink;
use digitboard_hal_rp2040::{i2c_config, uart_config, ConsoleRx, ConsoleTx, IndicatorLed, PioWs2812};

use crate::display::StatusDisplay;
use crate::shared::BUTTONS;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

/// Executor for the button tasks
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Digitboard firmware starting...");

    let board = BoardConfig::DEFAULT;
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");
    debug!("Board config: {}", board);

    // Indicator LEDs (red is held off for the lifetime of the firmware)
    let _red = IndicatorLed::off(p.PIN_13);
    let green = IndicatorLed::off(p.PIN_11);
    let blue = IndicatorLed::off(p.PIN_12);

    // Buttons are active low
    let button_a = Input::new(p.PIN_5, Pull::Up);
    let button_b = Input::new(p.PIN_6, Pull::Up);

    // Setup UART console
    let tx_buf = &mut TX_BUF.init([0u8; 256])[..];
    let rx_buf = &mut RX_BUF.init([0u8; 256])[..];
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config(&board.console));
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    info!("UART console at {} baud", board.console.baudrate);

    // Setup PIO0 for the LED matrix
    let Pio { mut common, sm0, .. } = Pio::new(p.PIO0, Irqs);
    let mut matrix = PioWs2812::new(&mut common, sm0, p.PIN_7, board.matrix.bit_rate_hz);
    if let Err(e) = matrix.write_frame(&DARK_FRAME) {
        error!("LED matrix blank failed: {}", e);
    }
    info!("PIO WS2812 initialized ({} pixels)", board.matrix.pixels);

    // Setup I2C1 for the status display
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config(&board.display.i2c));
    let display = StatusDisplay::init(i2c, &board.display);
    if !display.is_ready() {
        warn!("Continuing without status display");
    }

    // Button handlers preempt the input loop
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let high = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    high.spawn(tasks::button_task(button_a, ChannelId::A, green)).unwrap();
    high.spawn(tasks::button_task(button_b, ChannelId::B, blue)).unwrap();
    info!("Button tasks spawned");

    let mut input = InputLoop::new(
        &BUTTONS,
        ConsoleRx::new(rx),
        matrix,
        display,
        ConsoleTx::new(tx),
        board.matrix.digit_color,
    );

    if let Err(e) = input.announce(status::BOOT) {
        warn!("Boot status not shown: {}", e);
    }

    let schedule = TickSchedule::from_timing(&board.timing);
    info!("Input loop running, tick {} ms", schedule.interval_ms());

    loop {
        match input.tick() {
            Ok(activity) if !activity.is_idle() => trace!("Tick: {}", activity),
            Ok(_) => {}
            Err(e) => warn!("Tick failed: {}", e),
        }
        Timer::after_millis(schedule.interval_ms()).await;
    }
}
