//! Buffered UART console
//!
//! The console is UART0 in buffered mode: the interrupt handler fills a
//! ring buffer and the polling loop drains it one byte at a time without
//! ever waiting.

use digitboard_hal::uart::{DataBits, Parity, StopBits};
use digitboard_hal::{UartConfig, UartRx, UartTx};
use embassy_rp::uart::{self, BufferedUartRx, BufferedUartTx};
use embedded_io::{Read, ReadReady, Write};

/// Convert the board UART settings into an `embassy_rp` config
pub fn uart_config(config: &UartConfig) -> uart::Config {
    let mut cfg = uart::Config::default();
    cfg.baudrate = config.baudrate;
    cfg.data_bits = match config.data_bits {
        DataBits::Five => uart::DataBits::DataBits5,
        DataBits::Six => uart::DataBits::DataBits6,
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    cfg.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    cfg.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    cfg
}

/// Receive half of the console
pub struct ConsoleRx {
    rx: BufferedUartRx,
}

impl ConsoleRx {
    pub fn new(rx: BufferedUartRx) -> Self {
        Self { rx }
    }
}

impl UartRx for ConsoleRx {
    type Error = uart::Error;

    fn try_read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        if !self.rx.read_ready()? {
            return Ok(None);
        }

        let mut byte = [0u8; 1];
        match self.rx.read(&mut byte)? {
            0 => Ok(None),
            _ => Ok(Some(byte[0])),
        }
    }
}

/// Transmit half of the console
pub struct ConsoleTx {
    tx: BufferedUartTx,
}

impl ConsoleTx {
    pub fn new(tx: BufferedUartTx) -> Self {
        Self { tx }
    }
}

impl UartTx for ConsoleTx {
    type Error = uart::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.tx.write_all(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Write::flush(&mut self.tx)
    }
}
