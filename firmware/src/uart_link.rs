//! UART-backed serial link for the bridge.
//!
//! Uses UART1 by default:
//! - GPIO 8: TX
//! - GPIO 9: RX

use crate::config::BYTE_TIMEOUT;
use embassy_rp::uart::{Async, Error as UartError, Uart};
use embassy_time::{with_timeout, Duration};
use switch_core::{LinkError, SerialLink};

/// Convert UART errors to [`LinkError`].
///
/// This is a helper function instead of a `From` impl to avoid orphan rule issues
/// (both `UartError` and `LinkError` are defined in external crates).
#[inline]
fn uart_error_to_link_error(e: UartError) -> LinkError {
    match e {
        UartError::Framing => LinkError::Framing,
        UartError::Overrun => LinkError::Overrun,
        _ => LinkError::Io,
    }
}

/// Full-duplex UART link: reads bridge frames and writes the echo.
pub struct UartLink<'d> {
    uart: Uart<'d, Async>,
    timeout: Duration,
}

impl<'d> UartLink<'d> {
    /// Create a link using the default per-byte timeout.
    #[must_use]
    pub fn new(uart: Uart<'d, Async>) -> Self {
        Self::with_timeout(uart, BYTE_TIMEOUT)
    }

    /// Create a link with a custom per-byte timeout.
    #[must_use]
    pub fn with_timeout(uart: Uart<'d, Async>, timeout: Duration) -> Self {
        Self { uart, timeout }
    }
}

impl SerialLink for UartLink<'_> {
    async fn read_byte(&mut self) -> Result<u8, LinkError> {
        let mut byte = [0u8; 1];
        with_timeout(self.timeout, self.uart.read(&mut byte))
            .await
            .map_err(|_| LinkError::ChannelTimeout)?
            .map_err(uart_error_to_link_error)?;
        Ok(byte[0])
    }

    async fn write_byte(&mut self, byte: u8) -> Result<(), LinkError> {
        self.uart
            .write(&[byte])
            .await
            .map_err(uart_error_to_link_error)
    }
}
