//! Serial link trait and error types.

use core::future::Future;

/// Error type for serial link operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// No byte arrived within the link's timeout.
    ChannelTimeout,
    /// UART/communication I/O error.
    Io,
    /// UART framing error.
    Framing,
    /// Receive buffer overrun.
    Overrun,
}

/// Byte-at-a-time access to the external serial data source.
///
/// Implementations own their timeout: `read_byte` must resolve with
/// [`LinkError::ChannelTimeout`] instead of waiting forever.
pub trait SerialLink {
    /// Wait for the next byte from the far end.
    fn read_byte(&mut self) -> impl Future<Output = Result<u8, LinkError>>;

    /// Send one byte to the far end.
    fn write_byte(&mut self, byte: u8) -> impl Future<Output = Result<(), LinkError>>;
}

impl<T: SerialLink + ?Sized> SerialLink for &mut T {
    fn read_byte(&mut self) -> impl Future<Output = Result<u8, LinkError>> {
        T::read_byte(self)
    }

    fn write_byte(&mut self, byte: u8) -> impl Future<Output = Result<(), LinkError>> {
        T::write_byte(self, byte)
    }
}
