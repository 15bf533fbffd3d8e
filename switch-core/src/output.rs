//! Report sink trait and error types.

use crate::types::Report;
use core::future::Future;

/// Error type for output operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    /// USB/communication I/O error.
    Io,
    /// Device not ready (e.g., USB not configured).
    NotReady,
    /// Endpoint busy.
    Busy,
}

/// Transport that delivers reports to the host.
///
/// This is the consumed side of the transport boundary: the emulator hands
/// it one freshly built report per polling cycle.
pub trait ReportSink {
    /// Submit a report for delivery.
    ///
    /// May wait until the host polls the endpoint.
    fn send(&mut self, report: &Report) -> impl Future<Output = Result<(), OutputError>>;

    /// Check if the host is ready to receive a report.
    fn is_ready(&self) -> bool;
}
