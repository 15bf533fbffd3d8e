//! Board and USB identity constants.

use embassy_time::Duration;

/// Serial link speed, 8N1.
pub const BAUD_RATE: u32 = 57_600;

/// Longest wait for a single bridge byte before the cycle is abandoned.
pub const BYTE_TIMEOUT: Duration = Duration::from_secs(1);

/// HORI Pokken Tournament Pro Pad, which the Switch accepts as a wired pad.
pub const USB_VID: u16 = 0x0F0D;
pub const USB_PID: u16 = 0x0092;
pub const USB_MANUFACTURER: &str = "HORI CO.,LTD.";
pub const USB_PRODUCT: &str = "POKKEN CONTROLLER";

/// Bus power requested from the host, in mA.
pub const USB_MAX_POWER_MA: u16 = 500;

/// Interrupt endpoint polling interval.
pub const POLL_MS: u8 = 1;
