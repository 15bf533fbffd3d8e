//! Serial-fed Switch pad emulator for RP2040.
//!
//! This crate provides the embedded side of the pad: the USB HID transport,
//! the UART serial link and the board constants. Everything that decides
//! report contents lives in [`switch_core`].
//!
//! # Hardware Configuration
//!
//! | Function | GPIO | Description |
//! |----------|------|-------------|
//! | UART1 TX | 8    | Bridge echo out |
//! | UART1 RX | 9    | Bridge frames in (57600 baud, 8N1) |
//! | LED      | 25   | On-board LED (error indicator) |
//!
//! # Architecture
//!
//! The firmware uses the Embassy async runtime with three tasks:
//!
//! - **USB Task**: Manages the USB device stack
//! - **HID OUT Task**: Reads and drops OUT reports from the host
//! - **Pad Task**: Runs the [`PadEmulator`](switch_core::PadEmulator), one
//!   report per host poll
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)

#![no_std]

// Re-export core types for convenience
pub use switch_core::{
    decode_buttons, BridgeFrame, Buttons, EmulatorError, Hat, LinkError, MachineConfig,
    OutputError, PadEmulator, Report, ReportSink, ReportStateMachine, SerialLink, State, Stick,
    DEFAULT_CONFIG,
};

pub mod config;
pub mod uart_link;
pub mod usb_output;

pub use uart_link::UartLink;
pub use usb_output::{configure_usb_hid, PadReader, PadRequestHandler, PadWriter, UsbHidOutput};
