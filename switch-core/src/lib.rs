//! Platform-agnostic core of a serial-fed Switch pad emulator.
//!
//! The host polls the pad for a report every cycle. This crate decides what
//! that report contains:
//!
//! - right after plugging in, a scripted L+R / A sequence that gets the pad
//!   accepted as a controller
//! - afterwards, live stick and button state relayed from another device over
//!   a serial link
//!
//! It has no platform-specific dependencies. The serial link, the delay and
//! the USB transport are injected through traits, so the whole crate runs in
//! host tests.
//!
//! # Overview
//!
//! - [`types`]: Report data ([`Report`], [`Buttons`], [`Stick`], [`Hat`])
//! - [`bridge`]: Five-byte serial protocol ([`SerialBridge`], [`BridgeFrame`])
//! - [`machine`]: Report state machine ([`ReportStateMachine`], [`State`])
//! - [`emulator`]: One-report-per-poll driver ([`PadEmulator`])
//! - [`link`]: Serial link trait ([`SerialLink`])
//! - [`output`]: Report sink trait ([`ReportSink`])
//! - [`config`]: Tunables ([`MachineConfig`], [`DEFAULT_CONFIG`])
//!
//! # Serial Protocol
//!
//! ```text
//! -> [X, Y, RX, RY, ButtonMask]
//! <- [X, Y, RX, RY, ButtonMask]   (echo)
//! ```
//!
//! The sending side runs at 57600 baud. A client pressing A with both
//! sticks centered writes:
//!
//! ```rust
//! use switch_core::{BridgeFrame, Buttons};
//!
//! let frame = BridgeFrame {
//!     x: 128,
//!     y: 128,
//!     rx: 128,
//!     ry: 128,
//!     buttons: 0b0001_0000,
//! };
//! assert_eq!(frame.to_bytes(), [128, 128, 128, 128, 0b0001_0000]);
//! assert_eq!(frame.pressed(), Buttons::A);
//! ```
//!
//! # Example
//!
//! ```rust
//! use switch_core::{decode_buttons, Buttons};
//!
//! assert_eq!(decode_buttons(0b1001_0000), Buttons::B | Buttons::A);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Log and derive `Format` through defmt (for embedded logging)

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

// This must go first so the logging macros are visible to the other modules.
mod fmt;

pub mod bridge;
pub mod config;
pub mod emulator;
pub mod link;
pub mod machine;
pub mod output;
pub mod types;

#[cfg(test)]
mod testing;

// Re-export main types at crate root
pub use bridge::{decode_buttons, BridgeFrame, SerialBridge, BUTTON_MAP, FRAME_LEN};
pub use config::{MachineConfig, DEFAULT_CONFIG};
pub use emulator::{EmulatorError, PadEmulator};
pub use link::{LinkError, SerialLink};
pub use machine::{ReportStateMachine, State};
pub use output::{OutputError, ReportSink};
pub use types::{Buttons, Hat, Report, Stick, STICK_CENTER};
