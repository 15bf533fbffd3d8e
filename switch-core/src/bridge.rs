//! SerialBridge: imports live pad input from an external serial source.
//!
//! # Wire format
//!
//! One frame per report cycle, five unsigned bytes:
//!
//! ```text
//! [X, Y, RX, RY, ButtonMask]
//! ```
//!
//! After the fifth byte arrives the bridge writes the same five bytes back in
//! the same order. Nothing is awaited from the far end after the echo.
//!
//! `ButtonMask` bits (bit 7 = MSB): B, Y, ZL, A, L, Minus, Capture, unused.

use crate::link::{LinkError, SerialLink};
use crate::types::{Buttons, Report, Stick};

/// Number of bytes in one bridge frame.
pub const FRAME_LEN: usize = 5;

/// Bit position in `ButtonMask` paired with the button it presses.
///
/// Bit 0 has no entry and is ignored.
pub const BUTTON_MAP: [(u8, Buttons); 7] = [
    (7, Buttons::B),
    (6, Buttons::Y),
    (5, Buttons::ZL),
    (4, Buttons::A),
    (3, Buttons::L),
    (2, Buttons::MINUS),
    (1, Buttons::CAPTURE),
];

/// Decode a `ButtonMask` byte into a button set.
#[must_use]
pub fn decode_buttons(mask: u8) -> Buttons {
    BUTTON_MAP
        .iter()
        .filter(|(bit, _)| mask & (1u8 << *bit) != 0)
        .fold(Buttons::NONE, |acc, &(_, button)| acc | button)
}

/// One decoded frame from the serial source.
///
/// Axis bytes are kept verbatim: the source already uses the 0-255,
/// centered-at-128 convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BridgeFrame {
    pub x: u8,
    pub y: u8,
    pub rx: u8,
    pub ry: u8,
    /// Raw `ButtonMask` byte.
    pub buttons: u8,
}

impl BridgeFrame {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; FRAME_LEN]) -> Self {
        Self {
            x: bytes[0],
            y: bytes[1],
            rx: bytes[2],
            ry: bytes[3],
            buttons: bytes[4],
        }
    }

    /// Bytes in wire order.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; FRAME_LEN] {
        [self.x, self.y, self.rx, self.ry, self.buttons]
    }

    /// Buttons pressed by this frame.
    #[inline]
    #[must_use]
    pub fn pressed(&self) -> Buttons {
        decode_buttons(self.buttons)
    }

    /// Copy axes and add the decoded buttons to `report`.
    ///
    /// The hat is left untouched.
    pub fn apply_to(&self, report: &mut Report) {
        report.buttons |= self.pressed();
        report.left_stick = Stick::new(self.x, self.y);
        report.right_stick = Stick::new(self.rx, self.ry);
    }
}

/// Request/response exchange with the external input source.
pub struct SerialBridge<L> {
    link: L,
}

impl<L: SerialLink> SerialBridge<L> {
    /// Create a bridge that owns the given link.
    pub fn new(link: L) -> Self {
        Self { link }
    }

    /// Read one frame and echo it back.
    ///
    /// Reads exactly [`FRAME_LEN`] bytes one at a time, then writes them back
    /// in the same order. A link error aborts the exchange: bytes read so far
    /// are dropped and nothing is echoed.
    pub async fn read_external_input(&mut self) -> Result<BridgeFrame, LinkError> {
        let mut bytes = [0u8; FRAME_LEN];
        for byte in bytes.iter_mut() {
            *byte = self.link.read_byte().await?;
        }

        for &byte in bytes.iter() {
            self.link.write_byte(byte).await?;
        }

        let frame = BridgeFrame::from_bytes(bytes);
        trace!("bridge frame: {:?}", frame);
        Ok(frame)
    }

    /// Get a reference to the serial link.
    pub fn link(&self) -> &L {
        &self.link
    }

    /// Get a mutable reference to the serial link.
    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }

    /// Give back the serial link.
    pub fn into_inner(self) -> L {
        self.link
    }
}
