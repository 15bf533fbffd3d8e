//! Core report types: Buttons, Hat, Stick, Report.

use core::ops::{BitOr, BitOrAssign};

/// Default analog axis midpoint.
pub const STICK_CENTER: u8 = 128;

/// Button state represented as a bitfield.
///
/// Bit positions follow the wired Pokken-style pad report, so [`Buttons::raw`]
/// can be written to the wire as-is. Flags are additive: any combination may
/// be set at once.
///
/// # Example
///
/// ```
/// use switch_core::Buttons;
///
/// let buttons = Buttons::L | Buttons::R;
/// assert!(buttons.contains(Buttons::L));
/// assert!(buttons.contains(Buttons::R));
/// assert!(!buttons.contains(Buttons::A));
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Buttons(pub u16);

impl Buttons {
    pub const Y: Self = Self(1 << 0);
    pub const B: Self = Self(1 << 1);
    pub const A: Self = Self(1 << 2);
    pub const X: Self = Self(1 << 3);
    pub const L: Self = Self(1 << 4);
    pub const R: Self = Self(1 << 5);
    pub const ZL: Self = Self(1 << 6);
    pub const ZR: Self = Self(1 << 7);
    pub const MINUS: Self = Self(1 << 8);
    pub const PLUS: Self = Self(1 << 9);
    pub const LSTICK: Self = Self(1 << 10); // Left stick press
    pub const RSTICK: Self = Self(1 << 11); // Right stick press
    pub const HOME: Self = Self(1 << 12);
    pub const CAPTURE: Self = Self(1 << 13);

    /// No buttons pressed.
    pub const NONE: Self = Self(0);

    /// Check if the given button(s) are pressed.
    #[inline]
    #[must_use]
    pub const fn contains(self, button: Buttons) -> bool {
        (self.0 & button.0) == button.0
    }

    /// Get the raw u16 value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Check if no buttons are pressed.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Buttons {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Buttons {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Directional pad position.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Hat {
    Up = 0,
    UpRight = 1,
    Right = 2,
    DownRight = 3,
    Down = 4,
    DownLeft = 5,
    Left = 6,
    UpLeft = 7,
    /// No direction pressed.
    #[default]
    Center = 8,
}

/// Analog stick with X/Y axes.
///
/// Range: 0-255, centered at [`STICK_CENTER`] by default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Stick {
    pub x: u8,
    pub y: u8,
}

impl Stick {
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Stick resting at `center` on both axes.
    #[must_use]
    pub const fn centered(center: u8) -> Self {
        Self {
            x: center,
            y: center,
        }
    }

    pub const NEUTRAL: Self = Self::centered(STICK_CENTER);
}

impl Default for Stick {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// One complete controller snapshot sent to the host.
///
/// Wire layout (8 bytes):
/// `[buttons_lo, buttons_hi, hat, lx, ly, rx, ry, vendor]`
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Report {
    pub buttons: Buttons,
    pub hat: Hat,
    pub left_stick: Stick,
    pub right_stick: Stick,
}

impl Report {
    /// Size of the serialized report in bytes.
    pub const SIZE: usize = 8;

    /// Report with no buttons, hat centered and both sticks at `center`.
    #[must_use]
    pub const fn neutral(center: u8) -> Self {
        Self {
            buttons: Buttons::NONE,
            hat: Hat::Center,
            left_stick: Stick::centered(center),
            right_stick: Stick::centered(center),
        }
    }

    /// Serialize the report for the interrupt IN endpoint.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let buttons = self.buttons.raw().to_le_bytes();
        [
            buttons[0],
            buttons[1],
            self.hat as u8,
            self.left_stick.x,
            self.left_stick.y,
            self.right_stick.x,
            self.right_stick.y,
            0,
        ]
    }
}
