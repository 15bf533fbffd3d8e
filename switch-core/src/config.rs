//! Compile-time tunables for the report state machine.

use crate::machine::State;
use crate::types::STICK_CENTER;

/// Timing and defaults for [`ReportStateMachine`](crate::ReportStateMachine).
///
/// Customize this at compile-time by creating your own const, e.g.
///
/// ```
/// use switch_core::{MachineConfig, State, DEFAULT_CONFIG};
///
/// const SKIP_HANDSHAKE: MachineConfig = MachineConfig {
///     initial_state: State::Waiting,
///     ..DEFAULT_CONFIG
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MachineConfig {
    /// Axis value written to every stick axis before state overrides.
    pub stick_center: u8,
    /// Handshake cycle counts that press L and R together.
    pub shoulder_counts: [u32; 2],
    /// Handshake cycle counts that press A alone.
    pub confirm_counts: [u32; 2],
    /// Last handshake cycle; the next one hands over to the bridge.
    pub sync_cycles: u32,
    /// Wait performed by the `Connect` state.
    pub connect_hold_ms: u32,
    /// Wait performed by the `Hold` state.
    pub hold_ms: u32,
    /// State the machine starts in.
    pub initial_state: State,
}

/// Handshake timing tuned for a host polling the pad every millisecond.
///
/// - L+R at cycles 25 and 50
/// - A at cycles 75 and 100
/// - bridge from cycle 101 on
pub const DEFAULT_CONFIG: MachineConfig = MachineConfig {
    stick_center: STICK_CENTER,
    shoulder_counts: [25, 50],
    confirm_counts: [75, 100],
    sync_cycles: 100,
    connect_hold_ms: 500,
    hold_ms: 5,
    initial_state: State::SyncController,
};

impl Default for MachineConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}
