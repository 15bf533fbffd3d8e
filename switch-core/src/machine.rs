//! ReportStateMachine: builds one report per host polling cycle.
//!
//! The machine starts in [`State::SyncController`], plays a fixed button
//! script the Switch expects from a freshly plugged pad, then settles in
//! [`State::WaitBridge`] where every report comes from the serial bridge.
//!
//! ```text
//! SyncController ──(count > sync_cycles)──┐
//! Connect ──(connect_hold_ms)─────────────┤
//! Waiting ────────────────────────────────┼──> WaitBridge ⟲
//! Hold ──(hold_ms)────────────────────────┘
//! ```
//!
//! Every state except `WaitBridge` is left after at most one visit; nothing
//! leads back out of `WaitBridge`.

use crate::bridge::SerialBridge;
use crate::config::MachineConfig;
use crate::link::{LinkError, SerialLink};
use crate::types::{Buttons, Report};
use embedded_hal_async::delay::DelayNs;

/// Report-generation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Scripted L+R / A presses that get the pad accepted by the host.
    SyncController,
    /// Hold L+R once, then hand over to the bridge.
    Connect,
    /// One neutral passthrough cycle.
    Waiting,
    /// Short pause, then hand over to the bridge.
    Hold,
    /// Relay external input from the serial bridge. Absorbing.
    WaitBridge,
}

/// Owns the current [`State`] and everything needed to produce reports.
pub struct ReportStateMachine<L, D> {
    state: State,
    /// Cycles spent in `SyncController`; zero everywhere else.
    sync_count: u32,
    config: MachineConfig,
    bridge: SerialBridge<L>,
    delay: D,
}

impl<L: SerialLink, D: DelayNs> ReportStateMachine<L, D> {
    /// Create a machine starting in `config.initial_state`.
    pub fn new(link: L, delay: D, config: MachineConfig) -> Self {
        Self {
            state: config.initial_state,
            sync_count: 0,
            config,
            bridge: SerialBridge::new(link),
            delay,
        }
    }

    /// Produce the report for this cycle and apply any state transition.
    ///
    /// The report always starts from [`Report::neutral`]. Only `WaitBridge`
    /// can fail, when the serial link does; the state is unchanged then.
    pub async fn advance(&mut self) -> Result<Report, LinkError> {
        let mut report = Report::neutral(self.config.stick_center);

        match self.state {
            State::SyncController => {
                // The counter stops at `sync_cycles`, so it cannot overflow.
                if self.sync_count >= self.config.sync_cycles {
                    self.sync_count = 0;
                    self.transition(State::WaitBridge);
                } else {
                    self.sync_count += 1;
                    let count = self.sync_count;

                    if self.config.shoulder_counts.contains(&count) {
                        trace!("handshake {}: L+R", count);
                        report.buttons |= Buttons::L | Buttons::R;
                    } else if self.config.confirm_counts.contains(&count) {
                        trace!("handshake {}: A", count);
                        report.buttons |= Buttons::A;
                    }
                }
            }
            State::Connect => {
                report.buttons |= Buttons::L | Buttons::R;
                self.delay.delay_ms(self.config.connect_hold_ms).await;
                self.transition(State::WaitBridge);
            }
            State::Waiting => {
                self.transition(State::WaitBridge);
            }
            State::Hold => {
                self.delay.delay_ms(self.config.hold_ms).await;
                self.transition(State::WaitBridge);
            }
            State::WaitBridge => match self.bridge.read_external_input().await {
                Ok(frame) => frame.apply_to(&mut report),
                Err(e) => {
                    warn!("serial bridge failed: {:?}", e);
                    return Err(e);
                }
            },
        }

        Ok(report)
    }

    fn transition(&mut self, next: State) {
        debug!("state {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Current state, for diagnostics.
    #[inline]
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Cycles counted so far in `SyncController`.
    #[inline]
    #[must_use]
    pub fn sync_count(&self) -> u32 {
        self.sync_count
    }

    /// Get a reference to the configuration in use.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Get a mutable reference to the serial bridge.
    pub fn bridge_mut(&mut self) -> &mut SerialBridge<L> {
        &mut self.bridge
    }

    /// Get a reference to the delay provider.
    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Decompose the machine into its link and delay.
    pub fn into_parts(self) -> (L, D) {
        (self.bridge.into_inner(), self.delay)
    }
}
