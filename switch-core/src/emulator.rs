//! PadEmulator: drives the state machine once per host polling cycle.

use crate::link::{LinkError, SerialLink};
use crate::machine::ReportStateMachine;
use crate::output::{OutputError, ReportSink};
use crate::types::Report;
use embedded_hal_async::delay::DelayNs;

/// Connects a [`ReportStateMachine`] to a [`ReportSink`].
///
/// # Error Handling
///
/// When the serial link fails, the emulator sends a neutral report so the
/// host never keeps acting on the last relayed input.
pub struct PadEmulator<L, D, O> {
    machine: ReportStateMachine<L, D>,
    output: O,
}

impl<L: SerialLink, D: DelayNs, O: ReportSink> PadEmulator<L, D, O> {
    /// Create an emulator from a state machine and report sink.
    pub fn new(machine: ReportStateMachine<L, D>, output: O) -> Self {
        Self { machine, output }
    }

    /// Run one polling cycle.
    ///
    /// Returns `Ok(None)` without touching the machine when the sink is not
    /// ready, otherwise the report that was submitted.
    pub async fn poll_once(&mut self) -> Result<Option<Report>, EmulatorError> {
        if !self.output.is_ready() {
            return Ok(None);
        }

        match self.machine.advance().await {
            Ok(report) => {
                self.output
                    .send(&report)
                    .await
                    .map_err(EmulatorError::Output)?;
                Ok(Some(report))
            }
            Err(e) => {
                // Send neutral report to prevent stale inputs
                let neutral = Report::neutral(self.machine.config().stick_center);
                let _ = self.output.send(&neutral).await;
                Err(EmulatorError::Link(e))
            }
        }
    }

    /// Get a reference to the state machine.
    pub fn machine(&self) -> &ReportStateMachine<L, D> {
        &self.machine
    }

    /// Get a mutable reference to the state machine.
    pub fn machine_mut(&mut self) -> &mut ReportStateMachine<L, D> {
        &mut self.machine
    }

    /// Get a reference to the report sink.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the report sink.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Decompose the emulator into its state machine and report sink.
    pub fn into_parts(self) -> (ReportStateMachine<L, D>, O) {
        (self.machine, self.output)
    }
}

/// Error type for a polling cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EmulatorError {
    /// Error from the serial link.
    Link(LinkError),
    /// Error from the report sink.
    Output(OutputError),
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::config::{MachineConfig, DEFAULT_CONFIG};
    use crate::machine::State;
    use crate::testing::{MockDelay, MockLink, MockSink};
    use crate::types::{Buttons, Stick, STICK_CENTER};
    use embassy_futures::block_on;

    fn emulator(state: State, incoming: &[u8]) -> PadEmulator<MockLink, MockDelay, MockSink> {
        let config = MachineConfig {
            initial_state: state,
            ..DEFAULT_CONFIG
        };
        let machine = ReportStateMachine::new(MockLink::new(incoming), MockDelay::default(), config);
        PadEmulator::new(machine, MockSink::new())
    }

    #[test]
    fn test_emulator_forwards_report() {
        let mut emu = emulator(State::WaitBridge, &[10, 200, 5, 250, 0b1001_0000]);

        let report = block_on(emu.poll_once()).unwrap().unwrap();

        assert_eq!(report.buttons, Buttons::B | Buttons::A);
        assert_eq!(emu.output().sent.len(), 1);
        assert_eq!(emu.output().sent[0], report);
    }

    #[test]
    fn test_emulator_skips_when_not_ready() {
        let mut emu = emulator(State::SyncController, &[]);
        emu.output_mut().ready = false;

        assert_eq!(block_on(emu.poll_once()), Ok(None));
        assert_eq!(emu.machine().sync_count(), 0);
        assert!(emu.output().sent.is_empty());
    }

    #[test]
    fn test_emulator_sends_neutral_on_link_error() {
        let mut emu = emulator(State::WaitBridge, &[1, 2, 3]);

        let result = block_on(emu.poll_once());

        assert_eq!(result, Err(EmulatorError::Link(LinkError::ChannelTimeout)));
        assert_eq!(emu.output().sent.len(), 1);
        assert_eq!(emu.output().sent[0], Report::neutral(STICK_CENTER));
        assert_eq!(emu.machine().state(), State::WaitBridge);
    }

    #[test]
    fn test_emulator_surfaces_every_link_error() {
        let mut emu = emulator(State::WaitBridge, &[]);

        for _ in 0..3 {
            assert_eq!(
                block_on(emu.poll_once()),
                Err(EmulatorError::Link(LinkError::ChannelTimeout))
            );
        }
        assert_eq!(emu.output().sent, [Report::neutral(STICK_CENTER); 3]);

        emu.machine_mut()
            .bridge_mut()
            .link_mut()
            .push(&[128, 128, 128, 128, 0b0001_0000]);
        let report = block_on(emu.poll_once()).unwrap().unwrap();
        assert_eq!(report.buttons, Buttons::A);
        assert_eq!(emu.machine().state(), State::WaitBridge);
    }

    #[test]
    fn test_emulator_reports_output_error() {
        let mut emu = emulator(State::Waiting, &[]);
        emu.output_mut().fail_with = Some(OutputError::Io);

        let result = block_on(emu.poll_once());

        assert_eq!(result, Err(EmulatorError::Output(OutputError::Io)));
        assert_eq!(emu.machine().state(), State::WaitBridge);
    }

    #[test]
    fn test_emulator_reconfigure_keeps_bridge_state() {
        let mut emu = emulator(State::SyncController, &[]);
        for _ in 0..101 {
            block_on(emu.poll_once()).unwrap();
        }

        // Host resets the bus, then configures the device again.
        emu.output_mut().ready = false;
        assert_eq!(block_on(emu.poll_once()), Ok(None));
        emu.output_mut().ready = true;
        assert_eq!(emu.machine().state(), State::WaitBridge);

        emu.machine_mut()
            .bridge_mut()
            .link_mut()
            .push(&[128, 128, 128, 128, 0]);
        let report = block_on(emu.poll_once()).unwrap().unwrap();
        assert_eq!(report, Report::neutral(STICK_CENTER));
        assert_eq!(emu.machine().sync_count(), 0);
    }

    #[test]
    fn test_emulator_full_session() {
        let mut emu = emulator(State::SyncController, &[]);

        for _ in 0..101 {
            block_on(emu.poll_once()).unwrap();
        }
        assert_eq!(emu.machine().state(), State::WaitBridge);

        emu.machine_mut()
            .bridge_mut()
            .link_mut()
            .push(&[0, 255, 0, 255, 0b0000_1000]);
        let report = block_on(emu.poll_once()).unwrap().unwrap();

        assert_eq!(report.buttons, Buttons::L);
        assert_eq!(report.left_stick, Stick::new(0, 255));

        let (_, sink) = emu.into_parts();
        assert_eq!(sink.sent.len(), 102);
        let pressed = sink.sent.iter().filter(|r| !r.buttons.is_empty()).count();
        // Four handshake presses plus the relayed L.
        assert_eq!(pressed, 5);
    }
}
