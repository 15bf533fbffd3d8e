//! Mock link, sink and delay shared by the unit tests.

extern crate std;

use crate::link::{LinkError, SerialLink};
use crate::output::{OutputError, ReportSink};
use crate::types::Report;
use core::future::Future;
use embedded_hal_async::delay::DelayNs;
use std::collections::VecDeque;
use std::vec::Vec;

/// Serial link fed from a byte queue; times out once the queue is empty.
pub struct MockLink {
    incoming: VecDeque<u8>,
    pub written: Vec<u8>,
    pub fail_writes: bool,
}

impl MockLink {
    pub fn new(incoming: &[u8]) -> Self {
        Self {
            incoming: incoming.iter().copied().collect(),
            written: Vec::new(),
            fail_writes: false,
        }
    }

    pub fn push(&mut self, bytes: &[u8]) {
        self.incoming.extend(bytes.iter().copied());
    }

    pub fn is_drained(&self) -> bool {
        self.incoming.is_empty()
    }
}

impl SerialLink for MockLink {
    fn read_byte(&mut self) -> impl Future<Output = Result<u8, LinkError>> {
        core::future::ready(self.incoming.pop_front().ok_or(LinkError::ChannelTimeout))
    }

    fn write_byte(&mut self, byte: u8) -> impl Future<Output = Result<(), LinkError>> {
        let result = if self.fail_writes {
            Err(LinkError::Io)
        } else {
            self.written.push(byte);
            Ok(())
        };
        core::future::ready(result)
    }
}

/// Delay that records requested durations instead of waiting.
#[derive(Default)]
pub struct MockDelay {
    pub waits_ms: Vec<u32>,
    pub total_ns: u64,
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.push(ms);
        self.total_ns += u64::from(ms) * 1_000_000;
    }
}

/// Report sink that collects every report it is given.
pub struct MockSink {
    pub sent: Vec<Report>,
    pub ready: bool,
    pub fail_with: Option<OutputError>,
}

impl MockSink {
    pub fn new() -> Self {
        Self {
            sent: Vec::new(),
            ready: true,
            fail_with: None,
        }
    }
}

impl ReportSink for MockSink {
    fn send(&mut self, report: &Report) -> impl Future<Output = Result<(), OutputError>> {
        let result = match self.fail_with {
            Some(err) => Err(err),
            None => {
                self.sent.push(*report);
                Ok(())
            }
        };
        core::future::ready(result)
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}
