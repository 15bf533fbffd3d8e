//! USB HID transport for pad reports.

use crate::config::POLL_MS;
use defmt::trace;
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_usb::class::hid::{
    HidReader, HidReaderWriter, HidWriter, ReportId, RequestHandler, State,
};
use embassy_usb::control::OutResponse;
use embassy_usb::Builder;
use switch_core::{OutputError, Report, ReportSink};

/// HID writer for one 8-byte IN report.
pub type PadWriter<'d> = HidWriter<'d, Driver<'d, USB>, { Report::SIZE }>;

/// HID reader for the 8-byte OUT report the host may send.
pub type PadReader<'d> = HidReader<'d, Driver<'d, USB>, { Report::SIZE }>;

/// Report descriptor of the HORI Pokken Tournament Pro Pad.
///
/// - 16 buttons
/// - hat switch (4 bits + 4 bits padding)
/// - 4 axes, 8 bits each (LX, LY, RX, RY)
/// - 1 vendor byte in, 8 vendor bytes out
#[rustfmt::skip]
pub const REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01,       // Usage Page (Generic Desktop)
    0x09, 0x05,       // Usage (Gamepad)
    0xA1, 0x01,       // Collection (Application)
    //
    // --- Buttons (16 buttons) ---
    0x15, 0x00,       //   Logical Minimum (0)
    0x25, 0x01,       //   Logical Maximum (1)
    0x35, 0x00,       //   Physical Minimum (0)
    0x45, 0x01,       //   Physical Maximum (1)
    0x75, 0x01,       //   Report Size (1)
    0x95, 0x10,       //   Report Count (16)
    0x05, 0x09,       //   Usage Page (Button)
    0x19, 0x01,       //   Usage Minimum (Button 1)
    0x29, 0x10,       //   Usage Maximum (Button 16)
    0x81, 0x02,       //   Input (Data, Variable, Absolute)
    //
    // --- Hat ---
    0x05, 0x01,       //   Usage Page (Generic Desktop)
    0x25, 0x07,       //   Logical Maximum (7)
    0x46, 0x3B, 0x01, //   Physical Maximum (315)
    0x75, 0x04,       //   Report Size (4)
    0x95, 0x01,       //   Report Count (1)
    0x65, 0x14,       //   Unit (English Rotation, Degrees)
    0x09, 0x39,       //   Usage (Hat Switch)
    0x81, 0x42,       //   Input (Data, Variable, Absolute, Null State)
    0x65, 0x00,       //   Unit (None)
    0x95, 0x01,       //   Report Count (1)
    0x81, 0x01,       //   Input (Constant) - padding
    //
    // --- Sticks ---
    0x26, 0xFF, 0x00, //   Logical Maximum (255)
    0x46, 0xFF, 0x00, //   Physical Maximum (255)
    0x09, 0x30,       //   Usage (X)
    0x09, 0x31,       //   Usage (Y)
    0x09, 0x32,       //   Usage (Z)
    0x09, 0x35,       //   Usage (Rz)
    0x75, 0x08,       //   Report Size (8)
    0x95, 0x04,       //   Report Count (4)
    0x81, 0x02,       //   Input (Data, Variable, Absolute)
    //
    // --- Vendor ---
    0x06, 0x00, 0xFF, //   Usage Page (Vendor Defined)
    0x09, 0x20,       //   Usage (0x20)
    0x95, 0x01,       //   Report Count (1)
    0x81, 0x02,       //   Input (Data, Variable, Absolute)
    0x0A, 0x21, 0x26, //   Usage (0x2621)
    0x95, 0x08,       //   Report Count (8)
    0x91, 0x02,       //   Output (Data, Variable, Absolute)
    //
    0xC0,             // End Collection
];

/// USB HID pad output.
///
/// Wraps an embassy-usb HID writer to send pad reports.
pub struct UsbHidOutput<'d> {
    writer: PadWriter<'d>,
    ready: bool,
}

impl<'d> UsbHidOutput<'d> {
    /// Create a new USB HID output from the given HID writer.
    pub fn new(writer: PadWriter<'d>) -> Self {
        Self {
            writer,
            ready: false,
        }
    }

    /// Wait until the device is configured by the host.
    pub async fn wait_ready(&mut self) {
        self.writer.ready().await;
        self.ready = true;
    }
}

impl ReportSink for UsbHidOutput<'_> {
    async fn send(&mut self, report: &Report) -> Result<(), OutputError> {
        if !self.ready {
            return Err(OutputError::NotReady);
        }
        self.writer.write(&report.to_bytes()).await.map_err(|_| {
            // Endpoint errors usually mean the host went away.
            self.ready = false;
            OutputError::Io
        })
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}

/// HID request handler for the pad.
///
/// OUT reports from the host are read and dropped; the pad has nothing to
/// react to.
pub struct PadRequestHandler;

impl RequestHandler for PadRequestHandler {
    fn get_report(&mut self, _id: ReportId, _buf: &mut [u8]) -> Option<usize> {
        None
    }

    fn set_report(&mut self, _id: ReportId, data: &[u8]) -> OutResponse {
        trace!("dropping {} byte OUT report", data.len());
        OutResponse::Accepted
    }

    fn set_idle_ms(&mut self, _id: Option<ReportId>, _duration_ms: u32) {}

    fn get_idle_ms(&mut self, _id: Option<ReportId>) -> Option<u32> {
        None
    }
}

/// Configure the USB HID class in the USB builder.
///
/// Returns the OUT report reader and the IN report writer.
pub fn configure_usb_hid<'d>(
    builder: &mut Builder<'d, Driver<'d, USB>>,
    state: &'d mut State<'d>,
) -> (PadReader<'d>, PadWriter<'d>) {
    let config = embassy_usb::class::hid::Config {
        report_descriptor: REPORT_DESCRIPTOR,
        request_handler: None,
        poll_ms: POLL_MS,
        max_packet_size: 64,
        hid_subclass: embassy_usb::class::hid::HidSubclass::No,
        hid_boot_protocol: embassy_usb::class::hid::HidBootProtocol::None,
    };

    HidReaderWriter::<_, { Report::SIZE }, { Report::SIZE }>::new(builder, state, config).split()
}
