#![no_std]
#![no_main]

use defmt::{error, info};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::{UART1, USB};
use embassy_rp::uart::{Config as UartConfig, Uart};
use embassy_rp::usb::Driver;
use embassy_time::Delay;
use embassy_usb::class::hid::State;
use embassy_usb::{Builder, Config as UsbConfig};
use static_cell::StaticCell;
use switch_serial_pad::config::{
    BAUD_RATE, USB_MANUFACTURER, USB_MAX_POWER_MA, USB_PID, USB_PRODUCT, USB_VID,
};
use switch_serial_pad::{
    configure_usb_hid, PadEmulator, PadReader, PadRequestHandler, ReportStateMachine, UartLink,
    UsbHidOutput, DEFAULT_CONFIG,
};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    UART1_IRQ => embassy_rp::uart::InterruptHandler<UART1>;
    USBCTRL_IRQ => embassy_rp::usb::InterruptHandler<USB>;
});

type Emulator = PadEmulator<UartLink<'static>, Delay, UsbHidOutput<'static>>;

/// USB device configuration buffer.
static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static MSOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// HID state.
static HID_STATE: StaticCell<State> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("switch-serial-pad starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // --- UART Setup ---
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = BAUD_RATE;

    let uart = Uart::new(
        p.UART1,
        p.PIN_8, // TX
        p.PIN_9, // RX
        Irqs,
        p.DMA_CH0,
        p.DMA_CH1,
        uart_config,
    );
    let link = UartLink::new(uart);

    // --- USB Setup ---
    let usb_driver = Driver::new(p.USB, Irqs);

    let mut usb_config = UsbConfig::new(USB_VID, USB_PID);
    usb_config.manufacturer = Some(USB_MANUFACTURER);
    usb_config.product = Some(USB_PRODUCT);
    usb_config.max_power = USB_MAX_POWER_MA;
    usb_config.max_packet_size_0 = 64;

    let config_descriptor = CONFIG_DESCRIPTOR.init([0; 256]);
    let bos_descriptor = BOS_DESCRIPTOR.init([0; 256]);
    let msos_descriptor = MSOS_DESCRIPTOR.init([0; 256]);
    let control_buf = CONTROL_BUF.init([0; 64]);

    let mut builder = Builder::new(
        usb_driver,
        usb_config,
        config_descriptor,
        bos_descriptor,
        msos_descriptor,
        control_buf,
    );

    // Configure HID class
    let hid_state = HID_STATE.init(State::new());
    let (hid_reader, hid_writer) = configure_usb_hid(&mut builder, hid_state);

    // Build the USB device
    let usb_device = builder.build();

    let machine = ReportStateMachine::new(link, Delay, DEFAULT_CONFIG);
    let emulator = PadEmulator::new(machine, UsbHidOutput::new(hid_writer));

    // Optional: LED for error indication (on-board LED on Pico)
    let led = Output::new(p.PIN_25, Level::Low);

    // Spawn tasks (unwrap the SpawnToken, then spawn)
    spawner.spawn(usb_task(usb_device).unwrap());
    spawner.spawn(hid_out_task(hid_reader).unwrap());
    spawner.spawn(pad_task(emulator, led).unwrap());

    info!("switch-serial-pad initialized, waiting for host...");
}

/// USB device task - runs the USB stack.
#[embassy_executor::task]
async fn usb_task(mut device: embassy_usb::UsbDevice<'static, Driver<'static, USB>>) {
    device.run().await;
}

/// HID OUT task - drains OUT reports the host sends.
#[embassy_executor::task]
async fn hid_out_task(reader: PadReader<'static>) {
    let mut handler = PadRequestHandler;
    reader.run(false, &mut handler).await;
}

/// Pad task - produces one report per host poll.
#[embassy_executor::task]
async fn pad_task(mut emulator: Emulator, mut led: Output<'static>) {
    loop {
        // Wait for the host to configure us (again, after a reset)
        emulator.output_mut().wait_ready().await;
        info!("USB HID ready, state {:?}", emulator.machine().state());

        loop {
            match emulator.poll_once().await {
                Ok(Some(_)) => {}
                Ok(None) => break,
                Err(e) => {
                    error!("Cycle error: {:?}", e);
                    // Toggle LED to indicate error
                    led.toggle();
                }
            }
        }
    }
}
