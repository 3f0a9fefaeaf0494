use super::{model::Model, Error, Printer};
use crate::dispatch::Driver;

use std::fmt::Display;

use rusb::{Device, DeviceDescriptor, GlobalContext};

/// USB Vendor ID for Godex printers
const VENDOR_ID: u16 = 0x195f;

/// A Godex printer seen on the bus, not yet opened.
pub struct UsbDevice {
    device: Device<GlobalContext>,
    product_id: u16,
    product: Option<String>,
}

impl UsbDevice {
    fn from_device(device: Device<GlobalContext>) -> Option<Self> {
        // Skip devices without a readable descriptor or from another vendor.
        let device_desc = device.device_descriptor().ok()?;

        if device_desc.vendor_id() != VENDOR_ID {
            return None;
        }

        let product = read_product(&device, &device_desc);

        Some(Self {
            product_id: device_desc.product_id(),
            device,
            product,
        })
    }

    pub fn bus_number(&self) -> u8 {
        self.device.bus_number()
    }

    pub fn address(&self) -> u8 {
        self.device.address()
    }

    pub fn model(&self) -> Option<Model> {
        self.product
            .as_deref()
            .and_then(|product| Model::try_from(product).ok())
    }
}

impl Display for UsbDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (bus {}, address {})",
            describe(self.model(), self.product.as_deref(), self.product_id),
            self.bus_number(),
            self.address()
        )
    }
}

/// Name a printer by its model if known, else by whatever the device tells us.
fn describe(model: Option<Model>, product: Option<&str>, product_id: u16) -> String {
    match (model, product) {
        (Some(model), _) => model.to_string(),
        (None, Some(product)) => format!("Godex {}", product),
        (None, None) => format!("Godex printer {:#06x}", product_id),
    }
}

/// Reading strings needs an open handle. Devices we may not open stay nameless.
fn read_product(device: &Device<GlobalContext>, device_desc: &DeviceDescriptor) -> Option<String> {
    let handle = device.open().ok()?;
    let product = handle.read_product_string_ascii(device_desc).ok()?;
    let product = product.trim();

    (!product.is_empty()).then(|| String::from(product))
}

fn select_interface(device: &Device<GlobalContext>) -> Result<(u8, u8), Error> {
    // Query the interface from the device. The printer class interface comes first.
    let config_desc = device.active_config_descriptor()?;
    let interface = config_desc.interfaces().next().ok_or(Error::NoInterface)?;

    let interface_desc = interface
        .descriptors()
        .next()
        .ok_or(Error::NoInterfaceDescriptor)?;

    // We only ever write, so the first bulk output endpoint is all we need.
    let out_addr = interface_desc
        .endpoint_descriptors()
        .find(|desc| {
            desc.transfer_type() == rusb::TransferType::Bulk
                && desc.direction() == rusb::Direction::Out
        })
        .map(|desc| desc.address())
        .ok_or(Error::NoOutEndpoint)?;

    Ok((interface.number(), out_addr))
}

impl Printer {
    /// Open the device and claim its printer interface.
    pub fn attach(usb_device: &UsbDevice) -> Result<Self, Error> {
        let device = &usb_device.device;

        // Try to open the USB device, giving us a handle.
        // A kernel driver (usblp) would otherwise hold the interface.
        let handle = device.open()?;

        if let Err(err) = handle.set_auto_detach_kernel_driver(true) {
            log::debug!("Kernel driver auto-detach unavailable: {}", err);
        }

        let (interface_number, out_addr) = select_interface(device)?;
        handle.claim_interface(interface_number)?;

        Ok(Printer {
            handle,
            interface_number,
            out_addr,
            claimed: true,
        })
    }
}

/// Discovers Godex printers on USB.
#[derive(Debug, Default, Copy, Clone)]
pub struct UsbDriver;

impl UsbDriver {
    pub fn new() -> Self {
        Self
    }
}

impl Driver for UsbDriver {
    type Device = UsbDevice;
    type Connection = Printer;
    type Error = Error;

    fn discover(&self) -> Result<Vec<UsbDevice>, Error> {
        let mut devices: Vec<_> = rusb::DeviceList::new()?
            .iter()
            .filter_map(UsbDevice::from_device)
            .collect();

        // Keep the order stable between runs.
        devices.sort_by_key(|d| (d.bus_number(), d.address()));

        for device in &devices {
            log::debug!("Found {}", device);
        }

        Ok(devices)
    }

    fn open(&self, device: &UsbDevice) -> Result<Printer, Error> {
        Printer::attach(device)
    }
}
