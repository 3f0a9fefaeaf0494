use crate::dispatch::Connection;

use rusb::{DeviceHandle, GlobalContext};
use thiserror::Error;

/// Godex ships a handful of model families that all speak EZPL.
mod model;
pub use model::Model;

/// Search the list of available USB devices, find Godex printers and attach one.
mod attach;
pub use attach::{UsbDevice, UsbDriver};

/// Raw bulk transfers to the printer.
mod io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An USB error has occurred: {0}")]
    USBError(#[from] rusb::Error),

    #[error("The USB device for the printer offers no interface.")]
    NoInterface,

    #[error("The USB interface for the printer offers no descriptor.")]
    NoInterfaceDescriptor,

    #[error("The USB interface for the printer offers no bulk output endpoint.")]
    NoOutEndpoint,
}

pub struct Printer {
    handle: DeviceHandle<GlobalContext>,
    interface_number: u8,
    out_addr: u8,
    claimed: bool,
}

impl Connection for Printer {
    type Error = Error;

    fn send(&mut self, payload: &str) -> Result<(), Error> {
        self.write(io::terminated(payload).as_bytes())?;
        Ok(())
    }

    /// Release the interface. The device itself is closed once the handle drops.
    fn close(&mut self) -> Result<(), Error> {
        if self.claimed {
            self.claimed = false;
            self.handle.release_interface(self.interface_number)?;
        }

        Ok(())
    }
}
