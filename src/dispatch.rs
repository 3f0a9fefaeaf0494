use crate::label::LabelDocument;

use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error<E: std::error::Error + 'static> {
    #[error("no printer detected")]
    NoPrinter,

    #[error(transparent)]
    Driver(#[from] E),
}

/// Finds printers and opens connections to them.
pub trait Driver {
    type Device: Display;
    type Connection: Connection<Error = Self::Error>;
    type Error: std::error::Error + 'static;

    /// All reachable printers, in a stable order.
    fn discover(&self) -> Result<Vec<Self::Device>, Self::Error>;

    fn open(&self, device: &Self::Device) -> Result<Self::Connection, Self::Error>;
}

/// An open connection to a single printer.
pub trait Connection {
    type Error: std::error::Error + 'static;

    /// Transmit the payload as one job.
    fn send(&mut self, payload: &str) -> Result<(), Self::Error>;

    fn close(&mut self) -> Result<(), Self::Error>;
}

/// Keeps a connection open for as long as it lives.
/// If it is dropped before [`Session::close`], the connection is closed anyway.
pub struct Session<C: Connection> {
    connection: Option<C>,
}

impl<C: Connection> Session<C> {
    pub fn new(connection: C) -> Self {
        Self {
            connection: Some(connection),
        }
    }

    pub fn send(&mut self, payload: &str) -> Result<(), C::Error> {
        match self.connection.as_mut() {
            Some(connection) => connection.send(payload),
            None => Ok(()),
        }
    }

    pub fn close(mut self) -> Result<(), C::Error> {
        match self.connection.take() {
            Some(mut connection) => connection.close(),
            None => Ok(()),
        }
    }
}

impl<C: Connection> Drop for Session<C> {
    fn drop(&mut self) {
        if let Some(mut connection) = self.connection.take() {
            if let Err(err) = connection.close() {
                log::warn!("Failed to close the printer connection: {}", err);
            }
        }
    }
}

/// Print `document` on the first printer `driver` can find.
pub fn print<D: Driver>(driver: &D, document: &LabelDocument) -> Result<(), Error<D::Error>> {
    let devices = driver.discover()?;
    let device = devices.first().ok_or(Error::NoPrinter)?;

    if devices.len() > 1 {
        log::info!("Found {} printers, using the first one.", devices.len());
    }

    log::info!("Printing on {}", device);

    let mut session = Session::new(driver.open(device)?);
    session.send(document.as_str())?;

    log::info!("Sent {} bytes.", document.as_str().len());

    Ok(session.close()?)
}
