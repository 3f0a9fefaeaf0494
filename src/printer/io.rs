use super::Printer;

use std::borrow::Cow;
use std::time::Duration;

const IO_TIMEOUT: Duration = Duration::from_secs(2);

/// Every EZPL command is terminated by CRLF, including the last one.
const TERMINATOR: &str = "\r\n";

impl Printer {
    pub(super) fn write(&self, mut data: &[u8]) -> Result<(), rusb::Error> {
        while !data.is_empty() {
            let written_bytes = self.handle.write_bulk(self.out_addr, data, IO_TIMEOUT)?;

            if written_bytes == 0 {
                return Err(rusb::Error::Io);
            }

            if written_bytes < data.len() {
                log::warn!(
                    "Short USB write ({} of {} bytes), sending the rest.",
                    written_bytes,
                    data.len()
                );
            }

            data = &data[written_bytes..];
        }

        Ok(())
    }
}

pub(super) fn terminated(payload: &str) -> Cow<'_, str> {
    if payload.ends_with(TERMINATOR) {
        Cow::Borrowed(payload)
    } else {
        Cow::Owned(format!("{}{}", payload, TERMINATOR))
    }
}
