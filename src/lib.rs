//! Reset a USB device through its device node, without unplugging it.
#![warn(missing_docs)]

/// USB device reset control request.
pub mod ioctl;
/// Device node access through usbfs.
pub mod usbfs;

use displaydoc::Display;
use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use usbfs::Usbfs;

const DEFAULT_PROGRAM: &str = "usbreset";

#[derive(Debug, Display, Error)]
#[allow(missing_docs)]
pub enum Error {
    /// Usage: {program} <usb_device_path>
    Usage { program: String },
    /// Error opening device {path}: {source}
    Open { path: String, source: OsError },
    /// Error resetting device {path}: {source}
    Reset { path: String, source: OsError },
}

#[derive(Debug, Display, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
/// USB device {path} reset successfully
pub struct ResetDone {
    pub path: String,
}

/// An error reported by the operating system.
///
/// Displays as the bare system description, e.g. `No such file or directory`.
#[derive(Debug, Error)]
pub struct OsError(#[source] io::Error);

impl OsError {
    /// The underlying I/O error.
    pub fn io_error(&self) -> &io::Error {
        &self.0
    }
}

impl From<io::Error> for OsError {
    fn from(err: io::Error) -> Self {
        Self(err)
    }
}

impl fmt::Display for OsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // std renders OS errors as `strerror` text followed by ` (os error N)`.
        let text = self.0.to_string();
        let bare = self
            .0
            .raw_os_error()
            .and_then(|code| text.strip_suffix(&format!(" (os error {})", code)));

        f.write_str(bare.unwrap_or(&text))
    }
}

/// Trait to implement lower level access to a USB device node.
pub trait DeviceIo {
    /// Open handle on a device node. Dropping it releases the node.
    type Handle;

    /// Open the device node at `path`.
    fn open(&self, path: &Path) -> io::Result<Self::Handle>;

    /// Issue a USB device reset request on an open handle.
    fn usb_reset(&self, handle: &Self::Handle) -> io::Result<()>;
}

/// Resets USB devices through a [`DeviceIo`].
pub struct UsbReset<IO> {
    io: IO,
}

impl<IO: DeviceIo> UsbReset<IO> {
    /// Create an instance of [`UsbReset`].
    pub fn new(io: IO) -> Self {
        Self { io }
    }

    /// Consume the instance and return the underlying IO.
    pub fn into_inner(self) -> IO {
        self.io
    }

    /// Open the device node at `path`, reset the device and release the node.
    ///
    /// The handle is released whether or not the reset request succeeds.
    /// Nothing is retried.
    pub fn reset(&self, path: impl AsRef<Path>) -> Result<ResetDone, Error> {
        let path = path.as_ref();

        log::debug!("Opening device {}", path.display());
        let handle = self.io.open(path).map_err(|err| Error::Open {
            path: path.display().to_string(),
            source: err.into(),
        })?;

        log::trace!("Resetting device {}", path.display());
        let res = self.io.usb_reset(&handle);
        drop(handle);
        log::trace!("Closed device {}", path.display());

        res.map_err(|err| Error::Reset {
            path: path.display().to_string(),
            source: err.into(),
        })?;
        log::debug!("Device {} reset", path.display());

        Ok(ResetDone {
            path: path.display().to_string(),
        })
    }
}

/// Reset the USB device behind the usbfs node at `path`.
pub fn reset_device(path: impl AsRef<Path>) -> Result<ResetDone, Error> {
    UsbReset::new(Usbfs).reset(path)
}

/// Extract the device path from command line arguments, program name first.
///
/// Exactly one argument must follow the program name.
pub fn device_path_from_args<I>(args: I) -> Result<PathBuf, Error>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let program = args.next();

    match (args.next(), args.next()) {
        (Some(path), None) => Ok(PathBuf::from(path)),
        _ => Err(Error::Usage {
            program: program
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_else(|| DEFAULT_PROGRAM.to_string()),
        }),
    }
}
