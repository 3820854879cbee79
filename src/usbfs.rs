use super::*;
use std::fs::{File, OpenOptions};
use std::os::unix::io::AsRawFd;

/// Device node access through the kernel's usbfs interface.
///
/// Nodes are opened write-only, which is enough for Linux usbfs to accept
/// the reset request.
#[derive(Debug, Clone, Copy, Default)]
pub struct Usbfs;

impl DeviceIo for Usbfs {
    type Handle = File;

    fn open(&self, path: &Path) -> io::Result<Self::Handle> {
        OpenOptions::new().write(true).open(path)
    }

    fn usb_reset(&self, handle: &Self::Handle) -> io::Result<()> {
        let fd = handle.as_raw_fd();
        log::trace!(
            "Issuing USBDEVFS_RESET ({}) on fd {}",
            ioctl::USBDEVFS_RESET,
            fd
        );
        // SAFETY: `fd` stays open for the duration of the call, it is owned by `handle`.
        unsafe { ioctl::usbdevfs_reset(fd) }?;

        Ok(())
    }
}
