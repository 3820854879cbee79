use nix::sys::ioctl::ioctl_num_type;

/// Control code of the usbfs `USBDEVFS_RESET` request, `_IO('U', 20)`.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub const USBDEVFS_RESET: ioctl_num_type = nix::request_code_none!(b'U', 20);

/// Control code of the usbfs `USBDEVFS_RESET` request.
///
/// This platform has no usbfs encoding, so the value Linux uses on x86 and
/// ARM is assumed. It may be wrong where the request is numbered differently.
#[cfg(not(any(target_os = "linux", target_os = "android")))]
pub const USBDEVFS_RESET: ioctl_num_type = 21780;

nix::ioctl_none_bad!(
    /// Ask the kernel to reset the USB device behind `fd`.
    usbdevfs_reset,
    USBDEVFS_RESET
);
