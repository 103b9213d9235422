//! Pre-filling an answer by injecting it into the terminal input queue.

use std::io;

/// Injects text as if the user had typed it.
pub trait Prefill {
    /// # Errors
    ///
    /// Returns the OS error when injection fails.
    fn prefill(&self, text: &str) -> io::Result<()>;
}

/// Does nothing. Used where the platform offers no injection.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPrefill;

impl Prefill for NoPrefill {
    fn prefill(&self, _text: &str) -> io::Result<()> {
        Ok(())
    }
}

/// Pushes bytes into the stdin terminal with `TIOCSTI`.
///
/// Some kernels disable `TIOCSTI` for unprivileged processes, in which case
/// every call returns the `ioctl` error.
#[cfg(any(target_os = "linux", target_os = "macos"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrefill;

#[cfg(any(target_os = "linux", target_os = "macos"))]
impl Prefill for TerminalPrefill {
    fn prefill(&self, text: &str) -> io::Result<()> {
        for byte in text.bytes() {
            // SAFETY: TIOCSTI reads a single byte through the pointer, which
            // stays valid for the duration of the call.
            let ret = unsafe {
                libc::ioctl(
                    libc::STDIN_FILENO,
                    libc::TIOCSTI,
                    std::ptr::from_ref(&byte),
                )
            };
            if ret != 0 {
                return Err(io::Error::last_os_error());
            }
        }
        Ok(())
    }
}

/// The injection available on this platform.
#[must_use]
pub fn default_prefill() -> Box<dyn Prefill + Send> {
    #[cfg(any(target_os = "linux", target_os = "macos"))]
    {
        Box::new(TerminalPrefill)
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    {
        Box::new(NoPrefill)
    }
}
