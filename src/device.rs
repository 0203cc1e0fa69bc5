//! Linux framebuffer device sink (requires `std` feature)
//!
//! The LED matrix driver exposes the matrix as a 128-byte framebuffer device,
//! usually `/dev/fb1`. [`FramebufferDevice`] writes every frame to offset 0
//! of that device. On Unix the device is opened with `O_SYNC`, so a write
//! returns once the frame has reached the driver. Opening the same device
//! twice is not supported.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sense_hat_matrix::{Display, FramebufferDevice, StdDelay};
//!
//! let device = match FramebufferDevice::open(FramebufferDevice::DEFAULT_PATH) {
//!     Ok(device) => device,
//!     Err(_) => return,
//! };
//! let mut display = Display::new(device, Default::default());
//! let _ = display.show_str("Hello", &mut StdDelay);
//! ```

use std::fs::{File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use embedded_hal::delay::DelayNs;

use crate::config::FRAME_BYTES;
use crate::frame::Frame;
use crate::sink::Sink;

/// Sink writing frames to a framebuffer device
#[derive(Debug)]
pub struct FramebufferDevice {
    file: File,
    path: PathBuf,
}

impl FramebufferDevice {
    /// Device node of the LED matrix on a stock system
    pub const DEFAULT_PATH: &'static str = "/dev/fb1";

    /// Open the device read-write and synchronous, and turn every pixel off
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the device cannot be opened or written; the
    /// matrix is unavailable in that case.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let mut options = OpenOptions::new();
        options.read(true).write(true);
        #[cfg(unix)]
        options.custom_flags(libc::O_SYNC);
        let file = options.open(path)?;
        let mut device = Self {
            file,
            path: path.to_path_buf(),
        };
        device.write_bytes(&[0u8; FRAME_BYTES])?;
        log::debug!("opened {}", device.path.display());
        Ok(device)
    }

    /// Path the device was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_bytes(&mut self, bytes: &[u8; FRAME_BYTES]) -> io::Result<()> {
        self.file.seek(SeekFrom::Start(0))?;
        self.file.write_all(bytes)?;
        self.file.flush()
    }
}

impl Sink for FramebufferDevice {
    type Error = io::Error;

    fn write_frame(&mut self, frame: &Frame) -> io::Result<()> {
        self.write_bytes(&frame.to_bytes())
    }
}

impl Drop for FramebufferDevice {
    fn drop(&mut self) {
        if let Err(err) = self.file.sync_all() {
            log::error!("error closing {}: {}", self.path.display(), err);
        }
    }
}

/// [`DelayNs`] implementation sleeping the current thread
#[derive(Clone, Copy, Debug, Default)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_us(&mut self, us: u32) {
        thread::sleep(Duration::from_micros(u64::from(us)));
    }

    fn delay_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
