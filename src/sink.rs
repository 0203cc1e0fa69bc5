//! Frame sink abstraction
//!
//! This module provides the [`Sink`] trait, the single write-side collaborator
//! of the [`Display`](crate::display::Display). The display calls
//! [`Sink::write_frame`] after every mutating operation with the complete
//! post-mutation frame.
//!
//! Provided sinks:
//!
//! - [`NullSink`] - keeps the display purely in memory
//! - [`Callback`] - forwards every frame to a closure (simulators, tests)
//! - `FramebufferDevice` - writes to the Linux framebuffer device (`std` feature)
//!
//! ## Example
//!
//! ```
//! use sense_hat_matrix::{Callback, Color, Display};
//!
//! let mut pushed = 0;
//! let mut display = Display::new(Callback::new(|_frame| pushed += 1), Default::default());
//! let _ = display.set_all(Color::GREEN);
//! let _ = display.set_pixel(0, 0, Color::RED);
//! drop(display);
//! assert_eq!(pushed, 2);
//! ```

use core::convert::Infallible;
use core::fmt::Debug;

use crate::frame::Frame;

type SinkResult<T, E> = core::result::Result<T, E>;

/// Consumer of rendered frames
///
/// Implement this trait to push frames to custom hardware or to observe the
/// display in tests. Every call receives the whole frame; the display never
/// sends partial updates.
pub trait Sink {
    /// Error type for sink operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Push a complete frame
    ///
    /// # Errors
    ///
    /// Returns an error if the frame could not be delivered.
    fn write_frame(&mut self, frame: &Frame) -> SinkResult<(), Self::Error>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    type Error = S::Error;

    fn write_frame(&mut self, frame: &Frame) -> SinkResult<(), Self::Error> {
        (**self).write_frame(frame)
    }
}

/// Sink that discards every frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NullSink;

impl Sink for NullSink {
    type Error = Infallible;

    fn write_frame(&mut self, _frame: &Frame) -> SinkResult<(), Self::Error> {
        Ok(())
    }
}

/// Sink invoking a closure with every frame
pub struct Callback<F> {
    callback: F,
}

impl<F> Callback<F>
where
    F: FnMut(&Frame),
{
    /// Wrap a closure
    pub fn new(callback: F) -> Self {
        Self { callback }
    }

    /// Unwrap the closure
    pub fn into_inner(self) -> F {
        self.callback
    }
}

impl<F> Debug for Callback<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Callback").finish_non_exhaustive()
    }
}

impl<F> Sink for Callback<F>
where
    F: FnMut(&Frame),
{
    type Error = Infallible;

    fn write_frame(&mut self, frame: &Frame) -> SinkResult<(), Self::Error> {
        (self.callback)(frame);
        Ok(())
    }
}
