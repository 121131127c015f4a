//! Character transport abstraction.
//!
//! The interpreter never talks to hardware directly. The host wires up a
//! UART, USB CDC endpoint or test double by implementing [`Serial`], and
//! opening or configuring that port stays the host's job.

use core::fmt;

use heapless::String;

/// A byte-oriented, non-blocking character transport.
pub trait Serial {
    /// Associated error type
    type Error: fmt::Debug;

    /// Read one pending character.
    ///
    /// Must not block: returns `Ok(None)` when nothing is available.
    fn read(&mut self) -> Result<Option<u8>, Self::Error>;

    /// Write one character.
    fn write(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Write a whole string.
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for byte in s.bytes() {
            self.write(byte)?;
        }
        Ok(())
    }
}

impl<S: Serial + ?Sized> Serial for &mut S {
    type Error = S::Error;

    fn read(&mut self) -> Result<Option<u8>, Self::Error> {
        (**self).read()
    }

    fn write(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).write(byte)
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        (**self).write_str(s)
    }
}

/// [`fmt::Write`] adapter over a [`Serial`] sink.
///
/// `fmt::Error` carries no payload, so the first transport error is kept
/// here and handed back by [`finish`](Self::finish).
pub struct SerialWriter<'a, S: Serial> {
    serial: &'a mut S,
    error: Option<S::Error>,
}

impl<'a, S: Serial> SerialWriter<'a, S> {
    /// Wrap a transport.
    pub fn new(serial: &'a mut S) -> Self {
        Self {
            serial,
            error: None,
        }
    }

    /// Convert the outcome of a formatting run into a transport result.
    ///
    /// A stored transport error takes precedence; a bare `fmt::Error` means
    /// a `Display` implementation failed and is returned as `Err(None)`.
    pub fn finish(self, result: fmt::Result) -> Result<(), Option<S::Error>> {
        match (self.error, result) {
            (Some(e), _) => Err(Some(e)),
            (None, Ok(())) => Ok(()),
            (None, Err(_)) => Err(None),
        }
    }
}

impl<S: Serial> fmt::Write for SerialWriter<'_, S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.error.is_some() {
            return Err(fmt::Error);
        }
        self.serial.write_str(s).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

impl<S: Serial> fmt::Debug for SerialWriter<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerialWriter")
            .field("error", &self.error)
            .finish()
    }
}

/// Fixed-capacity formatting buffer that truncates instead of failing.
///
/// Characters that do not fit are dropped silently and formatting carries
/// on, mirroring `snprintf`.
#[derive(Debug, Default)]
pub struct FmtBuffer<const N: usize> {
    buf: String<N>,
}

impl<const N: usize> FmtBuffer<N> {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self { buf: String::new() }
    }

    /// The formatted text kept so far.
    pub fn as_str(&self) -> &str {
        self.buf.as_str()
    }

    /// Discard the contents.
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

impl<const N: usize> fmt::Write for FmtBuffer<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.buf.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}
