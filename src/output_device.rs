// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A cloneable handle over a shared writable sink, plus the styled write
//! operations that bracket content with SGR on/off sequences.

use std::fmt;
use std::io;
use std::io::Write;
use std::sync::Arc;

use smallstr::SmallString;

use crate::{Style, WriteError, WriteResult, StdoutMock};

/// Alias to disambiguate from `tokio::sync::Mutex` in downstream code.
pub type StdMutex<T> = std::sync::Mutex<T>;

pub type SendSink = dyn Write + Send;
pub type SafeSink = Arc<StdMutex<SendSink>>;

mod sizing {
    use super::*;

    /// Inline storage for formatted content before it hits the sink. Spills
    /// to the heap for longer content.
    pub const FMT_CONTENT_STORAGE_SIZE: usize = 64;
    pub type InlineFmtContent = SmallString<[u8; FMT_CONTENT_STORAGE_SIZE]>;
}

/// Locking policy for one styled write call. See [`OutputDevice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Serialization {
    /// Hold the sink lock across every segment of a call, so the segments of
    /// concurrent calls through this device (or its clones) never interleave.
    Serialized,
    /// Take the lock once per segment. Concurrent calls may interleave their
    /// escape sequences and content; avoiding that is the caller's problem.
    #[default]
    Unserialized,
}

/// This struct represents an output device that styled text can be written to.
/// - It is safe to clone; clones share the underlying sink AND the lock, so a
///   [`Serialization::Serialized`] device keeps its no-interleaving guarantee
///   across clones handed to different threads.
/// - The serialization policy is fixed at construction ([`Self::serialized`])
///   rather than toggled through process-global state.
///
/// Every styled write is split into segments (activate sequence, content,
/// deactivate sequence). All segments are always attempted, even after an
/// earlier segment failed, so a partial failure cannot leave the sink with a
/// dangling style. The first error encountered is the one returned, and the
/// byte count reflects everything that actually landed.
#[derive(Clone)]
#[allow(missing_debug_implementations)]
pub struct OutputDevice {
    resource: SafeSink,
    serialization: Serialization,
}

impl Default for OutputDevice {
    fn default() -> Self { Self::new_stdout() }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(io::stdout())),
            serialization: Serialization::default(),
        }
    }

    #[must_use]
    pub fn new_stderr() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(io::stderr())),
            serialization: Serialization::default(),
        }
    }

    /// Wrap an arbitrary sink (file, pipe, socket, buffer).
    #[must_use]
    pub fn new(sink: impl Write + Send + 'static) -> Self {
        Self {
            resource: Arc::new(StdMutex::new(sink)),
            serialization: Serialization::default(),
        }
    }

    /// Create a device backed by an in-memory [`StdoutMock`], which records
    /// every `write()` call as a separate chunk. The returned mock shares the
    /// buffer with the device.
    #[must_use]
    pub fn new_mock() -> (Self, StdoutMock) {
        let mock = StdoutMock::new();
        (Self::new(mock.clone()), mock)
    }

    /// Switch this device to [`Serialization::Serialized`].
    #[must_use]
    pub fn serialized(mut self) -> Self {
        self.serialization = Serialization::Serialized;
        self
    }

    #[must_use]
    pub fn serialization(&self) -> Serialization { self.serialization }

    /// Locks the sink for direct writing.
    ///
    /// # Panics
    ///
    /// This method will panic if the mutex is poisoned, which can happen if a
    /// thread panics while holding the lock.
    pub fn lock(&self) -> std::sync::MutexGuard<'_, SendSink> {
        self.resource.lock().unwrap()
    }

    /// Lock variant for drop paths, where panicking on a poisoned mutex
    /// would turn an unwind into an abort.
    pub(crate) fn lock_ignore_poison(&self) -> std::sync::MutexGuard<'_, SendSink> {
        match self.resource.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Flush the sink. Only needed when immediate output is required.
    ///
    /// # Errors
    ///
    /// Propagates the sink's flush error verbatim.
    pub fn flush(&self) -> io::Result<()> { self.lock().flush() }
}

mod styled_write_ops {
    use std::fmt::Write as _;

    use super::*;

    impl OutputDevice {
        /// Write just the activation sequence for `style`.
        ///
        /// # Errors
        ///
        /// Returns [`WriteError`] if the sink refuses the write.
        pub fn write_on(&self, style: Style) -> WriteResult {
            let on = style.on_str();
            self.write_segments(&[on.as_bytes()])
        }

        /// Write just the deactivation sequence for `style`.
        ///
        /// # Errors
        ///
        /// Returns [`WriteError`] if the sink refuses the write.
        pub fn write_off(&self, style: Style) -> WriteResult {
            let off = style.off_str();
            self.write_segments(&[off.as_bytes()])
        }

        /// Write `text` bracketed by the style's on/off sequences.
        ///
        /// # Errors
        ///
        /// Returns the first segment's error; the remaining segments
        /// (deactivation in particular) are still attempted, and the error
        /// carries the byte count that did land.
        pub fn write_styled(&self, style: Style, text: &str) -> WriteResult {
            let on = style.on_str();
            let off = style.off_str();
            self.write_segments(&[on.as_bytes(), text.as_bytes(), off.as_bytes()])
        }

        /// Like [`Self::write_styled`], with a newline after the content and
        /// before the deactivation sequence.
        ///
        /// # Errors
        ///
        /// Same contract as [`Self::write_styled`].
        pub fn writeln_styled(&self, style: Style, text: &str) -> WriteResult {
            let on = style.on_str();
            let off = style.off_str();
            self.write_segments(&[
                on.as_bytes(),
                text.as_bytes(),
                b"\n",
                off.as_bytes(),
            ])
        }

        /// Bracket pre-formatted content built with [`format_args!`].
        ///
        /// ```rust
        /// use ansi_attr::{OutputDevice, GREEN};
        ///
        /// let (device, mock) = OutputDevice::new_mock();
        /// let count = 3;
        /// device
        ///     .write_styled_fmt(GREEN, format_args!("{count} ok"))
        ///     .expect("mock never fails");
        /// assert_eq!(
        ///     mock.get_copy_of_buffer_as_string(),
        ///     "\x1b[32m3 ok\x1b[39m"
        /// );
        /// ```
        ///
        /// # Errors
        ///
        /// Same contract as [`Self::write_styled`].
        pub fn write_styled_fmt(
            &self,
            style: Style,
            args: fmt::Arguments<'_>,
        ) -> WriteResult {
            let mut content = sizing::InlineFmtContent::new();
            // Writing into an in-memory string can't fail.
            let _unused = write!(content, "{args}");
            self.write_styled(style, &content)
        }

        fn write_segments(&self, segments: &[&[u8]]) -> WriteResult {
            let mut total = 0;
            let mut first_err: Option<io::Error> = None;

            match self.serialization {
                Serialization::Serialized => {
                    let mut sink = self.lock();
                    for segment in segments {
                        write_segment(&mut *sink, segment, &mut total, &mut first_err);
                    }
                }
                Serialization::Unserialized => {
                    for segment in segments {
                        let mut sink = self.lock();
                        write_segment(&mut *sink, segment, &mut total, &mut first_err);
                    }
                }
            }

            match first_err {
                None => Ok(total),
                Some(source) => Err(WriteError {
                    bytes_written: total,
                    source,
                }),
            }
        }
    }

    /// Push one segment into the sink, counting every byte that lands. On
    /// error the segment is abandoned (the caller moves on to the next one)
    /// and only the first error across segments is kept.
    fn write_segment(
        sink: &mut SendSink,
        segment: &[u8],
        total: &mut usize,
        first_err: &mut Option<io::Error>,
    ) {
        let mut rest = segment;
        while !rest.is_empty() {
            match sink.write(rest) {
                Ok(0) => {
                    if first_err.is_none() {
                        *first_err = Some(io::ErrorKind::WriteZero.into());
                    }
                    return;
                }
                Ok(n) => {
                    *total += n;
                    rest = &rest[n..];
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    if first_err.is_none() {
                        *first_err = Some(e);
                    }
                    return;
                }
            }
        }
    }
}
