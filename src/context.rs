//! The printer context: owns the output buffer, the sticky error latch,
//! the current indent level, and the print-policy flags. Mirrors
//! `flatcc_json_printer_t` and its `init`/`init_buffer`/
//! `init_dynamic_buffer`/`clear`/`get_buffer`/`finalize_dynamic_buffer`
//! functions, the same way the ported codec bundles its streaming state
//! (cursor, dictionary, ring buffer) on one context struct instead of
//! threading the pieces through every call.

use std::io::Write;

use crate::buffer::OutputBuffer;
use crate::config::{DEFAULT_BUFFER_SIZE, DEFAULT_FLUSH_SIZE, DYNAMIC_BUFFER_INITIAL_SIZE, MAX_LEVELS_DEFAULT};
use crate::error::{ErrorCode, ErrorLatch};

/// Print-policy flags, set once per [`Printer`] and consulted by every
/// field emitter.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
    /// Emit newlines and indentation instead of the compact single-line
    /// form.
    pub pretty: bool,
    /// Omit a scalar field whose value equals the schema default instead
    /// of always emitting it.
    pub skip_default: bool,
    /// Materialize a scalar, enum, or union-discriminant field's schema
    /// default even when it is absent from the wire buffer, instead of
    /// omitting the key entirely.
    pub force_default: bool,
    /// Emit object keys without surrounding quotes (still valid as an
    /// extended-JSON dialect some FlatBuffers consumers accept).
    pub unquoted_names: bool,
    /// Print enum and bitflag fields as their raw integer value instead of
    /// resolving symbolic names.
    pub enum_as_integer: bool,
    /// Recursion budget handed to the root entry point.
    pub max_levels: u32,
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrintOptions {
            pretty: false,
            skip_default: false,
            force_default: false,
            unquoted_names: false,
            enum_as_integer: false,
            max_levels: MAX_LEVELS_DEFAULT,
        }
    }
}

/// Streaming FlatBuffers-to-JSON printer.
///
/// Construct with one of [`Printer::for_writer`], [`Printer::for_fixed`], or
/// [`Printer::for_dynamic`], hand it to a root entry point in
/// [`crate::root`], then inspect [`Printer::error`] and retrieve the
/// output via [`Printer::finish`] or [`Printer::finalize_dynamic_buffer`].
pub struct Printer<'a> {
    pub(crate) buffer: OutputBuffer<'a>,
    pub(crate) error: ErrorLatch,
    pub(crate) level: u32,
    pub(crate) options: PrintOptions,
}

impl<'a> Printer<'a> {
    /// Print to a `Write` sink using the default buffer/flush sizing.
    /// Equivalent to `flatcc_json_printer_init`.
    pub fn for_writer<W: Write + 'a>(write: W, options: PrintOptions) -> Self {
        Self::for_writer_with_capacity(write, DEFAULT_BUFFER_SIZE, DEFAULT_FLUSH_SIZE, options)
    }

    /// Print to a `Write` sink with an explicit buffer/flush size.
    pub fn for_writer_with_capacity<W: Write + 'a>(
        write: W,
        buffer_size: usize,
        flush_size: usize,
        options: PrintOptions,
    ) -> Self {
        Printer {
            buffer: OutputBuffer::for_writer(write, buffer_size, flush_size),
            error: ErrorLatch::new(),
            level: 0,
            options,
        }
    }

    /// Print into a caller-owned fixed-size buffer. Overflow is reported
    /// through [`Printer::error`] rather than growing the buffer.
    /// Equivalent to `flatcc_json_printer_init_buffer`.
    pub fn for_fixed(storage: &'a mut [u8], options: PrintOptions) -> Self {
        Printer {
            buffer: OutputBuffer::for_fixed(storage),
            error: ErrorLatch::new(),
            level: 0,
            options,
        }
    }

    /// Print into a growable owned buffer, starting at the default
    /// capacity. Equivalent to `flatcc_json_printer_init_dynamic_buffer`
    /// called with a size of zero.
    pub fn for_dynamic(options: PrintOptions) -> Self {
        Self::for_dynamic_with_capacity(DYNAMIC_BUFFER_INITIAL_SIZE, options)
    }

    /// Print into a growable owned buffer with an explicit starting
    /// capacity.
    pub fn for_dynamic_with_capacity(initial_capacity: usize, options: PrintOptions) -> Self {
        Printer {
            buffer: OutputBuffer::for_dynamic(initial_capacity),
            error: ErrorLatch::new(),
            level: 0,
            options,
        }
    }

    /// The sticky error code, if any has been latched — either from the
    /// core (bad input, deep recursion) or from a fixed-buffer overflow.
    pub fn error(&self) -> Option<ErrorCode> {
        self.error.get().or_else(|| {
            if self.buffer.has_overflowed() {
                Some(ErrorCode::Overflow)
            } else {
                None
            }
        })
    }

    #[inline]
    pub(crate) fn latch(&mut self, code: ErrorCode) {
        self.error.set(code);
    }

    /// Reset for reuse: discards any unflushed bytes, clears the error
    /// latch and indent level, but leaves the underlying sink and
    /// cumulative byte total untouched. Equivalent to
    /// `flatcc_json_printer_clear`.
    pub fn clear(&mut self) {
        self.buffer.reset();
        self.error = ErrorLatch::new();
        self.level = 0;
    }

    /// Total bytes handed to the sink so far (see `DESIGN.md` for the
    /// dynamic-buffer sink's inherited, not strictly cumulative,
    /// accounting).
    pub fn total_bytes(&self) -> u64 {
        self.buffer.total()
    }

    /// Flush any remaining buffered bytes and return the total byte count.
    /// Consumes the printer, dropping (and for a `Write` sink, implicitly
    /// closing) the underlying sink.
    pub fn finish(mut self) -> u64 {
        self.buffer.flush(true);
        self.buffer.total()
    }

    /// Current live contents of a fixed or dynamic buffer, without
    /// consuming the printer. Equivalent to `flatcc_json_printer_get_buffer`.
    pub fn buffer_contents(&self) -> &[u8] {
        self.buffer.contents()
    }

    /// Flush and hand back the dynamic buffer's owned storage, truncated
    /// to its live length. Equivalent to
    /// `flatcc_json_printer_finalize_dynamic_buffer`. Panics if this
    /// printer was not constructed with [`Printer::for_dynamic`].
    pub fn finalize_dynamic_buffer(mut self) -> Vec<u8> {
        self.buffer.flush(true);
        self.buffer.into_dynamic_vec()
    }
}
