//! Output buffer: accumulates printed bytes and flushes to one of three
//! sink kinds.
//!
//! Mirrors `flatcc_json_printer_t`'s buffer fields (`buf`, `p`, `pflush`,
//! `size`, `flush_size`, `total`) and its three `flush` function-pointer
//! implementations (`__flatcc_json_printer_flush`,
//! `__flatcc_json_printer_flush_buffer`,
//! `__flatcc_json_printer_flush_dynamic_buffer`). Where the C source swaps
//! a function pointer per sink kind, this crate uses one `OutputBuffer`
//! type with an internal `Sink` enum — the same "strategy object bundled
//! on the context" shape the ported codec uses for its own buffered I/O
//! (`io::file_io`), rendered with an enum instead of a trait object since
//! the three variants are closed and known up front.

use std::io::Write;

use crate::config::RESERVE;

/// Where printed bytes ultimately go.
enum Sink<'a> {
    /// A `Write` handle (file, socket, in-memory `Vec`-backed writer, …).
    /// `storage` is the staging buffer; partial flushes shift the spill to
    /// the front exactly as the reference implementation's
    /// `__flatcc_json_printer_flush` does.
    Writer {
        write: Box<dyn Write + 'a>,
        storage: Vec<u8>,
    },
    /// A caller-owned fixed-size external buffer. Never grows; reaching
    /// `flush_size` with more left to write latches overflow and discards
    /// the unwritten remainder.
    Fixed { storage: &'a mut [u8] },
    /// A heap-owned buffer that doubles its capacity once `flush_size` is
    /// reached, never discarding anything.
    Dynamic { storage: Vec<u8> },
}

/// Accumulates printed bytes; flushes to the configured [`Sink`] when a
/// high-water mark is crossed.
pub struct OutputBuffer<'a> {
    sink: Sink<'a>,
    /// Write cursor, as an index into the active storage (`ctx->p - buf`).
    cursor: usize,
    /// Threshold index; a partial flush is eligible once `cursor` reaches
    /// this (`ctx->pflush - buf`).
    flush_size: usize,
    /// Total bytes produced so far: bytes handed to the sink for
    /// [`Sink::Writer`], or the current cursor for [`Sink::Fixed`] /
    /// [`Sink::Dynamic`], which never evict anything out of `storage`.
    total: u64,
    /// Sticky: set once a fixed-buffer flush has discarded output.
    overflowed: bool,
}

impl<'a> OutputBuffer<'a> {
    fn new(sink: Sink<'a>, flush_size: usize) -> Self {
        OutputBuffer {
            sink,
            cursor: 0,
            flush_size,
            total: 0,
            overflowed: false,
        }
    }

    /// Buffer backed by a `Write` sink with an internally-owned staging
    /// buffer of `buffer_size` bytes. Equivalent to
    /// `flatcc_json_printer_init`.
    pub fn for_writer<W: Write + 'a>(write: W, buffer_size: usize, flush_size: usize) -> Self {
        debug_assert!(flush_size + RESERVE <= buffer_size);
        Self::new(
            Sink::Writer {
                write: Box::new(write),
                storage: vec![0u8; buffer_size],
            },
            flush_size,
        )
    }

    /// Buffer backed by a caller-owned fixed-size slice. Equivalent to
    /// `flatcc_json_printer_init_buffer`. `storage.len()` must be at least
    /// [`RESERVE`].
    pub fn for_fixed(storage: &'a mut [u8]) -> Self {
        let flush_size = storage.len().saturating_sub(RESERVE);
        Self::new(Sink::Fixed { storage }, flush_size)
    }

    /// Buffer backed by an owned, growable `Vec<u8>`. Equivalent to
    /// `flatcc_json_printer_init_dynamic_buffer`.
    pub fn for_dynamic(initial_capacity: usize) -> Self {
        let capacity = initial_capacity.max(RESERVE);
        let flush_size = capacity - RESERVE;
        Self::new(
            Sink::Dynamic {
                storage: vec![0u8; capacity],
            },
            flush_size,
        )
    }

    #[inline]
    fn storage_mut(&mut self) -> &mut [u8] {
        match &mut self.sink {
            Sink::Writer { storage, .. } => storage.as_mut_slice(),
            Sink::Fixed { storage } => storage,
            Sink::Dynamic { storage } => storage.as_mut_slice(),
        }
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    #[inline]
    pub fn has_overflowed(&self) -> bool {
        self.overflowed
    }

    /// Append one byte without any capacity check. Callers must ensure a
    /// reserve of at least [`RESERVE`] bytes is available — see
    /// [`Self::ensure_reserve`] / the name-prefix / indent primitives that
    /// establish it before every value is printed.
    #[inline]
    pub fn put_byte(&mut self, b: u8) {
        let c = self.cursor;
        self.storage_mut()[c] = b;
        self.cursor += 1;
    }

    /// Append `bytes`, looping through flushes if the run is longer than
    /// the remaining buffer. Equivalent to `print_string_part`.
    pub fn put_bytes(&mut self, mut bytes: &[u8]) {
        if self.cursor + bytes.len() >= self.flush_size {
            if self.cursor >= self.flush_size {
                self.flush(false);
            }
            loop {
                let room = (self.flush_size - self.cursor).min(bytes.len());
                let c = self.cursor;
                self.storage_mut()[c..c + room].copy_from_slice(&bytes[..room]);
                self.cursor += room;
                bytes = &bytes[room..];
                self.flush(false);
                if self.cursor + bytes.len() < self.flush_size {
                    break;
                }
            }
        }
        let c = self.cursor;
        let n = bytes.len();
        self.storage_mut()[c..c + n].copy_from_slice(bytes);
        self.cursor += n;
    }

    /// Append `k` ASCII spaces, looping through flushes as needed.
    /// Equivalent to `print_indent_ex`.
    pub fn put_spaces(&mut self, mut k: usize) {
        if self.cursor >= self.flush_size {
            self.flush(false);
        }
        let mut room = self.flush_size - self.cursor;
        while k > room {
            let c = self.cursor;
            self.storage_mut()[c..c + room].fill(b' ');
            self.cursor += room;
            k -= room;
            self.flush(false);
            room = self.flush_size;
        }
        let c = self.cursor;
        self.storage_mut()[c..c + k].fill(b' ');
        self.cursor += k;
    }

    /// Flush buffered bytes to the sink.
    ///
    /// `full = false` is the amortized call every item separator makes
    /// (`print_nl`'s compact-mode path): it is a no-op unless `cursor` has
    /// actually reached `flush_size`, so calling it on every comma costs
    /// nothing until the buffer is genuinely under pressure. `full = true`
    /// is the end-of-print call: for the [`Sink::Writer`] variant it pushes
    /// out whatever remains staged; for [`Sink::Fixed`] and [`Sink::Dynamic`]
    /// the bytes already sit in their final place in `storage`, so it only
    /// settles the byte count.
    pub fn flush(&mut self, full: bool) {
        if !full && self.cursor < self.flush_size {
            return;
        }
        match &mut self.sink {
            Sink::Writer { write, storage } => {
                if !full {
                    // Guaranteed by the guard above: cursor >= flush_size.
                    let _ = write.write_all(&storage[..self.flush_size]);
                    let spill = self.cursor - self.flush_size;
                    storage.copy_within(self.flush_size..self.cursor, 0);
                    self.cursor = spill;
                    self.total += self.flush_size as u64;
                } else {
                    let _ = write.write_all(&storage[..self.cursor]);
                    self.total += self.cursor as u64;
                    self.cursor = 0;
                }
            }
            Sink::Fixed { .. } => {
                if full {
                    // Natural end of printing: everything fit, nothing was
                    // ever discarded on the way here.
                    self.total = self.cursor as u64;
                } else {
                    // cursor has reached flush_size and there is nowhere
                    // else for more bytes to go.
                    self.total += self.cursor as u64;
                    self.cursor = 0;
                    self.overflowed = true;
                }
            }
            Sink::Dynamic { storage } => {
                if !full {
                    let new_capacity = storage.len() * 2;
                    // `Vec::resize` cannot fail short of aborting the
                    // process on allocator exhaustion, so the
                    // reallocation-failure branch the reference
                    // implementation guards against is unreachable in safe
                    // Rust; see DESIGN.md.
                    storage.resize(new_capacity, 0);
                    self.flush_size = new_capacity - RESERVE;
                }
                self.total = self.cursor as u64;
            }
        }
    }

    /// Discard any unflushed bytes and clear the sticky overflow flag,
    /// without touching `total` or the underlying sink. Used by
    /// [`crate::context::Printer::clear`] to reuse one buffer/sink pair
    /// across multiple independent root prints.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.overflowed = false;
    }

    /// Current contents as an immutable slice (used by [`crate::context`]
    /// to expose the fixed/dynamic buffer's live bytes).
    pub fn contents(&self) -> &[u8] {
        match &self.sink {
            Sink::Writer { storage, .. } => &storage[..self.cursor],
            Sink::Fixed { storage } => &storage[..self.cursor],
            Sink::Dynamic { storage } => &storage[..self.cursor],
        }
    }

    /// Take ownership of the dynamic buffer's backing storage, truncated
    /// to the live length. Panics if this buffer is not dynamic — callers
    /// only reach for this through [`crate::context::Printer::finalize_dynamic_buffer`].
    pub fn into_dynamic_vec(self) -> Vec<u8> {
        match self.sink {
            Sink::Dynamic { mut storage } => {
                storage.truncate(self.cursor);
                storage
            }
            _ => panic!("into_dynamic_vec called on a non-dynamic output buffer"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_sink_partial_flush_preserves_spill_order() {
        let mut out = Vec::new();
        {
            let mut buf = OutputBuffer::for_writer(&mut out, 48, 8);
            buf.put_bytes(b"abcdefgh"); // exactly fills to threshold
            buf.put_bytes(b"ijkl"); // forces a flush + spill
            buf.flush(true);
        }
        assert_eq!(out, b"abcdefghijkl");
    }

    #[test]
    fn fixed_sink_latches_overflow_and_discards() {
        let mut storage = [0u8; 40];
        let mut buf = OutputBuffer::for_fixed(&mut storage);
        for _ in 0..5 {
            buf.put_bytes(b"0123456789");
        }
        assert!(buf.has_overflowed());
    }

    #[test]
    fn dynamic_sink_grows_and_keeps_all_bytes() {
        let mut buf = OutputBuffer::for_dynamic(8);
        let payload = b"the quick brown fox jumps over the lazy dog";
        buf.put_bytes(payload);
        assert_eq!(buf.contents(), payload.as_slice());
        assert!(!buf.has_overflowed());
    }
}
