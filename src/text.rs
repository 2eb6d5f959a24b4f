//! JSON text-emission primitives: indentation, key/comma bookkeeping,
//! string escaping, and scalar rendering. Everything here is an inherent
//! method on [`Printer`] — field emitters in [`crate::field`] compose
//! these rather than touching [`crate::buffer::OutputBuffer`] directly.
//!
//! Mirrors the `print_*` static helpers in the reference implementation
//! (`print_nl`, `print_name`, `print_string_part`, `print_symbol`, the
//! per-scalar `print_<type>` family).

use crate::config::{IDENTIFIER_LENGTH_MAX, INDENT_WIDTH};
use crate::context::Printer;
use crate::error::ErrorCode;
use crate::scalar::JsonScalar;

impl<'a> Printer<'a> {
    /// Newline + indent in pretty mode, or an amortizing partial flush in
    /// compact mode. Equivalent to the `print_nl` macro.
    fn newline_or_flush(&mut self) {
        if self.options.pretty {
            self.buffer.put_byte(b'\n');
            self.buffer.put_spaces(self.level as usize * INDENT_WIDTH);
        } else {
            self.buffer.flush(false);
        }
    }

    /// Comma-then-break bookkeeping shared by table fields and vector
    /// elements: emits a separating comma if this isn't the first item,
    /// increments `count`, then breaks to a new line/indent (or flushes).
    pub(crate) fn item_prefix(&mut self, count: &mut u32) {
        if *count > 0 {
            self.buffer.put_byte(b',');
        }
        *count += 1;
        self.newline_or_flush();
    }

    /// Emit a field/element key: `"name":` (quoted) or `name:` (per
    /// [`crate::context::PrintOptions::unquoted_names`]), with a trailing
    /// space in pretty mode.
    fn print_key(&mut self, name: &str) {
        if self.options.unquoted_names {
            self.buffer.put_bytes(name.as_bytes());
        } else {
            self.print_quoted_string(name.as_bytes());
        }
        self.buffer.put_byte(b':');
        if self.options.pretty {
            self.buffer.put_byte(b' ');
        }
    }

    /// Comma/break bookkeeping followed by a field's key. Equivalent to
    /// `print_name`.
    pub(crate) fn print_name(&mut self, count: &mut u32, name: &str) {
        self.item_prefix(count);
        self.print_key(name);
    }

    /// Print the synthesized `<name>_type` union-discriminant key. Latches
    /// [`ErrorCode::BadInput`] instead of printing a truncated key if the
    /// combined name would exceed [`IDENTIFIER_LENGTH_MAX`]. Equivalent to
    /// the reference implementation's stack-buffer-backed union-type name
    /// construction.
    pub(crate) fn print_union_type_name(&mut self, count: &mut u32, base_name: &str) {
        const SUFFIX: &[u8] = b"_type";
        let n = base_name.len();
        if n + SUFFIX.len() > IDENTIFIER_LENGTH_MAX {
            self.latch(ErrorCode::BadInput);
            return;
        }
        let mut buf = [0u8; IDENTIFIER_LENGTH_MAX];
        buf[..n].copy_from_slice(base_name.as_bytes());
        buf[n..n + SUFFIX.len()].copy_from_slice(SUFFIX);
        self.item_prefix(count);
        self.print_key(core::str::from_utf8(&buf[..n + SUFFIX.len()]).expect("ascii suffix"));
    }

    /// Open a table/struct object and enter one indent level.
    pub(crate) fn start_object(&mut self) {
        self.buffer.put_byte(b'{');
        self.level += 1;
    }

    /// Leave the current indent level and close a table/struct object.
    pub(crate) fn end_object(&mut self, count: u32) {
        self.level -= 1;
        self.close_break(count);
        self.buffer.put_byte(b'}');
    }

    /// Open a vector and enter one indent level.
    pub(crate) fn start_array(&mut self) {
        self.buffer.put_byte(b'[');
        self.level += 1;
    }

    /// Leave the current indent level and close a vector.
    pub(crate) fn end_array(&mut self, count: u32) {
        self.level -= 1;
        self.close_break(count);
        self.buffer.put_byte(b']');
    }

    fn close_break(&mut self, count: u32) {
        if count > 0 {
            if self.options.pretty {
                self.buffer.put_byte(b'\n');
                self.buffer.put_spaces(self.level as usize * INDENT_WIDTH);
            } else {
                self.buffer.flush(false);
            }
        }
    }

    /// Print a quoted, escaped JSON string. Equivalent to `print_string`.
    pub(crate) fn print_quoted_string(&mut self, bytes: &[u8]) {
        self.buffer.put_byte(b'"');
        let mut run_start = 0usize;
        for (i, &b) in bytes.iter().enumerate() {
            let special: Option<&'static [u8]> = match b {
                b'"' => Some(b"\\\""),
                b'\\' => Some(b"\\\\"),
                0x08 => Some(b"\\b"),
                0x0c => Some(b"\\f"),
                b'\n' => Some(b"\\n"),
                b'\r' => Some(b"\\r"),
                b'\t' => Some(b"\\t"),
                _ => None,
            };
            if let Some(seq) = special {
                if i > run_start {
                    self.buffer.put_bytes(&bytes[run_start..i]);
                }
                self.buffer.put_bytes(seq);
                run_start = i + 1;
            } else if b < 0x20 {
                if i > run_start {
                    self.buffer.put_bytes(&bytes[run_start..i]);
                }
                const HEX: &[u8; 16] = b"0123456789abcdef";
                let seq = [b'\\', b'u', b'0', b'0', HEX[(b >> 4) as usize], HEX[(b & 0x0f) as usize]];
                self.buffer.put_bytes(&seq);
                run_start = i + 1;
            }
        }
        if run_start < bytes.len() {
            self.buffer.put_bytes(&bytes[run_start..]);
        }
        self.buffer.put_byte(b'"');
    }

    /// Print an enum symbol (or space-separated bitflag symbol list) as a
    /// quoted string. Equivalent to `print_symbol`.
    pub(crate) fn print_symbol(&mut self, symbol: &str) {
        self.print_quoted_string(symbol.as_bytes());
    }

    /// Print a scalar's JSON representation (a bare number, `true`/
    /// `false`, or a quoted string for non-finite floats).
    pub(crate) fn print_scalar<T: JsonScalar>(&mut self, value: T) {
        let mut buf = [0u8; crate::config::RESERVE];
        let n = value.write_json(&mut buf);
        self.buffer.put_bytes(&buf[..n]);
    }

    pub(crate) fn print_null(&mut self) {
        self.buffer.put_bytes(b"null");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::PrintOptions;

    fn rendered(options: PrintOptions, f: impl FnOnce(&mut Printer)) -> String {
        let mut out = Vec::new();
        {
            let mut p = Printer::for_writer(&mut out, options);
            f(&mut p);
            p.buffer.flush(true);
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn quoted_string_escapes_control_and_reserved_chars() {
        let s = rendered(PrintOptions::default(), |p| {
            p.print_quoted_string(b"a\"b\\c\nd\te\x01f");
        });
        assert_eq!(s, "\"a\\\"b\\\\c\\nd\\te\\u0001f\"");
    }

    #[test]
    fn compact_object_has_no_whitespace() {
        let s = rendered(PrintOptions::default(), |p| {
            let mut count = 0;
            p.start_object();
            p.print_name(&mut count, "x");
            p.print_scalar(1i32);
            p.end_object(count);
        });
        assert_eq!(s, "{\"x\":1}");
    }

    #[test]
    fn pretty_object_indents_fields() {
        let opts = PrintOptions {
            pretty: true,
            ..Default::default()
        };
        let s = rendered(opts, |p| {
            let mut count = 0;
            p.start_object();
            p.print_name(&mut count, "x");
            p.print_scalar(1i32);
            p.print_name(&mut count, "y");
            p.print_scalar(2i32);
            p.end_object(count);
        });
        assert_eq!(s, "{\n  \"x\": 1,\n  \"y\": 2\n}");
    }

    #[test]
    fn union_type_name_too_long_latches_bad_input() {
        let long_name = "x".repeat(IDENTIFIER_LENGTH_MAX);
        let mut out = Vec::new();
        let mut count = 0;
        {
            let mut p = Printer::for_writer(&mut out, PrintOptions::default());
            p.print_union_type_name(&mut count, &long_name);
            assert_eq!(p.error(), Some(ErrorCode::BadInput));
        }
    }

    #[test]
    fn empty_object_is_not_broken_across_lines() {
        let opts = PrintOptions {
            pretty: true,
            ..Default::default()
        };
        let s = rendered(opts, |p| {
            p.start_object();
            p.end_object(0);
        });
        assert_eq!(s, "{}");
    }
}
