//! Root entry points: header acceptance and the two top-level print calls
//! schema-generated code invokes directly (`*_as_root`), plus the
//! ttl-carrying variant nested-root field emitters use internally.
//!
//! Mirrors `flatcc_json_printer_table_as_root`,
//! `flatcc_json_printer_struct_as_root`, and the header check folded into
//! both (`flatbuffers_has_identifier` in the reference runtime).

use crate::config::{IDENTIFIER_SIZE, OFFSET_SIZE};
use crate::context::Printer;
use crate::descriptor::{StructCallback, TableCallback};
use crate::error::ErrorCode;
use crate::reader;
use crate::traversal;

/// Check that `data` is long enough to hold a root offset and its
/// identifier slot, and, if `identifier` is `Some`, that the 4 bytes
/// following the offset match it. The length requirement applies
/// regardless of whether a `fid` is supplied. `identifier: None` accepts
/// any identifier value (or none at all), mirroring the reference
/// implementation's `fid == NULL` behavior.
pub fn accept_header(data: &[u8], identifier: Option<&[u8; 4]>) -> bool {
    if data.len() < OFFSET_SIZE + IDENTIFIER_SIZE {
        return false;
    }
    match identifier {
        None => true,
        Some(expected) => &data[OFFSET_SIZE..OFFSET_SIZE + IDENTIFIER_SIZE] == expected.as_slice(),
    }
}

fn reject(printer: &mut Printer) {
    printer.latch(ErrorCode::BadInput);
    printer.print_null();
}

/// Print `data` as a root table. Equivalent to
/// `flatcc_json_printer_table_as_root`.
pub fn table_as_root(printer: &mut Printer, data: &[u8], identifier: Option<&[u8; 4]>, callback: TableCallback) {
    let ttl = printer.options.max_levels;
    table_as_root_with_ttl(printer, data, identifier, ttl, callback);
}

/// As [`table_as_root`], but with an explicit recursion budget. Used
/// directly by [`crate::field::table_as_nested_root_field`] so a
/// nested-root buffer shares the parent traversal's remaining budget
/// instead of getting a fresh one.
pub(crate) fn table_as_root_with_ttl(
    printer: &mut Printer,
    data: &[u8],
    identifier: Option<&[u8; 4]>,
    ttl: u32,
    callback: TableCallback,
) {
    if !accept_header(data, identifier) {
        reject(printer);
        return;
    }
    let root_offset = unsafe { reader::read_uoffset(data.as_ptr()) } as usize;
    let table_ptr = unsafe { data.as_ptr().add(root_offset) };
    traversal::emit_table_object(printer, table_ptr, ttl, callback);
}

/// Print `data` as a root struct. Equivalent to
/// `flatcc_json_printer_struct_as_root`.
pub fn struct_as_root(printer: &mut Printer, data: &[u8], identifier: Option<&[u8; 4]>, callback: StructCallback) {
    if !accept_header(data, identifier) {
        reject(printer);
        return;
    }
    let root_offset = unsafe { reader::read_uoffset(data.as_ptr()) } as usize;
    let struct_ptr = unsafe { data.as_ptr().add(root_offset) };
    traversal::emit_struct_object(printer, struct_ptr, callback);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_identifier_accepts_any_buffer_long_enough_for_an_offset_and_identifier_slot() {
        let mut data = vec![4u8, 0, 0, 0];
        data.extend_from_slice(b"XXXX");
        assert!(accept_header(&data, None));
    }

    #[test]
    fn no_identifier_still_rejects_a_buffer_too_short_for_the_identifier_slot() {
        let data = [4u8, 0, 0, 0];
        assert!(!accept_header(&data, None));
    }

    #[test]
    fn identifier_mismatch_is_rejected() {
        let mut data = vec![4u8, 0, 0, 0];
        data.extend_from_slice(b"XXXX");
        assert!(!accept_header(&data, Some(b"MONS")));
    }

    #[test]
    fn identifier_match_is_accepted() {
        let mut data = vec![4u8, 0, 0, 0];
        data.extend_from_slice(b"MONS");
        assert!(accept_header(&data, Some(b"MONS")));
    }

    #[test]
    fn too_short_for_identifier_is_rejected() {
        let data = [4u8, 0, 0, 0];
        assert!(!accept_header(&data, Some(b"MONS")));
    }

    #[test]
    fn rejected_header_latches_bad_input_and_prints_null() {
        let mut out = Vec::new();
        {
            let mut printer = Printer::for_writer(&mut out, crate::context::PrintOptions::default());
            let data = [1u8];
            table_as_root(&mut printer, &data, Some(b"MONS"), |_printer, _desc| {});
            assert_eq!(printer.error(), Some(ErrorCode::BadInput));
            printer.finish();
        }
        assert_eq!(out, b"null");
    }
}
