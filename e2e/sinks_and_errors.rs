//! End-to-end: the three sink kinds, fixed-buffer overflow, bad-input
//! rejection, and reusing a printer via `clear()`.

#[path = "support.rs"]
mod support;

use fbjson_printer::{field, ErrorCode, PrintOptions, Printer, TableDescriptor};
use support::Buf;

fn msg_callback(printer: &mut Printer, desc: &mut TableDescriptor) {
    field::string_field(printer, desc, 0, "text");
}

fn msg_buffer(text: &str) -> Vec<u8> {
    let mut buf = Buf::new(None);
    let s = buf.write_string(text);
    let vtable = buf.write_vtable(8, &[4]);
    let table = buf.start_table(vtable);
    let slot = buf.pos();
    buf.u32(0);
    buf.link(slot, s);
    buf.finish(table)
}

#[test]
fn writer_sink_produces_the_expected_bytes_and_total() {
    let data = msg_buffer("hi");
    let mut out = Vec::new();
    let total;
    {
        let mut printer = Printer::for_writer(&mut out, PrintOptions::default());
        fbjson_printer::table_as_root(&mut printer, &data, None, msg_callback);
        assert_eq!(printer.error(), None);
        total = printer.finish();
    }
    assert_eq!(out, br#"{"text":"hi"}"#);
    assert_eq!(total, out.len() as u64);
}

#[test]
fn fixed_sink_with_enough_room_reports_no_overflow() {
    let data = msg_buffer("hi");
    let mut storage = [0u8; 64];
    let mut printer = Printer::for_fixed(&mut storage, PrintOptions::default());
    fbjson_printer::table_as_root(&mut printer, &data, None, msg_callback);
    assert_eq!(printer.error(), None);
    assert_eq!(printer.buffer_contents(), br#"{"text":"hi"}"#);
}

#[test]
fn fixed_sink_too_small_for_the_document_latches_overflow() {
    let long_text: String = "x".repeat(200);
    let data = msg_buffer(&long_text);
    let mut storage = [0u8; 40];
    let mut printer = Printer::for_fixed(&mut storage, PrintOptions::default());
    fbjson_printer::table_as_root(&mut printer, &data, None, msg_callback);
    assert_eq!(printer.error(), Some(ErrorCode::Overflow));
}

#[test]
fn dynamic_sink_grows_to_fit_and_finalizes_to_exactly_the_printed_bytes() {
    let long_text: String = "y".repeat(5000);
    let data = msg_buffer(&long_text);
    let mut printer = Printer::for_dynamic_with_capacity(64, PrintOptions::default());
    fbjson_printer::table_as_root(&mut printer, &data, None, msg_callback);
    assert_eq!(printer.error(), None);
    let bytes = printer.finalize_dynamic_buffer();
    let expected = format!(r#"{{"text":"{long_text}"}}"#);
    assert_eq!(bytes, expected.into_bytes());
}

#[test]
fn a_malformed_header_is_rejected_without_touching_the_table_callback() {
    let mut out = Vec::new();
    let data = [1u8]; // too short even for a root offset
    {
        let mut printer = Printer::for_writer(&mut out, PrintOptions::default());
        fbjson_printer::table_as_root(&mut printer, &data, None, msg_callback);
        assert_eq!(printer.error(), Some(ErrorCode::BadInput));
        printer.finish();
    }
    assert_eq!(out, b"null");
}

#[test]
fn clear_resets_a_fixed_printer_for_a_second_independent_print() {
    let first = msg_buffer("first");
    let second = msg_buffer("second");
    let mut storage = [0u8; 64];
    let mut printer = Printer::for_fixed(&mut storage, PrintOptions::default());

    fbjson_printer::table_as_root(&mut printer, &first, None, msg_callback);
    assert_eq!(printer.error(), None);
    assert_eq!(printer.buffer_contents(), br#"{"text":"first"}"#);

    printer.clear();
    assert_eq!(printer.error(), None);

    fbjson_printer::table_as_root(&mut printer, &second, None, msg_callback);
    assert_eq!(printer.error(), None);
    assert_eq!(printer.buffer_contents(), br#"{"text":"second"}"#);
}
