//! End-to-end: scalar, struct, table, and byte vectors.

#[path = "support.rs"]
mod support;

use fbjson_printer::{base64, field, ErrorCode, PrintOptions, Printer, TableDescriptor};
use support::Buf;

fn print_to_string(data: &[u8], callback: fn(&mut Printer, &mut TableDescriptor), options: PrintOptions) -> (String, Option<ErrorCode>) {
    let mut out = Vec::new();
    let error;
    {
        let mut printer = Printer::for_writer(&mut out, options);
        fbjson_printer::table_as_root(&mut printer, data, None, callback);
        error = printer.error();
        printer.finish();
    }
    (String::from_utf8(out).unwrap(), error)
}

// -- scalar vectors --------------------------------------------------------

fn scores_callback(printer: &mut Printer, desc: &mut TableDescriptor) {
    field::scalar_vector_field::<i32>(printer, desc, 0, "scores");
}

#[test]
fn a_scalar_vector_prints_as_a_bare_numeric_array() {
    let mut buf = Buf::new(None);
    let vec_start = buf.write_i32_vector(&[10, -5, 0, 42]);
    let vtable = buf.write_vtable(8, &[4]);
    let table = buf.start_table(vtable);
    let slot = buf.pos();
    buf.u32(0);
    buf.link(slot, vec_start);
    let data = buf.finish(table);

    let (json, error) = print_to_string(&data, scores_callback, PrintOptions::default());
    assert_eq!(error, None);
    assert_eq!(json, r#"{"scores":[10,-5,0,42]}"#);
}

#[test]
fn an_empty_scalar_vector_prints_as_an_empty_array() {
    let mut buf = Buf::new(None);
    let vec_start = buf.write_i32_vector(&[]);
    let vtable = buf.write_vtable(8, &[4]);
    let table = buf.start_table(vtable);
    let slot = buf.pos();
    buf.u32(0);
    buf.link(slot, vec_start);
    let data = buf.finish(table);

    let (json, error) = print_to_string(&data, scores_callback, PrintOptions::default());
    assert_eq!(error, None);
    assert_eq!(json, r#"{"scores":[]}"#);
}

// -- byte vector as base64 --------------------------------------------------

fn blob_callback(printer: &mut Printer, desc: &mut TableDescriptor) {
    field::uint8_vector_base64_field(printer, desc, 0, "blob", base64::STANDARD_ALPHABET, true);
}

#[test]
fn a_byte_vector_field_renders_as_a_base64_string() {
    let mut buf = Buf::new(None);
    let vec_start = buf.write_u8_vector(b"foobar");
    let vtable = buf.write_vtable(8, &[4]);
    let table = buf.start_table(vtable);
    let slot = buf.pos();
    buf.u32(0);
    buf.link(slot, vec_start);
    let data = buf.finish(table);

    let (json, error) = print_to_string(&data, blob_callback, PrintOptions::default());
    assert_eq!(error, None);
    assert_eq!(json, r#"{"blob":"Zm9vYmFy"}"#);
}

#[test]
fn a_large_byte_vector_spanning_many_chunk_groups_still_round_trips() {
    let payload: Vec<u8> = (0..2000u32).map(|i| (i * 31 + 7) as u8).collect();
    let mut buf = Buf::new(None);
    let vec_start = buf.write_u8_vector(&payload);
    let vtable = buf.write_vtable(8, &[4]);
    let table = buf.start_table(vtable);
    let slot = buf.pos();
    buf.u32(0);
    buf.link(slot, vec_start);
    let data = buf.finish(table);

    let (json, error) = print_to_string(&data, blob_callback, PrintOptions::default());
    assert_eq!(error, None);
    let expected = base64::encode_to_vec(base64::STANDARD_ALPHABET, &payload, true);
    assert_eq!(json, format!("{{\"blob\":\"{}\"}}", String::from_utf8(expected).unwrap()));
}

// -- struct vectors ----------------------------------------------------------

fn point_struct_callback(printer: &mut Printer, struct_base: *const u8, count: &mut u32) {
    field::scalar_struct_field::<i32>(printer, struct_base, 0, count, "x");
    field::scalar_struct_field::<i32>(printer, struct_base, 4, count, "y");
}

fn points_callback(printer: &mut Printer, desc: &mut TableDescriptor) {
    field::struct_vector_field(printer, desc, 0, "points", 8, point_struct_callback);
}

#[test]
fn a_struct_vector_prints_each_inline_element_as_an_object() {
    let mut buf = Buf::new(None);
    let vec_start = buf.pos();
    buf.u32(2);
    buf.i32(1);
    buf.i32(2);
    buf.i32(-3);
    buf.i32(4);

    let vtable = buf.write_vtable(8, &[4]);
    let table = buf.start_table(vtable);
    let slot = buf.pos();
    buf.u32(0);
    buf.link(slot, vec_start);
    let data = buf.finish(table);

    let (json, error) = print_to_string(&data, points_callback, PrintOptions::default());
    assert_eq!(error, None);
    assert_eq!(json, r#"{"points":[{"x":1,"y":2},{"x":-3,"y":4}]}"#);
}

// -- table vectors ------------------------------------------------------------

fn item_callback(printer: &mut Printer, desc: &mut TableDescriptor) {
    field::scalar_field::<i32>(printer, desc, 0, "value", 0);
}

fn items_callback(printer: &mut Printer, desc: &mut TableDescriptor) {
    field::table_vector_field(printer, desc, 0, "items", item_callback);
}

#[test]
fn a_table_vector_prints_each_referenced_table_as_an_object() {
    let mut buf = Buf::new(None);
    let item_vtable = buf.write_vtable(8, &[4]);

    let item_a = buf.start_table(item_vtable);
    buf.i32(11);
    let item_b = buf.start_table(item_vtable);
    buf.i32(22);

    let (vec_start, slots) = buf.reserve_offset_vector(2);
    buf.link(slots[0], item_a);
    buf.link(slots[1], item_b);

    let vtable = buf.write_vtable(8, &[4]);
    let table = buf.start_table(vtable);
    let slot = buf.pos();
    buf.u32(0);
    buf.link(slot, vec_start);
    let data = buf.finish(table);

    let (json, error) = print_to_string(&data, items_callback, PrintOptions::default());
    assert_eq!(error, None);
    assert_eq!(json, r#"{"items":[{"value":11},{"value":22}]}"#);
}
