//! End-to-end: union fields and vectors of unions.

#[path = "support.rs"]
mod support;

use fbjson_printer::{field, traversal, ErrorCode, PrintOptions, Printer, TableDescriptor};
use support::Buf;

fn shape_union_name(v: u8) -> Option<&'static str> {
    match v {
        0 => Some("NONE"),
        1 => Some("Circle"),
        2 => Some("Square"),
        _ => None,
    }
}

fn circle_callback(printer: &mut Printer, desc: &mut TableDescriptor) {
    field::scalar_field::<f32>(printer, desc, 0, "radius", 0.0);
}

fn square_callback(printer: &mut Printer, desc: &mut TableDescriptor) {
    field::scalar_field::<f32>(printer, desc, 0, "side", 0.0);
}

fn shape_dispatch(printer: &mut Printer, discriminant: u8, table_ptr: *const u8, ttl: u32) {
    match discriminant {
        1 => traversal::emit_table_object(printer, table_ptr, ttl, circle_callback),
        2 => traversal::emit_table_object(printer, table_ptr, ttl, square_callback),
        other => unreachable!("unexpected shape discriminant {other}"),
    }
}

fn holder_callback(printer: &mut Printer, desc: &mut TableDescriptor) {
    field::union_type_field(printer, desc, 0, "shape", shape_union_name);
    field::union_field(printer, desc, 1, "shape", shape_dispatch);
}

fn scene_callback(printer: &mut Printer, desc: &mut TableDescriptor) {
    field::union_type_vector_field(printer, desc, 0, "shapes_type", shape_union_name);
    field::union_vector_field(printer, desc, 0, 1, "shapes", shape_dispatch);
}

fn print_to_string(data: &[u8], callback: fn(&mut Printer, &mut TableDescriptor)) -> (String, Option<ErrorCode>) {
    let mut out = Vec::new();
    let error;
    {
        let mut printer = Printer::for_writer(&mut out, PrintOptions::default());
        fbjson_printer::table_as_root(&mut printer, data, None, callback);
        error = printer.error();
        printer.finish();
    }
    (String::from_utf8(out).unwrap(), error)
}

#[test]
fn a_populated_union_prints_the_discriminant_name_and_the_selected_variant() {
    let mut buf = Buf::new(None);
    let circle_vtable = buf.write_vtable(8, &[4]);
    let circle = buf.start_table(circle_vtable);
    buf.f32(2.5);

    let holder_vtable = buf.write_vtable(9, &[4, 5]);
    let table = buf.start_table(holder_vtable);
    buf.u8(1);
    let shape_slot = buf.pos();
    buf.u32(0);
    buf.link(shape_slot, circle);
    let data = buf.finish(table);

    let (json, error) = print_to_string(&data, holder_callback);
    assert_eq!(error, None);
    assert_eq!(json, r#"{"shape_type":"Circle","shape":{"radius":2.5}}"#);
}

#[test]
fn an_absent_union_field_emits_neither_the_discriminant_nor_the_value() {
    // Normal NONE encoding: both slots absent from the wire buffer. Per
    // the two-slot protocol, an absent discriminant prints nothing at all
    // (no "shape_type" key) rather than a synthesized "NONE".
    let mut buf = Buf::new(None);
    let holder_vtable = buf.write_vtable(4, &[0, 0]);
    let table = buf.start_table(holder_vtable);
    let data = buf.finish(table);

    let (json, error) = print_to_string(&data, holder_callback);
    assert_eq!(error, None);
    assert_eq!(json, "{}");
}

#[test]
fn force_default_materializes_a_none_discriminant_for_an_absent_union_field() {
    let mut buf = Buf::new(None);
    let holder_vtable = buf.write_vtable(4, &[0, 0]);
    let table = buf.start_table(holder_vtable);
    let data = buf.finish(table);

    let mut out = Vec::new();
    let error;
    {
        let options = PrintOptions {
            force_default: true,
            ..Default::default()
        };
        let mut printer = Printer::for_writer(&mut out, options);
        fbjson_printer::table_as_root(&mut printer, &data, None, holder_callback);
        error = printer.error();
        printer.finish();
    }
    assert_eq!(error, None);
    assert_eq!(String::from_utf8(out).unwrap(), r#"{"shape_type":"NONE"}"#);
}

#[test]
fn force_default_with_skip_default_still_elides_a_none_discriminant() {
    let mut buf = Buf::new(None);
    let holder_vtable = buf.write_vtable(4, &[0, 0]);
    let table = buf.start_table(holder_vtable);
    let data = buf.finish(table);

    let mut out = Vec::new();
    let error;
    {
        let options = PrintOptions {
            force_default: true,
            skip_default: true,
            ..Default::default()
        };
        let mut printer = Printer::for_writer(&mut out, options);
        fbjson_printer::table_as_root(&mut printer, &data, None, holder_callback);
        error = printer.error();
        printer.finish();
    }
    assert_eq!(error, None);
    assert_eq!(String::from_utf8(out).unwrap(), "{}");
}

#[test]
fn a_union_vector_prints_discriminants_and_variants_as_parallel_arrays() {
    let mut buf = Buf::new(None);
    let circle_vtable = buf.write_vtable(8, &[4]);
    let circle = buf.start_table(circle_vtable);
    buf.f32(1.5);
    let square_vtable = buf.write_vtable(8, &[4]);
    let square = buf.start_table(square_vtable);
    buf.f32(9.0);

    let types_vec = buf.write_u8_vector(&[1, 2]);
    let (values_vec, slots) = buf.reserve_offset_vector(2);
    buf.link(slots[0], circle);
    buf.link(slots[1], square);

    let scene_vtable = buf.write_vtable(12, &[4, 8]);
    let table = buf.start_table(scene_vtable);
    let types_slot = buf.pos();
    buf.u32(0);
    let values_slot = buf.pos();
    buf.u32(0);
    buf.link(types_slot, types_vec);
    buf.link(values_slot, values_vec);
    let data = buf.finish(table);

    let (json, error) = print_to_string(&data, scene_callback);
    assert_eq!(error, None);
    assert_eq!(
        json,
        r#"{"shapes_type":["Circle","Square"],"shapes":[{"radius":1.5},{"side":9.0}]}"#
    );
}
