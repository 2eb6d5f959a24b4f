//! End-to-end: nested tables, nested structs, and recursion-budget
//! (`ttl`) exhaustion.

#[path = "support.rs"]
mod support;

use fbjson_printer::{field, ErrorCode, PrintOptions, Printer, TableDescriptor};
use support::Buf;

fn node_callback(printer: &mut Printer, desc: &mut TableDescriptor) {
    field::scalar_field::<i32>(printer, desc, 0, "value", 0);
    field::table_field(printer, desc, 1, "next", node_callback);
}

fn three_level_chain() -> Vec<u8> {
    let mut buf = Buf::new(None);
    let leaf_vtable = buf.write_vtable(8, &[4, 0]);
    let leaf = buf.start_table(leaf_vtable);
    buf.i32(3);

    let child_vtable = buf.write_vtable(12, &[4, 8]);
    let child = buf.start_table(child_vtable);
    buf.i32(2);
    let child_next_slot = buf.pos();
    buf.u32(0);
    buf.link(child_next_slot, leaf);

    let root_vtable = buf.write_vtable(12, &[4, 8]);
    let root = buf.start_table(root_vtable);
    buf.i32(1);
    let root_next_slot = buf.pos();
    buf.u32(0);
    buf.link(root_next_slot, child);

    buf.finish(root)
}

fn print_with(data: &[u8], options: PrintOptions) -> (String, Option<ErrorCode>) {
    let mut out = Vec::new();
    let error;
    {
        let mut printer = Printer::for_writer(&mut out, options);
        fbjson_printer::table_as_root(&mut printer, data, None, node_callback);
        error = printer.error();
        printer.finish();
    }
    (String::from_utf8(out).unwrap(), error)
}

#[test]
fn a_deeply_nested_chain_prints_fully_within_the_default_budget() {
    let data = three_level_chain();
    let (json, error) = print_with(&data, PrintOptions::default());
    assert_eq!(error, None);
    assert_eq!(json, r#"{"value":1,"next":{"value":2,"next":{"value":3}}}"#);
}

#[test]
fn exhausting_the_recursion_budget_latches_deep_recursion_and_emits_no_further_body() {
    // Once `ttl` hits zero, `emit_table_object` latches the error and
    // returns without printing anything for that table — not even `{}`
    // or `null` — so the key the caller already printed is left with no
    // value. The core favors a branchless hot path over a well-formed
    // document on failure; callers must consult the error before
    // trusting the output (see DESIGN.md / SPEC_FULL §7).
    let data = three_level_chain();
    let options = PrintOptions {
        max_levels: 2,
        ..Default::default()
    };
    let (json, error) = print_with(&data, options);
    assert_eq!(error, Some(ErrorCode::DeepRecursion));
    assert_eq!(json, r#"{"value":1,"next":{"value":2,"next":}}"#);
}

#[test]
fn a_budget_of_one_truncates_at_the_first_nested_table() {
    let data = three_level_chain();
    let options = PrintOptions {
        max_levels: 1,
        ..Default::default()
    };
    let mut out = Vec::new();
    let error;
    {
        let mut printer = Printer::for_writer(&mut out, options);
        fbjson_printer::table_as_root(&mut printer, &data, None, node_callback);
        error = printer.error();
        printer.finish();
    }
    assert_eq!(error, Some(ErrorCode::DeepRecursion));
    assert_eq!(String::from_utf8(out).unwrap(), r#"{"value":1,"next":}"#);
}

// -- nested structs ----------------------------------------------------------

fn point_struct_callback(printer: &mut Printer, struct_base: *const u8, count: &mut u32) {
    field::scalar_struct_field::<i32>(printer, struct_base, 0, count, "x");
    field::scalar_struct_field::<i32>(printer, struct_base, 4, count, "y");
}

fn segment_table_callback(printer: &mut Printer, desc: &mut TableDescriptor) {
    field::struct_field(printer, desc, 0, "start", point_struct_callback);
}

#[test]
fn a_struct_field_embedded_in_a_table_prints_as_a_nested_object() {
    let mut buf = Buf::new(None);
    let vtable = buf.write_vtable(12, &[4]);
    let table = buf.start_table(vtable);
    buf.i32(5);
    buf.i32(-6);
    let data = buf.finish(table);

    let mut out = Vec::new();
    let error;
    {
        let mut printer = Printer::for_writer(&mut out, PrintOptions::default());
        fbjson_printer::table_as_root(&mut printer, &data, None, segment_table_callback);
        error = printer.error();
        printer.finish();
    }
    assert_eq!(error, None);
    assert_eq!(String::from_utf8(out).unwrap(), r#"{"start":{"x":5,"y":-6}}"#);
}
