//! End-to-end: string fields, JSON escaping, and string vectors.

#[path = "support.rs"]
mod support;

use fbjson_printer::{field, ErrorCode, PrintOptions, Printer, TableDescriptor};
use support::Buf;

fn doc_callback(printer: &mut Printer, desc: &mut TableDescriptor) {
    field::string_field(printer, desc, 0, "name");
    field::string_vector_field(printer, desc, 1, "tags");
}

fn print_to_string(data: &[u8], options: PrintOptions) -> (String, Option<ErrorCode>) {
    let mut out = Vec::new();
    let error;
    {
        let mut printer = Printer::for_writer(&mut out, options);
        fbjson_printer::table_as_root(&mut printer, data, None, doc_callback);
        error = printer.error();
        printer.finish();
    }
    (String::from_utf8(out).unwrap(), error)
}

/// Build a `Doc` table holding only the `name` string field (field id 0,
/// at vtable offset 4, immediately after the table's `soffset_t`).
fn doc_with_name(name: &str) -> Vec<u8> {
    let mut buf = Buf::new(None);
    let name_obj = buf.write_string(name);
    let vtable = buf.write_vtable(8, &[4, 0]);
    let table = buf.start_table(vtable);
    let name_slot = buf.pos();
    buf.u32(0);
    buf.link(name_slot, name_obj);
    buf.finish(table)
}

#[test]
fn a_string_with_no_special_characters_prints_unescaped() {
    let data = doc_with_name("hello world");
    let (json, error) = print_to_string(&data, PrintOptions::default());
    assert_eq!(error, None);
    assert_eq!(json, r#"{"name":"hello world"}"#);
}

#[test]
fn control_characters_and_json_reserved_bytes_are_escaped() {
    let data = doc_with_name("a\"b\\c\nd\te\x01f");
    let (json, error) = print_to_string(&data, PrintOptions::default());
    assert_eq!(error, None);
    assert_eq!(json, r#"{"name":"a\"b\\c\nd\tef"}"#);
}

#[test]
fn an_absent_string_field_is_omitted_entirely() {
    let mut buf = Buf::new(None);
    let vtable = buf.write_vtable(4, &[0, 0]);
    let table = buf.start_table(vtable);
    let data = buf.finish(table);

    let (json, error) = print_to_string(&data, PrintOptions::default());
    assert_eq!(error, None);
    assert_eq!(json, "{}");
}

#[test]
fn a_string_vector_prints_each_element_in_order() {
    let mut buf = Buf::new(None);
    let a = buf.write_string("alpha");
    let b = buf.write_string("beta");
    let (vec_start, slots) = buf.reserve_offset_vector(2);
    buf.link(slots[0], a);
    buf.link(slots[1], b);

    let vtable = buf.write_vtable(8, &[0, 4]);
    let table = buf.start_table(vtable);
    let tags_slot = buf.pos();
    buf.u32(0);
    buf.link(tags_slot, vec_start);
    let data = buf.finish(table);

    let (json, error) = print_to_string(&data, PrintOptions::default());
    assert_eq!(error, None);
    assert_eq!(json, r#"{"tags":["alpha","beta"]}"#);
}

#[test]
fn an_empty_string_vector_prints_as_an_empty_array() {
    let mut buf = Buf::new(None);
    let (vec_start, _slots) = buf.reserve_offset_vector(0);

    let vtable = buf.write_vtable(8, &[0, 4]);
    let table = buf.start_table(vtable);
    let tags_slot = buf.pos();
    buf.u32(0);
    buf.link(tags_slot, vec_start);
    let data = buf.finish(table);

    let (json, error) = print_to_string(&data, PrintOptions::default());
    assert_eq!(error, None);
    assert_eq!(json, r#"{"tags":[]}"#);
}

#[test]
fn unquoted_names_policy_drops_key_quotes_but_not_string_value_quotes() {
    let data = doc_with_name("hi");
    let options = PrintOptions {
        unquoted_names: true,
        ..Default::default()
    };
    let (json, error) = print_to_string(&data, options);
    assert_eq!(error, None);
    assert_eq!(json, r#"{name:"hi"}"#);
}
