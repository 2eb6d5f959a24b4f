//! End-to-end: pretty-printing, enum-as-integer, and unquoted-names,
//! exercised together and in isolation.

#[path = "support.rs"]
mod support;

use fbjson_printer::{field, PrintOptions, Printer, TableDescriptor};
use support::Buf;

fn color_name(v: u8) -> Option<&'static str> {
    match v {
        0 => Some("Red"),
        1 => Some("Green"),
        2 => Some("Blue"),
        _ => None,
    }
}

fn widget_callback(printer: &mut Printer, desc: &mut TableDescriptor) {
    field::enum_field::<u8>(printer, desc, 0, "color", 0, color_name);
    field::scalar_vector_field::<i32>(printer, desc, 1, "values");
}

fn widget_buffer(color: u8, values: &[i32]) -> Vec<u8> {
    let mut buf = Buf::new(None);
    let vec_start = buf.write_i32_vector(values);
    let vtable = buf.write_vtable(12, &[4, 8]);
    let table = buf.start_table(vtable);
    buf.u8(color);
    buf.pad(3);
    let values_slot = buf.pos();
    buf.u32(0);
    buf.link(values_slot, vec_start);
    buf.finish(table)
}

fn print_to_string(data: &[u8], options: PrintOptions) -> String {
    let mut out = Vec::new();
    {
        let mut printer = Printer::for_writer(&mut out, options);
        fbjson_printer::table_as_root(&mut printer, data, None, widget_callback);
        assert_eq!(printer.error(), None);
        printer.finish();
    }
    String::from_utf8(out).unwrap()
}

#[test]
fn compact_mode_has_no_whitespace_between_tokens() {
    let data = widget_buffer(1, &[1, 2, 3]);
    let json = print_to_string(&data, PrintOptions::default());
    assert_eq!(json, r#"{"color":"Green","values":[1,2,3]}"#);
}

#[test]
fn pretty_mode_indents_nested_arrays_and_objects() {
    let data = widget_buffer(1, &[1, 2]);
    let options = PrintOptions {
        pretty: true,
        ..Default::default()
    };
    let json = print_to_string(&data, options);
    assert_eq!(
        json,
        "{\n  \"color\": \"Green\",\n  \"values\": [\n    1,\n    2\n  ]\n}"
    );
}

#[test]
fn pretty_mode_keeps_an_empty_array_on_one_line() {
    let data = widget_buffer(0, &[]);
    let options = PrintOptions {
        pretty: true,
        ..Default::default()
    };
    let json = print_to_string(&data, options);
    assert_eq!(json, "{\n  \"color\": \"Red\",\n  \"values\": []\n}");
}

#[test]
fn enum_as_integer_policy_prints_the_raw_discriminant_instead_of_the_symbol() {
    let data = widget_buffer(2, &[]);
    let options = PrintOptions {
        enum_as_integer: true,
        ..Default::default()
    };
    let json = print_to_string(&data, options);
    assert_eq!(json, r#"{"color":2,"values":[]}"#);
}

#[test]
fn an_enum_value_with_no_matching_symbol_falls_back_to_its_integer() {
    let data = widget_buffer(99, &[]);
    let json = print_to_string(&data, PrintOptions::default());
    assert_eq!(json, r#"{"color":99,"values":[]}"#);
}

#[test]
fn unquoted_names_and_pretty_printing_compose() {
    let data = widget_buffer(1, &[7]);
    let options = PrintOptions {
        pretty: true,
        unquoted_names: true,
        ..Default::default()
    };
    let json = print_to_string(&data, options);
    assert_eq!(json, "{\n  color: \"Green\",\n  values: [\n    7\n  ]\n}");
}

#[test]
fn skip_default_elides_a_default_valued_enum_but_keeps_a_non_default_one() {
    let data = widget_buffer(0, &[5]);
    let options = PrintOptions {
        skip_default: true,
        ..Default::default()
    };
    let json = print_to_string(&data, options);
    assert_eq!(json, r#"{"values":[5]}"#);
}
