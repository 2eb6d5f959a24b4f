//! End-to-end: scalar fields, schema defaults, and the force-default /
//! skip-default policies.

#[path = "support.rs"]
mod support;

use fbjson_printer::{field, ErrorCode, PrintOptions, Printer, TableDescriptor};
use support::Buf;

fn stats_callback(printer: &mut Printer, desc: &mut TableDescriptor) {
    field::scalar_field::<i32>(printer, desc, 0, "hp", 100);
    field::scalar_field::<u8>(printer, desc, 1, "level", 1);
    field::scalar_field::<i64>(printer, desc, 2, "score", 0);
}

fn print_to_string(data: &[u8], options: PrintOptions) -> (String, Option<ErrorCode>) {
    let mut out = Vec::new();
    let error;
    {
        let mut printer = Printer::for_writer(&mut out, options);
        fbjson_printer::table_as_root(&mut printer, data, None, stats_callback);
        error = printer.error();
        printer.finish();
    }
    (String::from_utf8(out).unwrap(), error)
}

fn empty_stats_buffer() -> Vec<u8> {
    let mut buf = Buf::new(None);
    let vtable = buf.write_vtable(4, &[0, 0, 0]);
    let table = buf.start_table(vtable);
    buf.finish(table)
}

fn populated_stats_buffer(hp: i32, level: u8, score: i64) -> Vec<u8> {
    let mut buf = Buf::new(None);
    let vtable = buf.write_vtable(17, &[4, 8, 9]);
    let table = buf.start_table(vtable);
    buf.i32(hp);
    buf.u8(level);
    buf.i64(score);
    buf.finish(table)
}

#[test]
fn absent_fields_are_omitted_by_default() {
    // force_default is off by default: an absent field is not
    // synthesized from its schema default, it is simply not printed.
    let data = empty_stats_buffer();
    let (json, error) = print_to_string(&data, PrintOptions::default());
    assert_eq!(error, None);
    assert_eq!(json, "{}");
}

#[test]
fn defaults_are_elided_when_skip_default_is_on() {
    let data = empty_stats_buffer();
    let options = PrintOptions {
        skip_default: true,
        ..Default::default()
    };
    let (json, error) = print_to_string(&data, options);
    assert_eq!(error, None);
    assert_eq!(json, "{}");
}

#[test]
fn force_default_materializes_absent_fields_with_their_schema_default() {
    let data = empty_stats_buffer();
    let options = PrintOptions {
        force_default: true,
        ..Default::default()
    };
    let (json, error) = print_to_string(&data, options);
    assert_eq!(error, None);
    assert_eq!(json, r#"{"hp":100,"level":1,"score":0}"#);
}

#[test]
fn force_default_with_skip_default_still_elides_a_default_valued_absent_field() {
    let data = empty_stats_buffer();
    let options = PrintOptions {
        force_default: true,
        skip_default: true,
        ..Default::default()
    };
    let (json, error) = print_to_string(&data, options);
    assert_eq!(error, None);
    assert_eq!(json, "{}");
}

#[test]
fn non_default_scalars_are_always_printed_even_when_skipping_defaults() {
    let data = populated_stats_buffer(42, 7, -9);
    let options = PrintOptions {
        skip_default: true,
        ..Default::default()
    };
    let (json, error) = print_to_string(&data, options);
    assert_eq!(error, None);
    assert_eq!(json, r#"{"hp":42,"level":7,"score":-9}"#);
}

#[test]
fn a_value_equal_to_default_is_still_printed_without_the_policy() {
    let data = populated_stats_buffer(100, 1, 0);
    let (json, error) = print_to_string(&data, PrintOptions::default());
    assert_eq!(error, None);
    assert_eq!(json, r#"{"hp":100,"level":1,"score":0}"#);
}
