#![no_main]
use libfuzzer_sys::fuzz_target;

use fbjson_printer::{field, PrintOptions, Printer, TableDescriptor};

#[path = "../../e2e/support.rs"]
mod support;
use support::Buf;

fn doc_callback(printer: &mut Printer, desc: &mut TableDescriptor) {
    field::string_field(printer, desc, 0, "text");
}

fuzz_target!(|data: &[u8]| {
    // Only the string *payload* is arbitrary (and not required to be valid
    // UTF-8 — the escaper treats it as raw bytes); the table/vtable wrapper
    // around it is always well-formed, so this stays scoped to the escaping
    // logic rather than arbitrary-byte table traversal.
    let payload = &data[..data.len().min(4096)];
    let mut buf = Buf::new(None);
    let start = buf.pos();
    buf.u32(payload.len() as u32);
    buf.bytes(payload);
    let vtable = buf.write_vtable(8, &[4]);
    let table = buf.start_table(vtable);
    let slot = buf.pos();
    buf.u32(0);
    buf.link(slot, start);
    let fb = buf.finish(table);

    let mut out = Vec::new();
    let mut printer = Printer::for_writer(&mut out, PrintOptions::default());
    fbjson_printer::table_as_root(&mut printer, &fb, None, doc_callback);
    printer.finish();
});
