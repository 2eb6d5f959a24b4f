//! Table and struct object traversal: resolving a table's vtable,
//! enforcing the recursion budget, and wrapping a schema-generated
//! callback's fields in `{ }`.
//!
//! Mirrors `flatcc_json_printer_table_as_root`'s inner traversal step and
//! `flatcc_json_printer_struct_as_root`, generalized here to any nested
//! table/struct reference, not just the root.

use crate::descriptor::{StructCallback, TableCallback, TableDescriptor};
use crate::context::Printer;
use crate::error::ErrorCode;
use crate::reader;

/// Enter a table at `table_ptr`, resolve its vtable, and invoke `callback`
/// with a fresh descriptor. If `ttl` has reached zero, latches
/// [`ErrorCode::DeepRecursion`] and returns without emitting any further
/// output for this table — not even `{}` or `null`.
pub fn emit_table_object(printer: &mut Printer, table_ptr: *const u8, ttl: u32, callback: TableCallback) {
    if ttl == 0 {
        printer.latch(ErrorCode::DeepRecursion);
        return;
    }
    let soffset = unsafe { reader::read_i32(table_ptr) };
    let vtable = unsafe { table_ptr.offset(-(soffset as isize)) };
    let vsize = unsafe { reader::read_voffset(vtable) } as usize;
    let mut desc = TableDescriptor::new(table_ptr, vtable, vsize, ttl - 1);
    printer.start_object();
    callback(printer, &mut desc);
    printer.end_object(desc.count);
}

/// Enter a struct at `struct_base` and invoke `callback`. Structs carry no
/// vtable and their nesting depth is fixed by the schema, so no recursion
/// budget applies here.
pub fn emit_struct_object(printer: &mut Printer, struct_base: *const u8, callback: StructCallback) {
    printer.start_object();
    let mut count = 0;
    callback(printer, struct_base, &mut count);
    printer.end_object(count);
}
