//! Traversal state threaded through a table's field emitters, and the
//! callback types schema-generated code implements against.
//!
//! Mirrors `flatcc_json_printer_table_descriptor_t` from the reference
//! runtime: rather than re-deriving the vtable base, its size, and the
//! recursion budget on every field access, one descriptor is built once per
//! table and handed by reference to each field-emitter call the
//! schema-generated callback makes.

use crate::context::Printer;

/// Per-table traversal state, built once in [`crate::traversal::emit_table_object`]
/// and passed to every field emitter the table's callback invokes.
pub struct TableDescriptor {
    /// Address of the table's first field slot.
    pub table: *const u8,
    /// Address of this table's vtable (`table - soffset`).
    pub vtable: *const u8,
    /// Vtable byte size (its slot 0), used to bounds-check field lookups.
    pub vsize: usize,
    /// Recursion budget remaining after entering this table.
    pub ttl: u32,
    /// Fields emitted so far at this level, used to decide whether a
    /// separating comma is needed before the next one.
    pub count: u32,
    /// Discriminant most recently read by a `<name>_type` union-type field,
    /// consumed by the paired `<name>` union-value field that follows it.
    /// FlatBuffers schemas always emit the two fields adjacently, with the
    /// discriminant field first, so a single scalar slot suffices instead
    /// of a stack.
    pub pending_union_type: u8,
}

impl TableDescriptor {
    pub fn new(table: *const u8, vtable: *const u8, vsize: usize, ttl: u32) -> Self {
        TableDescriptor {
            table,
            vtable,
            vsize,
            ttl,
            count: 0,
            pending_union_type: 0,
        }
    }
}

/// Schema-generated per-table field-emission callback: given the printer
/// and this table's descriptor, call the field emitters for each field in
/// declaration order.
pub type TableCallback = fn(&mut Printer, &mut TableDescriptor);

/// Schema-generated per-struct field-emission callback: structs have no
/// vtable indirection, so the callback receives the struct's base address
/// directly instead of a descriptor, plus the emitted-field counter a
/// descriptor would otherwise carry.
pub type StructCallback = fn(&mut Printer, *const u8, &mut u32);

/// Schema-generated enum-to-symbol lookup: returns `None` for a value with
/// no matching enumerator (printed as its plain integer instead), or for a
/// bitflag value, the space-separated list of set flag names.
pub type EnumNameFn<T> = fn(T) -> Option<&'static str>;
