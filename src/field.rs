//! Field emitters: one function per FlatBuffers field shape, each
//! resolving the field through the vtable (or, for struct members, a
//! fixed byte offset) and printing it.
//!
//! The reference implementation expands one emitter per scalar type per
//! shape via `__define_json_printer_scalar_field` and its siblings —
//! eleven type instantiations of roughly a dozen shape macros. Here each
//! shape is one generic function over [`JsonScalar`]; schema-generated
//! call sites instantiate it with a concrete wire type the same way they
//! would instantiate the macro in the reference runtime.

use core::slice;

use crate::base64;
use crate::config::OFFSET_SIZE;
use crate::context::Printer;
use crate::descriptor::{EnumNameFn, StructCallback, TableCallback, TableDescriptor};
use crate::reader;
use crate::scalar::JsonScalar;
use crate::traversal;
use crate::vtable::get_field_ptr;

/// A table field holding a scalar value, printed as a bare JSON number
/// (or `true`/`false` for `bool`). An absent field is omitted entirely
/// unless [`crate::context::PrintOptions::force_default`] is set, in
/// which case it is synthesized from `default`;
/// [`crate::context::PrintOptions::skip_default`] then decides whether a
/// default-valued field (present or synthesized) is elided entirely.
pub fn scalar_field<T: JsonScalar>(printer: &mut Printer, desc: &mut TableDescriptor, id: u32, name: &str, default: T) {
    let value = match unsafe { get_field_ptr(desc.table, desc.vtable, desc.vsize, id) } {
        Some(p) => unsafe { T::read_le(p) },
        None => {
            if !printer.options.force_default {
                return;
            }
            default
        }
    };
    if printer.options.skip_default && value == default {
        return;
    }
    printer.print_name(&mut desc.count, name);
    printer.print_scalar(value);
}

/// A table field holding an enum (or bitflag) value stored as a scalar.
/// `name_fn` resolves the raw value to a symbolic name; a value with no
/// match (or when [`crate::context::PrintOptions::enum_as_integer`] is
/// set) falls back to the plain integer.
pub fn enum_field<T: JsonScalar>(
    printer: &mut Printer,
    desc: &mut TableDescriptor,
    id: u32,
    name: &str,
    default: T,
    name_fn: EnumNameFn<T>,
) {
    let value = match unsafe { get_field_ptr(desc.table, desc.vtable, desc.vsize, id) } {
        Some(p) => unsafe { T::read_le(p) },
        None => {
            if !printer.options.force_default {
                return;
            }
            default
        }
    };
    if printer.options.skip_default && value == default {
        return;
    }
    printer.print_name(&mut desc.count, name);
    print_enum_value(printer, value, name_fn);
}

fn print_enum_value<T: JsonScalar>(printer: &mut Printer, value: T, name_fn: EnumNameFn<T>) {
    if printer.options.enum_as_integer {
        printer.print_scalar(value);
        return;
    }
    match name_fn(value) {
        Some(symbol) => printer.print_symbol(symbol),
        None => printer.print_scalar(value),
    }
}

/// A scalar member embedded directly inside a struct at a fixed byte
/// offset. Structs have no vtable and no default: every member is always
/// present.
pub fn scalar_struct_field<T: JsonScalar>(
    printer: &mut Printer,
    struct_base: *const u8,
    offset: usize,
    count: &mut u32,
    name: &str,
) {
    let value = unsafe { T::read_le(struct_base.add(offset)) };
    printer.print_name(count, name);
    printer.print_scalar(value);
}

/// An enum member embedded directly inside a struct.
pub fn enum_struct_field<T: JsonScalar>(
    printer: &mut Printer,
    struct_base: *const u8,
    offset: usize,
    count: &mut u32,
    name: &str,
    name_fn: EnumNameFn<T>,
) {
    let value = unsafe { T::read_le(struct_base.add(offset)) };
    printer.print_name(count, name);
    print_enum_value(printer, value, name_fn);
}

/// A table field holding a UTF-8 string.
pub fn string_field(printer: &mut Printer, desc: &mut TableDescriptor, id: u32, name: &str) {
    if let Some(p) = unsafe { get_field_ptr(desc.table, desc.vtable, desc.vsize, id) } {
        let str_ptr = unsafe { reader::follow_uoffset(p) };
        let len = unsafe { reader::read_uoffset(str_ptr) } as usize;
        let bytes = unsafe { slice::from_raw_parts(str_ptr.add(OFFSET_SIZE), len) };
        printer.print_name(&mut desc.count, name);
        printer.print_quoted_string(bytes);
    }
}

/// A table field holding a `[ubyte]` vector, printed as a base64 string
/// instead of a numeric array. Encoding is streamed in bounded chunks so
/// it interleaves with buffer flushes on large payloads.
pub fn uint8_vector_base64_field(
    printer: &mut Printer,
    desc: &mut TableDescriptor,
    id: u32,
    name: &str,
    alphabet: &[u8; 64],
    padding: bool,
) {
    if let Some(p) = unsafe { get_field_ptr(desc.table, desc.vtable, desc.vsize, id) } {
        let vec_ptr = unsafe { reader::follow_uoffset(p) };
        let len = unsafe { reader::read_uoffset(vec_ptr) } as usize;
        let data = unsafe { slice::from_raw_parts(vec_ptr.add(OFFSET_SIZE), len) };
        printer.print_name(&mut desc.count, name);
        printer.buffer.put_byte(b'"');

        const CHUNK_GROUPS: usize = 256;
        let mut offset = 0usize;
        while data.len() - offset >= 3 {
            let groups = ((data.len() - offset) / 3).min(CHUNK_GROUPS);
            let mut out = [0u8; CHUNK_GROUPS * 4];
            base64::encode_groups(alphabet, &data[offset..], &mut out, groups);
            printer.buffer.put_bytes(&out[..groups * 4]);
            offset += groups * 3;
        }
        let mut tail = [0u8; 4];
        let written = base64::encode_final(alphabet, &data[offset..], &mut tail, padding);
        printer.buffer.put_bytes(&tail[..written]);

        printer.buffer.put_byte(b'"');
    }
}

/// A table field holding a vector of scalars.
pub fn scalar_vector_field<T: JsonScalar>(printer: &mut Printer, desc: &mut TableDescriptor, id: u32, name: &str) {
    if let Some(p) = unsafe { get_field_ptr(desc.table, desc.vtable, desc.vsize, id) } {
        let vec_ptr = unsafe { reader::follow_uoffset(p) };
        let len = unsafe { reader::read_uoffset(vec_ptr) } as usize;
        let data_ptr = unsafe { vec_ptr.add(OFFSET_SIZE) };
        printer.print_name(&mut desc.count, name);
        printer.start_array();
        let mut count = 0;
        for i in 0..len {
            let value = unsafe { T::read_le(data_ptr.add(i * T::SIZE)) };
            printer.item_prefix(&mut count);
            printer.print_scalar(value);
        }
        printer.end_array(count);
    }
}

/// A table field holding a vector of enum/bitflag values.
pub fn enum_vector_field<T: JsonScalar>(
    printer: &mut Printer,
    desc: &mut TableDescriptor,
    id: u32,
    name: &str,
    name_fn: EnumNameFn<T>,
) {
    if let Some(p) = unsafe { get_field_ptr(desc.table, desc.vtable, desc.vsize, id) } {
        let vec_ptr = unsafe { reader::follow_uoffset(p) };
        let len = unsafe { reader::read_uoffset(vec_ptr) } as usize;
        let data_ptr = unsafe { vec_ptr.add(OFFSET_SIZE) };
        printer.print_name(&mut desc.count, name);
        printer.start_array();
        let mut count = 0;
        for i in 0..len {
            let value = unsafe { T::read_le(data_ptr.add(i * T::SIZE)) };
            printer.item_prefix(&mut count);
            print_enum_value(printer, value, name_fn);
        }
        printer.end_array(count);
    }
}

/// A table field holding a vector of strings.
pub fn string_vector_field(printer: &mut Printer, desc: &mut TableDescriptor, id: u32, name: &str) {
    if let Some(p) = unsafe { get_field_ptr(desc.table, desc.vtable, desc.vsize, id) } {
        let vec_ptr = unsafe { reader::follow_uoffset(p) };
        let len = unsafe { reader::read_uoffset(vec_ptr) } as usize;
        let offsets_ptr = unsafe { vec_ptr.add(OFFSET_SIZE) };
        printer.print_name(&mut desc.count, name);
        printer.start_array();
        let mut count = 0;
        for i in 0..len {
            let slot = unsafe { offsets_ptr.add(i * OFFSET_SIZE) };
            let str_ptr = unsafe { reader::follow_uoffset(slot) };
            let slen = unsafe { reader::read_uoffset(str_ptr) } as usize;
            let bytes = unsafe { slice::from_raw_parts(str_ptr.add(OFFSET_SIZE), slen) };
            printer.item_prefix(&mut count);
            printer.print_quoted_string(bytes);
        }
        printer.end_array(count);
    }
}

/// A table field holding a vector of structs, stored inline (no per-element
/// offset indirection).
pub fn struct_vector_field(
    printer: &mut Printer,
    desc: &mut TableDescriptor,
    id: u32,
    name: &str,
    struct_size: usize,
    callback: StructCallback,
) {
    if let Some(p) = unsafe { get_field_ptr(desc.table, desc.vtable, desc.vsize, id) } {
        let vec_ptr = unsafe { reader::follow_uoffset(p) };
        let len = unsafe { reader::read_uoffset(vec_ptr) } as usize;
        let elems_ptr = unsafe { vec_ptr.add(OFFSET_SIZE) };
        printer.print_name(&mut desc.count, name);
        printer.start_array();
        let mut count = 0;
        for i in 0..len {
            let base = unsafe { elems_ptr.add(i * struct_size) };
            printer.item_prefix(&mut count);
            traversal::emit_struct_object(printer, base, callback);
        }
        printer.end_array(count);
    }
}

/// A table field holding a vector of tables, each referenced via its own
/// `uoffset_t` slot.
pub fn table_vector_field(printer: &mut Printer, desc: &mut TableDescriptor, id: u32, name: &str, callback: TableCallback) {
    if let Some(p) = unsafe { get_field_ptr(desc.table, desc.vtable, desc.vsize, id) } {
        let vec_ptr = unsafe { reader::follow_uoffset(p) };
        let len = unsafe { reader::read_uoffset(vec_ptr) } as usize;
        let elems_ptr = unsafe { vec_ptr.add(OFFSET_SIZE) };
        let ttl = desc.ttl;
        printer.print_name(&mut desc.count, name);
        printer.start_array();
        let mut count = 0;
        for i in 0..len {
            let slot = unsafe { elems_ptr.add(i * OFFSET_SIZE) };
            let table_ptr = unsafe { reader::follow_uoffset(slot) };
            printer.item_prefix(&mut count);
            traversal::emit_table_object(printer, table_ptr, ttl, callback);
        }
        printer.end_array(count);
    }
}

/// A table field holding a nested table reference.
pub fn table_field(printer: &mut Printer, desc: &mut TableDescriptor, id: u32, name: &str, callback: TableCallback) {
    if let Some(p) = unsafe { get_field_ptr(desc.table, desc.vtable, desc.vsize, id) } {
        let table_ptr = unsafe { reader::follow_uoffset(p) };
        let ttl = desc.ttl;
        printer.print_name(&mut desc.count, name);
        traversal::emit_table_object(printer, table_ptr, ttl, callback);
    }
}

/// A table field holding a nested struct, embedded inline.
pub fn struct_field(printer: &mut Printer, desc: &mut TableDescriptor, id: u32, name: &str, callback: StructCallback) {
    if let Some(p) = unsafe { get_field_ptr(desc.table, desc.vtable, desc.vsize, id) } {
        printer.print_name(&mut desc.count, name);
        traversal::emit_struct_object(printer, p, callback);
    }
}

/// A struct field embedding another struct directly, at a fixed offset.
pub fn embedded_struct_field(
    printer: &mut Printer,
    struct_base: *const u8,
    offset: usize,
    count: &mut u32,
    name: &str,
    callback: StructCallback,
) {
    printer.print_name(count, name);
    let nested = unsafe { struct_base.add(offset) };
    traversal::emit_struct_object(printer, nested, callback);
}

/// The `<name>_type` discriminant field preceding a union field. Stashes
/// the raw discriminant on the descriptor for the paired [`union_field`]
/// call that follows regardless of whether the key itself is printed, so
/// an absent discriminant still resolves to `NONE` for that call.
///
/// An absent discriminant slot is the normal encoding for an unset union:
/// unless [`crate::context::PrintOptions::force_default`] is set, nothing
/// is emitted for it at all (no `"name_type"` key), matching the two-slot
/// "either slot absent, emit nothing" union protocol.
pub fn union_type_field(printer: &mut Printer, desc: &mut TableDescriptor, id: u32, name: &str, name_fn: EnumNameFn<u8>) {
    let value = match unsafe { get_field_ptr(desc.table, desc.vtable, desc.vsize, id) } {
        Some(p) => unsafe { u8::read_le(p) },
        None => {
            desc.pending_union_type = 0;
            if !printer.options.force_default {
                return;
            }
            0
        }
    };
    desc.pending_union_type = value;
    if printer.options.skip_default && value == 0 {
        return;
    }
    printer.print_union_type_name(&mut desc.count, name);
    print_enum_value(printer, value, name_fn);
}

/// A union-valued field. `dispatch` is schema-generated: given the
/// discriminant stashed by the preceding [`union_type_field`] call and the
/// nested table's address, it prints the matching variant (or `null` for
/// discriminant 0 / `NONE`).
pub fn union_field(printer: &mut Printer, desc: &mut TableDescriptor, id: u32, name: &str, dispatch: fn(&mut Printer, u8, *const u8, u32)) {
    if let Some(p) = unsafe { get_field_ptr(desc.table, desc.vtable, desc.vsize, id) } {
        let table_ptr = unsafe { reader::follow_uoffset(p) };
        let ttl = desc.ttl;
        printer.print_name(&mut desc.count, name);
        dispatch(printer, desc.pending_union_type, table_ptr, ttl);
    }
}

/// The `<name>_type` discriminant vector preceding a [`union_vector_field`].
pub fn union_type_vector_field(printer: &mut Printer, desc: &mut TableDescriptor, id: u32, name: &str, name_fn: EnumNameFn<u8>) {
    if let Some(p) = unsafe { get_field_ptr(desc.table, desc.vtable, desc.vsize, id) } {
        let vec_ptr = unsafe { reader::follow_uoffset(p) };
        let len = unsafe { reader::read_uoffset(vec_ptr) } as usize;
        let data_ptr = unsafe { vec_ptr.add(OFFSET_SIZE) };
        printer.print_name(&mut desc.count, name);
        printer.start_array();
        let mut count = 0;
        for i in 0..len {
            let value = unsafe { core::ptr::read(data_ptr.add(i)) };
            printer.item_prefix(&mut count);
            print_enum_value(printer, value, name_fn);
        }
        printer.end_array(count);
    }
}

/// A vector-of-union field. Reads the parallel discriminant vector
/// (`types_id`) and value vector (`values_id`) together; the discriminant
/// vector's length is authoritative (see `DESIGN.md`'s Open Question
/// resolution) — it is not cross-checked against the value vector's own
/// length.
pub fn union_vector_field(
    printer: &mut Printer,
    desc: &mut TableDescriptor,
    types_id: u32,
    values_id: u32,
    name: &str,
    dispatch: fn(&mut Printer, u8, *const u8, u32),
) {
    let types_ptr = match unsafe { get_field_ptr(desc.table, desc.vtable, desc.vsize, types_id) } {
        Some(p) => unsafe { reader::follow_uoffset(p) },
        None => return,
    };
    let values_ptr = match unsafe { get_field_ptr(desc.table, desc.vtable, desc.vsize, values_id) } {
        Some(p) => unsafe { reader::follow_uoffset(p) },
        None => return,
    };
    let len = unsafe { reader::read_uoffset(types_ptr) } as usize;
    let type_data = unsafe { types_ptr.add(OFFSET_SIZE) };
    let value_elems = unsafe { values_ptr.add(OFFSET_SIZE) };
    let ttl = desc.ttl;

    printer.print_name(&mut desc.count, name);
    printer.start_array();
    let mut count = 0;
    for i in 0..len {
        let t = unsafe { core::ptr::read(type_data.add(i)) };
        let slot = unsafe { value_elems.add(i * OFFSET_SIZE) };
        let table_ptr = unsafe { reader::follow_uoffset(slot) };
        printer.item_prefix(&mut count);
        dispatch(printer, t, table_ptr, ttl);
    }
    printer.end_array(count);
}

/// A table field holding a `[ubyte]` vector that is itself a nested,
/// independently-rooted FlatBuffer. Recurses with the parent's remaining
/// recursion budget rather than resetting it.
pub fn table_as_nested_root_field(
    printer: &mut Printer,
    desc: &mut TableDescriptor,
    id: u32,
    name: &str,
    identifier: Option<&[u8; 4]>,
    callback: TableCallback,
) {
    if let Some(p) = unsafe { get_field_ptr(desc.table, desc.vtable, desc.vsize, id) } {
        let vec_ptr = unsafe { reader::follow_uoffset(p) };
        let len = unsafe { reader::read_uoffset(vec_ptr) } as usize;
        let nested = unsafe { slice::from_raw_parts(vec_ptr.add(OFFSET_SIZE), len) };
        let ttl = desc.ttl;
        printer.print_name(&mut desc.count, name);
        crate::root::table_as_root_with_ttl(printer, nested, identifier, ttl, callback);
    }
}

/// As [`table_as_nested_root_field`], but the nested buffer roots a struct.
pub fn struct_as_nested_root_field(
    printer: &mut Printer,
    desc: &mut TableDescriptor,
    id: u32,
    name: &str,
    identifier: Option<&[u8; 4]>,
    callback: StructCallback,
) {
    if let Some(p) = unsafe { get_field_ptr(desc.table, desc.vtable, desc.vsize, id) } {
        let vec_ptr = unsafe { reader::follow_uoffset(p) };
        let len = unsafe { reader::read_uoffset(vec_ptr) } as usize;
        let nested = unsafe { slice::from_raw_parts(vec_ptr.add(OFFSET_SIZE), len) };
        printer.print_name(&mut desc.count, name);
        crate::root::struct_as_root(printer, nested, identifier, callback);
    }
}
