// config.rs — Compile-time configuration constants.
// Migrated from the FLATCC_JSON_PRINT_* macros in flatcc_json_printer.h /
// flatcc_rtconfig.h (not present in the kept reference source, reconstructed
// from their use sites in json_printer.c).

/// Reserve-tail size in bytes: large enough that any single primitive emit
/// (a full `i64`/`u64` decimal, a full `f64` literal, the widest `\u00XX`
/// escape, or the `"false"` keyword plus its quotes) fits without a
/// per-byte bounds check. Corresponds to `FLATCC_JSON_PRINT_RESERVE`.
pub const RESERVE: usize = 32;

/// Default total buffer size for the file-sink and dynamic-buffer
/// constructors when the caller does not specify one.
/// Corresponds to `FLATCC_JSON_PRINT_BUFFER_SIZE`.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Default flush-size for the file sink: the number of bytes written per
/// partial flush. Corresponds to `FLATCC_JSON_PRINT_FLUSH_SIZE`.
pub const DEFAULT_FLUSH_SIZE: usize = DEFAULT_BUFFER_SIZE - RESERVE;

/// Initial capacity for the growable dynamic-buffer sink when the caller
/// passes 0. Corresponds to `FLATCC_JSON_PRINT_DYN_BUFFER_SIZE`.
pub const DYNAMIC_BUFFER_INITIAL_SIZE: usize = 1024;

/// Default recursion budget handed to `table_as_root` / `struct_as_root`
/// when the caller does not override it. Corresponds to
/// `FLATCC_JSON_PRINT_MAX_LEVELS`.
pub const MAX_LEVELS_DEFAULT: u32 = 100;

/// Cap on a field's name length used when synthesizing the `<name>_type`
/// union discriminant key on the stack. A name longer than this latches
/// `bad_input` instead of emitting a (possibly truncated) key.
/// Corresponds to `FLATCC_JSON_PRINT_NAME_LEN_MAX`.
pub const IDENTIFIER_LENGTH_MAX: usize = 200;

/// FlatBuffers wire-format identifier width in bytes.
pub const IDENTIFIER_SIZE: usize = 4;

/// FlatBuffers `uoffset_t` / `soffset_t` / root-offset width in bytes.
pub const OFFSET_SIZE: usize = 4;

/// FlatBuffers `voffset_t` width in bytes.
pub const VOFFSET_SIZE: usize = 2;

/// Spaces per indent level in pretty-printed output.
pub const INDENT_WIDTH: usize = 2;
