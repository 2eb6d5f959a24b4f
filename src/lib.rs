//! Streaming FlatBuffers-to-JSON printer.
//!
//! A Rust port of flatcc's `json_printer` runtime: given raw FlatBuffer
//! bytes and schema-generated field-emission callbacks, prints the
//! equivalent JSON incrementally to a file-like sink, a caller-owned fixed
//! buffer, or a growable owned buffer — without first materializing the
//! whole document in memory.

pub mod base64;
pub mod buffer;
pub mod config;
pub mod context;
pub mod descriptor;
pub mod error;
pub mod field;
pub mod reader;
pub mod root;
pub mod scalar;
pub mod text;
pub mod traversal;
pub mod vtable;

pub use context::{PrintOptions, Printer};
pub use descriptor::{EnumNameFn, StructCallback, TableCallback, TableDescriptor};
pub use error::ErrorCode;
pub use root::{accept_header, struct_as_root, table_as_root};
pub use scalar::JsonScalar;
