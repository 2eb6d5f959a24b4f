//! Unaligned little-endian reads from raw FlatBuffer byte addresses.
//!
//! Mirrors the `__flatbuffers_*_read_from_pe` inline helpers the reference
//! implementation calls at every field access, and the unaligned
//! read/write helpers in the ported codec's own `block::types` module —
//! same `ptr::read_unaligned` technique, reused here for reading someone
//! else's wire format instead of writing our own.
//!
//! The FlatBuffer input is treated as read-only and is never bounds-checked
//! past the root header (see the crate's non-goals): callers are
//! responsible for handing in a structurally valid buffer. This mirrors the
//! reference C runtime, which performs the same unchecked pointer
//! arithmetic.

use core::ptr;

/// Read an unaligned little-endian `u16`.
///
/// # Safety
/// `ptr` must be valid for reads of at least 2 bytes.
#[inline(always)]
pub unsafe fn read_u16(ptr: *const u8) -> u16 {
    u16::from_le(ptr::read_unaligned(ptr as *const u16))
}

/// Read an unaligned little-endian `u32`.
///
/// # Safety
/// `ptr` must be valid for reads of at least 4 bytes.
#[inline(always)]
pub unsafe fn read_u32(ptr: *const u8) -> u32 {
    u32::from_le(ptr::read_unaligned(ptr as *const u32))
}

/// Read an unaligned little-endian `u64`.
///
/// # Safety
/// `ptr` must be valid for reads of at least 8 bytes.
#[inline(always)]
pub unsafe fn read_u64(ptr: *const u8) -> u64 {
    u64::from_le(ptr::read_unaligned(ptr as *const u64))
}

/// Read an unaligned little-endian `i32` (the FlatBuffers `soffset_t`).
///
/// # Safety
/// `ptr` must be valid for reads of at least 4 bytes.
#[inline(always)]
pub unsafe fn read_i32(ptr: *const u8) -> i32 {
    read_u32(ptr) as i32
}

/// Read an unaligned little-endian `voffset_t` (`u16`).
///
/// # Safety
/// `ptr` must be valid for reads of at least 2 bytes.
#[inline(always)]
pub unsafe fn read_voffset(ptr: *const u8) -> u16 {
    read_u16(ptr)
}

/// Read an unaligned little-endian `uoffset_t` (`u32`).
///
/// # Safety
/// `ptr` must be valid for reads of at least 4 bytes.
#[inline(always)]
pub unsafe fn read_uoffset(ptr: *const u8) -> u32 {
    read_u32(ptr)
}

/// Follow a `uoffset_t` stored at `ptr`, returning the pointer it targets.
///
/// FlatBuffers offsets are relative to the field that stores them, so the
/// result is `ptr + read_uoffset(ptr)`.
///
/// # Safety
/// `ptr` must be valid for reads of at least 4 bytes, and the resulting
/// pointer must itself be valid for whatever the caller reads next.
#[inline(always)]
pub unsafe fn follow_uoffset(ptr: *const u8) -> *const u8 {
    ptr.add(read_uoffset(ptr) as usize)
}

/// Read an unaligned little-endian `f32`.
///
/// # Safety
/// `ptr` must be valid for reads of at least 4 bytes.
#[inline(always)]
pub unsafe fn read_f32(ptr: *const u8) -> f32 {
    f32::from_bits(read_u32(ptr))
}

/// Read an unaligned little-endian `f64`.
///
/// # Safety
/// `ptr` must be valid for reads of at least 8 bytes.
#[inline(always)]
pub unsafe fn read_f64(ptr: *const u8) -> f64 {
    f64::from_bits(read_u64(ptr))
}
