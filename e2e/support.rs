//! Hand-rolled FlatBuffer byte fixtures for the end-to-end tests in this
//! directory.
//!
//! This crate is a reader only, so there is no builder dependency to reach
//! for (adding one to encode fixtures would pull in the very library this
//! crate reimplements the decoder half of). Layout mirrors what a real
//! FlatBuffers builder emits, but packed tightly with no padding: every
//! read in [`fbjson_printer::reader`] is unaligned, so nothing here
//! depends on natural alignment.

#![allow(dead_code)]

pub struct Buf {
    data: Vec<u8>,
}

impl Buf {
    /// Start a buffer, reserving the 4-byte root offset header and an
    /// optional 4-byte file identifier right after it.
    pub fn new(identifier: Option<&[u8; 4]>) -> Self {
        let mut data = vec![0u8; 4];
        if let Some(id) = identifier {
            data.extend_from_slice(id);
        }
        Buf { data }
    }

    pub fn pos(&self) -> usize {
        self.data.len()
    }

    pub fn pad(&mut self, n: usize) {
        self.data.extend(std::iter::repeat(0u8).take(n));
    }

    pub fn u8(&mut self, v: u8) {
        self.data.push(v);
    }
    pub fn i8(&mut self, v: i8) {
        self.data.push(v as u8);
    }
    pub fn u16(&mut self, v: u16) {
        self.data.extend_from_slice(&v.to_le_bytes());
    }
    pub fn i16(&mut self, v: i16) {
        self.data.extend_from_slice(&v.to_le_bytes());
    }
    pub fn u32(&mut self, v: u32) {
        self.data.extend_from_slice(&v.to_le_bytes());
    }
    pub fn i32(&mut self, v: i32) {
        self.data.extend_from_slice(&v.to_le_bytes());
    }
    pub fn u64(&mut self, v: u64) {
        self.data.extend_from_slice(&v.to_le_bytes());
    }
    pub fn i64(&mut self, v: i64) {
        self.data.extend_from_slice(&v.to_le_bytes());
    }
    pub fn f32(&mut self, v: f32) {
        self.data.extend_from_slice(&v.to_le_bytes());
    }
    pub fn f64(&mut self, v: f64) {
        self.data.extend_from_slice(&v.to_le_bytes());
    }
    pub fn bytes(&mut self, b: &[u8]) {
        self.data.extend_from_slice(b);
    }

    /// Patch a `uoffset_t` slot at `slot` so it resolves (self-relative)
    /// to `target`.
    pub fn patch_uoffset(&mut self, slot: usize, target: usize) {
        let value = (target as i64 - slot as i64) as u32;
        self.data[slot..slot + 4].copy_from_slice(&value.to_le_bytes());
    }

    /// Write a string object (`uoffset_t` length + UTF-8 bytes), returning
    /// its absolute start offset.
    pub fn write_string(&mut self, s: &str) -> usize {
        let start = self.pos();
        self.u32(s.len() as u32);
        self.bytes(s.as_bytes());
        start
    }

    /// Write a `[ubyte]` vector object, returning its absolute start
    /// offset.
    pub fn write_u8_vector(&mut self, data: &[u8]) -> usize {
        let start = self.pos();
        self.u32(data.len() as u32);
        self.bytes(data);
        start
    }

    /// Write a `[int32]` vector object, returning its absolute start
    /// offset.
    pub fn write_i32_vector(&mut self, data: &[i32]) -> usize {
        let start = self.pos();
        self.u32(data.len() as u32);
        for &v in data {
            self.i32(v);
        }
        start
    }

    /// Reserve a `[string]` / `[table]` vector's length + offset slots,
    /// returning (start offset, the slot offsets for each element in
    /// order). Caller writes each referenced object afterward and patches
    /// the slots with [`Buf::patch_uoffset`].
    pub fn reserve_offset_vector(&mut self, len: usize) -> (usize, Vec<usize>) {
        let start = self.pos();
        self.u32(len as u32);
        let mut slots = Vec::with_capacity(len);
        for _ in 0..len {
            slots.push(self.pos());
            self.u32(0);
        }
        (start, slots)
    }

    /// Write a vtable (slot 0 = its own size, slot 1 = the table's inline
    /// byte size, then one `voffset_t` per field id in order; `0` means
    /// absent). Returns the vtable's absolute start offset.
    pub fn write_vtable(&mut self, object_size: u16, field_offsets: &[u16]) -> usize {
        let start = self.pos();
        let vsize = (4 + field_offsets.len() * 2) as u16;
        self.u16(vsize);
        self.u16(object_size);
        for &off in field_offsets {
            self.u16(off);
        }
        start
    }

    /// Begin a table referencing an already-written vtable, returning the
    /// table's absolute start offset. The caller writes inline field bytes
    /// immediately afterward, at the byte positions the vtable's slots
    /// declare.
    pub fn start_table(&mut self, vtable_offset: usize) -> usize {
        let start = self.pos();
        let soffset = (start as i64 - vtable_offset as i64) as i32;
        self.i32(soffset);
        start
    }

    /// Patch `slot` (a `uoffset_t` field slot within a table) to point at
    /// an already-written offset object.
    pub fn link(&mut self, slot: usize, target: usize) {
        self.patch_uoffset(slot, target);
    }

    /// Finish the buffer: patch the root header to point at `root_offset`.
    pub fn finish(mut self, root_offset: usize) -> Vec<u8> {
        self.patch_uoffset(0, root_offset);
        self.data
    }
}
