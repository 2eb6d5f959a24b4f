//! Generic scalar read/format, replacing the reference implementation's
//! per-type macro expansion (`__define_json_printer_scalar(uint8, ...)`,
//! `..._scalar(int64, ...)`, etc. — one hand-expanded function family per
//! of the eleven scalar types) with one generic function family
//! parameterized over [`JsonScalar`]. The ported codec's own block/frame
//! split uses traits to generalize over buffer-kind rather than
//! duplicating logic per mode; this is the same move applied to the
//! json printer's scalar-type zoo.
//!
//! Numeric formatting itself is delegated to `itoa`/`ryu`, matching the
//! "formatting a base-10 integer or float is not this crate's algorithm"
//! framing: the in-scope work is wiring each wire type to its decimal
//! writer and to unaligned reads, not digit generation.

use crate::config::RESERVE;
use crate::reader;

/// A FlatBuffers scalar type: fixed-width, little-endian on the wire, and
/// representable as a JSON number, `true`/`false`, or (only for `Bool`)
/// these two literals instead of `0`/`1`.
pub trait JsonScalar: Copy + PartialEq + Sized {
    /// Wire width in bytes.
    const SIZE: usize;

    /// Zero value, used by "skip if default" field elision.
    const ZERO: Self;

    /// Read one value, unaligned, little-endian, from `ptr`.
    ///
    /// # Safety
    /// `ptr` must be valid for reads of `Self::SIZE` bytes.
    unsafe fn read_le(ptr: *const u8) -> Self;

    /// Write the JSON representation into `buf`, returning the number of
    /// bytes written. `buf` is guaranteed to have at least [`RESERVE`]
    /// bytes available; the reserve is sized to fit the longest output any
    /// impl below can produce.
    fn write_json(self, buf: &mut [u8]) -> usize;
}

const _: () = assert!(RESERVE >= 24, "reserve must fit the longest scalar rendering");

macro_rules! impl_json_scalar_int {
    ($t:ty, $read:path) => {
        impl JsonScalar for $t {
            const SIZE: usize = core::mem::size_of::<$t>();
            const ZERO: Self = 0;

            #[inline]
            unsafe fn read_le(ptr: *const u8) -> Self {
                $read(ptr) as $t
            }

            #[inline]
            fn write_json(self, buf: &mut [u8]) -> usize {
                let mut itoa_buf = itoa::Buffer::new();
                let s = itoa_buf.format(self);
                buf[..s.len()].copy_from_slice(s.as_bytes());
                s.len()
            }
        }
    };
}

macro_rules! impl_json_scalar_byte {
    ($t:ty) => {
        impl JsonScalar for $t {
            const SIZE: usize = 1;
            const ZERO: Self = 0;

            #[inline]
            unsafe fn read_le(ptr: *const u8) -> Self {
                core::ptr::read(ptr) as $t
            }

            #[inline]
            fn write_json(self, buf: &mut [u8]) -> usize {
                let mut itoa_buf = itoa::Buffer::new();
                let s = itoa_buf.format(self);
                buf[..s.len()].copy_from_slice(s.as_bytes());
                s.len()
            }
        }
    };
}

impl_json_scalar_byte!(u8);
impl_json_scalar_byte!(i8);
impl_json_scalar_int!(u16, reader::read_u16);
impl_json_scalar_int!(i16, reader::read_u16);
impl_json_scalar_int!(u32, reader::read_u32);
impl_json_scalar_int!(i32, reader::read_u32);
impl_json_scalar_int!(u64, reader::read_u64);
impl_json_scalar_int!(i64, reader::read_u64);

impl JsonScalar for f32 {
    const SIZE: usize = 4;
    const ZERO: Self = 0.0;

    #[inline]
    unsafe fn read_le(ptr: *const u8) -> Self {
        reader::read_f32(ptr)
    }

    #[inline]
    fn write_json(self, buf: &mut [u8]) -> usize {
        if !self.is_finite() {
            return write_non_finite(self as f64, buf);
        }
        #[cfg(feature = "hex-float")]
        {
            write_str(&format_hex_float_f32(self), buf)
        }
        #[cfg(not(feature = "hex-float"))]
        {
            let mut ryu_buf = ryu::Buffer::new();
            let s = ryu_buf.format_finite(self);
            buf[..s.len()].copy_from_slice(s.as_bytes());
            s.len()
        }
    }
}

impl JsonScalar for f64 {
    const SIZE: usize = 8;
    const ZERO: Self = 0.0;

    #[inline]
    unsafe fn read_le(ptr: *const u8) -> Self {
        reader::read_f64(ptr)
    }

    #[inline]
    fn write_json(self, buf: &mut [u8]) -> usize {
        if !self.is_finite() {
            return write_non_finite(self, buf);
        }
        #[cfg(feature = "hex-float")]
        {
            write_str(&format_hex_float_f64(self), buf)
        }
        #[cfg(not(feature = "hex-float"))]
        {
            let mut ryu_buf = ryu::Buffer::new();
            let s = ryu_buf.format_finite(self);
            buf[..s.len()].copy_from_slice(s.as_bytes());
            s.len()
        }
    }
}

#[cfg(feature = "hex-float")]
#[inline]
fn write_str(s: &str, buf: &mut [u8]) -> usize {
    buf[..s.len()].copy_from_slice(s.as_bytes());
    s.len()
}

/// C99 `%a`-style hex-float rendering, quoted as a JSON string (JSON has
/// no native hex-float syntax). Unlike glibc's `%a`, trailing mantissa
/// zeros are not trimmed to the shortest round-tripping form — this
/// prioritizes a direct bit-pattern reading over minimal width.
#[cfg(feature = "hex-float")]
fn format_hex_float_f64(value: f64) -> String {
    let bits = value.to_bits();
    let sign = if bits >> 63 == 1 { "-" } else { "" };
    let exp_bits = ((bits >> 52) & 0x7ff) as i64;
    let mantissa = bits & 0x000f_ffff_ffff_ffff;
    if exp_bits == 0 && mantissa == 0 {
        return format!("\"{sign}0x0p+0\"");
    }
    let (leading, exponent) = if exp_bits == 0 {
        (0u64, -1022i64)
    } else {
        (1u64, exp_bits - 1023)
    };
    let exp_sign = if exponent < 0 { "-" } else { "+" };
    format!("\"{sign}0x{leading}.{mantissa:013x}p{exp_sign}{}\"", exponent.abs())
}

#[cfg(feature = "hex-float")]
fn format_hex_float_f32(value: f32) -> String {
    let bits = value.to_bits();
    let sign = if bits >> 31 == 1 { "-" } else { "" };
    let exp_bits = ((bits >> 23) & 0xff) as i64;
    let mantissa = bits & 0x007f_ffff;
    if exp_bits == 0 && mantissa == 0 {
        return format!("\"{sign}0x0p+0\"");
    }
    let (leading, exponent) = if exp_bits == 0 {
        (0u64, -126i64)
    } else {
        (1u64, exp_bits - 127)
    };
    let exp_sign = if exponent < 0 { "-" } else { "+" };
    format!("\"{sign}0x{leading}.{mantissa:06x}p{exp_sign}{}\"", exponent.abs())
}

impl JsonScalar for bool {
    const SIZE: usize = 1;
    const ZERO: Self = false;

    #[inline]
    unsafe fn read_le(ptr: *const u8) -> Self {
        core::ptr::read(ptr) != 0
    }

    #[inline]
    fn write_json(self, buf: &mut [u8]) -> usize {
        let s: &[u8] = if self { b"true" } else { b"false" };
        buf[..s.len()].copy_from_slice(s);
        s.len()
    }
}

/// `nan`/`inf`/`-inf` are not valid JSON numbers, so they are rendered as
/// quoted strings, same as the reference implementation's handling of
/// non-finite floats.
fn write_non_finite(value: f64, buf: &mut [u8]) -> usize {
    if value.is_nan() {
        buf[..5].copy_from_slice(b"\"nan\"");
        5
    } else if value > 0.0 {
        buf[..5].copy_from_slice(b"\"inf\"");
        5
    } else {
        buf[..6].copy_from_slice(b"\"-inf\"");
        6
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered<T: JsonScalar>(v: T) -> String {
        let mut buf = [0u8; RESERVE];
        let n = v.write_json(&mut buf);
        String::from_utf8(buf[..n].to_vec()).unwrap()
    }

    #[test]
    fn integers_render_as_plain_decimal() {
        assert_eq!(rendered(0u8), "0");
        assert_eq!(rendered(255u8), "255");
        assert_eq!(rendered(-1i32), "-1");
        assert_eq!(rendered(i64::MIN), i64::MIN.to_string());
        assert_eq!(rendered(u64::MAX), u64::MAX.to_string());
    }

    #[test]
    fn bool_renders_as_keyword() {
        assert_eq!(rendered(true), "true");
        assert_eq!(rendered(false), "false");
    }

    #[test]
    fn non_finite_floats_render_as_quoted_strings() {
        assert_eq!(rendered(f64::NAN), "\"nan\"");
        assert_eq!(rendered(f64::INFINITY), "\"inf\"");
        assert_eq!(rendered(f64::NEG_INFINITY), "\"-inf\"");
    }

    #[test]
    fn zero_constants_match_default_bit_pattern() {
        assert_eq!(u32::ZERO, 0);
        assert_eq!(f64::ZERO, 0.0);
        assert_eq!(bool::ZERO, false);
    }
}
