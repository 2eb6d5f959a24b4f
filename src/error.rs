//! Printer error codes and the error-latch primitive.
//!
//! Mirrors the `flatcc_json_printer_error_*` enum and
//! `flatcc_json_printer_error_string` lookup table from the reference
//! implementation. The enum carries no payload and the string mapping is a
//! small fixed table, so this is a hand-written `Display` impl rather than a
//! `thiserror` derive — matching the error-enum style used elsewhere in this
//! port for codecs with a latch-on-first-error model instead of per-call
//! `Result` propagation.

use core::fmt;

/// Error codes the printer can latch.
///
/// Once set on a [`crate::context::Printer`], the code is sticky: the core
/// never clears it. Every emitter remains safe to call after an error is
/// latched, but may produce no additional output (see §7 of the design
/// spec this crate implements).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Malformed root/nested header, identifier mismatch, or a field name
    /// exceeding [`crate::config::IDENTIFIER_LENGTH_MAX`].
    BadInput,
    /// The recursion budget (`ttl`) reached zero during table traversal.
    DeepRecursion,
    /// The fixed output buffer is full, or the dynamic buffer's
    /// reallocation failed.
    Overflow,
    /// Reserved for forward compatibility; never latched by this crate.
    Unknown,
}

impl ErrorCode {
    /// Human-readable name, matching `flatcc_json_printer_error_string`.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadInput => "bad input",
            ErrorCode::DeepRecursion => "deep recursion",
            ErrorCode::Overflow => "overflow",
            ErrorCode::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for ErrorCode {}

/// Sticky error slot. Set once, read many times; never cleared by the core.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorLatch(Option<ErrorCode>);

impl ErrorLatch {
    pub const fn new() -> Self {
        ErrorLatch(None)
    }

    /// Latch `code` iff no error has been latched yet. A no-op otherwise.
    #[inline]
    pub fn set(&mut self, code: ErrorCode) {
        if self.0.is_none() {
            self.0 = Some(code);
        }
    }

    #[inline]
    pub fn get(&self) -> Option<ErrorCode> {
        self.0
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}
