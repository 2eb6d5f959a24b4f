#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes as a candidate root buffer. accept_header only reads
    // the first 8 bytes and never follows the root offset, so this is safe
    // for fully arbitrary input — unlike traversing the table itself, which
    // requires a well-formed vtable chain (out of scope for fuzzing).
    let _ = fbjson_printer::accept_header(data, None);
    let _ = fbjson_printer::accept_header(data, Some(b"TEST"));
});
