//! RFC 4648 base64 encoding, chunked for interleaving with buffer flushes.
//!
//! Byte-vector fields are the one place this printer's *algorithm* — not
//! just its byte-plumbing — is genuinely in scope (§1 of the design spec
//! singles out base64 chunking as a tested property), so it is hand-rolled
//! here the same way the ported codec hand-rolls its own wire-format
//! algorithm instead of delegating to an external crate: the thing being
//! ported *is* the algorithm.
//!
//! The encoder is split into two primitives so callers can interleave
//! encoding with buffer flushes at 3-byte/4-character group boundaries,
//! which is the only way to avoid emitting spurious padding mid-stream:
//! - [`encode_groups`] encodes whole 3-byte groups with no padding.
//! - [`encode_final`] encodes the 0/1/2 leftover bytes, applying padding
//!   (`=`) only here, and only if requested.

/// RFC 4648 §4 standard alphabet.
pub const STANDARD_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// RFC 4648 §5 URL- and filename-safe alphabet.
pub const URL_SAFE_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Total encoded length (in output bytes) for `data_len` input bytes.
pub fn encoded_len(data_len: usize, padding: bool) -> usize {
    let groups = data_len / 3;
    let rem = data_len % 3;
    if rem == 0 {
        groups * 4
    } else if padding {
        groups * 4 + 4
    } else {
        groups * 4 + rem + 1
    }
}

/// Number of whole 3-byte groups that fit in `available` destination bytes
/// (rounded down to a multiple of 4 output characters).
#[inline]
pub fn groups_fitting(available: usize) -> usize {
    (available / 4).min(usize::MAX / 3)
}

/// Encode exactly `groups` whole 3-byte groups from `src` into `dst`,
/// writing no padding. `src` must hold at least `groups * 3` bytes and
/// `dst` at least `groups * 4` bytes.
pub fn encode_groups(alphabet: &[u8; 64], src: &[u8], dst: &mut [u8], groups: usize) {
    debug_assert!(src.len() >= groups * 3);
    debug_assert!(dst.len() >= groups * 4);
    for i in 0..groups {
        let b0 = src[i * 3];
        let b1 = src[i * 3 + 1];
        let b2 = src[i * 3 + 2];
        let o = i * 4;
        dst[o] = alphabet[(b0 >> 2) as usize];
        dst[o + 1] = alphabet[(((b0 & 0x03) << 4) | (b1 >> 4)) as usize];
        dst[o + 2] = alphabet[(((b1 & 0x0f) << 2) | (b2 >> 6)) as usize];
        dst[o + 3] = alphabet[(b2 & 0x3f) as usize];
    }
}

/// Encode the final 0, 1, or 2 leftover bytes, returning the number of
/// output bytes written. Writes `=` padding iff `padding` is true and the
/// group is not already a multiple of 3 (i.e. `src` is non-empty).
pub fn encode_final(alphabet: &[u8; 64], src: &[u8], dst: &mut [u8], padding: bool) -> usize {
    match src.len() {
        0 => 0,
        1 => {
            let b0 = src[0];
            dst[0] = alphabet[(b0 >> 2) as usize];
            dst[1] = alphabet[((b0 & 0x03) << 4) as usize];
            if padding {
                dst[2] = b'=';
                dst[3] = b'=';
                4
            } else {
                2
            }
        }
        2 => {
            let b0 = src[0];
            let b1 = src[1];
            dst[0] = alphabet[(b0 >> 2) as usize];
            dst[1] = alphabet[(((b0 & 0x03) << 4) | (b1 >> 4)) as usize];
            dst[2] = alphabet[((b1 & 0x0f) << 2) as usize];
            if padding {
                dst[3] = b'=';
                4
            } else {
                3
            }
        }
        _ => unreachable!("leftover group must be 0, 1, or 2 bytes"),
    }
}

/// One-shot encode, used by tests and by callers that already have the
/// whole payload in memory (the streaming field emitter uses
/// [`encode_groups`] / [`encode_final`] directly instead).
pub fn encode_to_vec(alphabet: &[u8; 64], data: &[u8], padding: bool) -> Vec<u8> {
    let mut out = vec![0u8; encoded_len(data.len(), padding)];
    let groups = data.len() / 3;
    encode_groups(alphabet, data, &mut out, groups);
    let tail = &data[groups * 3..];
    let written = encode_final(alphabet, tail, &mut out[groups * 4..], padding);
    out.truncate(groups * 4 + written);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_len_matches_rfc4648_examples() {
        assert_eq!(encoded_len(0, true), 0);
        assert_eq!(encoded_len(1, true), 4);
        assert_eq!(encoded_len(2, true), 4);
        assert_eq!(encoded_len(3, true), 4);
        assert_eq!(encoded_len(4, true), 8);
        assert_eq!(encoded_len(1, false), 2);
        assert_eq!(encoded_len(2, false), 3);
    }

    #[test]
    fn one_shot_matches_known_vectors() {
        assert_eq!(
            encode_to_vec(STANDARD_ALPHABET, b"", true),
            b"".to_vec()
        );
        assert_eq!(
            encode_to_vec(STANDARD_ALPHABET, b"f", true),
            b"Zg==".to_vec()
        );
        assert_eq!(
            encode_to_vec(STANDARD_ALPHABET, b"fo", true),
            b"Zm8=".to_vec()
        );
        assert_eq!(
            encode_to_vec(STANDARD_ALPHABET, b"foo", true),
            b"Zm9v".to_vec()
        );
        assert_eq!(
            encode_to_vec(STANDARD_ALPHABET, b"foob", true),
            b"Zm9vYg==".to_vec()
        );
        assert_eq!(
            encode_to_vec(STANDARD_ALPHABET, b"fooba", true),
            b"Zm9vYmE=".to_vec()
        );
        assert_eq!(
            encode_to_vec(STANDARD_ALPHABET, b"foobar", true),
            b"Zm9vYmFy".to_vec()
        );
    }

    #[test]
    fn url_safe_alphabet_substitutes_dash_and_underscore() {
        let data = [0xfb, 0xff, 0xbf];
        let std = encode_to_vec(STANDARD_ALPHABET, &data, true);
        let url = encode_to_vec(URL_SAFE_ALPHABET, &data, true);
        assert_eq!(std, b"+/+/".to_vec());
        assert_eq!(url, b"-_-_".to_vec());
    }

    #[test]
    fn chunked_encode_matches_one_shot_for_all_small_lengths() {
        for len in 0..50usize {
            let data: Vec<u8> = (0..len).map(|i| (i * 7 + 3) as u8).collect();
            let expected = encode_to_vec(STANDARD_ALPHABET, &data, true);

            // Simulate flushing every 8 output bytes.
            let mut out = Vec::new();
            let mut produced = data.len();
            let mut offset = 0usize;
            let _ = produced;
            loop {
                let remaining = data.len() - offset;
                let groups = groups_fitting(8).min(remaining / 3);
                if groups == 0 {
                    break;
                }
                let mut buf = [0u8; 8];
                encode_groups(STANDARD_ALPHABET, &data[offset..], &mut buf, groups);
                out.extend_from_slice(&buf[..groups * 4]);
                offset += groups * 3;
            }
            let tail = &data[offset..];
            let mut buf = [0u8; 4];
            let written = encode_final(STANDARD_ALPHABET, tail, &mut buf, true);
            out.extend_from_slice(&buf[..written]);
            produced = out.len();
            let _ = produced;

            assert_eq!(out, expected, "mismatch at len={len}");
        }
    }
}
