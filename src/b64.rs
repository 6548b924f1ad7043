//! Base64 helpers over the `base64` crate engines.
//!
//! Encoding is total; decoding is strict and tolerates canonical padding
//! only, so any unknown character, misaligned length or bad padding count
//! surfaces as [`HawkError::Base64`].

use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine;

use crate::error::HawkError;

/// Exact length of the standard base64 encoding of `n` input bytes.
pub fn encoded_len(n: usize) -> usize {
    (n + 2) / 3 * 4
}

/// Exact decoded length of an `n`-byte encoding carrying `pad_count`
/// padding characters. Fails on misaligned input or an impossible
/// padding count.
pub fn decoded_len(n: usize, pad_count: usize) -> Result<usize, HawkError> {
    if n % 4 != 0 || pad_count > 2 || pad_count > n {
        return Err(HawkError::Base64(base64::DecodeError::InvalidLength(n)));
    }
    Ok(n / 4 * 3 - pad_count)
}

/// Encode with the standard alphabet (`A-Z a-z 0-9 + /`, `=` padding).
pub fn encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode standard-alphabet base64.
pub fn decode(input: &str) -> Result<Vec<u8>, HawkError> {
    Ok(STANDARD.decode(input)?)
}

/// Encode with the URL-safe alphabet (`A-Z a-z 0-9 - _`, `=` padding).
pub fn encode_urlsafe(data: &[u8]) -> String {
    URL_SAFE.encode(data)
}

/// Decode URL-safe base64.
pub fn decode_urlsafe(input: &str) -> Result<Vec<u8>, HawkError> {
    Ok(URL_SAFE.decode(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let inputs: [&[u8]; 5] = [b"", b"f", b"fo", b"foo", b"foobar"];
        for input in inputs {
            let encoded = encode(input);
            assert_eq!(encoded.len(), encoded_len(input.len()));
            assert_eq!(decode(&encoded).unwrap(), input);
        }
    }

    #[test]
    fn urlsafe_round_trip() {
        let data = [0xfbu8, 0xff, 0xfe, 0x00, 0x7f];
        let encoded = encode_urlsafe(&data);
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert_eq!(decode_urlsafe(&encoded).unwrap(), data);
    }

    #[test]
    fn encoded_len_matches_formula() {
        for n in 0..64 {
            assert_eq!(encoded_len(n), encode(&vec![0u8; n]).len());
        }
    }

    #[test]
    fn decoded_len_matches_decode() {
        for n in 0..64 {
            let encoded = encode(&vec![0u8; n]);
            let pad_count = encoded.bytes().filter(|&b| b == b'=').count();
            assert_eq!(decoded_len(encoded.len(), pad_count).unwrap(), n);
        }
        assert!(decoded_len(5, 0).is_err());
        assert!(decoded_len(4, 3).is_err());
    }

    #[test]
    fn decode_rejects_unknown_characters() {
        assert!(matches!(decode("ab!d"), Err(HawkError::Base64(_))));
    }

    #[test]
    fn decode_rejects_misaligned_length() {
        assert!(matches!(decode("abcde"), Err(HawkError::Base64(_))));
    }

    #[test]
    fn decode_rejects_bad_padding() {
        assert!(matches!(decode("ab=c"), Err(HawkError::Base64(_))));
    }
}
